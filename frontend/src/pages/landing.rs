use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cards::{
    checklist, course_card, feature_card, instructor_card, pricing_tier, render_cards,
};
use crate::components::icons::Icon;
use crate::components::links::{ExternalLink, MailLink};
use crate::components::parallax::ParallaxLayer;
use crate::components::reveal::Reveal;
use crate::config;
use crate::data::{COURSES, FEATURES, INSTRUCTORS, METHODOLOGY_POINTS, NAV_LINKS, PRICING_TIERS};
use crate::hooks::Trigger;
use crate::motion::RevealMotion;

const HEADER_SCROLL_THRESHOLD: f64 = 24.0;

#[function_component(Header)]
fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();

    html! {
        <header class={classes!("site-header", (scroll_y > HEADER_SCROLL_THRESHOLD).then(|| "scrolled"))}>
            <div class="header-content">
                <div class="brand">
                    <img src={config::LOGO_SRC} alt={config::SITE_NAME} class="brand-logo" width="48" height="48" />
                    <div class="brand-text">
                        <div class="brand-name">{"IBN RAJAB"}</div>
                        <div class="brand-sub">{"ACADEMY"}</div>
                    </div>
                </div>
                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.anchor} class="nav-link">{ link.label }</a>
                    }) }
                </nav>
                <ExternalLink href={config::COMMUNITY_URL} class="join-button">
                    <span>{"Join Now"}</span>
                    { Icon::ExternalLink.view("icon-xs") }
                </ExternalLink>
            </div>
        </header>
    }
}

fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-glows">
                <ParallaxLayer speed={-120.0} entry="start end" exit="end start" class="glow-layer">
                    <div class="glow glow-top-left"></div>
                </ParallaxLayer>
                <ParallaxLayer speed={-60.0} class="glow-layer">
                    <div class="glow glow-bottom-right"></div>
                </ParallaxLayer>
            </div>

            <div class="hero-content">
                <Reveal
                    motion={RevealMotion::fade_up(40.0).with_duration(1.0)}
                    trigger={Trigger::Mount}
                    class="hero-text"
                >
                    <div class="hero-badge">
                        { Icon::Feather.view("icon-xs accent") }
                        <span>{"Authentic Knowledge • Expert Instruction • Modern Platform"}</span>
                    </div>
                    <h1>
                        {"Classical Knowledge."}
                        <span class="hero-title-accent">{"Modern Experience."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Join Ibn Rajab Academy's premium online madrasa. Learn Qur'an, Arabic, and Islamic sciences \
                          from qualified instructors in an engaging, interactive environment."}
                    </p>
                    <div class="hero-cta-group">
                        <ExternalLink href={config::COMMUNITY_URL} class="cta-primary">
                            {"Enroll Now"}
                            { Icon::ArrowRight.view("icon-sm") }
                        </ExternalLink>
                        <a href="#courses" class="cta-secondary">
                            {"Explore Courses"}
                            { Icon::BookOpen.view("icon-sm") }
                        </a>
                    </div>
                </Reveal>

                <ParallaxLayer speed={-40.0}>
                    <Reveal
                        motion={RevealMotion::fade_up(30.0).with_duration(1.0).with_delay(0.2)}
                        class="feature-grid"
                    >
                        { render_cards(FEATURES, |_, feature| feature_card(feature)) }
                    </Reveal>
                </ParallaxLayer>
            </div>
        </section>
    }
}

fn section_heading(title: &'static str, intro: &'static str) -> Html {
    html! {
        <div class="section-heading">
            <Reveal>
                <h2>{ title }</h2>
            </Reveal>
            <Reveal motion={RevealMotion::fade_up(20.0).with_delay(0.1)}>
                <p>{ intro }</p>
            </Reveal>
        </div>
    }
}

fn courses() -> Html {
    html! {
        <section id="courses" class="courses">
            <div class="section-inner">
                { section_heading(
                    "Comprehensive Curriculum",
                    "Our courses are designed to take you from foundational knowledge to advanced understanding, \
                     following the traditional methodology with modern pedagogical excellence.",
                ) }
                <div class="course-grid">
                    { render_cards(COURSES, |_, course| course_card(course)) }
                </div>
            </div>
        </section>
    }
}

fn methodology() -> Html {
    html! {
        <section id="methodology" class="methodology">
            <div class="section-inner methodology-grid">
                <div>
                    <Reveal motion={RevealMotion::slide_in(-20.0)}>
                        <h2>{"Our Teaching Methodology"}</h2>
                    </Reveal>
                    <Reveal motion={RevealMotion::slide_in(-20.0).with_delay(0.1)} class="methodology-text">
                        <p>
                            {"Ibn Rajab Academy combines classical Islamic pedagogy with modern educational technology \
                              to create an immersive learning experience."}
                        </p>
                        <p>
                            {"Our instructors bring years of traditional training and teaching experience, ensuring \
                              authentic transmission of knowledge with engaging delivery."}
                        </p>
                        <div class="checklist">
                            { checklist(METHODOLOGY_POINTS) }
                        </div>
                    </Reveal>
                </div>

                <Reveal motion={RevealMotion::scale_in(0.95)} class="texts-panel-wrapper">
                    <div class="texts-panel">
                        <div class="texts-panel-inner">
                            { Icon::Scroll.view("icon-xl accent") }
                            <p class="texts-panel-title">{"Traditional Texts"}</p>
                            <p class="texts-panel-sub">{"Modern Delivery"}</p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn instructors() -> Html {
    html! {
        <section id="instructors" class="instructors">
            <div class="section-inner">
                { section_heading(
                    "Learn from Qualified Instructors",
                    "Our teachers hold ijāzāt and have years of experience in traditional Islamic education. \
                     Led by Ustādh Tayyib Mohammad, our team ensures authentic knowledge transmission.",
                ) }
                <div class="instructor-grid">
                    { render_cards(INSTRUCTORS, instructor_card) }
                </div>
            </div>
        </section>
    }
}

fn enroll() -> Html {
    html! {
        <section id="enroll" class="enroll">
            <div class="section-inner narrow">
                <Reveal>
                    <h2>{"Begin Your Journey Today"}</h2>
                </Reveal>
                <Reveal motion={RevealMotion::fade_up(20.0).with_delay(0.1)}>
                    <p class="enroll-text">
                        {"Join our vibrant community on Skool and start learning from qualified instructors. \
                          New cohorts begin monthly with flexible scheduling options."}
                    </p>
                </Reveal>
                <Reveal motion={RevealMotion::fade_up(20.0).with_delay(0.2)} class="enroll-actions">
                    <ExternalLink href={config::COMMUNITY_URL} class="cta-light">
                        {"Enroll on Skool"}
                        { Icon::ExternalLink.view("icon-sm") }
                    </ExternalLink>
                    <MailLink address={config::CONTACT_EMAIL} class="cta-outline-light">
                        { Icon::Mail.view("icon-sm") }
                        {"Contact Us"}
                    </MailLink>
                </Reveal>
                <Reveal motion={RevealMotion::fade().with_delay(0.3)}>
                    <p class="enroll-note">{ format!("Questions? Email us at {}", config::CONTACT_EMAIL) }</p>
                </Reveal>
            </div>
        </section>
    }
}

fn sponsorship() -> Html {
    html! {
        <section class="sponsorship">
            <div class="section-inner narrow">
                <Reveal class="sponsorship-content">
                    <div class="sponsorship-badge">{ Icon::Heart.view("icon-md accent") }</div>
                    <h2>{"Support Students of Knowledge"}</h2>
                    <p class="sponsorship-text">
                        {"Help us ensure that financial constraints never prevent sincere students from accessing \
                          authentic Islamic education. Your sponsorship can transform a life through knowledge."}
                    </p>

                    <div class="sponsorship-card">
                        <div class="pricing-grid">
                            { render_cards(PRICING_TIERS, |_, tier| pricing_tier(tier)) }
                        </div>
                        <p class="sponsorship-quote">
                            {"“The best of people are those who are most beneficial to others.” - Prophet Muhammad ﷺ"}
                        </p>
                        <MailLink
                            address={config::CONTACT_EMAIL}
                            class="cta-primary"
                            aria_label="Email Ibn Rajab Academy to sponsor a student"
                        >
                            { Icon::Mail.view("icon-sm") }
                            {"Sponsor a Student"}
                        </MailLink>
                        <p class="sponsorship-note">{"100% of donations go directly to student scholarships"}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    year: i32,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="section-inner footer-content">
                <div class="brand">
                    <img src={config::LOGO_SRC} alt={config::SITE_NAME} class="footer-logo" width="40" height="40" />
                    <div>
                        <div class="footer-copy">{ format!("© {} {}", props.year, config::SITE_NAME) }</div>
                        <div class="footer-sub">{"A subsidiary of 9alam Developments Inc."}</div>
                    </div>
                </div>
                <div class="footer-links">
                    <MailLink address={config::CONTACT_EMAIL} class="footer-link">
                        { config::CONTACT_EMAIL }
                    </MailLink>
                    <ExternalLink href={config::COMMUNITY_URL} class="footer-link">
                        {"Join on Skool"}
                        { Icon::ExternalLink.view("icon-xxs") }
                    </ExternalLink>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Computed once per mount
    let year = use_state(|| chrono::Local::now().year());

    html! {
        <main class="landing-page">
            <Header />
            { hero() }
            { courses() }
            { methodology() }
            { instructors() }
            { enroll() }
            { sponsorship() }
            <Footer year={*year} />

            <style>
                {r#"
                    .landing-page {
                        --cream: #f1e9de;
                        --brown: #5b2f2a;
                        --brown-dark: #3f1f1b;
                        --accent: #8b5a3c;
                        color: var(--brown);
                        background: var(--cream);
                    }

                    .landing-page ::selection {
                        background: var(--brown);
                        color: var(--cream);
                    }

                    .icon { display: inline-block; flex-shrink: 0; }
                    .icon-xxs { width: 12px; height: 12px; }
                    .icon-xs { width: 14px; height: 14px; }
                    .icon-sm { width: 20px; height: 20px; }
                    .icon-md { width: 32px; height: 32px; }
                    .icon-xl { width: 96px; height: 96px; margin: 0 auto 16px; }
                    .accent { color: var(--accent); }

                    .parallax-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                    }

                    /* Header */
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        backdrop-filter: blur(16px);
                        background: rgba(241, 233, 222, 0.9);
                        border-bottom: 1px solid rgba(91, 47, 42, 0.1);
                        transition: box-shadow 0.3s ease;
                    }

                    .site-header.scrolled {
                        box-shadow: 0 4px 20px rgba(91, 47, 42, 0.08);
                    }

                    .header-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 32px;
                        height: 80px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }

                    .brand-logo { height: 48px; width: auto; }

                    .brand-name {
                        font-weight: 700;
                        font-size: 1.125rem;
                        letter-spacing: 0.05em;
                    }

                    .brand-sub {
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        color: var(--accent);
                    }

                    .header-nav {
                        display: flex;
                        gap: 32px;
                        font-size: 0.875rem;
                    }

                    .nav-link {
                        color: rgba(91, 47, 42, 0.7);
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .nav-link:hover { color: var(--brown); }

                    .join-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        font-size: 0.875rem;
                        background: var(--brown);
                        color: var(--cream);
                        padding: 10px 20px;
                        border-radius: 9999px;
                        text-decoration: none;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: background 0.2s;
                    }

                    .join-button:hover { background: var(--brown-dark); }

                    /* Hero */
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        background: linear-gradient(to bottom, var(--cream), #ffffff, var(--cream));
                    }

                    .hero-glows { position: absolute; inset: 0; }

                    .glow-layer {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                    }

                    .glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.3;
                    }

                    .glow-top-left {
                        top: 80px;
                        left: 80px;
                        width: 384px;
                        height: 384px;
                        background: radial-gradient(circle, rgba(91, 47, 42, 0.2) 0%, transparent 70%);
                    }

                    .glow-bottom-right {
                        bottom: 80px;
                        right: 80px;
                        width: 320px;
                        height: 320px;
                        background: radial-gradient(circle, rgba(139, 90, 60, 0.2) 0%, transparent 70%);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 128px 24px 80px;
                    }

                    .hero-text {
                        text-align: center;
                        max-width: 896px;
                        margin: 0 auto;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        border-radius: 9999px;
                        border: 1px solid rgba(139, 90, 60, 0.3);
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(8px);
                        padding: 8px 16px;
                        font-size: 0.75rem;
                        letter-spacing: 0.025em;
                        margin-bottom: 32px;
                    }

                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        letter-spacing: -0.025em;
                        margin-bottom: 24px;
                    }

                    .hero-title-accent {
                        display: block;
                        color: var(--accent);
                        margin-top: 8px;
                    }

                    .hero-subtitle {
                        font-size: 1.125rem;
                        color: rgba(91, 47, 42, 0.7);
                        max-width: 672px;
                        margin: 0 auto 40px;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                        justify-content: center;
                    }

                    .cta-primary,
                    .cta-secondary,
                    .cta-light,
                    .cta-outline-light {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        padding: 16px 32px;
                        border-radius: 9999px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }

                    .cta-primary {
                        background: var(--brown);
                        color: var(--cream);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .cta-primary:hover {
                        background: var(--brown-dark);
                        transform: scale(1.05);
                    }

                    .cta-secondary {
                        border: 2px solid rgba(91, 47, 42, 0.3);
                        color: var(--brown);
                    }

                    .cta-secondary:hover {
                        background: rgba(255, 255, 255, 0.6);
                        border-color: rgba(91, 47, 42, 0.5);
                    }

                    .feature-grid {
                        margin: 80px auto 0;
                        max-width: 1024px;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 24px;
                    }

                    .feature-card {
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(8px);
                        border-radius: 16px;
                        padding: 24px;
                        border: 1px solid rgba(91, 47, 42, 0.1);
                        transition: box-shadow 0.3s;
                    }

                    .feature-card:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }

                    .feature-icon {
                        width: 32px;
                        height: 32px;
                        color: var(--accent);
                        margin-bottom: 12px;
                    }

                    .feature-card h3 { font-weight: 600; margin-bottom: 8px; }

                    .feature-card p {
                        font-size: 0.875rem;
                        color: rgba(91, 47, 42, 0.6);
                    }

                    /* Sections */
                    .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 24px;
                    }

                    .section-inner.narrow {
                        max-width: 1024px;
                        text-align: center;
                    }

                    .section-heading {
                        text-align: center;
                        max-width: 768px;
                        margin: 0 auto 64px;
                    }

                    .landing-page h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 16px;
                    }

                    .section-heading p { color: rgba(91, 47, 42, 0.7); }

                    .courses,
                    .methodology,
                    .instructors,
                    .enroll,
                    .sponsorship {
                        position: relative;
                        padding: 128px 0;
                    }

                    .courses { background: linear-gradient(to bottom, var(--cream), #ffffff); }

                    .course-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 32px;
                    }

                    .course-card {
                        position: relative;
                        border-radius: 16px;
                        border: 1px solid rgba(91, 47, 42, 0.2);
                        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.5), rgba(241, 233, 222, 0.3));
                        padding: 32px;
                    }

                    .course-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }

                    .course-card-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 16px;
                        background: linear-gradient(to top right, rgba(139, 90, 60, 0.05), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }

                    .course-card:hover .course-card-glow { opacity: 1; }

                    .course-card-body { position: relative; z-index: 10; }

                    .course-card-header {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        margin-bottom: 16px;
                    }

                    .course-card-header h3 { font-size: 1.25rem; font-weight: 600; }

                    .course-icon {
                        padding: 12px;
                        border-radius: 9999px;
                        background: rgba(91, 47, 42, 0.1);
                        transition: background 0.2s;
                    }

                    .course-card:hover .course-icon { background: rgba(91, 47, 42, 0.2); }

                    .course-icon-svg { width: 24px; height: 24px; }

                    .course-description {
                        color: rgba(91, 47, 42, 0.7);
                        margin-bottom: 16px;
                    }

                    .topic-list {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                    }

                    .topic {
                        display: flex;
                        align-items: flex-start;
                        gap: 8px;
                        font-size: 0.875rem;
                        color: rgba(91, 47, 42, 0.6);
                    }

                    .topic-check {
                        width: 16px;
                        height: 16px;
                        margin-top: 2px;
                        color: var(--accent);
                    }

                    /* Methodology */
                    .methodology { background: #ffffff; }

                    .methodology-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 48px;
                        align-items: center;
                    }

                    .methodology-text {
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                        color: rgba(91, 47, 42, 0.7);
                    }

                    .checklist {
                        padding-top: 24px;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }

                    .checklist-item {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        color: rgba(91, 47, 42, 0.8);
                    }

                    .checklist-icon {
                        width: 20px;
                        height: 20px;
                        color: var(--accent);
                    }

                    .texts-panel {
                        aspect-ratio: 1 / 1;
                        border-radius: 24px;
                        background: linear-gradient(to bottom right, rgba(91, 47, 42, 0.1), rgba(139, 90, 60, 0.1));
                        padding: 48px;
                        border: 1px solid rgba(91, 47, 42, 0.1);
                    }

                    .texts-panel-inner {
                        height: 100%;
                        width: 100%;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.5);
                        backdrop-filter: blur(8px);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }

                    .texts-panel-title { font-weight: 600; font-size: 1.125rem; }

                    .texts-panel-sub {
                        color: rgba(91, 47, 42, 0.6);
                        font-size: 0.875rem;
                        margin-top: 8px;
                    }

                    /* Instructors */
                    .instructors { background: linear-gradient(to bottom, #ffffff, var(--cream)); }

                    .instructor-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 32px;
                    }

                    .instructor-card {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 32px;
                        border: 1px solid rgba(91, 47, 42, 0.1);
                        text-align: center;
                    }

                    .instructor-card:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }

                    .instructor-avatar {
                        width: 96px;
                        height: 96px;
                        margin: 0 auto 16px;
                        border-radius: 9999px;
                        background: linear-gradient(to bottom right, rgba(91, 47, 42, 0.2), rgba(139, 90, 60, 0.2));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .instructor-avatar-icon { width: 40px; height: 40px; }

                    .instructor-card h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 4px;
                    }

                    .instructor-role {
                        color: var(--accent);
                        font-size: 0.875rem;
                        margin-bottom: 12px;
                    }

                    .instructor-specialties {
                        color: rgba(91, 47, 42, 0.6);
                        font-size: 0.875rem;
                    }

                    /* Enroll */
                    .enroll {
                        background: linear-gradient(to bottom right, var(--brown), var(--brown-dark));
                        color: var(--cream);
                    }

                    .enroll-text {
                        color: rgba(241, 233, 222, 0.8);
                        max-width: 672px;
                        margin: 0 auto 40px;
                    }

                    .enroll-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                        justify-content: center;
                        align-items: center;
                    }

                    .cta-light {
                        background: var(--cream);
                        color: var(--brown);
                        font-weight: 600;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }

                    .cta-light:hover {
                        background: #ffffff;
                        transform: scale(1.05);
                    }

                    .cta-outline-light {
                        border: 2px solid rgba(241, 233, 222, 0.3);
                        color: var(--cream);
                    }

                    .cta-outline-light:hover { background: rgba(241, 233, 222, 0.1); }

                    .enroll-note {
                        font-size: 0.75rem;
                        color: rgba(241, 233, 222, 0.5);
                        margin-top: 24px;
                    }

                    /* Sponsorship */
                    .sponsorship { background: linear-gradient(to bottom, var(--cream), #ffffff); }

                    .sponsorship-badge {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 64px;
                        height: 64px;
                        border-radius: 9999px;
                        background: rgba(139, 90, 60, 0.1);
                        margin-bottom: 24px;
                    }

                    .sponsorship-text {
                        color: rgba(91, 47, 42, 0.7);
                        max-width: 672px;
                        margin: 0 auto 32px;
                    }

                    .sponsorship-card {
                        background: #ffffff;
                        border-radius: 24px;
                        padding: 40px;
                        border: 1px solid rgba(91, 47, 42, 0.1);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        max-width: 768px;
                        margin: 0 auto;
                    }

                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 24px;
                        margin-bottom: 32px;
                    }

                    .pricing-amount {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: var(--accent);
                        margin-bottom: 8px;
                    }

                    .pricing-description {
                        font-size: 0.875rem;
                        color: rgba(91, 47, 42, 0.6);
                    }

                    .sponsorship-quote {
                        font-size: 0.875rem;
                        font-style: italic;
                        color: rgba(91, 47, 42, 0.7);
                        margin-bottom: 24px;
                    }

                    .sponsorship-note {
                        font-size: 0.75rem;
                        color: rgba(91, 47, 42, 0.5);
                        margin-top: 16px;
                    }

                    /* Footer */
                    .site-footer {
                        background: var(--brown-dark);
                        padding: 48px 0;
                        border-top: 1px solid var(--brown);
                    }

                    .footer-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 24px;
                    }

                    .footer-logo { height: 40px; width: auto; opacity: 0.8; }

                    .footer-copy {
                        font-size: 0.875rem;
                        color: rgba(241, 233, 222, 0.7);
                    }

                    .footer-sub {
                        font-size: 0.75rem;
                        color: rgba(241, 233, 222, 0.5);
                    }

                    .footer-links {
                        display: flex;
                        align-items: center;
                        gap: 24px;
                    }

                    .footer-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 4px;
                        font-size: 0.875rem;
                        color: rgba(241, 233, 222, 0.6);
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-link:hover { color: var(--cream); }

                    @media (max-width: 768px) {
                        .header-nav { display: none; }
                        .brand-text { display: none; }

                        .feature-grid,
                        .course-grid,
                        .methodology-grid,
                        .instructor-grid,
                        .pricing-grid {
                            grid-template-columns: 1fr;
                        }

                        .courses,
                        .methodology,
                        .instructors,
                        .enroll,
                        .sponsorship {
                            padding: 96px 0;
                        }

                        .footer-content,
                        .footer-links {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </main>
    }
}

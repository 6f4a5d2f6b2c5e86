use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::reveal::Reveal;
use crate::data::{Course, Feature, Instructor, PricingTier};
use crate::motion::RevealMotion;

/// One node per item, in the order given.
pub fn render_cards<T>(items: &[T], card: impl Fn(usize, &T) -> Html) -> Html {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| card(index, item))
        .collect::<Html>()
}

pub fn topic_list(course: &Course) -> Html {
    course
        .topics
        .iter()
        .map(|topic| {
            html! {
                <li class="topic">
                    { Icon::CheckCircle.view("topic-check") }
                    <span>{ *topic }</span>
                </li>
            }
        })
        .collect::<Html>()
}

pub fn checklist(items: &[&'static str]) -> Html {
    items
        .iter()
        .map(|item| {
            html! {
                <div class="checklist-item">
                    { Icon::CheckCircle.view("checklist-icon") }
                    <span>{ *item }</span>
                </div>
            }
        })
        .collect::<Html>()
}

pub fn course_card(course: &Course) -> Html {
    html! {
        <Reveal motion={RevealMotion::fade_up(20.0)} class="course-card">
            <div class="course-card-glow"></div>
            <div class="course-card-body">
                <div class="course-card-header">
                    <div class="course-icon">{ course.icon.view("course-icon-svg") }</div>
                    <h3>{ course.title }</h3>
                </div>
                <p class="course-description">{ course.description }</p>
                <ul class="topic-list">
                    { topic_list(course) }
                </ul>
            </div>
        </Reveal>
    }
}

pub fn feature_card(feature: &Feature) -> Html {
    html! {
        <div class="feature-card">
            { feature.icon.view("feature-icon") }
            <h3>{ feature.title }</h3>
            <p>{ feature.text }</p>
        </div>
    }
}

pub fn instructor_card(index: usize, instructor: &Instructor) -> Html {
    let motion = RevealMotion::fade_up(20.0).with_delay(index as f64 * 0.1);
    html! {
        <Reveal motion={motion} class="instructor-card">
            <div class="instructor-avatar">{ Icon::Users.view("instructor-avatar-icon") }</div>
            <h3>{ instructor.name }</h3>
            <p class="instructor-role">{ instructor.role }</p>
            <p class="instructor-specialties">{ instructor.specialties }</p>
        </Reveal>
    }
}

pub fn pricing_tier(tier: &PricingTier) -> Html {
    html! {
        <div class="pricing-tier">
            <div class="pricing-amount">{ tier.amount }</div>
            <div class="pricing-description">{ tier.description }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{COURSES, FEATURES, INSTRUCTORS, PRICING_TIERS};
    use pretty_assertions::assert_eq;
    use yew::virtual_dom::{VNode, VText};

    fn nodes(html: &Html) -> &[VNode] {
        match html {
            VNode::VList(list) => list,
            other => panic!("expected a list of cards, got {:?}", other),
        }
    }

    fn text(node: &VNode) -> String {
        match node {
            VNode::VText(text) => text.text.to_string(),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn one_node_per_item_in_input_order() {
        let titles = ["gamma", "alpha", "beta", "alpha"];
        let rendered = render_cards(&titles, |_, title| VNode::VText(VText::new(*title)));

        let texts: Vec<String> = nodes(&rendered).iter().map(text).collect();
        assert_eq!(texts, vec!["gamma", "alpha", "beta", "alpha"]);
    }

    #[test]
    fn card_receives_its_index() {
        let rendered = render_cards(INSTRUCTORS, |index, instructor| {
            VNode::VText(VText::new(format!("{}:{}", index, instructor.role)))
        });

        let texts: Vec<String> = nodes(&rendered).iter().map(text).collect();
        assert_eq!(
            texts,
            vec![
                "0:Lead Instructor",
                "1:Specialized Topics",
                "2:Student Support"
            ]
        );
    }

    #[test]
    fn course_catalog_renders_six_cards_with_four_topics() {
        let cards = render_cards(COURSES, |_, course| course_card(course));
        assert_eq!(nodes(&cards).len(), 6);

        for course in COURSES {
            assert_eq!(nodes(&topic_list(course)).len(), 4, "{}", course.title);
        }
    }

    #[test]
    fn topic_count_follows_the_record() {
        let short = Course {
            icon: Icon::Book,
            title: "Short",
            description: "Two topics only",
            topics: &["one", "two"],
        };
        assert_eq!(nodes(&topic_list(&short)).len(), 2);
    }

    #[test]
    fn other_sets_render_one_card_each() {
        assert_eq!(nodes(&render_cards(FEATURES, |_, f| feature_card(f))).len(), 3);
        assert_eq!(nodes(&render_cards(INSTRUCTORS, instructor_card)).len(), 3);
        assert_eq!(nodes(&render_cards(PRICING_TIERS, |_, t| pricing_tier(t))).len(), 3);
    }

    #[test]
    fn empty_set_renders_nothing() {
        let none: [PricingTier; 0] = [];
        assert!(nodes(&render_cards(&none, |_, t| pricing_tier(t))).is_empty());
    }
}

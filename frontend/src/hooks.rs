use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, Window};
use yew::prelude::*;

use crate::motion::{scroll_progress, RegionGeometry, RevealPhase, RevealState, ScrollOffset};

// `load` catches layout shifts from late stylesheets and fonts that move a
// region without scrolling
const VIEWPORT_EVENTS: [&str; 3] = ["scroll", "resize", "load"];

// Roughly one frame, so the initial style is painted before the transition starts
const MOUNT_REVEAL_DELAY_MS: u32 = 16;

/// What starts a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// First time the block is at least minimally visible.
    #[default]
    InView,
    /// Right after the block is first painted.
    Mount,
}

fn measure(window: &Window, node: &NodeRef) -> Option<RegionGeometry> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(RegionGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}

/// Window scroll/resize/load subscription, removed again on drop.
struct ViewportListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ViewportListener {
    fn attach(window: Window, callback: Closure<dyn Fn()>) -> Self {
        for event in VIEWPORT_EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("Failed to listen for {} events: {:?}", event, err);
            }
        }
        Self { window, callback }
    }
}

impl Drop for ViewportListener {
    fn drop(&mut self) {
        for event in VIEWPORT_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Progress of the element behind `node` through the `offset` band, updated
/// on every scroll and resize of the window and once more on page load.
#[hook]
pub fn use_scroll_progress(node: NodeRef, offset: ScrollOffset) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, offset)| {
                let listener = match web_sys::window() {
                    Some(window) => {
                        let sample = {
                            let window = window.clone();
                            let node = node.clone();
                            let offset = *offset;
                            move || {
                                if let Some(geometry) = measure(&window, &node) {
                                    progress.set(scroll_progress(&geometry, &offset));
                                }
                            }
                        };
                        // Initial sample, the page may load already scrolled
                        sample();
                        debug!("Tracking scroll progress from [{}] to [{}]", offset.entry, offset.exit);
                        Some(ViewportListener::attach(window, Closure::<dyn Fn()>::new(sample)))
                    }
                    None => {
                        warn!("No window, scroll progress stays at 0");
                        None
                    }
                };

                move || drop(listener)
            },
            (node, offset),
        );
    }

    *progress
}

/// Intersection observer that disconnects on drop.
struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

enum RevealSubscription {
    Timer { _timeout: Timeout },
    Observer { _observer: InViewObserver },
    Idle,
}

fn reveal_after_paint(phase: UseStateHandle<RevealPhase>) -> RevealSubscription {
    let mut state = RevealState::default();
    let timeout = Timeout::new(MOUNT_REVEAL_DELAY_MS, move || {
        if state.observe(true) {
            phase.set(state.phase());
        }
    });
    RevealSubscription::Timer { _timeout: timeout }
}

fn reveal_when_visible(node: &NodeRef, phase: UseStateHandle<RevealPhase>) -> RevealSubscription {
    let Some(element) = node.cast::<Element>() else {
        warn!("Reveal target is not mounted, showing it without animation");
        phase.set(RevealPhase::Revealed);
        return RevealSubscription::Idle;
    };

    let mut state = RevealState::default();
    let on_change = phase.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if state.observe(visible) {
                on_change.set(state.phase());
                observer.disconnect();
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&element);
            RevealSubscription::Observer {
                _observer: InViewObserver {
                    observer,
                    _callback: callback,
                },
            }
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), revealing immediately", err);
            phase.set(RevealPhase::Revealed);
            RevealSubscription::Idle
        }
    }
}

/// Reveal phase of the element behind `node`. Moves to `Revealed` once and
/// stays there for the life of the component.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: Trigger) -> RevealPhase {
    let phase = use_state_eq(RevealPhase::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |(node, trigger)| {
                let subscription = match (*phase, trigger) {
                    (RevealPhase::Revealed, _) => RevealSubscription::Idle,
                    (RevealPhase::Pending, Trigger::Mount) => reveal_after_paint(phase),
                    (RevealPhase::Pending, Trigger::InView) => reveal_when_visible(node, phase),
                };

                move || drop(subscription)
            },
            (node, trigger),
        );
    }

    *phase
}


#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, Window};
    use yew::prelude::*;

    use crate::components::parallax::ParallaxLayer;
    use crate::components::reveal::Reveal;
    use crate::hooks::Trigger;

    wasm_bindgen_test_configure!(run_in_browser);

    const SPEED: f64 = -100.0;

    #[derive(Properties, PartialEq)]
    struct BlockProps {
        trigger: Trigger,
    }

    #[function_component(RevealBlock)]
    fn reveal_block(props: &BlockProps) -> Html {
        html! {
            <Reveal trigger={props.trigger} class="block">
                <p>{"block"}</p>
            </Reveal>
        }
    }

    #[function_component(Layer)]
    fn layer() -> Html {
        html! {
            <ParallaxLayer speed={SPEED}>
                <div style="height: 200px;"></div>
            </ParallaxLayer>
        }
    }

    fn window() -> Window {
        web_sys::window().unwrap()
    }

    fn append_div(style: &str) -> Element {
        let document = window().document().unwrap();
        let div = document.create_element("div").unwrap();
        div.set_attribute("style", style).unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    fn spacer(height: u32) -> Element {
        append_div(&format!("height: {}px;", height))
    }

    fn mount_block(trigger: Trigger) -> Element {
        let root = append_div("");
        yew::Renderer::<RevealBlock>::with_root_and_props(root.clone(), BlockProps { trigger })
            .render();
        root
    }

    fn block_style(root: &Element) -> String {
        root.query_selector(".block")
            .unwrap()
            .and_then(|block| block.get_attribute("style"))
            .unwrap_or_default()
    }

    fn inner(root: &Element) -> Element {
        root.query_selector(".parallax-inner").unwrap().unwrap()
    }

    fn translate_y(element: &Element) -> f64 {
        element
            .get_attribute("style")
            .unwrap_or_default()
            .split("translate3d(0px, ")
            .nth(1)
            .and_then(|rest| rest.split("px").next())
            .and_then(|y| y.parse().ok())
            .unwrap()
    }

    // Puts the element's top edge at the top of the viewport.
    fn scroll_to(element: &Element) {
        let window = window();
        let y = window.scroll_y().unwrap() + element.get_bounding_client_rect().top();
        window.scroll_to_with_x_and_y(0.0, y);
    }

    fn clean_up(nodes: &[&Element]) {
        for node in nodes {
            node.remove();
        }
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    #[wasm_bindgen_test]
    async fn mount_trigger_reveals_after_first_paint() {
        let root = mount_block(Trigger::Mount);
        TimeoutFuture::new(200).await;
        assert!(block_style(&root).starts_with("opacity: 1;"));
        clean_up(&[&root]);
    }

    #[wasm_bindgen_test]
    async fn visible_block_reveals_and_stays_revealed() {
        let root = mount_block(Trigger::InView);
        TimeoutFuture::new(300).await;
        assert!(block_style(&root).starts_with("opacity: 1;"));

        root.set_attribute("style", "display: none").unwrap();
        TimeoutFuture::new(200).await;
        assert!(block_style(&root).starts_with("opacity: 1;"));
        clean_up(&[&root]);
    }

    #[wasm_bindgen_test]
    async fn block_below_the_fold_reveals_once_on_scroll() {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        let above = spacer(4000);
        let root = mount_block(Trigger::InView);
        let below = spacer(4000);
        TimeoutFuture::new(300).await;
        assert!(block_style(&root).starts_with("opacity: 0;"));

        scroll_to(&root);
        TimeoutFuture::new(300).await;
        assert!(block_style(&root).starts_with("opacity: 1;"));

        window().scroll_to_with_x_and_y(0.0, 0.0);
        TimeoutFuture::new(300).await;
        assert!(block_style(&root).starts_with("opacity: 1;"));

        scroll_to(&root);
        TimeoutFuture::new(300).await;
        assert!(block_style(&root).starts_with("opacity: 1;"));

        clean_up(&[&above, &root, &below]);
    }

    #[wasm_bindgen_test]
    async fn layer_moves_with_scroll_within_speed() {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        let above = spacer(4000);
        let root = append_div("");
        let below = spacer(4000);
        yew::Renderer::<Layer>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        let before = translate_y(&inner(&root));
        assert_eq!(before, 0.0);

        scroll_to(&root);
        TimeoutFuture::new(200).await;
        let after = translate_y(&inner(&root));
        assert!(after < before, "{} should be below {}", after, before);
        assert!((SPEED..=0.0).contains(&after), "{} outside [{}, 0]", after, SPEED);

        clean_up(&[&above, &root, &below]);
    }

    #[wasm_bindgen_test]
    async fn unmounted_layer_stops_tracking() {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        let above = spacer(4000);
        let root = append_div("");
        let below = spacer(4000);
        let handle = yew::Renderer::<Layer>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;

        scroll_to(&root);
        TimeoutFuture::new(200).await;
        let layer = inner(&root);
        let style = layer.get_attribute("style");

        handle.destroy();
        window().scroll_to_with_x_and_y(0.0, 0.0);
        window().dispatch_event(&Event::new("resize").unwrap()).unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(layer.get_attribute("style"), style);

        clean_up(&[&above, &root, &below]);
    }

    #[wasm_bindgen_test]
    async fn load_resamples_after_layout_shift() {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        let above = spacer(4000);
        let root = append_div("");
        let below = spacer(4000);
        yew::Renderer::<Layer>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        let before = translate_y(&inner(&root));

        // Layout moves the region into view without any scrolling
        above.set_attribute("style", "height: 0px;").unwrap();
        TimeoutFuture::new(100).await;
        assert_eq!(translate_y(&inner(&root)), before);

        window().dispatch_event(&Event::new("load").unwrap()).unwrap();
        TimeoutFuture::new(200).await;
        let after = translate_y(&inner(&root));
        assert!(after < before, "{} should be below {}", after, before);
        assert!((SPEED..=0.0).contains(&after));

        clean_up(&[&above, &root, &below]);
    }
}

use log::warn;
use yew::prelude::*;

use crate::hooks::use_scroll_progress;
use crate::motion::{parallax_offset, translate_y_style, ScrollOffset};

#[derive(Properties, PartialEq)]
pub struct ParallaxLayerProps {
    /// Total vertical travel in pixels over the scroll band.
    #[prop_or(-100.0)]
    pub speed: f64,
    /// Boundary where progress starts, e.g. `"start end"`.
    #[prop_or("start end")]
    pub entry: &'static str,
    /// Boundary where progress reaches 1, e.g. `"end start"`.
    #[prop_or("end start")]
    pub exit: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Band for an `entry`/`exit` pair; malformed boundaries fall back to the
/// whole trip through the viewport.
pub fn scroll_band(entry: &str, exit: &str) -> ScrollOffset {
    ScrollOffset::parse(entry, exit).unwrap_or_else(|err| {
        warn!("Bad scroll band [{}] -> [{}]: {}, using the default", entry, exit, err);
        ScrollOffset::default()
    })
}

// The outer element is measured, the inner one moved. Measuring the moved
// element would feed its own transform back into the progress.
#[function_component(ParallaxLayer)]
pub fn parallax_layer(props: &ParallaxLayerProps) -> Html {
    let node = use_node_ref();
    let band = use_memo(|(entry, exit)| scroll_band(entry, exit), (props.entry, props.exit));
    let progress = use_scroll_progress(node.clone(), *band);
    let style = translate_y_style(parallax_offset(progress, props.speed));

    html! {
        <div ref={node} class={props.class.clone()}>
            <div class="parallax-inner" style={style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::offset::Boundary;
    use pretty_assertions::assert_eq;

    #[test]
    fn band_follows_the_boundary_strings() {
        assert_eq!(
            scroll_band("start start", "center start"),
            ScrollOffset {
                entry: Boundary::new(0.0, 0.0),
                exit: Boundary::new(0.5, 0.0),
            }
        );
    }

    #[test]
    fn default_props_give_the_default_band() {
        assert_eq!(scroll_band("start end", "end start"), ScrollOffset::default());
    }

    #[test]
    fn malformed_band_falls_back_to_default() {
        assert_eq!(scroll_band("top end", "end start"), ScrollOffset::default());
        assert_eq!(scroll_band("start end", "end 150%"), ScrollOffset::default());
        assert_eq!(scroll_band("start", ""), ScrollOffset::default());
    }
}

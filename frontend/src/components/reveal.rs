use yew::prelude::*;

use crate::hooks::{use_reveal, Trigger};
use crate::motion::RevealMotion;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub trigger: Trigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let phase = use_reveal(node.clone(), props.trigger);

    html! {
        <div ref={node} class={props.class.clone()} style={props.motion.style(phase)}>
            { for props.children.iter() }
        </div>
    }
}

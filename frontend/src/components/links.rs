use yew::prelude::*;

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that opens in a new browsing context without handing it an opener.
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={props.class.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct MailLinkProps {
    pub address: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MailLink)]
pub fn mail_link(props: &MailLinkProps) -> Html {
    html! {
        <a
            href={mailto(&props.address)}
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_has_no_query() {
        assert_eq!(
            mailto("info@ibnrajabacademy.com"),
            "mailto:info@ibnrajabacademy.com"
        );
    }
}

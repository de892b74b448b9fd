use yew::prelude::*;

use crate::config;
use crate::content::BOOKING_LABEL;

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub visible: bool,
}

/// A hidden button must also leave the tab order.
fn tab_index(visible: bool) -> Option<&'static str> {
    (!visible).then_some("-1")
}

// Always rendered so the slide-in transition can run; hidden via class.
#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    html! {
        <div
            class={classes!("floating-cta", props.visible.then(|| "floating-cta-visible"))}
            aria-hidden={(!props.visible).to_string()}
        >
            <a
                href={config::booking_url()}
                class="floating-cta-button"
                tabindex={tab_index(props.visible)}
            >
                <span>{BOOKING_LABEL}</span>
                <span class="chevron">{"›"}</span>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_button_is_not_focusable() {
        assert_eq!(tab_index(false), Some("-1"));
        assert_eq!(tab_index(true), None);
    }
}

use yew::prelude::*;

use crate::config;
use crate::content::{AUTHOR, BOOKING_LABEL, BRAND};

const SECTIONS: [(&str, &str); 3] = [
    ("#about", "占術と物語"),
    ("#faq", "よくある質問"),
    ("#price", "鑑定依頼"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        menu_open,
        on_toggle,
        on_close,
    } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    // Anchor navigation still happens; the drawer just closes behind it.
    let close_menu = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">
                    {BRAND}{" "}<span class="nav-logo-accent">{AUTHOR}</span>
                </div>

                <div class="nav-links">
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>

                <div class="nav-actions">
                    <a href={config::booking_url()} class="nav-booking">{BOOKING_LABEL}</a>
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label="メニュー開閉"
                        aria-expanded={menu_open.to_string()}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="drawer-backdrop" onclick={close_menu.clone()}></div>
            }
            <div class={classes!("drawer", menu_open.then(|| "drawer-open"))}>
                <div class="drawer-links">
                    { for SECTIONS.iter().take(2).map(|(href, label)| html! {
                        <a href={*href} class="drawer-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href={config::booking_url()} class="drawer-booking">{BOOKING_LABEL}</a>
                </div>
            </div>
        </nav>
    }
}

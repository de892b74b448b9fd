use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    card_picker::CardPicker, floating_cta::FloatingCta, legal_modal::LegalModal, nav::Nav,
    starfield::StarfieldBackdrop,
};
use crate::config;
use crate::content::{self, AUTHOR, BOOKING_LABEL};
use crate::controller::{Blocking, CardId, LegalDoc, UiAction, UiState};
use crate::scroll_lock::{DocumentBody, PanelLocks, ScrollLock};
use crate::subscriptions::{self, BrowserWindow, Subscription, Viewport};

/// Feeds scroll offset and pricing-section visibility into the page state.
/// The scroll handler fires once right away; a missing pricing section just
/// leaves the CTA driven by scrolling alone.
fn track_viewport<V, D>(viewport: &V, dispatch: D) -> Vec<Subscription>
where
    V: Viewport,
    D: Fn(UiAction) + Clone + 'static,
{
    let scroll = {
        let dispatch = dispatch.clone();
        subscriptions::listen_scroll(viewport, move |offset| dispatch(UiAction::Scrolled(offset)))
            .map_err(|e| warn!("Floating CTA will not track scrolling: {}", e))
            .ok()
    };
    let anchor = subscriptions::observe_anchor_if_present(
        viewport,
        config::PRICE_ANCHOR_ID,
        config::INTERSECTION_THRESHOLD,
        move |visible| dispatch(UiAction::AnchorVisibility(visible)),
    );
    scroll.into_iter().chain(anchor).collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let ui = use_reducer(UiState::default);
    let panel_locks = use_mut_ref(|| PanelLocks::new(Rc::new(ScrollLock::new(DocumentBody))));

    // Drawer and overlay hold separate guards; the body unlocks only when
    // neither does.
    {
        let panel_locks = panel_locks.clone();
        use_effect_with_deps(
            move |blocking: &Blocking| {
                panel_locks.borrow_mut().sync(*blocking);
                || ()
            },
            ui.blocking,
        );
    }
    {
        let panel_locks = panel_locks.clone();
        use_unmount(move || panel_locks.borrow_mut().release_all());
    }

    {
        let dispatcher = ui.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listeners = BrowserWindow::current()
                    .map(|viewport| {
                        track_viewport(&viewport, move |action| dispatcher.dispatch(action))
                    })
                    .map_err(|e| warn!("Floating CTA will not track the viewport: {}", e))
                    .unwrap_or_default();
                move || drop(listeners)
            },
            (),
        );
    }

    let on_toggle_menu = {
        let ui = ui.clone();
        Callback::from(move |_: ()| ui.dispatch(UiAction::ToggleMenu))
    };
    let on_close_menu = {
        let ui = ui.clone();
        Callback::from(move |_: ()| ui.dispatch(UiAction::CloseMenu))
    };
    let on_select_card = {
        let ui = ui.clone();
        Callback::from(move |card: CardId| ui.dispatch(UiAction::SelectCard(card)))
    };
    let on_close_overlay = {
        let ui = ui.clone();
        Callback::from(move |_: ()| ui.dispatch(UiAction::CloseOverlay))
    };
    let open_overlay = |doc: LegalDoc| {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(UiAction::OpenOverlay(doc)))
    };

    html! {
        <div class="landing-page">
            <Nav
                menu_open={ui.menu_open()}
                on_toggle={on_toggle_menu}
                on_close={on_close_menu}
            />

            <header class="hero">
                <StarfieldBackdrop />
                <div class="hero-content">
                    <div class="award-badge">{content::AWARD_BADGE}</div>
                    <h1>
                        {"片思い、曖昧な関係。"}<br />
                        {"あの人の"}<span class="accent">{"本音"}</span>{"を物語で読み解く。"}
                    </h1>
                    <p class="hero-subtitle">
                        {"「相手の気持ち」という迷宮から、二人が織りなす結末まで。"}<br />
                        {"作家・源明が算命学とタロットで、あなただけの鑑定書を認めます。"}
                    </p>
                    <CardPicker selected={ui.selected} on_select={on_select_card} />
                </div>
            </header>

            <section id="about" class="about">
                <div class="about-inner">
                    <div class="profile-card">
                        <h3>{AUTHOR}</h3>
                        <p class="profile-role">{"Author & Storyteller"}</p>
                        <p>{"アルファポリス 第15回"}<br />{"ファンタジー小説大賞 奨励賞受賞 ※1"}</p>
                        <a
                            href={config::AWARD_URL}
                            target="_blank"
                            rel="noopener noreferrer nofollow"
                            aria-label={content::AWARD_LINK_LABEL}
                            class="award-link"
                        >
                            {"公式発表はこちら ↗"}
                        </a>
                        <p>{"(旧名義：村雨勇として受賞)"}</p>
                        <p>{"算命学 / タロット / 運命の色譜 / 手相"}</p>
                        <p>{"恋愛という物語を読み解き、"}<br />{"魂の声を言葉に変える専門家。"}</p>
                    </div>
                    <div class="about-text">
                        <h2>{"相手の気持ちが分かれば、"}<br />{"恋の物語は動き出す。"}</h2>
                        <p>{"源明の鑑定は、単なる結果の羅列ではありません。あなたの生年月日（算命学）から宿命の骨子を組み、手相から刻まれた経験を読み取ります。"}</p>
                        <p>
                            {"それらはすべて、一通の"}<strong>{"「物語風の鑑定書」"}</strong>
                            {"として結晶化されます。片思いの焦燥も、曖昧な関係の不安も、一つの意味ある「物語」として肯定することで、あなたの次の一歩を照らします。"}
                        </p>
                        <div class="about-badges">
                            <div>{"AlphaPolis Awarded"}</div>
                            <div>{"Narrative Appraisal"}</div>
                        </div>
                        <p class="confidential">{"守秘義務を徹底／内容は第三者に共有されません"}</p>
                    </div>
                </div>
            </section>

            <section id="faq" class="faq">
                <div class="faq-inner">
                    <h2>{"恋愛・相手の気持ち占いでよくある質問"}</h2>
                    { for content::FAQ.iter().map(|entry| html! {
                        <div class="faq-item">
                            <p class="faq-q"><span class="qa-mark">{"Q."}</span>{entry.question}</p>
                            <p class="faq-a"><span class="qa-mark">{"A."}</span>{entry.answer}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id={config::PRICE_ANCHOR_ID} class="price">
                <h2>{"あなたの恋の物語を、"}<br />{"ここから綴り始めましょう。"}</h2>
                <div class="price-card">
                    <p class="price-label">{"初回限定：一頁の託宣（無料診断）"}</p>
                    <p class="price-amount">
                        {"¥0"}<span class="price-regular">{"（通常 ￥5,500）"}</span>
                    </p>
                    <p>{"算命学と色譜による基礎鑑定と、今のあなたへ向けたメッセージを物語として届けます。"}</p>
                    <a href={config::booking_url()} class="price-cta">{BOOKING_LABEL}{" ›"}</a>
                    <div class="price-trust">
                        <span>{"Privacy Protected"}</span>
                        <span>{"Awarded Author"}</span>
                    </div>
                </div>
            </section>

            <section class="disclaimers">
                <div class="disclaimers-inner">
                    <p class="citation">
                        <strong>{content::AWARD_CITATION}</strong>{" "}
                        <span>{content::AWARD_DETAIL}</span>{" "}
                        <a
                            href={config::AWARD_URL}
                            target="_blank"
                            rel="noopener noreferrer nofollow"
                            aria-label={content::AWARD_LINK_LABEL}
                            class="award-link"
                        >
                            {"[公式発表を確認] ↗"}
                        </a>
                    </p>
                    { for content::DISCLAIMERS.iter().map(|text| html! { <p>{*text}</p> }) }
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-inner">
                    <div class="footer-brand">{"源明 | Storyteller"}</div>
                    <div class="legal-links">
                        { for LegalDoc::ALL.into_iter().map(|doc| html! {
                            <button class="legal-link" onclick={open_overlay(doc)}>{doc.title()}</button>
                        }) }
                    </div>
                    <p>{content::COPYRIGHT}</p>
                </div>
            </footer>

            // Stays out of the way while the drawer or an overlay is open.
            <FloatingCta visible={ui.floating_cta_visible() && !ui.scroll_locked()} />

            if let Some(doc) = ui.overlay() {
                <LegalModal {doc} on_close={on_close_overlay} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::scroll_lock::tests::FakeBody;
    use crate::subscriptions::live_subscriptions;
    use crate::subscriptions::tests::FakeViewport;

    #[test]
    fn drawer_and_overlay_lock_through_panel_locks() {
        let body = Rc::new(FakeBody::default());
        let mut locks = PanelLocks::new(Rc::new(ScrollLock::new(body.clone())));
        let mut state = UiState::default();

        for action in [
            UiAction::ToggleMenu,
            UiAction::OpenOverlay(LegalDoc::Terms),
            UiAction::CloseMenu,
        ] {
            state = state.apply(action);
            locks.sync(state.blocking);
            assert_eq!(*body.overflow.borrow(), Some("hidden"));
        }

        state = state.apply(UiAction::CloseOverlay);
        locks.sync(state.blocking);
        assert!(!state.scroll_locked());
        assert_eq!(*body.overflow.borrow(), None);
    }

    /// Page state behind an `Rc` so viewport callbacks can dispatch into it.
    fn shared_state() -> (Rc<RefCell<UiState>>, impl Fn(UiAction) + Clone + 'static) {
        let state = Rc::new(RefCell::new(UiState::default()));
        let dispatch = {
            let state = state.clone();
            move |action: UiAction| {
                let next = state.borrow().apply(action);
                *state.borrow_mut() = next;
            }
        };
        (state, dispatch)
    }

    #[test]
    fn viewport_tracking_sets_cta_before_first_scroll_event() {
        let viewport = FakeViewport {
            offset: 900.0,
            anchors: vec![config::PRICE_ANCHOR_ID],
            ..FakeViewport::default()
        };
        let (state, dispatch) = shared_state();

        let listeners = track_viewport(&viewport, dispatch);
        assert_eq!(listeners.len(), 2);
        assert!(state.borrow().floating_cta_visible());

        viewport.set_anchor_visible(true);
        assert!(!state.borrow().floating_cta_visible());
    }

    #[test]
    fn viewport_tracking_without_pricing_section_still_tracks_scroll() {
        let viewport = FakeViewport::default();
        let (state, dispatch) = shared_state();
        let before = live_subscriptions();

        let listeners = track_viewport(&viewport, dispatch);
        assert_eq!(listeners.len(), 1);
        assert_eq!(live_subscriptions(), before + 1);

        viewport.scroll_to(500.0);
        assert!(state.borrow().floating_cta_visible());
    }

    #[test]
    fn unmount_leaves_no_listeners_or_lock() {
        let body = Rc::new(FakeBody::default());
        let viewport = FakeViewport {
            anchors: vec![config::PRICE_ANCHOR_ID],
            ..FakeViewport::default()
        };
        let (state, dispatch) = shared_state();
        let before = live_subscriptions();

        // mount
        let mut locks = PanelLocks::new(Rc::new(ScrollLock::new(body.clone())));
        let listeners = track_viewport(&viewport, dispatch.clone());
        assert_eq!(live_subscriptions(), before + 2);

        // interact
        viewport.scroll_to(900.0);
        for action in [
            UiAction::SelectCard(CardId::Tarot),
            UiAction::ToggleMenu,
            UiAction::OpenOverlay(LegalDoc::Privacy),
        ] {
            dispatch(action);
            locks.sync(state.borrow().blocking);
        }
        assert_eq!(*body.overflow.borrow(), Some("hidden"));

        // unmount
        locks.release_all();
        drop(listeners);
        assert_eq!(live_subscriptions(), before);
        assert_eq!(*body.overflow.borrow(), None);
        assert!(viewport.scroll_handler.borrow().is_none());
        assert!(viewport.anchor_handler.borrow().is_none());
    }
}

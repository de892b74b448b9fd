use log::warn;
use yew::prelude::*;

use crate::controller::LegalDoc;
use crate::subscriptions;

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub doc: LegalDoc,
    pub on_close: Callback<()>,
}

/// Overlay panel for one legal document. Only mounted while open, so the
/// Escape listener lives exactly as long as the panel.
#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    let LegalModalProps { doc, on_close } = props;

    {
        let on_close = on_close.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = subscriptions::listen_escape(move || on_close.emit(()))
                    .map_err(|e| warn!("Escape key will not close the overlay: {}", e))
                    .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-label={doc.title()}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="modal-close" onclick={close} aria-label="閉じる">{"×"}</button>
                <h2 class="modal-title">{doc.title()}</h2>
                <div class="modal-body">
                    { for doc.sections().iter().map(|section| html! {
                        <section class="modal-section">
                            <h3>{section.heading}</h3>
                            <p>{section.body}</p>
                        </section>
                    }) }
                </div>
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::config;
use crate::controller::CardId;

#[derive(Properties, PartialEq)]
pub struct CardPickerProps {
    pub selected: Option<CardId>,
    pub on_select: Callback<CardId>,
}

#[function_component(CardPicker)]
pub fn card_picker(props: &CardPickerProps) -> Html {
    let CardPickerProps {
        selected,
        on_select,
    } = props;

    html! {
        <div class="card-picker">
            <p class="card-picker-prompt">
                {"【一頁の託宣】扉を開き、物語の欠片を受け取ってください"}
            </p>
            <div class="card-grid">
                { for CardId::ALL.into_iter().map(|card| {
                    let copy = card.copy();
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(card))
                    };
                    html! {
                        <button
                            class={classes!("card", (*selected == Some(card)).then(|| "card-selected"))}
                            {onclick}
                        >
                            <span class="card-icon">{"📖"}</span>
                            <span class="card-name">{copy.name}</span>
                            <span class="card-meaning">{format!("({})", copy.meaning)}</span>
                        </button>
                    }
                }) }
            </div>

            if let Some(card) = selected {
                <div class="card-reveal fade-in">
                    <div class="card-hint">
                        <p>{format!("「{}」", card.copy().hint)}</p>
                    </div>
                    <a href={config::booking_url()} class="card-cta">
                        {"「相手の気持ち」を無料で占う ›"}
                    </a>
                </div>
            }
        </div>
    }
}

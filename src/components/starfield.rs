use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::starfield::{Starfield, StarfieldPhase};

/// Hero background. Stars are generated after mount so the first paint
/// never shows a layout that is immediately replaced.
#[function_component(StarfieldBackdrop)]
pub fn starfield_backdrop() -> Html {
    let phase = use_mut_ref(StarfieldPhase::default);
    let ready = use_state(|| false);

    {
        let phase = phase.clone();
        let ready = ready.clone();
        use_mount(move || {
            phase.borrow_mut().initialize_with(|| {
                Starfield::generate(
                    &mut rand::thread_rng(),
                    config::FAR_STAR_COUNT,
                    config::NEAR_STAR_COUNT,
                )
            });
            ready.set(true);
        });
    }

    let phase = phase.borrow();
    let (far, near) = match (*ready, phase.stars()) {
        (true, Some(stars)) => (
            stars
                .far
                .iter()
                .map(|star| {
                    html! {
                        <div
                            class="star star-far"
                            style={format!("top: {:.3}%; left: {:.3}%;", star.top, star.left)}
                        />
                    }
                })
                .collect::<Html>(),
            stars
                .near
                .iter()
                .map(|star| {
                    html! {
                        <div
                            class="star star-near twinkle"
                            style={format!(
                                "top: {:.3}%; left: {:.3}%; animation-delay: {:.3}s;",
                                star.top, star.left, star.delay
                            )}
                        />
                    }
                })
                .collect::<Html>(),
        ),
        _ => (Html::default(), Html::default()),
    };

    html! {
        <div class="hero-backdrop" aria-hidden="true">
            <div class="hero-gradient"></div>
            <div class="hero-nebula nebula-drift"></div>
            <div class="star-layer drift-slow">{far}</div>
            <div class="star-layer drift-medium">{near}</div>
        </div>
    }
}

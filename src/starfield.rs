use std::rc::Rc;

use rand::Rng;

use crate::config;

/// Position in percent of the hero section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FarStar {
    pub top: f64,
    pub left: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearStar {
    pub top: f64,
    pub left: f64,
    /// Twinkle animation delay in seconds.
    pub delay: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub far: Vec<FarStar>,
    pub near: Vec<NearStar>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, far: usize, near: usize) -> Self {
        let far = (0..far)
            .map(|_| FarStar {
                top: rng.gen_range(0.0..100.0),
                left: rng.gen_range(0.0..100.0),
            })
            .collect();
        let near = (0..near)
            .map(|_| NearStar {
                top: rng.gen_range(0.0..100.0),
                left: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..config::MAX_TWINKLE_DELAY),
            })
            .collect();
        Self { far, near }
    }
}

/// Stars are only generated once the page is live in the browser, and then
/// never again for the lifetime of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StarfieldPhase {
    #[default]
    Uninitialized,
    Initialized(Rc<Starfield>),
}

impl StarfieldPhase {
    /// Runs `generate` on the first call only; later calls hand back the
    /// stars produced the first time.
    pub fn initialize_with<F>(&mut self, generate: F) -> Rc<Starfield>
    where
        F: FnOnce() -> Starfield,
    {
        match self {
            StarfieldPhase::Initialized(stars) => stars.clone(),
            StarfieldPhase::Uninitialized => {
                let stars = Rc::new(generate());
                *self = StarfieldPhase::Initialized(stars.clone());
                stars
            }
        }
    }

    pub fn stars(&self) -> Option<&Starfield> {
        match self {
            StarfieldPhase::Initialized(stars) => Some(stars),
            StarfieldPhase::Uninitialized => None,
        }
    }
}

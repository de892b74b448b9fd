//! Page-level UI state: drawer, legal overlay, card selection and the
//! floating call-to-action.
//!
//! Everything here is plain data so the transitions can be exercised without
//! a browser. The landing page drives it through `use_reducer`.

use std::rc::Rc;

use yew::Reducible;

use crate::config;
use crate::content::{self, CardCopy, LegalSection};

/// The three choices offered in the hero card picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardId {
    Destiny,
    Tarot,
    ColorScore,
}

impl CardId {
    pub const ALL: [CardId; 3] = [CardId::Destiny, CardId::Tarot, CardId::ColorScore];

    pub fn copy(self) -> &'static CardCopy {
        match self {
            CardId::Destiny => &content::DESTINY_CARD,
            CardId::Tarot => &content::TAROT_CARD,
            CardId::ColorScore => &content::COLOR_SCORE_CARD,
        }
    }
}

/// Legal documents that can be shown in the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegalDoc {
    Terms,
    Privacy,
    CommercialTransactions,
}

impl LegalDoc {
    pub const ALL: [LegalDoc; 3] = [
        LegalDoc::Terms,
        LegalDoc::Privacy,
        LegalDoc::CommercialTransactions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Terms => "利用規約",
            LegalDoc::Privacy => "個人情報保護方針",
            LegalDoc::CommercialTransactions => "特定商取引法表記",
        }
    }

    pub fn sections(self) -> &'static [LegalSection] {
        match self {
            LegalDoc::Terms => content::TERMS,
            LegalDoc::Privacy => content::PRIVACY,
            LegalDoc::CommercialTransactions => content::COMMERCIAL_TRANSACTIONS,
        }
    }
}

/// Panels that block page scrolling while open.
///
/// The drawer and the overlay are independent, so both may be open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blocking {
    #[default]
    Closed,
    MenuOpen,
    OverlayOpen(LegalDoc),
    Both(LegalDoc),
}

impl Blocking {
    pub fn toggle_menu(self) -> Self {
        if self.menu_open() {
            self.close_menu()
        } else {
            match self {
                Blocking::Closed => Blocking::MenuOpen,
                Blocking::OverlayOpen(doc) => Blocking::Both(doc),
                other => other,
            }
        }
    }

    pub fn close_menu(self) -> Self {
        match self {
            Blocking::MenuOpen => Blocking::Closed,
            Blocking::Both(doc) => Blocking::OverlayOpen(doc),
            other => other,
        }
    }

    /// Opening a document while another is shown replaces it.
    pub fn open_overlay(self, doc: LegalDoc) -> Self {
        if self.menu_open() {
            Blocking::Both(doc)
        } else {
            Blocking::OverlayOpen(doc)
        }
    }

    pub fn close_overlay(self) -> Self {
        match self {
            Blocking::OverlayOpen(_) => Blocking::Closed,
            Blocking::Both(_) => Blocking::MenuOpen,
            other => other,
        }
    }

    pub fn menu_open(self) -> bool {
        matches!(self, Blocking::MenuOpen | Blocking::Both(_))
    }

    pub fn overlay(self) -> Option<LegalDoc> {
        match self {
            Blocking::OverlayOpen(doc) | Blocking::Both(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn scroll_locked(self) -> bool {
        self != Blocking::Closed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiAction {
    ToggleMenu,
    CloseMenu,
    SelectCard(CardId),
    OpenOverlay(LegalDoc),
    CloseOverlay,
    AnchorVisibility(bool),
    Scrolled(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiState {
    pub blocking: Blocking,
    pub selected: Option<CardId>,
    pub anchor_visible: bool,
    pub past_threshold: bool,
}

impl UiState {
    pub fn apply(self, action: UiAction) -> Self {
        match action {
            UiAction::ToggleMenu => Self {
                blocking: self.blocking.toggle_menu(),
                ..self
            },
            UiAction::CloseMenu => Self {
                blocking: self.blocking.close_menu(),
                ..self
            },
            UiAction::SelectCard(card) => Self {
                selected: Some(card),
                ..self
            },
            UiAction::OpenOverlay(doc) => Self {
                blocking: self.blocking.open_overlay(doc),
                ..self
            },
            UiAction::CloseOverlay => Self {
                blocking: self.blocking.close_overlay(),
                ..self
            },
            UiAction::AnchorVisibility(visible) => Self {
                anchor_visible: visible,
                ..self
            },
            UiAction::Scrolled(offset) => Self {
                past_threshold: offset > config::SCROLL_THRESHOLD,
                ..self
            },
        }
    }

    pub fn menu_open(&self) -> bool {
        self.blocking.menu_open()
    }

    pub fn overlay(&self) -> Option<LegalDoc> {
        self.blocking.overlay()
    }

    pub fn scroll_locked(&self) -> bool {
        self.blocking.scroll_locked()
    }

    /// Never true while the pricing section is on screen.
    pub fn floating_cta_visible(&self) -> bool {
        self.past_threshold && !self.anchor_visible
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        // Unchanged state keeps the same Rc so yew skips the re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

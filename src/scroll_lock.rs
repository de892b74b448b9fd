use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

use crate::controller::Blocking;
use crate::error::DomError;

/// Where the lock writes its `overflow` style.
pub trait BodyStyle {
    fn set_overflow_hidden(&self) -> Result<(), DomError>;
    fn clear_overflow(&self) -> Result<(), DomError>;
}

/// `document.body` of the current window.
pub struct DocumentBody;

impl DocumentBody {
    fn body() -> Result<web_sys::HtmlElement, DomError> {
        web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?
            .body()
            .ok_or(DomError::NoBody)
    }
}

impl BodyStyle for DocumentBody {
    fn set_overflow_hidden(&self) -> Result<(), DomError> {
        Self::body()?.style().set_property("overflow", "hidden")?;
        Ok(())
    }

    fn clear_overflow(&self) -> Result<(), DomError> {
        Self::body()?.style().remove_property("overflow")?;
        Ok(())
    }
}

/// Reference-counted scroll lock. The body stays locked while at least one
/// [`ScrollLockGuard`] is alive.
pub struct ScrollLock<B: BodyStyle> {
    body: B,
    holders: Cell<usize>,
}

impl<B: BodyStyle> ScrollLock<B> {
    pub fn new(body: B) -> Self {
        Self {
            body,
            holders: Cell::new(0),
        }
    }

    pub fn acquire(lock: &Rc<Self>) -> ScrollLockGuard<B> {
        let holders = lock.holders.get() + 1;
        lock.holders.set(holders);
        if holders == 1 {
            debug!("Locking page scroll");
            if let Err(e) = lock.body.set_overflow_hidden() {
                warn!("Failed to lock page scroll: {}", e);
            }
        }
        ScrollLockGuard { lock: lock.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            debug!("Releasing page scroll");
            if let Err(e) = self.body.clear_overflow() {
                warn!("Failed to release page scroll: {}", e);
            }
        }
    }
}

#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<B: BodyStyle> {
    lock: Rc<ScrollLock<B>>,
}

impl<B: BodyStyle> Drop for ScrollLockGuard<B> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// One guard per blocking panel, kept in step with [`Blocking`]. The drawer
/// and the overlay never share a guard, so closing one cannot unlock the page
/// while the other is still open.
pub struct PanelLocks<B: BodyStyle> {
    lock: Rc<ScrollLock<B>>,
    menu: Option<ScrollLockGuard<B>>,
    overlay: Option<ScrollLockGuard<B>>,
}

impl<B: BodyStyle> PanelLocks<B> {
    pub fn new(lock: Rc<ScrollLock<B>>) -> Self {
        Self {
            lock,
            menu: None,
            overlay: None,
        }
    }

    pub fn sync(&mut self, blocking: Blocking) {
        let lock = &self.lock;
        sync_guard(&mut self.menu, blocking.menu_open(), lock);
        sync_guard(&mut self.overlay, blocking.overlay().is_some(), lock);
    }

    /// Drops both guards. Called on unmount.
    pub fn release_all(&mut self) {
        self.menu = None;
        self.overlay = None;
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

fn sync_guard<B: BodyStyle>(
    guard: &mut Option<ScrollLockGuard<B>>,
    open: bool,
    lock: &Rc<ScrollLock<B>>,
) {
    match (open, guard.is_some()) {
        (true, false) => *guard = Some(ScrollLock::acquire(lock)),
        (false, true) => *guard = None,
        _ => {}
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::controller::LegalDoc;
    use std::cell::RefCell;

    /// Records the body's overflow value instead of touching the DOM.
    #[derive(Default)]
    pub struct FakeBody {
        pub overflow: RefCell<Option<&'static str>>,
        pub writes: Cell<usize>,
    }

    impl BodyStyle for FakeBody {
        fn set_overflow_hidden(&self) -> Result<(), DomError> {
            *self.overflow.borrow_mut() = Some("hidden");
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }

        fn clear_overflow(&self) -> Result<(), DomError> {
            *self.overflow.borrow_mut() = None;
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }

    impl BodyStyle for Rc<FakeBody> {
        fn set_overflow_hidden(&self) -> Result<(), DomError> {
            (**self).set_overflow_hidden()
        }

        fn clear_overflow(&self) -> Result<(), DomError> {
            (**self).clear_overflow()
        }
    }

    #[test]
    fn single_guard_locks_and_unlocks() {
        let body = Rc::new(FakeBody::default());
        let lock = Rc::new(ScrollLock::new(body.clone()));

        let guard = ScrollLock::acquire(&lock);
        assert!(lock.is_locked());
        assert_eq!(*body.overflow.borrow(), Some("hidden"));

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(*body.overflow.borrow(), None);
    }

    #[test]
    fn releasing_one_holder_keeps_the_other_locked() {
        let body = Rc::new(FakeBody::default());
        let lock = Rc::new(ScrollLock::new(body.clone()));

        let menu = ScrollLock::acquire(&lock);
        let overlay = ScrollLock::acquire(&lock);
        drop(menu);
        assert!(lock.is_locked());
        assert_eq!(*body.overflow.borrow(), Some("hidden"));

        drop(overlay);
        assert_eq!(*body.overflow.borrow(), None);
    }

    #[test]
    fn body_is_written_only_on_edges() {
        let body = Rc::new(FakeBody::default());
        let lock = Rc::new(ScrollLock::new(body.clone()));

        let a = ScrollLock::acquire(&lock);
        let b = ScrollLock::acquire(&lock);
        let c = ScrollLock::acquire(&lock);
        drop((a, b, c));
        assert_eq!(body.writes.get(), 2);
    }

    #[test]
    fn panel_locks_follow_blocking_state() {
        let body = Rc::new(FakeBody::default());
        let mut locks = PanelLocks::new(Rc::new(ScrollLock::new(body.clone())));

        locks.sync(Blocking::MenuOpen);
        assert_eq!(*body.overflow.borrow(), Some("hidden"));

        locks.sync(Blocking::Both(LegalDoc::Terms));
        locks.sync(Blocking::OverlayOpen(LegalDoc::Terms));
        assert!(locks.is_locked());
        assert_eq!(*body.overflow.borrow(), Some("hidden"));

        locks.sync(Blocking::Closed);
        assert!(!locks.is_locked());
        assert_eq!(*body.overflow.borrow(), None);
    }

    #[test]
    fn panel_locks_do_not_flicker_between_panels() {
        let body = Rc::new(FakeBody::default());
        let mut locks = PanelLocks::new(Rc::new(ScrollLock::new(body.clone())));

        locks.sync(Blocking::MenuOpen);
        locks.sync(Blocking::Both(LegalDoc::Privacy));
        locks.sync(Blocking::OverlayOpen(LegalDoc::Privacy));
        locks.sync(Blocking::OverlayOpen(LegalDoc::Terms));
        // Only the initial lock; the body was never cleared in between.
        assert_eq!(body.writes.get(), 1);
    }

    #[test]
    fn release_all_unlocks_with_panels_open() {
        let body = Rc::new(FakeBody::default());
        let mut locks = PanelLocks::new(Rc::new(ScrollLock::new(body.clone())));

        locks.sync(Blocking::Both(LegalDoc::CommercialTransactions));
        locks.release_all();
        assert_eq!(*body.overflow.borrow(), None);
    }
}

//! Page Scroll Lock
//!
//! Full-screen modals stop the page behind them from scrolling. The lock
//! remembers the previous `overflow` value and puts it back when dropped,
//! so every way of closing a modal releases it.

/// Something with an inline `overflow` style
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

#[must_use = "the page unlocks as soon as the lock is dropped"]
pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

/// Inline style of `document.body`
pub struct BodyStyle(web_sys::CssStyleDeclaration);

impl BodyStyle {
    pub fn current() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self(body.style()))
    }
}

impl OverflowStyle for BodyStyle {
    fn overflow(&self) -> String {
        self.0.get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let result = if value.is_empty() {
            self.0.remove_property("overflow").map(|_| ())
        } else {
            self.0.set_property("overflow", value)
        };
        if result.is_err() {
            log::warn!("failed to set body overflow to {:?}", value);
        }
    }
}

/// Lock page scrolling until the returned guard is dropped
pub fn lock_body_scroll() -> Option<ScrollLock<BodyStyle>> {
    BodyStyle::current().map(ScrollLock::acquire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeStyle(Rc<RefCell<String>>);

    impl OverflowStyle for FakeStyle {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_lock_hides_and_restores() {
        let style = FakeStyle::default();
        let lock = ScrollLock::acquire(style.clone());
        assert_eq!(style.overflow(), "hidden");
        drop(lock);
        assert_eq!(style.overflow(), "");
    }

    #[test]
    fn test_restores_previous_value() {
        let style = FakeStyle(Rc::new(RefCell::new("auto".to_string())));
        drop(ScrollLock::acquire(style.clone()));
        assert_eq!(style.overflow(), "auto");
    }

    #[test]
    fn test_nested_locks_unwind_in_order() {
        let style = FakeStyle::default();
        let outer = ScrollLock::acquire(style.clone());
        let inner = ScrollLock::acquire(style.clone());
        drop(inner);
        assert_eq!(style.overflow(), "hidden");
        drop(outer);
        assert_eq!(style.overflow(), "");
    }

    #[test]
    fn test_released_on_early_exit() {
        fn close_early(style: FakeStyle) -> Result<(), ()> {
            let _lock = ScrollLock::acquire(style);
            Err(())
        }
        let style = FakeStyle::default();
        assert!(close_early(style.clone()).is_err());
        assert_eq!(style.overflow(), "");
    }
}

//! The loading marker: a CSS class on the element that started a request.

use log::warn;
use std::rc::Rc;

/// Class applied to an element while its refresh is in flight.
pub const LOADING_CLASS: &str = "is-loading";

/// Something that can show a busy state.
pub trait LoadingTarget {
    fn mark_loading(&self);
    fn clear_loading(&self);
    fn is_loading(&self) -> bool;
}

impl<T: LoadingTarget + ?Sized> LoadingTarget for Rc<T> {
    fn mark_loading(&self) {
        (**self).mark_loading()
    }

    fn clear_loading(&self) {
        (**self).clear_loading()
    }

    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }
}

impl LoadingTarget for web_sys::Element {
    fn mark_loading(&self) {
        if let Err(e) = self.class_list().add_1(LOADING_CLASS) {
            warn!("Could not add {} to #{}: {:?}", LOADING_CLASS, self.id(), e);
        }
    }

    fn clear_loading(&self) {
        if let Err(e) = self.class_list().remove_1(LOADING_CLASS) {
            warn!("Could not remove {} from #{}: {:?}", LOADING_CLASS, self.id(), e);
        }
    }

    fn is_loading(&self) -> bool {
        self.class_list().contains(LOADING_CLASS)
    }
}

/// Holds the marker on a target and clears it when dropped, whether the
/// request succeeded, failed, or was abandoned.
pub struct LoadingGuard<T: LoadingTarget> {
    target: T,
}

impl<T: LoadingTarget> LoadingGuard<T> {
    pub fn engage(target: T) -> Self {
        target.mark_loading();
        LoadingGuard { target }
    }
}

impl<T: LoadingTarget> Drop for LoadingGuard<T> {
    fn drop(&mut self) {
        self.target.clear_loading();
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::FakeElement;
    use super::*;

    #[test]
    fn test_guard_marks_and_clears() {
        let element = Rc::new(FakeElement::with_classes(&["button"]));
        let guard = LoadingGuard::engage(element.clone());
        assert!(element.is_loading());
        assert_eq!(element.classes(), ["button", "is-loading"]);

        drop(guard);
        assert!(!element.is_loading());
        assert_eq!(element.classes(), ["button"]);
    }

    #[test]
    fn test_marker_is_a_set_member() {
        let element = Rc::new(FakeElement::default());
        let first = LoadingGuard::engage(element.clone());
        let second = LoadingGuard::engage(element.clone());
        assert_eq!(element.classes(), ["is-loading"]);

        // Guards don't count each other: the first drop clears the class.
        drop(first);
        assert!(!element.is_loading());
        drop(second);
        assert_eq!(element.writes.get(), 4);
    }
}

// Scroll-notification subscription with scoped acquisition.
// Subscribe on mount; the guard unsubscribes on drop, including during unwinding.

use std::rc::Rc;

use tracing::info;

/// Handle returned by a scroll source for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(id: u64) -> Self {
        ListenerId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Delivers payload-free "scroll happened" notifications.
pub trait ScrollSource {
    fn add_listener(&self, listener: Box<dyn FnMut()>) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// Requests a single animation-frame callback from the host.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Rc<T> {
    fn request_frame(&self) {
        (**self).request_frame();
    }
}

/// Live subscription. Dropping it removes the listener exactly once.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ScrollSubscription<'a, S: ScrollSource + ?Sized> {
    source: &'a S,
    id: Option<ListenerId>,
}

impl<'a, S: ScrollSource + ?Sized> ScrollSubscription<'a, S> {
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Explicit teardown. Equivalent to dropping the guard.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.remove_listener(id);
            info!(listener = id.as_u64(), "scroll listener removed");
        }
    }
}

impl<S: ScrollSource + ?Sized> Drop for ScrollSubscription<'_, S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Register `listener` with `source` for the lifetime of the returned guard.
pub fn subscribe<'a, S, F>(source: &'a S, listener: F) -> ScrollSubscription<'a, S>
where
    S: ScrollSource + ?Sized,
    F: FnMut() + 'static,
{
    let id = source.add_listener(Box::new(listener));
    info!(listener = id.as_u64(), "scroll listener added");
    ScrollSubscription {
        source,
        id: Some(id),
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    use super::testing::FakeScrollSource;
    use super::*;

    #[test]
    fn listener_receives_notifications() {
        let source = FakeScrollSource::default();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = subscribe(&source, move || counter.set(counter.get() + 1));

        source.fire();
        source.fire();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn drop_unsubscribes() {
        let source = FakeScrollSource::default();
        {
            let sub = subscribe(&source, || {});
            assert!(sub.is_active());
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.removed.borrow().len(), 1);
    }

    #[test]
    fn explicit_unsubscribe_happens_once() {
        let source = FakeScrollSource::default();
        let sub = subscribe(&source, || {});
        let id = sub.id();
        sub.unsubscribe();
        assert_eq!(source.removed.borrow().as_slice(), &[id.unwrap()]);
    }

    #[test]
    fn panic_during_mount_still_unsubscribes() {
        let source = FakeScrollSource::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _sub = subscribe(&source, || {});
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.removed.borrow().len(), 1);
    }
}

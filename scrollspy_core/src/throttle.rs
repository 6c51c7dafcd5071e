// Frame throttling: at most one evaluation per animation frame.
// Pending-flag discipline. A notification schedules a frame only when none is pending.

use tracing::trace;

/// What the host should do after forwarding a scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// No frame pending: request exactly one animation frame.
    Schedule,
    /// A frame is already scheduled; drop this notification.
    AlreadyPending,
}

impl FrameRequest {
    pub fn should_schedule(self) -> bool {
        matches!(self, FrameRequest::Schedule)
    }
}

/// Pending-flag throttle. Single-threaded; no locking.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
    dropped: u64,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw scroll notification.
    pub fn request(&mut self) -> FrameRequest {
        if self.pending {
            self.dropped += 1;
            trace!(dropped = self.dropped, "scroll notification coalesced");
            return FrameRequest::AlreadyPending;
        }
        self.pending = true;
        FrameRequest::Schedule
    }

    /// Called when the animation frame fires. Clears the flag and reports
    /// whether an evaluation was owed.
    pub fn begin_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Notifications coalesced into an already-scheduled frame.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_notification_schedules() {
        let mut throttle = FrameThrottle::new();
        assert_eq!(throttle.request(), FrameRequest::Schedule);
        assert!(throttle.is_pending());
    }

    #[test]
    fn burst_within_frame_schedules_once() {
        let mut throttle = FrameThrottle::new();
        let scheduled = (0..50)
            .map(|_| throttle.request())
            .filter(|r| r.should_schedule())
            .count();
        assert_eq!(scheduled, 1);
        assert_eq!(throttle.dropped(), 49);
        assert!(throttle.begin_frame());
        assert!(!throttle.is_pending());
    }

    #[test]
    fn frame_without_notification_does_nothing() {
        let mut throttle = FrameThrottle::new();
        assert!(!throttle.begin_frame());
    }

    #[test]
    fn flag_resets_after_frame() {
        let mut throttle = FrameThrottle::new();
        throttle.request();
        throttle.begin_frame();
        assert_eq!(throttle.request(), FrameRequest::Schedule);
    }

    proptest! {
        /// N notifications per frame, over several frames, cost one evaluation per frame.
        #[test]
        fn one_evaluation_per_frame(bursts in prop::collection::vec(1usize..200, 1..20)) {
            let mut throttle = FrameThrottle::new();
            let mut evaluations = 0;
            for burst in &bursts {
                let scheduled = (0..*burst).filter(|_| throttle.request().should_schedule()).count();
                prop_assert_eq!(scheduled, 1);
                if throttle.begin_frame() {
                    evaluations += 1;
                }
            }
            prop_assert_eq!(evaluations, bursts.len());
        }
    }
}

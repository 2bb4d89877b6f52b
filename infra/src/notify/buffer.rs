//! Queue-backed toast sink

use std::collections::VecDeque;
use std::sync::Mutex;

use rl_core::services::otp_flow::{NotifierTrait, Toast};

/// Toast sink the UI layer drains on its next frame
#[derive(Default)]
pub struct BufferedNotifier {
    queue: Mutex<VecDeque<Toast>>,
}

impl BufferedNotifier {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all queued toasts in arrival order
    pub fn drain(&self) -> Vec<Toast> {
        self.lock_queue().drain(..).collect()
    }

    /// Whether any toasts are waiting
    pub fn is_empty(&self) -> bool {
        self.lock_queue().is_empty()
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, VecDeque<Toast>> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NotifierTrait for BufferedNotifier {
    fn notify(&self, toast: Toast) {
        self.lock_queue().push_back(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rl_core::services::otp_flow::ToastKind;

    #[test]
    fn test_drain_returns_toasts_in_order() {
        let notifier = BufferedNotifier::new();
        notifier.notify(Toast::success("first", "a"));
        notifier.notify(Toast::success("second", "b"));

        let toasts = notifier.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, "first");
        assert_eq!(toasts[1].title, "second");
        assert_eq!(toasts[0].kind, ToastKind::Success);

        assert!(notifier.is_empty());
        assert!(notifier.drain().is_empty());
    }
}

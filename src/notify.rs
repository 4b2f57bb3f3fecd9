use std::sync::atomic::{AtomicBool, Ordering};

/// Fires once per process, the first time a streak is loaded.
///
/// Starts unset, is set by the first `notify`, and is never reset. Reloads
/// after the first one stay quiet.
#[derive(Debug, Default)]
pub struct StreakNotifier {
    fired: AtomicBool,
}

impl StreakNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `on_first` with the streak if this is the first call. Returns whether it ran.
    pub fn notify<F: FnOnce(u32)>(&self, streak: u32, on_first: F) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        on_first(streak);
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

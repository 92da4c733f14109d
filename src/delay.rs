//! Interruptible exit delay

use signal_hook::consts::SIGINT;
use signal_hook::flag;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Sleep for `secs`, returning early when SIGINT arrives.
///
/// Returns true when the wait was cut short. The caller proceeds to its
/// normal closing output either way; the interrupt only shortens the wait.
/// If the handler cannot be registered this degrades to a plain sleep.
pub fn pause(secs: u64) -> bool {
    let interrupted = Arc::new(AtomicBool::new(false));
    if flag::register(SIGINT, Arc::clone(&interrupted)).is_err() {
        thread::sleep(Duration::from_secs(secs));
        return false;
    }

    let deadline = Instant::now() + Duration::from_secs(secs);
    while Instant::now() < deadline {
        if interrupted.load(Ordering::Relaxed) {
            return true;
        }
        thread::sleep(POLL_INTERVAL);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_returns_promptly() {
        let started = Instant::now();
        assert!(!pause(0));
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}

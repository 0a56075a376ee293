// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;
use tokio::sync::watch;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Last-write-wins coalescing of free-text input. Each `submit` replaces
/// any pending value and restarts the delay; `settled` resolves with the
/// latest value once no submission has arrived for the whole delay.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tx: watch::Sender<String>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { delay, tx }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn submit(&self, text: impl Into<String>) {
        // send_replace rather than send: delivery must not depend on a
        // receiver being subscribed yet.
        let _ = self.tx.send_replace(text.into());
    }

    /// Waits until the input has been stable for the configured delay and
    /// returns the final value. A submission during the wait restarts the
    /// timer, so only the last write survives a burst of keystrokes.
    pub async fn settled(&self) -> String {
        let mut rx = self.tx.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            tokio::select! {
                () = tokio::time::sleep(self.delay) => return current,
                changed = rx.changed() => {
                    if changed.is_err() {
                        return current;
                    }
                }
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

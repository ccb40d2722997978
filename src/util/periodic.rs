//! Owned periodic task with cancel-on-dispose semantics.
//!
//! Replaces a free-running `setInterval`: the task lives exactly as long as
//! its [`PeriodicTask`] handle, which the root component moves into
//! `on_cleanup`. Cancelling never interrupts a tick that is already running;
//! it prevents the next one.

#[cfg(test)]
#[path = "periodic_test.rs"]
mod periodic_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Handle to a running periodic task. Dropping it cancels the task.
#[derive(Debug)]
pub struct PeriodicTask {
    alive: Arc<AtomicBool>,
}

impl PeriodicTask {
    /// Run `tick` every `period` on the UI thread, first after one period.
    ///
    /// Outside the browser there is no local executor, so the returned handle
    /// is live but nothing is scheduled.
    pub fn start<T, TF>(period: Duration, tick: T) -> Self
    where
        T: FnMut() -> TF + 'static,
        TF: Future<Output = ()> + 'static,
    {
        let task = Self { alive: Arc::new(AtomicBool::new(true)) };
        #[cfg(feature = "csr")]
        {
            let alive = Arc::clone(&task.alive);
            leptos::task::spawn_local(run_periodic(
                alive,
                move || gloo_timers::future::sleep(period),
                tick,
            ));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (period, tick);
        }
        task
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drive `tick` after each `sleep` until `alive` is cleared.
///
/// The flag is checked after every sleep, so a cancel during the wait
/// suppresses the tick that would have followed it.
pub async fn run_periodic<S, SF, T, TF>(alive: Arc<AtomicBool>, mut sleep: S, mut tick: T)
where
    S: FnMut() -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    loop {
        sleep().await;
        if !alive.load(Ordering::Relaxed) {
            break;
        }
        tick().await;
    }
}

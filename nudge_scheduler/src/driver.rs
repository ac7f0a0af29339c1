use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::dispatcher::ReminderDispatcher;

pub struct DriverHandle {
    task_handle: JoinHandle<()>,
    cancellation_token: CancellationToken,
}

impl DriverHandle {
    pub async fn stop(self, timeout: Duration) {
        self.cancellation_token.cancel();
        let _ = time::timeout(timeout, self.task_handle).await;
    }
}

/// Fixed-interval timer driving the dispatcher. Sweeps are awaited inline,
/// so two sweeps can never overlap; a tick that lands while the previous
/// sweep is still running is skipped rather than queued.
pub struct SweepDriver;

impl SweepDriver {
    pub fn start(dispatcher: Arc<ReminderDispatcher>, interval: Duration) -> DriverHandle {
        let cancellation_token = CancellationToken::new();
        let task_cancellation_token = cancellation_token.child_token();

        let task_handle = tokio::spawn(async move {
            let mut ticks = time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = task_cancellation_token.cancelled() => {
                        log::info!("sweep driver shutting down");
                        break;
                    }
                    _ = ticks.tick() => {
                        dispatcher.sweep().await;
                    }
                }
            }
        });

        DriverHandle {
            task_handle,
            cancellation_token,
        }
    }
}

//! Tokio-backed repeating timer for edge auto-scroll.
//!
//! Ticks are posted onto the application's event channel instead of being
//! handled on the timer task, so they are serialized with mouse and key
//! input.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::core::{RepeatingTimer, TickId};

use super::event::AppEvent;

pub struct TokioTicker {
    tx: mpsc::UnboundedSender<AppEvent>,
    task: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx, task: None }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl RepeatingTimer for TokioTicker {
    fn start(&mut self, id: TickId, interval: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            // Late ticks must not burst after a slow frame.
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            timer.tick().await;
            loop {
                timer.tick().await;
                if tx.send(AppEvent::AutoScroll(id)).is_err() {
                    break; // receiver dropped
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TokioTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioTicker")
            .field("running", &self.is_running())
            .finish()
    }
}

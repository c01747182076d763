use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::laundry::machine::Machine;

use super::notify::Notifier;

/// Interval between countdown decrements.
const TICK: Duration = Duration::from_secs(1);

/// Runs one countdown task per granted claim and notifies the originating
/// chat when the cycle finishes.
#[derive(Clone)]
pub struct CountdownService {
    notifier: Arc<dyn Notifier>,
}

impl CountdownService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Spawn the countdown for a freshly claimed machine.
    ///
    /// The task always runs to completion; there is no cancellation path.
    /// A notification delivery failure is logged and the machine is still
    /// released.
    pub fn start(&self, machine: Arc<Mutex<Machine>>, chat_id: i64) -> JoinHandle<()> {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(e) = run_countdown(machine, notifier, chat_id).await {
                tracing::error!(
                    "Failed to deliver completion notification to chat {}: {}",
                    chat_id,
                    e
                );
            }
        })
    }
}

async fn run_countdown(
    machine: Arc<Mutex<Machine>>,
    notifier: Arc<dyn Notifier>,
    chat_id: i64,
) -> anyhow::Result<()> {
    loop {
        if machine.lock().await.time_left == 0 {
            break;
        }
        tokio::time::sleep(TICK).await;
        let mut m = machine.lock().await;
        m.time_left = m.time_left.saturating_sub(1);
    }

    let name = machine.lock().await.name.clone();
    let delivery = notifier
        .notify(
            chat_id,
            &format!("{name} has completed its countdown. {name} moving in 5."),
        )
        .await;

    // Release the machine even if delivery failed, so it never stays
    // claimed past the end of its cycle.
    machine.lock().await.in_use = false;

    delivery
}

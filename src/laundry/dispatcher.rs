use anyhow::Result;
use std::sync::Arc;

use crate::services::countdown::CountdownService;

use super::machine::CYCLE_SECONDS;
use super::registry::MachineRegistry;

/// Result of a claim request, carrying the user-facing reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The machine was free and a countdown has started.
    Claimed {
        /// Confirmation text for the user.
        message: String,
    },
    /// The machine already has a running countdown; nothing was changed.
    AlreadyInUse {
        /// Refusal text for the user.
        message: String,
    },
}

impl ClaimOutcome {
    /// The reply text to show the user for this outcome.
    pub fn message(&self) -> &str {
        match self {
            ClaimOutcome::Claimed { message } | ClaimOutcome::AlreadyInUse { message } => message,
        }
    }
}

/// Validates claim requests against the pool and starts countdowns for
/// granted claims.
pub struct LoadDispatcher {
    registry: Arc<MachineRegistry>,
    countdown: CountdownService,
}

impl LoadDispatcher {
    pub fn new(registry: Arc<MachineRegistry>, countdown: CountdownService) -> Self {
        Self {
            registry,
            countdown,
        }
    }

    /// Claim a machine for a full cycle on behalf of `chat_id`.
    ///
    /// Refuses with `AlreadyInUse` while a countdown is running for the
    /// machine; claims are only granted for idle machines, so at most one
    /// countdown task exists per machine at any time.
    pub async fn claim(&self, machine_id: &str, chat_id: i64) -> Result<ClaimOutcome> {
        let machine = self.registry.get(machine_id)?;

        let name = {
            let mut m = machine.lock().await;
            if m.in_use {
                tracing::info!("Claim refused for {}: already in use", machine_id);
                return Ok(ClaimOutcome::AlreadyInUse {
                    message: format!(
                        "{} is already in use. Please wait until the current countdown is finished.",
                        m.name
                    ),
                });
            }

            m.time_left = CYCLE_SECONDS;
            m.in_use = true;
            m.name.clone()
        };

        let _task = self.countdown.start(machine, chat_id);
        tracing::info!("Machine {} claimed by chat {}", machine_id, chat_id);

        Ok(ClaimOutcome::Claimed {
            message: format!("{name} Loaded! Countdown started."),
        })
    }
}

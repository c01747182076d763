use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::machine::Machine;

/// Point-in-time copy of one machine's state.
#[derive(Debug, Clone)]
pub struct MachineSnapshot {
    /// Stable identifier, e.g. "washer1".
    pub id: String,
    /// Display name, e.g. "W1".
    pub name: String,
    /// Seconds left on the current cycle.
    pub time_left: u32,
    /// Whether a countdown is running for this machine.
    pub in_use: bool,
}

/// The fixed pool of laundry machines, seeded once at startup.
///
/// The pool itself is immutable after construction; each machine's mutable
/// state sits behind its own lock so independent countdowns never contend.
pub struct MachineRegistry {
    machines: Vec<(String, Arc<Mutex<Machine>>)>,
}

impl MachineRegistry {
    /// Seed the pool: two washers and two dryers, in enumeration order.
    pub fn new() -> Self {
        let pool = [
            ("washer1", "W1"),
            ("washer2", "W2"),
            ("dryer1", "D1"),
            ("dryer2", "D2"),
        ];

        Self {
            machines: pool
                .into_iter()
                .map(|(id, name)| (id.to_string(), Arc::new(Mutex::new(Machine::new(name)))))
                .collect(),
        }
    }

    /// Look up a machine by its stable identifier.
    pub fn get(&self, id: &str) -> Result<Arc<Mutex<Machine>>> {
        self.machines
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, machine)| machine.clone())
            .ok_or_else(|| anyhow!("Unknown machine: '{id}'"))
    }

    /// Identifier and display name pairs in pool order, for menu rendering.
    pub async fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::with_capacity(self.machines.len());
        for (id, machine) in &self.machines {
            let name = machine.lock().await.name.clone();
            entries.push((id.clone(), name));
        }
        entries
    }

    /// Ordered copies of every machine's current state.
    pub async fn snapshot(&self) -> Vec<MachineSnapshot> {
        let mut snapshots = Vec::with_capacity(self.machines.len());
        for (id, machine) in &self.machines {
            let m = machine.lock().await;
            snapshots.push(MachineSnapshot {
                id: id.clone(),
                name: m.name.clone(),
                time_left: m.time_left,
                in_use: m.in_use,
            });
        }
        snapshots
    }

    /// Number of machines in the pool.
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    /// True if the pool was never seeded.
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl Default for MachineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

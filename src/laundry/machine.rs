/// Length of one wash/dry cycle in seconds (30 minutes).
pub const CYCLE_SECONDS: u32 = 1800;

/// A single laundry machine in the shared pool.
///
/// A claimed machine has `in_use` set and a positive `time_left`; an idle
/// machine has `time_left == 0`. No state survives between cycles.
#[derive(Debug, Clone)]
pub struct Machine {
    /// Display name shown to users, e.g. "W1".
    pub name: String,
    /// Seconds left on the current cycle. Zero when idle.
    pub time_left: u32,
    /// Set while a cycle countdown is running.
    pub in_use: bool,
}

impl Machine {
    /// Create an idle machine with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_left: 0,
            in_use: false,
        }
    }
}

use super::registry::MachineRegistry;

/// Render the status line for one machine.
///
/// Minutes are reported as `time_left / 60 + 1`, so a machine with any time
/// on the clock always shows at least one minute left.
pub fn status_line(name: &str, time_left: u32) -> String {
    if time_left == 0 {
        format!("{name} is empty")
    } else {
        format!("{} has {} minutes left", name, time_left / 60 + 1)
    }
}

/// One status line per machine, in pool order. Pure read.
pub async fn report(registry: &MachineRegistry) -> Vec<String> {
    registry
        .snapshot()
        .await
        .iter()
        .map(|m| status_line(&m.name, m.time_left))
        .collect()
}

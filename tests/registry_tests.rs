#![allow(clippy::unwrap_used)]

use laundry_bot::laundry::registry::MachineRegistry;

#[tokio::test]
async fn test_pool_seeded_in_fixed_order() {
    let registry = MachineRegistry::new();
    let snapshot = registry.snapshot().await;

    let ids: Vec<&str> = snapshot.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["washer1", "washer2", "dryer1", "dryer2"]);

    let names: Vec<&str> = snapshot.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["W1", "W2", "D1", "D2"]);
}

#[tokio::test]
async fn test_machines_start_empty() {
    let registry = MachineRegistry::new();
    assert_eq!(registry.len(), 4);

    for m in registry.snapshot().await {
        assert_eq!(m.time_left, 0);
        assert!(!m.in_use);
    }
}

#[test]
fn test_get_known_machine() {
    let registry = MachineRegistry::new();
    assert!(registry.get("washer1").is_ok());
    assert!(registry.get("dryer2").is_ok());
}

#[test]
fn test_get_unknown_machine() {
    let registry = MachineRegistry::new();

    let result = registry.get("washer3");
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Unknown machine"));
    assert!(error_msg.contains("washer3"));
}

#[test]
fn test_get_is_case_sensitive() {
    let registry = MachineRegistry::new();
    assert!(registry.get("Washer1").is_err());
}

#[tokio::test]
async fn test_mutating_one_machine_leaves_others_untouched() {
    let registry = MachineRegistry::new();

    {
        let machine = registry.get("washer1").unwrap();
        let mut m = machine.lock().await;
        m.time_left = 1800;
        m.in_use = true;
    }

    for m in registry.snapshot().await {
        if m.id == "washer1" {
            assert!(m.in_use);
            assert_eq!(m.time_left, 1800);
        } else {
            assert!(!m.in_use);
            assert_eq!(m.time_left, 0);
        }
    }
}

#[tokio::test]
async fn test_entries_match_snapshot_order() {
    let registry = MachineRegistry::new();

    let entries = registry.entries().await;
    let snapshot = registry.snapshot().await;

    assert_eq!(entries.len(), snapshot.len());
    for ((id, name), m) in entries.iter().zip(snapshot.iter()) {
        assert_eq!(id, &m.id);
        assert_eq!(name, &m.name);
    }
}

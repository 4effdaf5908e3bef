use anyhow::Result;

use super::LifecycleStatus;

#[test]
fn it_toggles_between_statuses() {
    assert_eq!(LifecycleStatus::Active.toggled(), LifecycleStatus::Inactive);
    assert_eq!(LifecycleStatus::Inactive.toggled(), LifecycleStatus::Active);
    assert_eq!(LifecycleStatus::Active.toggled().toggled(), LifecycleStatus::Active);
}

#[test]
fn it_serializes_to_the_wire_form() -> Result<()> {
    assert_eq!(serde_json::to_string(&LifecycleStatus::Active)?, "\"ACTIVE\"");
    assert_eq!(serde_json::to_string(&LifecycleStatus::Inactive)?, "\"INACTIVE\"");

    let parsed: LifecycleStatus = serde_json::from_str("\"INACTIVE\"")?;
    assert_eq!(parsed, LifecycleStatus::Inactive);

    return Ok(());
}

#[test]
fn it_maps_statuses_to_mutation_actions() {
    assert_eq!(LifecycleStatus::Active.action(), "activate");
    assert_eq!(LifecycleStatus::Inactive.action(), "deactivate");
}

use std::io::Write as _;

use crate::{
    domain::{CapacityState, Employee, EmployeeStatus, Pool, PoolKind, RosterSummary},
    error::RosterError,
    roster::{load_roster_file, parse_roster, roster_to_json, seed_pools, validate_pools},
};

#[test]
fn seed_roster_is_a_valid_partition() {
    let pools = seed_pools();
    validate_pools(&pools).expect("seed is valid");
    assert_eq!(pools.len(), 3);
    assert_eq!(pools[2].kind, PoolKind::Unassigned);
}

#[test]
fn seed_summary_counts_statuses() {
    let summary = RosterSummary::of(&seed_pools());
    assert_eq!(
        summary,
        RosterSummary {
            total: 7,
            active: 5,
            absent: 1,
            busy: 1,
        }
    );
}

#[test]
fn capacity_state_tracks_headcount() {
    let staff = |id| Employee::new(id, "x", "y", "z", EmployeeStatus::Active);
    let mut line = Pool::production("line", "Line", Some(2), vec![staff(1)]);
    assert_eq!(line.capacity_state(), CapacityState::Open { free: 1 });
    assert_eq!(line.open_slots(), 1);

    line.employees.push(staff(2));
    assert_eq!(line.capacity_state(), CapacityState::Full);
    assert!(!line.is_over_capacity());

    line.employees.push(staff(3));
    assert_eq!(line.capacity_state(), CapacityState::Over { excess: 1 });
    assert!(line.is_over_capacity());
    assert_eq!(line.open_slots(), 0);

    let pool = Pool::unassigned("pool", "Pool", vec![staff(4)]);
    assert_eq!(pool.capacity_state(), CapacityState::Uncapped);
    assert_eq!(pool.open_slots(), 0);
}

#[test]
fn unassigned_pool_never_shows_placeholders() {
    let mut pool = Pool::unassigned("pool", "Pool", vec![]);
    pool.max_capacity = Some(4);
    assert_eq!(pool.open_slots(), 0);
}

#[test]
fn status_count_per_pool() {
    let pools = seed_pools();
    assert_eq!(pools[1].status_count(EmployeeStatus::Busy), 1);
    assert_eq!(pools[2].status_count(EmployeeStatus::Absent), 1);
    assert_eq!(pools[2].status_count(EmployeeStatus::Active), 3);
}

#[test]
fn parses_roster_document() {
    let raw = r#"{
        "pools": [
            {
                "id": "line-1",
                "name": "Line 1",
                "type": "production",
                "max_capacity": 2,
                "employees": [
                    { "id": 10, "name": "Ann", "position": "Welder", "emoji": "🧑‍🏭", "status": "busy" }
                ]
            },
            { "id": "bench", "name": "Bench", "type": "unassigned" }
        ]
    }"#;

    let pools = parse_roster(raw).expect("parse");
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].max_capacity, Some(2));
    assert_eq!(pools[0].employees[0].status, EmployeeStatus::Busy);
    assert!(pools[1].employees.is_empty());
    assert_eq!(pools[1].max_capacity, None);
}

#[test]
fn rejects_duplicate_pool_ids() {
    let mut pools = seed_pools();
    pools[1].id = pools[0].id.clone();
    pools[1].employees.clear();
    assert!(matches!(
        validate_pools(&pools),
        Err(RosterError::DuplicatePool(id)) if id.as_str() == "production-1"
    ));
}

#[test]
fn rejects_employee_in_two_pools() {
    let mut pools = seed_pools();
    let copy = pools[0].employees[0].clone();
    pools[2].employees.push(copy);
    match validate_pools(&pools) {
        Err(RosterError::DuplicateEmployee {
            employee_id,
            first,
            second,
        }) => {
            assert_eq!(employee_id.0, 1);
            assert_eq!(first.as_str(), "production-1");
            assert_eq!(second.as_str(), "unassigned");
        }
        other => panic!("unexpected validation result: {other:?}"),
    }
}

#[test]
fn rejects_empty_roster() {
    assert!(matches!(
        parse_roster(r#"{ "pools": [] }"#),
        Err(RosterError::Empty)
    ));
}

#[test]
fn rejects_unknown_status() {
    let raw = r#"{ "pools": [ { "id": "a", "name": "A", "type": "production",
        "employees": [ { "id": 1, "name": "n", "position": "p", "emoji": "e", "status": "sleeping" } ] } ] }"#;
    assert!(matches!(parse_roster(raw), Err(RosterError::Malformed(_))));
}

#[test]
fn loads_roster_written_to_disk() {
    let json = roster_to_json(&seed_pools()).expect("serialize");
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write");

    let pools = load_roster_file(file.path()).expect("load");
    assert_eq!(pools, seed_pools());
}

#[test]
fn missing_roster_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = load_roster_file(&path).unwrap_err();
    assert!(matches!(err, RosterError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn employee_ids_are_plain_integers_on_the_wire() {
    let employee = Employee::new(42, "Ren", "Welder", "🔥", EmployeeStatus::Active);
    let value = serde_json::to_value(&employee).expect("serialize");
    assert_eq!(value["id"], serde_json::json!(42));
    assert_eq!(employee.id.to_string(), "42");

    let back: Employee = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, employee);
}

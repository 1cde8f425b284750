use std::borrow::Cow;

use crate::{
    domain::{Employee, EmployeeId, EmployeeStatus, MoveRequest, Pool, PoolId},
    engine::{append_request, insertion_index, reassign, try_reassign},
    error::MoveRejection,
    roster::seed_pools,
};

fn staff(id: i64, name: &str) -> Employee {
    Employee::new(id, name, "operator", "🙂", EmployeeStatus::Active)
}

fn names(pool: &Pool) -> Vec<&str> {
    pool.employees.iter().map(|e| e.name.as_str()).collect()
}

fn find<'a>(pools: &'a [Pool], id: &str) -> &'a Pool {
    pools
        .iter()
        .find(|pool| pool.id.as_str() == id)
        .expect("pool present")
}

fn abc_board() -> Vec<Pool> {
    vec![
        Pool::production(
            "p1",
            "Line 1",
            Some(3),
            vec![staff(1, "A"), staff(2, "B"), staff(3, "C")],
        ),
        Pool::production("p2", "Line 2", Some(3), vec![staff(4, "D")]),
        Pool::unassigned("pool", "Pool", vec![]),
    ]
}

fn sorted_ids(pools: &[Pool]) -> Vec<EmployeeId> {
    let mut ids: Vec<EmployeeId> = pools
        .iter()
        .flat_map(|pool| pool.employees.iter().map(|e| e.id))
        .collect();
    ids.sort();
    ids
}

#[test]
fn same_pool_move_forward_compensates_for_removal() {
    let pools = abc_board();
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p1", 0, 2)).expect("move");
    assert_eq!(names(find(&next, "p1")), ["B", "A", "C"]);
}

#[test]
fn same_pool_move_backward_uses_target_as_is() {
    let pools = abc_board();
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p1", 2, 0)).expect("move");
    assert_eq!(names(find(&next, "p1")), ["C", "A", "B"]);
}

#[test]
fn same_pool_drop_on_own_slot_keeps_order() {
    let pools = abc_board();
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p1", 1, 1)).expect("move");
    assert_eq!(names(find(&next, "p1")), ["A", "B", "C"]);
}

#[test]
fn cross_pool_move_inserts_at_target_without_compensation() {
    let pools = vec![
        Pool::production("p1", "Line 1", None, vec![staff(1, "A"), staff(2, "B")]),
        Pool::production("p2", "Line 2", None, vec![staff(3, "C")]),
    ];
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p2", 0, 1)).expect("move");
    assert_eq!(names(find(&next, "p1")), ["B"]);
    assert_eq!(names(find(&next, "p2")), ["C", "A"]);
}

#[test]
fn cross_pool_move_to_front() {
    let pools = abc_board();
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p2", 2, 0)).expect("move");
    assert_eq!(names(find(&next, "p1")), ["A", "B"]);
    assert_eq!(names(find(&next, "p2")), ["C", "D"]);
}

#[test]
fn target_past_end_appends() {
    let pools = abc_board();
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p2", 0, 42)).expect("move");
    assert_eq!(names(find(&next, "p2")), ["D", "A"]);
}

#[test]
fn untouched_pools_are_equal_after_move() {
    let pools = abc_board();
    let next = try_reassign(&pools, &MoveRequest::new("p1", "p2", 0, 0)).expect("move");
    assert_eq!(find(&next, "pool"), find(&pools, "pool"));
    assert_eq!(
        next.iter().map(|p| p.id.clone()).collect::<Vec<_>>(),
        pools.iter().map(|p| p.id.clone()).collect::<Vec<_>>()
    );
}

#[test]
fn unknown_source_pool_is_rejected() {
    let pools = abc_board();
    let err = try_reassign(&pools, &MoveRequest::new("nope", "p1", 0, 0)).unwrap_err();
    assert_eq!(err, MoveRejection::UnknownSourcePool(PoolId::new("nope")));
}

#[test]
fn unknown_target_pool_is_rejected() {
    let pools = abc_board();
    let err = try_reassign(&pools, &MoveRequest::new("p1", "nope", 0, 0)).unwrap_err();
    assert_eq!(err, MoveRejection::UnknownTargetPool(PoolId::new("nope")));
}

#[test]
fn stale_employee_index_is_rejected() {
    let pools = abc_board();
    let err = try_reassign(&pools, &MoveRequest::new("p2", "p1", 1, 0)).unwrap_err();
    assert_eq!(
        err,
        MoveRejection::EmployeeIndexOutOfRange {
            pool_id: PoolId::new("p2"),
            index: 1,
            len: 1,
        }
    );
}

#[test]
fn rejected_move_returns_the_input_slice() {
    let pools = abc_board();
    for request in [
        MoveRequest::new("ghost", "p1", 0, 0),
        MoveRequest::new("p1", "ghost", 0, 0),
        MoveRequest::new("pool", "p1", 0, 0),
    ] {
        let result = reassign(&pools, &request);
        match result {
            Cow::Borrowed(same) => assert!(std::ptr::eq(same, pools.as_slice())),
            Cow::Owned(_) => panic!("rejected request must not allocate a new roster"),
        }
    }
}

#[test]
fn successful_move_returns_owned_roster() {
    let pools = abc_board();
    let result = reassign(&pools, &MoveRequest::new("p1", "pool", 0, 0));
    assert!(matches!(result, Cow::Owned(_)));
    assert_eq!(names(find(&pools, "p1")), ["A", "B", "C"]);
}

#[test]
fn every_single_move_on_seed_preserves_partition() {
    let pools = seed_pools();
    let before = sorted_ids(&pools);

    for from in &pools {
        for employee_index in 0..from.employees.len() + 1 {
            for to in &pools {
                for target_index in 0..to.employees.len() + 2 {
                    let request = MoveRequest {
                        from_pool_id: from.id.clone(),
                        to_pool_id: to.id.clone(),
                        employee_index,
                        target_index,
                    };
                    let next = reassign(&pools, &request);
                    assert_eq!(sorted_ids(&next), before, "request {request:?}");
                    assert_eq!(next.len(), pools.len());
                }
            }
        }
    }
}

#[test]
fn chained_moves_keep_every_employee_exactly_once() {
    let mut pools = seed_pools();
    let before = sorted_ids(&pools);
    let script = [
        MoveRequest::new("unassigned", "production-1", 0, 0),
        MoveRequest::new("production-1", "production-2", 2, 1),
        MoveRequest::new("production-2", "production-2", 0, 2),
        MoveRequest::new("unassigned", "production-2", 2, 9),
        MoveRequest::new("production-1", "unassigned", 5, 0),
        MoveRequest::new("production-1", "production-1", 1, 0),
    ];

    for request in &script {
        pools = reassign(&pools, request).into_owned();
        assert_eq!(sorted_ids(&pools), before);
    }
    assert_eq!(
        pools.iter().map(Pool::len).sum::<usize>(),
        seed_pools().iter().map(Pool::len).sum::<usize>()
    );
}

#[test]
fn capacity_is_not_enforced() {
    let pools = vec![
        Pool::production("full", "Full", Some(1), vec![staff(1, "A")]),
        Pool::unassigned("pool", "Pool", vec![staff(2, "B")]),
    ];
    let next = try_reassign(&pools, &MoveRequest::new("pool", "full", 0, 1)).expect("move");
    let full = find(&next, "full");
    assert_eq!(names(full), ["A", "B"]);
    assert!(full.is_over_capacity());
}

#[test]
fn append_request_targets_destination_length() {
    let pools = vec![
        Pool::production("p1", "Line 1", None, vec![staff(1, "A")]),
        Pool::production("p2", "Line 2", None, vec![]),
    ];
    let request = append_request(&pools, &PoolId::new("p1"), 0, &PoolId::new("p2"))
        .expect("cross-pool append");
    assert_eq!(request.target_index, 0);

    let next = try_reassign(&pools, &request).expect("move");
    assert_eq!(names(find(&next, "p2")), ["A"]);
    assert!(find(&next, "p1").is_empty());
}

#[test]
fn append_request_onto_own_pool_is_nothing() {
    let pools = abc_board();
    assert_eq!(
        append_request(&pools, &PoolId::new("p1"), 0, &PoolId::new("p1")),
        None
    );
}

#[test]
fn append_request_to_unknown_pool_is_nothing() {
    let pools = abc_board();
    assert_eq!(
        append_request(&pools, &PoolId::new("p1"), 0, &PoolId::new("ghost")),
        None
    );
}

#[test]
fn insertion_index_only_compensates_within_one_pool() {
    assert_eq!(insertion_index(&MoveRequest::new("a", "a", 0, 2)), 1);
    assert_eq!(insertion_index(&MoveRequest::new("a", "a", 2, 0)), 0);
    assert_eq!(insertion_index(&MoveRequest::new("a", "a", 1, 1)), 1);
    assert_eq!(insertion_index(&MoveRequest::new("a", "b", 0, 2)), 2);
}

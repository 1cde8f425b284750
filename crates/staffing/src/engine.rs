//! Reassignment engine: the only mutator of the roster.
//!
//! Every call produces a fresh pools collection. A request that does not match
//! the current roster (unknown pool, stale employee index) is a no-op.

use std::borrow::Cow;

use tracing::debug;

use crate::{
    domain::{MoveRequest, Pool, PoolId},
    error::MoveRejection,
};

fn pool_position(pools: &[Pool], pool_id: &PoolId) -> Option<usize> {
    pools.iter().position(|pool| &pool.id == pool_id)
}

/// Index at which the moved employee is inserted into the destination, after
/// it has already been removed from the source.
///
/// Within one pool the removal shifts later slots left by one, so targets past
/// the original slot are compensated by one.
pub fn insertion_index(request: &MoveRequest) -> usize {
    if request.is_same_pool() && request.target_index > request.employee_index {
        request.target_index - 1
    } else {
        request.target_index
    }
}

pub fn try_reassign(pools: &[Pool], request: &MoveRequest) -> Result<Vec<Pool>, MoveRejection> {
    let from = pool_position(pools, &request.from_pool_id)
        .ok_or_else(|| MoveRejection::UnknownSourcePool(request.from_pool_id.clone()))?;
    let to = pool_position(pools, &request.to_pool_id)
        .ok_or_else(|| MoveRejection::UnknownTargetPool(request.to_pool_id.clone()))?;

    let source_len = pools[from].employees.len();
    if request.employee_index >= source_len {
        return Err(MoveRejection::EmployeeIndexOutOfRange {
            pool_id: request.from_pool_id.clone(),
            index: request.employee_index,
            len: source_len,
        });
    }

    let mut next = pools.to_vec();
    let employee = next[from].employees.remove(request.employee_index);

    let destination = &mut next[to].employees;
    // Targets past the end append, matching array splice semantics.
    let at = insertion_index(request).min(destination.len());
    destination.insert(at, employee);

    Ok(next)
}

/// Applies a move with the silent failure policy: a rejected request hands
/// back the input slice itself.
pub fn reassign<'a>(pools: &'a [Pool], request: &MoveRequest) -> Cow<'a, [Pool]> {
    match try_reassign(pools, request) {
        Ok(next) => {
            debug!(
                from = %request.from_pool_id,
                to = %request.to_pool_id,
                employee_index = request.employee_index,
                target_index = request.target_index,
                "applied reassignment"
            );
            Cow::Owned(next)
        }
        Err(rejection) => {
            debug!(%rejection, "ignored move request");
            Cow::Borrowed(pools)
        }
    }
}

/// Request for a drop on a pool's body rather than on a card slot: append to
/// the end of the destination. Dropping onto the pool the employee already
/// belongs to yields nothing.
pub fn append_request(
    pools: &[Pool],
    from_pool_id: &PoolId,
    employee_index: usize,
    to_pool_id: &PoolId,
) -> Option<MoveRequest> {
    if from_pool_id == to_pool_id {
        return None;
    }
    let destination = pools.iter().find(|pool| &pool.id == to_pool_id)?;
    Some(MoveRequest {
        from_pool_id: from_pool_id.clone(),
        to_pool_id: to_pool_id.clone(),
        employee_index,
        target_index: destination.employees.len(),
    })
}

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{EmployeeId, PoolId};

/// Why a move request left the roster untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("unknown source pool '{0}'")]
    UnknownSourcePool(PoolId),
    #[error("unknown target pool '{0}'")]
    UnknownTargetPool(PoolId),
    #[error("employee index {index} is out of range for pool '{pool_id}' ({len} employees)")]
    EmployeeIndexOutOfRange {
        pool_id: PoolId,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("roster contains no pools")]
    Empty,
    #[error("duplicate pool id '{0}'")]
    DuplicatePool(PoolId),
    #[error("employee {employee_id} appears in both '{first}' and '{second}'")]
    DuplicateEmployee {
        employee_id: EmployeeId,
        first: PoolId,
        second: PoolId,
    },
}

//! Staffing domain for the factory dashboard: pools of employees, the
//! reassignment engine that moves them, and the drag interaction that feeds it.

pub mod domain;
pub mod drag;
pub mod engine;
pub mod error;
pub mod roster;

pub use domain::{
    CapacityState, Employee, EmployeeId, EmployeeStatus, MoveRequest, Pool, PoolId, PoolKind,
    RosterSummary,
};
pub use drag::{DragEvent, DragSession, DragSource, DropTarget};
pub use engine::{append_request, reassign, try_reassign};
pub use error::{MoveRejection, RosterError};

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod engine_tests;

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod drag_tests;

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod roster_tests;

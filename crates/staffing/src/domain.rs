use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(pub String);

impl PoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PoolId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PoolId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Absent,
    Busy,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [Self::Active, Self::Absent, Self::Busy];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Production,
    Unassigned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub emoji: String,
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        position: impl Into<String>,
        emoji: impl Into<String>,
        status: EmployeeStatus,
    ) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            position: position.into(),
            emoji: emoji.into(),
            status,
        }
    }
}

/// How a pool's headcount relates to its advisory capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityState {
    Uncapped,
    Open { free: usize },
    Full,
    Over { excess: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PoolKind,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<usize>,
}

impl Pool {
    pub fn production(
        id: impl Into<String>,
        name: impl Into<String>,
        max_capacity: Option<usize>,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            id: PoolId::new(id),
            name: name.into(),
            kind: PoolKind::Production,
            employees,
            max_capacity,
        }
    }

    pub fn unassigned(
        id: impl Into<String>,
        name: impl Into<String>,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            id: PoolId::new(id),
            name: name.into(),
            kind: PoolKind::Unassigned,
            employees,
            max_capacity: None,
        }
    }

    pub fn is_production(&self) -> bool {
        self.kind == PoolKind::Production
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn status_count(&self, status: EmployeeStatus) -> usize {
        self.employees.iter().filter(|e| e.status == status).count()
    }

    pub fn capacity_state(&self) -> CapacityState {
        let Some(max) = self.max_capacity else {
            return CapacityState::Uncapped;
        };
        let len = self.employees.len();
        match len.cmp(&max) {
            std::cmp::Ordering::Less => CapacityState::Open { free: max - len },
            std::cmp::Ordering::Equal => CapacityState::Full,
            std::cmp::Ordering::Greater => CapacityState::Over { excess: len - max },
        }
    }

    pub fn is_over_capacity(&self) -> bool {
        matches!(self.capacity_state(), CapacityState::Over { .. })
    }

    /// Number of empty placeholder slots drawn after the cards. Only capped
    /// production lines get placeholders.
    pub fn open_slots(&self) -> usize {
        if self.kind == PoolKind::Unassigned {
            return 0;
        }
        match self.capacity_state() {
            CapacityState::Open { free } => free,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total: usize,
    pub active: usize,
    pub absent: usize,
    pub busy: usize,
}

impl RosterSummary {
    pub fn of(pools: &[Pool]) -> Self {
        pools
            .iter()
            .flat_map(|pool| pool.employees.iter())
            .fold(Self::default(), |mut acc, employee| {
                acc.total += 1;
                match employee.status {
                    EmployeeStatus::Active => acc.active += 1,
                    EmployeeStatus::Absent => acc.absent += 1,
                    EmployeeStatus::Busy => acc.busy += 1,
                }
                acc
            })
    }
}

/// Transient command describing one drag-and-drop reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub from_pool_id: PoolId,
    pub to_pool_id: PoolId,
    pub employee_index: usize,
    pub target_index: usize,
}

impl MoveRequest {
    pub fn new(
        from_pool_id: impl Into<PoolId>,
        to_pool_id: impl Into<PoolId>,
        employee_index: usize,
        target_index: usize,
    ) -> Self {
        Self {
            from_pool_id: from_pool_id.into(),
            to_pool_id: to_pool_id.into(),
            employee_index,
            target_index,
        }
    }

    pub fn is_same_pool(&self) -> bool {
        self.from_pool_id == self.to_pool_id
    }
}

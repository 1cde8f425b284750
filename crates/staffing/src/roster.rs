use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    domain::{Employee, EmployeeStatus, Pool, PoolId},
    error::RosterError,
};

pub const UNASSIGNED_POOL_ID: &str = "unassigned";

/// On-disk roster document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFile {
    pub pools: Vec<Pool>,
}

/// Sample floor used when no roster file is configured.
pub fn seed_pools() -> Vec<Pool> {
    vec![
        Pool::production(
            "production-1",
            "ラインA",
            Some(6),
            vec![
                Employee::new(1, "佐藤さん", "エンジニア", "👨‍💻", EmployeeStatus::Active),
                Employee::new(2, "鈴木さん", "デザイナー", "👩‍🎨", EmployeeStatus::Active),
            ],
        ),
        Pool::production(
            "production-2",
            "ラインB",
            Some(6),
            vec![Employee::new(
                3,
                "武田さん",
                "マネージャー",
                "👨‍💼",
                EmployeeStatus::Busy,
            )],
        ),
        Pool::unassigned(
            UNASSIGNED_POOL_ID,
            "未割り当て",
            vec![
                Employee::new(4, "田中さん", "エンジニア", "👩‍💻", EmployeeStatus::Absent),
                Employee::new(5, "千葉くん", "アナリスト", "👨‍🔬", EmployeeStatus::Active),
                Employee::new(6, "関永さん", "エンジニア", "👨‍💻", EmployeeStatus::Active),
                Employee::new(7, "山本さん", "デザイナー", "👩‍🎨", EmployeeStatus::Active),
            ],
        ),
    ]
}

/// Checks the partition invariant: pool ids are unique and every employee
/// lives in exactly one pool.
pub fn validate_pools(pools: &[Pool]) -> Result<(), RosterError> {
    if pools.is_empty() {
        return Err(RosterError::Empty);
    }

    let mut pool_ids: Vec<&PoolId> = Vec::with_capacity(pools.len());
    let mut owners = HashMap::new();
    for pool in pools {
        if pool_ids.contains(&&pool.id) {
            return Err(RosterError::DuplicatePool(pool.id.clone()));
        }
        pool_ids.push(&pool.id);

        for employee in &pool.employees {
            if let Some(first) = owners.insert(employee.id, &pool.id) {
                return Err(RosterError::DuplicateEmployee {
                    employee_id: employee.id,
                    first: first.clone(),
                    second: pool.id.clone(),
                });
            }
        }
    }
    Ok(())
}

pub fn parse_roster(raw: &str) -> Result<Vec<Pool>, RosterError> {
    let file: RosterFile = serde_json::from_str(raw)?;
    validate_pools(&file.pools)?;
    Ok(file.pools)
}

pub fn load_roster_file(path: &Path) -> Result<Vec<Pool>, RosterError> {
    let raw = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pools = parse_roster(&raw)?;
    info!(
        path = %path.display(),
        pools = pools.len(),
        "loaded roster file"
    );
    Ok(pools)
}

pub fn roster_to_json(pools: &[Pool]) -> Result<String, RosterError> {
    let file = RosterFile {
        pools: pools.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

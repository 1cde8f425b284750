use std::{fmt, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use staffing::{
    append_request, roster, try_reassign, CapacityState, EmployeeStatus, MoveRejection,
    MoveRequest, Pool, PoolId, RosterSummary,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tools", about = "Inspect staffing rosters and apply moves")]
struct Cli {
    /// Roster JSON file; the sample roster is used when omitted.
    #[arg(long, global = true)]
    roster: Option<PathBuf>,
    /// Print resulting rosters as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show pools, status counts and capacity.
    Show,
    /// Move one employee to a slot, possibly within the same pool.
    Reassign {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        target: usize,
    },
    /// Move one employee to the end of another pool.
    Append {
        #[arg(long)]
        from: String,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        to: String,
    },
    /// Validate the roster and report totals.
    Check,
    /// Print the sample roster as JSON.
    Seed,
}

fn load(path: Option<&PathBuf>) -> Result<Vec<Pool>> {
    match path {
        Some(path) => roster::load_roster_file(path)
            .with_context(|| format!("failed to load roster '{}'", path.display())),
        None => Ok(roster::seed_pools()),
    }
}

fn capacity_text(pool: &Pool) -> String {
    let Some(max) = pool.max_capacity else {
        return format!("{}", pool.len());
    };
    match pool.capacity_state() {
        CapacityState::Over { excess } => format!("{}/{max} (over by {excess})", pool.len()),
        CapacityState::Full => format!("{}/{max} (full)", pool.len()),
        CapacityState::Open { .. } | CapacityState::Uncapped => format!("{}/{max}", pool.len()),
    }
}

/// Plain-text roster listing: one header line per pool, its cards, then totals.
struct RosterTable<'a>(&'a [Pool]);

impl fmt::Display for RosterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pool in self.0 {
            writeln!(
                f,
                "{} [{}] {}  active={} absent={} busy={}",
                pool.name,
                pool.id,
                capacity_text(pool),
                pool.status_count(EmployeeStatus::Active),
                pool.status_count(EmployeeStatus::Absent),
                pool.status_count(EmployeeStatus::Busy),
            )?;
            for (index, employee) in pool.employees.iter().enumerate() {
                writeln!(
                    f,
                    "  {index:>2}. {} {} ({}, {:?})",
                    employee.emoji, employee.name, employee.position, employee.status
                )?;
            }
        }
        let summary = RosterSummary::of(self.0);
        writeln!(
            f,
            "total={} active={} absent={} busy={}",
            summary.total, summary.active, summary.absent, summary.busy
        )
    }
}

fn print_roster(pools: &[Pool], json: bool) -> Result<()> {
    if json {
        println!("{}", roster::roster_to_json(pools)?);
    } else {
        print!("{}", RosterTable(pools));
    }
    Ok(())
}

/// Applies a move, handing back the untouched roster and the reason when the
/// engine rejects it.
fn apply_move(pools: Vec<Pool>, request: &MoveRequest) -> (Vec<Pool>, Option<MoveRejection>) {
    match try_reassign(&pools, request) {
        Ok(next) => {
            info!(from = %request.from_pool_id, to = %request.to_pool_id, "move applied");
            (next, None)
        }
        Err(rejection) => {
            warn!(%rejection, "move rejected; roster unchanged");
            (pools, Some(rejection))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Show => print_roster(&load(cli.roster.as_ref())?, cli.json)?,
        Command::Reassign {
            from,
            to,
            index,
            target,
        } => {
            let pools = load(cli.roster.as_ref())?;
            let request = MoveRequest::new(from, to, index, target);
            let (pools, _) = apply_move(pools, &request);
            print_roster(&pools, cli.json)?;
        }
        Command::Append { from, index, to } => {
            let pools = load(cli.roster.as_ref())?;
            let (from, to) = (PoolId::new(from), PoolId::new(to));
            let pools = match append_request(&pools, &from, index, &to) {
                Some(request) => apply_move(pools, &request).0,
                None => {
                    warn!(%from, %to, "append skipped: target is the source pool or unknown");
                    pools
                }
            };
            print_roster(&pools, cli.json)?;
        }
        Command::Check => {
            let pools = load(cli.roster.as_ref())?;
            let summary = RosterSummary::of(&pools);
            let over: Vec<&str> = pools
                .iter()
                .filter(|pool| pool.is_over_capacity())
                .map(|pool| pool.id.as_str())
                .collect();
            println!("ok: {} pools, {} employees", pools.len(), summary.total);
            if !over.is_empty() {
                println!("over capacity: {}", over.join(", "));
            }
        }
        Command::Seed => println!("{}", roster::roster_to_json(&roster::seed_pools())?),
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use staffing::{roster, Pool};
use tracing_subscriber::EnvFilter;

use crate::config::{load_startup_config, Cli, StartupConfig};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::reducer::{DashboardState, RosterSource};
use crate::ui::{DashboardApp, PersistedDashboardSettings, SETTINGS_STORAGE_KEY};

const UI_EVENT_QUEUE_CAPACITY: usize = 1024;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Picks the roster to start from. A configured roster that fails to load
/// falls back to the sample data and reports why.
fn initial_roster(startup: &StartupConfig) -> (Vec<Pool>, RosterSource, Option<UiError>) {
    let Some(path) = &startup.roster_path else {
        return (roster::seed_pools(), RosterSource::Seed, None);
    };
    match roster::load_roster_file(path) {
        Ok(pools) => (pools, RosterSource::File(path.clone()), None),
        Err(err) => {
            tracing::error!(path = %path.display(), "startup roster failed to load: {err}");
            (
                roster::seed_pools(),
                RosterSource::Seed,
                Some(UiError::from_roster_error(UiErrorContext::Startup, &err)),
            )
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let startup = load_startup_config(&cli, |name| std::env::var(name).ok())?;
    init_tracing(&startup.log_filter);

    let (pools, source, startup_error) = initial_roster(&startup);
    tracing::info!(
        pools = pools.len(),
        employees = staffing::RosterSummary::of(&pools).total,
        "starting dashboard"
    );

    let mut state = DashboardState::new(pools, source);
    if let Some(err) = startup_error {
        state.reduce(UiEvent::Error(err));
    }

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Factory Staffing Dashboard")
            .with_inner_size([1360.0, 880.0])
            .with_min_inner_size([1024.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Factory Staffing Dashboard",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedDashboardSettings>(&text).ok())
            });
            Ok(Box::new(DashboardApp::new(
                ui_tx, ui_rx, state, &startup, persisted,
            )))
        }),
    )
    .map_err(|err| anyhow!("dashboard window failed: {err}"))
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod reducer_tests;

#[cfg(test)]
#[path = "tests/frame_events_tests.rs"]
mod frame_events_tests;

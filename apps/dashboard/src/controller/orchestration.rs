//! Helpers that turn UI actions into queued controller events.

use std::path::PathBuf;

use crossbeam_channel::{Sender, TrySendError};
use staffing::roster::load_roster_file;

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    let event_name = event.name();
    match ui_tx.try_send(event) {
        Ok(()) => {
            tracing::trace!(event = event_name, "queued ui event");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue is full; event dropped");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "ui event queue disconnected");
            false
        }
    }
}

pub fn roster_loaded_event(path: PathBuf) -> UiEvent {
    match load_roster_file(&path) {
        Ok(pools) => UiEvent::RosterLoaded { path, pools },
        Err(err) => UiEvent::Error(UiError::from_roster_error(UiErrorContext::LoadRoster, &err)),
    }
}

pub fn open_roster_dialog(ui_tx: &Sender<UiEvent>) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Open roster")
        .add_filter("Roster", &["json"])
        .pick_file()
    else {
        tracing::debug!("roster dialog cancelled");
        return;
    };
    dispatch_ui_event(ui_tx, roster_loaded_event(path));
}

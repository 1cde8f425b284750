//! UI events and error modeling for the dashboard controller.

use std::path::PathBuf;

use staffing::{DragEvent, DragSession, DragSource, DropTarget, Pool, RosterError};

pub enum UiEvent {
    Drag(DragEvent),
    ResetRoster,
    RosterLoaded { path: PathBuf, pools: Vec<Pool> },
    Error(UiError),
    DismissBanner,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Drag(DragEvent::Start(_)) => "drag_start",
            UiEvent::Drag(DragEvent::Over(_)) => "drag_over",
            UiEvent::Drag(DragEvent::Leave) => "drag_leave",
            UiEvent::Drag(DragEvent::Drop(_)) => "drop",
            UiEvent::Drag(DragEvent::End) => "drag_end",
            UiEvent::ResetRoster => "reset_roster",
            UiEvent::RosterLoaded { .. } => "roster_loaded",
            UiEvent::Error(_) => "error",
            UiEvent::DismissBanner => "dismiss_banner",
        }
    }
}

/// What the pool widgets observed about the pointer during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameDragInput {
    /// Card carried by the pointer at the end of the frame, if any.
    pub carried: Option<DragSource>,
    pub hovered: Option<DropTarget>,
    pub dropped: Option<DropTarget>,
    pub released: bool,
}

/// Translates one frame of widget observations into the drag protocol,
/// emitting only transitions relative to the current session.
pub fn frame_drag_events(session: &DragSession, input: &FrameDragInput) -> Vec<DragEvent> {
    let mut events = Vec::new();
    let mut active = session.is_active();
    let mut current_hover = session.hovered().cloned();

    if let Some(carried) = &input.carried {
        if session.source() != Some(carried) {
            events.push(DragEvent::Start(carried.clone()));
            active = true;
            current_hover = None;
        }
    }

    if let Some(target) = &input.dropped {
        events.push(DragEvent::Drop(target.clone()));
    } else if active && input.hovered != current_hover {
        events.push(match input.hovered.clone() {
            Some(target) => DragEvent::Over(target),
            None => DragEvent::Leave,
        });
    }

    if active && (input.released || input.carried.is_none()) {
        events.push(DragEvent::End);
    }

    events
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Io,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    LoadRoster,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_roster_error(context: UiErrorContext, err: &RosterError) -> Self {
        let category = match err {
            RosterError::Io { .. } => UiErrorCategory::Io,
            RosterError::Malformed(_)
            | RosterError::Empty
            | RosterError::DuplicatePool(_)
            | RosterError::DuplicateEmployee { .. } => UiErrorCategory::Validation,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner_text(&self) -> String {
        let prefix = match (self.context, self.category) {
            (UiErrorContext::Startup, _) => "Startup roster unavailable, showing sample data",
            (UiErrorContext::LoadRoster, UiErrorCategory::Validation) => "Roster file rejected",
            (UiErrorContext::LoadRoster, UiErrorCategory::Io) => "Could not open roster file",
        };
        format!("{prefix}: {}", self.message)
    }
}

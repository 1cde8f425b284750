//! Reducer-like state transitions for the dashboard.

use std::{borrow::Cow, path::PathBuf};

use staffing::{reassign, DragEvent, DragSession, Pool, RosterSummary};

use crate::controller::events::{UiError, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    Seed,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Unchanged,
    TransientChanged,
    RosterReplaced,
}

pub struct DashboardState {
    pools: Vec<Pool>,
    startup_pools: Vec<Pool>,
    source: RosterSource,
    drag: DragSession,
    banner: Option<UiError>,
}

impl DashboardState {
    pub fn new(pools: Vec<Pool>, source: RosterSource) -> Self {
        Self {
            startup_pools: pools.clone(),
            pools,
            source,
            drag: DragSession::default(),
            banner: None,
        }
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn source(&self) -> &RosterSource {
        &self.source
    }

    pub fn banner(&self) -> Option<&UiError> {
        self.banner.as_ref()
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary::of(&self.pools)
    }

    pub fn reduce(&mut self, event: UiEvent) -> Reduction {
        match event {
            UiEvent::Drag(event) => self.apply_drag(event),
            UiEvent::ResetRoster => {
                tracing::info!("roster reset to startup state");
                self.pools = self.startup_pools.clone();
                self.drag = DragSession::default();
                Reduction::RosterReplaced
            }
            UiEvent::RosterLoaded { path, pools } => {
                tracing::info!(path = %path.display(), "roster replaced from file");
                self.startup_pools = pools.clone();
                self.pools = pools;
                self.source = RosterSource::File(path);
                self.drag = DragSession::default();
                self.banner = None;
                Reduction::RosterReplaced
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
                self.banner = Some(err);
                Reduction::TransientChanged
            }
            UiEvent::DismissBanner => {
                self.banner = None;
                Reduction::TransientChanged
            }
        }
    }

    fn apply_drag(&mut self, event: DragEvent) -> Reduction {
        let before = self.drag.clone();
        let Some(request) = self.drag.handle(event, &self.pools) else {
            return if before == self.drag {
                Reduction::Unchanged
            } else {
                Reduction::TransientChanged
            };
        };

        let next = match reassign(&self.pools, &request) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => return Reduction::TransientChanged,
        };
        self.pools = next;
        Reduction::RosterReplaced
    }
}

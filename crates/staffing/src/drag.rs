//! Transient drag-and-drop interaction state.
//!
//! Mirrors the pointer sequence a dashboard sees (start, hover, drop, end) and
//! turns completed drops into [`MoveRequest`]s. Nothing here touches the
//! roster; the caller hands the request to the engine.

use tracing::debug;

use crate::{
    domain::{MoveRequest, Pool, PoolId},
    engine::append_request,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragSource {
    pub pool_id: PoolId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A specific card slot inside a pool.
    Slot { pool_id: PoolId, index: usize },
    /// The pool container itself, outside any card.
    PoolBody { pool_id: PoolId },
}

impl DropTarget {
    pub fn pool_id(&self) -> &PoolId {
        match self {
            DropTarget::Slot { pool_id, .. } | DropTarget::PoolBody { pool_id } => pool_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start(DragSource),
    Over(DropTarget),
    Leave,
    Drop(DropTarget),
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    source: Option<DragSource>,
    hovered: Option<DropTarget>,
}

impl DragSession {
    pub fn source(&self) -> Option<&DragSource> {
        self.source.as_ref()
    }

    pub fn hovered(&self) -> Option<&DropTarget> {
        self.hovered.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_dragging(&self, pool_id: &PoolId, index: usize) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| &source.pool_id == pool_id && source.index == index)
    }

    /// Pool under the pointer, whether over a card slot or the pool body.
    pub fn hovered_pool(&self) -> Option<&PoolId> {
        self.hovered.as_ref().map(DropTarget::pool_id)
    }

    pub fn hovered_slot(&self, pool_id: &PoolId) -> Option<usize> {
        match &self.hovered {
            Some(DropTarget::Slot { pool_id: hovered, index }) if hovered == pool_id => {
                Some(*index)
            }
            _ => None,
        }
    }

    pub fn handle(&mut self, event: DragEvent, pools: &[Pool]) -> Option<MoveRequest> {
        match event {
            DragEvent::Start(source) => {
                debug!(pool = %source.pool_id, index = source.index, "drag started");
                self.source = Some(source);
                self.hovered = None;
                None
            }
            DragEvent::Over(target) => {
                self.hovered = Some(target);
                None
            }
            DragEvent::Leave => {
                self.hovered = None;
                None
            }
            DragEvent::Drop(target) => {
                self.hovered = None;
                let Some(source) = self.source.as_ref() else {
                    debug!("drop without a drag source ignored");
                    return None;
                };
                match target {
                    DropTarget::Slot { pool_id, index } => Some(MoveRequest {
                        from_pool_id: source.pool_id.clone(),
                        to_pool_id: pool_id,
                        employee_index: source.index,
                        target_index: index,
                    }),
                    DropTarget::PoolBody { pool_id } => {
                        append_request(pools, &source.pool_id, source.index, &pool_id)
                    }
                }
            }
            DragEvent::End => {
                self.source = None;
                self.hovered = None;
                None
            }
        }
    }
}

use staffing::{roster::seed_pools, DragEvent, DragSession, DragSource, DropTarget, PoolId};

use crate::controller::events::{frame_drag_events, FrameDragInput};

fn card(pool: &str, index: usize) -> DragSource {
    DragSource {
        pool_id: PoolId::new(pool),
        index,
    }
}

fn slot(pool: &str, index: usize) -> DropTarget {
    DropTarget::Slot {
        pool_id: PoolId::new(pool),
        index,
    }
}

/// Runs frames through a session the same way the app does.
fn run(session: &mut DragSession, frames: &[FrameDragInput]) -> Vec<DragEvent> {
    let pools = seed_pools();
    let mut all = Vec::new();
    for frame in frames {
        for event in frame_drag_events(session, frame) {
            session.handle(event.clone(), &pools);
            all.push(event);
        }
    }
    all
}

#[test]
fn idle_frames_emit_nothing() {
    let session = DragSession::default();
    assert!(frame_drag_events(&session, &FrameDragInput::default()).is_empty());
}

#[test]
fn full_drag_produces_protocol_sequence() {
    let mut session = DragSession::default();
    let frames = [
        FrameDragInput {
            carried: Some(card("unassigned", 0)),
            ..Default::default()
        },
        FrameDragInput {
            carried: Some(card("unassigned", 0)),
            hovered: Some(slot("production-1", 1)),
            ..Default::default()
        },
        FrameDragInput {
            carried: Some(card("unassigned", 0)),
            hovered: Some(slot("production-1", 1)),
            ..Default::default()
        },
        FrameDragInput {
            dropped: Some(slot("production-1", 1)),
            released: true,
            ..Default::default()
        },
    ];

    let events = run(&mut session, &frames);
    assert_eq!(
        events,
        vec![
            DragEvent::Start(card("unassigned", 0)),
            DragEvent::Over(slot("production-1", 1)),
            DragEvent::Drop(slot("production-1", 1)),
            DragEvent::End,
        ]
    );
    assert!(!session.is_active());
}

#[test]
fn leaving_every_target_emits_leave() {
    let mut session = DragSession::default();
    let frames = [
        FrameDragInput {
            carried: Some(card("production-1", 0)),
            hovered: Some(slot("production-2", 0)),
            ..Default::default()
        },
        FrameDragInput {
            carried: Some(card("production-1", 0)),
            ..Default::default()
        },
    ];
    let events = run(&mut session, &frames);
    assert_eq!(
        events,
        vec![
            DragEvent::Start(card("production-1", 0)),
            DragEvent::Over(slot("production-2", 0)),
            DragEvent::Leave,
        ]
    );
    assert!(session.is_active());
}

#[test]
fn release_outside_any_target_ends_without_drop() {
    let mut session = DragSession::default();
    let frames = [
        FrameDragInput {
            carried: Some(card("production-1", 1)),
            ..Default::default()
        },
        FrameDragInput {
            carried: Some(card("production-1", 1)),
            released: true,
            ..Default::default()
        },
    ];
    let events = run(&mut session, &frames);
    assert_eq!(
        events,
        vec![DragEvent::Start(card("production-1", 1)), DragEvent::End]
    );
}

#[test]
fn cancelled_payload_ends_the_drag() {
    let mut session = DragSession::default();
    run(
        &mut session,
        &[FrameDragInput {
            carried: Some(card("production-1", 1)),
            ..Default::default()
        }],
    );
    let events = frame_drag_events(&session, &FrameDragInput::default());
    assert_eq!(events, vec![DragEvent::End]);
}

#[test]
fn drop_without_drag_is_forwarded_and_ignored() {
    let mut session = DragSession::default();
    let events = run(
        &mut session,
        &[FrameDragInput {
            dropped: Some(slot("production-1", 0)),
            released: true,
            ..Default::default()
        }],
    );
    assert_eq!(events, vec![DragEvent::Drop(slot("production-1", 0))]);
    assert!(!session.is_active());
}

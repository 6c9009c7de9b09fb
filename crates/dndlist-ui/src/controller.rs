//! The drag-reorder state machine.
//!
//! One controller instance drives one list. Pointer events flow in through
//! [`DragReorderController::on_pointer_event`]; the controller arms on a
//! long press, starts a drag once the pointer clears the deadzone, retargets
//! the placeholder row as the floating proxy crosses row boundaries, runs
//! edge autoscroll on a repeating timer, and commits or unwinds the whole
//! session on release or cancel.
//!
//! All state lives in a single `Rc<RefCell<ControllerInner>>`. Timer
//! callbacks hold a `Weak` to it, so a dropped controller silently retires
//! its pending timers. The inner borrow is always released before a
//! delegate callback fires; delegates must not reenter the controller.

use crate::autoscroll::{compute_autoscroll, AutoscrollState};
use crate::delegate::DragReorderDelegate;
use crate::proxy::{CommitPlan, TransientDataSource};
use crate::session::{DragPhase, DragSession};
use crate::snapshot::capture_row;
use crate::timer::{TimerDriver, TimerRegistration};
use crate::widget::ListWidget;
use dndlist_foundation::gesture_constants::{
    AUTOSCROLL_EDGE_THRESHOLD, AUTOSCROLL_TICK_MS, DRAG_THRESHOLD, LONG_PRESS_TIMEOUT_MS,
    MAX_AUTOSCROLL_PER_TICK,
};
use dndlist_foundation::{
    ListLayout, PointerEvent, PointerEventKind, PointerId, RowPosition, TransientRowMap,
};
use dndlist_ui_graphics::{Point, Rect};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A press being watched for long-press recognition.
struct PressTracker {
    id: PointerId,
    origin_point: Point,
}

struct ControllerInner {
    widget: Rc<RefCell<dyn ListWidget>>,
    proxy: Rc<TransientDataSource>,
    delegate: Rc<dyn DragReorderDelegate>,
    timers: Rc<dyn TimerDriver>,
    phase: DragPhase,
    press: Option<PressTracker>,
    session: Option<DragSession>,
    autoscroll: AutoscrollState,
    long_press_timer: Option<TimerRegistration>,
    autoscroll_timer: Option<TimerRegistration>,
    last_pointer: Point,
    /// Set when the data source declined a new trailing section; cleared
    /// once the pointer retreats onto a real row, so the question is asked
    /// at most once per excursion past the list end.
    new_section_denied: bool,
}

pub struct DragReorderController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl DragReorderController {
    pub fn new(
        widget: Rc<RefCell<dyn ListWidget>>,
        proxy: Rc<TransientDataSource>,
        delegate: Rc<dyn DragReorderDelegate>,
        timers: Rc<dyn TimerDriver>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                widget,
                proxy,
                delegate,
                timers,
                phase: DragPhase::Idle,
                press: None,
                session: None,
                autoscroll: AutoscrollState::IDLE,
                long_press_timer: None,
                autoscroll_timer: None,
                last_pointer: Point::ZERO,
                new_section_denied: false,
            })),
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.inner.borrow().phase
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().phase == DragPhase::Dragging
    }

    /// Viewport frame of the floating proxy, when a session is live.
    pub fn proxy_frame(&self) -> Option<Rect> {
        self.inner
            .borrow()
            .session
            .as_ref()
            .map(|session| Rect::from_origin_size(session.proxy_origin, session.row_size))
    }

    pub fn on_pointer_event(&self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => handle_down(&self.inner, event),
            PointerEventKind::Move => handle_move(&self.inner, event),
            PointerEventKind::Up => handle_up(&self.inner, event),
            PointerEventKind::Cancel => cancel_gesture(&self.inner),
        }
    }

    /// Aborts any in-progress gesture, restoring the displayed order to the
    /// real one. No completion callback fires.
    pub fn cancel(&self) {
        cancel_gesture(&self.inner);
    }
}

fn handle_down(inner: &Rc<RefCell<ControllerInner>>, event: &PointerEvent) {
    let mut state = inner.borrow_mut();
    if state.phase != DragPhase::Idle || state.press.is_some() {
        log::warn!("ignoring pointer down {} during an active gesture", event.id);
        return;
    }
    if event.is_consumed() {
        return;
    }
    state.press = Some(PressTracker {
        id: event.id,
        origin_point: event.position,
    });
    state.last_pointer = event.position;
    let weak: Weak<RefCell<ControllerInner>> = Rc::downgrade(inner);
    let timer_id = state.timers.schedule_once(
        LONG_PRESS_TIMEOUT_MS,
        Rc::new(move |_now| {
            if let Some(inner) = weak.upgrade() {
                arm(&inner);
            }
        }),
    );
    let timers = state.timers.clone();
    state.long_press_timer = Some(TimerRegistration::new(timers, timer_id));
}

/// Long-press fired: recognise the drag, capture the proxy image, and wait
/// in `Armed` for the pointer to clear the deadzone.
fn arm(inner: &Rc<RefCell<ControllerInner>>) {
    let (origin, image) = {
        let mut state = inner.borrow_mut();
        state.long_press_timer = None;
        if state.phase != DragPhase::Idle {
            return;
        }
        let press_point = match state.press.as_ref() {
            Some(press) => press.origin_point,
            None => return,
        };
        let widget = state.widget.clone();
        let widget = widget.borrow();
        let layout = widget.layout();
        let origin = match layout.position_at(press_point) {
            Some(position) => position,
            None => {
                drop(widget);
                state.press = None;
                return;
            }
        };
        let rect = layout.rect_for(origin);
        let image = capture_row(&*widget, origin);
        drop(widget);
        let pointer_offset = Point::new(press_point.x - rect.x, press_point.y - rect.y);
        let real_counts = state.proxy.real_counts();
        let mut session = DragSession::new(
            origin,
            image,
            pointer_offset,
            rect.origin(),
            rect.size(),
            real_counts,
        );
        session.animate = state.delegate.should_animate_dragged_cells();
        let image = session.proxy_image.clone();
        state.session = Some(session);
        state.phase = DragPhase::Armed;
        log::debug!("drag armed at {origin}");
        (origin, image)
    };
    let delegate = inner.borrow().delegate.clone();
    delegate.will_begin_dragging(origin, image.as_ref());
}

fn handle_move(inner: &Rc<RefCell<ControllerInner>>, event: &PointerEvent) {
    let phase = {
        let mut state = inner.borrow_mut();
        match state.press.as_ref() {
            Some(press) if press.id == event.id => {}
            _ => return,
        }
        state.last_pointer = event.position;
        state.phase
    };
    match phase {
        DragPhase::Idle => {
            // A real move before recognition is a scroll, not a drag.
            let mut state = inner.borrow_mut();
            let press_point = match state.press.as_ref() {
                Some(press) => press.origin_point,
                None => return,
            };
            if press_point.distance_to(event.position) > DRAG_THRESHOLD {
                state.long_press_timer = None;
                state.press = None;
            }
        }
        DragPhase::Armed => {
            let passed = {
                let state = inner.borrow();
                let press_point = match state.press.as_ref() {
                    Some(press) => press.origin_point,
                    None => return,
                };
                press_point.distance_to(event.position) > DRAG_THRESHOLD
            };
            if passed {
                begin_dragging(inner);
                drag_move(inner, event);
            }
        }
        DragPhase::Dragging => drag_move(inner, event),
        DragPhase::Dropping => {}
    }
}

/// `Armed -> Dragging`: hide the origin row, open the transient overlay.
fn begin_dragging(inner: &Rc<RefCell<ControllerInner>>) {
    let mut state = inner.borrow_mut();
    let (origin, map) = match state.session.as_ref() {
        Some(session) => (
            session.origin,
            TransientRowMap::for_move(&session.real_counts, session.origin, session.origin, None),
        ),
        None => return,
    };
    state.proxy.begin_session(map);
    state.widget.borrow_mut().set_row_hidden(origin, true);
    state.phase = DragPhase::Dragging;
    log::debug!("drag began at {origin}");
}

fn drag_move(inner: &Rc<RefCell<ControllerInner>>, event: &PointerEvent) {
    event.consume();
    let bounds = {
        let mut state = inner.borrow_mut();
        if state.phase != DragPhase::Dragging {
            return;
        }
        match state.session.as_mut() {
            Some(session) => session.track_pointer(event.position),
            None => return,
        }
        let bounds = state.widget.borrow().visible_bounds();
        bounds
    };

    if externally_mutated(inner) {
        abandon_after_external_mutation(inner);
        return;
    }

    if !bounds.contains_point(event.position) {
        log::debug!("pointer left list bounds, cancelling drag");
        cancel_gesture(inner);
        return;
    }

    update_target(inner);
    update_autoscroll(inner, event.position.y, bounds);
}

fn externally_mutated(inner: &Rc<RefCell<ControllerInner>>) -> bool {
    let state = inner.borrow();
    match state.session.as_ref() {
        Some(session) => state.proxy.real_counts() != session.real_counts,
        None => false,
    }
}

/// The app mutated the data source mid-drag. The displayed order no longer
/// maps onto anything real, so unwind without structural widget edits and
/// let the host reload.
fn abandon_after_external_mutation(inner: &Rc<RefCell<ControllerInner>>) {
    log::warn!("data source changed during drag, abandoning session");
    let mut state = inner.borrow_mut();
    state.autoscroll_timer = None;
    state.long_press_timer = None;
    state.autoscroll = AutoscrollState::IDLE;
    if let Some(session) = state.session.take() {
        state.proxy.end_session();
        // Tolerant unhide; the position may already be gone.
        state
            .widget
            .borrow_mut()
            .set_row_hidden(session.current, false);
    }
    state.press = None;
    state.new_section_denied = false;
    state.phase = DragPhase::Idle;
}

/// Re-resolves the drop target under the proxy center and applies any
/// placeholder move, pairing each widget notification with a transient-map
/// update so the widget never observes an unexplained reorder.
fn update_target(inner: &Rc<RefCell<ControllerInner>>) {
    let mut state = inner.borrow_mut();
    let state = &mut *state;
    let session = match state.session.as_mut() {
        Some(session) => session,
        None => return,
    };
    let center = session.proxy_center();
    let widget = state.widget.clone();
    let mut widget = widget.borrow_mut();
    let layout = widget.layout();

    let mut target = layout.position_at(center);

    if target.is_none() {
        // Zero-height sections are invisible to the hit test. Give each one
        // a drop band of delegate-provided height below its top edge.
        for section in 0..layout.section_count() {
            if layout.row_count(section) > 0 {
                continue;
            }
            let height = state.delegate.height_for_empty_section(section);
            if height <= 0.0 {
                continue;
            }
            let top = layout.section_rect(section).y;
            if center.y >= top && center.y <= top + height {
                target = Some(RowPosition::new(section, 0));
                break;
            }
        }
    }

    if target.is_none() && center.y > layout.content_bottom() {
        target = past_end_target(state.proxy.as_ref(), session, &mut *widget, &layout, &mut state.new_section_denied);
    }

    let target = match target {
        Some(target) => target,
        None => return,
    };
    if target != session.current {
        retarget(state.proxy.as_ref(), session, &mut *widget, target);
    }
    if session
        .pending_new_section
        .map(|pending| target != pending)
        .unwrap_or(false)
    {
        // Retreated out of the provisional section: net it back out.
        retract_provisional_section(state.proxy.as_ref(), session, &mut *widget);
    }
    if layout.position_at(center).is_some() {
        state.new_section_denied = false;
    }
}

/// The proxy center sits below the last row. Either extend the list with a
/// provisional section (capability permitting) or clamp to the last row.
fn past_end_target(
    proxy: &TransientDataSource,
    session: &mut DragSession,
    widget: &mut dyn ListWidget,
    layout: &dyn ListLayout,
    new_section_denied: &mut bool,
) -> Option<RowPosition> {
    if let Some(pending) = session.pending_new_section {
        return Some(pending);
    }
    let index = layout.section_count();
    if !*new_section_denied && proxy.can_create_new_section(index) {
        let pending = RowPosition::new(index, 0);
        proxy.update_map(TransientRowMap::for_move(
            &session.real_counts,
            session.origin,
            session.current,
            Some(pending),
        ));
        widget.insert_section(index);
        session.pending_new_section = Some(pending);
        session.pending_insertions.push(pending);
        log::debug!("provisional section {index} created");
        return Some(pending);
    }
    *new_section_denied = true;
    last_displayed_row(layout)
}

fn last_displayed_row(layout: &dyn ListLayout) -> Option<RowPosition> {
    (0..layout.section_count())
        .rev()
        .find(|&section| layout.row_count(section) > 0)
        .map(|section| RowPosition::new(section, layout.row_count(section) - 1))
}

/// Moves the placeholder to `target`: transient map first, widget move
/// second. The row's hidden flag travels with the move.
fn retarget(
    proxy: &TransientDataSource,
    session: &mut DragSession,
    widget: &mut dyn ListWidget,
    target: RowPosition,
) {
    proxy.update_map(TransientRowMap::for_move(
        &session.real_counts,
        session.origin,
        target,
        session.pending_new_section,
    ));
    widget.move_row(session.current, target, session.animate);
    session.current = target;
}

/// Drops a provisional section the pointer has retreated from. The pending
/// insertion is popped rather than matched with a deletion, so the commit
/// plan nets to no section edits at all.
fn retract_provisional_section(
    proxy: &TransientDataSource,
    session: &mut DragSession,
    widget: &mut dyn ListWidget,
) {
    let pending = match session.pending_new_section.take() {
        Some(pending) => pending,
        None => return,
    };
    session.pending_insertions.pop();
    proxy.update_map(TransientRowMap::for_move(
        &session.real_counts,
        session.origin,
        session.current,
        None,
    ));
    widget.delete_section(pending.section);
    log::debug!("provisional section {} retracted", pending.section);
}

fn update_autoscroll(inner: &Rc<RefCell<ControllerInner>>, pointer_y: f32, bounds: Rect) {
    let mut state = inner.borrow_mut();
    let next = compute_autoscroll(pointer_y, bounds, AUTOSCROLL_EDGE_THRESHOLD);
    state.autoscroll = next;
    if next.is_active() {
        if state.autoscroll_timer.is_none() {
            let weak = Rc::downgrade(inner);
            let timer_id = state.timers.schedule_repeating(
                AUTOSCROLL_TICK_MS,
                Rc::new(move |_now| {
                    if let Some(inner) = weak.upgrade() {
                        autoscroll_tick(&inner);
                    }
                }),
            );
            let timers = state.timers.clone();
            state.autoscroll_timer = Some(TimerRegistration::new(timers, timer_id));
        }
    } else {
        state.autoscroll_timer = None;
    }
}

/// One autoscroll tick: scroll the viewport, then re-resolve the target at
/// the unchanged proxy position. The pointer did not move but the rows
/// under it did.
fn autoscroll_tick(inner: &Rc<RefCell<ControllerInner>>) {
    {
        let mut state = inner.borrow_mut();
        if state.phase != DragPhase::Dragging {
            state.autoscroll_timer = None;
            return;
        }
        let delta = state.autoscroll.scroll_delta(MAX_AUTOSCROLL_PER_TICK);
        let consumed = state.widget.borrow_mut().scroll_by(delta);
        if consumed == 0.0 {
            // Content limit reached; the next pointer move may restart.
            state.autoscroll_timer = None;
            return;
        }
    }
    if externally_mutated(inner) {
        abandon_after_external_mutation(inner);
        return;
    }
    update_target(inner);
}

fn handle_up(inner: &Rc<RefCell<ControllerInner>>, event: &PointerEvent) {
    let phase = {
        let state = inner.borrow();
        match state.press.as_ref() {
            Some(press) if press.id == event.id => {}
            _ => return,
        }
        state.phase
    };
    match phase {
        DragPhase::Idle => {
            let mut state = inner.borrow_mut();
            state.long_press_timer = None;
            state.press = None;
        }
        DragPhase::Armed => {
            // Recognised but never left the deadzone: report a completed
            // drop at the origin so begin/end callbacks stay paired.
            event.consume();
            let (origin, image) = {
                let mut state = inner.borrow_mut();
                let session = match state.session.take() {
                    Some(session) => session,
                    None => return,
                };
                state.press = None;
                state.phase = DragPhase::Idle;
                (session.origin, session.proxy_image)
            };
            let delegate = inner.borrow().delegate.clone();
            delegate.did_end_dragging(origin, origin, image.as_ref());
        }
        DragPhase::Dragging => {
            event.consume();
            drop_session(inner);
        }
        DragPhase::Dropping => {}
    }
}

/// Commits the drag: the autoscroll timer stops before any structural edit,
/// the batched plan lands on the real data source in one atomic update, and
/// the completion callback fires last, outside the inner borrow.
///
/// The session's positions are only meaningful against the counts captured
/// at drag start, so a mutated source abandons the drop instead of
/// committing stale indices.
fn drop_session(inner: &Rc<RefCell<ControllerInner>>) {
    if externally_mutated(inner) {
        abandon_after_external_mutation(inner);
        return;
    }
    let (origin, destination, image) = {
        let mut state = inner.borrow_mut();
        state.autoscroll_timer = None;
        state.autoscroll = AutoscrollState::IDLE;
        state.phase = DragPhase::Dropping;
        let session = match state.session.take() {
            Some(session) => session,
            None => {
                state.phase = DragPhase::Idle;
                return;
            }
        };
        let origin = session.origin;
        let destination = session.current;

        if destination == origin && session.pending_insertions.is_empty() {
            state.proxy.end_session();
        } else {
            let mut plan = CommitPlan::default();
            for pending in session.pending_insertions.iter() {
                plan.insert_sections.push(pending.section);
            }
            plan.move_row = Some((origin, destination));
            state.proxy.commit(plan);
        }
        state
            .widget
            .borrow_mut()
            .set_row_hidden(destination, false);
        state.press = None;
        state.new_section_denied = false;
        state.phase = DragPhase::Idle;
        log::debug!("drag dropped {origin} -> {destination}");
        (origin, destination, session.proxy_image)
    };
    let delegate = inner.borrow().delegate.clone();
    delegate.did_end_dragging(origin, destination, image.as_ref());
}

/// Full unwind: placeholder back to the origin, provisional sections gone,
/// overlay closed, origin row visible again. No completion callback.
fn cancel_gesture(inner: &Rc<RefCell<ControllerInner>>) {
    let mut state = inner.borrow_mut();
    state.long_press_timer = None;
    state.autoscroll_timer = None;
    state.autoscroll = AutoscrollState::IDLE;
    state.press = None;
    state.new_section_denied = false;
    let dragging = state.phase == DragPhase::Dragging;
    let session = state.session.take();
    state.phase = DragPhase::Idle;
    if let Some(mut session) = session {
        if !dragging {
            // Armed only: nothing was hidden and no overlay was opened.
            return;
        }
        let origin = session.origin;
        log::debug!("drag cancelled, restoring {origin}");
        let widget = state.widget.clone();
        let mut widget = widget.borrow_mut();
        if session.current != origin {
            retarget(state.proxy.as_ref(), &mut session, &mut *widget, origin);
        }
        retract_provisional_section(state.proxy.as_ref(), &mut session, &mut *widget);
        state.proxy.end_session();
        widget.set_row_hidden(origin, false);
    }
}

//! Black-box robot harness for drag-reorder tests.
//!
//! The robot assembles the full stack (vector data source, transient
//! overlay, fake widget, recording delegate, manual clock, controller) and
//! drives it through pointer gestures the way a platform shell would:
//! events go through the [`PointerDispatcher`] queue and time only moves
//! when a test advances it.

use crate::data::VecDataSource;
use crate::delegate::{DelegateEvent, RecordingDelegate};
use crate::fake_list::FakeListView;
use crate::timer::ManualTimerDriver;
use dndlist_foundation::gesture_constants::LONG_PRESS_TIMEOUT_MS;
use dndlist_foundation::{
    ListLayout, PointerDispatcher, PointerEvent, PointerEventKind, RowPosition,
};
use dndlist_ui::snapshot::capture_visible_surface;
use dndlist_ui::{DragReorderController, ListWidget, TransientDataSource};
use dndlist_ui_graphics::{Bitmap, Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;

pub struct ListRobot {
    source: Rc<RefCell<VecDataSource>>,
    proxy: Rc<TransientDataSource>,
    widget: Rc<RefCell<FakeListView>>,
    delegate: Rc<RecordingDelegate>,
    timers: Rc<ManualTimerDriver>,
    controller: DragReorderController,
    dispatcher: RefCell<PointerDispatcher>,
}

impl ListRobot {
    /// 100x400 viewport, 40px rows.
    pub fn new(rows: &[&[&str]]) -> Self {
        Self::with_bounds(rows, Rect::new(0.0, 0.0, 100.0, 400.0), 40.0)
    }

    pub fn with_bounds(rows: &[&[&str]], bounds: Rect, row_height: f32) -> Self {
        let source = Rc::new(RefCell::new(VecDataSource::new(rows)));
        let proxy = TransientDataSource::new(source.clone());
        let widget = Rc::new(RefCell::new(FakeListView::new(
            proxy.clone(),
            bounds,
            row_height,
        )));
        let delegate = Rc::new(RecordingDelegate::new());
        let timers = Rc::new(ManualTimerDriver::new());
        let controller = DragReorderController::new(
            widget.clone(),
            proxy.clone(),
            delegate.clone(),
            timers.clone(),
        );
        Self {
            source,
            proxy,
            widget,
            delegate,
            timers,
            controller,
            dispatcher: RefCell::new(PointerDispatcher::new()),
        }
    }

    pub fn controller(&self) -> &DragReorderController {
        &self.controller
    }

    pub fn widget(&self) -> Rc<RefCell<FakeListView>> {
        self.widget.clone()
    }

    pub fn delegate(&self) -> Rc<RecordingDelegate> {
        self.delegate.clone()
    }

    pub fn proxy(&self) -> Rc<TransientDataSource> {
        self.proxy.clone()
    }

    pub fn source(&self) -> Rc<RefCell<VecDataSource>> {
        self.source.clone()
    }

    pub fn allow_new_sections(&self, allow: bool) {
        self.source.borrow_mut().set_allow_new_sections(allow);
    }

    /// Viewport-space center of a displayed row.
    pub fn row_center(&self, section: usize, row: usize) -> Point {
        self.widget
            .borrow()
            .layout()
            .rect_for(RowPosition::new(section, row))
            .center()
    }

    pub fn press(&self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Down, x, y);
    }

    pub fn move_pointer(&self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Move, x, y);
    }

    pub fn release(&self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Up, x, y);
    }

    pub fn cancel_pointer(&self) {
        let position = Point::ZERO;
        let event = PointerEvent::new(PointerEventKind::Cancel, position, self.timers.now());
        self.controller.on_pointer_event(&event);
    }

    /// Presses and holds until long-press recognition fires.
    pub fn long_press(&self, x: f32, y: f32) {
        self.press(x, y);
        self.advance(LONG_PRESS_TIMEOUT_MS);
    }

    pub fn advance(&self, ms: u64) {
        self.timers.advance(ms);
    }

    pub fn timers_pending(&self) -> usize {
        self.timers.pending_count()
    }

    /// Scrolls the widget directly, outside any gesture.
    pub fn scroll_widget_by(&self, delta: f32) -> f32 {
        self.widget.borrow_mut().scroll_by(delta)
    }

    /// Backing storage snapshot.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.source.borrow().rows()
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.delegate.events()
    }

    /// Rasterizes the viewport, hiding nothing.
    pub fn snapshot(&self) -> Option<Bitmap> {
        capture_visible_surface(&mut *self.widget.borrow_mut(), None)
    }

    fn dispatch(&self, kind: PointerEventKind, x: f32, y: f32) {
        log::trace!("robot dispatch {kind:?} at ({x}, {y})");
        let event = PointerEvent::new(kind, Point::new(x, y), self.timers.now());
        self.dispatcher.borrow_mut().push(event);
        self.dispatcher
            .borrow_mut()
            .drain(|_id, event| self.controller.on_pointer_event(&event));
    }
}

//! Drag-reorder engine for sectioned lists.
//!
//! The engine turns a continuous pointer gesture (long-press, drag, release)
//! into discrete row moves against a host data source, with a floating
//! bitmap proxy, autoscroll near the viewport edges, and a transient
//! data-source overlay so the rendering widget shows the in-progress order
//! without the backing store changing before the drop.
//!
//! Collaborators are trait seams: the rendering widget ([`ListWidget`]), the
//! backing store (`ListDataSource` from dndlist-foundation), the host event
//! surface ([`DragReorderDelegate`]), and the host clock ([`TimerDriver`]).

pub mod autoscroll;
pub mod controller;
pub mod delegate;
pub mod proxy;
pub mod session;
pub mod snapshot;
pub mod timer;
pub mod widget;

pub use autoscroll::{compute_autoscroll, AutoscrollDirection, AutoscrollState};
pub use controller::DragReorderController;
pub use delegate::DragReorderDelegate;
pub use proxy::{CommitPlan, TransientDataSource};
pub use session::{DragPhase, DragSession};
pub use timer::{TimerDriver, TimerId, TimerRegistration};
pub use widget::ListWidget;

pub mod prelude {
    pub use crate::autoscroll::{compute_autoscroll, AutoscrollDirection, AutoscrollState};
    pub use crate::controller::DragReorderController;
    pub use crate::delegate::DragReorderDelegate;
    pub use crate::proxy::{CommitPlan, TransientDataSource};
    pub use crate::session::{DragPhase, DragSession};
    pub use crate::snapshot::{capture_row, capture_visible_surface};
    pub use crate::timer::{TimerDriver, TimerId, TimerRegistration};
    pub use crate::widget::ListWidget;
    pub use dndlist_foundation::prelude::*;
}

//! Headless testing harness for the drag-reorder engine.
//!
//! Everything here is deterministic and display-free: a vector-backed data
//! source, a fake list widget that rasterizes rows into tagged pixels, a
//! manually advanced timer driver, and a robot that drives the whole stack
//! through pointer gestures the way a platform shell would.

pub mod data;
pub mod delegate;
pub mod fake_list;
pub mod robot;
pub mod timer;

pub use data::VecDataSource;
pub use delegate::{DelegateEvent, RecordingDelegate};
pub use fake_list::{FakeListView, WidgetOp};
pub use robot::ListRobot;
pub use timer::ManualTimerDriver;

//! Foundation elements for dndlist: pointer input, row models, and list layout.

pub mod data_source;
pub mod gesture_constants;
pub mod input;
pub mod layout;
pub mod row;
pub mod scroll;
pub mod transient;

pub use data_source::ListDataSource;
pub use input::{
    PointerButton, PointerButtons, PointerDispatcher, PointerEvent, PointerEventKind, PointerId,
};
pub use layout::{LayoutSolver, ListLayout};
pub use row::RowPosition;
pub use scroll::ScrollState;
pub use transient::TransientRowMap;

pub mod prelude {
    pub use crate::data_source::ListDataSource;
    pub use crate::gesture_constants::*;
    pub use crate::input::{
        PointerButton, PointerButtons, PointerDispatcher, PointerEvent, PointerEventKind,
        PointerId,
    };
    pub use crate::layout::{LayoutSolver, ListLayout};
    pub use crate::row::RowPosition;
    pub use crate::scroll::ScrollState;
    pub use crate::transient::TransientRowMap;
}

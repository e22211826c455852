pub mod column_id;
pub mod events;
pub mod types;

pub use column_id::ColumnId;
pub use events::{Signal, VisibilityEvent};
pub use types::{Display, EdgePosition, ElementGeometry, ScrollDirection, Viewport};

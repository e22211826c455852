pub mod page;
pub mod scroll;
pub mod sink;
pub mod tracker;

pub use page::{NodeSpec, Page, PageModel, PageModelError};
pub use scroll::ScrollState;
pub use sink::{LogSink, RecordingSink, VisibilitySink};
pub use tracker::ColumnTracker;

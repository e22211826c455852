use colwatch_core::{ColumnTracker, PageModel, PageModelError, VisibilitySink};
use colwatch_protocol::{Display, Signal};
use serde::Deserialize;

/// A recorded scroll session: the page as it looked at load time plus
/// the ordered host signals and mutations to replay against it.
#[derive(Debug, Deserialize)]
pub struct ScrollSession {
    pub page: PageModel,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Set the scroll offset and deliver a scroll signal.
    Scroll { to: f64 },
    /// Set the viewport height and deliver a resize signal.
    Resize { height: f64 },
    /// Host-side style change between signals. Delivers nothing itself;
    /// the tracker sees it on the next signal.
    SetDisplay { node: usize, display: Display },
}

/// Replay a session through a fresh tracker, delivering notifications
/// to `sink`. Returns the number of steps applied.
///
/// The tracker captures the page's columns once, before the first step
/// — exactly the construction-time snapshot a live page would get.
pub fn replay(
    session: ScrollSession,
    sink: &mut impl VisibilitySink,
) -> Result<usize, PageModelError> {
    let ScrollSession { mut page, steps } = session;
    let mut tracker = ColumnTracker::new(&page, page.columns());
    let count = steps.len();

    for step in steps {
        match step {
            Step::Scroll { to } => {
                page.set_scroll_top(to);
                tracker.handle_signal(Signal::Scroll, &page, sink);
            }
            Step::Resize { height } => {
                page.set_viewport_height(height);
                tracker.handle_signal(Signal::Resize, &page, sink);
            }
            Step::SetDisplay { node, display } => {
                page.set_display(node, display)?;
            }
        }
    }

    Ok(count)
}

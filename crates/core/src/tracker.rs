use colwatch_protocol::{ColumnId, EdgePosition, Signal, VisibilityEvent};

use crate::page::Page;
use crate::scroll::ScrollState;
use crate::sink::VisibilitySink;

/// Upper bound on the hidden-ancestor walk. `PageModel` rejects parent
/// cycles at construction; this guard keeps a foreign `Page`
/// implementation with a looping parent chain from hanging evaluation
/// (the element reads as hidden instead).
const MAX_ANCESTOR_STEPS: usize = 1 << 16;

/// One single-fire latch per semantic position. Once a position has
/// fired for a column it never fires again for that tracker's lifetime.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeLatches {
    start: bool,
    center: bool,
    end: bool,
}

impl EdgeLatches {
    /// Returns `true` only on the first call for a given position.
    fn fire(&mut self, position: EdgePosition) -> bool {
        let slot = match position {
            EdgePosition::Start => &mut self.start,
            EdgePosition::Center => &mut self.center,
            EdgePosition::End => &mut self.end,
        };
        let first = !*slot;
        *slot = true;
        first
    }
}

#[derive(Debug)]
struct TrackedColumn<N> {
    node: N,
    id: ColumnId,
    latches: EdgeLatches,
}

/// Watches a fixed set of column elements and reports, once per column
/// and per semantic position, when each position enters the viewport.
///
/// The column set is captured at construction; elements added to the
/// page later are never tracked (no re-scan — known limitation of the
/// capture-once design). All state lives in the instance, so multiple
/// trackers over the same page coexist safely.
///
/// The host is expected to call [`handle_signal`](Self::handle_signal)
/// (or [`evaluate`](Self::evaluate) directly) synchronously for every
/// scroll and resize signal. Evaluation is O(columns) per signal with
/// no throttling; there is no teardown path, the tracker simply lives
/// as long as its owner.
pub struct ColumnTracker<P: Page> {
    columns: Vec<TrackedColumn<P::Node>>,
    scroll: ScrollState,
}

impl<P: Page> ColumnTracker<P> {
    /// Capture `columns` (in order) with the ids they have right now.
    /// A column without an id gets the empty [`ColumnId`].
    pub fn new(page: &P, columns: impl IntoIterator<Item = P::Node>) -> Self {
        let columns = columns
            .into_iter()
            .map(|node| TrackedColumn {
                node,
                id: ColumnId::from(page.element_id(node)),
                latches: EdgeLatches::default(),
            })
            .collect();
        Self {
            columns,
            scroll: ScrollState::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Direction and last-offset bookkeeping, owned by this instance.
    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Entry point for host signals. Both signal kinds mean the same
    /// thing: re-evaluate against the current geometry.
    pub fn handle_signal(&mut self, _signal: Signal, page: &P, sink: &mut impl VisibilitySink) {
        self.evaluate(page, sink);
    }

    /// One synchronous evaluation pass.
    ///
    /// Updates the scroll direction from the viewport's current offset,
    /// then tests each column's three reference points against the
    /// viewport. The viewport and each column's geometry are read once
    /// per pass, so the three tests of one column can never disagree
    /// about what they measured. A hidden column, or one whose geometry
    /// query fails, is skipped for the cycle without affecting the
    /// others.
    pub fn evaluate(&mut self, page: &P, sink: &mut impl VisibilitySink) {
        let viewport = page.viewport();
        let direction = self.scroll.update(viewport.scroll_top);

        for column in &mut self.columns {
            if is_hidden(page, column.node) {
                continue;
            }
            let Some(geometry) = page.geometry(column.node) else {
                continue;
            };
            for position in EdgePosition::ALL {
                let point = position.probe_point(direction, &geometry);
                if viewport.contains(point) && column.latches.fire(position) {
                    sink.deliver(&VisibilityEvent::new(column.id.clone(), position));
                }
            }
        }
    }
}

/// Whether `node` or any of its ancestors has display none.
///
/// Iterative walk up the parent chain, short-circuiting on the first
/// hidden ancestor; a parentless node that is not itself hidden is
/// visible. No recursion, so chain depth is not stack-bounded.
fn is_hidden<P: Page>(page: &P, node: P::Node) -> bool {
    let mut current = Some(node);
    let mut steps = 0usize;
    while let Some(n) = current {
        if page.display(n).is_none() {
            return true;
        }
        steps += 1;
        if steps >= MAX_ANCESTOR_STEPS {
            return true;
        }
        current = page.parent(n);
    }
    false
}

use colwatch_protocol::{Display, ElementGeometry, Viewport};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Read-only geometry and state queries the tracker consumes from its
/// host rendering environment.
///
/// `Node` is an opaque element handle. A `geometry` query returning
/// `None` means the query failed (element detached, host gone) — the
/// tracker treats the element as not visible for that cycle instead of
/// propagating a failure.
pub trait Page {
    type Node: Copy;

    /// Current viewport, read fresh per evaluation pass.
    fn viewport(&self) -> Viewport;

    /// The element's box relative to the viewport top edge, or `None`
    /// if the query cannot be answered.
    fn geometry(&self, node: Self::Node) -> Option<ElementGeometry>;

    /// The element's computed display.
    fn display(&self, node: Self::Node) -> Display;

    /// Parent link for the hidden-ancestor walk. `None` at the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The element's identifier, if it has one.
    fn element_id(&self, node: Self::Node) -> Option<&str>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageModelError {
    #[error("node {node}: parent index {parent} out of range")]
    ParentOutOfRange { node: usize, parent: usize },
    #[error("node {node}: ancestor chain loops back on itself")]
    ParentCycle { node: usize },
    #[error("node index {node} out of range")]
    NodeOutOfRange { node: usize },
}

/// One element in a [`PageModel`].
///
/// `top` is the element's document-space layout position; its
/// viewport-relative position is derived from the model's scroll offset
/// on each query. `column` marks the elements carrying the tracked
/// class marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub top: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub parent: Option<usize>,
    #[serde(default)]
    pub column: bool,
}

/// A concrete, replayable page: a flat node table plus the current
/// scroll offset and viewport height.
///
/// This is the host stand-in used by the replay CLI and the tests. The
/// real host hands the tracker live elements; this model hands it a
/// mutable snapshot with the same query surface. Parent links are
/// validated at construction (and on deserialization) so the ancestor
/// walk always terminates on a well-formed model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPageModel")]
pub struct PageModel {
    nodes: Vec<NodeSpec>,
    viewport_height: f64,
    scroll_top: f64,
}

#[derive(Deserialize)]
struct RawPageModel {
    nodes: Vec<NodeSpec>,
    viewport_height: f64,
    #[serde(default)]
    scroll_top: f64,
}

impl TryFrom<RawPageModel> for PageModel {
    type Error = PageModelError;

    fn try_from(raw: RawPageModel) -> Result<Self, Self::Error> {
        let mut model = PageModel::new(raw.nodes, raw.viewport_height)?;
        model.set_scroll_top(raw.scroll_top);
        Ok(model)
    }
}

impl PageModel {
    pub fn new(nodes: Vec<NodeSpec>, viewport_height: f64) -> Result<Self, PageModelError> {
        for (index, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parent
                && parent >= nodes.len()
            {
                return Err(PageModelError::ParentOutOfRange {
                    node: index,
                    parent,
                });
            }
        }
        // Every acyclic chain reaches the root within `len` hops.
        for index in 0..nodes.len() {
            let mut current = nodes[index].parent;
            let mut hops = 0;
            while let Some(next) = current {
                hops += 1;
                if hops > nodes.len() {
                    return Err(PageModelError::ParentCycle { node: index });
                }
                current = nodes[next].parent;
            }
        }
        Ok(Self {
            nodes,
            viewport_height,
            scroll_top: 0.0,
        })
    }

    /// Indices of the nodes carrying the column marker, in document
    /// order. This is the fixed collection a tracker captures once at
    /// construction time.
    pub fn columns(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.column)
            .map(|(index, _)| index)
            .collect()
    }

    /// Raw host scroll offset. Deliberately unclamped — rubber-band
    /// overscroll reports negative values and the tracker must cope.
    pub fn set_scroll_top(&mut self, offset: f64) {
        self.scroll_top = offset;
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    pub fn set_display(&mut self, node: usize, display: Display) -> Result<(), PageModelError> {
        let spec = self
            .nodes
            .get_mut(node)
            .ok_or(PageModelError::NodeOutOfRange { node })?;
        spec.display = display;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Page for PageModel {
    type Node = usize;

    fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_height, self.scroll_top)
    }

    fn geometry(&self, node: usize) -> Option<ElementGeometry> {
        self.nodes
            .get(node)
            .map(|spec| ElementGeometry::new(spec.top - self.scroll_top, spec.height))
    }

    fn display(&self, node: usize) -> Display {
        self.nodes.get(node).map_or(Display::Block, |spec| spec.display)
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).and_then(|spec| spec.parent)
    }

    fn element_id(&self, node: usize) -> Option<&str> {
        self.nodes.get(node).and_then(|spec| spec.id.as_deref())
    }
}

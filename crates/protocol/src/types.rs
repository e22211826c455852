use serde::{Deserialize, Serialize};

/// The visible window onto the page.
///
/// `height` is read fresh on every evaluation pass; `scroll_top` is the
/// page's current vertical scroll offset. Horizontal scrolling is not
/// modeled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub scroll_top: f64,
}

impl Viewport {
    pub fn new(height: f64, scroll_top: f64) -> Self {
        Self { height, scroll_top }
    }

    /// Strict open-interval containment test against the viewport's
    /// vertical extent. A point exactly at 0 or exactly at `height`
    /// does NOT count as contained.
    pub fn contains(&self, y: f64) -> bool {
        y > 0.0 && y < self.height
    }
}

/// One element's box, relative to the viewport's top edge.
///
/// A single `ElementGeometry` value is the snapshot used for all three
/// reference-point tests of one element in one pass, so the tests can
/// never tear against each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

impl ElementGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Which way the page moved since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Down,
    Up,
}

/// Semantic positions of a column's visibility transition.
///
/// `Start` is the leading edge in the current scroll direction, `End`
/// the trailing edge, `Center` always the midpoint. Which geometric
/// point each one probes therefore depends on the direction: scrolling
/// down the top edge leads, scrolling up the bottom edge does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePosition {
    Start,
    Center,
    End,
}

impl EdgePosition {
    pub const ALL: [EdgePosition; 3] = [
        EdgePosition::Start,
        EdgePosition::Center,
        EdgePosition::End,
    ];

    /// The geometric point this position probes under `direction`.
    pub fn probe_point(self, direction: ScrollDirection, geometry: &ElementGeometry) -> f64 {
        match (self, direction) {
            (EdgePosition::Start, ScrollDirection::Down) => geometry.top,
            (EdgePosition::Start, ScrollDirection::Up) => geometry.bottom(),
            (EdgePosition::Center, _) => geometry.center(),
            (EdgePosition::End, ScrollDirection::Down) => geometry.bottom(),
            (EdgePosition::End, ScrollDirection::Up) => geometry.top,
        }
    }
}

/// Computed display of an element — the subset the hidden test needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub fn is_none(self) -> bool {
        matches!(self, Display::None)
    }
}

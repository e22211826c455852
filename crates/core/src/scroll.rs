use colwatch_protocol::ScrollDirection;

/// Scroll direction derivation from successive offset samples.
///
/// Owned by the tracker instance that feeds it — there is no shared or
/// module-level state, so independent trackers never see each other's
/// samples.
///
/// The first sample has no predecessor; it is compared against 0, so a
/// positive offset on the very first update reads as a downward scroll
/// and an offset of 0 reads as upward. Consumers rely on this exact
/// behavior for the initial pass after load, so it is kept literal
/// rather than defaulting the first direction unconditionally.
#[derive(Debug, Clone)]
pub struct ScrollState {
    last_offset: Option<f64>,
    direction: ScrollDirection,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            last_offset: None,
            direction: ScrollDirection::Up,
        }
    }

    /// Fold in a new offset sample and return the resulting direction.
    ///
    /// The stored offset is clamped to `>= 0` (rubber-band scrolling can
    /// report negative offsets); the comparison uses the raw value.
    pub fn update(&mut self, offset: f64) -> ScrollDirection {
        let previous = self.last_offset.unwrap_or(0.0);
        self.direction = if offset > previous {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = Some(offset.max(0.0));
        self.direction
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// The last stored offset, if any sample has been folded in.
    /// Always `>= 0` once set.
    pub fn last_offset(&self) -> Option<f64> {
        self.last_offset
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

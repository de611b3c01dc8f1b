/// Sweep direction of an obtain call relative to the cycle's first obtained index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// The committed index range `[offset, offset + len)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub offset: usize,
    pub len: usize,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exclusive end index.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.len)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.end()
    }
}

/// A lightweight, serializable snapshot of an [`crate::IndexedPool`]'s bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    /// Committed window (shrinks mid-cycle as elements are re-obtained).
    pub window: Window,
    /// Elements obtained so far in the current cycle.
    pub obtained: usize,
    pub last_direction: Option<Direction>,
}

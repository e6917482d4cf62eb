/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values. Layers that must stay in a
/// fixed stacking order (backdrop, shadows, ink) pick distinct values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// The layer directly above `self`.
    #[inline]
    pub const fn above(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

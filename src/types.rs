/// Which way a walk moves along the neighbour chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards the start of the chain (`item_before`).
    Before,
    /// Towards the end of the chain (`item_after`).
    After,
}

/// The outcome of moving a [`crate::PagingWindow`] to a new set of visible items.
///
/// Both values live in the same coordinate space as item widths (typically logical pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowUpdate {
    /// Signed net width change between the previous and the new window
    /// (see [`crate::diff_width`]).
    pub width_delta: f64,
    /// Width from the previous window to the newly focused item
    /// (see [`crate::width_from_item`]). Zero for resizes and reloads.
    pub distance: f64,
}

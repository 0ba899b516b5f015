use core::fmt;

/// Failure conditions of the fallible paging APIs.
///
/// The free windowing functions never fail; they stop early instead. Only
/// [`crate::try_width_from_item`] and [`crate::PagingWindow`] report these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagingError {
    /// The reference item was not found walking outward from either side of the window.
    ///
    /// `partial_width` is the width accumulated before the start of the chain was reached,
    /// measured from the window's leftmost item.
    Unreachable { partial_width: f64 },
    /// A walk fetched `limit` neighbours without finishing. Usually a cyclic data source.
    StepLimitExceeded { limit: usize },
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { partial_width } => write!(
                f,
                "item is not reachable from the visible window (walked {partial_width} before the chain ended)"
            ),
            Self::StepLimitExceeded { limit } => {
                write!(f, "neighbour chain exceeded the step limit of {limit}")
            }
        }
    }
}

impl core::error::Error for PagingError {}

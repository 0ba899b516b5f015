use crate::structure::sum_widths;
use crate::walk::{Cursor, UNBOUNDED};
use crate::{Direction, PagingDataSource, PagingDataStructure, PagingError, PagingItemPresentable};

enum Reach {
    Found(f64),
    Missed { before_width: f64, truncated: bool },
}

/// Walks outward from both edges of `structure` in lock step until one side fetches `item`.
fn reach<T, S, P>(
    item: &T,
    structure: &PagingDataStructure<T>,
    source: &S,
    presentable: &P,
    max_steps: usize,
) -> Reach
where
    T: Clone + PartialEq,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    let (Some(first), Some(last)) = (structure.first(), structure.last()) else {
        return Reach::Found(0.0);
    };
    if structure.contains(item) {
        return Reach::Found(0.0);
    }

    let mut before = Cursor::new(first.clone(), Direction::Before);
    let mut after = Cursor::new(last.clone(), Direction::After);
    while !(before.is_done() && after.is_done()) {
        if before
            .advance(source, presentable, max_steps)
            .is_some_and(|it| it == item)
        {
            return Reach::Found(before.width());
        }
        if after
            .advance(source, presentable, max_steps)
            .is_some_and(|it| it == item)
        {
            return Reach::Found(after.width());
        }
    }

    Reach::Missed {
        before_width: before.width(),
        truncated: before.truncated() || after.truncated(),
    }
}

/// Returns the width between `structure` and `item`.
///
/// This is how far the content has to shift to bring `item` into the snapshot's coordinate
/// space: the widths of every item between the nearest edge of the snapshot and `item`, plus
/// `item`'s own width. The side is discovered by walking both directions.
///
/// Returns `0.0` when `structure` is empty or already contains `item`.
///
/// When both ends of the chain are reached without meeting `item`, the width accumulated towards
/// the start of the chain is returned. Use [`try_width_from_item`] to tell that case apart, or
/// to bound the walk for data sources that may be cyclic.
pub fn width_from_item<T, S, P>(
    item: &T,
    structure: &PagingDataStructure<T>,
    source: &S,
    presentable: &P,
) -> f64
where
    T: Clone + PartialEq,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    match reach(item, structure, source, presentable, UNBOUNDED) {
        Reach::Found(width) => width,
        Reach::Missed { before_width, .. } => before_width,
    }
}

/// Like [`width_from_item`], but fails when `item` is not reachable.
///
/// Each direction fetches at most `max_steps` neighbours; a side with more neighbours left
/// fails with [`PagingError::StepLimitExceeded`].
pub fn try_width_from_item<T, S, P>(
    item: &T,
    structure: &PagingDataStructure<T>,
    source: &S,
    presentable: &P,
    max_steps: usize,
) -> Result<f64, PagingError>
where
    T: Clone + PartialEq,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    match reach(item, structure, source, presentable, max_steps) {
        Reach::Found(width) => Ok(width),
        Reach::Missed {
            truncated: true, ..
        } => Err(PagingError::StepLimitExceeded { limit: max_steps }),
        Reach::Missed { before_width, .. } => Err(PagingError::Unreachable {
            partial_width: before_width,
        }),
    }
}

/// Returns the signed width change from `from` to `to`.
///
/// Items only in `to` add their width, items only in `from` subtract theirs, and items in both
/// cancel out. Items are matched by equality, not by position.
///
/// `diff_width(a, b) == -diff_width(b, a)` and `diff_width(a, a) == 0.0`.
pub fn diff_width<T, P>(
    from: &PagingDataStructure<T>,
    to: &PagingDataStructure<T>,
    presentable: &P,
) -> f64
where
    T: PartialEq,
    P: PagingItemPresentable<T> + ?Sized,
{
    let added = sum_widths(to.items_added(from), presentable);
    let removed = sum_widths(from.items_removed(to), presentable);
    added - removed
}

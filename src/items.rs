use alloc::vec::Vec;

use crate::walk::{UNBOUNDED, Walk, walk_covering};
use crate::{Direction, PagingDataSource, PagingError, PagingItemPresentable};

/// Returns the items before `visible` needed to cover `width`.
///
/// The walk starts at the first element of `visible` and keeps fetching predecessors while the
/// accumulated width is below `width`. The predecessor that reaches or crosses the budget is
/// included; nothing after it is fetched. The walk also ends at the start of the chain.
///
/// The result is in display order: farthest item first, the anchor's direct predecessor last.
/// An empty `visible` or a non-positive `width` yields an empty result.
///
/// The walk is not bounded. Use [`try_items_before`] for data sources that may be cyclic.
pub fn items_before<T, S, P>(visible: &[T], width: f64, source: &S, presentable: &P) -> Vec<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    walk_before(visible, width, UNBOUNDED, source, presentable).items
}

/// Like [`items_before`], but fails instead of fetching more than `max_steps` neighbours.
pub fn try_items_before<T, S, P>(
    visible: &[T],
    width: f64,
    source: &S,
    presentable: &P,
    max_steps: usize,
) -> Result<Vec<T>, PagingError>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    walk_before(visible, width, max_steps, source, presentable).into_result(max_steps)
}

/// Returns the items after `visible` needed to cover `width`.
///
/// Mirror image of [`items_before`]: the walk starts at the last element of `visible` and the
/// result is ordered from the anchor's direct successor to the farthest item.
pub fn items_after<T, S, P>(visible: &[T], width: f64, source: &S, presentable: &P) -> Vec<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    walk_after(visible, width, UNBOUNDED, source, presentable).items
}

/// Like [`items_after`], but fails instead of fetching more than `max_steps` neighbours.
pub fn try_items_after<T, S, P>(
    visible: &[T],
    width: f64,
    source: &S,
    presentable: &P,
    max_steps: usize,
) -> Result<Vec<T>, PagingError>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    walk_after(visible, width, max_steps, source, presentable).into_result(max_steps)
}

/// Returns the window around `item`: items before, `item` itself, then items after.
///
/// Each side gets half of `width`. `item` is always part of the result, however wide it is.
pub fn visible_items<T, S, P>(item: &T, width: f64, source: &S, presentable: &P) -> Vec<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    window_around(item, width, UNBOUNDED, source, presentable).items
}

/// Like [`visible_items`], but fails when either side fetches more than `max_steps` neighbours.
pub fn try_visible_items<T, S, P>(
    item: &T,
    width: f64,
    source: &S,
    presentable: &P,
    max_steps: usize,
) -> Result<Vec<T>, PagingError>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    window_around(item, width, max_steps, source, presentable).into_result(max_steps)
}

fn walk_before<T, S, P>(
    visible: &[T],
    width: f64,
    max_steps: usize,
    source: &S,
    presentable: &P,
) -> Walk<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    let Some(anchor) = visible.first() else {
        return Walk {
            items: Vec::new(),
            truncated: false,
        };
    };
    let mut walk = walk_covering(
        anchor,
        Direction::Before,
        width,
        max_steps,
        source,
        presentable,
    );
    walk.items.reverse();
    walk
}

fn walk_after<T, S, P>(
    visible: &[T],
    width: f64,
    max_steps: usize,
    source: &S,
    presentable: &P,
) -> Walk<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    let Some(anchor) = visible.last() else {
        return Walk {
            items: Vec::new(),
            truncated: false,
        };
    };
    walk_covering(
        anchor,
        Direction::After,
        width,
        max_steps,
        source,
        presentable,
    )
}

pub(crate) fn window_around<T, S, P>(
    item: &T,
    width: f64,
    max_steps: usize,
    source: &S,
    presentable: &P,
) -> Walk<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    let half = width / 2.0;
    let before = walk_covering(item, Direction::Before, half, max_steps, source, presentable);
    let after = walk_covering(item, Direction::After, half, max_steps, source, presentable);

    let mut items = Vec::with_capacity(before.items.len() + 1 + after.items.len());
    items.extend(before.items.into_iter().rev());
    items.push(item.clone());
    items.extend(after.items);
    Walk {
        items,
        truncated: before.truncated || after.truncated,
    }
}

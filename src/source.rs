use crate::Direction;

/// Provides the neighbours of an item.
///
/// The chain is never materialized: windowing functions ask for one neighbour at a time.
///
/// Contract:
/// - `item_before` and `item_after` describe a simple path (no cycles).
/// - They are mutually consistent: if `b == item_after(a)` then `a == item_before(b)`.
///
/// Violating the contract leaves the resulting windows unspecified. A cyclic source makes the
/// unbounded functions loop forever; the `try_*` functions and [`crate::PagingWindow`] cap every
/// walk (see [`crate::DEFAULT_MAX_STEPS`]).
pub trait PagingDataSource<T> {
    /// The item to focus when nothing is focused yet.
    fn initial_item(&self) -> Option<T>;

    /// The predecessor of `item`, or `None` if `item` is first.
    fn item_before(&self, item: &T) -> Option<T>;

    /// The successor of `item`, or `None` if `item` is last.
    fn item_after(&self, item: &T) -> Option<T>;

    /// Dispatches to [`Self::item_before`] or [`Self::item_after`].
    fn item_toward(&self, item: &T, direction: Direction) -> Option<T> {
        match direction {
            Direction::Before => self.item_before(item),
            Direction::After => self.item_after(item),
        }
    }
}

impl<T, S: PagingDataSource<T> + ?Sized> PagingDataSource<T> for &S {
    fn initial_item(&self) -> Option<T> {
        (**self).initial_item()
    }

    fn item_before(&self, item: &T) -> Option<T> {
        (**self).item_before(item)
    }

    fn item_after(&self, item: &T) -> Option<T> {
        (**self).item_after(item)
    }
}

/// Measures items along the paging axis.
///
/// Widths must be non-negative and stable for the same item during a single computation.
/// Any `Fn(&T) -> f64` is a presentable.
pub trait PagingItemPresentable<T> {
    fn width(&self, item: &T) -> f64;
}

impl<T, F> PagingItemPresentable<T> for F
where
    F: Fn(&T) -> f64,
{
    fn width(&self, item: &T) -> f64 {
        self(item)
    }
}

/// A [`PagingDataSource`] backed by a slice.
///
/// Items are located by equality, so each lookup is `O(n)`. This is meant for menus with a
/// handful of fixed items; larger hosts should implement the trait on their own model.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a, T> {
    items: &'a [T],
}

impl<'a, T> SliceSource<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }
}

impl<T: PartialEq> SliceSource<'_, T> {
    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|it| it == item)
    }
}

impl<T: PartialEq + Clone> PagingDataSource<T> for SliceSource<'_, T> {
    fn initial_item(&self) -> Option<T> {
        self.items.first().cloned()
    }

    fn item_before(&self, item: &T) -> Option<T> {
        let index = self.position(item)?;
        let prev = index.checked_sub(1)?;
        self.items.get(prev).cloned()
    }

    fn item_after(&self, item: &T) -> Option<T> {
        let index = self.position(item)?;
        self.items.get(index + 1).cloned()
    }
}

use alloc::vec::Vec;
use core::slice;

use crate::PagingItemPresentable;
use crate::walk::measure;

/// An immutable snapshot of the visible items, in display order (left to right).
///
/// A new snapshot is built whenever the window changes; the previous one stays valid and is
/// typically used as the `from` side of [`crate::diff_width`].
///
/// Items are expected to be unique (by equality) and ordered as the data source chains them.
/// Lookups are linear: a paging menu only ever shows a handful of items.
///
/// Two snapshots are equal when they hold the same items in the same order; a cached total width
/// does not take part in the comparison.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Only the items are
/// serialized; a deserialized snapshot measures itself again on demand.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingDataStructure<T> {
    visible_items: Vec<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    total_width: Option<f64>,
}

impl<T: PartialEq> PartialEq for PagingDataStructure<T> {
    fn eq(&self, other: &Self) -> bool {
        self.visible_items == other.visible_items
    }
}

impl<T> Default for PagingDataStructure<T> {
    fn default() -> Self {
        Self {
            visible_items: Vec::new(),
            total_width: None,
        }
    }
}

impl<T> PagingDataStructure<T> {
    pub fn new(visible_items: Vec<T>) -> Self {
        Self {
            visible_items,
            total_width: None,
        }
    }

    /// Creates a snapshot and caches the total width of its items.
    pub fn measured<P>(visible_items: Vec<T>, presentable: &P) -> Self
    where
        P: PagingItemPresentable<T> + ?Sized,
    {
        let total_width = sum_widths(visible_items.iter(), presentable);
        Self {
            visible_items,
            total_width: Some(total_width),
        }
    }

    /// Total width of the visible items.
    ///
    /// Returns the cached value for snapshots built with [`Self::measured`], otherwise measures
    /// every item with `presentable`. The cache was taken with the presentable passed to
    /// [`Self::measured`]; `presentable` is only consulted when nothing is cached.
    pub fn total_width<P>(&self, presentable: &P) -> f64
    where
        P: PagingItemPresentable<T> + ?Sized,
    {
        match self.total_width {
            Some(width) => width,
            None => sum_widths(self.visible_items.iter(), presentable),
        }
    }

    pub fn cached_total_width(&self) -> Option<f64> {
        self.total_width
    }

    pub fn len(&self) -> usize {
        self.visible_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.visible_items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.visible_items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.visible_items.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.visible_items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.visible_items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.visible_items
    }
}

impl<T: PartialEq> PagingDataStructure<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.visible_items.contains(item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.visible_items.iter().position(|it| it == item)
    }

    /// Items of `self` that are not in `from`, in display order.
    pub fn items_added<'a>(&'a self, from: &'a Self) -> impl Iterator<Item = &'a T> + 'a {
        self.visible_items
            .iter()
            .filter(move |item| !from.contains(item))
    }

    /// Items of `self` that are not in `to`, in display order.
    pub fn items_removed<'a>(&'a self, to: &'a Self) -> impl Iterator<Item = &'a T> + 'a {
        self.visible_items
            .iter()
            .filter(move |item| !to.contains(item))
    }
}

impl<T> From<Vec<T>> for PagingDataStructure<T> {
    fn from(visible_items: Vec<T>) -> Self {
        Self::new(visible_items)
    }
}

impl<'a, T> IntoIterator for &'a PagingDataStructure<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn sum_widths<'a, T, P>(items: impl Iterator<Item = &'a T>, presentable: &P) -> f64
where
    T: 'a,
    P: PagingItemPresentable<T> + ?Sized,
{
    items.map(|item| measure(presentable, item)).sum()
}

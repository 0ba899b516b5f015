use alloc::vec::Vec;

use crate::{Direction, PagingDataSource, PagingError, PagingItemPresentable};

pub(crate) fn measure<T, P>(presentable: &P, item: &T) -> f64
where
    P: PagingItemPresentable<T> + ?Sized,
{
    let width = presentable.width(item);
    if width < 0.0 {
        pwarn!(width, "PagingItemPresentable: negative item width");
        debug_assert!(
            width >= 0.0,
            "PagingItemPresentable: negative item width ({width})"
        );
    }
    width
}

/// A position on the neighbour chain that only moves outward.
///
/// `width` accumulates every item fetched so far, not including the starting item.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<T> {
    direction: Direction,
    current: Option<T>,
    width: f64,
    steps: usize,
    truncated: bool,
}

impl<T> Cursor<T> {
    pub(crate) fn new(start: T, direction: Direction) -> Self {
        Self {
            direction,
            current: Some(start),
            width: 0.0,
            steps: 0,
            truncated: false,
        }
    }

    pub(crate) fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Whether the walk was cut short by the step limit rather than by the end of the chain.
    pub(crate) fn truncated(&self) -> bool {
        self.truncated
    }

    /// Fetches the next neighbour and adds its width.
    ///
    /// Returns `None` once the chain has ended, or when a neighbour exists beyond the
    /// `max_steps` already fetched; the cursor is done from then on. Only the latter marks the
    /// cursor as truncated.
    pub(crate) fn advance<S, P>(
        &mut self,
        source: &S,
        presentable: &P,
        max_steps: usize,
    ) -> Option<&T>
    where
        S: PagingDataSource<T> + ?Sized,
        P: PagingItemPresentable<T> + ?Sized,
    {
        let current = self.current.as_ref()?;
        let Some(item) = source.item_toward(current, self.direction) else {
            self.current = None;
            return None;
        };
        if self.steps >= max_steps {
            pwarn!(
                limit = max_steps,
                direction = ?self.direction,
                "neighbour walk exceeded the step limit"
            );
            self.truncated = true;
            self.current = None;
            return None;
        }

        self.width += measure(presentable, &item);
        self.steps += 1;
        self.current = Some(item);
        self.current.as_ref()
    }
}

/// Step limit of the infallible walks: the data source contract promises an acyclic chain.
pub(crate) const UNBOUNDED: usize = usize::MAX;

/// Items fetched by a covering walk, in walk order (nearest to the anchor first).
#[derive(Clone, Debug)]
pub(crate) struct Walk<T> {
    pub(crate) items: Vec<T>,
    pub(crate) truncated: bool,
}

impl<T> Walk<T> {
    pub(crate) fn into_result(self, max_steps: usize) -> Result<Vec<T>, PagingError> {
        if self.truncated {
            return Err(PagingError::StepLimitExceeded { limit: max_steps });
        }
        Ok(self.items)
    }
}

/// Walks away from `anchor` while the accumulated width is below `budget`.
///
/// Loop invariant: a neighbour is fetched only while `width < budget`, so every fetched item is
/// kept and the one that reaches the budget is the last. Without it, the total is strictly
/// below the budget. A non-positive (or NaN) budget fetches nothing.
pub(crate) fn walk_covering<T, S, P>(
    anchor: &T,
    direction: Direction,
    budget: f64,
    max_steps: usize,
    source: &S,
    presentable: &P,
) -> Walk<T>
where
    T: Clone,
    S: PagingDataSource<T> + ?Sized,
    P: PagingItemPresentable<T> + ?Sized,
{
    let mut cursor = Cursor::new(anchor.clone(), direction);
    let mut items = Vec::new();
    while cursor.width() < budget {
        match cursor.advance(source, presentable, max_steps) {
            Some(item) => items.push(item.clone()),
            None => break,
        }
    }
    ptrace!(
        ?direction,
        budget,
        count = items.len(),
        width = cursor.width(),
        "walk_covering"
    );
    Walk {
        items,
        truncated: cursor.truncated(),
    }
}

use alloc::sync::Arc;

use crate::{PagingDataStructure, WindowUpdate};

/// Upper bound on the neighbours a single walk may fetch.
///
/// Default of [`PagingOptions::max_steps`]. Data sources are external and unverified; the bound
/// keeps a cyclic source from looping forever.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// A callback fired after a [`crate::PagingWindow`] has replaced its visible items.
pub type OnChangeCallback<T> = Arc<dyn Fn(&PagingDataStructure<T>, WindowUpdate) + Send + Sync>;

/// Configuration for [`crate::PagingWindow`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct PagingOptions<T> {
    /// Width budget of the whole menu. Each side of the focused item gets half.
    pub menu_width: f64,

    /// Maximum neighbours fetched per walk.
    pub max_steps: usize,

    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T> Clone for PagingOptions<T> {
    fn clone(&self) -> Self {
        Self {
            menu_width: self.menu_width,
            max_steps: self.max_steps,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> PagingOptions<T> {
    pub fn new(menu_width: f64) -> Self {
        Self {
            menu_width,
            max_steps: DEFAULT_MAX_STEPS,
            on_change: None,
        }
    }

    pub fn with_menu_width(mut self, menu_width: f64) -> Self {
        self.menu_width = menu_width;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&PagingDataStructure<T>, WindowUpdate) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> core::fmt::Debug for PagingOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagingOptions")
            .field("menu_width", &self.menu_width)
            .field("max_steps", &self.max_steps)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

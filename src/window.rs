use crate::items::window_around;
use crate::{
    PagingDataSource, PagingDataStructure, PagingError, PagingItemPresentable, PagingOptions,
    WindowUpdate, diff_width, try_width_from_item,
};

/// Host-side paging state: the focused item and the snapshot of items visible around it.
///
/// This type is UI-agnostic. It does not own views and never animates; the host applies the
/// returned [`WindowUpdate`]s to its own scroll container:
/// - `width_delta` is how much the content grew or shrank
/// - `distance` is how far the newly focused item was from the previous window
///
/// Every transition builds a new [`PagingDataStructure`]. When a transition fails, the window
/// keeps its previous state.
#[derive(Clone, Debug)]
pub struct PagingWindow<T, S, P> {
    options: PagingOptions<T>,
    source: S,
    presentable: P,
    structure: PagingDataStructure<T>,
    focused: Option<T>,
}

impl<T, S, P> PagingWindow<T, S, P>
where
    T: Clone + PartialEq,
    S: PagingDataSource<T>,
    P: PagingItemPresentable<T>,
{
    /// Creates a window focused on the data source's initial item.
    ///
    /// A data source without an initial item yields an empty window.
    pub fn new(source: S, presentable: P, options: PagingOptions<T>) -> Result<Self, PagingError> {
        pdebug!(
            menu_width = options.menu_width,
            max_steps = options.max_steps,
            "PagingWindow::new"
        );
        let mut window = Self {
            options,
            source,
            presentable,
            structure: PagingDataStructure::default(),
            focused: None,
        };
        window.reload()?;
        Ok(window)
    }

    pub fn options(&self) -> &PagingOptions<T> {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn presentable(&self) -> &P {
        &self.presentable
    }

    pub fn structure(&self) -> &PagingDataStructure<T> {
        &self.structure
    }

    pub fn focused_item(&self) -> Option<&T> {
        self.focused.as_ref()
    }

    pub fn menu_width(&self) -> f64 {
        self.options.menu_width
    }

    /// Focuses `item` and rebuilds the window around it.
    ///
    /// `distance` in the returned update is measured against the previous window, so hosts can
    /// shift their content before the new items appear.
    pub fn select(&mut self, item: T) -> Result<WindowUpdate, PagingError> {
        let distance = try_width_from_item(
            &item,
            &self.structure,
            &self.source,
            &self.presentable,
            self.options.max_steps,
        )?;
        let options = self.options.clone();
        self.rebuild(Some(item), options, distance)
    }

    /// Changes the menu width and rebuilds the window around the focused item.
    pub fn resize(&mut self, menu_width: f64) -> Result<WindowUpdate, PagingError> {
        self.update_options(|options| options.menu_width = menu_width)
    }

    /// Clones the current options, applies `f`, then rebuilds with the result.
    ///
    /// The new options only take effect when the rebuild succeeds.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut PagingOptions<T>),
    ) -> Result<WindowUpdate, PagingError> {
        let mut next = self.options.clone();
        f(&mut next);
        let focus = self.current_focus();
        self.rebuild(focus, next, 0.0)
    }

    /// Rebuilds the window around the focused item.
    ///
    /// Use this when the data source changed. Without a focused item, the data source's initial
    /// item is focused.
    pub fn reload(&mut self) -> Result<WindowUpdate, PagingError> {
        let focus = self.current_focus();
        let options = self.options.clone();
        self.rebuild(focus, options, 0.0)
    }

    fn current_focus(&self) -> Option<T> {
        self.focused
            .clone()
            .or_else(|| self.source.initial_item())
    }

    fn rebuild(
        &mut self,
        focus: Option<T>,
        options: PagingOptions<T>,
        distance: f64,
    ) -> Result<WindowUpdate, PagingError> {
        let structure = match &focus {
            Some(item) => {
                let walk = window_around(
                    item,
                    options.menu_width,
                    options.max_steps,
                    &self.source,
                    &self.presentable,
                );
                if walk.truncated {
                    return Err(PagingError::StepLimitExceeded {
                        limit: options.max_steps,
                    });
                }
                PagingDataStructure::measured(walk.items, &self.presentable)
            }
            None => PagingDataStructure::default(),
        };

        let update = WindowUpdate {
            width_delta: diff_width(&self.structure, &structure, &self.presentable),
            distance,
        };
        pdebug!(
            count = structure.len(),
            width_delta = update.width_delta,
            distance = update.distance,
            "PagingWindow::rebuild"
        );

        self.options = options;
        self.structure = structure;
        self.focused = focus;
        if let Some(cb) = &self.options.on_change {
            cb(&self.structure, update);
        }
        Ok(update)
    }
}

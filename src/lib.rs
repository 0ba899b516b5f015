//! Sliding-window item management for paging menus.
//!
//! A paging menu shows a strip of items (tabs, pages) around the focused one. The items are not
//! held in a list: they are discovered one neighbour at a time through a [`PagingDataSource`],
//! and each item is measured through a [`PagingItemPresentable`].
//!
//! This crate holds the algorithms that sit between those callbacks and the view layer:
//! - windowing: [`items_before`], [`items_after`] and [`visible_items`] walk the neighbour chain
//!   until a width budget is covered
//! - snapshots: [`PagingDataStructure`] is the immutable, ordered set of visible items
//! - width accounting: [`width_from_item`] and [`diff_width`] tell the host how far the content
//!   has to shift when the window slides
//!
//! [`PagingWindow`] ties these together for hosts that want the current snapshot and focus kept
//! for them. It is UI-agnostic: it does not hold any views and never animates.
//!
//! ```
//! use paging_window::{PagingDataStructure, SliceSource, diff_width, visible_items};
//!
//! let tabs = ["Home", "News", "Sports", "Weather", "Music"];
//! let source = SliceSource::new(&tabs);
//! let width = |tab: &&str| tab.len() as f64 * 10.0;
//!
//! let items = visible_items(&"Sports", 80.0, &source, &width);
//! assert_eq!(items, ["News", "Sports", "Weather"]);
//!
//! let from = PagingDataStructure::new(items);
//! let to = PagingDataStructure::new(visible_items(&"Weather", 80.0, &source, &width));
//! assert_eq!(diff_width(&from, &to, &width), 10.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod items;
mod options;
mod source;
mod structure;
mod types;
mod walk;
mod width;
mod window;


pub use error::PagingError;
pub use items::{
    items_after, items_before, try_items_after, try_items_before, try_visible_items, visible_items,
};
pub use options::{DEFAULT_MAX_STEPS, OnChangeCallback, PagingOptions};
pub use source::{PagingDataSource, PagingItemPresentable, SliceSource};
pub use structure::PagingDataStructure;
pub use types::{Direction, WindowUpdate};
pub use width::{diff_width, try_width_from_item, width_from_item};
pub use window::PagingWindow;

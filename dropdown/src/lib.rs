//! Dropdown selector widget.
//!
//! A [`Select`] renders a trigger into the caller's element tree and an option
//! list into its own mount point on a [`layerdom::Document`]. Options are
//! declared per render as [`SelectOption`] items; the select wraps their click
//! handlers to report the chosen [`OptionValue`] and close the list.

pub mod option;
pub mod select;
pub mod value;

pub use option::{ClickHandler, SelectOption};
pub use select::{
    DismissPolicy, Placement, Select, SelectConfig, SelectHandler, SelectId, SelectProps,
};
pub use value::OptionValue;

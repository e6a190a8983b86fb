//! Select widget - a trigger plus an option list in a detached overlay.

mod config;
mod events;
mod render;
mod state;

pub use config::{DismissPolicy, SelectConfig};
pub use render::{SelectHandler, SelectProps, matched_index};
pub use state::{Placement, Select, SelectId};

pub mod buffer;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use document::{Document, Handler, ListenerId, MountId};
pub use element::{Content, Element};
pub use error::DomError;
pub use event::{Event, EventKind, MouseButton};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use types::*;

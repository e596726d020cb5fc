pub mod document;
pub mod element;
pub mod event;
pub mod render;
pub mod surface;
pub mod types;

pub use document::Document;
pub use element::{Element, InputKind, Tag};
pub use event::{Event, EventKind, Key, KeyParseError};
pub use surface::{Surface, SurfaceError, SurfaceResult};
pub use types::*;

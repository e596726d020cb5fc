pub mod config;
pub mod context;
pub mod effects;
pub mod error;
pub mod form;
pub mod markup;
pub mod page;
pub mod runtime;
pub mod timer;
pub mod validation;
pub mod widgets;

pub use page::Page;
pub use runtime::Runtime;

pub mod prelude {
    pub use crate::config::{ConfigError, PageConfig};
    pub use crate::context::{PageContext, PageTimer};
    pub use crate::effects::Effects;
    pub use crate::error::{PageError, PageResult};
    pub use crate::form::{Field, FormReport, FormSnapshot};
    pub use crate::markup::demo_document;
    pub use crate::page::Page;
    pub use crate::runtime::{ClockMode, Runtime, RuntimeError};
    pub use crate::timer::{Scheduler, TimerId};
    pub use crate::validation::{FieldError, FieldResult, Rules};
    pub use crate::widgets::{EventResult, Widget};

    pub use pagedom::{Document, Event, Key, Surface};
}

//! The page's interactive features, one controller each.

pub mod accordion;
pub mod click_demo;
pub mod counter;
pub mod dropdown;
pub mod events;
pub mod hover_box;
pub mod keyboard_echo;
pub mod signup;
pub mod tabs;
pub mod theme_toggle;

use pagedom::Surface;

use crate::error::PageResult;

pub use accordion::Accordion;
pub use click_demo::ClickDemo;
pub use counter::Counter;
pub use dropdown::{Dropdown, Selection};
pub use events::{EventResult, Widget};
pub use hover_box::HoverBox;
pub use keyboard_echo::KeyboardEcho;
pub use signup::SignupForm;
pub use tabs::Tabs;
pub use theme_toggle::ThemeToggle;

/// Class of a status message element.
pub const CLASS_MESSAGE: &str = "message";

/// Class of a status message reporting something that happened.
pub const CLASS_MESSAGE_SUCCESS: &str = "message success";

/// Every widget of the demo page, in dispatch order.
pub fn all() -> Vec<Box<dyn Widget>> {
    vec![
        Box::new(ClickDemo::new()),
        Box::new(HoverBox::new()),
        Box::new(KeyboardEcho::new()),
        Box::new(ThemeToggle::new()),
        Box::new(Counter::new()),
        Box::new(Accordion::new()),
        Box::new(Dropdown::new()),
        Box::new(Tabs::new()),
        Box::new(SignupForm::new()),
    ]
}

/// Set a message element's text and class list together.
pub(crate) fn set_message(
    surface: &mut dyn Surface,
    id: &str,
    text: &str,
    class_name: &str,
) -> PageResult<()> {
    surface.set_text(id, text)?;
    surface.set_class_name(id, class_name)?;
    Ok(())
}

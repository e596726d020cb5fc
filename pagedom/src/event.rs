use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Page events, each targeted at the element that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer click
    Click { target: String },
    /// Pointer entered the element's box
    MouseEnter { target: String },
    /// Pointer left the element's box
    MouseLeave { target: String },
    /// Pointer moved inside the element, in client coordinates
    MouseMove {
        target: String,
        client_x: f64,
        client_y: f64,
    },
    /// Field value changed
    Input { target: String },
    /// Key pressed while the element had focus
    KeyPress { target: String, key: Key },
    /// Element lost focus
    Blur { target: String },
    /// Form submitted
    Submit { target: String },
}

/// Discriminant of [`Event`], for logging and routing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    MouseMove,
    Input,
    KeyPress,
    Blur,
    Submit,
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }

    pub fn key_press(target: impl Into<String>, key: Key) -> Self {
        Self::KeyPress {
            target: target.into(),
            key,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Event::Click { target }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target }
            | Event::MouseMove { target, .. }
            | Event::Input { target }
            | Event::KeyPress { target, .. }
            | Event::Blur { target }
            | Event::Submit { target } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::MouseEnter { .. } => EventKind::MouseEnter,
            Event::MouseLeave { .. } => EventKind::MouseLeave,
            Event::MouseMove { .. } => EventKind::MouseMove,
            Event::Input { .. } => EventKind::Input,
            Event::KeyPress { .. } => EventKind::KeyPress,
            Event::Blur { .. } => EventKind::Blur,
            Event::Submit { .. } => EventKind::Submit,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Click => "click",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::MouseMove => "mousemove",
            EventKind::Input => "input",
            EventKind::KeyPress => "keypress",
            EventKind::Blur => "blur",
            EventKind::Submit => "submit",
        };
        f.write_str(name)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key '{0}'")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parse a `KeyboardEvent.key` style name: `Enter`, `Escape`, `a`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "Space" => Key::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(KeyParseError(other.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("Space"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("Enter"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::Tab => f.write_str("Tab"),
            Key::Escape => f.write_str("Escape"),
            Key::Up => f.write_str("ArrowUp"),
            Key::Down => f.write_str("ArrowDown"),
            Key::Left => f.write_str("ArrowLeft"),
            Key::Right => f.write_str("ArrowRight"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
        }
    }
}

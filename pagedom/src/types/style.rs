use std::fmt;

use super::Color;

/// CSS `display` values the page toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Display::None => f.write_str("none"),
            Display::Block => f.write_str("block"),
        }
    }
}

/// CSS `transform` values. Only uniform scaling is used by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Scale(f32),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Scale(factor) => write!(f, "scale({factor})"),
        }
    }
}

/// Names of the inline style properties a surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Color,
    BackgroundColor,
    Transform,
    Display,
    Animation,
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Transform => "transform",
            StyleProperty::Display => "display",
            StyleProperty::Animation => "animation",
        };
        f.write_str(name)
    }
}

/// A single inline style assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Color(Color),
    BackgroundColor(Color),
    Transform(Transform),
    Display(Display),
    Animation(String),
}

impl Declaration {
    pub fn property(&self) -> StyleProperty {
        match self {
            Declaration::Color(_) => StyleProperty::Color,
            Declaration::BackgroundColor(_) => StyleProperty::BackgroundColor,
            Declaration::Transform(_) => StyleProperty::Transform,
            Declaration::Display(_) => StyleProperty::Display,
            Declaration::Animation(_) => StyleProperty::Animation,
        }
    }
}

/// Inline style of an element. Unset properties fall back to the stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub transform: Option<Transform>,
    pub display: Option<Display>,
    pub animation: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn apply(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Color(c) => self.color = Some(c),
            Declaration::BackgroundColor(c) => self.background_color = Some(c),
            Declaration::Transform(t) => self.transform = Some(t),
            Declaration::Display(d) => self.display = Some(d),
            Declaration::Animation(a) => {
                // An empty animation string resets the property, as in CSS.
                self.animation = if a.is_empty() { None } else { Some(a) };
            }
        }
    }

    pub fn clear(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Color => self.color = None,
            StyleProperty::BackgroundColor => self.background_color = None,
            StyleProperty::Transform => self.transform = None,
            StyleProperty::Display => self.display = None,
            StyleProperty::Animation => self.animation = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render as a CSS declaration list, e.g. `color: #e53e3e; display: none`.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(c) = self.color {
            parts.push(format!("{}: {c}", StyleProperty::Color));
        }
        if let Some(c) = self.background_color {
            parts.push(format!("{}: {c}", StyleProperty::BackgroundColor));
        }
        if let Some(t) = self.transform {
            parts.push(format!("{}: {t}", StyleProperty::Transform));
        }
        if let Some(d) = self.display {
            parts.push(format!("{}: {d}", StyleProperty::Display));
        }
        if let Some(a) = &self.animation {
            parts.push(format!("{}: {a}", StyleProperty::Animation));
        }
        parts.join("; ")
    }
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Rect, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element kinds the page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Div,
    Section,
    Heading,
    Paragraph,
    Span,
    Button,
    Anchor,
    Form,
    Label,
    Input(InputKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Number,
    Checkbox,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Body => "body",
            Tag::Div => "div",
            Tag::Section => "section",
            Tag::Heading => "h2",
            Tag::Paragraph => "p",
            Tag::Span => "span",
            Tag::Button => "button",
            Tag::Anchor => "a",
            Tag::Form => "form",
            Tag::Label => "label",
            Tag::Input(_) => "input",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Tag::Input(_))
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Presentation
    pub classes: Vec<String>,
    pub style: Style,
    pub text: String,
    pub rect: Rect,

    // Form state. `default_*` is what a form reset restores.
    pub value: String,
    pub default_value: String,
    pub checked: bool,
    pub default_checked: bool,

    // `data-*` attributes, keyed without the prefix
    pub data: HashMap<String, String>,

    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            classes: Vec::new(),
            style: Style::default(),
            text: String::new(),
            rect: Rect::default(),
            value: String::new(),
            default_value: String::new(),
            checked: false,
            default_checked: false,
            data: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn body() -> Self {
        Self::new(Tag::Body).id("body")
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn section() -> Self {
        Self::new(Tag::Section)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Tag::Heading).text(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Tag::Paragraph).text(text)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(text)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Tag::Button).text(text)
    }

    pub fn anchor(text: impl Into<String>) -> Self {
        Self::new(Tag::Anchor).text(text)
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(Tag::Label).text(text)
    }

    pub fn input(kind: InputKind) -> Self {
        Self::new(Tag::Input(kind))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    // Form state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.default_value = self.value.clone();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.default_checked = checked;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Tree
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if the class list changed.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if the class list changed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Replace the whole class list from a space separated `className`.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes.clear();
        for class in class_name.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Restore form state to the defaults, recursively.
    pub fn reset(&mut self) {
        if self.tag.is_input() {
            self.value = self.default_value.clone();
            self.checked = self.default_checked;
        }
        for child in &mut self.children {
            child.reset();
        }
    }
}

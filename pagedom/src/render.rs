//! Plain-text rendering of the element tree.
//!
//! One line per element:
//!
//! ```text
//! button#counter-btn.btn "Count: 3" {background-color: #dd6b20}
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::element::{Element, InputKind, Tag};

/// Display columns of text shown per element before eliding.
const TEXT_WIDTH: usize = 48;

/// Render the whole tree, two spaces of indent per level.
pub fn dump(root: &Element) -> String {
    let mut out = String::new();
    dump_into(root, 0, &mut out);
    out
}

fn dump_into(element: &Element, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&describe(element));
    out.push('\n');
    for child in &element.children {
        dump_into(child, depth + 1, out);
    }
}

/// Render a single element without its children.
pub fn describe(element: &Element) -> String {
    let mut line = String::from(element.tag.name());
    line.push('#');
    line.push_str(&element.id);
    for class in &element.classes {
        line.push('.');
        line.push_str(class);
    }

    match element.tag {
        Tag::Input(InputKind::Checkbox) => {
            line.push_str(if element.checked { " [x]" } else { " [ ]" });
        }
        Tag::Input(InputKind::Password) => {
            let masked = "*".repeat(element.value.chars().count());
            line.push_str(&format!(" value=\"{masked}\""));
        }
        Tag::Input(_) => {
            line.push_str(&format!(" value=\"{}\"", elide(&element.value, TEXT_WIDTH)));
        }
        _ => {}
    }

    if !element.text.is_empty() {
        line.push_str(&format!(" \"{}\"", elide(&element.text, TEXT_WIDTH)));
    }

    if !element.style.is_empty() {
        line.push_str(&format!(" {{{}}}", element.style.to_css()));
    }

    line
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub fn elide(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

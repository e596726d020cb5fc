//! The capability interface controllers use to read and change the page.
//!
//! Everything a widget does to the page goes through [`Surface`], so the same
//! controller code runs against the in-memory [`Document`](crate::Document)
//! in tests and against any other rendering backend that implements it.

use thiserror::Error;

use crate::types::{Declaration, Rect, Style, StyleProperty};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// No element with this ID exists on the page.
    #[error("element '{0}' not found")]
    NotFound(String),

    /// The element exists but has no value or checked state.
    #[error("element '{0}' is not an input")]
    NotAnInput(String),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

pub trait Surface {
    fn contains(&self, id: &str) -> bool;

    // -------------------------------------------------------------------------
    // Form fields
    // -------------------------------------------------------------------------

    fn value(&self, id: &str) -> SurfaceResult<String>;

    fn set_value(&mut self, id: &str, value: &str) -> SurfaceResult<()>;

    fn is_checked(&self, id: &str) -> SurfaceResult<bool>;

    fn set_checked(&mut self, id: &str, checked: bool) -> SurfaceResult<()>;

    /// Restore every input below `id` to its default value and checked state.
    fn reset_form(&mut self, id: &str) -> SurfaceResult<()>;

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    fn text(&self, id: &str) -> SurfaceResult<String>;

    fn set_text(&mut self, id: &str, text: &str) -> SurfaceResult<()>;

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    fn has_class(&self, id: &str, class: &str) -> SurfaceResult<bool>;

    fn add_class(&mut self, id: &str, class: &str) -> SurfaceResult<()>;

    fn remove_class(&mut self, id: &str, class: &str) -> SurfaceResult<()>;

    /// Replace the whole class list, like assigning `className`.
    fn set_class_name(&mut self, id: &str, class_name: &str) -> SurfaceResult<()>;

    /// Toggle a class. Returns true if the class is present afterwards.
    fn toggle_class(&mut self, id: &str, class: &str) -> SurfaceResult<bool> {
        if self.has_class(id, class)? {
            self.remove_class(id, class)?;
            Ok(false)
        } else {
            self.add_class(id, class)?;
            Ok(true)
        }
    }

    // -------------------------------------------------------------------------
    // Inline style
    // -------------------------------------------------------------------------

    fn style(&self, id: &str) -> SurfaceResult<Style>;

    fn set_style(&mut self, id: &str, declaration: Declaration) -> SurfaceResult<()>;

    fn clear_style(&mut self, id: &str, property: StyleProperty) -> SurfaceResult<()>;

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Read a `data-*` attribute (`name` without the prefix).
    fn data(&self, id: &str, name: &str) -> SurfaceResult<Option<String>>;

    fn bounding_rect(&self, id: &str) -> SurfaceResult<Rect>;

    fn parent(&self, id: &str) -> SurfaceResult<Option<String>>;

    fn children(&self, id: &str) -> SurfaceResult<Vec<String>>;

    fn next_sibling(&self, id: &str) -> SurfaceResult<Option<String>>;

    /// IDs of every element carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    /// The first descendant of `id` carrying `class`, like `querySelector`.
    fn find_descendant_with_class(&self, id: &str, class: &str) -> SurfaceResult<Option<String>> {
        for child in self.children(id)? {
            if self.has_class(&child, class)? {
                return Ok(Some(child));
            }
            if let Some(found) = self.find_descendant_with_class(&child, class)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// The element itself or its nearest ancestor carrying `class`, like `closest`.
    fn closest_with_class(&self, id: &str, class: &str) -> SurfaceResult<Option<String>> {
        let mut current = Some(id.to_string());
        while let Some(candidate) = current {
            if self.has_class(&candidate, class)? {
                return Ok(Some(candidate));
            }
            current = self.parent(&candidate)?;
        }
        Ok(None)
    }

    /// True if `id` is `ancestor` or lies anywhere below it.
    fn is_within(&self, id: &str, ancestor: &str) -> SurfaceResult<bool> {
        let mut current = Some(id.to_string());
        while let Some(candidate) = current {
            if candidate == ancestor {
                return Ok(true);
            }
            current = self.parent(&candidate)?;
        }
        Ok(false)
    }
}

use log::trace;

use crate::element::{collect_with_class, find_element, find_element_mut, find_parent, Element};
use crate::surface::{Surface, SurfaceError, SurfaceResult};
use crate::types::{Declaration, Rect, Style, StyleProperty};

/// In-memory page: an element tree plus change tracking.
///
/// Every mutation through [`Surface`] marks the touched element dirty so a
/// host can show what an event changed.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    dirty: Vec<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            dirty: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// IDs changed since the last call, in first-touched order.
    pub fn take_dirty(&mut self) -> Vec<String> {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    fn element(&self, id: &str) -> SurfaceResult<&Element> {
        find_element(&self.root, id).ok_or_else(|| SurfaceError::NotFound(id.to_string()))
    }

    fn input(&self, id: &str) -> SurfaceResult<&Element> {
        let element = self.element(id)?;
        if element.tag.is_input() {
            Ok(element)
        } else {
            Err(SurfaceError::NotAnInput(id.to_string()))
        }
    }

    /// Apply `f` to an element and mark it dirty if `f` reports a change.
    fn update<F>(&mut self, id: &str, f: F) -> SurfaceResult<()>
    where
        F: FnOnce(&mut Element) -> bool,
    {
        let element = find_element_mut(&mut self.root, id)
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))?;
        if f(element) {
            trace!("Element '{}' changed", id);
            self.mark_dirty(id);
        }
        Ok(())
    }

    fn update_input<F>(&mut self, id: &str, f: F) -> SurfaceResult<()>
    where
        F: FnOnce(&mut Element) -> bool,
    {
        self.input(id)?;
        self.update(id, f)
    }

    fn mark_dirty(&mut self, id: &str) {
        if !self.dirty.iter().any(|d| d == id) {
            self.dirty.push(id.to_string());
        }
    }
}

impl Surface for Document {
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn value(&self, id: &str) -> SurfaceResult<String> {
        Ok(self.input(id)?.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) -> SurfaceResult<()> {
        self.update_input(id, |el| {
            if el.value == value {
                return false;
            }
            el.value = value.to_string();
            true
        })
    }

    fn is_checked(&self, id: &str) -> SurfaceResult<bool> {
        Ok(self.input(id)?.checked)
    }

    fn set_checked(&mut self, id: &str, checked: bool) -> SurfaceResult<()> {
        self.update_input(id, |el| {
            let changed = el.checked != checked;
            el.checked = checked;
            changed
        })
    }

    fn reset_form(&mut self, id: &str) -> SurfaceResult<()> {
        let element = find_element_mut(&mut self.root, id)
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))?;
        let mut touched = Vec::new();
        collect_changed_inputs(element, &mut touched);
        element.reset();
        for changed in touched {
            self.mark_dirty(&changed);
        }
        Ok(())
    }

    fn text(&self, id: &str) -> SurfaceResult<String> {
        Ok(self.element(id)?.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) -> SurfaceResult<()> {
        self.update(id, |el| {
            if el.text == text {
                return false;
            }
            el.text = text.to_string();
            true
        })
    }

    fn has_class(&self, id: &str, class: &str) -> SurfaceResult<bool> {
        Ok(self.element(id)?.has_class(class))
    }

    fn add_class(&mut self, id: &str, class: &str) -> SurfaceResult<()> {
        self.update(id, |el| el.add_class(class))
    }

    fn remove_class(&mut self, id: &str, class: &str) -> SurfaceResult<()> {
        self.update(id, |el| el.remove_class(class))
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) -> SurfaceResult<()> {
        self.update(id, |el| {
            let before = el.class_name();
            el.set_class_name(class_name);
            el.class_name() != before
        })
    }

    fn style(&self, id: &str) -> SurfaceResult<Style> {
        Ok(self.element(id)?.style.clone())
    }

    fn set_style(&mut self, id: &str, declaration: Declaration) -> SurfaceResult<()> {
        self.update(id, |el| {
            let before = el.style.clone();
            el.style.apply(declaration);
            el.style != before
        })
    }

    fn clear_style(&mut self, id: &str, property: StyleProperty) -> SurfaceResult<()> {
        self.update(id, |el| {
            let before = el.style.clone();
            el.style.clear(property);
            el.style != before
        })
    }

    fn data(&self, id: &str, name: &str) -> SurfaceResult<Option<String>> {
        Ok(self.element(id)?.data.get(name).cloned())
    }

    fn bounding_rect(&self, id: &str) -> SurfaceResult<Rect> {
        Ok(self.element(id)?.rect)
    }

    fn parent(&self, id: &str) -> SurfaceResult<Option<String>> {
        self.element(id)?;
        Ok(find_parent(&self.root, id).map(|p| p.id.clone()))
    }

    fn children(&self, id: &str) -> SurfaceResult<Vec<String>> {
        Ok(self
            .element(id)?
            .children
            .iter()
            .map(|c| c.id.clone())
            .collect())
    }

    fn next_sibling(&self, id: &str) -> SurfaceResult<Option<String>> {
        self.element(id)?;
        let Some(parent) = find_parent(&self.root, id) else {
            return Ok(None);
        };
        let next = parent
            .children
            .iter()
            .position(|c| c.id == id)
            .and_then(|i| parent.children.get(i + 1))
            .map(|c| c.id.clone());
        Ok(next)
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        collect_with_class(&self.root, class)
    }
}

fn collect_changed_inputs(element: &Element, out: &mut Vec<String>) {
    if element.tag.is_input()
        && (element.value != element.default_value || element.checked != element.default_checked)
    {
        out.push(element.id.clone());
    }
    for child in &element.children {
        collect_changed_inputs(child, out);
    }
}

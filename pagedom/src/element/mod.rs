mod node;

pub use node::{Element, InputKind, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &mut root.children {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    for child in &root.children {
        if child.id == id {
            return Some(root);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect the IDs of every element carrying `class`, in document order.
pub fn collect_with_class(root: &Element, class: &str) -> Vec<String> {
    let mut ids = Vec::new();
    collect_with_class_into(root, class, &mut ids);
    ids
}

fn collect_with_class_into(element: &Element, class: &str, ids: &mut Vec<String>) {
    if element.has_class(class) {
        ids.push(element.id.clone());
    }
    for child in &element.children {
        collect_with_class_into(child, class, ids);
    }
}

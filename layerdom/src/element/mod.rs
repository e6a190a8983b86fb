mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Ids from `root` down to the element with `id`, inclusive on both ends.
/// Empty when `id` is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path.reverse();
    }
    path
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    if element.id == id {
        path.push(element.id.clone());
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, id, path) {
            path.push(element.id.clone());
            return true;
        }
    }

    false
}

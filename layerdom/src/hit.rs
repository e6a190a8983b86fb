use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest visible element at the given coordinates.
///
/// Children are checked before their parent and in reverse order (last
/// rendered = on top). A child is reachable even when it lies outside its
/// parent's rect, so absolutely positioned content can be hit.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    if root.hidden {
        return None;
    }

    let mut ordered: Vec<&Element> = root.content.children().iter().collect();
    ordered.sort_by_key(|c| c.z_index);
    for child in ordered.into_iter().rev() {
        if let Some(id) = hit_test(layout, child, x, y) {
            return Some(id);
        }
    }

    let rect = layout.get(&root.id)?;
    if rect.contains(x, y) {
        Some(root.id.clone())
    } else {
        None
    }
}

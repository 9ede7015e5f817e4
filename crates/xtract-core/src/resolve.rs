//! Element resolution over a parsed document.

use roxmltree::Node;
use xtract_model::{PathSegment, QualifiedName, ResolveError};

/// Resolve `path` from `root` and return the addressed element's text.
///
/// # Errors
///
/// See [`locate`].
pub fn resolve(
    root: Node<'_, '_>,
    path: &[PathSegment],
    namespace: &str,
) -> Result<String, ResolveError> {
    locate(root, path, namespace).map(text_content)
}

/// Find the element addressed by `path`.
///
/// The first segment matches the first element below `root` in document
/// order with that name; its occurrence index is not consulted. Each later
/// segment picks the `occurrence_index`-th direct child with its name.
///
/// # Errors
///
/// [`ResolveError::EmptyPath`] for an empty path,
/// [`ResolveError::ElementNotFound`] when the first segment matches nothing,
/// and [`ResolveError::IndexOutOfRange`] when a later segment has too few
/// matching children.
pub fn locate<'a, 'input>(
    root: Node<'a, 'input>,
    path: &[PathSegment],
    namespace: &str,
) -> Result<Node<'a, 'input>, ResolveError> {
    let (first, rest) = path.split_first().ok_or(ResolveError::EmptyPath)?;

    let name = first.qualified_name(namespace);
    let mut current = root
        .descendants()
        .skip(1)
        .find(|node| has_name(*node, name))
        .ok_or_else(|| ResolveError::ElementNotFound {
            name: name.to_string(),
        })?;

    for segment in rest {
        let name = segment.qualified_name(namespace);
        let selected = current
            .children()
            .filter(|child| has_name(*child, name))
            .nth(segment.occurrence_index);
        current = match selected {
            Some(child) => child,
            None => {
                return Err(ResolveError::IndexOutOfRange {
                    name: name.to_string(),
                    index: segment.occurrence_index,
                    available: current
                        .children()
                        .filter(|child| has_name(*child, name))
                        .count(),
                });
            }
        };
    }

    Ok(current)
}

/// Concatenated character data of `node` and all its descendants.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}

fn has_name(node: Node<'_, '_>, name: QualifiedName<'_>) -> bool {
    if !node.is_element() {
        return false;
    }
    let tag = node.tag_name();
    name.matches(tag.namespace(), tag.name())
}

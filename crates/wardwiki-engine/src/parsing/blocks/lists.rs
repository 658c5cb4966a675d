use crate::models::{Document, NodeId, NodeKind};

use super::containers::ContextStack;

/// Makes a list of `depth` the active context for a list-item line.
///
/// - Deeper open lists are closed first.
/// - An open list at exactly `depth` is reused, so consecutive items accumulate
///   in one list node.
/// - Otherwise lists for each missing level are opened, each nested in the
///   previous. When nesting under an open list, the new list is placed inside
///   that list's last item so it belongs to the item it follows.
///
/// The active context must be a list or the root on entry.
pub fn enter_list(doc: &mut Document, stack: &mut ContextStack, depth: usize) {
    stack.close_to_block(doc);

    while stack.active_list_depth(doc).is_some_and(|d| d > depth) {
        log::trace!("closing list deeper than {depth}");
        stack.close();
    }

    let current = stack.active_list_depth(doc).unwrap_or(0);
    if current == depth {
        log::trace!("continuing list at depth {depth}");
        return;
    }

    let mut parent = if current > 0 {
        item_host(doc, stack.active())
    } else {
        stack.active()
    };
    for level in current + 1..=depth {
        log::trace!("opening list at depth {level}");
        let list = doc.push_node(parent, NodeKind::List { depth: level });
        stack.open(list);
        parent = list;
    }
}

/// Where a list nested under `list` should be attached: the last item's
/// paragraph, or the list itself if it has no item yet.
fn item_host(doc: &Document, list: NodeId) -> NodeId {
    match doc.node(list).last_node_child() {
        Some(last) if doc.node(last).kind() == &NodeKind::Paragraph => last,
        _ => list,
    }
}

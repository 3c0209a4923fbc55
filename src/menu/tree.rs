use super::MenuRow;
use serde_derive::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub menu: MenuRow,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

/// Folds a flat menu list into trees.
///
/// Rows whose parent is not part of the list become roots; siblings keep input order.
/// Rows caught in a parent cycle are never reached from a root, so the first of them in
/// input order is promoted to a root and carries the rest of its cycle.
pub fn build_menu_tree(menus: Vec<MenuRow>) -> Vec<MenuNode> {
    let ids: HashSet<i64> = menus.iter().map(|menu: &MenuRow| menu.menu_id).collect();
    let links: Vec<(i64, i64)> = menus
        .iter()
        .map(|menu: &MenuRow| (menu.parent_id, menu.menu_id))
        .collect();

    let mut roots: Vec<MenuRow> = Vec::new();
    let mut children: HashMap<i64, Vec<MenuRow>> = HashMap::new();

    for menu in menus {
        if ids.contains(&menu.parent_id) && menu.parent_id != menu.menu_id {
            children.entry(menu.parent_id).or_default().push(menu);
        } else {
            roots.push(menu);
        }
    }

    let mut nodes: Vec<MenuNode> = roots
        .into_iter()
        .map(|menu: MenuRow| attach_children(menu, &mut children))
        .collect();

    for (parent_id, menu_id) in links {
        let stranded = children.get_mut(&parent_id).and_then(|rows: &mut Vec<MenuRow>| {
            rows.iter()
                .position(|row: &MenuRow| row.menu_id == menu_id)
                .map(|index: usize| rows.remove(index))
        });

        if let Some(menu) = stranded {
            tracing::warn!(menu_id, parent_id, "menu parent cycle, promoting to root");
            nodes.push(attach_children(menu, &mut children));
        }
    }

    nodes
}

fn attach_children(menu: MenuRow, children: &mut HashMap<i64, Vec<MenuRow>>) -> MenuNode {
    let direct = children.remove(&menu.menu_id).unwrap_or_default();

    MenuNode {
        menu,
        children: direct
            .into_iter()
            .map(|child: MenuRow| attach_children(child, children))
            .collect(),
    }
}

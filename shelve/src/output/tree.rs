//! Simulated destination tree rendering.

use std::collections::BTreeMap;
use std::path::Path;

use crate::operations::OrganizePlan;

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

impl Node {
    fn insert(&mut self, components: &[String]) {
        if let Some((first, rest)) = components.split_first() {
            self.children.entry(first.clone()).or_default().insert(rest);
        }
    }
}

/// Renders the destination tree a plan would produce.
///
/// The first line is the output root; every planned destination appears
/// underneath it with box-drawing connectors, sorted by name.
/// Destinations outside the root are rendered with their full path.
///
/// # Examples
///
/// ```
/// use shelve::operations::{LinkType, OrganizePlan, PlannedOperation};
/// use shelve::output::render_tree;
/// use std::path::{Path, PathBuf};
///
/// let plan = OrganizePlan::new("one file").add_operation(PlannedOperation {
///     source: PathBuf::from("/in/a.txt"),
///     destination: PathBuf::from("/out/2024/January/a.txt"),
///     link_type: LinkType::Hardlink,
///     metadata: None,
/// });
///
/// let rendered = render_tree(&plan, Path::new("/out"));
/// assert_eq!(rendered, "/out\n└── 2024\n    └── January\n        └── a.txt");
/// ```
#[must_use]
pub fn render_tree(plan: &OrganizePlan, output_root: &Path) -> String {
    let mut root = Node::default();
    for operation in plan.operations() {
        let rel = operation
            .destination
            .strip_prefix(output_root)
            .unwrap_or(&operation.destination);
        let components: Vec<String> = rel
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect();
        root.insert(&components);
    }

    let mut lines = vec![output_root.display().to_string()];
    render_children(&root, "", &mut lines);
    lines.join("\n")
}

fn render_children(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (index, (name, child)) in node.children.iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));

        let child_prefix = if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(child, &child_prefix, lines);
    }
}

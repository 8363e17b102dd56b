// Static hierarchy of destination and booking categories for read-only browsing
use crate::error::BookingError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct CategoryNode {
    label: String,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
    descriptions: HashMap<String, String>,
}

impl CategoryTree {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![CategoryNode {
                label: root_label.into(),
                children: Vec::new(),
            }],
            descriptions: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
    ) -> Result<NodeId, BookingError> {
        if parent.0 >= self.nodes.len() {
            return Err(BookingError::UnknownNode(parent.0));
        }
        Ok(self.push_child(parent, label.into()))
    }

    // Caller guarantees the parent exists
    fn push_child(&mut self, parent: NodeId, label: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(CategoryNode {
            label,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_description(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.descriptions.insert(label.into(), text.into());
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.label.as_str())
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    // First node in pre-order carrying the label
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.walk()
            .find(|(id, _)| self.nodes[id.0].label == label)
            .map(|(id, _)| id)
    }

    // Pre-order (label, depth) pairs, root at depth 0
    pub fn depth_first_labels(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.walk()
            .map(move |(id, depth)| (self.nodes[id.0].label.as_str(), depth))
    }

    pub fn describe(&self, label: &str) -> String {
        self.descriptions
            .get(label)
            .cloned()
            .unwrap_or_else(|| format!("Category: {}", label))
    }

    // "Mountains: Mount Muhabura, Mount Sabyinyo." style listing of direct children
    pub fn summarize_children(&self, label: &str) -> Option<String> {
        let node = self.find(label)?;
        let names: Vec<&str> = self
            .children(node)
            .iter()
            .filter_map(|child| self.label(*child))
            .collect();
        Some(format!("{}: {}.", label, names.join(", ")))
    }

    fn walk(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![(self.root(), 0)],
        }
    }

    // The destination catalogue shown by the browsing form
    pub fn destinations() -> Self {
        let mut tree = CategoryTree::new("Tourism & Travel System");
        let root = tree.root();

        let add = |tree: &mut CategoryTree, parent: NodeId, label: &str| {
            tree.push_child(parent, label.to_string())
        };

        let destinations = add(&mut tree, root, "Destinations");
        let bookings = add(&mut tree, root, "Bookings");

        let beach = add(&mut tree, destinations, "Beach");
        for place in ["Kivu Beach Rubavu", "Kivu Beach Rusizi"] {
            add(&mut tree, beach, place);
        }

        let mountains = add(&mut tree, destinations, "Mountains");
        for peak in MOUNTAINS {
            add(&mut tree, mountains, peak);
        }

        add(&mut tree, bookings, "Pending for UWASE, IMANIRAFASHA");
        let completed = add(&mut tree, bookings, "Completed Bookings");
        add(&mut tree, completed, "Marie Merci");

        for (label, text) in DESTINATION_DETAILS {
            tree.set_description(*label, *text);
        }
        tree
    }
}

const MOUNTAINS: [&str; 5] = [
    "Mount Muhabura",
    "Mount Sabyinyo",
    "Mount Karisimbi",
    "Mount Bisoke",
    "Mount Gahinga",
];

const DESTINATION_DETAILS: &[(&str, &str)] = &[
    ("Kivu Beach Rubavu", "Beach: Kivu Beach Rubavu - Relax by Lake Kivu in Rubavu."),
    ("Kivu Beach Rusizi", "Beach: Kivu Beach Rusizi - Scenic views of Lake Kivu in Rusizi."),
    ("Mount Muhabura", "Mountain: Mount Muhabura - A stunning volcano to explore."),
    ("Mount Sabyinyo", "Mountain: Mount Sabyinyo - A volcanic ridge with breathtaking views."),
    ("Mount Karisimbi", "Mountain: Mount Karisimbi - A majestic peak to conquer."),
    (
        "Mount Bisoke",
        "Mountain: Mount Bisoke - An active volcano in Rwanda's Volcanoes National Park.",
    ),
    (
        "Mount Gahinga",
        "Mountain: Mount Gahinga - Known for its hiking trails and gorilla tracking.",
    ),
    ("Beach", "Beach destinations: Kivu Beach Rubavu, Kivu Beach Rusizi."),
    (
        "Mountains",
        "Mountain destinations: Mount Muhabura, Mount Sabyinyo, Mount Karisimbi, Mount Bisoke, Mount Gahinga.",
    ),
    (
        "Pending for UWASE, IMANIRAFASHA",
        "Pending for UWASE, IMANIRAFASHA: Awaiting confirmation.",
    ),
    ("Marie Merci", "Completed Booking: Marie Merci - Booking completed successfully."),
];

struct PreOrder<'a> {
    tree: &'a CategoryTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        // reversed so the first child is visited first
        let children = &self.tree.nodes[id.0].children;
        self.stack
            .extend(children.iter().rev().map(|child| (*child, depth + 1)));
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_leaf() {
        let tree = CategoryTree::destinations();
        assert_eq!(
            tree.describe("Mount Bisoke"),
            "Mountain: Mount Bisoke - An active volcano in Rwanda's Volcanoes National Park."
        );
    }

    #[test]
    fn test_describe_falls_back_to_category() {
        let tree = CategoryTree::destinations();
        assert_eq!(tree.describe("Unknown Peak"), "Category: Unknown Peak");
        // interior labels without an entry use the same fallback
        assert_eq!(tree.describe("Destinations"), "Category: Destinations");
        assert_eq!(tree.describe("Completed Bookings"), "Category: Completed Bookings");
    }

    #[test]
    fn test_depth_first_labels_is_pre_order() {
        let tree = CategoryTree::destinations();
        let labels: Vec<(&str, usize)> = tree.depth_first_labels().collect();

        assert_eq!(labels.len(), tree.len());
        assert_eq!(
            &labels[..5],
            &[
                ("Tourism & Travel System", 0),
                ("Destinations", 1),
                ("Beach", 2),
                ("Kivu Beach Rubavu", 3),
                ("Kivu Beach Rusizi", 3),
            ]
        );
        assert_eq!(labels[5], ("Mountains", 2));
        assert_eq!(labels.last(), Some(&("Marie Merci", 3)));

        // restartable
        assert_eq!(tree.depth_first_labels().count(), labels.len());
    }

    #[test]
    fn test_add_child_keeps_order_and_returns_handle() {
        let mut tree = CategoryTree::new("root");
        let a = tree.add_child(tree.root(), "a").unwrap();
        let b = tree.add_child(tree.root(), "b").unwrap();
        let a1 = tree.add_child(a, "a1").unwrap();

        assert_eq!(tree.children(tree.root()), &[a, b]);
        assert_eq!(tree.children(a), &[a1]);
        assert_eq!(tree.label(a1), Some("a1"));
        assert_eq!(tree.find("b"), Some(b));
    }

    #[test]
    fn test_add_child_to_unknown_parent() {
        let mut tree = CategoryTree::new("root");
        let result = tree.add_child(NodeId(7), "orphan");
        assert_eq!(result, Err(BookingError::UnknownNode(7)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_summarize_children() {
        let tree = CategoryTree::destinations();
        assert_eq!(
            tree.summarize_children("Mountains").as_deref(),
            Some("Mountains: Mount Muhabura, Mount Sabyinyo, Mount Karisimbi, Mount Bisoke, Mount Gahinga.")
        );
        assert_eq!(tree.summarize_children("Nowhere"), None);
    }
}

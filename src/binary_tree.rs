// Insert-only binary search tree over bookings.
//
// Keys go left when strictly less than the node and right otherwise, so equal
// keys keep their insertion order in an in-order walk. No balancing.
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeNodeId(usize);

#[derive(Debug, Clone)]
struct TreeNode<K> {
    key: K,
    left: Option<TreeNodeId>,
    right: Option<TreeNodeId>,
}

#[derive(Debug, Clone)]
pub struct KeyedBinaryTree<K> {
    nodes: Vec<TreeNode<K>>,
    root: Option<TreeNodeId>,
}

impl<K> Default for KeyedBinaryTree<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<K: Ord> KeyedBinaryTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K) -> TreeNodeId {
        let id = TreeNodeId(self.nodes.len());

        let Some(mut current) = self.root else {
            self.nodes.push(TreeNode {
                key,
                left: None,
                right: None,
            });
            self.root = Some(id);
            debug!("inserted booking as tree root");
            return id;
        };

        let mut depth = 1;
        loop {
            let node = &mut self.nodes[current.0];
            let child = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            match *child {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => {
                    *child = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(TreeNode {
            key,
            left: None,
            right: None,
        });
        debug!(depth, nodes = self.nodes.len(), "inserted booking into tree");
        id
    }
}

impl<K> KeyedBinaryTree<K> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<TreeNodeId> {
        self.root
    }

    pub fn key(&self, node: TreeNodeId) -> Option<&K> {
        self.nodes.get(node.0).map(|n| &n.key)
    }

    pub fn left(&self, node: TreeNodeId) -> Option<TreeNodeId> {
        self.nodes.get(node.0).and_then(|n| n.left)
    }

    pub fn right(&self, node: TreeNodeId) -> Option<TreeNodeId> {
        self.nodes.get(node.0).and_then(|n| n.right)
    }

    // Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(TreeNodeId, usize)> =
            self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = &self.nodes[id.0];
            pending.extend(node.left.map(|l| (l, depth + 1)));
            pending.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }

    // Ascending key order
    pub fn iter(&self) -> InOrder<'_, K> {
        let mut iter = InOrder {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    pub fn in_order(&self) -> Vec<&K> {
        self.iter().collect()
    }
}

pub struct InOrder<'a, K> {
    tree: &'a KeyedBinaryTree<K>,
    stack: Vec<TreeNodeId>,
}

impl<'a, K> InOrder<'a, K> {
    fn push_left_spine(&mut self, mut next: Option<TreeNodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.tree.nodes[id.0].left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let id = self.stack.pop()?;
        let node = &tree.nodes[id.0];
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

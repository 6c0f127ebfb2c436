//! # Rooted Tree
//!
//! An arbitrary-arity rooted tree stored in an arena. Every node owns the list
//! of its children's handles and keeps a plain (non-owning) handle back to its
//! parent, so there are no reference cycles and upward navigation is O(1).
//!
//! Nodes are addressed by value: `insert`, `delete` and `search` locate the
//! first node (in preorder) holding an equal value. Because "no such value" is
//! an ordinary outcome, these operations report it with a `bool` instead of an
//! error.
//!
//! All traversals walk an explicit stack, so deep trees do not exhaust the
//! call stack.
//!
//! ## Example
//! ```rust
//! use algos_select::structures::Tree;
//!
//! let mut tree = Tree::with_root(1);
//! tree.insert(&1, 2);
//! tree.insert(&1, 3);
//! tree.insert(&2, 4);
//! tree.insert(&2, 5);
//!
//! assert_eq!(tree.preorder(), vec![&1, &2, &4, &5, &3]);
//! assert_eq!(tree.postorder(), vec![&4, &5, &2, &3, &1]);
//! assert_eq!(tree.height(), 2);
//! ```

/// Handle to a node of a [`Tree`]. Handles of deleted nodes may be reused by
/// later insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<Option<TreeNode<T>>>,
    /// Vacant slots in `nodes`, reused before the arena grows.
    free: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a tree holding only `value` as its root.
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.root = Some(tree.alloc(value, None));
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&T> {
        self.root.and_then(|id| self.get(id))
    }

    /// Value stored at `id`, if that node is still in the tree.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Nodes in preorder: a node, then each child subtree left to right.
    pub fn preorder(&self) -> Vec<&T> {
        self.preorder_ids()
            .into_iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Nodes in postorder: each child subtree left to right, then the node.
    pub fn postorder(&self) -> Vec<&T> {
        let mut order = Vec::with_capacity(self.len);
        let mut stack: Vec<(NodeId, bool)> = self.root.map(|id| (id, false)).into_iter().collect();
        while let Some((id, expanded)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if expanded {
                order.push(&node.value);
            } else {
                stack.push((id, true));
                stack.extend(node.children.iter().rev().map(|&child| (child, false)));
            }
        }
        order
    }

    /// Number of edges on the longest root-to-leaf path; `0` for a lone root
    /// and `-1` for an empty tree.
    pub fn height(&self) -> isize {
        let Some(root) = self.root else {
            return -1;
        };
        let mut height = 0usize;
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().map(|&child| (child, depth + 1)));
            }
        }
        height as isize
    }

    fn preorder_ids(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                order.push(id);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<T>> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.parent = parent;
        }
    }

    fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let node = TreeNode {
            value,
            parent,
            children: Vec::new(),
        };
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<TreeNode<T>> {
        let node = self.nodes.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node)
    }
}

impl<T: PartialEq> Tree<T> {
    /// Handle of the first node, in preorder, holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if node.value == *value {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    pub fn search(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Attaches `value` as the last child of the node holding `parent`.
    ///
    /// On an empty tree `value` becomes the root regardless of `parent`.
    /// Returns `false`, leaving the tree unchanged, if `parent` is absent.
    pub fn insert(&mut self, parent: &T, value: T) -> bool {
        if self.root.is_none() {
            self.root = Some(self.alloc(value, None));
            return true;
        }
        let Some(parent_id) = self.find(parent) else {
            return false;
        };
        let child = self.alloc(value, Some(parent_id));
        match self.node_mut(parent_id) {
            Some(node) => {
                node.children.push(child);
                true
            }
            None => {
                self.release(child);
                false
            }
        }
    }

    /// Removes the node holding `value`, keeping its descendants.
    ///
    /// The removed node's children are appended, in order, to its parent's
    /// children. When the root is removed its first child becomes the new
    /// root and adopts the remaining children; a childless root leaves the
    /// tree empty. Returns `false` if `value` is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(id) = self.find(value) else {
            return false;
        };
        let Some(node) = self.release(id) else {
            return false;
        };

        match node.parent {
            Some(parent) => {
                for &child in &node.children {
                    self.set_parent(child, Some(parent));
                }
                if let Some(parent) = self.node_mut(parent) {
                    parent.children.retain(|&child| child != id);
                    parent.children.extend(node.children);
                }
            }
            None => {
                let mut orphans = node.children.into_iter();
                self.root = orphans.next();
                if let Some(new_root) = self.root {
                    self.set_parent(new_root, None);
                    let orphans: Vec<NodeId> = orphans.collect();
                    for &child in &orphans {
                        self.set_parent(child, Some(new_root));
                    }
                    if let Some(root) = self.node_mut(new_root) {
                        root.children.extend(orphans);
                    }
                }
            }
        }
        true
    }

    /// Value of the parent of the first node holding `value`.
    pub fn parent(&self, value: &T) -> Option<&T> {
        let id = self.find(value)?;
        let parent = self.node(id)?.parent?;
        self.get(parent)
    }

    /// Values of the children of the first node holding `value`, in order.
    pub fn children(&self, value: &T) -> Vec<&T> {
        self.find(value)
            .and_then(|id| self.node(id))
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|&child| self.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }
}

use crate::constants::ROOT_NAME;
use std::fmt::{self, Display};

/// A node of an induced classification tree.
///
/// Branch nodes carry the attribute tested to reach them (`name`) and the
/// attribute value on the incoming edge (`value`). Class leaves carry the
/// class column header and the predicted class value. A node owns its
/// children; their order is the order in which the attribute values were
/// first seen in the training rows.
///
/// Branches grown by the builder also record the index of the tested
/// column in the table they split, since header names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) column: Option<usize>,
    pub(crate) children: Vec<Tree>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(ROOT_NAME)
    }
}

impl Tree {
    /// Create a childless node with an empty value.
    pub fn new(name: &str) -> Self {
        Tree {
            name: name.to_string(),
            value: String::new(),
            column: None,
            children: Vec::new(),
        }
    }

    /// Create a node with an empty value owning `children`.
    pub fn with_children(name: &str, children: Vec<Tree>) -> Self {
        let mut tree = Tree::new(name);
        for child in children {
            tree.add_child(child);
        }
        tree
    }

    /// Node for the edge `name = value`.
    pub fn branch(name: &str, value: &str) -> Self {
        Tree {
            name: name.to_string(),
            value: value.to_string(),
            column: None,
            children: Vec::new(),
        }
    }

    /// Node for the edge `name = value`, where `name` is column `column`
    /// of the table being split. Columns split above this node are
    /// already removed from that table.
    pub fn branch_at(name: &str, column: usize, value: &str) -> Self {
        Tree {
            column: Some(column),
            ..Tree::branch(name, value)
        }
    }

    /// Class prediction `class_header = class_value`.
    pub fn leaf(class_header: &str, class_value: &str) -> Self {
        Tree::branch(class_header, class_value)
    }

    pub fn add_child(&mut self, node: Tree) {
        self.children.push(node);
    }

    /// A node is pure when it has no children.
    pub fn is_pure(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node is a prediction for `class_header`.
    pub fn is_class_leaf(&self, class_header: &str) -> bool {
        self.is_pure() && self.name == class_header
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Column index recorded by [`Tree::branch_at`], if any.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Pre-order traversal, yielding each node with its depth below `self`.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![(0, self)] }
    }

    pub fn n_nodes(&self) -> usize {
        self.iter().count()
    }

    pub fn n_leaves(&self) -> usize {
        self.iter().filter(|(_, n)| n.is_pure()).count()
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        self.iter().map(|(d, _)| d).max().unwrap_or(0)
    }

    /// Predict the class of `row`, whose cells are named by `headers`.
    ///
    /// The last header names the class column. Every tested column is
    /// dropped from the walk once used, the way the builder partitions the
    /// table. Returns `None` when the row carries a value never seen while
    /// growing the tree, or when the path ends at a node that could not be
    /// split.
    pub fn classify<'a, H, C>(&'a self, headers: &[H], row: &[C]) -> Option<&'a str>
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let class_header = headers.last()?.as_ref();
        // Indices into `headers` and `row` of the columns not tested yet.
        let mut remaining: Vec<usize> = (0..headers.len()).collect();
        let mut node = self;
        loop {
            if node.is_pure() {
                return node.is_class_leaf(class_header).then_some(node.value.as_str());
            }
            let next = node.children.iter().find(|child| {
                child.is_class_leaf(class_header)
                    || child
                        .remaining_position(headers, &remaining)
                        .and_then(|p| row.get(remaining[p]))
                        .is_some_and(|cell| cell.as_ref() == child.value)
            })?;
            if !next.is_class_leaf(class_header) {
                if let Some(p) = next.remaining_position(headers, &remaining) {
                    remaining.remove(p);
                }
            }
            node = next;
        }
    }

    /// Position in `remaining` of the column this branch tests.
    fn remaining_position<H: AsRef<str>>(&self, headers: &[H], remaining: &[usize]) -> Option<usize> {
        match self.column {
            Some(col) => (col < remaining.len()).then_some(col),
            None => remaining
                .iter()
                .position(|&i| headers.get(i).is_some_and(|h| h.as_ref() == self.name)),
        }
    }
}

/// Pre-order iterator over a [`Tree`].
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Tree)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Tree);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (usize, &'a Tree);
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Tree {
    /// Indented structural dump, one `name - value` line per node.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_nested(f, "", true)
    }
}

impl Tree {
    fn fmt_nested(&self, f: &mut fmt::Formatter, prefix: &str, last: bool) -> fmt::Result {
        let marker = if last { "`- " } else { "|- " };
        writeln!(f, "{}{}{} - {}", prefix, marker, self.name, self.value)?;
        let prefix = format!("{}{}", prefix, if last { "   " } else { "|  " });
        let n_children = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.fmt_nested(f, &prefix, i == n_children - 1)?;
        }
        Ok(())
    }
}

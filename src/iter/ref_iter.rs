use crate::node::Node;

/// An in-order walk of a subtree, yielding [`Node`] instances ordered by their
/// interval start bound.
#[derive(Debug)]
pub(crate) struct RefIter<'a, R> {
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> RefIter<'a, R> {
    pub(crate) fn new(root: &'a Node<R>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<R>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, R> Iterator for RefIter<'a, R> {
    type Item = &'a Node<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}

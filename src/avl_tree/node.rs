use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub key: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    // recomputes the cached height from the children; must run before reading the balance
    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> isize {
        (tree::height(&self.left) as isize) - (tree::height(&self.right) as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_leaf() {
        let node = Node::new(1);
        assert_eq!(node.height, 1);
        assert_eq!(node.balance(), 0);
    }

    #[test]
    fn test_update() {
        let mut node = Node::new(2);
        node.left = Some(Box::new(Node::new(1)));
        node.update();
        assert_eq!(node.height, 2);
        assert_eq!(node.balance(), 1);

        let mut right = Node::new(3);
        right.right = Some(Box::new(Node::new(4)));
        right.update();
        node.right = Some(Box::new(right));
        node.update();
        assert_eq!(node.height, 3);
        assert_eq!(node.balance(), -1);
    }
}

use crate::avl_tree::node::Node;
use log::{debug, trace};
use std::cmp::{self, Ordering};
use std::fmt::Display;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// The relative order in which a traversal visits a node and its two subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitingOrder {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at a subtree of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at a subtree of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `child_dir` is how the inserted key compared against the key of the child we descended into.
fn fix_after_insertion<T>(mut node: Box<Node<T>>, child_dir: Ordering) -> Box<Node<T>> {
    let balance = node.balance();

    if balance > 1 {
        match child_dir {
            Ordering::Less => return rotate_right(node),
            Ordering::Greater => {
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            },
            Ordering::Equal => {},
        }
    } else if balance < -1 {
        match child_dir {
            Ordering::Greater => return rotate_left(node),
            Ordering::Less => {
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            },
            Ordering::Equal => {},
        }
    }

    node
}

fn fix_after_deletion<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let balance = node.balance();

    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    } else if balance < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn rebalance_after_deletion<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();
    *tree = Some(fix_after_deletion(node));
}

// Returns the replaced key and how the key compared at this level.
fn insert_at<T>(tree: &mut Tree<T>, key: T) -> (Option<T>, Ordering)
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return (None, Ordering::Equal);
        },
    };

    let dir = key.cmp(&node.key);
    let (ret, child_dir) = match dir {
        Ordering::Less => insert_at(&mut node.left, key),
        Ordering::Greater => insert_at(&mut node.right, key),
        Ordering::Equal => {
            let Node { key: old_key, left, right, .. } = *node;
            debug!("replacing node holding an equal key");
            node = Box::new(Node {
                key,
                height: 1,
                left,
                right,
            });
            (Some(old_key), Ordering::Equal)
        },
    };

    node.update();
    *tree = Some(fix_after_insertion(node, child_dir));
    (ret, dir)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> Option<T>
where
    T: Ord,
{
    insert_at(tree, key).0
}

// precondition: the tree is non-empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.left.is_some() {
        let ret = remove_min(&mut node.left);
        *tree = Some(node);
        rebalance_after_deletion(tree);
        ret
    } else {
        let Node { key, right, .. } = *node;
        *tree = right;
        key
    }
}

pub fn delete<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = tree.take()?;

    let ret = match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                let successor = remove_min(&mut node.right);
                debug!("removed node with two children, promoted its in-order successor");
                Some(mem::replace(&mut node.key, successor))
            } else {
                let Node { key: removed, left, right, .. } = *node;
                debug!("removed node with at most one child");
                *tree = left.or(right);
                return Some(removed);
            }
        },
    };

    *tree = Some(node);
    rebalance_after_deletion(tree);
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: PartialEq,
{
    match tree {
        None => false,
        Some(ref node) => {
            node.key == *key || contains(&node.left, key) || contains(&node.right, key)
        },
    }
}

pub fn element_depth<T>(tree: &Tree<T>, key: &T, depth: usize) -> Option<usize>
where
    T: PartialEq,
{
    tree.as_ref().and_then(|node| {
        if node.key == *key {
            Some(depth)
        } else {
            element_depth(&node.left, key, depth + 1)
                .or_else(|| element_depth(&node.right, key, depth + 1))
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn size<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => 1 + size(&node.left) + size(&node.right),
    }
}

pub fn visit<T, F>(tree: &Tree<T>, order: VisitingOrder, visitor: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        if order == VisitingOrder::PreOrder {
            visitor(&node.key);
        }
        visit(&node.left, order, visitor);
        if order == VisitingOrder::InOrder {
            visitor(&node.key);
        }
        visit(&node.right, order, visitor);
        if order == VisitingOrder::PostOrder {
            visitor(&node.key);
        }
    }
}

pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
        },
    }
}

// checks order, balance and cached heights of every node against the open interval (lower, upper)
pub fn is_valid<'a, T>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> bool
where
    T: Ord,
{
    match tree {
        None => true,
        Some(ref node) => {
            lower.map_or(true, |lower| *lower < node.key)
                && upper.map_or(true, |upper| node.key < *upper)
                && node.height == cmp::max(height(&node.left), height(&node.right)) + 1
                && node.balance().abs() <= 1
                && is_valid(&node.left, lower, Some(&node.key))
                && is_valid(&node.right, Some(&node.key), upper)
        },
    }
}

// number of spaces placed before a slot that sits `n` levels above the bottom of the graph
fn spaces_count(n: usize) -> usize {
    (1 << n) - 1
}

fn graph_at<T>(tree: &Tree<T>, root_height: usize, depth: usize, lines: &mut [Option<String>])
where
    T: Display,
{
    let padding = " ".repeat(spaces_count(root_height - depth));
    let label = match tree {
        Some(ref node) => node.key.to_string(),
        None => String::from(" "),
    };

    match lines[depth] {
        None => lines[depth] = Some(format!("{}{}", padding, label)),
        Some(ref mut line) => {
            line.push_str(&padding);
            line.push(' ');
            line.push_str(&padding);
            line.push_str(&label);
        },
    }

    if let Some(ref node) = tree {
        graph_at(&node.left, root_height, depth + 1, lines);
        graph_at(&node.right, root_height, depth + 1, lines);
    }
}

pub fn graph<T>(tree: &Tree<T>) -> String
where
    T: Display,
{
    let root_height = height(tree);
    if root_height == 0 {
        return String::new();
    }

    let mut lines = vec![None; root_height + 1];
    graph_at(tree, root_height, 0, &mut lines);
    lines
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key);
        }
        tree
    }

    fn root_key(tree: &Tree<u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.key)
    }

    fn collect(tree: &Tree<u32>, order: VisitingOrder) -> Vec<u32> {
        let mut keys = Vec::new();
        visit(tree, order, &mut |key: &u32| keys.push(*key));
        keys
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(height(&tree), 0);
        assert_eq!(balance_factor(&tree), 0);
    }

    #[test]
    fn test_rotate_right() {
        let tree = build(&[2, 1]);
        let rotated = rotate_right(tree.unwrap());
        assert_eq!(rotated.key, 1);
        assert_eq!(rotated.height, 2);
        assert_eq!(rotated.right.as_ref().map(|node| node.height), Some(1));
    }

    #[test]
    fn test_rotate_left() {
        let tree = build(&[1, 2]);
        let rotated = rotate_left(tree.unwrap());
        assert_eq!(rotated.key, 2);
        assert_eq!(rotated.height, 2);
        assert_eq!(rotated.left.as_ref().map(|node| node.height), Some(1));
    }

    #[test]
    fn test_insert_left_left() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_key(&tree), Some(2));
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_insert_right_right() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_key(&tree), Some(2));
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_insert_left_right() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_insert_right_left() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_insert_replace() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(insert(&mut tree, 2), Some(2));
        assert_eq!(size(&tree), 3);
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_delete_right_right() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert_eq!(delete(&mut tree, &1), Some(1));
        assert_eq!(root_key(&tree), Some(3));
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_delete_right_left() {
        let mut tree = build(&[2, 1, 4, 3]);
        assert_eq!(delete(&mut tree, &1), Some(1));
        assert_eq!(root_key(&tree), Some(3));
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_delete_two_children() {
        let mut tree = build(&[10, 6, 20, 3, 4]);
        assert_eq!(collect(&tree, VisitingOrder::PreOrder), vec![10, 4, 3, 6, 20]);

        assert_eq!(delete(&mut tree, &10), Some(10));
        assert_eq!(root_key(&tree), Some(4));
        assert_eq!(collect(&tree, VisitingOrder::PreOrder), vec![4, 3, 20, 6]);
        assert!(is_valid(&tree, None, None));
    }

    #[test]
    fn test_delete_rebalances_several_ancestors() {
        // a minimal avl tree of height 5; removing its shallowest leaf unbalances two levels
        let mut tree = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        assert_eq!(height(&tree), 5);
        assert!(is_valid(&tree, None, None));

        assert_eq!(delete(&mut tree, &12), Some(12));
        assert!(is_valid(&tree, None, None));
        assert_eq!(size(&tree), 11);
        assert_eq!(collect(&tree, VisitingOrder::InOrder), (1..12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = build(&[1, 2]);
        assert_eq!(delete(&mut tree, &3), None);
        assert_eq!(size(&tree), 2);

        let mut empty: Tree<u32> = None;
        assert_eq!(delete(&mut empty, &3), None);
    }

    #[test]
    fn test_element_depth() {
        let tree = build(&[10, 6, 20, 3, 4]);
        assert_eq!(element_depth(&tree, &10, 0), Some(0));
        assert_eq!(element_depth(&tree, &4, 0), Some(1));
        assert_eq!(element_depth(&tree, &20, 0), Some(1));
        assert_eq!(element_depth(&tree, &6, 0), Some(2));
        assert_eq!(element_depth(&tree, &99, 0), None);
    }

    #[test]
    fn test_visit_orders() {
        let tree = build(&[10, 6, 20, 3, 4]);
        assert_eq!(collect(&tree, VisitingOrder::InOrder), vec![3, 4, 6, 10, 20]);
        assert_eq!(collect(&tree, VisitingOrder::PreOrder), vec![10, 4, 3, 6, 20]);
        assert_eq!(collect(&tree, VisitingOrder::PostOrder), vec![3, 6, 4, 20, 10]);
    }

    #[test]
    fn test_graph() {
        let tree = build(&[2, 1, 3]);
        let graph = graph(&tree);
        let lines = graph.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   2");
        assert_eq!(lines[1], " 1   3");
        assert_eq!(lines[2], "       ");
    }

    #[test]
    fn test_graph_absent_children() {
        // 10(4(3, 6), 20): 20 has no children, so the bottom row only holds slots under 3 and 6
        let tree = build(&[10, 6, 20, 3, 4]);
        let graph = graph(&tree);
        let lines = graph.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "       10");
        assert_eq!(lines[1], "   4       20");
        assert_eq!(lines[2], " 3   6        ");
        assert_eq!(lines[3], "       ");
    }

    #[test]
    fn test_graph_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(graph(&tree), "");
    }
}

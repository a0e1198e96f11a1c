use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, VisitingOrder};
use crate::avl_tree::{Error, Result};
use std::fmt::{self, Debug, Display};
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// Membership and depth queries search the whole tree using `PartialEq` rather than descending
/// by the ordering, so they stay correct for key types whose equality is finer than their order.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.size(), 2);
///
/// assert_eq!(set.lower(), Ok(&0));
/// assert_eq!(set.upper(), Ok(&3));
///
/// assert_eq!(set.delete(&0), Some(0));
/// assert_eq!(set.delete(&1), None);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None }
    }

    /// Inserts a key into the set. If an equal key already exists in the set, its node is
    /// replaced by one holding the new key and the old key is returned.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T> {
        tree::insert(&mut self.tree, key)
    }

    /// Deletes a key from the set. Returns the removed key, or `None` if the key was not in the
    /// set, in which case the set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.delete(&1), Some(1));
    /// assert_eq!(set.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        tree::delete(&mut self.tree, key)
    }

    /// Checks if a key exists in the set. Every node is compared for equality, so this runs in
    /// linear time.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(1);
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns the number of keys in the set. Equivalent to `size`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the height of the tree. An empty tree has height 0 and a single key has height 1.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (1..8).collect();
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the smallest key of the set, or `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.lower(), Err(Error::EmptyTree));
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.lower(), Ok(&1));
    /// ```
    pub fn lower(&self) -> Result<&T> {
        tree::min(&self.tree).ok_or(Error::EmptyTree)
    }

    /// Returns the largest key of the set, or `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.upper(), Err(Error::EmptyTree));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.upper(), Ok(&3));
    /// ```
    pub fn upper(&self) -> Result<&T> {
        tree::max(&self.tree).ok_or(Error::EmptyTree)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the zero-based depth of the first node holding a key equal to `key`, or `None`
    /// if there is no such node. Nodes are checked before their subtrees and left subtrees before
    /// right subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(set.element_depth(&2), Some(0));
    /// assert_eq!(set.element_depth(&3), Some(1));
    /// assert_eq!(set.element_depth(&4), None);
    /// ```
    pub fn element_depth(&self, key: &T) -> Option<usize> {
        tree::element_depth(&self.tree, key, 0)
    }

    /// Calls `visitor` once for every key of the set in the given order. The visitor cannot
    /// mutate the set while the traversal runs.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, VisitingOrder};
    ///
    /// let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut keys = Vec::new();
    /// set.visit(VisitingOrder::PreOrder, |key| keys.push(*key));
    /// assert_eq!(keys, vec![2, 1, 3]);
    ///
    /// keys.clear();
    /// set.visit(VisitingOrder::PostOrder, |key| keys.push(*key));
    /// assert_eq!(keys, vec![1, 3, 2]);
    /// ```
    pub fn visit<F>(&self, order: VisitingOrder, mut visitor: F)
    where
        F: FnMut(&T),
    {
        tree::visit(&self.tree, order, &mut visitor);
    }

    /// Returns `true` if the balance factor of every node is -1, 0 or 1.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..100).collect();
    /// assert!(set.is_avl_balanced());
    /// ```
    pub fn is_avl_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Returns `true` if the tree is balanced, ordered, and every cached height is correct.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..100).rev().collect();
    /// assert!(set.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        tree::is_valid(&self.tree, None, None)
    }

    /// Renders the shape of the tree as text, one line per level. Meant for human inspection
    /// only.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert!(set.graph().starts_with("   2\n 1   3\n"));
    /// ```
    pub fn graph(&self) -> String
    where
        T: Display,
    {
        tree::graph(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> Debug for AvlSet<T>
where
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

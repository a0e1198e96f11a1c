//! An ordered set backed by an AVL tree.

pub mod avl_tree;

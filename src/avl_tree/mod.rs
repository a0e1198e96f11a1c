//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};
pub use self::tree::VisitingOrder;

use std::error;
use std::fmt;
use std::result;

/// Errors returned by queries whose precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The query needs at least one key, but the tree is empty.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyTree => write!(f, "operation requires a non-empty tree"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

mod node;
mod set;

pub mod list_set {
    //! An ordered set based on a sorted singly-linked list.
    pub use super::set::*;
}

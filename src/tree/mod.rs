//! Recursive node structure and main API.

mod insert;
mod iter;
mod node;
mod remove;
mod search;
mod set;

pub(crate) use node::Node;

pub use iter::Iter;
pub use set::VebSet;

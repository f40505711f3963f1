pub mod document;
pub mod html;
pub mod node;

pub use document::{Document, NodeId, Selector};
pub use node::{Element, Node, el};

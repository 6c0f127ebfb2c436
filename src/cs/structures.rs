pub mod dynamic_array;
pub mod linked_list;
pub mod matrix;
pub mod queue;
pub mod stack;
pub mod tree;

pub use dynamic_array::DynamicArray;
pub use linked_list::LinkedList;
pub use matrix::Matrix;
pub use queue::Queue;
pub use stack::Stack;
pub use tree::{NodeId, Tree};

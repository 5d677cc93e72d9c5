pub mod error;
pub mod list;
pub mod queue;
pub mod stack;
mod node;
mod render;
#[cfg(feature = "serde")]
mod serde_support;

pub use error::{ContainerError, Result};
pub use list::c_list;
pub use list::list as other_list;
pub use queue::queue as other_queue;
pub use stack::stack as other_stack;

pub use other_list::DoublyLinkedList;
pub use other_queue::Queue;
pub use other_stack::Stack;

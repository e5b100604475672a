//! Two linear collections: a linked double-ended queue and a randomized queue
//! whose removals draw uniformly among the elements, plus the clients that
//! exercise them.

#[macro_use]
pub mod macros;
pub mod client;
pub mod deque;
pub mod error;
pub mod logging;
pub mod random;
pub mod randomized_queue;

pub use deque::Deque;
pub use error::{Error, Result};
pub use random::UniformRandom;
pub use randomized_queue::RandomizedQueue;

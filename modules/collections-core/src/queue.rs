//! FIFO containers sharing the [`QueueBackend`] contract.

mod linked_queue;
mod node;
mod queue_backend;
mod queue_error;

pub use linked_queue::LinkedQueue;
pub use queue_backend::QueueBackend;
pub use queue_error::QueueError;

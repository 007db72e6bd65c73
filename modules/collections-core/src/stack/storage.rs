//! Storage layer shared by the stack strategies.

mod vec_stack_storage;

pub use vec_stack_storage::VecStackStorage;

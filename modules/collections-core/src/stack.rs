//! LIFO containers sharing the [`StackBackend`] contract.

mod fixed_stack;
mod growable_stack;
mod growable_stack_config;
mod push_outcome;
mod stack_backend;
mod stack_error;
mod stack_handle;
mod storage;

pub use fixed_stack::FixedStack;
pub use growable_stack::GrowableStack;
pub use growable_stack_config::GrowableStackConfig;
pub use push_outcome::PushOutcome;
pub use stack_backend::StackBackend;
pub use stack_error::StackError;
pub use stack_handle::StackHandle;
pub use storage::VecStackStorage;

/// Capacity a [`GrowableStack`] starts with unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// Tracing target used by stack events.
pub(crate) const TRACE_TARGET: &str = "linea::stack";

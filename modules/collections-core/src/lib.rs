//! Linear containers for `no_std + alloc` environments.
//!
//! The [`stack`] module provides the [`stack::StackBackend`] contract with a growable and a
//! fixed-capacity strategy, and the [`queue`] module provides a FIFO queue over a singly linked
//! chain of nodes.
//!
//! Containers are single-owner: every mutating operation takes `&mut self`, so sharing one across
//! threads requires the caller to wrap it in a lock.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod queue;
pub mod stack;

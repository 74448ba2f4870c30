//! Storage abstraction and implementations for TaskMan.
//!
//! This crate provides a trait-based storage interface with a JSON file
//! reference implementation.

#![warn(missing_docs)]

pub mod json_storage;
pub mod trait_;

pub use json_storage::JsonTaskStore;
pub use trait_::{Result, StorageError, TaskStore};

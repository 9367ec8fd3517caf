//! # Storage Layer
//!
//! This module defines the storage contract the [`CustomerManager`] is written
//! against. The manager never touches a concrete store; it is generic over
//! [`CustomerStore`], so tests substitute a fake store instead of intercepting
//! calls at runtime.
//!
//! ## Unit of Work
//!
//! Every store handle keeps a **change set**: `insert`, `modify` and `remove`
//! only stage a [`Change`]. Nothing is visible through `get_by_id`/`get_all`
//! until `commit` succeeds. A commit is all-or-nothing: either every staged
//! change lands or the table is left exactly as it was and the change set is
//! discarded.
//!
//! ## Concurrency Tokens
//!
//! Each committed row carries a `version`. A staged modification or removal
//! must carry the version that was fetched; if the row has moved on (or is
//! gone) the commit fails with [`CommitError::Conflict`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a single owner of its table. Used by the CLI
//!   and by tests. Test doubles live in `memory::fixtures`.
//! - [`shared::SharedStore`]: cloneable handles over one table, each with its
//!   own change set. Commits are serialised by a mutex.
//!
//! [`CustomerManager`]: crate::manager::CustomerManager

use crate::model::Customer;
use thiserror::Error;

pub mod memory;
pub mod shared;
pub mod table;

pub use table::Table;

/// The only checked failure of the storage contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error("customer {id} was changed or removed by someone else")]
    Conflict { id: String },

    #[error("customer {id} already exists")]
    DuplicateKey { id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A pending change, applied on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Insert(Customer),
    Modify(Customer),
    Remove(Customer),
}

/// Abstract interface for customer storage.
pub trait CustomerStore {
    /// Get a committed customer by key
    fn get_by_id(&self, id: &str) -> Option<Customer>;

    /// List all committed customers, in insertion order
    fn get_all(&self) -> Vec<Customer>;

    /// Stage a new customer
    fn insert(&mut self, customer: Customer);

    /// Stage a modification of a fetched customer
    fn modify(&mut self, customer: Customer);

    /// Stage the removal of a fetched customer
    fn remove(&mut self, customer: &Customer);

    /// Apply every staged change, or none of them
    fn commit(&mut self) -> Result<(), CommitError>;

    /// Drop every staged change without applying it
    fn discard(&mut self);

    fn exists(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }
}

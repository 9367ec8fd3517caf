use super::{Change, CommitError, CustomerStore, Table};
use crate::model::Customer;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A handle onto a table shared between several managers.
///
/// Cloning yields a new handle over the same table with an empty change set,
/// so each caller gets its own unit of work. Commits are serialised by the
/// table lock; stale writes surface as [`CommitError::Conflict`].
#[derive(Debug, Default)]
pub struct SharedStore {
    table: Arc<Mutex<Table>>,
    pending: Vec<Change>,
}

impl SharedStore {
    pub fn new(table: Table) -> Self {
        Self {
            table: Arc::new(Mutex::new(table)),
            pending: Vec::new(),
        }
    }

    /// Snapshot of the committed rows.
    pub fn snapshot(&self) -> Table {
        self.table().clone()
    }

    // `Table::apply` swaps rows in only on success, so a poisoned lock still
    // guards a consistent table.
    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for SharedStore {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            pending: Vec::new(),
        }
    }
}

impl CustomerStore for SharedStore {
    fn get_by_id(&self, id: &str) -> Option<Customer> {
        self.table().get(id).cloned()
    }

    fn get_all(&self) -> Vec<Customer> {
        self.table().rows().to_vec()
    }

    fn insert(&mut self, customer: Customer) {
        self.pending.push(Change::Insert(customer));
    }

    fn modify(&mut self, customer: Customer) {
        self.pending.push(Change::Modify(customer));
    }

    fn remove(&mut self, customer: &Customer) {
        self.pending.push(Change::Remove(customer.clone()));
    }

    fn commit(&mut self) -> Result<(), CommitError> {
        let changes = std::mem::take(&mut self.pending);
        self.table().apply(changes)
    }

    fn discard(&mut self) {
        self.pending.clear();
    }
}

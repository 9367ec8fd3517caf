use super::{Change, CommitError};
use crate::model::Customer;

/// Committed customer rows, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Customer>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by committing `customers` as inserts.
    pub fn seeded(customers: Vec<Customer>) -> Result<Self, CommitError> {
        let mut table = Self::new();
        table.apply(customers.into_iter().map(Change::Insert).collect())?;
        Ok(table)
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.rows.iter().find(|c| c.customer_id == id)
    }

    pub fn rows(&self) -> &[Customer] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply a change set atomically. Changes are replayed in order against a
    /// working copy, which replaces the committed rows only if every change
    /// validates.
    pub fn apply(&mut self, changes: Vec<Change>) -> Result<(), CommitError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut rows = self.rows.clone();
        for change in changes {
            match change {
                Change::Insert(mut customer) => {
                    if rows.iter().any(|c| c.customer_id == customer.customer_id) {
                        return Err(CommitError::DuplicateKey {
                            id: customer.customer_id,
                        });
                    }
                    customer.version = 1;
                    rows.push(customer);
                }
                Change::Modify(mut customer) => {
                    let pos = current_position(&rows, &customer)?;
                    customer.version += 1;
                    rows[pos] = customer;
                }
                Change::Remove(customer) => {
                    let pos = current_position(&rows, &customer)?;
                    rows.remove(pos);
                }
            }
        }

        self.rows = rows;
        Ok(())
    }
}

/// Position of the row `customer` was fetched from, if it is still current.
fn current_position(rows: &[Customer], customer: &Customer) -> Result<usize, CommitError> {
    rows.iter()
        .position(|c| c.customer_id == customer.customer_id && c.version == customer.version)
        .ok_or_else(|| CommitError::Conflict {
            id: customer.customer_id.clone(),
        })
}

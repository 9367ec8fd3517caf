//! # Customer Manager
//!
//! The manager is a **thin facade** over a [`CustomerStore`]. It turns
//! intention-revealing calls (create, update, delete, retrieve) into store
//! calls and remembers one piece of session state: the selected customer.
//!
//! ## Failure Reporting
//!
//! The manager deliberately reports failures unevenly:
//!
//! - [`CustomerManager::create`] propagates every store failure to its caller.
//! - [`CustomerManager::update`] and [`CustomerManager::delete`] absorb both a
//!   missing customer and a failed commit into `false`.
//!
//! Callers that need to tell "not found" from "conflict" use
//! [`CustomerManager::try_update`] / [`CustomerManager::try_delete`], which
//! return the underlying [`NorthwindError`].
//!
//! ## Selection
//!
//! The selected slot holds a copy of a customer. It is replaced by
//! `set_selected_customer`, a successful `create`, `update` or `retrieve`,
//! and cleared by a successful `delete`.

use crate::error::{NorthwindError, Result};
use crate::model::{Customer, CustomerUpdate};
use crate::store::CustomerStore;
use log::{debug, warn};

pub struct CustomerManager<S: CustomerStore> {
    store: S,
    selected: Option<Customer>,
}

impl<S: CustomerStore> CustomerManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            selected: None,
        }
    }

    /// Insert and commit a new customer. No existence check is made first;
    /// a duplicate key fails the commit and the error is returned as is.
    pub fn create(
        &mut self,
        customer_id: &str,
        contact_name: &str,
        company_name: &str,
        city: Option<&str>,
    ) -> Result<Customer> {
        if customer_id.trim().is_empty() {
            return Err(NorthwindError::Validation(
                "customer id cannot be empty".to_string(),
            ));
        }

        let mut customer = Customer::new(customer_id)
            .with_contact_name(contact_name)
            .with_company_name(company_name);
        customer.city = city.map(str::to_string);

        self.store.insert(customer.clone());
        self.store.commit()?;

        // The committed row is what was staged, at version 1. Another handle
        // may already have changed it, so it is not read back.
        customer.version = 1;
        debug!("created customer {}", customer_id);
        self.selected = Some(customer.clone());
        Ok(customer)
    }

    /// Apply a partial update. Returns `false` if the customer does not exist
    /// or the commit fails; the two cases are not distinguished.
    pub fn update(
        &mut self,
        customer_id: &str,
        contact_name: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
        postal_code: Option<&str>,
    ) -> bool {
        let changes = CustomerUpdate::new(contact_name, country, city, postal_code);
        match self.try_update(customer_id, &changes) {
            Ok(_) => true,
            Err(e) => {
                warn!("update of customer {} failed: {}", customer_id, e);
                false
            }
        }
    }

    /// Fetch, apply `changes`, commit. Unlike [`update`](Self::update) the
    /// failure is returned: `NotFound` when the id is absent, `Commit` when
    /// the store rejects the change (e.g. `CommitError::Conflict`). On success
    /// the updated customer is selected and returned.
    pub fn try_update(&mut self, customer_id: &str, changes: &CustomerUpdate) -> Result<Customer> {
        let mut customer = self
            .store
            .get_by_id(customer_id)
            .ok_or_else(|| NorthwindError::NotFound(customer_id.to_string()))?;

        changes.apply_to(&mut customer);
        self.store.modify(customer.clone());
        self.store.commit()?;

        customer.version += 1;
        debug!("updated customer {}", customer_id);
        self.selected = Some(customer.clone());
        Ok(customer)
    }

    /// Remove a customer. Returns `false` if it does not exist or the commit
    /// fails. On success the selection is cleared, whatever it held.
    pub fn delete(&mut self, customer_id: &str) -> bool {
        match self.try_delete(customer_id) {
            Ok(_) => true,
            Err(e) => {
                warn!("delete of customer {} failed: {}", customer_id, e);
                false
            }
        }
    }

    /// Fetch, remove, commit, returning `NotFound` or `Commit` instead of
    /// collapsing them into `false`. On success the selection is cleared and
    /// the removed customer is returned.
    pub fn try_delete(&mut self, customer_id: &str) -> Result<Customer> {
        let customer = self
            .store
            .get_by_id(customer_id)
            .ok_or_else(|| NorthwindError::NotFound(customer_id.to_string()))?;

        self.store.remove(&customer);
        self.store.commit()?;

        debug!("deleted customer {}", customer_id);
        self.selected = None;
        Ok(customer)
    }

    pub fn retrieve_all(&self) -> Vec<Customer> {
        self.store.get_all()
    }

    /// Fetch a customer by id; a hit becomes the selection.
    pub fn retrieve(&mut self, customer_id: &str) -> Option<Customer> {
        let customer = self.store.get_by_id(customer_id)?;
        self.selected = Some(customer.clone());
        Some(customer)
    }

    pub fn exists(&self, customer_id: &str) -> bool {
        self.store.exists(customer_id)
    }

    pub fn set_selected_customer(&mut self, customer: Customer) {
        self.selected = Some(customer);
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

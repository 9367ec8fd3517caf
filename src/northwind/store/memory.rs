use super::{Change, CommitError, CustomerStore, Table};
use crate::model::Customer;

/// In-memory storage for tests, demos and the CLI session.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    table: Table,
    pending: Vec<Change>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Result<Self, CommitError> {
        Ok(Self {
            table: Table::seeded(customers)?,
            pending: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn pending(&self) -> &[Change] {
        &self.pending
    }
}

impl CustomerStore for InMemoryStore {
    fn get_by_id(&self, id: &str) -> Option<Customer> {
        self.table.get(id).cloned()
    }

    fn get_all(&self) -> Vec<Customer> {
        self.table.rows().to_vec()
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
        self.table.apply(changes)
    }

    fn discard(&mut self) {
        self.pending.clear();
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_customer(mut self, customer: Customer) -> Self {
            self.store.insert(customer);
            self.store.commit().unwrap();
            self
        }

        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 0..count {
                let customer = Customer::new(format!("CUST{}", i + 1))
                    .with_contact_name(format!("Contact {}", i + 1))
                    .with_company_name("Sparta Global");
                self.store.insert(customer);
            }
            self.store.commit().unwrap();
            self
        }

        pub fn with_northwind_sample(mut self) -> Self {
            for customer in crate::seed::sample_customers() {
                self.store.insert(customer);
            }
            self.store.commit().unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }

    /// Wraps a store; an armed failure replaces the next commit.
    pub struct FaultyStore<S> {
        inner: S,
        next_failure: Option<CommitError>,
    }

    impl<S: CustomerStore> FaultyStore<S> {
        pub fn new(inner: S) -> Self {
            Self {
                inner,
                next_failure: None,
            }
        }

        pub fn fail_next_commit(&mut self, error: CommitError) {
            self.next_failure = Some(error);
        }

        pub fn inner(&self) -> &S {
            &self.inner
        }
    }

    impl<S: CustomerStore> CustomerStore for FaultyStore<S> {
        fn get_by_id(&self, id: &str) -> Option<Customer> {
            self.inner.get_by_id(id)
        }

        fn get_all(&self) -> Vec<Customer> {
            self.inner.get_all()
        }

        fn insert(&mut self, customer: Customer) {
            self.inner.insert(customer)
        }

        fn modify(&mut self, customer: Customer) {
            self.inner.modify(customer)
        }

        fn remove(&mut self, customer: &Customer) {
            self.inner.remove(customer)
        }

        fn discard(&mut self) {
            self.inner.discard()
        }

        fn commit(&mut self) -> Result<(), CommitError> {
            match self.next_failure.take() {
                Some(error) => {
                    // A failed commit never leaves staged changes behind.
                    self.inner.discard();
                    Err(error)
                }
                None => self.inner.commit(),
            }
        }
    }

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct CallCounts {
        pub get_by_id: usize,
        pub get_all: usize,
        pub insert: usize,
        pub modify: usize,
        pub remove: usize,
        pub commit: usize,
    }

    /// Wraps a store and records every call made through it.
    pub struct SpyStore<S> {
        inner: S,
        calls: std::cell::Cell<CallCounts>,
        removed: Vec<Customer>,
    }

    impl<S: CustomerStore> SpyStore<S> {
        pub fn new(inner: S) -> Self {
            Self {
                inner,
                calls: std::cell::Cell::new(CallCounts::default()),
                removed: Vec::new(),
            }
        }

        pub fn calls(&self) -> CallCounts {
            self.calls.get()
        }

        pub fn removed(&self) -> &[Customer] {
            &self.removed
        }

        pub fn inner(&self) -> &S {
            &self.inner
        }

        fn record(&self, bump: impl FnOnce(&mut CallCounts)) {
            let mut calls = self.calls.get();
            bump(&mut calls);
            self.calls.set(calls);
        }
    }

    impl<S: CustomerStore> CustomerStore for SpyStore<S> {
        fn get_by_id(&self, id: &str) -> Option<Customer> {
            self.record(|c| c.get_by_id += 1);
            self.inner.get_by_id(id)
        }

        fn get_all(&self) -> Vec<Customer> {
            self.record(|c| c.get_all += 1);
            self.inner.get_all()
        }

        fn insert(&mut self, customer: Customer) {
            self.record(|c| c.insert += 1);
            self.inner.insert(customer)
        }

        fn modify(&mut self, customer: Customer) {
            self.record(|c| c.modify += 1);
            self.inner.modify(customer)
        }

        fn remove(&mut self, customer: &Customer) {
            self.record(|c| c.remove += 1);
            self.removed.push(customer.clone());
            self.inner.remove(customer)
        }

        fn commit(&mut self) -> Result<(), CommitError> {
            self.record(|c| c.commit += 1);
            self.inner.commit()
        }

        fn discard(&mut self) {
            self.inner.discard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn staged_changes_are_invisible_until_commit() {
        let mut store = InMemoryStore::new();
        store.insert(Customer::new("ODELL").with_city("Surrey"));

        assert!(store.get_by_id("ODELL").is_none());
        assert_eq!(store.pending().len(), 1);

        store.commit().unwrap();
        assert_eq!(
            store.get_by_id("ODELL").unwrap().city.as_deref(),
            Some("Surrey")
        );
        assert!(store.pending().is_empty());
    }

    #[test]
    fn get_by_id_returns_the_seeded_customer() {
        let store = StoreFixture::new()
            .with_customer(
                Customer::new("PHILL")
                    .with_contact_name("Philip Windridge")
                    .with_company_name("Sparta Global")
                    .with_city("Birmingham"),
            )
            .build();

        let result = store.get_by_id("PHILL").unwrap();
        assert_eq!(result.contact_name.as_deref(), Some("Philip Windridge"));
        assert_eq!(result.company_name.as_deref(), Some("Sparta Global"));
        assert_eq!(result.city.as_deref(), Some("Birmingham"));
    }

    #[test]
    fn removed_customer_is_gone() {
        let mut store = StoreFixture::new().with_customers(2).build();
        let customer = store.get_by_id("CUST1").unwrap();
        store.remove(&customer);
        store.commit().unwrap();

        assert!(store.get_by_id("CUST1").is_none());
        assert!(!store.exists("CUST1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_commit_discards_pending_changes() {
        let mut store = StoreFixture::new().with_customers(1).build();
        store.insert(Customer::new("CUST1"));

        let err = store.commit().unwrap_err();
        assert_eq!(err, CommitError::DuplicateKey { id: "CUST1".into() });
        assert!(store.pending().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_length_matches_table() {
        let store = StoreFixture::new().with_northwind_sample().build();
        assert_eq!(store.get_all().len(), store.len());
        assert_eq!(store.get_all()[0].customer_id, "ALFKI");
    }
}

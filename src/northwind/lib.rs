//! # Northwind Architecture
//!
//! Northwind is a **customer-management library** built around one idea: the
//! business layer is written against a storage *trait*, never a storage
//! engine, so every behaviour can be exercised with a fake store.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, runs the shell session │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager Layer (manager.rs)                                 │
//! │  - Facade: create, update, delete, retrieve, select         │
//! │  - Holds the selected-customer slot                         │
//! │  - Turns store failures into bools or typed errors          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CustomerStore trait with staged changes and commit       │
//! │  - InMemoryStore, SharedStore, and test doubles             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/*.rs`): change sets, commit atomicity, version conflicts.
//! 2. **Manager** (`manager.rs`): contract tests against `StoreFixture`, plus
//!    `FaultyStore` (stub a failing commit) and `SpyStore` (verify calls).
//!    Each test builds its own store; nothing is shared between tests.
//! 3. **CLI** (`tests/`): drives the binary end to end.
//!
//! ## Module Overview
//!
//! - [`manager`]: The facade, entry point for all operations
//! - [`store`]: Storage contract and implementations
//! - [`model`]: `Customer` and `CustomerUpdate`
//! - [`seed`]: Sample customers
//! - [`config`]: Client configuration
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod seed;
pub mod store;

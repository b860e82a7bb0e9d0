//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic record-keeping library** for two record kinds —
//! contacts and notes — with a thin CLI client in front of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, builds entities from raw strings,      │
//! │    formats output; the ONLY place touching stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory books, loaded once at open            │
//! │  - Dispatches to commands, persists after every mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the books, no I/O               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Books + Storage (book/, store/)                            │
//! │  - Uniqueness-enforcing collections                         │
//! │  - BookStore trait: FileStore (prod), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Validate Before Mutating
//!
//! Every raw value passes a rule in [`validation`] before it can reach a
//! book, and entity constructors in [`model`] enforce the same rules, so
//! invalid values are unrepresentable past the boundary. Updates are
//! keyed swaps: all checks run while the old record is still in place.
//! Validation failures are plain values with a classified kind — nothing
//! in the core panics on bad input.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`book`]: The two collections (`AddressBook`, `NotesBook`)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Entity value objects and the two record kinds
//! - [`validation`]: The pure rule catalogue
//! - [`render`]: Tabular views of the books
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod store;
pub mod validation;

//! # Filmcat Architecture
//!
//! Filmcat keeps a movie catalog in one JSON file and edits it through an
//! interactive numbered menu. Small as it is, the code keeps the same strict
//! layering throughout: the catalog logic knows nothing about terminals, and
//! the terminal code knows nothing about files.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, invoked by main.rs)                       │
//! │  - Menu state machine, prompts, table rendering             │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory catalog and its store                 │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, update, delete, list, search + filter               │
//! │  - Every mutation persists before returning                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait: whole-document load / save           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`lookup`] sits off to the side: a client for a title-keyed movie metadata
//! service. It shares configuration and error types with the rest of the
//! crate but is not connected to the catalog or to the menu.
//!
//! ## Positional identity
//!
//! Movies have no ids. Update and delete address them by their 0-based
//! position, which the catalog and search tables print in the `#` column.
//! Out-of-range positions are rejected with an index error before anything
//! is written.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and owner of catalog state
//! - [`commands`]: Business logic for each catalog operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Movie`, `Catalog`, `SearchFilter`)
//! - [`lookup`]: Metadata lookup client
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - [`cli`]: The interactive terminal front end used by the binary

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod store;

//! # Lendboard Architecture
//!
//! Lendboard is an admin dashboard over a lending platform's customers: a
//! login, a paginated and filterable user table, headline stats, and a
//! detail view per user. The backend is simulated and persistence is a
//! local key-value cache. The interesting part is the query pipeline that
//! turns the collection, a search term and column filters into a page of
//! results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, owns stdout and exit   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Auth gate + dispatch to commands                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - login, load, list, show, stats, reset, config            │
//! │  - Decides how source and storage failures surface          │
//! └─────────────────────────────────────────────────────────────┘
//!          │                    │                    │
//!          ▼                    ▼                    ▼
//!   query/ + table.rs      source/ (UserSource)   store/ (KeyValueStore)
//!   pure pipeline          MockApi backend        FileStore, MemoryStore,
//!                                                 fail-soft DashboardCache
//! ```
//!
//! ## Failure policy
//!
//! - Storage failures never escape [`store::cache::DashboardCache`]. They
//!   are logged and the read returns an empty default.
//! - A failed collection fetch surfaces as
//!   [`error::DashError::DataUnavailable`] only when nothing is cached.
//! - A missing user is [`error::DashError::UserNotFound`], distinct from
//!   load failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`query`]: Search predicate, column filters, pagination
//! - [`table`]: Caller-owned table state (term, filters, page)
//! - [`source`]: Data source trait and the mock backend
//! - [`store`]: Key-value storage and the dashboard cache
//! - [`model`]: Core data types (`UserRecord`, `UserStatus`, `UserStats`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod source;
pub mod store;
pub mod table;

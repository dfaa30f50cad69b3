//! Source layer for fetching active users.
//!
//! This module provides the abstraction over the external collaborator that
//! returns raw user records, plus two ready-made implementations.
//!
//! # Modules
//!
//! - `backend`: [`UserSource`] trait
//! - `models`: Raw inbound record type, separate from the domain model
//! - `memory`: Fixed in-memory outcome
//! - `json`: JSON snapshot file

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::UserSource;
pub use json::JsonFileSource;
pub use memory::MemorySource;
pub use models::RawUserRecord;

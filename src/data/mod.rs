//! Data layer
//!
//! Flat record types shared by the API, service, and storage layers.

mod models;

pub use models::ProfileRecord;

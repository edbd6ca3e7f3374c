/// State management module
///
/// This module handles all application state, including:
/// - The persisted inventory collection (store.rs)
/// - The record data model (record.rs)
/// - The filter/sort query pipeline (query.rs)

pub mod query;
pub mod record;
pub mod store;

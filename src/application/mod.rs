// Application layer - Use cases over the loaded observations
pub mod data_source;
pub mod query_service;
pub mod record_store;

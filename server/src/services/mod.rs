//! Data access services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `source` defines the `DataSource` trait the routes depend on. `mock`
//! serves corpora generated by `corpus`; `search_proxy` forwards to a remote
//! search-index proxy over HTTP.

pub mod corpus;
pub mod mock;
pub mod search_proxy;
pub mod source;

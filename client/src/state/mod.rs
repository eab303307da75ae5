//! Client state models.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal`s by the components that own them.
//! Keeping the transitions here, free of Leptos types, lets them be tested
//! without a reactive runtime.

pub mod chunk_table;
pub mod dashboard;
pub mod fetch;

//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON endpoints; the wire records themselves live
//! in the shared `chunks` crate.

pub mod api;

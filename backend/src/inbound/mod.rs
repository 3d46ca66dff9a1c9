//! Inbound adapters translating external requests into domain port calls.
//!
//! HTTP handlers live under [`http`].

pub mod http;

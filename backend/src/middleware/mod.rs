//! Request middleware.
//!
//! `Trace` scopes a correlation identifier around each request; `Envelope`
//! wraps successful JSON responses in the standard success shape.

pub mod envelope;
pub mod trace;

pub use envelope::{Envelope, EnvelopeBody};
pub use trace::Trace;

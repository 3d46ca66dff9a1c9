//! Recipe catalogue backend library.
//!
//! Layout follows a hexagonal split: [`domain`] owns entities, ports and use
//! cases; [`inbound`] adapts HTTP requests onto the driving ports;
//! [`outbound`] provides the repository adapters; [`middleware`] holds the
//! request-scoped cross-cutting layers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Envelope, Trace};

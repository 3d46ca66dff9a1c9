//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::health::HealthState;
use super::state::HttpState;
use crate::Trace;
use crate::middleware::Envelope;

/// Clock frozen at 2024-01-01T12:00:00Z.
pub struct FrozenClock;

impl FrozenClock {
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        Self::instant().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

/// Application with the full recipe surface over `state`.
///
/// Envelope timestamps come from [`FrozenClock`].
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .wrap(Trace)
        .configure(|cfg| {
            super::configure_with_envelope(cfg, Envelope::with_clock(Arc::new(FrozenClock)));
        })
}

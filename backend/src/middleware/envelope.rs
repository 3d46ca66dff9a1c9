//! Success response envelope.
//!
//! Wraps every successful JSON payload as
//! `{data, statusCode, message, timestamp, path}`. Error responses, empty
//! bodies and non-JSON content pass through untouched so the error mapper
//! stays the single authority over failure bodies.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::{BoxBody, MessageBody, to_bytes};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode, header};
use actix_web::{Error, HttpResponse};
use chrono::SecondsFormat;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

/// Wire shape of an enveloped success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeBody<T> {
    /// Payload produced by the handler.
    pub data: T,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Human-readable summary keyed by the request verb.
    pub message: String,
    /// Envelope creation time (RFC 3339, milliseconds, `Z`).
    pub timestamp: String,
    /// Request path including any query string.
    pub path: String,
}

/// Summary message for a successful request using `method`.
pub fn message_for(method: &Method) -> &'static str {
    match method.as_str() {
        "POST" => "Recurso criado com sucesso",
        "GET" => "Dados recuperados com sucesso",
        "PUT" | "PATCH" => "Recurso atualizado com sucesso",
        "DELETE" => "Recurso removido com sucesso",
        _ => "Operação realizada com sucesso",
    }
}

fn is_json(response: &HttpResponse<impl MessageBody>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn should_wrap(response: &HttpResponse<impl MessageBody>) -> bool {
    let status = response.status();
    status.is_success() && status != StatusCode::NO_CONTENT && is_json(response)
}

/// Middleware applying the success envelope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use recipe_catalogue::Envelope;
///
/// let app = App::new().service(web::scope("/recipes").wrap(Envelope::new()));
/// ```
#[derive(Clone)]
pub struct Envelope {
    clock: Arc<dyn Clock>,
}

impl Envelope {
    /// Envelope stamped with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Envelope stamped with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for Envelope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = EnvelopeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(EnvelopeMiddleware {
            service,
            clock: Arc::clone(&self.clock),
        }))
    }
}

/// Service wrapper produced by [`Envelope`].
pub struct EnvelopeMiddleware<S> {
    service: S,
    clock: Arc<dyn Clock>,
}

impl<S, B> Service<ServiceRequest> for EnvelopeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().clone();
        let path = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
        let clock = Arc::clone(&self.clock);
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            if !should_wrap(res.response()) {
                return Ok(res.map_into_boxed_body());
            }

            let (request, response) = res.into_parts();
            let status = response.status();
            let (head, body) = response.into_parts();
            let bytes = to_bytes(body).await.map_err(|err| {
                let err: Box<dyn std::error::Error> = err.into();
                error!(error = %err, "failed to read response body for envelope");
                actix_web::error::ErrorInternalServerError(err.to_string())
            })?;

            let data = match serde_json::from_slice::<Value>(&bytes) {
                Ok(data) => data,
                Err(err) => {
                    warn!(error = %err, "json response body did not parse; skipping envelope");
                    let passthrough = head.set_body(bytes).map_into_boxed_body();
                    return Ok(ServiceResponse::new(request, passthrough));
                }
            };

            let envelope = EnvelopeBody {
                data,
                status_code: status.as_u16(),
                message: message_for(&method).to_owned(),
                timestamp: clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true),
                path,
            };
            let encoded = serde_json::to_vec(&envelope).map_err(|err| {
                error!(error = %err, "failed to encode response envelope");
                actix_web::error::ErrorInternalServerError(err.to_string())
            })?;

            let wrapped = head.set_body(encoded).map_into_boxed_body();
            Ok(ServiceResponse::new(request, wrapped))
        })
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;

//! Observability module - request IDs and per-request tracing spans.

mod request_id;

pub use request_id::RequestIdMiddleware;

//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`orders`] - order lifecycle endpoints
//! - [`kitchen`] - production schedule endpoints
//! - [`shipments`] - shipment dispatch endpoints
//! - [`inventory`] - stock levels and low-stock alerts
//! - [`invoices`] - billing endpoints
//! - [`dashboard`] - live summary counters
//! - [`stores`], [`products`], [`materials`], [`recipes`] - read-only catalog

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod invoices;
pub mod kitchen;
pub mod materials;
pub mod orders;
pub mod products;
pub mod recipes;
pub mod shipments;
pub mod stores;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(kitchen::router())
        .merge(shipments::router())
        .merge(inventory::router())
        .merge(invoices::router())
        .merge(dashboard::router())
        .merge(stores::router())
        .merge(products::router())
        .merge(materials::router())
        .merge(recipes::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and in-process test calls.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - the admin frontend runs on a different origin
        .layer(CorsLayer::permissive())
        // Gzip compress responses
        .layer(CompressionLayer::new())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Unique ID per request, propagated back on the response.
        // Router::layer wraps outside-in, so the set layer goes last to run
        // before the propagate layer sees the request.
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}

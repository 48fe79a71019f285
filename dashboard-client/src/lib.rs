//! Dashboard Client - goods API and route registry for the admin dashboard
//!
//! Provides typed calls to the goods service over an injectable HTTP
//! transport, and the route table that maps dashboard paths to views.

pub mod api;
pub mod config;
pub mod error;
pub mod transport;
pub mod router;

pub use api::GoodsApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, NetworkTransport, RequestBody, UploadFile,
};
pub use router::{LazyComponent, RouteMatch, RouteMeta, RouteRecord, Router, ViewComponent};

// Re-export shared types for convenience
pub use shared::{GoodsListRes, GoodsParams, GoodsRecord, GoodsRecordV2, PartialGoods};

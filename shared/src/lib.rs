//! Shared types for the goods dashboard
//!
//! Wire DTOs exchanged with the goods service. These types are used by
//! `dashboard-client` and by anything that needs to speak the same JSON.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    GOODS_SCHEMA_VERSION, GoodsListRes, GoodsParams, GoodsRecord, GoodsRecordV2, PartialGoods,
};

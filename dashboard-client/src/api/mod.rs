//! Typed wrappers over the goods service endpoints

pub mod goods;

pub use goods::GoodsApi;

//! Goods Model

use serde::{Deserialize, Serialize};

/// Schema version of [`GoodsRecord`]
pub const GOODS_SCHEMA_VERSION: u32 = 1;

/// Goods entity (schema version 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsRecord {
    pub id: String,
    pub name: String,
    pub cover_img_url: String,
    pub price: f64,
    pub discount: f64,
    pub stock: i64,
    /// Detail images, display order
    #[serde(default)]
    pub desc_img_url_list: Vec<String>,
    pub origin_place: String,
    /// Quality level
    pub level: String,
    pub weight: f64,
    pub desc: String,
    /// Category reference (String ID)
    pub category_id: String,
}

/// Goods entity as emitted by the later service snapshot
///
/// Not wire-compatible with [`GoodsRecord`]: `discount` is named
/// `discountPrice` and two media fields exist. Convert with `From`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsRecordV2 {
    pub id: String,
    pub name: String,
    pub cover_img_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub scroll_img_url_list: Vec<String>,
    pub price: f64,
    pub discount_price: f64,
    pub stock: i64,
    #[serde(default)]
    pub desc_img_url_list: Vec<String>,
    pub origin_place: String,
    pub level: String,
    pub weight: f64,
    pub desc: String,
    pub category_id: String,
}

impl GoodsRecordV2 {
    /// Whether converting to [`GoodsRecord`] would lose media fields
    pub fn has_dropped_media(&self) -> bool {
        self.video_url.is_some() || !self.scroll_img_url_list.is_empty()
    }
}

/// Lossy migration to the canonical schema. `discountPrice` becomes
/// `discount`; `videoUrl` and `scrollImgUrlList` are dropped.
impl From<GoodsRecordV2> for GoodsRecord {
    fn from(v2: GoodsRecordV2) -> Self {
        Self {
            id: v2.id,
            name: v2.name,
            cover_img_url: v2.cover_img_url,
            price: v2.price,
            discount: v2.discount_price,
            stock: v2.stock,
            desc_img_url_list: v2.desc_img_url_list,
            origin_place: v2.origin_place,
            level: v2.level,
            weight: v2.weight,
            desc: v2.desc,
            category_id: v2.category_id,
        }
    }
}

/// Goods with every field optional
///
/// Used as list filter and as the onshelf payload. Absent fields are
/// left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialGoods {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_img_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_img_url_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl From<GoodsRecord> for PartialGoods {
    fn from(record: GoodsRecord) -> Self {
        Self {
            id: Some(record.id),
            name: Some(record.name),
            cover_img_url: Some(record.cover_img_url),
            price: Some(record.price),
            discount: Some(record.discount),
            stock: Some(record.stock),
            desc_img_url_list: Some(record.desc_img_url_list),
            origin_place: Some(record.origin_place),
            level: Some(record.level),
            weight: Some(record.weight),
            desc: Some(record.desc),
            category_id: Some(record.category_id),
        }
    }
}

/// List query: pagination plus optional field filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsParams {
    /// Page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    #[serde(flatten)]
    pub filter: PartialGoods,
}

impl GoodsParams {
    /// Unfiltered query for one page
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            filter: PartialGoods::default(),
        }
    }

    /// Attach field filters
    pub fn with_filter(mut self, filter: PartialGoods) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for GoodsParams {
    fn default() -> Self {
        Self::page(1, 10)
    }
}

/// Paged list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoodsListRes {
    /// Records of the requested page, at most `pageSize` of them
    pub content: Vec<GoodsRecord>,
    /// Total matching records across all pages
    pub total: u64,
}

impl GoodsListRes {
    /// Number of pages for `page_size`; 0 when `page_size` is 0
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(page_size))
    }

    /// Whether a page after `page` exists
    pub fn has_next_page(&self, page: u32, page_size: u32) -> bool {
        u64::from(page) < self.total_pages(page_size)
    }
}

//! Goods API
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/goods/shopId/{shopId}?<query>` | [`GoodsApi::list_goods_pages`] |
//! | DELETE | `/goods/{id}` | [`GoodsApi::delete_goods`] |
//! | POST | `/goods/file` (multipart, field `file`) | [`GoodsApi::upload_file`] |
//! | DELETE | `/goods/file?url=<url>` | [`GoodsApi::delete_file`] |
//! | POST | `/goods` | [`GoodsApi::onshelf_goods`] |
//!
//! Arguments are checked before anything is sent; a rejected argument
//! never reaches the network. Everything else (status, timeout, body
//! decoding) surfaces as the transport reports it, without retries.

use serde_json::Value;
use shared::{GoodsListRes, GoodsParams, PartialGoods};

use crate::transport::{HttpRequest, HttpTransport, UploadFile, encode_query};
use crate::{ClientError, ClientResult};

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Goods service client
#[derive(Debug, Clone)]
pub struct GoodsApi<T> {
    transport: T,
}

impl<T: HttpTransport> GoodsApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List one page of a shop's goods, filtered by any fields set in `params`
    pub async fn list_goods_pages(
        &self,
        shop_id: &str,
        params: &GoodsParams,
    ) -> ClientResult<GoodsListRes> {
        require_non_blank("shop_id", shop_id)?;
        validate_params(params)?;

        let request =
            HttpRequest::get(["goods", "shopId", shop_id]).with_query(encode_query(params)?);
        self.transport.execute(request).await?.json()
    }

    /// Delete one goods record
    pub async fn delete_goods(&self, id: &str) -> ClientResult<Value> {
        require_non_blank("id", id)?;

        let request = HttpRequest::delete(["goods", id]);
        self.transport.execute(request).await?.json_value()
    }

    /// Upload an asset; the response shape is defined by the service
    pub async fn upload_file(&self, file: UploadFile) -> ClientResult<Value> {
        let request = HttpRequest::post(["goods", "file"]).with_multipart(UPLOAD_FIELD, file);
        self.transport.execute(request).await?.json_value()
    }

    /// Delete a previously uploaded asset by its URL
    pub async fn delete_file(&self, url: &str) -> ClientResult<Value> {
        require_non_blank("url", url)?;

        let request = HttpRequest::delete(["goods", "file"]).with_query_pair("url", url);
        self.transport.execute(request).await?.json_value()
    }

    /// Create or publish a goods listing; the service decides which
    pub async fn onshelf_goods(&self, goods: &PartialGoods) -> ClientResult<Value> {
        let request = HttpRequest::post(["goods"]).with_json(goods)?;
        self.transport.execute(request).await?.json_value()
    }
}

fn require_non_blank(name: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

fn validate_params(params: &GoodsParams) -> ClientResult<()> {
    if params.page < 1 {
        return Err(ClientError::Validation("page starts at 1".to_string()));
    }
    if params.page_size < 1 {
        return Err(ClientError::Validation(
            "pageSize must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RequestBody;
    use crate::transport::testing::RecordingTransport;
    use http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    type TestApi = GoodsApi<Arc<RecordingTransport>>;

    fn api(transport: RecordingTransport) -> (TestApi, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        (GoodsApi::new(transport.clone()), transport)
    }

    fn empty_page() -> RecordingTransport {
        RecordingTransport::ok_json(json!({ "content": [], "total": 0 }))
    }

    fn record_json(id: &str) -> Value {
        json!({
            "id": id,
            "name": "Green tea",
            "coverImgUrl": "tea.png",
            "price": 12.5,
            "discount": 9.9,
            "stock": 40,
            "descImgUrlList": ["a.png"],
            "originPlace": "Hangzhou",
            "level": "A",
            "weight": 0.25,
            "desc": "",
            "categoryId": "c-7"
        })
    }

    #[tokio::test]
    async fn test_list_goods_pages_request_shape() {
        let (api, transport) = api(RecordingTransport::ok_json(json!({
            "content": [record_json("g-1"), record_json("g-2")],
            "total": 57
        })));

        let res = api
            .list_goods_pages("shop1", &GoodsParams::page(1, 20))
            .await
            .unwrap();
        assert_eq!(res.total, 57);
        assert!(res.content.len() <= 20);
        assert_eq!(res.content[1].id, "g-2");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path(), "/goods/shopId/shop1");
        assert_eq!(
            requests[0].query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "20".to_string()),
            ]
        );
        assert_eq!(requests[0].body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_list_goods_pages_carries_filters() {
        let (api, transport) = api(empty_page());

        let params = GoodsParams::page(2, 10).with_filter(PartialGoods {
            level: Some("A".to_string()),
            stock: Some(0),
            ..Default::default()
        });
        api.list_goods_pages("shop1", &params).await.unwrap();

        let requests = transport.requests();
        let request = &requests[0];
        assert_eq!(request.query_value("level"), Some("A"));
        assert_eq!(request.query_value("stock"), Some("0"));
        assert_eq!(request.query_value("page"), Some("2"));
        assert_eq!(request.query_value("pageSize"), Some("10"));
    }

    #[tokio::test]
    async fn test_list_goods_pages_rejects_bad_arguments() {
        let (api, transport) = api(empty_page());

        let err = api
            .list_goods_pages(" ", &GoodsParams::page(1, 20))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        let err = api
            .list_goods_pages("shop1", &GoodsParams::page(0, 20))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("page")));

        let err = api
            .list_goods_pages("shop1", &GoodsParams::page(1, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("pageSize")));

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_goods_pages_propagates_status() {
        let (api, _) = api(RecordingTransport::new(StatusCode::UNAUTHORIZED, ""));
        let err = api
            .list_goods_pages("shop1", &GoodsParams::page(1, 20))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn test_delete_goods_single_delete_without_body() {
        let (api, transport) = api(RecordingTransport::new(StatusCode::NO_CONTENT, ""));

        let value = api.delete_goods("g-42").await.unwrap();
        assert_eq!(value, Value::Null);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].path(), "/goods/g-42");
        assert!(requests[0].query.is_empty());
        assert_eq!(requests[0].body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_delete_goods_rejects_empty_id() {
        let (api, transport) = api(RecordingTransport::new(StatusCode::OK, ""));
        let err = api.delete_goods("").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_upload_file_uses_file_part() {
        let (api, transport) =
            api(RecordingTransport::ok_json(json!({ "url": "https://cdn/x.png" })));

        let file = UploadFile::new("x.png", b"\x89PNG".to_vec());
        let value = api.upload_file(file.clone()).await.unwrap();
        assert_eq!(value["url"], "https://cdn/x.png");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path(), "/goods/file");
        assert_eq!(
            requests[0].body,
            RequestBody::Multipart {
                field: "file".to_string(),
                file,
            }
        );
    }

    #[tokio::test]
    async fn test_delete_file_passes_url_unmodified() {
        let (api, transport) = api(RecordingTransport::new(StatusCode::OK, "true"));

        let url = "https://cdn.example.com/goods/a b.png?v=2&x=%41";
        let value = api.delete_file(url).await.unwrap();
        assert_eq!(value, json!(true));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].path(), "/goods/file");
        assert_eq!(requests[0].query, vec![("url".to_string(), url.to_string())]);
        assert_eq!(requests[0].body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_onshelf_goods_posts_partial_json() {
        let (api, transport) = api(RecordingTransport::ok_json(json!({ "id": "g-9" })));

        let goods = PartialGoods {
            name: Some("Oolong".to_string()),
            price: Some(30.0),
            ..Default::default()
        };
        let value = api.onshelf_goods(&goods).await.unwrap();
        assert_eq!(value["id"], "g-9");

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path(), "/goods");
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({ "name": "Oolong", "price": 30.0 }))
        );
    }

    #[tokio::test]
    async fn test_onshelf_goods_propagates_server_error() {
        let (api, _) = api(RecordingTransport::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
        ));
        let err = api.onshelf_goods(&PartialGoods::default()).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}

//! End-to-end tests of the request handler without a socket

use kodegen_tools_creatures::{ApiRequest, ApiResponse, CreatureApi, RecordStore};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;

mod common;
use common::{StubProbe, api_over, sample_record, store_with};

async fn call(api: &CreatureApi, method: Method, target: &str) -> ApiResponse {
    api.handle(ApiRequest::new(method, target)).await
}

async fn send_json(
    api: &CreatureApi,
    method: Method,
    target: &str,
    body: &Value,
) -> ApiResponse {
    api.handle(ApiRequest::new(method, target).with_json(body)).await
}

#[tokio::test]
async fn test_list_returns_every_record_in_order() {
    let api = api_over(store_with([2, 1, 3]), StubProbe::all_reachable());
    let response = call(&api, Method::GET, "/records").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 3);
    let ids: Vec<u64> = response.body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[tokio::test]
async fn test_get_by_id_and_not_found() {
    let api = api_over(store_with([1, 2]), StubProbe::all_reachable());

    let found = call(&api, Method::GET, "/records/2").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body, json!(sample_record(2)));

    let missing = call(&api, Method::GET, "/records/99").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error_kind(), Some("not_found"));
}

#[tokio::test]
async fn test_pagination_defaults_and_window() {
    let api = api_over(store_with(1..=25), StubProbe::all_reachable());

    let first = call(&api, Method::GET, "/records/all").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["page"], 1);
    assert_eq!(first.body["size"], 10);
    assert_eq!(first.body["total_items"], 25);
    assert_eq!(first.body["total_pages"], 3);
    assert_eq!(first.body["records"].as_array().unwrap().len(), 10);

    let last = call(&api, Method::GET, "/records/all?page=3&size=10").await;
    assert_eq!(last.body["records"].as_array().unwrap().len(), 5);
    assert_eq!(last.body["records"][0]["id"], 21);
}

#[tokio::test]
async fn test_pagination_errors() {
    let api = api_over(store_with([1, 2, 3]), StubProbe::all_reachable());

    let past_end = call(&api, Method::GET, "/records/all?page=3&size=2").await;
    assert_eq!(past_end.status, StatusCode::NOT_FOUND);
    assert_eq!(
        past_end.body["error"]["message"],
        "There are only 2 pages available"
    );
    assert_eq!(past_end.body["error"]["total_pages"], 2);

    for target in [
        "/records/all?page=0",
        "/records/all?size=0",
        "/records/all?size=31",
        "/records/all?page=abc",
        "/records/all?page=-1",
    ] {
        let response = call(&api, Method::GET, target).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{target}");
        assert_eq!(response.error_kind(), Some("bad_request"), "{target}");
    }
}

#[tokio::test]
async fn test_search_by_key_and_value() {
    let api = api_over(store_with([1, 2, 3]), StubProbe::all_reachable());

    let found = call(&api, Method::GET, "/records/search?key=name&value=creature-2").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body, json!([sample_record(2)]));

    let none = call(&api, Method::GET, "/records/search?key=name&value=missingno").await;
    assert_eq!(none.status, StatusCode::NOT_FOUND);

    let bad_key = call(&api, Method::GET, "/records/search?key=colour&value=red").await;
    assert_eq!(bad_key.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_key.error_kind(), Some("validation_error"));

    let missing_param = call(&api, Method::GET, "/records/search?key=name").await;
    assert_eq!(missing_param.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_param.error_kind(), Some("bad_request"));
}

#[tokio::test]
async fn test_search_value_is_percent_decoded() {
    let store = store_with([1]);
    store
        .apply_patch(1, json!({"name": "mr mime"}).as_object().unwrap())
        .unwrap();
    let api = api_over(store, StubProbe::all_reachable());

    for target in [
        "/records/search?key=name&value=mr%20mime",
        "/records/search?key=name&value=mr+mime",
    ] {
        let response = call(&api, Method::GET, target).await;
        assert_eq!(response.status, StatusCode::OK, "{target}");
    }
}

#[tokio::test]
async fn test_create_returns_201_and_conflict_is_400() {
    let store = store_with([1]);
    let api = api_over(store.clone(), StubProbe::all_reachable());

    let created = send_json(&api, Method::POST, "/records", &json!(sample_record(2))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["record"]["id"], 2);
    assert!(store.contains(2));

    let conflict = send_json(&api, Method::POST, "/records", &json!(sample_record(1))).await;
    assert_eq!(conflict.status, StatusCode::BAD_REQUEST);
    assert_eq!(conflict.error_kind(), Some("conflict"));
}

#[tokio::test]
async fn test_create_accepts_upstream_field_names() {
    let store = Arc::new(RecordStore::new());
    let api = api_over(store.clone(), StubProbe::all_reachable());

    let mut body = json!(sample_record(8));
    let url = body
        .as_object_mut()
        .unwrap()
        .remove("resource_url")
        .unwrap();
    body["pokemon_url"] = url;

    let created = send_json(&api, Method::POST, "/records", &body).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        store.get(8).unwrap().resource_url,
        "https://api.example.com/pokemon/8/"
    );
}

#[tokio::test]
async fn test_create_with_unreachable_url_is_400() {
    let api = api_over(
        Arc::new(RecordStore::new()),
        StubProbe::unreachable(&["https://img.example.com/4.png"]),
    );

    let response = send_json(&api, Method::POST, "/records", &json!(sample_record(4))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_kind(), Some("unreachable_resource"));
}

#[tokio::test]
async fn test_malformed_and_mistyped_bodies() {
    let api = api_over(store_with([1]), StubProbe::all_reachable());

    let empty = call(&api, Method::POST, "/records").await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.error_kind(), Some("bad_request"));

    let syntax = api
        .handle(ApiRequest::new(Method::POST, "/records").with_body("{not json"))
        .await;
    assert_eq!(syntax.error_kind(), Some("bad_request"));

    let missing_fields = send_json(&api, Method::POST, "/records", &json!({"id": 5})).await;
    assert_eq!(missing_fields.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_fields.error_kind(), Some("validation_error"));

    let wrong_type = send_json(&api, Method::PATCH, "/records/1", &json!({"weight": "heavy"})).await;
    assert_eq!(wrong_type.error_kind(), Some("validation_error"));

    let not_object = send_json(&api, Method::PATCH, "/records/1", &json!([1, 2])).await;
    assert_eq!(not_object.error_kind(), Some("validation_error"));
}

#[tokio::test]
async fn test_replace_and_id_mismatch() {
    let store = store_with([1, 2]);
    let api = api_over(store.clone(), StubProbe::all_reachable());

    let mut updated = sample_record(1);
    updated.name = "renamed".to_string();
    let replaced = send_json(&api, Method::PUT, "/records/1", &json!(updated)).await;
    assert_eq!(replaced.status, StatusCode::OK);
    assert_eq!(replaced.body["record"]["name"], "renamed");

    let mismatch = send_json(&api, Method::PUT, "/records/1", &json!(sample_record(2))).await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);
    assert_eq!(mismatch.error_kind(), Some("validation_error"));

    let missing = send_json(&api, Method::PUT, "/records/9", &json!(sample_record(9))).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_and_unknown_field() {
    let store = store_with([1, 2, 3]);
    let api = api_over(store.clone(), StubProbe::all_reachable());

    let patched = send_json(&api, Method::PATCH, "/records/2", &json!({"weight": 55})).await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["record"]["weight"], 55);

    let bogus = send_json(&api, Method::PATCH, "/records/2", &json!({"bogus": 1})).await;
    assert_eq!(bogus.status, StatusCode::BAD_REQUEST);
    assert_eq!(bogus.error_kind(), Some("validation_error"));
    assert_eq!(store.get(2).unwrap().weight, 55);
}

#[tokio::test]
async fn test_delete_then_get() {
    let store = store_with([1, 2, 3]);
    let api = api_over(store, StubProbe::all_reachable());

    let deleted = call(&api, Method::DELETE, "/records/2").await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["id"], 2);

    let gone = call(&api, Method::GET, "/records/2").await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = call(&api, Method::DELETE, "/records/2").await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_routing_edges() {
    let api = api_over(store_with([1]), StubProbe::all_reachable());

    let unknown = call(&api, Method::GET, "/creatures").await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.error_kind(), Some("not_found"));

    let bad_id = call(&api, Method::GET, "/records/abc").await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);

    let wrong_method = call(&api, Method::POST, "/records/all").await;
    assert_eq!(wrong_method.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(wrong_method.allow, Some("GET"));
    assert_eq!(wrong_method.error_kind(), Some("method_not_allowed"));

    let trailing = call(&api, Method::GET, "/records/1/").await;
    assert_eq!(trailing.status, StatusCode::OK);
}

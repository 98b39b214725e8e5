//! Route handlers: translate requests into engine calls and back

use serde_json::{Map, Value, json};
use std::time::Instant;

use super::CreatureApi;
use super::request::ApiRequest;
use super::response::ApiResponse;
use super::routes::{Resolution, Route, resolve};
use crate::errors::RegistryResult;
use crate::query::PageRequest;
use crate::record::Record;

impl CreatureApi {
    /// Route and execute one request
    ///
    /// Never fails: every error becomes a structured error response.
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let start = Instant::now();

        let response = match resolve(&request.method, &request.path) {
            Resolution::Matched(route) => match self.dispatch(route, &request).await {
                Ok(response) => response,
                Err(e) => ApiResponse::from_error(&e),
            },
            Resolution::MethodNotAllowed { allow } => ApiResponse::method_not_allowed(allow),
            Resolution::Invalid(e) => ApiResponse::from_error(&e),
            Resolution::Unknown => ApiResponse::route_not_found(&request.path),
        };

        log_request!(request.method, request.path, response.status, start);
        response
    }

    async fn dispatch(&self, route: Route, request: &ApiRequest) -> RegistryResult<ApiResponse> {
        match route {
            Route::List => {
                let records = self.queries.list();
                Ok(ApiResponse::ok(json!({
                    "count": records.len(),
                    "records": records,
                })))
            }
            Route::Page => {
                let page = request.query_usize("page", 1)?;
                let size = request.query_usize("size", self.config.default_page_size())?;
                let window = self.queries.page(PageRequest::new(
                    page,
                    size,
                    self.config.max_page_size(),
                )?)?;
                Ok(ApiResponse::ok(json!(window)))
            }
            Route::Search => {
                let key = request.required_param("key")?;
                let value = request.required_param("value")?;
                let matches = self.queries.search(key, value)?;
                Ok(ApiResponse::ok(json!(matches)))
            }
            Route::Get(id) => Ok(ApiResponse::ok(json!(self.queries.get(id)?))),
            Route::Create => {
                let record: Record = request.json()?;
                let created = self.mutations.create(record).await?;
                Ok(ApiResponse::created(json!({
                    "message": "Record added",
                    "record": created,
                })))
            }
            Route::Replace(id) => {
                let record: Record = request.json()?;
                let replaced = self.mutations.replace(id, record).await?;
                Ok(ApiResponse::ok(json!({
                    "message": "Record updated",
                    "record": replaced,
                })))
            }
            Route::Patch(id) => {
                let updates: Map<String, Value> = request.json()?;
                let patched = self.mutations.patch(id, &updates)?;
                Ok(ApiResponse::ok(json!({
                    "message": "Record updated",
                    "record": patched,
                })))
            }
            Route::Delete(id) => {
                self.mutations.delete(id)?;
                Ok(ApiResponse::ok(json!({
                    "message": format!("Record {id} deleted"),
                    "id": id,
                })))
            }
        }
    }
}

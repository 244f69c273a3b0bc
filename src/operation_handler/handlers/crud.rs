//! CRUD operation handlers
//!
//! Each handler runs one Resource Manager operation and renders its
//! success response. Errors are returned untouched for the caller to render.

use crate::{
    ScimError,
    error::ScimResult,
    operation_handler::core::ScimOperation,
    providers::ResourceManager,
    resource::{RequestContext, ScimResource},
    storage::StorageProvider,
};
use http::header::{CONTENT_TYPE, ETAG, LOCATION};
use http::{HeaderValue, Response, StatusCode};

/// Run `operation` against `manager`.
pub async fn handle_operation<R: ScimResource, S: StorageProvider>(
    manager: &ResourceManager<R, S>,
    operation: ScimOperation<'_>,
    body: &[u8],
    context: &RequestContext,
) -> ScimResult<Response<String>> {
    match operation {
        ScimOperation::Create => handle_create(manager, body, context).await,
        ScimOperation::Get(id) => handle_get(manager, id, context).await,
        ScimOperation::Replace(id) => handle_replace(manager, id, body, context).await,
        ScimOperation::Delete(id) => handle_delete(manager, id, context).await,
    }
}

/// Handle create operations.
pub async fn handle_create<R: ScimResource, S: StorageProvider>(
    manager: &ResourceManager<R, S>,
    body: &[u8],
    context: &RequestContext,
) -> ScimResult<Response<String>> {
    let resource = manager.create(body, context).await?;
    resource_response(StatusCode::CREATED, &resource)
}

/// Handle get operations.
pub async fn handle_get<R: ScimResource, S: StorageProvider>(
    manager: &ResourceManager<R, S>,
    id: &str,
    context: &RequestContext,
) -> ScimResult<Response<String>> {
    let resource = manager.read(id, context).await?;
    resource_response(StatusCode::OK, &resource)
}

/// Handle replace operations.
pub async fn handle_replace<R: ScimResource, S: StorageProvider>(
    manager: &ResourceManager<R, S>,
    id: &str,
    body: &[u8],
    context: &RequestContext,
) -> ScimResult<Response<String>> {
    let resource = manager.replace(id, body, context).await?;
    resource_response(StatusCode::OK, &resource)
}

/// Handle delete operations.
pub async fn handle_delete<R: ScimResource, S: StorageProvider>(
    manager: &ResourceManager<R, S>,
    id: &str,
    context: &RequestContext,
) -> ScimResult<Response<String>> {
    manager.delete(id, context).await?;
    let mut response = Response::new(String::new());
    *response.status_mut() = StatusCode::OK;
    Ok(response)
}

/// JSON response for a single resource, with `Location` and `ETag` taken
/// from its metadata.
fn resource_response<R: ScimResource>(status: StatusCode, resource: &R) -> ScimResult<Response<String>> {
    let body = serde_json::to_string(resource)
        .map_err(|e| ScimError::internal(format!("Failed to serialize resource: {}", e)))?;

    let mut response = Response::new(body);
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(meta) = resource.meta() {
        let location = HeaderValue::from_str(&meta.location)
            .map_err(|e| ScimError::internal(format!("Invalid location header: {}", e)))?;
        headers.insert(LOCATION, location);

        if let Some(version) = &meta.version {
            let etag = HeaderValue::from_str(version)
                .map_err(|e| ScimError::internal(format!("Invalid ETag header: {}", e)))?;
            headers.insert(ETAG, etag);
        }
    }

    Ok(response)
}

//! Core operation handler infrastructure
//!
//! This module contains the central handler struct and the dispatch logic
//! that turns an HTTP request into a Resource Manager call.

use crate::{
    ScimError, ScimServer,
    error::ScimResult,
    operation_handler::{
        errors::create_error_response,
        handlers::crud,
        routes::{RouteTarget, resolve_route},
    },
    resource::{RequestContext, ResourceKind},
    storage::StorageProvider,
};
use http::{HeaderValue, Method, Request, Response};
use log::{debug, info, warn};

/// Header carrying a caller-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Framework-agnostic HTTP front for a [`ScimServer`].
///
/// Accepts any [`http::Request`] whose body is already buffered and always
/// produces a response; failures are rendered through
/// [`create_error_response`].
///
/// # Examples
///
/// ```rust
/// use scim_directory::operation_handler::ScimOperationHandler;
/// use scim_directory::ScimServer;
/// use scim_directory::storage::InMemoryStorage;
/// use http::{Request, StatusCode};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let handler = ScimOperationHandler::new(ScimServer::new(InMemoryStorage::new()));
///
/// let request = Request::post("/v2/Users").body(br#"{"userName": "alice"}"#.to_vec())?;
/// let response = handler.handle(request).await;
/// assert_eq!(response.status(), StatusCode::CREATED);
/// # Ok(())
/// # }
/// ```
pub struct ScimOperationHandler<S> {
    pub(super) server: ScimServer<S>,
}

/// A lifecycle operation together with the resource it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScimOperation<'a> {
    Create,
    Get(&'a str),
    Replace(&'a str),
    Delete(&'a str),
}

impl<'a> ScimOperation<'a> {
    /// Map a method onto a route's collection root (`None`) or one of its
    /// resources (`Some(id)`).
    pub fn from_request(method: &Method, resource_id: Option<&'a str>) -> Option<Self> {
        match (method, resource_id) {
            (&Method::POST, None) => Some(Self::Create),
            (&Method::GET, Some(id)) => Some(Self::Get(id)),
            (&Method::PUT, Some(id)) => Some(Self::Replace(id)),
            (&Method::DELETE, Some(id)) => Some(Self::Delete(id)),
            _ => None,
        }
    }

    /// `Allow` header value for a collection root or a single resource.
    pub fn allowed_methods(has_resource_id: bool) -> &'static str {
        if has_resource_id {
            "GET, PUT, DELETE"
        } else {
            "POST"
        }
    }
}

impl<S: StorageProvider> ScimOperationHandler<S> {
    pub fn new(server: ScimServer<S>) -> Self {
        Self { server }
    }

    pub fn server(&self) -> &ScimServer<S> {
        &self.server
    }

    /// Handle one HTTP request.
    ///
    /// The request id is taken from the `X-Request-Id` header when present,
    /// generated otherwise, and echoed back on the response.
    pub async fn handle(&self, request: Request<Vec<u8>>) -> Response<String> {
        let context = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(RequestContext::new)
            .unwrap_or_else(RequestContext::with_generated_id);

        let method = request.method();
        let path = request.uri().path();

        info!(
            "SCIM request {} {} (request: '{}')",
            method, path, context.request_id
        );

        let mut response = match self.dispatch(method, path, request.body(), &context).await {
            Ok(response) => {
                debug!(
                    "SCIM request completed with {} (request: '{}')",
                    response.status(),
                    context.request_id
                );
                response
            }
            Err(e) => {
                warn!(
                    "SCIM request failed: {} (request: '{}')",
                    e, context.request_id
                );
                create_error_response(&e)
            }
        };

        if let Ok(value) = HeaderValue::from_str(&context.request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: &[u8],
        context: &RequestContext,
    ) -> ScimResult<Response<String>> {
        let route = resolve_route(path, &self.server.config().scim_version).ok_or_else(|| {
            ScimError::NoRoute {
                path: path.to_string(),
            }
        })?;

        let kind = match route.target {
            RouteTarget::Resource(kind) => kind,
            RouteTarget::Unimplemented(endpoint) => {
                return Err(ScimError::NotImplemented {
                    endpoint: endpoint.to_string(),
                });
            }
        };

        let operation = ScimOperation::from_request(method, route.resource_id).ok_or_else(|| {
            ScimError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
                allow: ScimOperation::allowed_methods(route.resource_id.is_some()).to_string(),
            }
        })?;

        match kind {
            ResourceKind::User => {
                crud::handle_operation(self.server.users(), operation, body, context).await
            }
            ResourceKind::Group => {
                crud::handle_operation(self.server.groups(), operation, body, context).await
            }
        }
    }
}

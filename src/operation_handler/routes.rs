//! Path routing for SCIM endpoints.
//!
//! A request path is matched on its first segment, after an optional
//! `/{scim_version}` prefix, against [`ROUTES`] in declaration order. The
//! last non-empty segment after the endpoint is the resource id.
//!
//! | Path                     | Target        | Resource id |
//! |--------------------------|---------------|-------------|
//! | `/Users`                 | Users         | none        |
//! | `/v2/Users/abc`          | Users         | `abc`       |
//! | `/Groups/abc/`           | Groups        | `abc`       |
//! | `/Schemas`               | not served    | none        |
//! | `/Tenants/abc`           | no route      |             |

use crate::resource::ResourceKind;

/// What a matched path prefix leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Lifecycle operations on a resource kind
    Resource(ResourceKind),
    /// A recognised SCIM endpoint that is not implemented
    Unimplemented(&'static str),
}

/// Route table, checked in order.
pub const ROUTES: [(&str, RouteTarget); 5] = [
    ("Users", RouteTarget::Resource(ResourceKind::User)),
    ("Groups", RouteTarget::Resource(ResourceKind::Group)),
    (
        "ServiceProviderConfigs",
        RouteTarget::Unimplemented("ServiceProviderConfigs"),
    ),
    ("Schemas", RouteTarget::Unimplemented("Schemas")),
    ("Bulk", RouteTarget::Unimplemented("Bulk")),
];

/// Outcome of matching a request path against [`ROUTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub target: RouteTarget,
    pub resource_id: Option<&'a str>,
}

/// Match `path` against the route table.
///
/// Returns `None` when no route's endpoint equals the first path segment.
pub fn resolve_route<'a>(path: &'a str, scim_version: &str) -> Option<ResolvedRoute<'a>> {
    let mut rest = path.trim_start_matches('/');
    if let Some(stripped) = rest
        .strip_prefix(scim_version)
        .and_then(|r| r.strip_prefix('/'))
    {
        rest = stripped;
    }

    let (endpoint, remainder) = rest.split_once('/').unwrap_or((rest, ""));
    let target = ROUTES
        .iter()
        .find(|(prefix, _)| *prefix == endpoint)
        .map(|(_, target)| *target)?;

    let resource_id = remainder
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty());

    Some(ResolvedRoute {
        target,
        resource_id,
    })
}

//! Request identity.
//!
//! Every request gets a UUID v4 `x-request-id` as early as possible so log
//! records produced anywhere in the stack can be correlated. Incoming IDs
//! are not trusted; the set layer runs before propagation.

use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Canonical request id header.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// `MakeRequestId` generating a UUID v4 per request.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let mut maker = MakeRequestUuid;
        let request = Request::new(Body::empty());

        let a = maker.make_request_id(&request).expect("request id");
        let b = maker.make_request_id(&request).expect("request id");

        assert_ne!(a.header_value(), b.header_value());
        assert!(Uuid::parse_str(a.header_value().to_str().unwrap()).is_ok());
    }
}

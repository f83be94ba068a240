//! OpenAPI documentation for the friend-request API.
//!
//! The generated document backs Swagger UI in debug builds and is exported
//! by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, FriendRequest, FriendRequestStatus};
use crate::inbound::http::friend_requests::SendFriendRequestBody;
use crate::inbound::http::health::ProbeReport;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mingle friend-request API",
        description = "Friend-request lifecycle endpoints and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::friend_requests::list_friend_requests,
        crate::inbound::http::friend_requests::send_friend_request,
        crate::inbound::http::friend_requests::accept_friend_request,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        FriendRequest,
        FriendRequestStatus,
        ProbeReport,
        SendFriendRequestBody
    )),
    tags(
        (name = "friend-requests", description = "Sending, listing, and accepting friend requests"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

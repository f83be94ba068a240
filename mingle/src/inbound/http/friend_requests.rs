//! Friend-request API handlers.
//!
//! ```text
//! GET  /api/users/{userId}/friend-requests
//! POST /api/users/{userId}/friend-requests {"friendId":"..."}
//! PUT  /api/users/{userId}/friend-requests/{friendId}
//! ```
//!
//! Any other method on these resources answers 405 with a plain-text body.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, FriendRequest, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Collection resource path.
pub const FRIEND_REQUESTS_PATH: &str = "/api/users/{userId}/friend-requests";
/// Item resource path.
pub const FRIEND_REQUEST_PATH: &str = "/api/users/{userId}/friend-requests/{friendId}";

/// Body of `POST /api/users/{userId}/friend-requests`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendRequestBody {
    /// User the request is addressed to.
    #[schema(example = "Xk2fA9bQ0mZ")]
    pub friend_id: String,
}

fn parse_user_id(field: &str, raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
    })
}

/// Register the friend-request resources.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mingle::inbound::http::friend_requests::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(FRIEND_REQUESTS_PATH)
            .route(web::get().to(list_friend_requests))
            .route(web::post().to(send_friend_request))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(FRIEND_REQUEST_PATH)
            .route(web::put().to(accept_friend_request))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Reply for methods a resource does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = req.path(), "method not allowed");
    HttpResponse::MethodNotAllowed().body(format!("Method {} Not Allowed", req.method()))
}

/// List pending requests addressed to a user.
#[utoipa::path(
    get,
    path = "/api/users/{userId}/friend-requests",
    params(("userId" = String, Path, description = "Recipient of the requests")),
    responses(
        (status = 200, description = "Pending requests", body = [FriendRequest]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 405, description = "Method not allowed", body = String),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["friend-requests"],
    operation_id = "listFriendRequests"
)]
pub async fn list_friend_requests(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<FriendRequest>>> {
    let user_id = parse_user_id("userId", &path.into_inner())?;
    let pending = state.friend_requests.pending_requests(&user_id).await?;
    Ok(web::Json(pending))
}

/// Send a friend request from `userId` to `friendId`.
#[utoipa::path(
    post,
    path = "/api/users/{userId}/friend-requests",
    params(("userId" = String, Path, description = "Sender of the request")),
    request_body = SendFriendRequestBody,
    responses(
        (status = 201, description = "Request recorded"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 405, description = "Method not allowed", body = String),
        (status = 409, description = "Request or friendship already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["friend-requests"],
    operation_id = "sendFriendRequest"
)]
pub async fn send_friend_request(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SendFriendRequestBody>,
) -> ApiResult<HttpResponse> {
    let requester = parse_user_id("userId", &path.into_inner())?;
    let recipient = parse_user_id("friendId", &payload.friend_id)?;
    state
        .friend_requests
        .send_request(&requester, &recipient)
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// Accept the pending request `friendId` sent to `userId`.
#[utoipa::path(
    put,
    path = "/api/users/{userId}/friend-requests/{friendId}",
    params(
        ("userId" = String, Path, description = "Recipient accepting the request"),
        ("friendId" = String, Path, description = "Sender of the pending request")
    ),
    responses(
        (status = 204, description = "Request accepted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No pending request", body = Error),
        (status = 405, description = "Method not allowed", body = String),
        (status = 409, description = "Already friends", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["friend-requests"],
    operation_id = "acceptFriendRequest"
)]
pub async fn accept_friend_request(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (user_id, friend_id) = path.into_inner();
    let recipient = parse_user_id("userId", &user_id)?;
    let requester = parse_user_id("friendId", &friend_id)?;
    state
        .friend_requests
        .accept_request(&recipient, &requester)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

//! In-memory friend-request ledger.
//!
//! Default [`FriendRequestCommand`] implementation used by the server until a
//! persistent controller is wired in. Requests are keyed by the directed pair
//! `(requester, recipient)`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, info};

use super::friendship::{FriendRequest, FriendRequestStatus, FriendTransitionError};
use super::ports::FriendRequestCommand;
use super::user::UserId;
use super::Error;

type Ledger = HashMap<(UserId, UserId), FriendRequestStatus>;

/// Thread-safe record of friend requests between users.
#[derive(Debug, Default)]
pub struct FriendRequestLedger {
    requests: Mutex<Ledger>,
}

impl FriendRequestLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status between two users regardless of who sent the request.
    pub fn status_between(&self, a: &UserId, b: &UserId) -> Result<FriendRequestStatus, Error> {
        let requests = self.lock()?;
        Ok(undirected_status(&requests, a, b))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.requests
            .lock()
            .map_err(|_| Error::internal("friend request ledger is unavailable"))
    }
}

fn directed_status(requests: &Ledger, requester: &UserId, recipient: &UserId) -> FriendRequestStatus {
    requests
        .get(&(requester.clone(), recipient.clone()))
        .copied()
        .unwrap_or_default()
}

fn undirected_status(requests: &Ledger, a: &UserId, b: &UserId) -> FriendRequestStatus {
    match (directed_status(requests, a, b), directed_status(requests, b, a)) {
        (FriendRequestStatus::Accepted, _) | (_, FriendRequestStatus::Accepted) => {
            FriendRequestStatus::Accepted
        }
        (FriendRequestStatus::Requested, _) | (_, FriendRequestStatus::Requested) => {
            FriendRequestStatus::Requested
        }
        _ => FriendRequestStatus::None,
    }
}

fn map_transition_error(error: FriendTransitionError) -> Error {
    match error {
        FriendTransitionError::NotRequested => Error::not_found(error.to_string()),
        FriendTransitionError::AlreadyRequested | FriendTransitionError::AlreadyFriends => {
            Error::conflict(error.to_string())
        }
    }
}

#[async_trait]
impl FriendRequestCommand for FriendRequestLedger {
    async fn send_request(&self, requester: &UserId, recipient: &UserId) -> Result<(), Error> {
        if requester == recipient {
            return Err(Error::invalid_request(
                "cannot send a friend request to yourself",
            ));
        }
        let mut requests = self.lock()?;
        let next = undirected_status(&requests, requester, recipient)
            .send_request()
            .map_err(map_transition_error)?;
        requests.insert((requester.clone(), recipient.clone()), next);
        info!(%requester, %recipient, "friend request recorded");
        Ok(())
    }

    async fn accept_request(&self, recipient: &UserId, requester: &UserId) -> Result<(), Error> {
        let mut requests = self.lock()?;
        if undirected_status(&requests, recipient, requester) == FriendRequestStatus::Accepted {
            return Err(map_transition_error(FriendTransitionError::AlreadyFriends));
        }
        let next = directed_status(&requests, requester, recipient)
            .accept()
            .map_err(map_transition_error)?;
        requests.insert((requester.clone(), recipient.clone()), next);
        info!(%requester, %recipient, "friend request accepted");
        Ok(())
    }

    async fn pending_requests(&self, recipient: &UserId) -> Result<Vec<FriendRequest>, Error> {
        let requests = self.lock()?;
        let mut pending: Vec<FriendRequest> = requests
            .iter()
            .filter(|((_, to), status)| {
                to == recipient && **status == FriendRequestStatus::Requested
            })
            .map(|((from, _), status)| FriendRequest {
                requester_id: from.clone(),
                status: *status,
            })
            .collect();
        pending.sort_by(|a, b| a.requester_id.as_str().cmp(b.requester_id.as_str()));
        debug!(%recipient, count = pending.len(), "listed pending friend requests");
        Ok(pending)
    }
}

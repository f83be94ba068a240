//! User search and friend-request store.
//!
//! Methods take `&self` so a view can run several searches at once. State
//! sits behind a mutex that is never held across an `.await`; every search
//! is tagged with a sequence number and only the newest one may write its
//! results.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::debounce::Debouncer;
use super::notifier::ChangeNotifier;
use crate::domain::friendship::{FriendRequest, FriendTransitionError, UserSearchOverview};
use crate::domain::ports::{FriendService, ServiceResult};
use crate::domain::user::UserId;

#[derive(Debug, Default)]
struct SearchState {
    input: String,
    overviews: Vec<UserSearchOverview>,
    search_error_message: Option<String>,
    friend_error_message: Option<String>,
    latest_search: u64,
    sends_in_flight: HashSet<UserId>,
}

/// State and actions behind the users page.
pub struct FriendStore {
    viewer: UserId,
    friend_service: Arc<dyn FriendService>,
    state: Mutex<SearchState>,
    debouncer: Debouncer,
    changes: ChangeNotifier,
}

impl FriendStore {
    /// Build a store for `viewer` with the default search debounce.
    pub fn new(viewer: UserId, friend_service: Arc<dyn FriendService>) -> Self {
        Self::with_debouncer(viewer, friend_service, Debouncer::default())
    }

    /// Build a store whose [`FriendStore::search`] waits `delay`.
    pub fn with_debounce(
        viewer: UserId,
        friend_service: Arc<dyn FriendService>,
        delay: Duration,
    ) -> Self {
        Self::with_debouncer(viewer, friend_service, Debouncer::new(delay))
    }

    fn with_debouncer(
        viewer: UserId,
        friend_service: Arc<dyn FriendService>,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            viewer,
            friend_service,
            state: Mutex::new(SearchState::default()),
            debouncer,
            changes: ChangeNotifier::new(),
        }
    }

    /// The signed-in user the search runs on behalf of.
    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }

    pub fn search_user_input(&self) -> String {
        self.state().input.clone()
    }

    pub fn user_search_overviews(&self) -> Vec<UserSearchOverview> {
        self.state().overviews.clone()
    }

    pub fn search_error_message(&self) -> Option<String> {
        self.state().search_error_message.clone()
    }

    /// Error from the last send or accept action.
    pub fn friend_error_message(&self) -> Option<String> {
        self.state().friend_error_message.clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Store the search input. Whitespace-only input becomes empty.
    pub fn change_search_user_input(&self, input: &str) {
        let input = if input.trim().is_empty() {
            String::new()
        } else {
            input.to_owned()
        };
        self.state().input = input;
        self.changes.notify();
    }

    /// Search for the current input.
    ///
    /// Empty input clears the results without touching the network. A
    /// response is applied only if no newer search started while it was in
    /// flight.
    pub async fn find_user_by_name(&self) {
        let (ticket, input) = {
            let mut state = self.state();
            state.latest_search += 1;
            if state.input.is_empty() {
                state.overviews.clear();
                state.search_error_message = None;
                drop(state);
                self.changes.notify();
                return;
            }
            (state.latest_search, state.input.clone())
        };

        let outcome = self
            .friend_service
            .find_users_by_name(&self.viewer, &input)
            .await;

        {
            let mut state = self.state();
            if state.latest_search != ticket {
                debug!(query = %input, "discarding stale search response");
                return;
            }
            match outcome {
                Ok(overviews) => {
                    debug!(query = %input, count = overviews.len(), "search applied");
                    state.overviews = overviews;
                    state.search_error_message = None;
                }
                Err(error) => {
                    warn!(query = %input, error = %error, "user search failed");
                    state.overviews.clear();
                    state.search_error_message = Some(error.to_string());
                }
            }
        }
        self.changes.notify();
    }

    /// Debounced search entry point.
    ///
    /// Returns `false` when a newer call arrived during the delay and this one
    /// was dropped.
    pub async fn search(&self, input: impl Into<String>) -> bool {
        let input = input.into();
        if !self.debouncer.settle().await {
            return false;
        }
        self.change_search_user_input(&input);
        self.find_user_by_name().await;
        true
    }

    /// Send a request to a user listed in the current results.
    ///
    /// Only users whose status is `NONE` can be asked; on success their
    /// overview moves to `REQUESTED`. A send to a user whose previous send
    /// has not finished is rejected as already pending.
    pub async fn send_friend_request(&self, user_id: &UserId) {
        let next = {
            let mut state = self.state();
            let current = state
                .overviews
                .iter()
                .find(|overview| &overview.id == user_id)
                .map(|overview| overview.request_history);
            let next = match current {
                Some(_) if state.sends_in_flight.contains(user_id) => {
                    Err(FriendTransitionError::AlreadyRequested.to_string())
                }
                Some(status) => status.send_request().map_err(|error| error.to_string()),
                None => Err(format!("user {user_id} is not in the search results")),
            };
            state.friend_error_message = next.as_ref().err().cloned();
            match next {
                Ok(next) => {
                    state.sends_in_flight.insert(user_id.clone());
                    next
                }
                Err(_) => {
                    drop(state);
                    self.changes.notify();
                    return;
                }
            }
        };

        let outcome = self
            .friend_service
            .send_friend_request(&self.viewer, user_id)
            .await;

        {
            let mut state = self.state();
            state.sends_in_flight.remove(user_id);
            match outcome {
                Ok(()) => {
                    info!(viewer = %self.viewer, friend = %user_id, "friend request sent");
                    if let Some(overview) = state
                        .overviews
                        .iter_mut()
                        .find(|overview| &overview.id == user_id)
                    {
                        overview.request_history = next;
                    }
                }
                Err(error) => {
                    warn!(friend = %user_id, error = %error, "friend request failed");
                    state.friend_error_message = Some(error.to_string());
                }
            }
        }
        self.changes.notify();
    }

    /// Accept the pending request from `friend_id`, then refresh the results.
    pub async fn accept_friend_request(&self, friend_id: &UserId) {
        let outcome = self
            .friend_service
            .accept_friend_request(&self.viewer, friend_id)
            .await;
        match outcome {
            Ok(()) => {
                info!(viewer = %self.viewer, friend = %friend_id, "friend request accepted");
                self.state().friend_error_message = None;
                self.find_user_by_name().await;
            }
            Err(error) => {
                warn!(friend = %friend_id, error = %error, "accepting friend request failed");
                self.state().friend_error_message = Some(error.to_string());
                self.changes.notify();
            }
        }
    }

    /// Pending requests addressed to the viewer.
    pub async fn friend_requests(&self) -> ServiceResult<Vec<FriendRequest>> {
        self.friend_service.list_friend_requests(&self.viewer).await
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! User search page.

use crate::domain::friendship::{FriendButton, UserSearchOverview};
use crate::domain::user::{UserId, UserStatus};
use crate::stores::FriendStore;

/// Thumbnail shown for users without a profile image.
pub const DEFAULT_THUMBNAIL_URL: &str = "/images/default-profile.png";

/// One search result as rendered in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub id: UserId,
    pub name: String,
    pub introduce: String,
    pub thumbnail_url: String,
    pub status: UserStatus,
    pub button: FriendButton,
}

impl From<UserSearchOverview> for UserCard {
    fn from(overview: UserSearchOverview) -> Self {
        let button = overview.friend_button();
        Self {
            id: overview.id,
            name: overview.name,
            introduce: overview.introduce,
            thumbnail_url: overview
                .profile_image
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_THUMBNAIL_URL.to_owned()),
            status: overview.status,
            button,
        }
    }
}

/// Body of the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    /// The last search failed; the message replaces the grid.
    Error(String),
    Grid(Vec<UserCard>),
}

/// What the users page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPage {
    pub search_input: String,
    pub results: SearchResults,
    /// Error from the last friend action, shown as a notice.
    pub friend_error: Option<String>,
}

/// Decide the users page for the current store state.
pub fn users_page(store: &FriendStore) -> UsersPage {
    let results = match store.search_error_message() {
        Some(message) => SearchResults::Error(message),
        None => SearchResults::Grid(
            store
                .user_search_overviews()
                .into_iter()
                .map(UserCard::from)
                .collect(),
        ),
    };
    UsersPage {
        search_input: store.search_user_input(),
        results,
        friend_error: store.friend_error_message(),
    }
}

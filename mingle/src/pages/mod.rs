//! Page view-models.
//!
//! Each page is a pure function of store state (plus, for onboarding, the
//! authentication state) returning what should be rendered or where the
//! browser should navigate. Rendering itself belongs to the host UI.

pub mod users;
pub mod welcome;

pub use self::users::{DEFAULT_THUMBNAIL_URL, SearchResults, UserCard, UsersPage, users_page};
pub use self::welcome::{AuthState, HOME_PATH, LOGIN_PATH, WelcomeForm, WelcomePage, welcome_page};

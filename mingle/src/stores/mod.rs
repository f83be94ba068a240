//! Observable client stores.
//!
//! A store owns the editable state behind one page, exposes derived values
//! (such as validation messages) on demand, and drives the service ports for
//! multi-step actions. Every mutation bumps a revision that subscribers can
//! watch.

pub mod debounce;
pub mod friend;
pub mod notifier;
pub mod welcome;

pub use self::debounce::{DEFAULT_SEARCH_DEBOUNCE, Debouncer};
pub use self::friend::FriendStore;
pub use self::notifier::ChangeNotifier;
pub use self::welcome::WelcomeStore;

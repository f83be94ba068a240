//! Onboarding page.

use crate::domain::user::UserId;
use crate::stores::WelcomeStore;

/// Route of the sign-in page.
pub const LOGIN_PATH: &str = "/login";
/// Route the app lands on once onboarding succeeds.
pub const HOME_PATH: &str = "/";

/// Authentication as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The provider has not answered yet.
    Loading,
    SignedOut,
    SignedIn(UserId),
}

/// Editable fields with their inline messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeForm {
    /// Uid passed to `WelcomeStore::create_user` on submit.
    pub uid: UserId,
    pub name: String,
    pub name_error: Option<String>,
    pub introduce: String,
    pub introduce_error: Option<String>,
    pub tags: String,
    pub tags_error: Option<String>,
    pub profile_image_error: Option<String>,
    /// Page-level failure from the last submission.
    pub error_message: Option<String>,
}

/// What the onboarding page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomePage {
    Loading,
    Redirect(&'static str),
    Form(WelcomeForm),
}

/// Decide the onboarding page for the current auth and store state.
///
/// # Examples
/// ```
/// use mingle::pages::{AuthState, WelcomePage, welcome_page, LOGIN_PATH};
/// # use std::sync::Arc;
/// # use async_trait::async_trait;
/// # use mingle::domain::{ProfileImage, UserId};
/// # use mingle::domain::ports::{NewUser, ServiceResult, UserService};
/// # use mingle::stores::WelcomeStore;
/// # struct Offline;
/// # #[async_trait]
/// # impl UserService for Offline {
/// #     async fn is_exist_user(&self, _: &UserId) -> ServiceResult<bool> { Ok(false) }
/// #     async fn create_user(&self, _: &NewUser) -> ServiceResult<()> { Ok(()) }
/// #     async fn upload_profile_image(&self, _: &UserId, _: &ProfileImage) -> ServiceResult<String> {
/// #         Ok(String::new())
/// #     }
/// # }
/// let store = WelcomeStore::new(Arc::new(Offline));
/// assert_eq!(
///     welcome_page(&AuthState::SignedOut, &store),
///     WelcomePage::Redirect(LOGIN_PATH)
/// );
/// ```
pub fn welcome_page(auth: &AuthState, store: &WelcomeStore) -> WelcomePage {
    let uid = match auth {
        AuthState::Loading => return WelcomePage::Loading,
        AuthState::SignedOut => return WelcomePage::Redirect(LOGIN_PATH),
        AuthState::SignedIn(uid) => uid,
    };
    if store.success_to_create() {
        return WelcomePage::Redirect(HOME_PATH);
    }
    WelcomePage::Form(WelcomeForm {
        uid: uid.clone(),
        name: store.name().to_owned(),
        name_error: store.name_error_message(),
        introduce: store.introduce().to_owned(),
        introduce_error: store.introduce_error_message(),
        tags: store.tags().to_owned(),
        tags_error: store.tags_error_message(),
        profile_image_error: store.profile_image_error_message(),
        error_message: store.error_message().map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockUserService, ServiceError};
    use rstest::{fixture, rstest};

    fn uid() -> UserId {
        UserId::new("firebase-uid-1").expect("valid uid")
    }

    #[fixture]
    fn store() -> WelcomeStore {
        WelcomeStore::new(Arc::new(MockUserService::new()))
    }

    #[rstest]
    fn loading_auth_shows_loading(store: WelcomeStore) {
        assert_eq!(welcome_page(&AuthState::Loading, &store), WelcomePage::Loading);
    }

    #[rstest]
    fn signed_out_users_go_to_login(store: WelcomeStore) {
        assert_eq!(
            welcome_page(&AuthState::SignedOut, &store),
            WelcomePage::Redirect("/login")
        );
    }

    #[rstest]
    fn form_carries_values_and_touched_errors(mut store: WelcomeStore) {
        store.change_name("A");
        store.change_tags("rust go");

        let WelcomePage::Form(form) = welcome_page(&AuthState::SignedIn(uid()), &store) else {
            panic!("expected the form");
        };
        assert_eq!(form.uid, uid());
        assert_eq!(form.name, "A");
        assert_eq!(
            form.name_error.as_deref(),
            Some("name must be at least 2 characters")
        );
        assert_eq!(form.tags, "rust go");
        assert!(form.tags_error.is_none());
        assert!(form.introduce_error.is_none());
        assert!(form.error_message.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn created_user_redirects_home() {
        let mut service = MockUserService::new();
        service.expect_create_user().returning(|_| Ok(()));
        let mut store = WelcomeStore::new(Arc::new(service));
        store.change_name("Ada");
        store.create_user(&uid()).await;

        assert_eq!(
            welcome_page(&AuthState::SignedIn(uid()), &store),
            WelcomePage::Redirect("/")
        );
        // Auth still wins while it is loading.
        assert_eq!(welcome_page(&AuthState::Loading, &store), WelcomePage::Loading);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_creation_stays_on_the_form() {
        let mut service = MockUserService::new();
        service
            .expect_create_user()
            .returning(|_| Err(ServiceError::rejected(500, "database unavailable")));
        let mut store = WelcomeStore::new(Arc::new(service));
        store.create_user(&uid()).await;

        let WelcomePage::Form(form) = welcome_page(&AuthState::SignedIn(uid()), &store) else {
            panic!("expected the form");
        };
        assert_eq!(form.error_message.as_deref(), Some("database unavailable"));
    }
}

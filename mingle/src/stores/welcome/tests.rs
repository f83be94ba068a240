//! Tests for the onboarding store.

use super::*;
use crate::domain::ports::{MockUserService, ServiceError};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then};

fn uid() -> UserId {
    UserId::new("firebase-uid-1").expect("valid uid")
}

#[fixture]
fn png() -> ProfileImage {
    ProfileImage::new("me.png", "image/png", vec![1, 2, 3])
}

fn store_with(service: MockUserService) -> WelcomeStore {
    WelcomeStore::new(Arc::new(service))
}

#[rstest]
fn untouched_fields_report_no_errors() {
    let store = store_with(MockUserService::new());

    // Empty name and empty tags are both invalid, but nothing was edited yet.
    assert!(store.name_error_message().is_none());
    assert!(store.introduce_error_message().is_none());
    assert!(store.tags_error_message().is_none());
    assert!(store.profile_image_error_message().is_none());
}

#[rstest]
#[case("Ada", None)]
#[case("", Some("name must not be empty"))]
#[case("A", Some("name must be at least 2 characters"))]
fn touched_name_reports_validator_outcome(#[case] name: &str, #[case] expected: Option<&str>) {
    let mut store = store_with(MockUserService::new());
    store.change_name(name);
    assert_eq!(store.name_error_message().as_deref(), expected);
}

#[rstest]
#[case("rust go", None)]
#[case("", Some("tags must not be blank"))]
#[case("rust rust", Some("tag 'rust' is repeated"))]
fn touched_tags_report_validator_outcome(#[case] tags: &str, #[case] expected: Option<&str>) {
    let mut store = store_with(MockUserService::new());
    store.change_tags(tags);
    assert_eq!(store.tags_error_message().as_deref(), expected);
}

#[rstest]
fn touched_introduce_and_image_report_validator_outcome(mut png: ProfileImage) {
    let mut store = store_with(MockUserService::new());
    store.change_introduce("x".repeat(101));
    assert_eq!(
        store.introduce_error_message().as_deref(),
        Some("introduction must be at most 100 characters")
    );

    store.change_profile_image(png.clone());
    assert!(store.profile_image_error_message().is_none());

    png.content_type = "text/plain".to_owned();
    store.change_profile_image(png);
    assert!(store.profile_image_error_message().is_some());
}

#[rstest]
fn changes_notify_subscribers() {
    let mut store = store_with(MockUserService::new());
    let receiver = store.subscribe();

    store.change_name("Ada");
    store.change_tags("rust");

    assert!(receiver.has_changed().expect("store alive"));
    assert_eq!(*receiver.borrow(), 2);
}

#[rstest]
#[tokio::test]
async fn upload_failure_skips_user_creation(png: ProfileImage) {
    let mut service = MockUserService::new();
    service
        .expect_upload_profile_image()
        .times(1)
        .returning(|_, _| Err(ServiceError::rejected(413, "image too large")));
    service.expect_create_user().never();

    let mut store = store_with(service);
    store.change_profile_image(png);
    store.create_user(&uid()).await;

    assert_eq!(store.error_message(), Some("image too large"));
    assert!(!store.success_to_create());
}

#[rstest]
#[tokio::test]
async fn uploaded_url_is_sent_with_the_profile(png: ProfileImage) {
    let mut service = MockUserService::new();
    service
        .expect_upload_profile_image()
        .withf(|uid, image| uid.as_str() == "firebase-uid-1" && image.file_name == "me.png")
        .times(1)
        .returning(|_, _| Ok("https://cdn.example/u/1.png".to_owned()));
    service
        .expect_create_user()
        .withf(|user| {
            user.profile_image_url.as_deref() == Some("https://cdn.example/u/1.png")
                && user.tags == vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut store = store_with(service);
    store.change_profile_image(png);
    store.change_name("Ada");
    store.change_tags("a b c");
    store.create_user(&uid()).await;

    assert!(store.success_to_create());
    assert!(store.error_message().is_none());
}

#[rstest]
#[tokio::test]
async fn untouched_tags_are_sent_as_single_empty_tag() {
    let mut service = MockUserService::new();
    service.expect_upload_profile_image().never();
    service
        .expect_create_user()
        .withf(|user| user.tags == vec![String::new()] && user.profile_image_url.is_none())
        .times(1)
        .returning(|_| Ok(()));

    let mut store = store_with(service);
    store.change_name("Ada");
    store.create_user(&uid()).await;

    assert!(store.success_to_create());
}

#[rstest]
#[tokio::test]
async fn success_flag_is_raised_once() {
    let mut service = MockUserService::new();
    service.expect_create_user().times(2).returning(|_| Ok(()));

    let mut store = store_with(service);
    let mut receiver = store.subscribe();
    store.create_user(&uid()).await;
    assert!(store.success_to_create());
    let _seen = *receiver.borrow_and_update();

    store.create_user(&uid()).await;
    assert!(store.success_to_create());
    assert!(!receiver.has_changed().expect("store alive"));
}

#[rstest]
#[tokio::test]
async fn retry_clears_previous_error() {
    let mut service = MockUserService::new();
    let mut attempts = 0;
    service.expect_create_user().times(2).returning(move |_| {
        attempts += 1;
        if attempts == 1 {
            Err(ServiceError::transport("connection refused"))
        } else {
            Ok(())
        }
    });

    let mut store = store_with(service);
    store.create_user(&uid()).await;
    assert_eq!(store.error_message(), Some("connection refused"));

    store.create_user(&uid()).await;
    assert!(store.error_message().is_none());
    assert!(store.success_to_create());
}

#[given("a store whose user creation is rejected")]
fn a_store_whose_user_creation_is_rejected() -> WelcomeStore {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .returning(|_| Err(ServiceError::rejected(409, "user already exists")));
    store_with(service)
}

async fn the_user_submits_the_form(mut store: WelcomeStore) -> WelcomeStore {
    store.change_name("Ada");
    store.create_user(&uid()).await;
    store
}

#[then("the server message is shown and the page stays")]
fn the_server_message_is_shown(store: &WelcomeStore) {
    assert_eq!(store.error_message(), Some("user already exists"));
    assert!(!store.success_to_create());
}

#[rstest]
#[tokio::test]
async fn rejected_creation_surfaces_server_message() {
    let store = a_store_whose_user_creation_is_rejected();
    let store = the_user_submits_the_form(store).await;
    the_server_message_is_shown(&store);
}

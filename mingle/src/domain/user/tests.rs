//! Tests for user identity and profile field validators.

use super::*;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

#[fixture]
fn png_image() -> ProfileImage {
    ProfileImage::new("me.png", "image/png", vec![0x89, b'P', b'N', b'G'])
}

#[rstest]
#[case("uid-123")]
#[case("Xk2fA9bQ0mZ")]
fn user_id_accepts_provider_identifiers(#[case] raw: &str) {
    let id = UserId::new(raw).expect("valid id");
    assert_eq!(id.as_str(), raw);
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case(" uid", UserValidationError::InvalidId)]
#[case("a/b", UserValidationError::InvalidId)]
fn user_id_rejects_malformed_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_deserialisation_validates() {
    let ok: UserId = serde_json::from_str("\"abc\"").expect("valid id");
    assert_eq!(ok.as_str(), "abc");
    assert!(serde_json::from_str::<UserId>("\"\"").is_err());
}

#[rstest]
fn name_accepts_boundaries() {
    assert!(validate_user_name(&"a".repeat(USER_NAME_MIN)).is_ok());
    assert!(validate_user_name(&"a".repeat(USER_NAME_MAX)).is_ok());
}

#[rstest]
#[case("   ", UserValidationError::EmptyName)]
#[case("a", UserValidationError::NameTooShort { min: USER_NAME_MIN })]
#[case(&"a".repeat(USER_NAME_MAX + 1), UserValidationError::NameTooLong { max: USER_NAME_MAX })]
fn name_rejects_out_of_bounds(#[case] name: &str, #[case] expected: UserValidationError) {
    assert_eq!(validate_user_name(name), Err(expected));
}

#[rstest]
fn name_counts_characters_not_bytes() {
    assert!(validate_user_name("김철수").is_ok());
}

#[rstest]
fn introduce_allows_empty_and_limits_length() {
    assert!(validate_user_introduce("").is_ok());
    assert!(validate_user_introduce(&"x".repeat(INTRODUCE_MAX)).is_ok());
    assert_eq!(
        validate_user_introduce(&"x".repeat(INTRODUCE_MAX + 1)),
        Err(UserValidationError::IntroduceTooLong { max: INTRODUCE_MAX })
    );
}

#[rstest]
#[case("a b c", vec!["a", "b", "c"])]
#[case("", vec![""])]
#[case("rust  go", vec!["rust", "", "go"])]
#[case(" lead", vec!["", "lead"])]
fn split_tags_splits_on_single_spaces(#[case] raw: &str, #[case] expected: Vec<&str>) {
    assert_eq!(split_tags(raw), expected);
}

#[rstest]
fn tags_accept_well_formed_list() {
    assert!(validate_user_tags(&split_tags("rust go_lang 코딩")).is_ok());
}

#[rstest]
#[case("", UserValidationError::EmptyTag)]
#[case("a  b", UserValidationError::EmptyTag)]
#[case("a b c d e f", UserValidationError::TooManyTags { max: TAGS_MAX })]
#[case("abcdefghijk", UserValidationError::TagTooLong { max: TAG_MAX })]
#[case("c++", UserValidationError::TagInvalidCharacters)]
#[case("rust rust", UserValidationError::DuplicateTag { tag: "rust".to_owned() })]
fn tags_reject_malformed_lists(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(validate_user_tags(&split_tags(raw)), Err(expected));
}

#[rstest]
fn profile_image_accepts_supported_types(png_image: ProfileImage) {
    assert!(validate_user_profile_image(&png_image).is_ok());
}

#[rstest]
fn profile_image_rejects_unsupported_type(mut png_image: ProfileImage) {
    png_image.content_type = "application/pdf".to_owned();
    assert!(matches!(
        validate_user_profile_image(&png_image),
        Err(UserValidationError::UnsupportedImageType { content_type }) if content_type == "application/pdf"
    ));
}

#[rstest]
fn profile_image_rejects_empty_and_oversized_files(mut png_image: ProfileImage) {
    png_image.bytes.clear();
    assert_eq!(
        validate_user_profile_image(&png_image),
        Err(UserValidationError::EmptyImage)
    );

    png_image.bytes = vec![0; PROFILE_IMAGE_MAX_BYTES + 1];
    assert_eq!(
        validate_user_profile_image(&png_image),
        Err(UserValidationError::ImageTooLarge {
            max_bytes: PROFILE_IMAGE_MAX_BYTES
        })
    );
}

#[rstest]
fn validation_messages_are_descriptive() {
    assert_eq!(
        UserValidationError::NameTooShort { min: 2 }.to_string(),
        "name must be at least 2 characters"
    );
    assert_eq!(
        UserValidationError::DuplicateTag {
            tag: "rust".to_owned()
        }
        .to_string(),
        "tag 'rust' is repeated"
    );
}

#[rstest]
#[case("\"ONLINE\"", UserStatus::Online)]
#[case("\"OFFLINE\"", UserStatus::Offline)]
#[case("\"IN_GAME\"", UserStatus::Unknown)]
fn user_status_decodes_known_and_unknown_values(#[case] raw: &str, #[case] expected: UserStatus) {
    let status: UserStatus = serde_json::from_str(raw).expect("status");
    assert_eq!(status, expected);
}

#[given("a raw tags input with an empty token")]
fn a_raw_tags_input_with_an_empty_token() -> &'static str {
    "rust "
}

#[when("the tags are split")]
fn the_tags_are_split(raw: &'static str) -> Vec<String> {
    split_tags(raw)
}

#[then("the empty token is kept and rejected by validation")]
fn the_empty_token_is_kept_and_rejected(tags: Vec<String>) {
    assert_eq!(tags, vec!["rust".to_owned(), String::new()]);
    assert_eq!(validate_user_tags(&tags), Err(UserValidationError::EmptyTag));
}

#[rstest]
fn empty_tokens_are_not_filtered() {
    let raw = a_raw_tags_input_with_an_empty_token();
    let tags = the_tags_are_split(raw);
    the_empty_token_is_kept_and_rejected(tags);
}

use super::*;

#[test]
fn unknown_role_warning_names_the_user() {
    assert_eq!(
        unknown_role_warning("u42"),
        "user u42 is authenticated but has no recognized role; redirecting to login"
    );
}

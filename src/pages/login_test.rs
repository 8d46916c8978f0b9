use super::*;

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Log In");
    assert_eq!(submit_label(true), "Logging in...");
}

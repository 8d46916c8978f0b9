use super::*;

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Sign Up");
    assert_eq!(submit_label(true), "Creating...");
}

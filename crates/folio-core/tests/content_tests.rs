// Host-side tests for the static content tables and contact submissions.

use folio_core::content::{ContactSubmission, FORM_FIELDS, PROJECTS, SOCIAL_LINKS};

#[test]
fn submission_logs_named_values_in_form_order() {
    let mut s = ContactSubmission::new();
    s.push("name", "Ada");
    s.push("email", "ada@example.com");
    s.push("", "Send Message");
    s.push("message", "hello \"there\"\nbye");
    assert_eq!(s.len(), 3);
    assert_eq!(s.get("email"), Some("ada@example.com"));
    assert_eq!(s.get(""), None);
    assert_eq!(
        s.to_string(),
        r#"{name: "Ada", email: "ada@example.com", message: "hello \"there\"\nbye"}"#
    );
}

#[test]
fn repeated_name_keeps_latest_value() {
    let mut s = ContactSubmission::new();
    s.push("name", "A");
    s.push("name", "B");
    assert_eq!(s.len(), 1);
    assert_eq!(s.to_string(), r#"{name: "B"}"#);
}

#[test]
fn empty_form_renders_braces() {
    let s = ContactSubmission::new();
    assert!(s.is_empty());
    assert_eq!(s.to_string(), "{}");
}

#[test]
fn content_tables_are_ordered() {
    assert!(PROJECTS.windows(2).all(|w| w[1].id == w[0].id + 1));
    assert!(FORM_FIELDS.windows(2).all(|w| w[1].y < w[0].y));
    assert!(SOCIAL_LINKS.windows(2).all(|w| w[1].y < w[0].y));
    assert_eq!(FORM_FIELDS[1].name, "Email");
}

use super::*;

#[test]
fn valid_submission_is_accepted() {
    let resp = handle_contact(r#"{"email":"a@b.org","message":"hello"}"#);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body(), json!({ "success": true }));
}

#[test]
fn missing_or_blank_fields_are_400() {
    for body in [
        r#"{"email":"a@b.org"}"#,
        r#"{"message":"hi"}"#,
        r#"{"email":"   ","message":"hi"}"#,
        r#"{"email":"a@b.org","message":""}"#,
        r#"{"email":7,"message":"hi"}"#,
        r#"[]"#,
    ] {
        let resp = handle_contact(body);
        assert_eq!(resp.status, 400, "body: {body}");
        assert_eq!(
            resp.body(),
            json!({ "error": "Email and message are required" })
        );
    }
}

#[test]
fn malformed_json_is_500() {
    for body in ["{not json", "", "null"] {
        let resp = handle_contact(body);
        assert_eq!(resp.status, 500, "body: {body:?}");
        assert_eq!(
            resp.body(),
            json!({ "error": "Failed to process contact form" })
        );
    }
}

#[test]
fn reply_parses_back() {
    assert_eq!(
        ContactReply::from_json(&json!({ "success": true })).unwrap(),
        ContactReply::Success
    );
    assert_eq!(
        ContactReply::from_json(&json!({ "error": "nope" })).unwrap(),
        ContactReply::Error("nope".to_string())
    );
    assert!(ContactReply::from_json(&json!({ "ok": 1 })).is_err());
}

#[test]
fn mailto_encodes_subject_and_body() {
    let cfg = ContactConfig::default();
    let sub = ContactSubmission::new(" a@b.org ", "Hi there\nbye").unwrap();
    assert_eq!(
        cfg.mailto_url(&sub),
        "mailto:centerforrisc@gmail.com?subject=RISC%20website%20contact\
         &body=From%3A%20a%40b.org%0A%0AHi%20there%0Abye"
    );
}

#[test]
fn submission_keeps_text_as_typed() {
    let sub = ContactSubmission::new("x@y.z", "first line\nsecond line\n").unwrap();
    assert_eq!(sub.email, "x@y.z");
    assert_eq!(sub.message, "first line\nsecond line\n");
    assert!(ContactSubmission::new("", "m").is_err());
    assert!(ContactSubmission::new("x@y.z", " \n\t").is_err());
}

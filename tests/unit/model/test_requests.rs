use assert_json_diff::assert_json_eq;
use kwork_client::prelude::*;
use reqwest::Method;
use serde_json::json;

#[test]
fn test_request_context_serializes_redacted() {
    let params = vec![
        ("login".to_string(), "tester".to_string()),
        ("password".to_string(), "hunter2".to_string()),
        ("phone_last".to_string(), "1234".to_string()),
    ];
    let context = RequestContext::new(&Method::POST, "https://api.kwork.ru/signIn", &params);

    assert_json_eq!(
        serde_json::to_value(&context).unwrap(),
        json!({
            "method": "POST",
            "url": "https://api.kwork.ru/signIn",
            "params": [["login", "tester"], ["password", "***"], ["phone_last", "1234"]]
        })
    );
    assert_eq!(
        context.params_display(),
        "{login: tester, password: ***, phone_last: 1234}"
    );
}

#[test]
fn test_with_page_keeps_template_untouched() {
    let template = RequestDescriptor::post("inboxes").param("username", "buyer");
    let second = template.with_page(2);

    assert_eq!(template.get("page"), None);
    assert_eq!(second.get("page"), Some("2"));
    assert_eq!(second.get("username"), Some("buyer"));
}

#[test]
fn test_projects_request_serializes_filter() {
    let request = ProjectsRequest::new([41])
        .hiring_from(50)
        .offers_range(None, Some(10))
        .page(2);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "categories": [41],
            "price_from": null,
            "price_to": null,
            "hiring_from": 50,
            "kworks_filter_from": null,
            "kworks_filter_to": 10,
            "page": 2,
            "query": null
        })
    );

    let descriptor = request.to_descriptor().unwrap();
    assert_eq!(descriptor.get("hiring_from"), Some("50"));
    assert_eq!(descriptor.get("kworks_filter_to"), Some("10"));
    assert_eq!(descriptor.get("page"), None);
}

#[test]
fn test_descriptor_from_parts() {
    let descriptor =
        RequestDescriptor::from_parts(Method::POST, Some("actor"), None).unwrap();
    assert_eq!(descriptor.target, Target::Endpoint("actor".to_string()));
    assert_eq!(descriptor.auth, AuthMode::Token);

    let err = RequestDescriptor::from_parts(Method::POST, None, None).unwrap_err();
    assert!(err.is_validation());
}

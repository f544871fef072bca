use api_base::{
    AdapterError, Api, ApiGatewayProxyRequest, ApiGatewayProxyResponse, Body, Bound, Request,
    Response, Unbound, with_body, with_headers, with_path_parameters,
};
use http::HeaderValue;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct First {
    first: String,
}

#[derive(Debug, Deserialize)]
struct Second {
    second: String,
}

#[derive(Debug, Deserialize)]
struct Tenant {
    #[serde(rename = "X-Tenant")]
    tenant: String,
}

#[derive(Debug, Deserialize)]
struct UserPath {
    user_id: String,
}

fn event() -> ApiGatewayProxyRequest {
    let mut event = ApiGatewayProxyRequest::default();
    event.body = Some("{\"second\":\"b\"}".to_string());
    event
        .headers
        .insert("x-tenant", HeaderValue::from_static("acme"));
    event.path_parameters = HashMap::from([("user_id".to_string(), "u-9".to_string())]);
    event
}

fn body_text(response: ApiGatewayProxyResponse) -> String {
    match response.body {
        Some(Body::Text(text)) => text,
        other => panic!("expected a text body, got {other:?}"),
    }
}

#[test]
fn test_later_body_binding_replaces_earlier() {
    let handler = Api::new()
        .with_body::<First>()
        .with_body::<Second>()
        .run(|req| Response::new(200).with_body(req.body().second.clone()));

    assert_eq!(body_text(handler.invoke(&event()).unwrap()), "b");
}

#[test]
fn test_options_applied_in_order() {
    let handler = Api::new()
        .apply(with_body::<First>())
        .apply(with_headers::<Tenant>())
        .apply(with_path_parameters::<UserPath>())
        .apply(with_body::<Second>())
        .run(|req| {
            let body = format!(
                "{}/{}/{}",
                req.headers().tenant,
                req.path_parameters().user_id,
                req.body().second
            );
            Response::new(200).with_body(body)
        });

    assert_eq!(body_text(handler.invoke(&event()).unwrap()), "acme/u-9/b");
}

#[test]
fn test_earlier_binding_would_have_failed() {
    // The body only fits `Second`, so binding `First` alone must fail
    let handler = Api::new()
        .with_body::<First>()
        .run(|_req| Response::new(200));

    assert!(matches!(
        handler.invoke(&event()).unwrap_err(),
        AdapterError::Body(_)
    ));
}

#[test]
fn test_request_decodes_outside_pipeline() {
    let event = event();
    let request: Request<'_, Unbound, Bound<Tenant>, Bound<UserPath>> =
        Request::from_event(&event).unwrap();

    let ((), headers, path) = request.into_parts();
    assert_eq!(headers.tenant, "acme");
    assert_eq!(path.user_id, "u-9");
}

#[test]
fn test_incompatible_binding_only_fails_at_decode_time() {
    #[derive(Debug, Deserialize)]
    struct NeedsNumber {
        _count: u8,
    }

    // Building never validates
    let api = Api::new().with_headers::<NeedsNumber>();
    let handler = api.run(|_req| Response::new(200));

    let mut event = ApiGatewayProxyRequest::default();
    event.headers.insert("_count", HeaderValue::from_static("3"));

    assert!(matches!(
        handler.invoke(&event).unwrap_err(),
        AdapterError::Headers(_)
    ));
}

#[test]
fn test_configuration_is_reusable() {
    let api = Api::new().with_path_parameters::<UserPath>();

    let upper = api.run(|req| Response::new(200).with_body(req.path_parameters().user_id.to_uppercase()));
    let lower = api.run(|req| Response::new(200).with_body(req.path_parameters().user_id.clone()));

    assert_eq!(body_text(upper.invoke(&event()).unwrap()), "U-9");
    assert_eq!(body_text(lower.invoke(&event()).unwrap()), "u-9");
}

#[test]
fn test_debug_names_bound_shapes() {
    let api = Api::new().with_body::<First>();
    let rendered = format!("{api:?}");

    assert!(rendered.contains("First"), "{rendered}");
    assert!(rendered.contains("Unbound"), "{rendered}");
}

mod harness;

use bistro_config::{AnyOrArray, CorsConfig};
use harness::config::ConfigBuilder;
use harness::server::TestServer;

fn header<'a>(resp: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn default_cors_allows_any_origin_with_credentials() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/"))
        .header("Origin", "https://diner.netlify.app")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "access-control-allow-origin"),
        Some("https://diner.netlify.app")
    );
    assert_eq!(header(&resp, "access-control-allow-credentials"), Some("true"));
}

#[tokio::test]
async fn default_cors_answers_preflight() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url("/scan-menu"))
        .header("Origin", "https://diner.netlify.app")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "x-custom-header")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(header(&resp, "access-control-allow-methods"), Some("POST"));
    assert_eq!(header(&resp, "access-control-allow-headers"), Some("x-custom-header"));
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let config = ConfigBuilder::new()
        .with_cors(CorsConfig {
            origins: AnyOrArray::List(vec!["http://example.com".to_owned()]),
            methods: AnyOrArray::Any,
            headers: AnyOrArray::Any,
            expose_headers: Vec::new(),
            credentials: false,
            max_age: Some(600),
        })
        .build();

    let server = TestServer::start(config).await.unwrap();

    let allowed = server
        .client()
        .get(server.url("/"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(header(&allowed, "access-control-allow-origin"), Some("http://example.com"));
    assert!(header(&allowed, "access-control-allow-credentials").is_none());

    let other = server
        .client()
        .get(server.url("/"))
        .header("Origin", "http://elsewhere.example")
        .send()
        .await
        .unwrap();
    assert_eq!(other.status(), 200);
    assert!(header(&other, "access-control-allow-origin").is_none());
}

#[tokio::test]
async fn cors_wildcard_without_credentials_sends_star() {
    let config = ConfigBuilder::new()
        .with_cors(CorsConfig {
            credentials: false,
            ..CorsConfig::permissive()
        })
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/"))
        .header("Origin", "http://anywhere.example")
        .send()
        .await
        .unwrap();

    assert_eq!(header(&resp, "access-control-allow-origin"), Some("*"));
}

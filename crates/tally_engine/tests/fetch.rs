use tally_engine::{FeedClient, FetchError, HttpFeedClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn returns_the_response_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Report": {}}"#))
        .mount(&server)
        .await;

    let client = HttpFeedClient::new(&format!("{}/summary.json", server.uri())).expect("valid url");
    let body = client.fetch().await.expect("fetch ok");

    assert_eq!(body, r#"{"Report": {}}"#);
}

#[tokio::test]
async fn fails_on_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HttpFeedClient::new(&format!("{}/summary.json", server.uri())).expect("valid url");
    let err = client.fetch().await.unwrap_err();

    assert_eq!(err, FetchError::HttpStatus(503));
}

#[tokio::test]
async fn fails_on_an_unreachable_host() {
    // Port 1 is never listening; a single attempt, no retry.
    let client = HttpFeedClient::new("http://127.0.0.1:1/summary.json").expect("valid url");
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "{err:?}");
}

#[test]
fn rejects_an_invalid_url() {
    let err = HttpFeedClient::new("not a url").unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)), "{err:?}");
}

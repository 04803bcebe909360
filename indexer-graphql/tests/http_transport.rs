//! Tests for the HTTP transport against a local server answering with canned
//! responses.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{b256, TxHash};
use indexer_graphql::http::GRAPHQL_RESPONSE_MEDIA_TYPE;
use indexer_graphql::{
    wait_for_indexed, GraphqlRequest, GraphqlTransport, HttpTransport, IndexerClient,
    IndexerError, WaitPolicy,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

const HASH: TxHash = b256!("5427daee8d03277f8a30ea881692c04861e692ce5f305b7a689b76248cae63c4");

/// Reads one request, headers and body.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Answers a single request with `status` and `body`, and hands back the raw
/// request.
async fn serve_once(status: &'static str, body: String) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/v1/graphql", listener.local_addr().unwrap())
        .parse()
        .unwrap();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });
    (url, handle)
}

/// Accepts connections and never answers.
async fn serve_nothing() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/v1/graphql", listener.local_addr().unwrap())
        .parse()
        .unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        loop {
            let (stream, _) = listener.accept().await.unwrap();
            open.push(stream);
        }
    });
    url
}

fn following_request() -> GraphqlRequest {
    GraphqlRequest::new(
        "Following",
        "query Following($address: String!) { following(args: { address: $address }) { id } }",
        json!({ "address": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8" }),
    )
}

#[tokio::test]
async fn test_posts_the_operation_with_the_graphql_accept_header() {
    let (url, server) = serve_once("200 OK", json!({ "data": { "following": [] } }).to_string()).await;
    let transport = HttpTransport::new(url).unwrap();

    let data = transport.execute(&following_request()).await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(data, json!({ "following": [] }));
    assert!(request.starts_with("POST /v1/graphql "));
    let lowered = request.to_lowercase();
    assert!(lowered.contains(&format!("accept: {GRAPHQL_RESPONSE_MEDIA_TYPE}")));
    assert!(request.contains(r#""operationName":"Following""#));
    assert!(request.contains("0x70997970c51812dc3a010c7d01b50e0d17dc79c8"));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (url, _server) = serve_once("500 Internal Server Error", "boom".to_string()).await;
    let transport = HttpTransport::new(url).unwrap();

    let err = transport.execute(&following_request()).await.unwrap_err();

    match err {
        IndexerError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_graphql_errors_in_a_200_are_an_error() {
    let body = json!({
        "data": null,
        "errors": [{ "message": "field 'following' not found in type: 'query_root'" }]
    });
    let (url, _server) = serve_once("200 OK", body.to_string()).await;
    let transport = HttpTransport::new(url).unwrap();

    let err = transport.execute(&following_request()).await.unwrap_err();

    match err {
        IndexerError::Query { operation, messages } => {
            assert_eq!(operation, "Following");
            assert_eq!(messages.len(), 1);
        }
        other => panic!("expected query error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wait_does_not_hang_on_a_stalled_indexer() {
    let url = serve_nothing().await;
    let transport = HttpTransport::with_timeout(url, Duration::from_millis(200)).unwrap();
    let client = IndexerClient::new(Arc::new(transport));
    let policy = WaitPolicy::new(Duration::from_millis(10), 2);

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        wait_for_indexed(&client, Some(HASH), &policy),
    )
    .await
    .expect("wait returned before the deadline");

    match outcome {
        Err(IndexerError::Http(err)) => assert!(err.is_timeout()),
        other => panic!("expected a request timeout, got {other:?}"),
    }
}

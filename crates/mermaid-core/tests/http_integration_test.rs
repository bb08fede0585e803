//! Integration tests for the HTTP path against a local socket.
//!
//! Each test stands up a one-shot TCP responder on 127.0.0.1 and points the
//! converter at it, so no request leaves the machine.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use mermaid_ink_core::{
    ConversionRequest, ConversionResult, ConverterConfig, DiagramConverter, Error,
};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one canned response and returns the raw request head.
async fn serve_once(status_line: &'static str, body: &'static [u8]) -> (String, JoinHandle<String>) {
    let mut reply = format!(
        "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    reply.extend_from_slice(body);
    serve_raw(reply).await
}

/// Answers one connection with `reply` verbatim, HTTP or not.
async fn serve_raw(reply: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        socket.write_all(&reply).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

fn converter_for(base_url: &str, timeout: Duration) -> DiagramConverter {
    let config = ConverterConfig::builder()
        .base_url(base_url)
        .timeout(timeout)
        .build();
    DiagramConverter::new(config).unwrap()
}

#[tokio::test]
async fn test_svg_round_trip_over_http() {
    let (base_url, server) = serve_once("200 OK", b"<svg>...</svg>").await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let result = converter
        .convert(&ConversionRequest::new("graph TD; A-->B").with_format("svg"))
        .await;

    let diagram = result.into_blob().expect("expected a payload");
    assert_eq!(diagram.mime_type, "image/svg+xml");
    assert_eq!(diagram.bytes, b"<svg>...</svg>");

    let request = server.await.unwrap();
    let expected_path = format!("/svg/{}", URL_SAFE.encode("graph TD; A-->B"));
    assert!(
        request.starts_with(&format!("GET {expected_path} HTTP/1.1\r\n")),
        "unexpected request head: {request}"
    );
}

#[tokio::test]
async fn test_raster_request_carries_query() {
    let (base_url, server) = serve_once("200 OK", b"\x89PNG").await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let request = ConversionRequest::new("graph LR; X-->Y")
        .with_theme("neutral")
        .with_background_color("#0A0B0C");
    let diagram = converter.render(&request).await.unwrap();
    assert_eq!(diagram.mime_type, "image/png");

    let head = server.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.contains("/img/"));
    assert!(request_line.contains("?type=png&theme=neutral&bgColor=0A0B0C "));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let (base_url, server) = serve_once("200 OK", b"<svg/>").await;
    let config = ConverterConfig::builder()
        .base_url(&base_url)
        .user_agent("diagram-bot/1.0")
        .build();
    let converter = DiagramConverter::new(config).unwrap();

    converter
        .render(&ConversionRequest::new("graph TD").with_format("svg"))
        .await
        .unwrap();

    let head = server.await.unwrap().to_ascii_lowercase();
    assert!(head.contains("user-agent: diagram-bot/1.0"));
}

#[tokio::test]
async fn test_bad_request_surfaces_body() {
    let (base_url, _server) = serve_once("400 Bad Request", b"Parse error on line 1").await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let result = converter.convert(&ConversionRequest::new("graph ???")).await;

    match result {
        ConversionResult::Error(message) => {
            assert!(message.contains("Invalid Mermaid syntax"));
            assert!(message.contains("Parse error on line 1"));
        }
        ConversionResult::Blob(_) => panic!("expected an error message"),
    }
}

#[tokio::test]
async fn test_payload_too_large() {
    let (base_url, _server) = serve_once("413 Payload Too Large", b"").await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let err = converter
        .render(&ConversionRequest::new("graph TD"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PayloadTooLarge));
}

#[tokio::test]
async fn test_server_error_status() {
    let (base_url, _server) = serve_once("503 Service Unavailable", b"busy").await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let err = converter
        .render(&ConversionRequest::new("graph TD"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UpstreamError { status: 503 }));
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept and hold the connection without ever answering.
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(socket);
    });

    let converter = converter_for(&format!("http://{addr}"), Duration::from_millis(200));
    let err = converter
        .render(&ConversionRequest::new("graph TD"))
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(err.to_string().contains("longer than 200ms"), "{err}");
}

#[tokio::test]
async fn test_malformed_response_is_request_error() {
    let (base_url, _server) = serve_raw(b"garbage\r\n\r\n".to_vec()).await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let err = converter
        .render(&ConversionRequest::new("graph TD"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, Error::RequestError { .. }),
        "expected request error, got {err:?}"
    );
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_malformed_response_message() {
    let (base_url, _server) = serve_raw(b"garbage\r\n\r\n".to_vec()).await;
    let converter = converter_for(&base_url, Duration::from_secs(5));

    let result = converter.convert(&ConversionRequest::new("graph TD")).await;
    let message = result.error_message().unwrap();
    assert!(message.starts_with("Request error:"), "{message}");
}

#[tokio::test]
async fn test_refused_connection_is_classified() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let converter = converter_for(&format!("http://{addr}"), Duration::from_secs(5));
    let err = converter
        .render(&ConversionRequest::new("graph TD"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::ConnectionFailure { ref endpoint, .. } if endpoint == "127.0.0.1"),
        "expected connection failure, got {err:?}"
    );
}

#[tokio::test]
async fn test_input_errors_never_connect() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let converter = converter_for(&format!("http://{addr}"), Duration::from_secs(5));

    let empty = converter.convert(&ConversionRequest::new("```mermaid\n```")).await;
    assert!(empty.error_message().unwrap().contains("cannot be empty"));

    let bad_format = converter
        .convert(&ConversionRequest::new("graph TD").with_format("bmp"))
        .await;
    assert!(bad_format.error_message().unwrap().contains("'bmp'"));

    let accepted = tokio::time::timeout(Duration::from_millis(100), listener.accept()).await;
    assert!(accepted.is_err(), "no connection should have been attempted");
}

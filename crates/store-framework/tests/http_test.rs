use bytes::Bytes;
use serde_json::{json, Map, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use store_framework::{
    ApiError, ApiRequest, HttpRealtimeChannel, HttpTransport, Method, RealtimeChannel,
    Transport, TransportConfig, Upload, UploadProgress,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

// --- Canned HTTP server ---

/// Accepts one connection, reads the whole request, answers with `response` verbatim
/// and hands the raw request back.
async fn serve_once(response: String) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (addr, handle)
}

fn response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 16 * 1024];
    while !request_complete(&buf) {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    buf
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
    let body = &buf[end + 4..];
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());
    match content_length {
        Some(len) => body.len() >= len,
        None if head.contains("transfer-encoding: chunked") => body.ends_with(b"0\r\n\r\n"),
        None => true,
    }
}

// --- HttpTransport ---

#[tokio::test]
async fn test_non_success_status_keeps_code_and_body() {
    let (addr, server) = serve_once(response("404 Not Found", "gone")).await;
    let transport = HttpTransport::new(format!("http://{addr}"));

    let result = transport
        .send(ApiRequest::new(Method::Get, "/api/units/9"))
        .await;

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "gone");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
    assert!(server.await.unwrap().starts_with("GET /api/units/9 HTTP/1.1"));
}

#[tokio::test]
async fn test_no_content_is_null() {
    let (addr, server) =
        serve_once("HTTP/1.1 204 No Content\r\nconnection: close\r\n\r\n".to_string()).await;
    let transport = HttpTransport::new(format!("http://{addr}/"));

    let value = transport
        .send(ApiRequest::new(Method::Delete, "/api/units/42"))
        .await
        .unwrap();

    assert_eq!(value, Value::Null);
    assert!(server.await.unwrap().starts_with("DELETE /api/units/42 HTTP/1.1"));
}

#[tokio::test]
async fn test_json_body_is_sent_and_decoded() {
    let (addr, server) = serve_once(response("201 Created", r#"{"id":1,"name":"XL"}"#)).await;
    let transport = HttpTransport::new(format!("http://{addr}"));

    let value = transport
        .send(ApiRequest::new(Method::Post, "/api/sizes").with_json(json!({ "name": "XL" })))
        .await
        .unwrap();

    assert_eq!(value, json!({ "id": 1, "name": "XL" }));
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/sizes HTTP/1.1"));
    assert!(request.ends_with(r#"{"name":"XL"}"#));
}

#[tokio::test]
async fn test_upload_reports_progress_per_chunk() {
    let (addr, server) = serve_once(response(
        "200 OK",
        r#"{"id":20,"unitId":3,"name":"photo.bin"}"#,
    ))
    .await;
    let transport = HttpTransport::new(format!("http://{addr}"));

    let progress = Arc::new(Mutex::new(Vec::<UploadProgress>::new()));
    let seen = progress.clone();
    let upload = Upload {
        file_name: "photo.bin".to_string(),
        content_type: "application/octet-stream".to_string(),
        bytes: Bytes::from(vec![7u8; 200_000]),
        fields: vec![("unitId".to_string(), "3".to_string())],
        config: TransportConfig::default()
            .header("x-upload-source", "tests")
            .on_progress(move |p| seen.lock().unwrap().push(p)),
    };

    let value = transport
        .send(ApiRequest::new(Method::Post, "/api/documents").with_upload(upload))
        .await
        .unwrap();
    assert_eq!(value["id"], 20);

    let sent: Vec<u64> = progress.lock().unwrap().iter().map(|p| p.sent).collect();
    assert_eq!(sent, vec![65_536, 131_072, 196_608, 200_000]);
    assert!(progress.lock().unwrap().iter().all(|p| p.total == 200_000));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/documents HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("x-upload-source: tests"));
    assert!(request.contains("name=\"unitId\""));
    assert!(request.contains("filename=\"photo.bin\""));
}

// --- HttpRealtimeChannel ---

fn message() -> Map<String, Value> {
    let mut document = Map::new();
    document.insert("text".to_string(), json!("hello"));
    document
}

#[tokio::test]
async fn test_realtime_append_posts_to_collection() {
    let (addr, server) = serve_once(response("200 OK", r#"{"name":"m1"}"#)).await;
    let channel = HttpRealtimeChannel::new(format!("http://{addr}/realtime/"));

    channel.append("messages", message()).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /realtime/messages HTTP/1.1"));
    assert!(request.ends_with(r#"{"text":"hello"}"#));
}

#[tokio::test]
async fn test_realtime_rejection_keeps_code_and_body() {
    let (addr, server) = serve_once(response("403 Forbidden", "read-only")).await;
    let channel = HttpRealtimeChannel::new(format!("http://{addr}/realtime"));

    match channel.append("messages", message()).await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "read-only");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
    server.await.unwrap();
}

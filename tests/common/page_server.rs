//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one canned response and closes the connection.
//! Without a `Content-Length` the body is delimited by the close.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// If false, omit `Content-Length` (simulates streamed responses).
    pub content_length: bool,
}

impl Page {
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type: Some("text/html; charset=utf-8".into()),
            body: body.into(),
            content_length: true,
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            content_type: Some("text/html".into()),
            body: format!("<html><body><h1>{status} {reason}</h1></body></html>").into_bytes(),
            content_length: true,
        }
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn without_content_length(mut self) -> Self {
        self.content_length = false;
        self
    }
}

/// Starts a server in a background thread serving `page`. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(page: Page) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let page = Arc::new(page);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let page = Arc::clone(&page);
            thread::spawn(move || handle(stream, &page));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// Starts a server that accepts connections but never answers.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A URL on a port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, page: &Page) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    // Read until the end of the request headers.
    let mut request = Vec::new();
    let mut buf = [0u8; 8192];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let mut head = format!("HTTP/1.1 {} {}\r\nConnection: close\r\n", page.status, page.reason);
    if let Some(content_type) = &page.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    if page.content_length {
        head.push_str(&format!("Content-Length: {}\r\n", page.body.len()));
    }
    head.push_str("\r\n");

    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&page.body);
    let _ = stream.flush();
    let _ = stream.shutdown(std::net::Shutdown::Write);
}

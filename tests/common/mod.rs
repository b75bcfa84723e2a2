//! Shared helpers: a one-shot HTTP server and Dockerfile fixtures.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Request line and headers seen by the mock server.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == lower)
            .map(|(_, v)| v.as_str())
    }
}

/// Start a server that answers exactly one request with `status` and `body`.
///
/// Returns the base URL and a receiver for the captured request.
pub fn spawn_one_shot_server(status: u16, body: &str) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{addr}");
    let (tx, rx) = mpsc::channel();

    let body = body.to_string();
    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("failed to accept");
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 {
                break;
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((k, v)) = line.split_once(':') {
                headers.push((k.trim().to_string(), v.trim().to_string()));
            }
        }

        let response = format!(
            "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let mut stream = stream;
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
        let _ = tx.send(CapturedRequest {
            method,
            path,
            headers,
        });
    });

    (url, rx)
}

/// Release payload shaped like GitHub's, trimmed to a few fields.
pub fn release_json(tag: &str) -> String {
    format!(r#"{{"url":"https://api.github.com/repos/openclaw/openclaw/releases/1","tag_name":"{tag}","name":"{tag}","draft":false,"prerelease":false}}"#)
}

pub fn dockerfile_text(pinned: &str) -> String {
    format!(
        "FROM node:22-bookworm AS build\n\
         ARG OPENCLAW_GIT_REF={pinned}\n\
         RUN git clone --depth 1 --branch \"${{OPENCLAW_GIT_REF}}\" https://github.com/openclaw/openclaw.git /openclaw\n"
    )
}

/// Write a Dockerfile pinning `pinned` into `dir` and return its path.
pub fn write_dockerfile(dir: &Path, pinned: &str) -> PathBuf {
    let path = dir.join("Dockerfile");
    std::fs::write(&path, dockerfile_text(pinned)).unwrap();
    path
}

//! Minimal scripted HTTP stub for tests that need to inspect raw request
//! bodies after the fact.
//!
//! Serves a fixed list of responses in order, one connection per request
//! (responses carry `connection: close`), and records every request it saw.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

/// Serve the given responses in order on a local port, recording each
/// request. Returns the base URL and a handle yielding the recorded requests
/// once every response has been served.
pub fn serve(responses: Vec<StubResponse>) -> (String, JoinHandle<Vec<RecordedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        let mut recorded = Vec::new();
        for response in responses {
            let (stream, _) = listener.accept().expect("accept");
            recorded.push(handle_connection(stream, &response));
        }
        recorded
    });

    (url, handle)
}

fn handle_connection(stream: TcpStream, response: &StubResponse) -> RecordedRequest {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut authorization = None;
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            match name.to_ascii_lowercase().as_str() {
                "authorization" => authorization = Some(value.trim().to_string()),
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).expect("request body");

    let reason = match response.status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        _ => "Error",
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    reader
        .get_mut()
        .write_all(payload.as_bytes())
        .expect("write response");

    RecordedRequest {
        method,
        path,
        authorization,
        body,
    }
}

//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with a fixed status and body, and records each
//! request line it sees so tests can assert on the method, path, and count.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServedResponse {
    pub status: u32,
    pub reason: &'static str,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOptions {
    /// Sleep this long after reading the request before answering.
    pub response_delay: Option<Duration>,
}

/// Handle to a running server: base URL plus what it has observed.
pub struct StatusServer {
    base_url: String,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl StatusServer {
    /// Full URL for `path` (e.g. "/demoEntities") on this server.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Request lines seen so far ("GET /demoEntities HTTP/1.1").
    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.request_lines.lock().unwrap().len()
    }
}

/// Starts a server in a background thread answering every request with
/// `response`. The server runs until the process exits.
pub fn start(response: ServedResponse) -> StatusServer {
    start_with_options(response, ServerOptions::default())
}

/// Like `start` but allows customizing server behavior (delayed answers).
pub fn start_with_options(response: ServedResponse, opts: ServerOptions) -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let request_lines = Arc::new(Mutex::new(Vec::new()));
    let server = StatusServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        request_lines: Arc::clone(&request_lines),
    };
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = response.clone();
            let request_lines = Arc::clone(&request_lines);
            thread::spawn(move || handle(stream, &response, opts, &request_lines));
        }
    });
    server
}

fn handle(
    mut stream: std::net::TcpStream,
    response: &ServedResponse,
    opts: ServerOptions,
    request_lines: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let first_line = request.lines().next().unwrap_or("").to_string();
    request_lines.lock().unwrap().push(first_line);

    if let Some(delay) = opts.response_delay {
        thread::sleep(delay);
    }

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

//! Minimal HTTP/1.1 server that mimics the log site for integration tests.
//!
//! Serves `/logs/page/{n}` with a canned status + body per page. Pages with
//! no entry answer 200 with an empty document. Every request line and its
//! User-Agent are recorded so tests can assert on what was asked for.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub path: String,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PageServer {
    pages: HashMap<u32, (u16, String)>,
}

/// Handle to a running server.
pub struct RunningServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl RunningServer {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// HTML page with one link paragraph per entry.
pub fn log_page(links: &[&str]) -> String {
    let mut html = String::from("<!DOCTYPE html><html><body><main>");
    for link in links {
        html.push_str(&format!(
            "<article><p class=\"line-clamp-3 hover:line-clamp-10\">\n  {link}\n</p>\
             <span class=\"text-xs\">2 minutes ago</span></article>"
        ));
    }
    html.push_str("</main></body></html>");
    html
}

impl PageServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, n: u32, links: &[&str]) -> Self {
        self.pages.insert(n, (200, log_page(links)));
        self
    }

    pub fn status(mut self, n: u32, status: u16) -> Self {
        self.pages.insert(n, (status, String::from("upstream error")));
        self
    }

    /// Starts the server in a background thread. It runs until the process exits.
    pub fn start(self) -> RunningServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let pages = Arc::new(self.pages);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_server = Arc::clone(&seen);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let pages = Arc::clone(&pages);
                let seen = Arc::clone(&seen_by_server);
                thread::spawn(move || handle(stream, &pages, &seen));
            }
        });
        RunningServer {
            base_url: format!("http://127.0.0.1:{port}"),
            seen,
        }
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    pages: &HashMap<u32, (u16, String)>,
    seen: &Mutex<Vec<SeenRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let parsed = parse_request(request);
    seen.lock().unwrap().push(parsed.clone());

    let page_no = parsed
        .path
        .strip_prefix("/logs/page/")
        .and_then(|rest| rest.split('?').next())
        .and_then(|n| n.parse::<u32>().ok());

    let (status, body) = match page_no {
        Some(n) => pages
            .get(&n)
            .cloned()
            .unwrap_or_else(|| (200, log_page(&[]))),
        None => (404, String::from("not found")),
    };
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\n\
Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn parse_request(request: &str) -> SeenRequest {
    let mut path = String::new();
    let mut user_agent = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if path.is_empty() {
            path = line.split_whitespace().nth(1).unwrap_or("").to_string();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim().to_string());
            }
        }
    }
    SeenRequest { path, user_agent }
}

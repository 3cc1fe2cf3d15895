//! Shared fixtures: a small REST Countries payload and a one-route HTTP server on loopback.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Four countries in three regions, with the field shapes the live API uses,
/// plus one entry missing almost everything.
pub const SAMPLE: &str = r#"
[
  {
    "name": {"common": "Germany", "official": "Federal Republic of Germany"},
    "region": "Europe",
    "population": 83240525,
    "area": 357114.0,
    "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"],
    "languages": {"deu": "German"},
    "timezones": ["UTC+01:00"]
  },
  {
    "name": {"common": "Japan"},
    "region": "Asia",
    "population": 125836021,
    "area": 377930.0,
    "languages": {"jpn": "Japanese"},
    "timezones": ["UTC+09:00"]
  },
  {
    "name": {"common": "Belgium"},
    "region": "Europe",
    "population": 11555997,
    "area": 30528.0,
    "borders": ["FRA", "DEU", "LUX", "NLD"],
    "languages": {"deu": "German", "fra": "French", "nld": "Dutch"},
    "timezones": ["UTC+01:00"]
  },
  {
    "name": {"common": "Kiribati"},
    "region": "Oceania",
    "population": 119446,
    "area": 811.0,
    "borders": [],
    "languages": {"eng": "English", "gil": "Gilbertese"},
    "timezones": ["UTC+12:00", "UTC+13:00", "UTC+14:00"]
  },
  {
    "population": 0
  }
]
"#;

pub struct MockServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl MockServer {
    /// Number of requests answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Answer every request with `status_line` (e.g. `"200 OK"`) and `body`.
pub fn serve(status_line: &'static str, body: &str) -> MockServer {
    let resp = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    serve_raw(resp)
}

/// Answer every request with exactly `response` (status line, headers and body), then close.
pub fn serve_raw(response: String) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            counter.fetch_add(1, Ordering::SeqCst);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    MockServer {
        url: format!("http://{addr}/v3.1/all"),
        hits,
    }
}

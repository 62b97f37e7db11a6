//! Access log formatting
//!
//! One record per completed request, rendered in Common Log Format or as
//! a JSON line.

use chrono::Local;

/// Everything recorded about a served request
#[derive(Debug, Clone)]
pub struct AccessRecord {
    /// Client socket address
    pub remote_addr: String,
    /// Completion timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method
    pub method: String,
    /// Request path
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Time spent handling the request, in microseconds
    pub duration_us: u64,
}

impl AccessRecord {
    /// Render according to the configured format name
    ///
    /// Unrecognized names fall back to `common`.
    pub fn render(&self, format: &str) -> String {
        match format {
            "json" => self.render_json(),
            _ => self.render_common(),
        }
    }

    /// Common Log Format:
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn render_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }

    /// One JSON object per line, hand-built to keep serde off this path
    fn render_json(&self) -> String {
        format!(
            r#"{{"remote_addr":"{}","time":"{}","method":"{}","path":"{}","status":{},"body_bytes":{},"duration_us":{}}}"#,
            escape_json(&self.remote_addr),
            self.time.to_rfc3339(),
            escape_json(&self.method),
            escape_json(&self.path),
            self.status,
            self.body_bytes,
            self.duration_us,
        )
    }
}

/// Escape special characters for a JSON string value
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

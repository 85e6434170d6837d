pub mod algorithms;
pub mod config;
pub mod free;
pub mod schedule;

use std::io::Read;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use freeslot_core::ScheduleRequest;
use tracing::debug;

/// Where a request comes from, plus window overrides.
#[derive(Args)]
pub struct RequestInput {
    /// Read the request from a JSON file
    #[arg(short, long, conflicts_with = "json")]
    pub input: Option<PathBuf>,
    /// Request as an inline JSON string
    #[arg(long)]
    pub json: Option<String>,
    /// Window start (RFC 3339), overrides the request
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,
    /// Window end (RFC 3339), overrides the request
    #[arg(long)]
    pub end: Option<DateTime<Utc>>,
}

impl RequestInput {
    /// Read the request from `--input`, `--json` or stdin, in that order.
    pub fn read(&self) -> Result<ScheduleRequest, Box<dyn std::error::Error>> {
        let text = match (&self.input, &self.json) {
            (Some(path), _) => {
                debug!(path = %path.display(), "reading request file");
                std::fs::read_to_string(path)?
            }
            (None, Some(json)) => json.clone(),
            (None, None) => {
                debug!("reading request from stdin");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut request = ScheduleRequest::from_json(&text)?;
        if self.start.is_some() {
            request.start_time = self.start;
        }
        if self.end.is_some() {
            request.end_time = self.end;
        }
        Ok(request)
    }
}

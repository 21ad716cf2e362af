use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub level: String,     // "info", "warn", "error"
    pub tag: String,       // e.g., "eval", "session"
    pub message: String,
    pub timestamp: String,
    pub session: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

impl Event {
    pub fn new(
        session: Uuid,
        level: impl Into<String>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let now: DateTime<Utc> = Utc::now();

        Self {
            level: level.into(),
            tag: tag.into(),
            message: message.into(),
            timestamp: now.to_rfc3339(),
            session,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn info(session: Uuid, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(session, "info", tag, message)
    }

    pub fn warn(session: Uuid, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(session, "warn", tag, message)
    }

    /// Render as a single line in the given format
    pub fn render(&self, format: LogFormat) -> io::Result<String> {
        match format {
            LogFormat::Pretty => {
                let mut line = format!(
                    "{} [{}] [{}] {}",
                    self.timestamp,
                    self.level.to_uppercase(),
                    self.tag,
                    self.message
                );
                if let Some(data) = &self.data {
                    line.push_str(&format!(" {}", data));
                }
                Ok(line)
            }
            LogFormat::Json => serde_json::to_string(self).map_err(io::Error::from),
        }
    }
}

/// Appends session events to a transcript file
#[derive(Debug, Clone)]
pub struct EventLog {
    session: Uuid,
    format: LogFormat,
    file: Option<PathBuf>,
}

impl EventLog {
    /// Start a new session; without a file every event is dropped
    pub fn new(format: LogFormat, file: Option<PathBuf>) -> Self {
        Self {
            session: Uuid::new_v4(),
            format,
            file,
        }
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Record the outcome of one evaluated line
    pub fn line_evaluated(
        &self,
        line: &str,
        error: Option<&str>,
        stack: &str,
    ) -> io::Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let data = serde_json::json!({ "input": line, "stack": stack });
        let event = match error {
            None => Event::info(self.session, "eval", line),
            Some(message) => Event::warn(self.session, "eval", message),
        };
        self.emit(&event.with_data(data))
    }

    pub fn emit(&self, event: &Event) -> io::Result<()> {
        match &self.file {
            Some(path) => append_to_file(path, &event.render(self.format)?),
            None => Ok(()),
        }
    }
}

fn append_to_file(path: &Path, content: &str) -> io::Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{}", content)?;

    Ok(())
}

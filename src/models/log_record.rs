use serde::Serialize;
use std::fmt;

/// Actor recorded when no auth gate is wired in.
pub const ANONYMOUS_ACTOR: &str = "anonymous";

/// Header row of the Log region.
pub const LOG_HEADERS: [&str; 4] = ["Timestamp", "Action", "Actor", "Detail"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogAction {
    Update,
    Clear,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::Update => "Update",
            LogAction::Clear => "Clear",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Update" => Some(LogAction::Update),
            "Clear" => Some(LogAction::Clear),
            _ => None,
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable entry of the change log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub timestamp: String, // YYYY-MM-DD HH:MM:SS, local clock
    pub action: LogAction,
    pub actor: String,
    pub detail: String,
}

impl LogRecord {
    pub fn new(action: LogAction, actor: Option<&str>, detail: impl Into<String>) -> Self {
        Self {
            timestamp: crate::utils::time::now_stamp(),
            action,
            actor: actor
                .filter(|a| !a.trim().is_empty())
                .unwrap_or(ANONYMOUS_ACTOR)
                .to_string(),
            detail: detail.into(),
        }
    }

    /// Fields in Log header order.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.timestamp.as_str(),
            self.action.as_str(),
            self.actor.as_str(),
            self.detail.as_str(),
        ]
    }
}

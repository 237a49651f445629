use crate::models::{LogAction, LogRecord};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Visible width of the detail column before truncation.
const DETAIL_MAX: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'azione
fn color_for_action(action: LogAction) -> Colour {
    match action {
        LogAction::Update => Colour::Green,
        LogAction::Clear => Colour::Red,
    }
}

fn truncate_detail(detail: &str) -> String {
    if detail.chars().count() > DETAIL_MAX {
        let mut s = detail.chars().take(DETAIL_MAX - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        detail.to_string()
    }
}

/// Render one history line (without trailing newline).
pub fn format_entry(n: usize, rec: &LogRecord, n_w: usize, actor_w: usize) -> String {
    let action = color_for_action(rec.action).paint(format!("{:<6}", rec.action.as_str()));
    let actor_pad = " ".repeat(actor_w.saturating_sub(UnicodeWidthStr::width(rec.actor.as_str())));

    format!(
        "{:>n_w$}: {} | {} | {}{} => {}",
        n,
        rec.timestamp,
        action,
        rec.actor,
        actor_pad,
        truncate_detail(&rec.detail),
        n_w = n_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(records: &[LogRecord]) {
        if records.is_empty() {
            info("No changes recorded yet.");
            return;
        }

        let n_w = records.len().to_string().len();
        let actor_w = records
            .iter()
            .map(|r| UnicodeWidthStr::width(r.actor.as_str()))
            .max()
            .unwrap_or(0);

        println!("📜 Change log:\n");

        for (i, rec) in records.iter().enumerate() {
            println!("{}", format_entry(i + 1, rec, n_w, actor_w));
        }
    }

    /// Plain-text history, as it would appear without colors.
    pub fn render_plain(records: &[LogRecord]) -> Vec<String> {
        let n_w = records.len().to_string().len();
        let actor_w = records
            .iter()
            .map(|r| UnicodeWidthStr::width(r.actor.as_str()))
            .max()
            .unwrap_or(0);

        records
            .iter()
            .enumerate()
            .map(|(i, rec)| strip_ansi(&format_entry(i + 1, rec, n_w, actor_w)))
            .collect()
    }
}

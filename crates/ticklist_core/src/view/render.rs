//! List rendering: snapshot -> rows -> terminal text.
//!
//! # Responsibility
//! - Project a task snapshot into display-ready rows.
//! - Neutralize control and escape bytes in task text before display.
//! - Format rows as plain terminal lines, struck through when completed.
//!
//! # Invariants
//! - Row order equals snapshot order.
//! - Display text contains no control characters after sanitization.

use crate::model::task::{Task, TaskId};

const ANSI_STRIKE_DIM: &str = "\x1b[9;2m";
const ANSI_RESET: &str = "\x1b[0m";

/// Shown instead of rows when the list is empty.
pub const EMPTY_STATE_MESSAGE: &str = "No tasks yet. Add one to get started.";

/// Number of id characters exposed as the row handle.
const ID_HANDLE_LEN: usize = 8;

/// Display-ready projection of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    /// Sanitized text, safe to write to a terminal.
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl TaskRow {
    /// Short id prefix usable as a toggle/edit/delete handle.
    pub fn id_handle(&self) -> String {
        let simple = self.id.simple().to_string();
        simple[..ID_HANDLE_LEN].to_string()
    }
}

/// Display-ready projection of the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRender {
    pub rows: Vec<TaskRow>,
}

impl ListRender {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Projects a task snapshot into display rows, in snapshot order.
pub fn render(tasks: &[Task]) -> ListRender {
    let rows = tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            text: sanitize_display_text(&task.text),
            completed: task.completed,
            created_at: task.created_at.clone(),
        })
        .collect();
    ListRender { rows }
}

/// Replaces control characters (including escape bytes) with spaces so task
/// text cannot inject terminal control sequences or break row layout.
pub fn sanitize_display_text(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

/// Formats a rendered list as terminal text.
///
/// Empty list: the empty-state message plus a zero count. Otherwise a count
/// header and one line per row; completed rows get a checked marker and,
/// when `color` is set, strikethrough plus dim styling.
pub fn format_plain(list: &ListRender, color: bool) -> String {
    let mut out = String::new();

    if list.is_empty() {
        out.push_str(EMPTY_STATE_MESSAGE);
        out.push('\n');
        out.push_str("0 tasks\n");
        return out;
    }

    let noun = if list.count() == 1 { "task" } else { "tasks" };
    out.push_str(&format!("{} {noun}\n", list.count()));

    for row in &list.rows {
        let marker = if row.completed { "[x]" } else { "[ ]" };
        let text = if row.completed && color {
            format!("{ANSI_STRIKE_DIM}{}{ANSI_RESET}", row.text)
        } else {
            row.text.clone()
        };
        out.push_str(&format!(
            "{marker} {text}  ({})  {}\n",
            row.created_at,
            row.id_handle()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::sanitize_display_text;

    #[test]
    fn sanitize_replaces_escape_and_newline_bytes() {
        let sanitized = sanitize_display_text("red\x1b[31malert\nline");
        assert!(!sanitized.contains('\x1b'));
        assert!(!sanitized.contains('\n'));
        assert!(sanitized.contains("[31malert"));
    }

    #[test]
    fn sanitize_keeps_plain_unicode_text() {
        assert_eq!(sanitize_display_text("beli susu ☕"), "beli susu ☕");
    }
}

//! ticklist command-line front end.
//!
//! # Responsibility
//! - Parse one user command, drive the task store, re-render the list.
//! - Resolve short id handles to full task ids.
//!
//! # Invariants
//! - Every command ends with a full re-render of the current list.
//! - Unknown or ambiguous id handles are reported without touching tasks.

mod feedback;

use clap::{Parser, Subcommand};
use feedback::Feedback;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use ticklist_core::db::open_db;
use ticklist_core::{
    default_log_level, format_plain, init_logging, render, SqliteTaskStorage, Task, TaskId,
    TaskStore,
};

#[derive(Parser)]
#[command(name = "ticklist", version, about = "A small to-do list manager")]
struct Cli {
    /// Path to the task database (defaults to the user data directory).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Suppress bell cues and notification lines.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task.
    Add {
        /// Task text; multiple words are joined with spaces.
        text: Vec<String>,
    },
    /// Show the task list.
    List,
    /// Toggle a task between pending and done.
    Toggle {
        /// Task id or an unambiguous id prefix.
        id: String,
    },
    /// Replace a task's text.
    Edit {
        /// Task id or an unambiguous id prefix.
        id: String,
        /// Replacement text; blank input leaves the task unchanged.
        text: Vec<String>,
    },
    /// Delete a task.
    Rm {
        /// Task id or an unambiguous id prefix.
        id: String,
    },
}

enum IdResolution {
    Match(TaskId),
    NoMatch,
    Ambiguous,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => default_db_path()?,
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!("cannot create data directory `{}`: {err}", parent.display())
        })?;
    }

    // Logging is best-effort for the CLI; a failed init must not block
    // the command itself.
    if let Some(log_dir) = db_path.parent().map(|parent| parent.join("logs")) {
        let _ = init_logging(default_log_level(), log_dir);
    }

    let conn = open_db(&db_path).map_err(|err| {
        format!("cannot open task database `{}`: {err}", db_path.display())
    })?;
    let storage = SqliteTaskStorage::try_new(&conn).map_err(|err| err.to_string())?;
    let mut store = TaskStore::open(storage).map_err(|err| err.to_string())?;
    let feedback = Feedback::new(!cli.quiet);

    match &cli.command {
        Command::Add { text } => {
            let created = store
                .create(&text.join(" "))
                .map_err(|err| err.to_string())?
                .is_some();
            if created {
                feedback.cue();
            }
        }
        Command::List => {}
        Command::Toggle { id } => match resolve_id(store.tasks(), id) {
            IdResolution::Match(task_id) => {
                if store.toggle(task_id).map_err(|err| err.to_string())? {
                    feedback.cue();
                }
            }
            other => report_unresolved(id, &other),
        },
        Command::Edit { id, text } => match resolve_id(store.tasks(), id) {
            IdResolution::Match(task_id) => {
                let changed = store
                    .update(task_id, &text.join(" "))
                    .map_err(|err| err.to_string())?;
                if changed {
                    feedback.cue();
                }
            }
            other => report_unresolved(id, &other),
        },
        Command::Rm { id } => match resolve_id(store.tasks(), id) {
            IdResolution::Match(task_id) => {
                if store.delete(task_id).map_err(|err| err.to_string())? {
                    feedback.deleted();
                }
            }
            other => report_unresolved(id, &other),
        },
    }

    let use_color = std::io::stdout().is_terminal();
    print!("{}", format_plain(&render(store.tasks()), use_color));
    Ok(())
}

/// Resolves a full id or id prefix against the current list.
///
/// Prefixes are matched against the hyphen-less id form shown in the list
/// output; only a unique match resolves.
fn resolve_id(tasks: &[Task], raw: &str) -> IdResolution {
    let needle: String = raw
        .trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|ch| *ch != '-')
        .collect();
    if needle.is_empty() {
        return IdResolution::NoMatch;
    }

    let mut matches = tasks
        .iter()
        .filter(|task| task.id.simple().to_string().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(task), None) => IdResolution::Match(task.id),
        (Some(_), Some(_)) => IdResolution::Ambiguous,
        (None, _) => IdResolution::NoMatch,
    }
}

fn report_unresolved(raw: &str, resolution: &IdResolution) {
    match resolution {
        IdResolution::NoMatch => eprintln!("no task matches id `{raw}`"),
        IdResolution::Ambiguous => eprintln!("id `{raw}` matches more than one task"),
        IdResolution::Match(_) => {}
    }
}

fn default_db_path() -> Result<PathBuf, String> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| "cannot determine the user data directory; pass --db".to_string())?;
    Ok(data_dir.join("ticklist").join("tasks.db"))
}

#[cfg(test)]
mod tests {
    use super::{resolve_id, Cli, IdResolution};
    use clap::CommandFactory;
    use ticklist_core::Task;
    use uuid::Uuid;

    fn task(id: &str, text: &str) -> Task {
        Task::with_id(Uuid::parse_str(id).unwrap(), text)
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_id_accepts_unique_prefix_and_full_id() {
        let tasks = vec![
            task("aaaaaaaa-0000-4000-8000-000000000001", "a"),
            task("bbbbbbbb-0000-4000-8000-000000000002", "b"),
        ];

        assert!(matches!(
            resolve_id(&tasks, "aaaa"),
            IdResolution::Match(id) if id == tasks[0].id
        ));
        assert!(matches!(
            resolve_id(&tasks, "bbbbbbbb-0000-4000-8000-000000000002"),
            IdResolution::Match(id) if id == tasks[1].id
        ));
    }

    #[test]
    fn resolve_id_reports_ambiguous_and_unknown_prefixes() {
        let tasks = vec![
            task("cccccccc-0000-4000-8000-000000000001", "a"),
            task("cccccccc-1111-4000-8000-000000000002", "b"),
        ];

        assert!(matches!(
            resolve_id(&tasks, "cccccccc"),
            IdResolution::Ambiguous
        ));
        assert!(matches!(resolve_id(&tasks, "dddd"), IdResolution::NoMatch));
        assert!(matches!(resolve_id(&tasks, "  "), IdResolution::NoMatch));
    }
}

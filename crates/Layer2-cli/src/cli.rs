//! Non-interactive batch mode
//!
//! 한 줄에 명령 하나, 셸 스타일 인용 지원:
//!
//! ```text
//! # comment
//! register "Ana Silva" 123 09:00
//! list
//! list --json
//! search ana silva
//! delete bob
//! clear
//! ```

use crate::notice;
use anyhow::{bail, Context};
use std::io::{BufRead, Write};
use visitor_foundation::VisitorRegistry;

/// Batch command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchCommand {
    Register {
        name: String,
        document: String,
        time: String,
    },
    List {
        json: bool,
    },
    Search(String),
    Delete(String),
    Clear,
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> anyhow::Result<Option<BatchCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = shlex::split(line).context("unbalanced quotes")?;
    let Some((verb, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "register" | "add" => match args {
            [name, document, time] => BatchCommand::Register {
                name: name.clone(),
                document: document.clone(),
                time: time.clone(),
            },
            _ => bail!("usage: register <name> <document> <time>"),
        },
        "list" | "ls" => match args {
            [] => BatchCommand::List { json: false },
            [flag] if flag == "--json" => BatchCommand::List { json: true },
            _ => bail!("usage: list [--json]"),
        },
        "search" | "find" => BatchCommand::Search(args.join(" ")),
        "delete" | "rm" => {
            if args.is_empty() {
                bail!("usage: delete <name>");
            }
            BatchCommand::Delete(args.join(" "))
        }
        "clear" => {
            if !args.is_empty() {
                bail!("usage: clear");
            }
            BatchCommand::Clear
        }
        other => bail!("unknown command '{}'", other),
    };

    Ok(Some(command))
}

/// Execute a command against the registry
///
/// 레지스트리 에러는 `error: ...` 로 출력하고 계속 진행한다.
pub fn execute(
    registry: &mut VisitorRegistry,
    command: BatchCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        BatchCommand::Register {
            name,
            document,
            time,
        } => match registry.register(&name, &document, &time) {
            Ok(_) => writeln!(out, "{}", notice::REGISTERED)?,
            Err(e) => {
                tracing::debug!("register failed: {}", e);
                writeln!(out, "error: {} ({})", notice::describe_error(&e), e)?
            }
        },
        BatchCommand::List { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(registry.list())?)?;
            } else {
                print_table(registry, out)?;
            }
        }
        BatchCommand::Search(query) => match registry.search(&query) {
            Ok(visitor) => writeln!(out, "{}", notice::found(visitor))?,
            Err(e) => writeln!(out, "error: {}", notice::describe_error(&e))?,
        },
        BatchCommand::Delete(name) => match registry.delete(&name) {
            Ok(removed) => writeln!(out, "{} ({} removed)", notice::REMOVED, removed)?,
            Err(e) => writeln!(out, "error: {}", notice::describe_error(&e))?,
        },
        BatchCommand::Clear => {
            registry.clear();
            writeln!(out, "Registry cleared")?;
        }
    }
    Ok(())
}

/// Run every line from `input`
pub fn run_batch(
    input: impl BufRead,
    registry: &mut VisitorRegistry,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(command)) => execute(registry, command, out)?,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(line = index + 1, "Invalid batch command: {}", e);
                writeln!(out, "error: line {}: {}", index + 1, e)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn print_table(registry: &VisitorRegistry, out: &mut impl Write) -> anyhow::Result<()> {
    if registry.is_empty() {
        writeln!(out, "{}", notice::NO_VISITORS)?;
        return Ok(());
    }

    writeln!(out, "{:<4} {:<30} {:<20} {:<8}", "#", "Name", "Document", "Time")?;
    writeln!(out, "{}", "-".repeat(64))?;
    for (i, visitor) in registry.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<30} {:<20} {:<8}",
            i + 1,
            truncate(visitor.name(), 30),
            truncate(visitor.document(), 20),
            visitor.time()
        )?;
    }
    Ok(())
}

/// Truncate a string for display
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

//! TableDB - CLI Client

use std::env;

use anyhow::Context;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing_subscriber::EnvFilter;

use tabledb::command::{self, CommandOutput};
use tabledb::{ColumnType, Row, StoreConfig, TableStore};

/// Print welcome banner
fn print_banner() {
    println!(
        r#"
 _____     _     _      ____  ____
|_   _|_ _| |__ | | ___|  _ \| __ )
  | |/ _` | '_ \| |/ _ \ | | |  _ \
  | | (_| | |_) | |  __/ |_| | |_) |
  |_|\__,_|_.__/|_|\___|____/|____/

 A minimal in-memory table store in Rust
 Type '.help' for help, '.quit' to exit
"#
    );
}

/// Format query results as a table
fn format_results(columns: &[String], rows: &[Row]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();

    for row in rows {
        for (i, value) in row.values().iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(value.chars().count());
            }
        }
    }

    let mut output = String::new();

    if !widths.is_empty() {
        let separator: String = widths
            .iter()
            .map(|w| "-".repeat(*w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let separator = format!("+{}+\n", separator);

        output.push_str(&separator);
        let header: String = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {:^width$} ", c, width = *w))
            .collect::<Vec<_>>()
            .join("|");
        output.push_str(&format!("|{}|\n", header));
        output.push_str(&separator);

        for row in rows {
            let row_str: String = row
                .values()
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!(" {:<width$} ", v, width = *w))
                .collect::<Vec<_>>()
                .join("|");
            output.push_str(&format!("|{}|\n", row_str));
        }

        if !rows.is_empty() {
            output.push_str(&separator);
        }
    }

    output.push_str(&format!("{} row(s) returned\n", rows.len()));
    output
}

/// Print the outcome of one command. Returns false when the shell should exit.
fn render(output: CommandOutput) -> bool {
    match output {
        CommandOutput::Message(msg) => println!("{}", msg),
        CommandOutput::Rows { columns, rows } => print!("{}", format_results(&columns, &rows)),
        CommandOutput::Json(json) => println!("{}", json),
        CommandOutput::Quit => return false,
    }
    true
}

/// Run a line and report errors without leaving the shell
fn execute_line(store: &mut TableStore, line: &str) -> bool {
    match command::run_line(store, line) {
        Ok(output) => render(output),
        Err(e) => {
            eprintln!("Error: {}", e);
            true
        }
    }
}

/// Walk through the students example: create, insert, update, remove
fn run_demo(store: &mut TableStore) -> anyhow::Result<()> {
    store.create_table(
        "students",
        [("name", ColumnType::Text), ("age", ColumnType::Integer)],
    )?;

    store.insert("students", ["Alice", "20"])?;
    store.insert("students", ["Bob", "22"])?;
    store.insert("students", ["Charlie", "24"])?;

    let columns: Vec<String> = vec!["name".to_string(), "age".to_string()];
    let all: [&str; 0] = [];
    print!("{}", format_results(&columns, &store.select("students", &all)));

    println!("update students age 21");
    store.update("students", "age", "21")?;
    print!("{}", format_results(&columns, &store.select("students", &all)));

    println!("remove students name Bob");
    store.remove("students", "name", "Bob")?;
    print!("{}", format_results(&columns, &store.select("students", &all)));

    Ok(())
}

/// Main REPL loop
fn run_repl(store: &mut TableStore) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize readline")?;

    print_banner();

    loop {
        let line = match rl.readline("tabledb> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        if !execute_line(store, trimmed) {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse command-line flags into a store config and the demo switch
fn parse_args(args: &[String]) -> anyhow::Result<(StoreConfig, bool)> {
    let mut config = StoreConfig::new();
    let mut demo = false;

    for arg in args {
        match arg.as_str() {
            "--strict" => config = config.strict(),
            "--demo" => demo = true,
            other => anyhow::bail!("unknown argument '{}' (expected --strict or --demo)", other),
        }
    }

    Ok((config, demo))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config, demo) = parse_args(&args)?;

    let mut store = TableStore::with_config(config);
    if demo {
        run_demo(&mut store)
    } else {
        run_repl(&mut store)
    }
}

//! Interactive todo list.
//!
//! Reads commands from stdin, applies them to a [`TodoStore`] and prints the
//! list after every change. Logs go to stderr; set `RUST_LOG=todo=debug` to
//! see each published snapshot.

use anyhow::Context;
use todo::{Command, TodoConfig, TodoSnapshot, TodoStore, command::HELP};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=info,todo_store_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TodoConfig::from_env();
    tracing::info!(?config, "Starting todo session");

    let mut store = TodoStore::new(config);

    let mut snapshots = store.subscribe();
    let watcher = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            tracing::debug!(
                version = snapshot.version(),
                count = snapshot.count(),
                "Snapshot published"
            );
        }
    });

    println!("=== Todo ===\n");
    println!("{HELP}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                println!("! {error}");
                continue;
            }
        };

        match command {
            Command::Action(action) => match store.send(action) {
                Ok(snapshot) => print_todos(&snapshot),
                Err(error) => println!("! {error}"),
            },
            Command::List => print_todos(&store.snapshot()),
            Command::Json => {
                let json = serde_json::to_string_pretty(&store.snapshot())
                    .context("failed to serialize snapshot")?;
                println!("{json}");
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    let version = store.version();
    drop(store);
    watcher.await.context("snapshot watcher failed")?;

    tracing::info!(version, "Todo session ended");
    Ok(())
}

fn print_todos(snapshot: &TodoSnapshot) {
    if snapshot.is_empty() {
        println!("  (no todos)");
        return;
    }

    for todo in snapshot.iter() {
        println!("  [{}] {}", todo.id, todo.title);
    }
}

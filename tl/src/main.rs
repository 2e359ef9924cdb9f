use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use todolist::TodoStore;
use todolist::cli::{Cli, Command};
use todolist::config::Config;
use todolist::task::Task;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("todolist starting");

    let mut store = TodoStore::open(&config.store_path)?;

    match cli.command {
        Command::Add { text } => {
            let task = store.add(&text)?;
            println!("{} Added task {}: {}", "✓".green(), task.id.to_string().cyan(), task.text);
        }
        Command::List { filter } => {
            let tasks = store.filter(filter);
            if tasks.is_empty() {
                println!("No tasks");
            } else {
                for task in tasks {
                    print_task(task);
                }
            }
        }
        Command::Toggle { id } => {
            if store.toggle(id)? {
                println!("{} Toggled task {}", "✓".green(), id.to_string().cyan());
            } else {
                println!("No task with id {}", id);
            }
        }
        Command::Delete { id } => {
            if store.delete(id)? {
                println!("{} Deleted task {}", "✓".green(), id.to_string().cyan());
            } else {
                println!("No task with id {}", id);
            }
        }
        Command::ClearCompleted => {
            let removed = store.clear_completed()?;
            println!("{} Removed {} completed task(s)", "✓".green(), removed);
        }
        Command::ClearAll => {
            store.clear_all()?;
            println!("{} Removed all tasks", "✓".green());
        }
        Command::Stats => {
            let stats = store.stats();
            println!("Total: {}", stats.total);
            println!("  Active: {}", stats.active);
            println!("  Completed: {}", stats.completed);
        }
    }

    Ok(())
}

fn print_task(task: &Task) {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    println!(
        "{} {} {} {}",
        marker,
        task.id.to_string().yellow(),
        task.text,
        task.created_at.dimmed()
    );
}

//! Development tasks for the ndindexing workspace.
//!
//! Usage: `cargo xtask <command>`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ndindexing::Indexing;
use ndindexing_store::{read_indexing, Group, StoreFile};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for ndindexing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, test, doc)
    Ci,
    /// Print every Indexing group found in a JSON store
    Inspect {
        /// Store file to read
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => cmd_ci(),
        Commands::Inspect { file } => cmd_inspect(&file),
    }
}

fn project_root() -> Result<&'static Path> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("xtask must live inside the workspace")
}

fn cmd_ci() -> Result<()> {
    let root = project_root()?;

    println!("🔧 Running cargo fmt...");
    run_cargo(root, &["fmt", "--all", "--", "--check"])?;

    println!("📎 Running cargo clippy...");
    run_cargo(root, &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;

    println!("🧪 Running cargo test...");
    run_cargo(root, &["test", "--workspace"])?;

    println!("📚 Checking documentation...");
    run_cargo(root, &["doc", "--workspace", "--no-deps"])?;

    println!("✅ All CI checks passed!");
    Ok(())
}

fn run_cargo(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("cargo {} failed", args.join(" "));
    }
    Ok(())
}

fn cmd_inspect(file: &Path) -> Result<()> {
    let store = StoreFile::open(file)?;
    let found = inspect_group(store.root(), "")?;
    if found == 0 {
        println!("No Indexing groups in {}", file.display());
    }
    Ok(())
}

/// Print the Indexing groups below `group`; returns how many were found.
fn inspect_group(group: &Group, prefix: &str) -> Result<usize> {
    let mut found = 0;
    for name in group.group_names() {
        let path = format!("{}/{}", prefix, name);
        let child = group.group(name)?;
        if child.str_attr("type").ok() == Some("Indexing") {
            // Widest types, so that any stored space can be shown.
            let (ind, names): (Indexing<i64, u64>, _) = read_indexing(group, name)
                .with_context(|| format!("Failed to read Indexing at '{}'", path))?;
            let order: Vec<&str> = ind
                .order()
                .iter()
                .map(|&d| names.as_slice()[d].as_str())
                .collect();
            println!("{}", path);
            println!("  convention: {}", child.str_attr("order_convention")?);
            println!("  dims:       {:?}", names.as_slice());
            println!("  base:       {:?}", ind.base());
            println!("  extent:     {:?}", ind.extent());
            println!("  order:      {:?}", order);
            println!("  size:       {}", ind.size());
            if let Some(storage) = ind.storage_order() {
                println!("  storage:    {:?}", storage);
            }
            found += 1;
        }
        found += inspect_group(child, &path)?;
    }
    Ok(found)
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "adjgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark the dense and sparse stores against each other
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Relax Floyd–Warshall rows in parallel
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
}

const BENCH: &str = "graph_benchmark";
const STORES: &[&str] = &["dense", "sparse"];

/// Mean throughput per `(group, size)` and store.
type Results = BTreeMap<(String, usize), BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            parallel,
        } => {
            if !report_only {
                run_benchmarks(quick, parallel)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

/// The crate root, one level above this xtask.
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run_benchmarks(quick: bool, parallel: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let mut build = Command::new("cargo");
    build.current_dir(project_root());
    build.args(["build", "--bench", BENCH, "--release"]);
    if parallel {
        build.args(["--features", "parallel"]);
    }
    if !build.status()?.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running {BENCH}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.current_dir(project_root()).env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);
    if parallel {
        cmd.args(["--features", "parallel"]);
    }

    // Criterion arguments go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().with_context(|| format!("Failed to run {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("{BENCH} exited with {status}");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let root = project_root();
    let criterion_dir = root.join("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(&criterion_dir, &mut results)?;

    let report_path = root.join("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&report_path)?;

    writeln!(file, "# Dense vs Sparse Adjacency Report")?;
    writeln!(file)?;
    write!(file, "| Workload | Nodes |")?;
    for store in STORES {
        write!(file, " {store} (elem/s) |")?;
    }
    writeln!(file, " sparse vs dense |")?;
    write!(file, "|---|---|")?;
    for _ in STORES {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for ((group, nodes), by_store) in &results {
        write!(file, "| {group} | {nodes} |")?;
        for store in STORES {
            match by_store.get(*store) {
                Some(&ops) => write!(file, " {} |", format_rate(ops))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (by_store.get("dense"), by_store.get("sparse")) {
            (Some(&dense), Some(&sparse)) if dense > 0.0 => writeln!(file, " **{:.2}x** |", sparse / dense)?,
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Walks `target/criterion/<group>/<store>/<nodes>/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if file_name(&path) != Some("estimates.json") {
            continue;
        }

        let Some(sample_dir) = path.parent() else { continue };
        if file_name(sample_dir) != Some("new") {
            continue;
        }
        let Some(size_dir) = sample_dir.parent() else { continue };
        let Some(store_dir) = size_dir.parent() else { continue };
        let Some(group_dir) = store_dir.parent() else { continue };

        let (Some(size), Some(store), Some(group)) = (file_name(size_dir), file_name(store_dir), file_name(group_dir))
        else {
            continue;
        };
        let Ok(nodes) = size.parse::<usize>() else { continue };
        if !STORES.contains(&store) {
            continue;
        }

        let elements = read_json(&sample_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64())
            .unwrap_or(1.0);
        let Some(time_ns) = read_json(&path).and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
        else {
            continue;
        };

        if time_ns > 0.0 {
            results
                .entry((group.to_string(), nodes))
                .or_default()
                .insert(store.to_string(), elements * 1e9 / time_ns);
        }
    }

    Ok(())
}

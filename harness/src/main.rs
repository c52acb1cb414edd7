use anyhow::Context;
use clap::Parser;
use run::config::RunPlan;
use run::runner::Runner;
use std::fs;
use std::path::PathBuf;

mod run;

#[derive(Parser)]
#[command(author, version, about = "RMS candidate validation driver")]
struct Args {
    /// Path to the candidate program under test
    candidate: PathBuf,
    /// Load a fixture catalog from YAML instead of the built-in vectors
    #[arg(long)]
    fixtures: Option<PathBuf>,
    /// Write the run summary as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plan = if let Some(path) = args.fixtures {
        RunPlan::load(path)?
    } else {
        RunPlan::builtin()
    };

    let runner = Runner::new(args.candidate);
    let summary = runner.run(&plan.fixtures)?;

    println!("-----------");
    if summary.failed == 0 {
        println!("Success! Passed all {} tests.", summary.total);
    } else {
        println!(
            "Failed {} / {} tests ({:.0}%)",
            summary.failed,
            summary.total,
            summary.percent_failed()
        );
    }

    if let Some(path) = args.report {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(&summary).context("serializing run report")?;
        fs::write(&path, body)
            .with_context(|| format!("writing run report {}", path.display()))?;
    }

    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::process::Command;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for emu-helpers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format check, then clippy, tests and doc tests under every bit_cast strategy
    Ci,
    /// Format the workspace
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Lint all targets with warnings denied
    Clippy {
        #[arg(long, value_enum, default_value_t = Strategy::Transmute)]
        strategy: Strategy,
    },
    /// Run tests under one bit_cast strategy
    Test {
        #[arg(long, value_enum, default_value_t = Strategy::Transmute)]
        strategy: Strategy,
        /// Doc tests only (includes the compile_fail range checks)
        #[arg(long)]
        doc: bool,
        /// Test name filter passed through to the harness
        filter: Option<String>,
    },
    /// Run the criterion benchmarks
    Bench {
        #[arg(long, value_enum, default_value_t = Strategy::Transmute)]
        strategy: Strategy,
    },
    /// Inspect a ROM image with the rominfo binary
    Rominfo {
        rom_path: String,
        #[arg(short = 'w', long, default_value = "8")]
        words: usize,
        #[arg(long)]
        release: bool,
    },
}

/// How `bit_cast` is compiled
#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// `transmute_copy` (default build)
    Transmute,
    /// Byte copy through the `portable-bit-cast` feature
    Portable,
}

impl Strategy {
    const ALL: [Strategy; 2] = [Strategy::Transmute, Strategy::Portable];

    fn name(self) -> &'static str {
        match self {
            Strategy::Transmute => "transmute",
            Strategy::Portable => "portable",
        }
    }

    fn feature_args(self) -> &'static [&'static str] {
        match self {
            Strategy::Transmute => &[],
            Strategy::Portable => &["--features", "portable-bit-cast"],
        }
    }
}

/// One cargo invocation
struct Step {
    label: String,
    args: Vec<String>,
}

impl Step {
    fn new(label: impl Into<String>, args: &[&str]) -> Self {
        Self {
            label: label.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn with(mut self, extra: &[&str]) -> Self {
        self.args.extend(extra.iter().map(|s| s.to_string()));
        self
    }

    fn run(&self) -> Result<Duration> {
        println!("{} {}", "==>".blue().bold(), self.label.bold());
        println!("    cargo {}", self.args.join(" ").dimmed());

        let start = Instant::now();
        let status = Command::new("cargo")
            .args(&self.args)
            .status()
            .with_context(|| format!("failed to spawn cargo for `{}`", self.label))?;

        if !status.success() {
            bail!("`{}` failed ({})", self.label, status);
        }
        Ok(start.elapsed())
    }
}

fn fmt_step(check: bool) -> Step {
    let step = Step::new("fmt", &["fmt", "--all"]);
    if check {
        step.with(&["--", "--check"])
    } else {
        step
    }
}

fn clippy_step(strategy: Strategy) -> Step {
    Step::new(format!("clippy [{}]", strategy.name()), &["clippy", "--all-targets"])
        .with(strategy.feature_args())
        .with(&["--", "-D", "warnings"])
}

fn test_step(strategy: Strategy, doc: bool, filter: Option<&str>) -> Step {
    const DOC: &[&str] = &["--doc"];
    const UNIT: &[&str] = &["--lib", "--bins", "--tests"];
    let (label, kind) = if doc {
        ("doc tests", DOC)
    } else {
        ("tests", UNIT)
    };

    let step = Step::new(format!("{label} [{}]", strategy.name()), &["test"])
        .with(kind)
        .with(strategy.feature_args());
    match filter {
        Some(filter) => step.with(&["--", filter]),
        None => step,
    }
}

/// Run `steps` in order, stopping at the first failure
fn run_steps(steps: &[Step]) -> Result<()> {
    let start = Instant::now();
    let mut timings = Vec::with_capacity(steps.len());

    for step in steps {
        match step.run() {
            Ok(elapsed) => timings.push((step.label.as_str(), elapsed)),
            Err(e) => {
                println!("{} {}", "FAILED".red().bold(), step.label);
                return Err(e);
            }
        }
    }

    if steps.len() > 1 {
        println!();
        for (label, elapsed) in &timings {
            println!("  {} {:<28} {:.1}s", "ok".green(), label, elapsed.as_secs_f64());
        }
        println!(
            "{} {} steps in {:.1}s",
            "PASSED".green().bold(),
            timings.len(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}

fn ci_steps() -> Vec<Step> {
    let mut steps = vec![fmt_step(true)];
    for strategy in Strategy::ALL {
        steps.push(clippy_step(strategy));
        steps.push(test_step(strategy, false, None));
        steps.push(test_step(strategy, true, None));
    }
    steps
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let steps = match cli.command {
        Commands::Ci => ci_steps(),
        Commands::Fmt { check } => vec![fmt_step(check)],
        Commands::Clippy { strategy } => vec![clippy_step(strategy)],
        Commands::Test {
            strategy,
            doc,
            filter,
        } => vec![test_step(strategy, doc, filter.as_deref())],
        Commands::Bench { strategy } => {
            vec![Step::new("bench", &["bench", "--bench", "helpers_bench"])
                .with(strategy.feature_args())]
        }
        Commands::Rominfo {
            rom_path,
            words,
            release,
        } => {
            let words = words.to_string();
            let step = Step::new("rominfo", &["run", "--bin", "rominfo"]);
            let step = if release { step.with(&["--release"]) } else { step };
            vec![step.with(&["--", rom_path.as_str(), "--words", words.as_str()])]
        }
    };

    run_steps(&steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_covers_both_strategies() {
        let steps = ci_steps();
        let portable: Vec<_> = steps
            .iter()
            .filter(|s| s.args.iter().any(|a| a == "portable-bit-cast"))
            .map(|s| s.args[0].as_str())
            .collect();
        assert_eq!(portable, ["clippy", "test", "test"]);
        assert!(steps.iter().any(|s| s.args.iter().any(|a| a == "--doc")));
    }

    #[test]
    fn test_filter_goes_after_separator() {
        let step = test_step(Strategy::Transmute, false, Some("bcd"));
        assert_eq!(step.args[step.args.len() - 2..], ["--", "bcd"]);
    }
}

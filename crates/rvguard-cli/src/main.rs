//! CLI entry point for rvguard.
//!
//! Thin by design: argument parsing, file I/O, logging setup, and exit codes.
//! Everything else lives in `rvguard-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use rvguard_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_annotations, render_markdown, report_schema, run_check, run_explain,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use rvguard_settings::Overrides;
use rvguard_types::RvguardReport;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "rvguard",
    version,
    about = "Terraform required_version range guard"
)]
struct Cli {
    /// Repository root (directory holding the root Terraform module).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to rvguard config TOML, relative to the repository root.
    #[arg(long, default_value = "rvguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long)]
    profile: Option<String>,

    /// Override scope (root|all).
    #[arg(long)]
    scope: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Override the lowest approved Terraform version.
    #[arg(long)]
    min_version: Option<String>,

    /// Override the highest approved Terraform version.
    #[arg(long)]
    max_version: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check required_version constraints and write artifacts.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/rvguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/rvguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/rvguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout when omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/rvguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "terraform.required_version") or code (e.g. "version_out_of_range").
        identifier: String,
    },

    /// Print a JSON schema.
    Schema {
        #[arg(value_enum, default_value = "report")]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    /// The `rvguard.report.v1` envelope.
    Report,
    /// The `rvguard.toml` config file.
    Config,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, report_out, write_markdown, markdown_out),
        Commands::Md { ref report, ref output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { ref report, max } => cmd_annotations(report, max),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

/// Logs go to stderr; stdout carries rendered output only.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_check(
    cli: &Cli,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.is_dir() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }

        let cfg_text = read_config(&repo_root.join(&cli.config))?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            scope: cli.scope.clone(),
            max_findings: cli.max_findings,
            min_version: cli.min_version.clone(),
            max_version: cli.max_version.clone(),
        };

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                tracing::warn!(error = %write_err, "could not write runtime error report");
            }
            eprintln!("rvguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// A missing config file means defaults.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(config = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn write_report_file(path: &Utf8Path, report: &RvguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report).context("serialize report")?;
    write_bytes(path, &data).with_context(|| format!("write report: {}", path))
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes()).with_context(|| format!("write text: {}", path))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{}", md),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Report => report_schema(),
        SchemaKind::Config => rvguard_settings::config_schema(),
    };
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{}", text);
    Ok(())
}

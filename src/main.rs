use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::time::Instant;

use cleantmp::cleaner::{Engine, RunOptions};
use cleantmp::cli::args::{Cli, CompletionShell, OutputFormat};
use cleantmp::cli::output;
use cleantmp::common::config::Config;
use cleantmp::common::errors::PreconditionError;
use cleantmp::common::{format, permissions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cleantmp=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let shell = match shell {
            CompletionShell::Bash => clap_complete::Shell::Bash,
            CompletionShell::Zsh => clap_complete::Shell::Zsh,
            CompletionShell::Fish => clap_complete::Shell::Fish,
        };
        clap_complete::generate(shell, &mut cmd, "cleantmp", &mut std::io::stdout());
        return Ok(());
    }

    cmd_clean(&cli)
}

fn cmd_clean(cli: &Cli) -> Result<()> {
    let Some(root) = cli.path.as_deref() else {
        anyhow::bail!("No folder given to clean");
    };

    let config = Config::default().with_case_sensitive(!cli.ignore_case);
    let options = RunOptions {
        recursive: cli.recursive,
        dry_run: cli.dry_run,
        show_progress: !cli.quiet && matches!(cli.format, OutputFormat::Human),
        cancel: None,
    };

    let start = Instant::now();
    let report = match Engine::new(&config).run(root, &options) {
        Ok(report) => report,
        Err(e) => {
            if let PreconditionError::Inaccessible { source, path } = &e {
                if permissions::is_permission_error(source) && !cli.quiet {
                    eprintln!(
                        "  {} {}",
                        "💡",
                        permissions::permission_hint(path).dimmed()
                    );
                }
            }
            return Err(e.into());
        }
    };

    match cli.format {
        OutputFormat::Human if cli.quiet => output::print_report_quiet(&report),
        OutputFormat::Human => {
            output::print_report(&report, cli.detailed, start.elapsed().as_secs_f64())
        }
        OutputFormat::Json => output::print_report_json(&report),
        OutputFormat::Quiet => output::print_report_quiet(&report),
    }

    if report.failed_count() > 0 && !cli.quiet && matches!(cli.format, OutputFormat::Human) {
        eprintln!(
            "  {} {} could not be removed",
            "⚠".yellow(),
            format::format_count(report.failed_count())
        );
    }

    Ok(())
}

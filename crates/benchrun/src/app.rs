//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};

use benchrun_cli::output::write_json_report;
use benchrun_cli::presenter::TablePresenter;
use benchrun_cli::ui;
use benchrun_core::{exit_codes, BenchError, CaseRegistry, MonotonicClock, Selection};
use benchrun_orchestration::case_selection::{available_names, selected_names};
use benchrun_orchestration::run_all;

use crate::config::AppConfig;
use crate::errors::handle_error;
use crate::{environment, suites};

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        benchrun_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let registry = suites::default_registry();
    run_with_registry(config, &registry)
}

/// Select, run and report benchmarks from `registry`.
pub fn run_with_registry(config: &AppConfig, registry: &CaseRegistry) -> Result<i32> {
    let selection = match Selection::parse(&config.patterns) {
        Ok(selection) => selection,
        Err(e) => return Ok(report_error(&e)),
    };

    if config.list {
        return list(registry, &selection);
    }

    let options = match config.driver_options() {
        Ok(options) => options,
        Err(e) => return Ok(report_error(&e)),
    };
    if let Some(cpu) = config.cpu {
        if let Err(e) = environment::pin_to_cpu(cpu) {
            return Ok(report_error(&e));
        }
    }
    environment::log_host();

    let clock = MonotonicClock::new();
    let mut presenter = TablePresenter::stdout();
    let summary = run_all(registry, &selection, &clock, &options, &mut presenter)
        .context("failed to write results")?;

    if summary.run_count() == 0 {
        ui::print_error("No matching benchmarks!");
        ui::print_available(&available_names(registry));
        return Ok(handle_error(&BenchError::NoMatches));
    }

    if let Some(path) = &config.json {
        write_json_report(path, &summary.reports)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let failed = summary.failed_count();
    if failed > 0 {
        ui::print_warning(&format!(
            "{failed} of {} benchmarks produced no result",
            summary.run_count()
        ));
        return Ok(exit_codes::ERROR_DEGENERATE);
    }
    Ok(exit_codes::SUCCESS)
}

fn list(registry: &CaseRegistry, selection: &Selection) -> Result<i32> {
    let names = selected_names(registry, selection);
    if names.is_empty() {
        ui::print_error("No matching benchmarks!");
        ui::print_available(&available_names(registry));
        return Ok(handle_error(&BenchError::NoMatches));
    }
    let mut out = std::io::stdout().lock();
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(exit_codes::SUCCESS)
}

fn report_error(err: &BenchError) -> i32 {
    tracing::debug!(error = ?err, "aborting before any benchmark ran");
    ui::print_error(&err.to_string());
    handle_error(err)
}

//!
//! The benchmark store binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let arguments = Arguments::try_parse()?;

    match arguments.command {
        Command::Append {
            data_file,
            suite,
            tool,
            output_file,
            commit,
            repo_url,
            alert_threshold,
            fail_on_alert,
        } => {
            benchmark_store::Append {
                store: benchmark_store::StoreConfig::new(data_file, repo_url),
                suite,
                tool,
                output_file,
                commit_file: commit,
                threshold: alert_threshold,
                fail_on_alert,
                quiet: arguments.quiet,
            }
            .run(&mut std::io::stdout())?;
        }
        Command::Show { data_file, suite } => {
            show(data_file, suite, arguments.quiet)?;
        }
    }

    Ok(())
}

///
/// Prints the stored suites with their latest runs.
///
fn show(data_file: PathBuf, suite: Option<String>, quiet: bool) -> anyhow::Result<()> {
    let store = benchmark_store::Store::new(benchmark_store::StoreConfig::new(
        data_file,
        String::new(),
    ));
    let dataset = store.read()?;
    if let Some(suite) = suite.as_deref() {
        if !dataset.entries.contains_key(suite) {
            anyhow::bail!("Suite `{suite}` not found in {:?}", store.path());
        }
    }
    if quiet {
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "{} {}",
        "Repository:".bright_white(),
        dataset.repo_url
    )?;
    let last_update =
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(dataset.last_update)
            .map(|time| time.to_rfc3339())
            .unwrap_or_else(|| dataset.last_update.to_string());
    writeln!(stdout, "{} {last_update}", "Last update:".bright_white())?;

    for (name, entries) in dataset.entries.iter() {
        if suite.as_deref().is_some_and(|suite| suite != name.as_str()) {
            continue;
        }
        writeln!(stdout)?;
        writeln!(
            stdout,
            "{} ({} runs)",
            name.bright_white(),
            entries.len()
        )?;
        let Some(latest) = entries.last() else {
            continue;
        };
        writeln!(
            stdout,
            "Latest: {} {} [{}]",
            latest.commit.short_id(),
            latest.commit.summary(),
            latest.tool
        )?;
        for bench in latest.benches.iter() {
            writeln!(
                stdout,
                "  {:>16} {:<12} {:<10} {}",
                bench.value.to_string(),
                bench.unit,
                bench.range.as_deref().unwrap_or_default(),
                bench.name
            )?;
        }
    }

    Ok(())
}

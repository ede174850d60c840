use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::watch;
use tracing::{error, info, warn};

use latest_versions::config::{Config, Overrides, token_from_env};
use latest_versions::logging::{LogOptions, init_logging};
use latest_versions::scan::{ScanSummary, Scanner, TargetList, TextReporter, load_target_list};
use latest_versions::version::registries::GitHubRegistry;

#[derive(Parser)]
#[command(name = "latest-versions")]
#[command(
    version,
    about = "Print the latest release of every minor line for GitHub repositories"
)]
struct Cli {
    /// Target list, one `owner/name,minVersion` per line
    input: PathBuf,

    /// JSON config file (defaults to $XDG_CONFIG_HOME/latest-versions/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Releases requested per repository (1-100)
    #[arg(long)]
    per_page: Option<u32>,

    /// GitHub API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Exit with status 1 if any line was rejected or any target failed
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _guard = init_logging(&LogOptions {
        verbose: cli.verbose,
        json: cli.log_json,
        file: cli.log_file.clone(),
    })?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(Overrides {
        base_url: cli.base_url,
        per_page: cli.per_page,
        token: token_from_env(),
    });

    let (list, input_ok) = match load_target_list(&cli.input) {
        Ok(list) => (list, true),
        Err(e) => {
            error!("Failed to read {}: {}", cli.input.display(), e);
            (TargetList::default(), false)
        }
    };
    info!(
        "Loaded {} targets ({} lines rejected)",
        list.targets.len(),
        list.rejected.len()
    );

    let registry = GitHubRegistry::from_config(&config.github)?;
    let scanner = Scanner::new(Arc::new(registry), config.github.per_page);

    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, skipping remaining targets");
            cancel_tx.send_replace(true);
        }
    });

    let mut reporter = TextReporter::stdout();
    let summary = scanner.scan_all(&list, &mut reporter, cancel_rx).await?;
    info!(
        "Scanned {}, failed {}, cancelled {}",
        summary.scanned, summary.failed, summary.cancelled
    );

    if cli.strict && has_problems(input_ok, &summary) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Unreadable input, a rejected line, a failed target or a cancelled run
fn has_problems(input_ok: bool, summary: &ScanSummary) -> bool {
    !input_ok || !summary.is_clean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn summary_with(rejected_lines: usize, failed: usize, cancelled: usize) -> ScanSummary {
        ScanSummary {
            rejected_lines,
            scanned: 2,
            failed,
            cancelled,
        }
    }

    #[rstest]
    #[case::clean(true, summary_with(0, 0, 0), false)]
    #[case::unreadable_input(false, ScanSummary::default(), true)]
    #[case::rejected_line(true, summary_with(1, 0, 0), true)]
    #[case::failed_target(true, summary_with(0, 1, 0), true)]
    #[case::cancelled_run(true, summary_with(0, 0, 3), true)]
    fn has_problems_returns_expected(
        #[case] input_ok: bool,
        #[case] summary: ScanSummary,
        #[case] expected: bool,
    ) {
        assert_eq!(has_problems(input_ok, &summary), expected);
    }

    #[test]
    fn cli_parses_strict_and_input() {
        let cli = Cli::try_parse_from(["latest-versions", "--strict", "-vv", "repos.csv"]).unwrap();

        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.input, PathBuf::from("repos.csv"));
    }
}

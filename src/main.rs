use anyhow::{Context, Result};
use clap::Parser;

use git_stale_branches::cli::{self, DeletionResult};
use git_stale_branches::config::{self, Config, Mode};
use git_stale_branches::domain::DEFAULT_PROTECTED_PATTERN;
use git_stale_branches::git::GitCli;
use git_stale_branches::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-stale-branches",
    about = "List or delete remote git branches with no recent commits"
)]
struct Args {
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Mode::Show,
        help = "Choose mode of execution"
    )]
    mode: Mode,

    #[arg(
        short,
        long,
        default_value_t = config::default_older_than_days(),
        value_parser = parse_older_than,
        allow_negative_numbers = true,
        help = "Consider branches whose last commit is older than this many days"
    )]
    older_than: u32,

    #[arg(
        short,
        long,
        default_value = DEFAULT_PROTECTED_PATTERN,
        help = "Regular expression of branch names that are never touched"
    )]
    protected: String,

    #[arg(
        short,
        long,
        default_value_t = config::default_remote(),
        help = "Remote to inspect"
    )]
    remote: String,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn parse_older_than(value: &str) -> std::result::Result<u32, String> {
    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => {
            u32::try_from(days).map_err(|_| format!("{} days is too large", days))
        }
        _ => Err("older-than parameter must be a positive integer".to_string()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-stale-branches {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match Config::new(args.mode, args.older_than, &args.protected, args.remote) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let repo_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let gateway = GitCli::new(repo_dir);

    let mut banner_shown = false;
    let report_deletion = |result: &DeletionResult| {
        if !banner_shown {
            ui::display_deletion_banner();
            banner_shown = true;
        }
        ui::display_deletion_result(result);
    };

    match cli::run(&gateway, &config, report_deletion) {
        Ok(outcome) => {
            ui::render_outcome(&outcome, &config);
            Ok(())
        }
        Err(e) => {
            log::debug!("{}", e);
            ui::display_abort(e.exit_code());
            std::process::exit(e.exit_code());
        }
    }
}

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

use github_explorer::search::{notification_channel, Notification, NotificationLevel};
use github_explorer::view::{self, LinkTarget, OutputFormat};
use github_explorer::{Config, GitHubClient, SearchOrchestrator, SearchState};

const HELP: &str = "Type a GitHub username to search. Commands:
  :open profile     open the profile page
  :open site        open the personal website
  :open repo N      open the N-th repository card
  :help             show this message
  :quit             exit";

#[derive(Parser, Debug)]
#[command(name = "github-explorer")]
#[command(version)]
#[command(about = "Discover GitHub users and explore their top repositories")]
struct Args {
    /// GitHub username to look up once (starts an interactive prompt when omitted)
    #[arg(short, long)]
    username: Option<String>,

    /// Output format for a one-shot lookup
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// GitHub API base URL, overrides GITHUB_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("github_explorer=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if args.no_color || args.output.is_some() {
        colored::control::set_override(false);
    }

    let config = match args.api_url {
        Some(ref url) => Config::with_api_url(url)?,
        None => Config::from_env()?,
    };

    let github = GitHubClient::new(&config)?;
    let (notifications, rx) = notification_channel();
    let mut search = SearchOrchestrator::new(github, notifications);

    match args.username.clone() {
        Some(username) => run_once(&mut search, rx, &username, &args).await,
        None => run_interactive(&mut search, rx).await,
    }
}

async fn run_once(
    search: &mut SearchOrchestrator,
    mut rx: UnboundedReceiver<Notification>,
    username: &str,
    args: &Args,
) -> anyhow::Result<ExitCode> {
    let Some(username) = search.begin(username) else {
        drain_notifications(&mut rx);
        return Ok(ExitCode::FAILURE);
    };

    let pb = spinner(&username);
    search.complete(&username).await;
    pb.finish_and_clear();
    drain_notifications(&mut rx);

    let output = view::render(search.state(), args.format)?;
    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        print!("{}", output);
        std::io::stdout().flush()?;
    }

    Ok(match search.state() {
        SearchState::Success { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn run_interactive(
    search: &mut SearchOrchestrator,
    mut rx: UnboundedReceiver<Notification>,
) -> anyhow::Result<ExitCode> {
    print_view(search.state())?;
    println!("\n{}", HELP.dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n{} ", "github>".bold());
        std::io::stdout().flush()?;

        // Once ctrl_c() has been polled, SIGINT no longer terminates the process.
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
            match name {
                "q" | "quit" | "exit" => break,
                "h" | "help" => println!("{}", HELP),
                "open" => open_link(search.state(), rest),
                _ => eprintln!("Unknown command :{} (try :help)", name),
            }
            continue;
        }

        if let Some(username) = search.begin(line) {
            let pb = spinner(&username);
            let cancelled = tokio::select! {
                _ = search.complete(&username) => false,
                _ = tokio::signal::ctrl_c() => true,
            };
            pb.finish_and_clear();

            if cancelled {
                search.cancel();
                eprintln!("{}", "Search cancelled".yellow());
            }
            print_view(search.state())?;
        }

        drain_notifications(&mut rx);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_view(state: &SearchState) -> anyhow::Result<()> {
    print!("{}", view::render(state, OutputFormat::Text)?);
    std::io::stdout().flush()?;
    Ok(())
}

fn open_link(state: &SearchState, target: &str) {
    let Some(target) = LinkTarget::parse(target) else {
        eprintln!("Usage: :open profile | site | repo N");
        return;
    };

    match target.resolve(state) {
        Some(url) => {
            tracing::info!("Opening {}", url);
            if let Err(e) = open::that(&url) {
                eprintln!(
                    "{}",
                    Notification::error(format!("Could not open {}: {}", url, e))
                        .to_string()
                        .red()
                );
            }
        }
        None => eprintln!("Nothing to open for {:?}", target),
    }
}

fn drain_notifications(rx: &mut UnboundedReceiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        let line = notification.to_string();
        match notification.level {
            NotificationLevel::Success => eprintln!("{}", line.green()),
            NotificationLevel::Error => eprintln!("{}", line.red()),
        }
    }
}

fn spinner(username: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Searching for {}...", username));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use url::Url;

use cli::Cli;
use pageprobe::commands::{Command, Console, Flow};
use pageprobe::io::fetch_page;
use pageprobe::lifecycle::init_logging;
use pageprobe::service::{extract_all, TimingSnapshot, TimingSource};
use pageprobe::views::report_view::render_summary;
use pageprobe::Page;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let settings = cli.settings();

    let (page, fetched) = if cli.is_remote() {
        let url = Url::parse(&cli.source).with_context(|| format!("invalid URL {}", cli.source))?;
        let fetched = fetch_page(&url, &settings)
            .await
            .with_context(|| format!("failed to fetch {}", url))?;
        info!(
            "HTTP {} from {}, first byte after {:.0} ms",
            fetched.status, fetched.url, fetched.response_start_ms
        );
        (Page::parse(&fetched.html, fetched.url.clone()), Some(fetched))
    } else {
        let base_url = cli
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("invalid --base-url")?;
        let page = Page::from_file(Path::new(&cli.source), base_url)
            .with_context(|| format!("failed to load {}", cli.source))?;
        (page, None)
    };
    info!("Loaded page {}", page.url());

    let recorded = cli
        .timing
        .as_deref()
        .map(TimingSnapshot::from_file)
        .transpose()
        .context("failed to read timing snapshot")?;
    let timing: Option<&dyn TimingSource> = match (&recorded, &fetched) {
        (Some(snapshot), _) => Some(snapshot as &dyn TimingSource),
        (None, Some(fetched)) => Some(fetched as &dyn TimingSource),
        (None, None) => None,
    };
    debug!("Timing source available: {}", timing.is_some());

    let stdout = io::stdout();
    if cli.interactive {
        let mut console = Console::new(&page, timing, &settings.export_dir, stdout.lock());
        console.run(Command::Menu)?;
        for line in io::stdin().lock().lines() {
            if console.run_line(&line?)? == Flow::Quit {
                break;
            }
        }
    } else if !cli.commands.is_empty() {
        let mut console = Console::new(&page, timing, &settings.export_dir, stdout.lock());
        for input in &cli.commands {
            if console.run_line(input)? == Flow::Quit {
                break;
            }
        }
    } else {
        let report = extract_all(&page, timing);
        let mut out = stdout.lock();
        if cli.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            writeln!(out, "{}", render_summary(&report))?;
        }
    }

    Ok(())
}

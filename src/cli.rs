use std::path::PathBuf;

use clap::Parser;

use pageprobe::config::{ProbeSettings, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "pageprobe",
    version,
    about = "Extract page data and score SEO and accessibility basics"
)]
pub struct Cli {
    #[arg(help = "Page to analyse: an http(s) URL or a local HTML file")]
    pub source: String,
    #[arg(
        long,
        help = "Base URL for a local file (resolves relative links, decides internal links)"
    )]
    pub base_url: Option<String>,
    #[arg(
        short = 'c',
        long = "command",
        value_name = "ID|NAME",
        help = "Run a command (0-12 or its name); repeatable"
    )]
    pub commands: Vec<String>,
    #[arg(short, long, help = "Read commands from stdin, one per line")]
    pub interactive: bool,
    #[arg(long, help = "Print the full report as JSON")]
    pub json: bool,
    #[arg(long, value_name = "FILE", help = "Recorded timing snapshot (JSON)")]
    pub timing: Option<PathBuf>,
    #[arg(
        long,
        env = "PAGEPROBE_EXPORT_DIR",
        default_value = ".",
        help = "Directory for JSON exports"
    )]
    pub export_dir: PathBuf,
    #[arg(long, env = "PAGEPROBE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    #[arg(
        long,
        env = "PAGEPROBE_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "HTTP timeout in seconds"
    )]
    pub timeout: u64,
    #[arg(short, long, help = "Debug logging for pageprobe")]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> ProbeSettings {
        ProbeSettings {
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout,
            export_dir: self.export_dir.clone(),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

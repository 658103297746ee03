use std::io::Write;
use std::path::PathBuf;

use tracing::{error, info};

use super::Command;
use crate::domain::page::Page;
use crate::domain::session::SessionData;
use crate::error::{AppError, Result};
use crate::extractor;
use crate::io::export_json;
use crate::service::auditor::{AccessibilityAuditor, Auditor, SeoAuditor};
use crate::service::{extract_all, performance, TimingSource};
use crate::views::menu::{about, HELP, MENU};
use crate::views::report_view;

/// Whether the prompt loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One analysis session over a single page.
///
/// Each command stores its result in the session and prints it to `out`.
pub struct Console<'a, W: Write> {
    page: &'a Page,
    timing: Option<&'a dyn TimingSource>,
    session: SessionData,
    export_dir: PathBuf,
    out: W,
}

impl<'a, W: Write> Console<'a, W> {
    pub fn new(
        page: &'a Page,
        timing: Option<&'a dyn TimingSource>,
        export_dir: impl Into<PathBuf>,
        out: W,
    ) -> Self {
        Self {
            page,
            timing,
            session: SessionData::default(),
            export_dir: export_dir.into(),
            out,
        }
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Parse and run one input line. Unknown input is logged and ignored.
    pub fn run_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<Command>() {
            Ok(command) => self.run(command),
            Err(AppError::UnknownCommand(input)) => {
                error!("Unknown command: {}", input);
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    pub fn run(&mut self, command: Command) -> Result<Flow> {
        let page = self.page;
        let text = match command {
            Command::Menu => MENU.to_string(),
            Command::Help => HELP.to_string(),
            Command::About => about(),
            Command::Quit => return Ok(Flow::Quit),
            Command::Links => {
                let links = extractor::extract_links(page);
                let text = report_view::render_links(&links);
                self.session.links = Some(links);
                text
            }
            Command::Images => {
                let images = extractor::extract_images(page);
                let text = report_view::render_images(&images);
                self.session.images = Some(images);
                text
            }
            Command::Metadata => {
                let metadata = extractor::extract_metadata(page);
                let text = report_view::render_metadata(&metadata);
                self.session.metadata = Some(metadata);
                text
            }
            Command::Structure => {
                let structure = extractor::extract_structure(page);
                let text = report_view::render_json("Page Structure", &structure);
                self.session.structure = Some(structure);
                text
            }
            Command::Content => {
                let content = extractor::extract_text_content(page);
                let text = report_view::render_json("Text Content", &content);
                self.session.content = Some(content);
                text
            }
            Command::ShowData => report_view::render_json("Current Data", &self.session),
            Command::Seo => {
                let card = SeoAuditor.scorecard(page);
                let report = SeoAuditor.report(&card);
                let text = format!(
                    "{}\n{}",
                    report_view::render_scorecard(SeoAuditor.name(), &card),
                    report_view::render_seo(&report)
                );
                self.session.seo = Some(report);
                text
            }
            Command::Accessibility => {
                let card = AccessibilityAuditor.scorecard(page);
                let report = AccessibilityAuditor.report(&card);
                let text = format!(
                    "{}\n{}",
                    report_view::render_scorecard(AccessibilityAuditor.name(), &card),
                    report_view::render_accessibility(&report)
                );
                self.session.accessibility = Some(report);
                text
            }
            Command::Resources => {
                let resources = extractor::extract_resources(page);
                let text = report_view::render_json("External Resources", &resources);
                self.session.resources = Some(resources);
                text
            }
            Command::Performance => {
                let metrics = performance(self.timing);
                let text = report_view::render_performance(metrics.as_ref());
                self.session.performance = Some(metrics);
                text
            }
            Command::ExtractAll => {
                let report = extract_all(page, self.timing);
                let text = report_view::render_summary(&report);
                self.session = SessionData::from(report);
                text
            }
            Command::Export => match export_json(&self.session, &self.export_dir) {
                Ok(Some(path)) => format!("Exported to {}", path.display()),
                Ok(None) => "Nothing to export".to_string(),
                Err(e) => {
                    error!("{}", e);
                    "Export failed".to_string()
                }
            },
        };

        info!("Command '{}' done, {} session entries", command, self.session.len());
        self.emit(&text)?;
        Ok(Flow::Continue)
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).map_err(|e| AppError::io("<output>", e))
    }
}

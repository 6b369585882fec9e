use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::adapters::{GeminiTextService, GoogleVisionOcrService};
use crate::core::interfaces::adapters::{GenerativeTextService, OcrService};
use crate::core::models::{AppConfig, ImagePayload, UserSettings};
use crate::core::orchestrators::analysis_orchestrator::AnalysisOrchestrator;
use crate::core::services::{TextExtractor, WritingAnalyzer};
use crate::global_constants;
use crate::presentation::{
    render_image_summary, render_stage_status, AnalysisReportView, ConsoleCommand,
};

pub struct HandwritingApp {
    orchestrator: AnalysisOrchestrator,
    settings: UserSettings,
    loaded_image: Option<ImagePayload>,
}

impl HandwritingApp {
    pub fn build(config: AppConfig) -> Self {
        log::info!("[APP] Initializing application");

        let ocr_service = Arc::new(GoogleVisionOcrService::build(
            config.settings.vision_endpoint.clone(),
            config.credentials.vision.clone(),
        ));
        let text_service = Arc::new(GeminiTextService::build(
            config.settings.gemini_endpoint.clone(),
            config.credentials.gemini_api_key.clone(),
        ));

        Self::build_with_services(config.settings, ocr_service, text_service)
    }

    pub fn build_with_services(
        settings: UserSettings,
        ocr_service: Arc<dyn OcrService>,
        text_service: Arc<dyn GenerativeTextService>,
    ) -> Self {
        let orchestrator = AnalysisOrchestrator::build(
            TextExtractor::new(ocr_service),
            WritingAnalyzer::new(text_service, settings.gemini_model.clone()),
        );

        Self {
            orchestrator,
            settings,
            loaded_image: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", global_constants::STARTUP_BANNER)?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            write!(stdout, "{}", global_constants::PROMPT_MARKER)?;
            stdout.flush()?;

            let Some(line) = lines.next_line().await? else {
                log::info!("[APP] Input closed, exiting");
                break;
            };

            if !self
                .handle_command(ConsoleCommand::parse(&line), &mut stdout)
                .await?
            {
                break;
            }
        }

        log::info!("[APP] Exiting {}", global_constants::APPLICATION_NAME);
        Ok(())
    }

    /// Returns `false` once the session should end.
    pub async fn handle_command(
        &mut self,
        command: ConsoleCommand,
        out: &mut dyn Write,
    ) -> Result<bool> {
        log::debug!("[APP] Command: {:?}", command);

        match command {
            ConsoleCommand::Empty => {}
            ConsoleCommand::Help => writeln!(out, "{}", global_constants::HELP_TEXT)?,
            ConsoleCommand::Quit => return Ok(false),
            ConsoleCommand::LoadImage(path) => self.load_image(&path, out).await?,
            ConsoleCommand::Analyze => self.analyze_loaded_image(out).await?,
        }

        Ok(true)
    }

    async fn load_image(&mut self, path: &Path, out: &mut dyn Write) -> Result<()> {
        match ImagePayload::load_from_path(path).await {
            Ok(image) => {
                writeln!(out, "{}", render_image_summary(&image))?;
                self.loaded_image = Some(image);
            }
            Err(e) => {
                log::warn!("[APP] Failed to load {:?}: {}", path, e);
                writeln!(out, "Could not open {}: {}", path.display(), e)?;
            }
        }
        Ok(())
    }

    async fn analyze_loaded_image(&mut self, out: &mut dyn Write) -> Result<()> {
        let Some(image) = &self.loaded_image else {
            writeln!(out, "{}", global_constants::USER_MESSAGE_NO_IMAGE)?;
            return Ok(());
        };

        let mut progress_written: std::io::Result<()> = Ok(());
        let report = {
            let mut show_progress = |stage| {
                if let Some(status) = render_stage_status(stage) {
                    if progress_written.is_ok() {
                        progress_written = writeln!(out, "{}", status);
                    }
                }
            };
            self.orchestrator.run(image, &mut show_progress).await?
        };
        progress_written?;
        log::debug!(
            "[APP] Run {} finished at stage {}",
            report.run_id,
            self.orchestrator.current_stage()
        );

        let view =
            AnalysisReportView::build_with_report(&report, self.settings.show_service_error_details);
        writeln!(out, "\n{}\n", view.render_text())?;
        Ok(())
    }
}

use std::path::PathBuf;

use oralcare_core::wizard::Wizard;
use oralcare_export::capture::{export_report, save_artifact};
use oralcare_export::error::ExportError;
use oralcare_instruments::engine::evaluate;

use crate::commands::{Applied, Command, HELP, apply};
use crate::config::OralcareConfig;
use crate::pages;

/// What the terminal loop should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Export,
    Quit,
}

/// One questionnaire session: the wizard plus the settings it exports with.
pub struct Session {
    wizard: Wizard,
    config: OralcareConfig,
}

impl Session {
    pub fn new(config: OralcareConfig) -> Self {
        tracing::info!("assessment session started");
        Self {
            wizard: Wizard::new(),
            config,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn render_current(&self) -> String {
        pages::render(&self.wizard)
    }

    /// Handles one line of user input. Input errors are reported back as
    /// text; the session always continues.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Print(String::new());
        }

        let applied = line
            .parse::<Command>()
            .and_then(|command| apply(&mut self.wizard, command));

        match applied {
            Ok(Applied::Navigated) => Outcome::Print(self.render_current()),
            Ok(Applied::Updated(message)) => Outcome::Print(format!("ok: {message}")),
            Ok(Applied::Show) => match self.wizard.assessment().to_json() {
                Ok(json) => Outcome::Print(json),
                Err(e) => Outcome::Print(format!("error: {e}")),
            },
            Ok(Applied::Help) => Outcome::Print(HELP.to_string()),
            Ok(Applied::Export) => Outcome::Export,
            Ok(Applied::Quit) => Outcome::Quit,
            Err(e) => Outcome::Print(format!("error: {e}")),
        }
    }

    /// Scores the current assessment and writes the report image into the
    /// configured output directory.
    pub async fn export(&self) -> Result<PathBuf, ExportError> {
        let assessment = self.wizard.assessment();
        let report = evaluate(assessment);
        let artifact = export_report(assessment, &report, &self.config.export_options()).await?;
        save_artifact(&artifact, &self.config.output_dir).await
    }
}

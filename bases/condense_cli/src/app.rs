// bases/condense_cli/src/app.rs
use crate::args::{Args, Command};
use crate::output::OutputHandler;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use condense_engine::{CondenseSettings, Condenser};
use library_config::Settings;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self { args, output }
    }

    pub async fn run(&self) -> Result<()> {
        let settings = Settings::load(&self.args.config)
            .wrap_err_with(|| format!("Could not load {}", self.args.config.display()))?;

        match self.args.command {
            Command::Run => self.condense(&settings).await,
            Command::Export => self.export(&settings),
        }
    }

    async fn condense(&self, settings: &Settings) -> Result<()> {
        let condense_settings = condense_settings(settings);
        self.output.print_condense_start(
            &condense_settings.library_root,
            &condense_settings.condensed_root,
        );

        let report = Condenser::new(condense_settings).run().await?;

        self.output.print_condense_complete(&report);
        Ok(())
    }

    fn export(&self, settings: &Settings) -> Result<()> {
        let location = &settings.export.location;
        let summary = library_export::export(&settings.library.location, location)?;

        self.output.print_export_complete(&summary, location);
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}

pub fn condense_settings(settings: &Settings) -> CondenseSettings {
    let mut condense_settings = CondenseSettings::new(
        &settings.library.location,
        &settings.library.condensed_location,
    )
    .with_jobs(settings.condense.jobs);

    if let Some((quality, mode)) = settings.condense.compression() {
        condense_settings = condense_settings.with_compression(quality, mode);
    }
    condense_settings
}

// bases/condense_cli/src/output.rs
use condense_engine::CondenseReport;
use library_export::ExportSummary;
use std::path::Path;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_condense_start(&self, library: &Path, condensed: &Path) {
        println!("Condensing {} into {}", library.display(), condensed.display());
    }

    pub fn print_condense_complete(&self, report: &CondenseReport) {
        println!("Done: {}", report);
    }

    pub fn print_export_complete(&self, summary: &ExportSummary, location: &Path) {
        println!(
            "Exported {} titles and {} playlists to {}",
            summary.titles,
            summary.playlists,
            location.display()
        );
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}

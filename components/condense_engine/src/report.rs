use std::fmt;

const SEPARATOR: &str =
    "-----------------------------------------------------------------------------------------------------------";

/// Counters of one condense run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CondenseReport {
    pub removed: usize,
    pub added: usize,
    pub existing: usize,
    pub not_found: usize,
}

impl CondenseReport {
    pub fn log_summary(&self) {
        tracing::info!("{}", SEPARATOR);
        tracing::info!("{} title(s) removed", self.removed);
        tracing::info!("{} title(s) added", self.added);
        tracing::info!("{} title(s) already exist", self.existing);
        tracing::info!("{} title(s) not found", self.not_found);
        tracing::info!("{}", SEPARATOR);
    }
}

impl fmt::Display for CondenseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} removed, {} added, {} already existing, {} not found",
            self.removed, self.added, self.existing, self.not_found
        )
    }
}

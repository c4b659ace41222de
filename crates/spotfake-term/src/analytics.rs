use log::info;

use spotfake_core::{
    analytics::{AnalyticsSink, MistakeTally, WrongAnswerEvent},
    catalog::DocumentCatalog,
};

/// Logs every wrong answer and keeps a per-category tally for the exit
/// summary.
pub struct LoggingAnalytics<C> {
    catalog: C,
    tally: MistakeTally,
}

impl<C: DocumentCatalog> LoggingAnalytics<C> {
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            tally: MistakeTally::new(),
        }
    }

    pub fn tally(&self) -> &MistakeTally {
        &self.tally
    }

    pub fn log_summary(&self) {
        match self.tally.weakest_category() {
            Some((category, count)) => info!(
                "analytics: {} mistakes, most in {} ({})",
                self.tally.total(),
                category.as_str(),
                count
            ),
            None => info!("analytics: no mistakes recorded"),
        }
    }
}

impl<C: DocumentCatalog> AnalyticsSink for LoggingAnalytics<C> {
    fn record_wrong_answer(&mut self, event: WrongAnswerEvent) {
        info!(
            "analytics: wrong answer document={} choice={} truth={} at={}ms",
            event.document_id,
            if event.choice { "real" } else { "fake" },
            if event.correct_answer { "real" } else { "fake" },
            event.timestamp_ms
        );
        self.tally.observe(&self.catalog, &event);
    }
}

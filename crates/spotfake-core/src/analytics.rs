//! Wrong-answer reporting and mistake aggregation.

use log::warn;

use crate::catalog::{Category, CatalogError, Difficulty, DocumentCatalog, DocumentId};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WrongAnswerEvent {
    pub document_id: DocumentId,
    pub choice: bool,
    pub correct_answer: bool,
    pub timestamp_ms: u64,
}

/// Fire-and-forget receiver for analytics events.
pub trait AnalyticsSink {
    fn record_wrong_answer(&mut self, event: WrongAnswerEvent);
}

impl AnalyticsSink for () {
    fn record_wrong_answer(&mut self, _event: WrongAnswerEvent) {}
}

impl<T: AnalyticsSink + ?Sized> AnalyticsSink for &mut T {
    fn record_wrong_answer(&mut self, event: WrongAnswerEvent) {
        (**self).record_wrong_answer(event);
    }
}

/// Mistake counts grouped the way the feedback screen summarises them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MistakeTally {
    total: u32,
    by_category: [u16; Category::COUNT],
    by_difficulty: [u16; Difficulty::COUNT],
}

impl MistakeTally {
    pub const fn new() -> Self {
        Self {
            total: 0,
            by_category: [0; Category::COUNT],
            by_difficulty: [0; Difficulty::COUNT],
        }
    }

    pub fn record<C>(&mut self, catalog: &C, event: &WrongAnswerEvent) -> Result<(), CatalogError>
    where
        C: DocumentCatalog + ?Sized,
    {
        let record = catalog.lookup(event.document_id)?;
        self.total = self.total.saturating_add(1);
        let category = &mut self.by_category[record.category as usize];
        *category = category.saturating_add(1);
        let difficulty = &mut self.by_difficulty[record.difficulty as usize];
        *difficulty = difficulty.saturating_add(1);
        Ok(())
    }

    /// Like [`Self::record`], but logs and drops events for unknown ids.
    pub fn observe<C>(&mut self, catalog: &C, event: &WrongAnswerEvent)
    where
        C: DocumentCatalog + ?Sized,
    {
        if let Err(err) = self.record(catalog, event) {
            warn!("analytics: mistake not tallied: {}", err);
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn category_count(&self, category: Category) -> u16 {
        self.by_category[category as usize]
    }

    pub fn difficulty_count(&self, difficulty: Difficulty) -> u16 {
        self.by_difficulty[difficulty as usize]
    }

    /// Category with the most mistakes; ties go to the earlier category.
    pub fn weakest_category(&self) -> Option<(Category, u16)> {
        const ALL: [Category; Category::COUNT] = [
            Category::Certificate,
            Category::Invoice,
            Category::Receipt,
            Category::Insurance,
            Category::DamageReport,
            Category::VehicleRegistration,
            Category::Passport,
            Category::License,
            Category::IdCard,
            Category::Contract,
            Category::Diploma,
        ];

        ALL.iter()
            .map(|&category| (category, self.category_count(category)))
            .filter(|&(_, count)| count > 0)
            .fold(None, |best: Option<(Category, u16)>, candidate| match best {
                Some(best) if best.1 >= candidate.1 => Some(best),
                _ => Some(candidate),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dataset::default_catalog;

    fn wrong(id: u16, at_ms: u64) -> WrongAnswerEvent {
        WrongAnswerEvent {
            document_id: DocumentId(id),
            choice: true,
            correct_answer: false,
            timestamp_ms: at_ms,
        }
    }

    #[test]
    fn mistakes_are_grouped_by_category_and_difficulty() {
        let catalog = default_catalog();
        let mut tally = MistakeTally::new();

        tally.record(&catalog, &wrong(9, 10)).unwrap();
        tally.record(&catalog, &wrong(11, 20)).unwrap();
        tally.record(&catalog, &wrong(7, 30)).unwrap();

        assert_eq!(tally.total(), 3);
        assert_eq!(tally.category_count(Category::DamageReport), 2);
        assert_eq!(tally.category_count(Category::Receipt), 1);
        assert_eq!(tally.difficulty_count(Difficulty::Expert), 1);
        assert_eq!(tally.difficulty_count(Difficulty::Medium), 2);
        assert_eq!(
            tally.weakest_category(),
            Some((Category::DamageReport, 2))
        );
    }

    #[test]
    fn unknown_document_is_not_found_and_not_counted() {
        let catalog = default_catalog();
        let mut tally = MistakeTally::new();

        assert_eq!(
            tally.record(&catalog, &wrong(404, 0)),
            Err(CatalogError::NotFound(DocumentId(404)))
        );
        tally.observe(&catalog, &wrong(404, 0));
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.weakest_category(), None);
    }
}

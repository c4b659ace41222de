//! Document records and the per-session presentation order.

pub mod dataset;

use core::fmt;

use heapless::Vec;
use log::debug;
use rand::{Rng, RngCore};

/// Default session capacity. Hosts with larger catalogs size
/// [`RoundSequence`] themselves.
pub const DEFAULT_ROUND_CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DocumentId(pub u16);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Certificate,
    Invoice,
    Receipt,
    Insurance,
    DamageReport,
    VehicleRegistration,
    Passport,
    License,
    IdCard,
    Contract,
    Diploma,
}

impl Category {
    pub const COUNT: usize = 11;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Invoice => "invoice",
            Self::Receipt => "receipt",
            Self::Insurance => "insurance",
            Self::DamageReport => "damage_report",
            Self::VehicleRegistration => "vehicle_registration",
            Self::Passport => "passport",
            Self::License => "license",
            Self::IdCard => "id_card",
            Self::Contract => "contract",
            Self::Diploma => "diploma",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const COUNT: usize = 4;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ForgeryKind {
    AiGeneration,
    DigitalEditing,
}

/// How a forged record was produced and what gives it away.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ForgeryDetails {
    pub kind: ForgeryKind,
    pub detection_clues: &'static [&'static str],
}

/// Explanation shown once the player has answered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EducationalContent {
    /// Shown when the player got it wrong.
    pub when_wrong: &'static str,
    /// Shown in both cases; the "what to look for" line.
    pub key_indicators: &'static str,
}

impl EducationalContent {
    pub const fn is_complete(&self) -> bool {
        !self.when_wrong.is_empty() && !self.key_indicators.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub image_ref: &'static str,
    pub is_authentic: bool,
    pub label: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub security_features: &'static [&'static str],
    pub forgery: Option<ForgeryDetails>,
    pub educational: EducationalContent,
}

impl DocumentRecord {
    fn integrity_issue(&self) -> Option<IntegrityIssue> {
        if self.image_ref.is_empty() {
            return Some(IntegrityIssue::MissingImage(self.id));
        }
        if self.label.is_empty() {
            return Some(IntegrityIssue::MissingLabel(self.id));
        }
        if !self.educational.is_complete() {
            return Some(IntegrityIssue::MissingEducationalContent(self.id));
        }
        None
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IntegrityIssue {
    EmptyCatalog,
    NoForgedRecord,
    DuplicateId(DocumentId),
    MissingImage(DocumentId),
    MissingLabel(DocumentId),
    MissingEducationalContent(DocumentId),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    /// The catalog cannot seed a session. Fatal at bootstrap.
    DataIntegrity(IntegrityIssue),
    /// The catalog is valid but larger than the sequence buffer.
    CapacityExceeded { count: usize, capacity: usize },
    NotFound(DocumentId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataIntegrity(issue) => match issue {
                IntegrityIssue::EmptyCatalog => f.write_str("catalog is empty"),
                IntegrityIssue::NoForgedRecord => {
                    f.write_str("catalog has no forged record to open the session with")
                }
                IntegrityIssue::DuplicateId(id) => write!(f, "document id {id} is used twice"),
                IntegrityIssue::MissingImage(id) => write!(f, "document {id} has no image"),
                IntegrityIssue::MissingLabel(id) => write!(f, "document {id} has no label"),
                IntegrityIssue::MissingEducationalContent(id) => {
                    write!(f, "document {id} has no educational content")
                }
            },
            Self::CapacityExceeded { count, capacity } => write!(
                f,
                "catalog has {count} records, the session buffer holds {capacity}"
            ),
            Self::NotFound(id) => write!(f, "document {id} not found"),
        }
    }
}

impl core::error::Error for CatalogError {}

/// Read-only store of document records.
pub trait DocumentCatalog {
    fn record_count(&self) -> u16;
    fn record_at(&self, index: u16) -> Option<&DocumentRecord>;

    fn lookup(&self, id: DocumentId) -> Result<&DocumentRecord, CatalogError> {
        (0..self.record_count())
            .filter_map(|index| self.record_at(index))
            .find(|record| record.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

/// Catalog over a static slice of records.
#[derive(Clone, Copy, Debug)]
pub struct StaticCatalog {
    records: &'static [DocumentRecord],
}

impl StaticCatalog {
    pub const fn new(records: &'static [DocumentRecord]) -> Self {
        Self { records }
    }

    pub const fn records(&self) -> &'static [DocumentRecord] {
        self.records
    }
}

impl DocumentCatalog for StaticCatalog {
    fn record_count(&self) -> u16 {
        self.records.len().min(u16::MAX as usize) as u16
    }

    fn record_at(&self, index: u16) -> Option<&DocumentRecord> {
        self.records.get(index as usize)
    }
}

/// Presentation order for one session, as indices into the catalog.
///
/// Never empty, never mutated after construction, and always opens with a
/// forged record. Positions wrap, so the sequence has no end. `N` bounds the
/// catalog size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundSequence<const N: usize = DEFAULT_ROUND_CAPACITY> {
    order: Vec<u16, N>,
}

impl<const N: usize> RoundSequence<N> {
    pub fn len(&self) -> u16 {
        self.order.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Catalog index shown at `position`, wrapping modulo the length.
    pub fn index_at(&self, position: u16) -> u16 {
        let len = self.order.len().max(1);
        self.order
            .get(position as usize % len)
            .copied()
            .unwrap_or_default()
    }

    pub fn next_position(&self, position: u16) -> u16 {
        let len = self.len().max(1);
        (position % len + 1) % len
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.order
    }
}

/// Validate the catalog and build a session order.
///
/// One forged record is picked uniformly as the opener; the remaining
/// records follow in a uniform (Fisher–Yates) permutation.
pub fn build_round_sequence<const N: usize, C, R>(
    catalog: &C,
    rng: &mut R,
) -> Result<RoundSequence<N>, CatalogError>
where
    C: DocumentCatalog + ?Sized,
    R: RngCore + ?Sized,
{
    validate_catalog(catalog)?;

    let count = catalog.record_count();
    let forged_count = (0..count)
        .filter_map(|index| catalog.record_at(index))
        .filter(|record| !record.is_authentic)
        .count();
    if forged_count == 0 {
        return Err(CatalogError::DataIntegrity(IntegrityIssue::NoForgedRecord));
    }
    if count as usize > N {
        return Err(CatalogError::CapacityExceeded {
            count: count as usize,
            capacity: N,
        });
    }

    let mut pick = rng.random_range(0..forged_count);
    let mut opener = 0u16;
    for index in 0..count {
        let Some(record) = catalog.record_at(index) else {
            continue;
        };
        if record.is_authentic {
            continue;
        }
        if pick == 0 {
            opener = index;
            break;
        }
        pick -= 1;
    }

    let mut order: Vec<u16, N> = Vec::new();
    let _ = order.push(opener);
    for index in (0..count).filter(|&index| index != opener) {
        let _ = order.push(index);
    }

    let rest = &mut order[1..];
    let mut idx = rest.len();
    while idx > 1 {
        idx -= 1;
        let j = rng.random_range(0..=idx);
        rest.swap(idx, j);
    }

    debug!(
        "round sequence built: records={} forged={} opener={}",
        count,
        forged_count,
        catalog.record_at(opener).map(|record| record.id.0).unwrap_or_default()
    );

    Ok(RoundSequence { order })
}

fn validate_catalog<C>(catalog: &C) -> Result<(), CatalogError>
where
    C: DocumentCatalog + ?Sized,
{
    let count = catalog.record_count() as usize;
    if count == 0 {
        return Err(CatalogError::DataIntegrity(IntegrityIssue::EmptyCatalog));
    }

    for index in 0..catalog.record_count() {
        let Some(record) = catalog.record_at(index) else {
            continue;
        };
        if let Some(issue) = record.integrity_issue() {
            return Err(CatalogError::DataIntegrity(issue));
        }
        let repeated = (0..index)
            .filter_map(|earlier| catalog.record_at(earlier))
            .any(|earlier| earlier.id == record.id);
        if repeated {
            return Err(CatalogError::DataIntegrity(IntegrityIssue::DuplicateId(
                record.id,
            )));
        }
    }

    Ok(())
}

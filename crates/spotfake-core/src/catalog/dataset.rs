//! Sample dataset shipped with the quiz until a hosted catalog is wired in.

use super::{
    Category, Difficulty, DocumentId, DocumentRecord, EducationalContent, ForgeryDetails,
    ForgeryKind, StaticCatalog,
};

pub const SAMPLE_RECORD_COUNT: usize = 11;

pub static SAMPLE_RECORDS: [DocumentRecord; SAMPLE_RECORD_COUNT] = [
    DocumentRecord {
        id: DocumentId(1),
        image_ref: "dataset/real/ncd-sourced-online.jpg",
        is_authentic: true,
        label: "Valid NCD Document",
        category: Category::Certificate,
        difficulty: Difficulty::Medium,
        description: "Authentic no claims discount certificate sourced online",
        security_features: &[
            "Official letterhead",
            "Consistent formatting",
            "Proper contact information",
            "Professional typography",
        ],
        forgery: None,
        educational: EducationalContent {
            when_wrong: "This NCD document is REAL. Genuine certificates keep branding, \
formatting and contact details consistent.",
            key_indicators: "Official letterhead, tidy layout and one typeface throughout.",
        },
    },
    DocumentRecord {
        id: DocumentId(2),
        image_ref: "dataset/real/invoice-sourced-online.jpg",
        is_authentic: true,
        label: "Valid Invoice",
        category: Category::Invoice,
        difficulty: Difficulty::Easy,
        description: "Legitimate invoice sourced online",
        security_features: &[
            "Sequential invoice number",
            "Proper VAT information",
            "Clear itemization",
            "Professional layout",
        ],
        forgery: None,
        educational: EducationalContent {
            when_wrong: "This invoice is REAL. Genuine invoices carry sequential numbering \
and complete VAT details.",
            key_indicators: "Consistent formatting, correct tax lines, real business details.",
        },
    },
    DocumentRecord {
        id: DocumentId(3),
        image_ref: "dataset/real/receipt-sourced-online.jpg",
        is_authentic: true,
        label: "Valid Receipt",
        category: Category::Receipt,
        difficulty: Difficulty::Easy,
        description: "Authentic till receipt sourced online",
        security_features: &[
            "Clear transaction details",
            "Date and time stamp",
            "Payment method info",
            "Store branding",
        ],
        forgery: None,
        educational: EducationalContent {
            when_wrong: "This receipt is REAL. Look at the transaction lines, the timestamp \
and the store branding.",
            key_indicators: "Clean pricing columns and legitimate store information.",
        },
    },
    DocumentRecord {
        id: DocumentId(4),
        image_ref: "dataset/real/insurance-receipt-genuine.jpg",
        is_authentic: true,
        label: "Genuine Insurance Receipt",
        category: Category::Insurance,
        difficulty: Difficulty::Medium,
        description: "Authentic receipt from a legitimate insurer",
        security_features: &[
            "Official insurance branding",
            "Policy reference numbers",
            "Proper contact information",
            "Professional letterhead",
        ],
        forgery: None,
        educational: EducationalContent {
            when_wrong: "This insurance document is REAL. It carries official branding and \
valid policy numbers.",
            key_indicators: "Consistent insurer branding and well-formed policy references.",
        },
    },
    DocumentRecord {
        id: DocumentId(5),
        image_ref: "dataset/real/damage-report-genuine.jpg",
        is_authentic: true,
        label: "Genuine Damage Report",
        category: Category::DamageReport,
        difficulty: Difficulty::Hard,
        description: "Authentic damage assessment from a legitimate insurer",
        security_features: &[
            "Professional damage assessment",
            "Detailed cost breakdown",
            "Official signatures",
        ],
        forgery: None,
        educational: EducationalContent {
            when_wrong: "This damage report is REAL. The assessment detail and cost breakdown \
are internally consistent.",
            key_indicators: "Itemised costs that add up and a signed assessor block.",
        },
    },
    DocumentRecord {
        id: DocumentId(6),
        image_ref: "dataset/fake/ncd-genai.png",
        is_authentic: false,
        label: "AI-Generated NCD Document",
        category: Category::Certificate,
        difficulty: Difficulty::Hard,
        description: "AI-generated NCD certificate with synthetic content",
        security_features: &[],
        forgery: Some(ForgeryDetails {
            kind: ForgeryKind::AiGeneration,
            detection_clues: &[
                "Lettering that melts into the background",
                "Logo without a clean vector edge",
                "Dates that do not line up with the policy period",
            ],
        }),
        educational: EducationalContent {
            when_wrong: "This NCD document is FAKE. It was produced by an image model; the \
text and logo lose detail under zoom.",
            key_indicators: "Smudged glyphs, inconsistent dates and soft logo edges.",
        },
    },
    DocumentRecord {
        id: DocumentId(7),
        image_ref: "dataset/fake/receipt-genai.png",
        is_authentic: false,
        label: "AI-Generated Receipt",
        category: Category::Receipt,
        difficulty: Difficulty::Medium,
        description: "AI-generated receipt with plausible but wrong totals",
        security_features: &[],
        forgery: Some(ForgeryDetails {
            kind: ForgeryKind::AiGeneration,
            detection_clues: &[
                "Line items that do not sum to the total",
                "Repeated texture in the paper grain",
                "Store name spelled two different ways",
            ],
        }),
        educational: EducationalContent {
            when_wrong: "This receipt is FAKE. Add up the items: generated receipts rarely \
get the arithmetic right.",
            key_indicators: "Totals that disagree and inconsistent store naming.",
        },
    },
    DocumentRecord {
        id: DocumentId(8),
        image_ref: "dataset/fake/invoice-genai.png",
        is_authentic: false,
        label: "AI-Generated Invoice",
        category: Category::Invoice,
        difficulty: Difficulty::Hard,
        description: "AI-generated invoice imitating a supplier template",
        security_features: &[],
        forgery: Some(ForgeryDetails {
            kind: ForgeryKind::AiGeneration,
            detection_clues: &[
                "VAT number with the wrong length",
                "Column alignment drifting down the page",
                "Bank details in an impossible format",
            ],
        }),
        educational: EducationalContent {
            when_wrong: "This invoice is FAKE. Check the VAT and bank details: they do not \
follow any real format.",
            key_indicators: "Malformed identifiers and drifting table columns.",
        },
    },
    DocumentRecord {
        id: DocumentId(9),
        image_ref: "dataset/fake/damage-report-genai.png",
        is_authentic: false,
        label: "AI-Generated Damage Report",
        category: Category::DamageReport,
        difficulty: Difficulty::Expert,
        description: "AI-generated damage report with fabricated photographs",
        security_features: &[],
        forgery: Some(ForgeryDetails {
            kind: ForgeryKind::AiGeneration,
            detection_clues: &[
                "Lighting that differs between photo and page",
                "Cost lines without part numbers",
                "Signature rendered as a texture",
            ],
        }),
        educational: EducationalContent {
            when_wrong: "This damage report is FAKE. The photographs and the signature were \
generated rather than captured.",
            key_indicators: "Mismatched lighting and a signature with no pen pressure.",
        },
    },
    DocumentRecord {
        id: DocumentId(10),
        image_ref: "dataset/fake/v5-genai.png",
        is_authentic: false,
        label: "AI-Generated V5 Document",
        category: Category::VehicleRegistration,
        difficulty: Difficulty::Hard,
        description: "AI-generated vehicle registration certificate",
        security_features: &[],
        forgery: Some(ForgeryDetails {
            kind: ForgeryKind::AiGeneration,
            detection_clues: &[
                "Watermark pattern that does not repeat correctly",
                "Registration mark in the wrong typeface",
                "Field labels with misspellings",
            ],
        }),
        educational: EducationalContent {
            when_wrong: "This V5 document is FAKE. The watermark and registration typeface \
do not match the issued form.",
            key_indicators: "Broken watermark tiling and misspelled field labels.",
        },
    },
    DocumentRecord {
        id: DocumentId(11),
        image_ref: "dataset/fake/damage-report-edited.png",
        is_authentic: false,
        label: "Digitally Edited Damage Report",
        category: Category::DamageReport,
        difficulty: Difficulty::Medium,
        description: "Genuine damage report with spliced cost figures",
        security_features: &[],
        forgery: Some(ForgeryDetails {
            kind: ForgeryKind::DigitalEditing,
            detection_clues: &[
                "Compression blocks around edited figures",
                "Digits in a slightly different font weight",
                "Background colour shift behind the totals",
            ],
        }),
        educational: EducationalContent {
            when_wrong: "This damage report is FAKE. The figures were edited in after the \
fact; the pixels around them give it away.",
            key_indicators: "Compression artefacts, font-weight changes and colour shifts.",
        },
    },
];

pub fn default_catalog() -> StaticCatalog {
    StaticCatalog::new(&SAMPLE_RECORDS)
}

use careconnect_core::models::severity::Severity;

use crate::scoring::{AnswerScale, Item, SeverityBand, numbered_items};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
/// Items rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

const BANDS: &[SeverityBand] = &[
    SeverityBand::new(0, 4, Severity::Minimal),
    SeverityBand::new(5, 9, Severity::Mild),
    SeverityBand::new(10, 14, Severity::Moderate),
    SeverityBand::new(15, 21, Severity::Severe),
];

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "GAD-7"
    }

    fn name(&self) -> &str {
        "GAD-7 (Anxiety Screening)"
    }

    fn scale(&self) -> &AnswerScale {
        static SCALE: std::sync::LazyLock<AnswerScale> = std::sync::LazyLock::new(|| {
            AnswerScale::new(&[
                "Not at all",
                "Several days",
                "More than half the days",
                "Nearly every day",
            ])
        });
        &SCALE
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            numbered_items(
                &[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it's hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
                ],
                &[],
            )
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        BANDS
    }
}

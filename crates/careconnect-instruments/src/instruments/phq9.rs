use careconnect_core::models::severity::Severity;

use crate::scoring::{AnswerScale, Item, SeverityBand, numbered_items};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, 9-item depression screen.
/// Items rated 0–3 over the last two weeks. Total 0–27.
/// Item 9 asks about thoughts of self-harm.
pub struct Phq9;

const BANDS: &[SeverityBand] = &[
    SeverityBand::new(0, 4, Severity::NoneMinimal),
    SeverityBand::new(5, 9, Severity::Mild),
    SeverityBand::new(10, 14, Severity::Moderate),
    SeverityBand::new(15, 19, Severity::ModeratelySevere),
    SeverityBand::new(20, 27, Severity::Severe),
];

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "PHQ-9"
    }

    fn name(&self) -> &str {
        "PHQ-9 (Depression Screening)"
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
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
                    "Thoughts that you would be better off dead, or of hurting yourself",
                ],
                &[],
            )
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        BANDS
    }

    fn crisis_item(&self) -> Option<usize> {
        Some(9)
    }
}

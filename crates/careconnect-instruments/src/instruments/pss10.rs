use careconnect_core::models::severity::Severity;

use crate::scoring::{AnswerScale, Item, SeverityBand, numbered_items};
use crate::Instrument;

/// PSS-10: Perceived Stress Scale, 10-item version.
/// Items rated 0–4 over the last month. Items 4, 5, 7 and 8 are positively
/// worded and reverse-scored. Total 0–40.
pub struct Pss10;

const REVERSE_SCORED: &[usize] = &[4, 5, 7, 8];

const BANDS: &[SeverityBand] = &[
    SeverityBand::new(0, 13, Severity::LowStress),
    SeverityBand::new(14, 26, Severity::ModerateStress),
    SeverityBand::new(27, 40, Severity::HighStress),
];

impl Instrument for Pss10 {
    fn id(&self) -> &str {
        "PSS-10"
    }

    fn name(&self) -> &str {
        "PSS-10 (Perceived Stress Scale)"
    }

    fn aliases(&self) -> &[&str] {
        // Stored test records predating the 10-item form use the short id.
        &["PSS"]
    }

    fn scale(&self) -> &AnswerScale {
        static SCALE: std::sync::LazyLock<AnswerScale> = std::sync::LazyLock::new(|| {
            AnswerScale::new(&["Never", "Almost never", "Sometimes", "Fairly often", "Very often"])
        });
        &SCALE
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            numbered_items(
                &[
                    "In the last month, how often have you been upset because of something that happened unexpectedly?",
                    "In the last month, how often have you felt that you were unable to control the important things in your life?",
                    "In the last month, how often have you felt nervous and 'stressed'?",
                    "In the last month, how often have you felt confident about your ability to handle your personal problems?",
                    "In the last month, how often have you felt that things were going your way?",
                    "In the last month, how often have you found that you could not cope with all the things that you had to do?",
                    "In the last month, how often have you been able to control irritations in your life?",
                    "In the last month, how often have you felt that you were on top of things?",
                    "In the last month, how often have you been angered because of things that were outside of your control?",
                    "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?",
                ],
                REVERSE_SCORED,
            )
        });
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        BANDS
    }
}

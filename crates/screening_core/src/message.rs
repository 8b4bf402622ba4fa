//! Display texts for an [`Outcome`].

use crate::model::{Classification, Outcome};

pub const DISCLAIMER_TITLE: &str = "Important Disclaimer";
pub const DISCLAIMER_TEXT: &str = "This is a demonstration application and should not be used for actual medical diagnosis. \
Always consult with qualified healthcare professionals for proper medical advice and diagnosis.";

/// Title and body shown in the results section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMessage {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    VeryHigh,
    High,
    Moderate,
}

impl Tier {
    fn of(confidence: u8) -> Self {
        if confidence > 85 {
            Tier::VeryHigh
        } else if confidence > 75 {
            Tier::High
        } else {
            Tier::Moderate
        }
    }
}

pub fn result_message(outcome: &Outcome) -> ResultMessage {
    let (title, message) = match (outcome.classification, Tier::of(outcome.confidence)) {
        (Classification::Negative, Tier::VeryHigh) => (
            "No Cancer Detected (Very High Confidence)",
            "Our analysis shows no signs of breast cancer with very high confidence. However, regular check-ups with healthcare professionals are still recommended for preventive care.",
        ),
        (Classification::Negative, Tier::High) => (
            "No Cancer Detected (High Confidence)",
            "Based on our analysis with high confidence, no signs of breast cancer were detected in the uploaded image. However, please consult with a healthcare professional for a proper medical diagnosis.",
        ),
        (Classification::Negative, Tier::Moderate) => (
            "Likely No Cancer Detected",
            "Based on our preliminary analysis, the image shows no immediate signs of breast cancer. However, due to moderate confidence levels, we strongly recommend consulting with a healthcare professional for a thorough examination.",
        ),
        (Classification::Positive, Tier::VeryHigh) => (
            "Strong Indicators of Cancer Detected",
            "Our analysis has detected strong indicators suggesting the presence of breast cancer with very high confidence. Immediate consultation with a healthcare professional is strongly advised for proper medical evaluation.",
        ),
        (Classification::Positive, Tier::High) => (
            "High Probability of Cancer Detected",
            "Our analysis indicates strong signs suggesting the presence of breast cancer. Please consult with a healthcare professional immediately for a proper medical diagnosis and further evaluation.",
        ),
        (Classification::Positive, Tier::Moderate) => (
            "Potential Signs of Cancer Detected",
            "Our analysis suggests potential indicators of breast cancer. While the confidence level is moderate, we recommend scheduling an appointment with a healthcare professional for a proper evaluation.",
        ),
    };
    ResultMessage { title, message }
}

//! Fixed assistant responses.

/// Opening message of every conversation.
pub const GREETING: &str = "Hi! I'm your AI Health Assistant. Ask me about any health concerns or symptoms. You can also use the camera to check for minor skin issues.";

/// Reply when no keyword matches.
pub const FALLBACK_RESPONSE: &str =
    "I'm not sure about that. Please consult a healthcare professional for specific medical advice.";

/// Keyword → advice, scanned in order; the first contained keyword wins.
pub const HEALTH_RESPONSES: &[(&str, &str)] = &[
    (
        "fever",
        "For fever: Rest well, drink plenty of fluids, and monitor your temperature. If it persists beyond 3 days or exceeds 103°F, consult a doctor.",
    ),
    (
        "cough",
        "For cough: Try honey in warm water, do steam inhalation, and stay hydrated. If it lasts more than a week, see a doctor.",
    ),
    (
        "headache",
        "For headache: Drink water, take screen breaks, massage your temples gently, and rest in a quiet room.",
    ),
    (
        "stomach pain",
        "For stomach pain: Avoid oily/spicy foods, eat smaller meals, stay upright after eating, and drink warm water.",
    ),
    (
        "sleep",
        "For better sleep: Maintain a consistent schedule, avoid screens 30 minutes before bed, keep your room cool and dark.",
    ),
    (
        "exercise",
        "For exercise: Aim for 150 minutes of moderate activity weekly. Start slowly and gradually increase intensity.",
    ),
];

/// Prompts offered as one-tap suggestions.
pub const QUICK_PROMPTS: [&str; 4] = [
    "Tell me about fever",
    "How to sleep better",
    "Exercise tips",
    "Cough remedies",
];

/// User turn recorded when a skin image is submitted.
pub const SKIN_UPLOAD_MESSAGE: &str = "I've uploaded a skin image for analysis";

/// Canned reply to a skin image. No analysis is performed.
pub const SKIN_ANALYSIS_RESPONSE: &str = "Based on the image analysis, I've detected potential minor skin concerns. Common issues include:\n\n\
• Dryness: Use moisturizer regularly and stay hydrated\n\
• Redness: Avoid harsh products and use gentle cleansers\n\
• Minor irritation: Apply soothing creams with aloe vera\n\n\
If symptoms persist or worsen, please consult a dermatologist. This is not a medical diagnosis.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        for (keyword, _) in HEALTH_RESPONSES {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_skin_response_layout() {
        assert!(SKIN_ANALYSIS_RESPONSE.contains("concerns. Common issues include:\n\n• Dryness"));
        assert!(SKIN_ANALYSIS_RESPONSE.ends_with("This is not a medical diagnosis."));
        assert_eq!(SKIN_ANALYSIS_RESPONSE.matches('•').count(), 3);
    }
}

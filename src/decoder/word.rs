use super::reduce::KeyVisit;

/// Builds the candidate word from visits that clear the confidence bar.
///
/// Returns `None` when nothing survives the filter: "no word" is a distinct
/// outcome from an empty word, and callers rely on that.
pub fn build_word(visits: &[KeyVisit], confidence_threshold: f32) -> Option<String> {
    let word: String = visits
        .iter()
        .filter(|v| v.confidence > confidence_threshold)
        .flat_map(|v| v.key.to_lowercase())
        .collect();

    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

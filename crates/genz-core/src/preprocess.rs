pub trait Preprocessor {
    // Locale-insensitive case folding used for substring matching
    fn fold(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Query is effectively empty for highlighting purposes
    fn is_blank(&self, text: &str) -> bool {
        text.trim().is_empty()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

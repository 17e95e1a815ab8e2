use genz_source::StaticTermSource;
use genz_types::TermRecord;

pub struct BundledTerms;

impl BundledTerms {
    /// Load the term list compiled into the binary
    pub fn load_embedded() -> Result<Vec<TermRecord>, serde_json::Error> {
        let json = include_str!("../data/terms.json");
        tracing::debug!("Parsing embedded term list...");
        let records: Vec<TermRecord> = serde_json::from_str(json)?;
        tracing::debug!("Parsed {} embedded terms", records.len());
        Ok(records)
    }

    /// Embedded list as a term source. Falls back to an empty list if the
    /// embedded data cannot be parsed.
    pub fn source() -> StaticTermSource {
        let records = Self::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded term list: {}", e);
            tracing::warn!("Starting with empty term list");
            Vec::new()
        });
        StaticTermSource::new("bundled", records)
    }
}

use crate::{PageError, VoieRecord};

/// Key of the "all of Paris" aggregate view.
pub const ALL_DISTRICTS: &str = "00";

const DISTRICTS: [(&str, &str); 21] = [
    ("00", "Tous Arrondissements Confondus"),
    ("01", "Louvre"),
    ("02", "Bourse"),
    ("03", "Temple"),
    ("04", "Hôtel-de-Ville"),
    ("05", "Panthéon"),
    ("06", "Luxembourg"),
    ("07", "Palais-Bourbon"),
    ("08", "Élysée"),
    ("09", "Opéra"),
    ("10", "Entrepôt"),
    ("11", "Popincourt"),
    ("12", "Reuilly"),
    ("13", "Gobelins"),
    ("14", "Observatoire"),
    ("15", "Vaugirard"),
    ("16", "Passy"),
    ("17", "Batignolles-Monceau"),
    ("18", "Buttes-Montmartre"),
    ("19", "Buttes-Chaumont"),
    ("20", "Ménilmontant"),
];

/// A validated two-character arrondissement key ("00".."20").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictKey {
    code: &'static str,
    label: &'static str,
}

impl DistrictKey {
    /// Derive the key from the trailing two characters of a postal code
    /// (75005 -> "05", 75000 -> aggregate).
    pub fn from_postal_code(postal_code: &str) -> Result<Self, PageError> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return Err(PageError::MissingParameter);
        }

        let split = postal_code
            .char_indices()
            .rev()
            .nth(1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        Self::from_key(&postal_code[split..])
    }

    pub fn from_key(key: &str) -> Result<Self, PageError> {
        DISTRICTS
            .iter()
            .find(|(code, _)| *code == key)
            .map(|&(code, label)| DistrictKey { code, label })
            .ok_or_else(|| PageError::UnknownDistrict(key.to_string()))
    }

    /// Every key in table order, aggregate first.
    pub fn all() -> impl Iterator<Item = DistrictKey> {
        DISTRICTS
            .iter()
            .map(|&(code, label)| DistrictKey { code, label })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_aggregate(&self) -> bool {
        self.code == ALL_DISTRICTS
    }

    /// Postal code that selects this key, e.g. "75005" or "75000".
    pub fn postal_code(&self) -> String {
        format!("750{}", self.code)
    }

    /// Page heading: "Paris - ..." for the aggregate, "1er Arrondissement - Louvre",
    /// "5e Arrondissement - Panthéon" otherwise.
    pub fn title(&self) -> String {
        if self.is_aggregate() {
            return format!("Paris - {}", self.label);
        }

        let number = self.code.trim_start_matches('0');
        let suffix = if self.code == "01" { "er" } else { "e" };
        format!("{}{} Arrondissement - {}", number, suffix, self.label)
    }

    /// Whether a record is listed under this key. Codes compare as strings.
    pub fn matches(&self, record: &VoieRecord) -> bool {
        match record.arrtd.as_deref() {
            None => false,
            Some(_) if self.is_aggregate() => true,
            Some(arrtd) => arrtd == self.code,
        }
    }
}

/// Records listed under `key`, in dataset order. The input is left untouched.
pub fn filter_by_district<'a>(
    records: &'a [VoieRecord],
    key: &DistrictKey,
) -> Vec<&'a VoieRecord> {
    records.iter().filter(|record| key.matches(record)).collect()
}

use crate::VoieRecord;

/// Shown when a record carries no usable name at all.
pub const UNKNOWN_NAME: &str = "Nom inconnu";

const VOIE_TYPES: [(&str, &str); 15] = [
    ("RUE", "Rue"),
    ("AV", "Avenue"),
    ("BD", "Boulevard"),
    ("PAS", "Passage"),
    ("IMP", "Impasse"),
    ("PL", "Place"),
    ("ALL", "Allée"),
    ("SQ", "Square"),
    ("COUR", "Cour"),
    ("CHE", "Chemin"),
    ("VOIE", "Voie"),
    ("CITE", "Cité"),
    ("VLA", "Villa"),
    ("PONT", "Pont"),
    ("QU", "Quai"),
];

/// Human label for a `c_desi` code, `None` when the code is not in the table.
pub fn voie_type_label(code: &str) -> Option<&'static str> {
    VOIE_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Display name of a record: long name, then short name, then
/// "{type} {liaison} {voie}" composed from the code fields.
pub fn resolve_name(record: &VoieRecord) -> String {
    if let Some(long) = non_empty(&record.l_longmin) {
        return long.to_string();
    }
    if let Some(short) = non_empty(&record.l_courtmin) {
        return short.to_string();
    }

    let voie = record.l_voie.as_deref().unwrap_or("");
    let type_label = record
        .c_desi
        .as_deref()
        .map(|code| voie_type_label(code).unwrap_or(code))
        .unwrap_or("");

    if type_label.is_empty() || voie.is_empty() {
        return if voie.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            voie.to_string()
        };
    }

    let liaison = record.c_liaison.as_deref().unwrap_or("");
    format!("{} {} {}", type_label, liaison, voie)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}


//! Payment modes and the legacy label mapping.
//!
//! Historical datasets (CSV imports, older app versions) carry free-text
//! payment labels in Portuguese, with inconsistent casing and accents.
//! Canonicalization goes through one finite mapping table rather than
//! prefix heuristics, so a future label can never be claimed by two modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment mode of a refuel.
///
/// `Credit` means deferred payment debited against the station's prepaid
/// balance. Unrecognized legacy text is preserved verbatim in `Other` so a
/// round-trip through the snapshot never loses data; the reconciliation
/// pass rewrites it to a canonical mode when the table knows the label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PayMode {
    Cash,
    Card,
    Credit,
    /// Free text the mapping table does not recognize (kept verbatim).
    Other(String),
}

/// Every legacy label with a known canonical mode. Matching is done on the
/// trimmed, lowercased label; anything absent from this table stays `Other`.
const LEGACY_LABELS: &[(&str, PayMode)] = &[
    ("cash", PayMode::Cash),
    ("dinheiro", PayMode::Cash),
    ("card", PayMode::Card),
    ("cartao", PayMode::Card),
    ("cartão", PayMode::Card),
    ("credit", PayMode::Credit),
    ("credito", PayMode::Credit),
    ("crédito", PayMode::Credit),
];

impl PayMode {
    /// Look a label up in the legacy mapping table.
    ///
    /// Returns `None` when the label is empty or unknown.
    pub fn from_legacy_label(label: &str) -> Option<PayMode> {
        let needle = label.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        LEGACY_LABELS
            .iter()
            .find(|(l, _)| *l == needle)
            .map(|(_, mode)| mode.clone())
    }

    /// Canonical wire name, or the preserved text for `Other`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Credit => "credit",
            Self::Other(s) => s,
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Whether this mode is one of the canonical three.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for PayMode {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for PayMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "cash" => Self::Cash,
            "card" => Self::Card,
            "credit" => Self::Credit,
            _ => Self::Other(s),
        }
    }
}

impl From<PayMode> for String {
    fn from(mode: PayMode) -> Self {
        match mode {
            PayMode::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_parse() {
        assert_eq!(PayMode::from("cash".to_string()), PayMode::Cash);
        assert_eq!(PayMode::from("card".to_string()), PayMode::Card);
        assert_eq!(PayMode::from("credit".to_string()), PayMode::Credit);
    }

    #[test]
    fn unknown_text_is_preserved() {
        let mode = PayMode::from("vale-frota".to_string());
        assert_eq!(mode, PayMode::Other("vale-frota".to_string()));
        assert_eq!(String::from(mode), "vale-frota");
    }

    #[test]
    fn legacy_labels_map_regardless_of_case_and_spacing() {
        assert_eq!(PayMode::from_legacy_label(" Crédito "), Some(PayMode::Credit));
        assert_eq!(PayMode::from_legacy_label("Credito"), Some(PayMode::Credit));
        assert_eq!(PayMode::from_legacy_label("DINHEIRO"), Some(PayMode::Cash));
        assert_eq!(PayMode::from_legacy_label("Cartão"), Some(PayMode::Card));
    }

    #[test]
    fn empty_and_unknown_labels_do_not_map() {
        assert_eq!(PayMode::from_legacy_label(""), None);
        assert_eq!(PayMode::from_legacy_label("   "), None);
        assert_eq!(PayMode::from_legacy_label("boleto"), None);
    }

    #[test]
    fn serde_round_trip_keeps_legacy_text() {
        let json = "\"Crédito\"";
        let mode: PayMode = serde_json::from_str(json).unwrap();
        assert_eq!(mode, PayMode::Other("Crédito".to_string()));
        assert_eq!(serde_json::to_string(&mode).unwrap(), json);
    }
}

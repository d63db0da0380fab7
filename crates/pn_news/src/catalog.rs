//! Indian political parties and states offered for analysis.

use serde::Serialize;

/// A selectable party. `label` is what menus show; `target` is the short
/// form news headlines use, and is what party-context scoring looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Party {
    pub label: &'static str,
    pub target: &'static str,
}

impl Party {
    const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }

    pub fn target_name(&self) -> &'static str {
        self.target
    }
}

pub const PARTIES: &[Party] = &[
    Party::new("Bharatiya Janata Party (BJP)", "BJP"),
    Party::new("Indian National Congress (INC)", "Congress"),
    Party::new("Aam Aadmi Party (AAP)", "AAP"),
    Party::new("Trinamool Congress (TMC)", "TMC"),
    Party::new("Dravida Munnetra Kazhagam (DMK)", "DMK"),
    Party::new("All India Anna Dravida Munnetra Kazhagam (AIADMK)", "AIADMK"),
    Party::new("Shiv Sena", "Shiv Sena"),
    Party::new("Nationalist Congress Party (NCP)", "NCP"),
    Party::new("Communist Party of India (Marxist) (CPI-M)", "CPI(M)"),
    Party::new("Communist Party of India (CPI)", "CPI"),
    Party::new("Bahujan Samaj Party (BSP)", "BSP"),
    Party::new("Samajwadi Party (SP)", "Samajwadi"),
    Party::new("Rashtriya Janata Dal (RJD)", "RJD"),
    Party::new("Janata Dal (United) (JD-U)", "JD(U)"),
    Party::new("Janata Dal (Secular) (JD-S)", "JD(S)"),
    Party::new("Biju Janata Dal (BJD)", "BJD"),
    Party::new("Telangana Rashtra Samithi (TRS/BRS)", "BRS"),
    Party::new("YSR Congress Party (YSRCP)", "YSRCP"),
    Party::new("Telugu Desam Party (TDP)", "TDP"),
    Party::new("Shiromani Akali Dal (SAD)", "Akali Dal"),
    Party::new("Indian Union Muslim League (IUML)", "IUML"),
    Party::new("All India Majlis-e-Ittehadul Muslimeen (AIMIM)", "AIMIM"),
    Party::new("Other", "Other"),
];

pub const ALL_STATES: &str = "All States";

pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
    ALL_STATES,
];

pub const MAX_SEARCH_RESULTS: usize = 5;

/// Parties whose label contains `term`, case-insensitively. A blank term
/// matches nothing.
pub fn search_parties(term: &str) -> Vec<&'static Party> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    PARTIES
        .iter()
        .filter(|p| p.label.to_lowercase().contains(&term))
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

/// Looks a party up by its full label or its short name.
pub fn find_party(name: &str) -> Option<&'static Party> {
    let name = name.trim();
    PARTIES
        .iter()
        .find(|p| p.label.eq_ignore_ascii_case(name) || p.target.eq_ignore_ascii_case(name))
        .or_else(|| {
            // abbreviation in the last parentheses of the label, e.g. "INC"
            PARTIES.iter().find(|p| {
                p.label
                    .rsplit_once('(')
                    .map(|(_, abbr)| abbr.trim_end_matches(')').split('/').any(|a| a.eq_ignore_ascii_case(name)))
                    .unwrap_or(false)
            })
        })
}

pub fn find_state(name: &str) -> Option<&'static str> {
    let name = name.trim();
    STATES.iter().copied().find(|s| s.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PARTIES.len(), 23);
        assert_eq!(STATES.len(), 37);
        assert_eq!(STATES.last(), Some(&ALL_STATES));
    }

    #[test]
    fn test_search_is_capped() {
        let congress = search_parties("CONGRESS");
        assert_eq!(congress.len(), 4);
        assert_eq!(congress[0].target_name(), "Congress");

        let party = search_parties("party");
        assert_eq!(party.len(), MAX_SEARCH_RESULTS);
        assert!(search_parties("   ").is_empty());
        assert!(search_parties("tory").is_empty());
    }

    #[test]
    fn test_find_party() {
        assert_eq!(find_party("bjp").map(|p| p.target), Some("BJP"));
        assert_eq!(find_party("Indian National Congress (INC)").map(|p| p.target), Some("Congress"));
        assert_eq!(find_party("INC").map(|p| p.target), Some("Congress"));
        assert_eq!(find_party("TRS").map(|p| p.target), Some("BRS"));
        assert_eq!(find_party("cpi-m").map(|p| p.target), Some("CPI(M)"));
        assert_eq!(find_party("Labour"), None);
    }

    #[test]
    fn test_find_state() {
        assert_eq!(find_state("tamil nadu"), Some("Tamil Nadu"));
        assert_eq!(find_state("all states"), Some(ALL_STATES));
        assert_eq!(find_state("Bavaria"), None);
    }
}

/// Pairs of (new code metric, absolute metric) computed on short-lived
/// branches and pull requests
///
/// Such branches only compute the absolute form; the whole branch is
/// considered new code, so the absolute value stands in for the new code
/// variation.
pub const BRANCH_METRIC_MAPPING: [(&str, &str); 20] = [
    ("new_violations", "violations"),
    ("new_blocker_violations", "blocker_violations"),
    ("new_critical_violations", "critical_violations"),
    ("new_major_violations", "major_violations"),
    ("new_minor_violations", "minor_violations"),
    ("new_info_violations", "info_violations"),
    ("new_bugs", "bugs"),
    ("new_code_smells", "code_smells"),
    ("new_vulnerabilities", "vulnerabilities"),
    ("new_reliability_remediation_effort", "reliability_remediation_effort"),
    ("new_reliability_rating", "reliability_rating"),
    ("new_security_remediation_effort", "security_remediation_effort"),
    ("new_security_rating", "security_rating"),
    ("new_technical_debt", "sqale_index"),
    ("new_maintainability_rating", "sqale_rating"),
    ("new_sqale_debt_ratio", "sqale_debt_ratio"),
    ("new_security_hotspots", "security_hotspots"),
    ("new_accepted_issues", "accepted_issues"),
    ("new_security_hotspots_reviewed", "security_hotspots_reviewed"),
    ("new_security_review_rating", "security_review_rating"),
];

/// Absolute metric standing in for a new code metric
pub fn absolute_counterpart(new_code_key: &str) -> Option<&'static str> {
    BRANCH_METRIC_MAPPING
        .iter()
        .find(|(new_code, _)| *new_code == new_code_key)
        .map(|(_, absolute)| *absolute)
}

/// New code metric an absolute metric stands in for
pub fn new_code_counterpart(absolute_key: &str) -> Option<&'static str> {
    BRANCH_METRIC_MAPPING
        .iter()
        .find(|(_, absolute)| *absolute == absolute_key)
        .map(|(new_code, _)| *new_code)
}

/// Either counterpart of a mapped key
pub fn counterpart(key: &str) -> Option<&'static str> {
    absolute_counterpart(key).or_else(|| new_code_counterpart(key))
}

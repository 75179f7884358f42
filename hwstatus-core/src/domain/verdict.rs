//! Verdict table
//!
//! Maps review status codes to the sentence sent to the student.

use std::collections::BTreeMap;

/// Status code for a work the reviewer accepted
pub const APPROVED: &str = "approved";
/// Status code for a work currently under review
pub const REVIEWING: &str = "reviewing";
/// Status code for a work returned with remarks
pub const REJECTED: &str = "rejected";

/// Read-only mapping from status code to localized verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictTable {
    verdicts: BTreeMap<String, String>,
}

impl VerdictTable {
    /// Creates a table from arbitrary `(status, verdict)` pairs
    pub fn new<I, S, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<String>,
    {
        Self {
            verdicts: entries
                .into_iter()
                .map(|(status, verdict)| (status.into(), verdict.into()))
                .collect(),
        }
    }

    /// Adds or replaces a verdict
    pub fn with_verdict(mut self, status: impl Into<String>, verdict: impl Into<String>) -> Self {
        self.verdicts.insert(status.into(), verdict.into());
        self
    }

    /// Looks up the verdict for a status code
    pub fn verdict(&self, status: &str) -> Option<&str> {
        self.verdicts.get(status).map(String::as_str)
    }

    /// Number of known status codes
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl Default for VerdictTable {
    fn default() -> Self {
        Self::new([
            (APPROVED, "Работа проверена: ревьюеру всё понравилось. Ура!"),
            (REVIEWING, "Работа взята на проверку ревьюером."),
            (REJECTED, "Работа проверена: у ревьюера есть замечания."),
        ])
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;

/// Category of proof document expected for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    SelfCheckArchitecture,
    PvArchitecture,
    TopoScan,
    SingleDocument,
    SelfCheck,
    PvReception,
    LabReport,
    Proof,
}

impl DocumentKind {
    /// Stable code, used as the last segment of stored file names
    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::SelfCheckArchitecture => "self-check-architecture",
            DocumentKind::PvArchitecture => "pv-architecture",
            DocumentKind::TopoScan => "topo-scan",
            DocumentKind::SingleDocument => "single-document",
            DocumentKind::SelfCheck => "self-check",
            DocumentKind::PvReception => "pv-reception",
            DocumentKind::LabReport => "lab-report",
            DocumentKind::Proof => "proof",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::SelfCheckArchitecture => "Self-check (Architecture)",
            DocumentKind::PvArchitecture => "PV Architecture",
            DocumentKind::TopoScan => "Topographic scan",
            DocumentKind::SingleDocument => "Single document",
            DocumentKind::SelfCheck => "Self-check",
            DocumentKind::PvReception => "PV Reception",
            DocumentKind::LabReport => "Laboratory report",
            DocumentKind::Proof => "Proof",
        }
    }

    /// Sub-folder shown by the folder browser, if the kind is grouped
    pub fn folder(&self) -> Option<&'static str> {
        match self {
            DocumentKind::SelfCheckArchitecture | DocumentKind::PvArchitecture => {
                Some("Architecture")
            }
            DocumentKind::TopoScan => Some("Topography"),
            _ => None,
        }
    }

    pub fn all() -> Vec<DocumentKind> {
        vec![
            DocumentKind::SelfCheckArchitecture,
            DocumentKind::PvArchitecture,
            DocumentKind::TopoScan,
            DocumentKind::SingleDocument,
            DocumentKind::SelfCheck,
            DocumentKind::PvReception,
            DocumentKind::LabReport,
            DocumentKind::Proof,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        DocumentKind::all().into_iter().find(|k| k.code() == code)
    }

    /// Document kinds a task expects, in display order.
    ///
    /// Rules are matched on the lower-cased task label; the first rule that
    /// matches wins and the last one always does.
    pub fn for_task(task: Task) -> Vec<DocumentKind> {
        Self::for_label(task.label())
    }

    pub fn for_label(label: &str) -> Vec<DocumentKind> {
        let label = label.to_lowercase();
        if label.contains("axes") {
            vec![
                DocumentKind::SelfCheckArchitecture,
                DocumentKind::PvArchitecture,
                DocumentKind::TopoScan,
            ]
        } else if label.contains("footing excavation") {
            vec![DocumentKind::SingleDocument]
        } else if label.contains("concrete") || label.contains("lab") {
            vec![DocumentKind::LabReport, DocumentKind::PvReception]
        } else if label.contains("footings") || label.contains("reinforcement") {
            vec![DocumentKind::SelfCheck, DocumentKind::PvReception]
        } else {
            vec![DocumentKind::Proof]
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

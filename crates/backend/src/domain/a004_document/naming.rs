use contracts::domain::a004_document::{DocumentKey, ACCEPTED_EXTENSIONS};

use crate::shared::error::TrackerError;

/// Joins task, unit and kind in a file name
pub const SEPARATOR: &str = "_";

/// Base file name of a document slot, without extension.
///
/// `<task>_<unit>_<kind>` with spaces turned into `_` and `.`/`,` dropped:
/// `("1. Reception of axes", "Unit 7", topo-scan)` → `1_Reception_of_axes_Unit_7_topo-scan`.
pub fn base_name(key: &DocumentKey) -> String {
    let raw = [key.task.label().to_string(), key.unit.label(), key.kind.code().to_string()]
        .join(SEPARATOR);
    sanitize(&raw)
}

pub fn file_name(key: &DocumentKey, extension: &str) -> String {
    format!("{}.{}", base_name(key), extension)
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '.' | ',' => None,
            c => Some(c),
        })
        .collect()
}

/// Extension of an uploaded file name, lower-cased.
///
/// Only the accepted extensions are stored, anything else would never be
/// found again by the extension probe.
pub fn extension_of(original_filename: &str) -> Result<String, TrackerError> {
    let (_, extension) = original_filename
        .rsplit_once('.')
        .ok_or_else(|| TrackerError::Malformed(format!("no extension in '{original_filename}'")))?;

    let extension = extension.to_ascii_lowercase();
    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(TrackerError::Malformed(format!(
            "unsupported extension '.{}', expected one of {}",
            extension,
            ACCEPTED_EXTENSIONS.join(", ")
        )))
    }
}

pub fn media_type(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_task::Task;
    use contracts::domain::a002_unit::Unit;
    use contracts::enums::DocumentKind;
    use std::collections::HashSet;

    #[test]
    fn test_base_name_strips_unsafe_characters() {
        let key = DocumentKey::new(
            Task::first(),
            Unit::from_index(6).unwrap(),
            DocumentKind::TopoScan,
        );
        assert_eq!(base_name(&key), "1_Reception_of_axes_Unit_7_topo-scan");
        assert_eq!(
            file_name(&key, "pdf"),
            "1_Reception_of_axes_Unit_7_topo-scan.pdf"
        );

        let lab = DocumentKey::new(
            Task::from_index(3).unwrap(),
            Unit::from_index(107).unwrap(),
            DocumentKind::LabReport,
        );
        assert_eq!(
            base_name(&lab),
            "4_Reception_of_footings_concrete_(Lab)_Unit_108_lab-report"
        );
    }

    #[test]
    fn test_names_never_collide() {
        let mut seen = HashSet::new();
        let mut total = 0;
        for task in Task::all() {
            for unit in Unit::all() {
                for kind in DocumentKind::all() {
                    total += 1;
                    assert!(
                        seen.insert(base_name(&DocumentKey::new(task, unit, kind))),
                        "collision for {task} / {unit} / {kind}"
                    );
                }
            }
        }
        assert_eq!(seen.len(), total);
        assert_eq!(total, 4 * 108 * 8);
    }

    #[test]
    fn test_names_contain_no_path_characters() {
        for task in Task::all() {
            let kinds = DocumentKind::for_task(task);
            for kind in kinds {
                let name = base_name(&DocumentKey::new(task, Unit::first(), kind));
                assert!(!name.contains('/') && !name.contains('\\'));
                assert!(!name.contains(' ') && !name.contains('.') && !name.contains(','));
            }
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("pv.reception.pdf").unwrap(), "pdf");
        assert_eq!(extension_of("SCAN.JPG").unwrap(), "jpg");
        assert_eq!(extension_of("photo.jpeg").unwrap(), "jpeg");
        assert!(matches!(
            extension_of("notes.docx"),
            Err(TrackerError::Malformed(_))
        ));
        assert!(matches!(extension_of("README"), Err(TrackerError::Malformed(_))));
    }

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("pdf"), "application/pdf");
        assert_eq!(media_type("jpeg"), "image/jpeg");
    }
}

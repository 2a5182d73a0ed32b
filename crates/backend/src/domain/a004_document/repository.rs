use contracts::domain::a001_task::Task;
use contracts::domain::a002_unit::Unit;
use contracts::domain::a004_document::{DocumentKey, StoredDocument, ACCEPTED_EXTENSIONS};
use contracts::enums::DocumentKind;
use std::path::{Path, PathBuf};

use super::naming;
use super::payload;
use crate::shared::error::TrackerError;
use crate::system::auth::Access;

/// URL prefix under which the documents directory is served
pub const FILES_ROUTE: &str = "/files";

/// Proof documents stored flat in one directory, one file per
/// (task, unit, kind) slot
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    dir: PathBuf,
}

impl DocumentRegistry {
    /// Open the registry, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn kinds_for_task(&self, task: Task) -> Vec<DocumentKind> {
        DocumentKind::for_task(task)
    }

    /// Probe the accepted extensions in order; first existing file wins
    pub fn locate(&self, key: &DocumentKey) -> Option<StoredDocument> {
        ACCEPTED_EXTENSIONS
            .iter()
            .find_map(|extension| self.stored_document(key, extension))
    }

    /// Store raw bytes for a slot, replacing whatever the slot held.
    ///
    /// The content is not checked against the extension.
    pub fn save(
        &self,
        access: Access,
        bytes: &[u8],
        original_filename: &str,
        key: &DocumentKey,
    ) -> Result<StoredDocument, TrackerError> {
        if let Err(e) = access.require_write() {
            tracing::warn!("Upload refused for {}: read-only", naming::base_name(key));
            return Err(e);
        }
        if !key.is_expected() {
            return Err(TrackerError::UnknownDocumentKind(format!(
                "'{}' is not expected for '{}'",
                key.kind, key.task
            )));
        }
        let extension = naming::extension_of(original_filename)?;

        let file_name = naming::file_name(key, &extension);
        let path = self.dir.join(&file_name);
        let temp_path = self.dir.join(format!(".{}.part", file_name));

        // The previous document stays in place until the new one is renamed in
        if let Err(e) =
            std::fs::write(&temp_path, bytes).and_then(|_| std::fs::rename(&temp_path, &path))
        {
            let _ = std::fs::remove_file(&temp_path);
            tracing::error!("Failed to store {}: {}", file_name, e);
            return Err(e.into());
        }

        // One file per slot: drop copies stored under any other extension
        let replaced = self.remove_stored(key, Some(extension.as_str()))?;

        tracing::info!(
            "Stored {} ({} bytes{})",
            file_name,
            bytes.len(),
            if replaced > 0 { ", replaced previous" } else { "" }
        );

        self.stored_document(key, &extension).ok_or_else(|| {
            TrackerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} vanished after write", file_name),
            ))
        })
    }

    /// Decode a `data:` URL upload and store it
    pub fn save_data_url(
        &self,
        access: Access,
        contents: &str,
        original_filename: &str,
        key: &DocumentKey,
    ) -> Result<StoredDocument, TrackerError> {
        access.require_write()?;
        let data = payload::decode_data_url(contents)?;

        if let Ok(extension) = naming::extension_of(original_filename) {
            let expected = naming::media_type(&extension);
            if !data.media_type.is_empty() && data.media_type != expected {
                tracing::warn!(
                    "Upload for {} declares '{}' but is stored as '{}'",
                    naming::base_name(key),
                    data.media_type,
                    expected
                );
            }
        }

        self.save(access, &data.bytes, original_filename, key)
    }

    /// Remove the document of a slot; `false` when there was none
    pub fn delete(&self, access: Access, key: &DocumentKey) -> Result<bool, TrackerError> {
        if let Err(e) = access.require_write() {
            tracing::warn!("Delete refused for {}: read-only", naming::base_name(key));
            return Err(e);
        }

        let removed = self.remove_stored(key, None)?;
        if removed > 0 {
            tracing::info!("Deleted {}", naming::base_name(key));
        }
        Ok(removed > 0)
    }

    /// Documents present for a (task, unit) pair, in kind order
    pub fn list_existing(&self, task: Task, unit: Unit) -> Vec<(DocumentKind, StoredDocument)> {
        self.kinds_for_task(task)
            .into_iter()
            .filter_map(|kind| {
                self.locate(&DocumentKey::new(task, unit, kind))
                    .map(|doc| (kind, doc))
            })
            .collect()
    }

    /// Absolute path of a stored document
    pub fn path_of(&self, document: &StoredDocument) -> PathBuf {
        self.dir.join(&document.file_name)
    }

    /// Remove the stored copies of a slot, except the one under `keep`
    fn remove_stored(&self, key: &DocumentKey, keep: Option<&str>) -> Result<usize, TrackerError> {
        let mut removed = 0;
        for extension in ACCEPTED_EXTENSIONS {
            if keep == Some(extension) {
                continue;
            }
            let path = self.dir.join(naming::file_name(key, extension));
            if path.is_file() {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn stored_document(&self, key: &DocumentKey, extension: &str) -> Option<StoredDocument> {
        let file_name = naming::file_name(key, extension);
        let metadata = std::fs::metadata(self.dir.join(&file_name)).ok()?;
        if !metadata.is_file() {
            return None;
        }

        Some(StoredDocument {
            key: *key,
            url: format!("{}/{}", FILES_ROUTE, urlencoding::encode(&file_name)),
            file_name,
            extension: extension.to_string(),
            media_type: naming::media_type(extension).to_string(),
            size: metadata.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PDF: &[u8] = b"%PDF-1.4 proof";

    fn registry() -> (TempDir, DocumentRegistry) {
        let dir = TempDir::new().unwrap();
        let registry = DocumentRegistry::open(dir.path().join("documents")).unwrap();
        (dir, registry)
    }

    fn topo_key(unit: usize) -> DocumentKey {
        DocumentKey::new(
            Task::first(),
            Unit::from_index(unit).unwrap(),
            DocumentKind::TopoScan,
        )
    }

    fn dir_listing(registry: &DocumentRegistry) -> Vec<(String, Vec<u8>)> {
        let mut entries: Vec<(String, Vec<u8>)> = std::fs::read_dir(registry.dir())
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (
                    e.file_name().to_string_lossy().to_string(),
                    std::fs::read(e.path()).unwrap(),
                )
            })
            .collect();
        entries.sort();
        entries
    }

    #[test]
    fn test_save_then_locate() {
        let (_tmp, registry) = registry();
        let key = topo_key(0);

        let stored = registry
            .save(Access::Engineer, PDF, "scan.pdf", &key)
            .unwrap();
        assert_eq!(stored.file_name, "1_Reception_of_axes_Unit_1_topo-scan.pdf");
        assert_eq!(stored.size, PDF.len() as u64);
        assert_eq!(stored.media_type, "application/pdf");
        assert_eq!(stored.url, "/files/1_Reception_of_axes_Unit_1_topo-scan.pdf");

        assert_eq!(registry.locate(&key), Some(stored.clone()));
        assert_eq!(std::fs::read(registry.path_of(&stored)).unwrap(), PDF);
    }

    #[test]
    fn test_locate_misses_are_none() {
        let (_tmp, registry) = registry();
        assert!(registry.locate(&topo_key(5)).is_none());
        assert!(registry.list_existing(Task::first(), Unit::first()).is_empty());
    }

    #[test]
    fn test_locate_prefers_pdf() {
        let (_tmp, registry) = registry();
        let key = topo_key(2);
        std::fs::write(registry.dir().join(naming::file_name(&key, "jpg")), b"jpg").unwrap();
        std::fs::write(registry.dir().join(naming::file_name(&key, "pdf")), b"pdf").unwrap();

        assert_eq!(registry.locate(&key).unwrap().extension, "pdf");
    }

    #[test]
    fn test_reupload_with_other_extension_replaces() {
        let (_tmp, registry) = registry();
        let key = topo_key(3);

        registry.save(Access::Engineer, PDF, "scan.pdf", &key).unwrap();
        let replaced = registry
            .save(Access::Engineer, b"png bytes", "photo.PNG", &key)
            .unwrap();

        assert_eq!(replaced.extension, "png");
        assert_eq!(registry.locate(&key), Some(replaced));
        assert_eq!(dir_listing(&registry).len(), 1);
    }

    #[test]
    fn test_failed_replacement_keeps_previous_document() {
        let (_tmp, registry) = registry();
        let key = topo_key(0);
        registry.save(Access::Engineer, PDF, "scan.pdf", &key).unwrap();

        // A directory where the temp file should go makes the write fail
        let blocker = registry
            .dir()
            .join(format!(".{}.part", naming::file_name(&key, "png")));
        std::fs::create_dir(&blocker).unwrap();

        let result = registry.save(Access::Engineer, b"png bytes", "photo.png", &key);
        assert!(matches!(result, Err(TrackerError::Io(_))));

        let kept = registry.locate(&key).unwrap();
        assert_eq!(kept.extension, "pdf");
        assert_eq!(std::fs::read(registry.path_of(&kept)).unwrap(), PDF);
        assert!(!registry.dir().join(naming::file_name(&key, "png")).exists());
    }

    #[test]
    fn test_same_extension_reupload_overwrites() {
        let (_tmp, registry) = registry();
        let key = topo_key(1);
        registry.save(Access::Engineer, PDF, "scan.pdf", &key).unwrap();
        let stored = registry
            .save(Access::Engineer, b"%PDF-1.7 second", "again.PDF", &key)
            .unwrap();

        assert_eq!(std::fs::read(registry.path_of(&stored)).unwrap(), b"%PDF-1.7 second");
        assert_eq!(dir_listing(&registry).len(), 1);
    }

    #[test]
    fn test_delete_then_locate_is_none() {
        let (_tmp, registry) = registry();
        let key = topo_key(0);
        registry.save(Access::Engineer, PDF, "scan.pdf", &key).unwrap();

        assert!(registry.delete(Access::Engineer, &key).unwrap());
        assert!(registry.locate(&key).is_none());
        assert!(!registry.delete(Access::Engineer, &key).unwrap());
    }

    #[test]
    fn test_read_only_mutations_change_nothing() {
        let (_tmp, registry) = registry();
        let key = topo_key(0);
        registry.save(Access::Engineer, PDF, "scan.pdf", &key).unwrap();
        let before = dir_listing(&registry);

        assert!(matches!(
            registry.save(Access::ReadOnly, b"other", "other.pdf", &key),
            Err(TrackerError::Unauthorized)
        ));
        assert!(matches!(
            registry.save(Access::ReadOnly, b"new", "new.png", &topo_key(1)),
            Err(TrackerError::Unauthorized)
        ));
        assert!(matches!(
            registry.delete(Access::ReadOnly, &key),
            Err(TrackerError::Unauthorized)
        ));
        assert!(matches!(
            registry.save_data_url(Access::ReadOnly, "garbage", "x.pdf", &key),
            Err(TrackerError::Unauthorized)
        ));

        assert_eq!(dir_listing(&registry), before);
    }

    #[test]
    fn test_unexpected_kind_is_rejected() {
        let (_tmp, registry) = registry();
        let key = DocumentKey::new(Task::first(), Unit::first(), DocumentKind::LabReport);
        assert!(matches!(
            registry.save(Access::Engineer, PDF, "lab.pdf", &key),
            Err(TrackerError::UnknownDocumentKind(_))
        ));
        assert!(dir_listing(&registry).is_empty());
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let (_tmp, registry) = registry();
        assert!(matches!(
            registry.save(Access::Engineer, b"x", "notes.txt", &topo_key(0)),
            Err(TrackerError::Malformed(_))
        ));
        assert!(dir_listing(&registry).is_empty());
    }

    #[test]
    fn test_save_data_url() {
        let (_tmp, registry) = registry();
        let key = topo_key(0);
        let stored = registry
            .save_data_url(
                Access::Engineer,
                "data:application/pdf;base64,JVBERi0xLjQ=",
                "scan.pdf",
                &key,
            )
            .unwrap();
        assert_eq!(std::fs::read(registry.path_of(&stored)).unwrap(), b"%PDF-1.4");

        assert!(matches!(
            registry.save_data_url(Access::Engineer, "plain text", "scan.pdf", &key),
            Err(TrackerError::Malformed(_))
        ));
        // The earlier upload survives a malformed replacement
        assert!(registry.locate(&key).is_some());
    }

    #[test]
    fn test_list_existing_follows_kind_order() {
        let (_tmp, registry) = registry();
        let task = Task::first();
        let unit = Unit::from_index(9).unwrap();

        for (kind, name) in [
            (DocumentKind::TopoScan, "topo.jpg"),
            (DocumentKind::SelfCheckArchitecture, "check.pdf"),
        ] {
            registry
                .save(Access::Engineer, PDF, name, &DocumentKey::new(task, unit, kind))
                .unwrap();
        }

        let kinds: Vec<DocumentKind> = registry
            .list_existing(task, unit)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![DocumentKind::SelfCheckArchitecture, DocumentKind::TopoScan]
        );
        // Other units are unaffected
        assert!(registry
            .list_existing(task, Unit::from_index(10).unwrap())
            .is_empty());
    }
}

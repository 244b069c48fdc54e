//! On-disk archive of rendered booklets.
//!
//! Every write goes to a temporary file with a per-call unique name and is then
//! renamed over `<dir>/<stem>.pdf`, so concurrent renders for the same
//! identifier never share a half-written file. [`archive_file_stem`] gives
//! each identifier its own stem.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::repository::RepositoryError;

/// Directory of rendered booklets
#[derive(Debug, Clone)]
pub struct BookletArchive {
    dir: PathBuf,
}

impl BookletArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final path of the booklet for `health_id`
    pub fn path_for(&self, health_id: &str) -> PathBuf {
        self.dir.join(format!("{}.pdf", archive_file_stem(health_id)))
    }

    /// Write `bytes` as the current booklet for `health_id`
    pub async fn store(&self, health_id: &str, bytes: &[u8]) -> Result<PathBuf, RepositoryError> {
        fs::create_dir_all(&self.dir).await?;

        let stem = archive_file_stem(health_id);
        let tmp_path = self
            .dir
            .join(format!(".{}.{}.pdf.tmp", stem, Uuid::new_v4().simple()));
        let final_path = self.path_for(health_id);

        if let Err(e) = fs::write(&tmp_path, bytes).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp_path, &final_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        debug!("Archived booklet at {}", final_path.display());
        Ok(final_path)
    }
}

/// Longest stem written verbatim; longer stems are truncated and suffixed
/// with a digest of the full identifier.
const MAX_STEM_LEN: usize = 128;
const TRUNCATED_STEM_LEN: usize = 96;
const DIGEST_HEX_LEN: usize = 32;

/// Map a health identifier to an archive file stem.
///
/// Bytes outside `[A-Za-z0-9-]` are written as `_XX` (uppercase hex), so
/// distinct identifiers always get distinct stems and no stem can name a
/// directory. Stems longer than `MAX_STEM_LEN` keep a prefix plus `~` and a
/// SHA-256 prefix of the identifier, keeping every archive and temp file name
/// well under the usual 255-byte limit.
pub fn archive_file_stem(health_id: &str) -> String {
    let mut stem = String::with_capacity(health_id.len());
    for byte in health_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("_{:02X}", byte));
        }
    }

    if stem.is_empty() {
        return "_".to_string();
    }
    if stem.len() <= MAX_STEM_LEN {
        return stem;
    }

    // never cut through an `_XX` escape
    let mut cut = TRUNCATED_STEM_LEN;
    while let Some(pos) = stem[..cut].rfind('_') {
        if cut - pos >= 3 {
            break;
        }
        cut = pos;
    }

    let digest = hex::encode(Sha256::digest(health_id.as_bytes()));
    format!("{}~{}", &stem[..cut], &digest[..DIGEST_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_file_stem() {
        assert_eq!(archive_file_stem("HID-1700000000"), "HID-1700000000");
        assert_eq!(archive_file_stem("../etc/passwd"), "_2E_2E_2Fetc_2Fpasswd");
        assert_eq!(archive_file_stem(".."), "_2E_2E");
        assert_eq!(archive_file_stem("a b"), "a_20b");
        assert_eq!(archive_file_stem("José"), "Jos_C3_A9");
        assert_eq!(archive_file_stem(""), "_");
    }

    #[test]
    fn test_archive_file_stem_keeps_similar_ids_apart() {
        let ids = ["a b", "a_b", "a/b", "a.b", "a_5Fb", "_"];
        let stems: std::collections::HashSet<_> =
            ids.iter().map(|id| archive_file_stem(id)).collect();
        assert_eq!(stems.len(), ids.len());

        let archive = BookletArchive::new("/archive");
        assert_ne!(archive.path_for("a b"), archive.path_for("a_b"));
    }

    #[test]
    fn test_archive_file_stem_caps_long_ids() {
        let long = "x".repeat(300);
        let stem = archive_file_stem(&long);
        assert!(stem.len() <= MAX_STEM_LEN);
        assert!(stem.starts_with(&"x".repeat(TRUNCATED_STEM_LEN)));

        // same prefix, different tail
        let other = format!("{}y", "x".repeat(299));
        assert_ne!(stem, archive_file_stem(&other));

        // truncation backs off to an escape boundary
        let escaped = archive_file_stem(&" ".repeat(200));
        let (prefix, _) = escaped.split_once('~').unwrap();
        assert_eq!(prefix.len() % 3, 0);
        assert!(prefix.chars().collect::<Vec<_>>().chunks(3).all(|c| c == ['_', '2', '0']));
    }

    #[tokio::test]
    async fn test_store_long_id() {
        let dir = tempfile::tempdir().unwrap();
        let archive = BookletArchive::new(dir.path());
        let long = "x".repeat(300);

        let path = archive.store(&long, b"%PDF-1.4 long").await.unwrap();
        assert_eq!(path, archive.path_for(&long));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 long");
    }

    #[tokio::test]
    async fn test_store_keeps_similar_ids_apart() {
        let dir = tempfile::tempdir().unwrap();
        let archive = BookletArchive::new(dir.path());

        archive.store("a b", b"space").await.unwrap();
        archive.store("a_b", b"underscore").await.unwrap();

        assert_eq!(std::fs::read(archive.path_for("a b")).unwrap(), b"space");
        assert_eq!(std::fs::read(archive.path_for("a_b")).unwrap(), b"underscore");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_store_writes_final_file_and_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let archive = BookletArchive::new(dir.path().join("booklets"));

        let path = archive.store("A1", b"%PDF-1.4 first").await.unwrap();
        assert_eq!(path, archive.path_for("A1"));

        archive.store("A1", b"%PDF-1.4 second").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 second");

        let entries: Vec<_> = std::fs::read_dir(archive.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec!["A1.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_stores_for_same_id() {
        let dir = tempfile::tempdir().unwrap();
        let archive = BookletArchive::new(dir.path());

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let archive = archive.clone();
                tokio::spawn(async move {
                    archive
                        .store("same", format!("payload-{}", i).as_bytes())
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let content = std::fs::read_to_string(archive.path_for("same")).unwrap();
        assert!(content.starts_with("payload-"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}

// src/persistence.rs

use crate::lexicon::FixedLexicon;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Failures while loading or saving a lexicon snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("lexicon file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("lexicon encoding error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("lexicon replace error: {0}")]
    Rename(#[from] tempfile::PersistError),
}

/// Write the lexicon as a bincode snapshot. The encoded bytes are written in
/// full to a temporary file in the destination directory before it is renamed
/// over the target, so neither a crash nor a failed write can replace a good
/// snapshot with a truncated one.
pub fn save_lexicon(lexicon: &FixedLexicon, path: &Path) -> Result<(), PersistError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let bytes = bincode::serialize(lexicon)?;
    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(&bytes)?;

    temp_file.persist(path)?;
    Ok(())
}

/// Read a lexicon snapshot written by `save_lexicon`.
pub fn load_lexicon(path: &Path) -> Result<FixedLexicon, PersistError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");

        let mut lexicon = FixedLexicon::default();
        lexicon.insert("هلق", vec!["h a ll a '".to_string()]);
        save_lexicon(&lexicon, &path).unwrap();

        let restored = load_lexicon(&path).unwrap();
        assert_eq!(restored.len(), lexicon.len());
        assert_eq!(restored.lookup("هلق"), Some(&["h a ll a '".to_string()][..]));
        assert_eq!(restored.lookup("شو"), Some(&["$ uu".to_string()][..]));
    }

    #[test]
    fn snapshot_on_disk_is_the_complete_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");

        let lexicon = FixedLexicon::default();
        save_lexicon(&lexicon, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), bincode::serialize(&lexicon).unwrap());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("lexicon.bin");
        save_lexicon(&FixedLexicon::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn loading_a_missing_file_reports_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_lexicon(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));
    }

    #[test]
    fn saving_twice_replaces_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");

        save_lexicon(&FixedLexicon::default(), &path).unwrap();
        let mut extended = FixedLexicon::default();
        extended.insert("كمان", vec!["k a m aa n".to_string()]);
        save_lexicon(&extended, &path).unwrap();

        assert_eq!(load_lexicon(&path).unwrap().len(), 18);
    }
}

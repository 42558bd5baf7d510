/*!
Discovery of address-list files below a scan result directory.
*/
use crate::error::PrefixFinderError;
use crate::models::DiscoveredFile;
use itertools::Itertools;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively looks for files with a given name, e.g. every `uniq_ips.txt` under
/// `<root>/<country>/<group>/`.
///
/// Symlinked directories are not followed.
#[derive(Debug, Clone)]
pub struct FileScanner {
    root: PathBuf,
    target_filename: String,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P, target_filename: &str) -> FileScanner {
        FileScanner {
            root: root.as_ref().to_path_buf(),
            target_filename: target_filename.to_string(),
        }
    }

    /// Walks the tree and returns every match, sorted by path.
    ///
    /// The root itself must be a readable directory. Subdirectories that cannot be read are
    /// logged and skipped, as are matches too shallow to carry a country identifier.
    pub fn scan(&self) -> Result<Vec<DiscoveredFile>, PrefixFinderError> {
        let root = std::path::absolute(&self.root)?;
        if !root.is_dir() {
            return Err(PrefixFinderError::InvalidScanRoot(
                root.display().to_string(),
            ));
        }

        let mut matches = Vec::new();
        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) if dir == root => return Err(e.into()),
                Err(e) => {
                    warn!("cannot read directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("cannot read entry in {}: {}", dir.display(), e);
                        continue;
                    }
                };
                let file_type = match entry.file_type() {
                    Ok(t) => t,
                    Err(e) => {
                        warn!("cannot stat {}: {}", entry.path().display(), e);
                        continue;
                    }
                };

                if file_type.is_dir() {
                    pending.push(entry.path());
                } else if entry.file_name() == self.target_filename.as_str() {
                    matches.push(entry.path());
                }
            }
        }

        Ok(matches
            .into_iter()
            .sorted()
            .filter_map(|path| {
                let discovered = DiscoveredFile::from_path(&path);
                if discovered.is_none() {
                    debug!("{} is too shallow for a country id", path.display());
                }
                discovered
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "2001:db8::1\n").unwrap();
    }

    #[test]
    fn test_scan_finds_targets() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("us/as7922/uniq_ips.txt"));
        touch(&root.join("cn/as4134/uniq_ips.txt"));
        touch(&root.join("cn/as4837/uniq_ips.txt"));
        touch(&root.join("cn/as4837/other.txt"));
        touch(&root.join("de/uniq_ips.txt.bak"));

        let found = FileScanner::new(root, "uniq_ips.txt").scan().unwrap();
        let countries: Vec<&str> = found.iter().map(|f| f.country_id.as_str()).collect();
        assert_eq!(countries, vec!["cn", "cn", "us"]);
        assert!(found.iter().all(|f| f.path.is_absolute()));
        assert!(found[0].path.ends_with("cn/as4134/uniq_ips.txt"));
        assert!(found[1].path.ends_with("cn/as4837/uniq_ips.txt"));
    }

    #[test]
    fn test_scan_country_is_two_levels_up() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("jp/uniq_ips.txt"));

        let found = FileScanner::new(root, "uniq_ips.txt").scan().unwrap();
        assert_eq!(found.len(), 1);
        // the directory above "jp" is the temp root
        assert_eq!(
            found[0].country_id,
            root.file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn test_scan_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        let found = FileScanner::new(dir.path(), "uniq_ips.txt").scan().unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileScanner::new(dir.path().join("absent"), "uniq_ips.txt").scan();
        assert!(matches!(
            result,
            Err(PrefixFinderError::InvalidScanRoot(_))
        ));
    }
}

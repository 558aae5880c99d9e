//! In-memory view of the master include file.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::resources::helpers::fs::read_optional;

/// Lines of the master include file, edited in memory and written back once.
///
/// Lines are stored trimmed. Order and unrelated lines survive a rewrite; the
/// file is only touched by [`IncludeList::save`] and only if an edit changed
/// the line set.
#[derive(Debug)]
pub struct IncludeList {
    path: PathBuf,
    lines: Vec<String>,
    dirty: bool,
}

impl IncludeList {
    /// Read `path`. A missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let lines = read_optional(path)?
            .map(|content| content.lines().map(|l| l.trim().to_string()).collect())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            lines,
            dirty: false,
        })
    }

    /// Current lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether `line` is present.
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Append `line` unless already present. Returns `true` if appended.
    pub fn insert(&mut self, line: String) -> bool {
        if self.contains(&line) {
            return false;
        }
        self.lines.push(line);
        self.dirty = true;
        true
    }

    /// Drop every occurrence of `line`. Returns `true` if anything was removed.
    pub fn remove(&mut self, line: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l != line);
        let removed = self.lines.len() != before;
        self.dirty |= removed;
        removed
    }

    /// Rewrite the file from the line list if dirty. Returns `true` if written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        std::fs::write(&self.path, self.lines.join("\n"))
            .with_context(|| format!("write master include file: {}", self.path.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    const LINE_A: &str = "include \"domains/a.org.conf\"";
    const LINE_B: &str = "include \"domains/b.org.conf\"";

    #[test]
    fn missing_file_is_empty_and_not_created() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("incl-domains.conf");
        let list = IncludeList::load(&path).unwrap();
        assert!(list.lines().is_empty());
        assert!(!list.save().unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn load_trims_each_line() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("incl-domains.conf");
        std::fs::write(&path, format!("  # vhosts  \n{LINE_A}   \n\n{LINE_B}\n")).unwrap();

        let list = IncludeList::load(&path).unwrap();
        assert_eq!(list.lines(), ["# vhosts", LINE_A, "", LINE_B]);
    }

    #[test]
    fn insert_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let mut list = IncludeList::load(&tmp.path().join("m.conf")).unwrap();
        assert!(list.insert(LINE_A.to_string()));
        assert!(!list.insert(LINE_A.to_string()));
        assert_eq!(list.lines(), [LINE_A]);
    }

    #[test]
    fn remove_drops_duplicates_and_keeps_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("m.conf");
        std::fs::write(&path, format!("# head\n{LINE_A}\n{LINE_B}\n{LINE_A}")).unwrap();

        let mut list = IncludeList::load(&path).unwrap();
        assert!(list.remove(LINE_A));
        assert!(!list.remove(LINE_A));
        assert_eq!(list.lines(), ["# head", LINE_B]);
    }

    #[test]
    fn unchanged_list_is_not_rewritten() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("m.conf");
        std::fs::write(&path, format!("{LINE_A}\n")).unwrap();

        let mut list = IncludeList::load(&path).unwrap();
        assert!(!list.insert(LINE_A.to_string()));
        assert!(!list.remove(LINE_B));
        assert!(!list.save().unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("{LINE_A}\n"));
    }

    #[test]
    fn save_joins_lines_with_newlines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("m.conf");
        std::fs::write(&path, "# head\n").unwrap();

        let mut list = IncludeList::load(&path).unwrap();
        list.insert(LINE_A.to_string());
        list.insert(LINE_B.to_string());
        assert!(list.save().unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!("# head\n{LINE_A}\n{LINE_B}")
        );
    }
}

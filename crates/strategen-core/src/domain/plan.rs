//! File plan — the pure output of planning, ready for materialization.

use std::path::{Path, PathBuf};

/// One file the generator intends to write.
///
/// `dir` is relative to the output root; the writer is responsible for
/// creating the directory chain before writing the leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub dir: PathBuf,
    pub name: String,
    pub content: String,
}

impl PlannedFile {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>, content: String) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            content,
        }
    }

    /// Relative path of the file itself (`dir/name`).
    pub fn relative_path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Ordered list of planned files.
///
/// Order is the write order: entities first, then per-context interface and
/// implementations, injector last. It contains no business logic, only data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePlan {
    pub(crate) files: Vec<PlannedFile>,
}

impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, dir: impl Into<PathBuf>, name: impl Into<String>, content: String) {
        self.files.push(PlannedFile::new(dir, name, content));
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a planned file by its relative path (testing helper).
    pub fn find(&self, relative: impl AsRef<Path>) -> Option<&PlannedFile> {
        let relative = relative.as_ref();
        self.files.iter().find(|f| f.relative_path() == relative)
    }
}

/// Split a path-like schema string into a relative `PathBuf`.
///
/// Segments are split on both `/` and `\`; empty segments (leading, trailing,
/// doubled separators) are dropped, matching the original write sequencing.
pub fn relative_dir(raw: &str) -> PathBuf {
    raw.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_dir_splits_forward_slashes() {
        assert_eq!(relative_dir("Domain/Entities"), PathBuf::from("Domain/Entities"));
    }

    #[test]
    fn relative_dir_splits_backslashes() {
        assert_eq!(
            relative_dir("Domain\\Entities"),
            PathBuf::from("Domain").join("Entities")
        );
    }

    #[test]
    fn relative_dir_drops_empty_segments() {
        assert_eq!(
            relative_dir("/Domain//Entities/"),
            PathBuf::from("Domain").join("Entities")
        );
    }

    #[test]
    fn planned_file_relative_path_joins_dir_and_name() {
        let file = PlannedFile::new("Entities", "Order.cs", String::new());
        assert_eq!(file.relative_path(), PathBuf::from("Entities/Order.cs"));
    }

    #[test]
    fn plan_preserves_insertion_order() {
        let mut plan = FilePlan::new();
        plan.add_file("a", "1.cs", String::new());
        plan.add_file("b", "2.cs", String::new());
        let names: Vec<_> = plan.files().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["1.cs", "2.cs"]);
    }

    #[test]
    fn find_matches_on_relative_path() {
        let mut plan = FilePlan::new();
        plan.add_file("Entities", "Order.cs", "x".into());
        assert!(plan.find("Entities/Order.cs").is_some());
        assert!(plan.find("Entities/User.cs").is_none());
    }
}

//! Catalog loading
//!
//! The catalog is read once, validated, and never mutated afterwards. A
//! default dataset is compiled into the binary; a JSON file with the same
//! schema can replace it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::CatalogError;
use super::model::Course;

/// Dataset shipped with the application
const BUILTIN_CATALOG: &str = include_str!("../../data/courses.json");

/// An ordered, read-only list of courses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog from courses, rejecting duplicate ids
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !seen.insert(course.id) {
                return Err(CatalogError::DuplicateId(course.id));
            }
        }
        Ok(Self { courses })
    }

    /// Parse a JSON array of courses
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::new(courses)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!("Loaded {} courses from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The built-in dataset
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load from `path` if given, otherwise use the built-in dataset
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// All courses in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses the learner is enrolled in, for the "continue learning" panel
    pub fn continue_learning(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.enrolled).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::course;
    use crate::catalog::model::Difficulty;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.courses()[0].title, "Intro to Sonic Smart Contracts");
    }

    #[test]
    fn builtin_catalog_has_enrolled_courses() {
        let catalog = Catalog::builtin().unwrap();
        let enrolled = catalog.continue_learning();
        assert_eq!(enrolled.len(), 3);
        assert!(enrolled.iter().all(|c| c.enrolled));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let courses =
            vec![course(1, "A", Difficulty::Beginner), course(1, "B", Difficulty::Expert)];
        let err = Catalog::new(courses).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
        assert!(err.is_content_error());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 7, "title": "Rust", "description": "Ownership",
                 "difficulty": "Expert", "duration": "2 weeks"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.courses()[0].id, 7);
        assert_eq!(catalog.courses()[0].title, "Rust");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(!err.is_content_error());
    }

    #[test]
    fn continue_learning_keeps_catalog_order() {
        let mut a = course(1, "A", Difficulty::Beginner);
        a.enrolled = true;
        let b = course(2, "B", Difficulty::Beginner);
        let mut c = course(3, "C", Difficulty::Expert);
        c.enrolled = true;
        let catalog = Catalog::new(vec![a, b, c]).unwrap();

        let ids: Vec<u32> = catalog.continue_learning().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}

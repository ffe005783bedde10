//! Course catalog data

pub mod error;
pub mod model;
pub mod storage;

pub use error::{CatalogError, ParseCategoryError};
pub use model::{Category, Course, Difficulty, PLACEHOLDER_IMAGE, STUDENTS_CAPTION};
pub use storage::Catalog;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::model::{Course, Difficulty};

    /// A minimal, unenrolled course for tests
    pub(crate) fn course(id: u32, title: &str, difficulty: Difficulty) -> Course {
        Course {
            id,
            title: title.into(),
            description: format!("About {title}"),
            image: String::new(),
            difficulty,
            duration: "4 weeks".into(),
            enrolled: false,
            progress: None,
        }
    }
}

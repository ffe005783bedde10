//! Free-text search and difficulty filtering
//!
//! Every function takes the course slice explicitly, so the same engine runs
//! against the real catalog and against synthetic datasets in tests.

use crate::catalog::{Category, Course};

/// Lower-cased needle for a query, `None` when the query is blank
fn needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Whether a course's title, description, or difficulty label contains the
/// (already lower-cased) needle
fn contains_needle(course: &Course, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
        || course.difficulty.label().to_lowercase().contains(needle)
}

/// Case-insensitive text match. A blank query matches every course.
pub fn matches_query(course: &Course, query: &str) -> bool {
    needle(query).is_none_or(|n| contains_needle(course, &n))
}

/// Courses passing the text filter alone, in catalog order
pub fn search<'c>(courses: &'c [Course], query: &str) -> Vec<&'c Course> {
    match needle(query) {
        Some(n) => courses.iter().filter(|c| contains_needle(c, &n)).collect(),
        None => courses.iter().collect(),
    }
}

/// Courses passing both the text filter and the category filter, in catalog
/// order
pub fn filter_courses<'c>(
    courses: &'c [Course],
    query: &str,
    category: Category,
) -> Vec<&'c Course> {
    search(courses, query).into_iter().filter(|c| category.matches(c.difficulty)).collect()
}

/// Number of courses each category would show for the current search.
///
/// Counts are taken over the text-filtered set, so they stay the same no
/// matter which category is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts([usize; 5]);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.0[category.index()]
    }

    /// `(category, count)` pairs in listing order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Per-category counts for a query
pub fn category_counts(courses: &[Course], query: &str) -> CategoryCounts {
    let mut counts = [0; 5];
    for course in search(courses, query) {
        counts[Category::All.index()] += 1;
        counts[Category::from(course.difficulty).index()] += 1;
    }
    CategoryCounts(counts)
}

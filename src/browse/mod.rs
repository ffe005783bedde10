//! Search, filtering, and pagination over the catalog

pub mod pager;
pub mod search;
pub mod session;

pub use pager::{DEFAULT_LOAD_MORE_STEP, DEFAULT_PAGE_SIZE, Pager};
pub use search::{CategoryCounts, category_counts, filter_courses, matches_query, search};
pub use session::{BrowseSession, Results};

mod general_search;
mod iterative_deepening;
mod search_engine;

pub use general_search::general_search;
pub use iterative_deepening::iterative_deepening;
pub use search_engine::{SearchOptions, SearchResult};

mod search;

pub use search::Searcher;

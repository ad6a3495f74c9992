mod content;
mod error;
mod extractors;
mod page_query;

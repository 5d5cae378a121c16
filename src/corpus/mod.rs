pub mod graph;
pub mod scan;
pub mod builder;


pub use graph::{LinkGraph, PageId};
pub use scan::{extract_links, is_corpus_document, PAGE_EXTENSION};
pub use builder::crawl;

pub mod config;
pub mod corpus;
pub mod error;
pub mod rank;
pub mod report;

pub use corpus::{crawl, LinkGraph, PageId};
pub use error::{RankError, Result};
pub use rank::{iterate_pagerank, sample_pagerank, transition_model, Distribution, RankConfig};

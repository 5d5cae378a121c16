pub mod config;
pub mod transition;
pub mod sampling;
pub mod iterative;


pub use config::{
    RankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_THRESHOLD,
};
pub use transition::{transition_model, Distribution};
pub use sampling::{choose_weighted, sample_pagerank, sample_pagerank_with_rng};
pub use iterative::iterate_pagerank;

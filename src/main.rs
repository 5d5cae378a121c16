use log2::*;
use anyhow::Result;
use std::time::Instant;

use page_ranker::{config, corpus, report};

/// Indicates start time of a project, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("page_ranker"))
        .compress(false)
        .level(cfg.log_level.as_str())
        .start();

    let graph = corpus::crawl(&cfg.corpus).await?;
    debug!("Sink pages: {:?}", graph.sinks().collect::<Vec<_>>());

    let rank_cfg = cfg.rank_config();
    // both estimators finish before anything is printed
    let sampled = rank_cfg.sample(&graph)?;
    let iterated = rank_cfg.iterate(&graph)?;

    let sampling_title = format!("PageRank Results from Sampling (n = {})", rank_cfg.samples);
    report::print_ranks(&sampling_title, &sampled);
    report::print_ranks("PageRank Results from Iteration", &iterated);

    if let Some(path) = &cfg.output_file {
        let result = report::Report {
            corpus: cfg.corpus.clone(),
            damping: rank_cfg.damping,
            samples: rank_cfg.samples,
            sampling: sampled,
            iteration: iterated,
        };
        report::write_report(path, &result)?;
        info!("Results written to {:?}", path);
    }

    info!("Finished in {:?}", START_TIME.elapsed());
    Ok(())
}

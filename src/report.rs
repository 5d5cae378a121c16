use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::rank::Distribution;

/// Everything a run produced, written out with `--output-file`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub corpus: PathBuf,
    pub damping: f64,
    pub samples: usize,
    pub sampling: Distribution,
    pub iteration: Distribution,
}

/// Render ranks in page order, one `  page: rank` line each
pub fn format_ranks(title: &str, ranks: &Distribution) -> String {
    let mut out = format!("{}\n", title);
    for (page, rank) in ranks {
        out += &format!("  {}: {:.4}\n", page, rank);
    }
    out
}

/// Print ranks in a readable format
pub fn print_ranks(title: &str, ranks: &Distribution) {
    print!("{}", format_ranks(title, ranks));
}

pub fn write_report(path: &Path, report: &Report) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_format_ranks_sorted_by_page() {
        let ranks = BTreeMap::from([("b.html".to_string(), 0.25), ("a.html".to_string(), 0.75)]);
        assert_eq!(
            format_ranks("PageRank Results from Iteration", &ranks),
            "PageRank Results from Iteration\n  a.html: 0.7500\n  b.html: 0.2500\n"
        );
    }

    #[test]
    fn test_write_report() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("ranks.json");
        let ranks = BTreeMap::from([("a.html".to_string(), 1.0)]);
        let report = Report {
            corpus: PathBuf::from("corpus0"),
            damping: 0.85,
            samples: 10,
            sampling: ranks.clone(),
            iteration: ranks,
        };

        write_report(&path, &report)?;

        let written: Report = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written, report);
        Ok(())
    }
}

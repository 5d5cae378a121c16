use log2::{debug, info};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use super::graph::LinkGraph;
use super::scan::{extract_links, is_corpus_document};
use crate::error::{RankError, Result};

/// Scan every `.html` document in `directory` and build the corpus link graph.
pub async fn crawl(directory: impl AsRef<Path>) -> Result<LinkGraph> {
    let directory = directory.as_ref();
    let not_found = |e: std::io::Error| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => {
            RankError::NotFound(directory.to_path_buf())
        }
        _ => RankError::Io(e),
    };

    let metadata = fs::metadata(directory).await.map_err(not_found)?;
    if !metadata.is_dir() {
        return Err(RankError::NotFound(directory.to_path_buf()));
    }

    let mut entries = fs::read_dir(directory).await.map_err(not_found)?;
    let mut raw = BTreeMap::new();

    while let Some(entry) = entries.next_entry().await? {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                debug!("Skipping non UTF-8 file name {:?}", name);
                continue;
            }
        };
        if !is_corpus_document(&name) || !is_document_file(&entry.path()).await? {
            debug!("Skipping {}", name);
            continue;
        }

        let contents = fs::read_to_string(entry.path()).await?;
        let mut links = extract_links(&contents)?;
        links.remove(&name);
        debug!("{} links to {} pages", name, links.len());
        raw.insert(name, links);
    }

    let graph = LinkGraph::from_links(raw);
    info!("Crawled {} pages from {}", graph.len(), directory.display());

    Ok(graph)
}

/// Regular files count, symlinks are followed. A dangling symlink is not a document.
async fn is_document_file(path: &Path) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

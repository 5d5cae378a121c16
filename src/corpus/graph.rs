use std::collections::{BTreeMap, BTreeSet};

/// Name of a page inside the corpus (the document's file name)
pub type PageId = String;

/// Outbound links of every page in a closed corpus.
///
/// Every link target is itself a page of the corpus and no page links to itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkGraph {
    links: BTreeMap<PageId, BTreeSet<PageId>>,
}

impl LinkGraph {
    /// Builds the graph from raw extracted links.
    /// Targets that aren't keys of `raw` are dropped, as are self-links.
    /// Filtering happens only once every page is known, so the order pages
    /// were discovered in doesn't matter.
    pub fn from_links(raw: BTreeMap<PageId, BTreeSet<PageId>>) -> Self {
        let links = raw
            .iter()
            .map(|(page, targets)| {
                let kept = targets
                    .iter()
                    .filter(|target| *target != page && raw.contains_key(*target))
                    .cloned()
                    .collect();
                (page.clone(), kept)
            })
            .collect();

        Self { links }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in name order
    pub fn pages(&self) -> impl Iterator<Item = &PageId> {
        self.links.keys()
    }

    /// Outbound links of `page`, `None` if the page isn't in the corpus
    pub fn links(&self, page: &str) -> Option<&BTreeSet<PageId>> {
        self.links.get(page)
    }

    /// Pages without outbound links
    pub fn sinks(&self) -> impl Iterator<Item = &PageId> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &BTreeSet<PageId>)> {
        self.links.iter()
    }
}

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
    sync::Arc,
};

use super::catalog::{Catalog, CatalogNode, EventCatalogEntry};

/// Key membership over an unordered set of inbound parameters. Only the presence of a key is ever tested; values
/// are irrelevant to classification.
pub trait ParamKeys {
    fn contains_param(&self, key: &str) -> bool;
}

impl<V, S: BuildHasher> ParamKeys for HashMap<String, V, S> {
    fn contains_param(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V> ParamKeys for BTreeMap<String, V> {
    fn contains_param(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

/// Maps the query parameters of an inbound notification onto a catalog entry.
///
/// The classifier holds no mutable state; clones share the same catalog and can be used from any number of workers
/// at once.
#[derive(Debug, Clone)]
pub struct NotificationClassifier {
    catalog: Arc<Catalog>,
}

impl NotificationClassifier {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    pub fn with_shared_catalog(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the event signalled by `params`, or `None` if no recognised trigger key is present.
    ///
    /// Top-level nodes are tried in catalog order and the first one whose key is present is taken. If that node is a
    /// category, its entries are tried in the same way. A category whose key is present but none of whose entries
    /// are gives `None`. When a request carries several trigger keys, catalog order decides, never the order of
    /// `params`.
    pub fn classify<P: ParamKeys + ?Sized>(&self, params: &P) -> Option<&EventCatalogEntry> {
        let node = self.catalog.nodes().iter().find(|node| params.contains_param(node.trigger_key()))?;
        match node {
            CatalogNode::Terminal(entry) => Some(entry),
            CatalogNode::Category(category) => {
                category.entries.iter().find(|entry| params.contains_param(&entry.trigger_key))
            },
        }
    }
}

impl Default for NotificationClassifier {
    fn default() -> Self {
        Self::new(Catalog::payoneer())
    }
}

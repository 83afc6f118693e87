use std::{collections::HashSet, fmt::Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The stable, machine-readable identifiers of the events Payoneer notifies us about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationType {
    AccountApproved,
    AccountDeclined,
    Registration,
    Pay,
    PaymentRequested,
    PaymentCanceled,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountApproved => "accountApproved",
            Self::AccountDeclined => "accountDeclined",
            Self::Registration => "registration",
            Self::Pay => "pay",
            Self::PaymentRequested => "paymentRequested",
            Self::PaymentCanceled => "paymentCanceled",
        }
    }
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf of the catalog. Serialises as `{"type": ..., "message": ...}`; the trigger key is not part of the wire
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCatalogEntry {
    #[serde(skip)]
    pub trigger_key: String,
    #[serde(rename = "type")]
    pub event_type: NotificationType,
    pub message: String,
}

impl EventCatalogEntry {
    pub fn new(trigger_key: &str, event_type: NotificationType, message: &str) -> Self {
        Self { trigger_key: trigger_key.to_string(), event_type, message: message.to_string() }
    }
}

/// Sibling entries that are reached through a shared top-level key and told apart by their own trigger keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCategory {
    pub trigger_key: String,
    pub name: String,
    pub entries: Vec<EventCatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    Terminal(EventCatalogEntry),
    Category(EventCategory),
}

impl CatalogNode {
    pub fn trigger_key(&self) -> &str {
        match self {
            Self::Terminal(entry) => &entry.trigger_key,
            Self::Category(category) => &category.trigger_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("A catalog entry has an empty trigger key. {0}")]
    EmptyTriggerKey(String),
    #[error("The top-level trigger key '{0}' is defined more than once")]
    DuplicateTriggerKey(String),
    #[error("Category '{category}' defines the trigger key '{key}' more than once")]
    DuplicateEntry { category: String, key: String },
    #[error("Category '{0}' has no entries")]
    EmptyCategory(String),
}

/// The ordered table of recognised notifications. Order matters: when an inbound notification carries more than
/// one trigger key, the node defined first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    nodes: Vec<CatalogNode>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn nodes(&self) -> &[CatalogNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The notifications sent by Payoneer's IPCN callbacks.
    ///
    /// Account decisions and payment requests/cancellations carry a single flag. Registrations and payout loads
    /// come in per-channel variants; they are grouped under the id that only that family of notification carries
    /// (`Payoneerid` for registrations, `PaymentId` for payouts), since `PaperCheck` is used by both families.
    pub fn payoneer() -> Self {
        use NotificationType::*;
        let entry = EventCatalogEntry::new;
        let nodes = vec![
            CatalogNode::Terminal(entry("APPROVED", AccountApproved, "Payee account approved")),
            CatalogNode::Terminal(entry("DECLINE", AccountDeclined, "Payee account declined")),
            CatalogNode::Terminal(entry("PAYMENT", PaymentRequested, "Payment requested")),
            CatalogNode::Terminal(entry("CancelPayment", PaymentCanceled, "Payment canceled")),
            CatalogNode::Category(EventCategory {
                trigger_key: "PaymentId".to_string(),
                name: "payment".to_string(),
                entries: vec![
                    entry("LOADCC", Pay, "Payment loaded to a prepaid card"),
                    entry("LOADACH", Pay, "Payment sent by direct deposit (ACH)"),
                    entry("LOADiACH", Pay, "Payment sent by international bank transfer (iACH)"),
                    entry("PaperCheck", Pay, "Payment sent by paper check"),
                ],
            }),
            CatalogNode::Category(EventCategory {
                trigger_key: "Payoneerid".to_string(),
                name: "registration".to_string(),
                entries: vec![
                    entry("REG", Registration, "Payee registered for a prepaid card"),
                    entry("ACHREG", Registration, "Payee registered for direct deposit (ACH)"),
                    entry("iACHREG", Registration, "Payee registered for international bank transfer (iACH)"),
                    entry("PaperCheck", Registration, "Payee registered for paper checks"),
                ],
            }),
        ];
        Self { nodes }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::payoneer()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    nodes: Vec<CatalogNode>,
}

impl CatalogBuilder {
    pub fn terminal(mut self, trigger_key: &str, event_type: NotificationType, message: &str) -> Self {
        self.nodes.push(CatalogNode::Terminal(EventCatalogEntry::new(trigger_key, event_type, message)));
        self
    }

    pub fn category(mut self, trigger_key: &str, name: &str, entries: Vec<EventCatalogEntry>) -> Self {
        self.nodes.push(CatalogNode::Category(EventCategory {
            trigger_key: trigger_key.to_string(),
            name: name.to_string(),
            entries,
        }));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        validate_nodes(&self.nodes)?;
        Ok(Catalog { nodes: self.nodes })
    }
}

pub(crate) fn validate_nodes(nodes: &[CatalogNode]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for node in nodes {
        if node.trigger_key().is_empty() {
            return Err(CatalogError::EmptyTriggerKey(format!("Top-level node #{}", seen.len() + 1)));
        }
        if !seen.insert(node.trigger_key()) {
            return Err(CatalogError::DuplicateTriggerKey(node.trigger_key().to_string()));
        }
        if let CatalogNode::Category(category) = node {
            if category.entries.is_empty() {
                return Err(CatalogError::EmptyCategory(category.name.clone()));
            }
            let mut keys = HashSet::new();
            for entry in &category.entries {
                if entry.trigger_key.is_empty() {
                    return Err(CatalogError::EmptyTriggerKey(format!("Category '{}'", category.name)));
                }
                if !keys.insert(entry.trigger_key.as_str()) {
                    return Err(CatalogError::DuplicateEntry {
                        category: category.name.clone(),
                        key: entry.trigger_key.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

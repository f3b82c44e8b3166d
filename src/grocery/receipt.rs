use serde::{Deserialize, Serialize};

/// Record of a completed shopping trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    /// Store name (e.g. "Whole Foods")
    pub store: String,
    /// Display date (e.g. "Dec 15")
    pub date: String,
    /// Amount paid, never negative
    pub amount: f64,
    /// Reference to an attached proof-of-purchase image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl Receipt {
    /// Check if an image has been attached to this receipt
    pub fn has_image(&self) -> bool {
        self.image_uri.is_some()
    }
}

/// Totals derived from the receipts collection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpendingSummary {
    pub total_spent: f64,
    pub trips: usize,
}

impl SpendingSummary {
    /// Sum up a set of receipts
    pub fn from_receipts(receipts: &[Receipt]) -> Self {
        Self {
            total_spent: receipts.iter().map(|r| r.amount).sum(),
            trips: receipts.len(),
        }
    }
}

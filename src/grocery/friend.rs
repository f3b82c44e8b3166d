use super::error::StoreError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::info;

/// A friend who shares shopping with the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique name, used as the key
    pub name: String,
    /// Avatar initial
    pub avatar: String,
    /// Avatar color as a hex string
    pub color: String,
    /// Outstanding balance the friend owes the user
    #[serde(default)]
    pub owes: f64,
}

impl Friend {
    pub fn has_debt(&self) -> bool {
        self.owes > 0.0
    }
}

/// Totals across all friends' balances
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebtSummary {
    pub total_owed: f64,
    pub friends_with_debt: usize,
}

/// Read-only set of friends supplied at startup
///
/// Balances are display data; nothing here ever changes `owes`.
#[derive(Debug, Clone, Default)]
pub struct FriendRoster {
    friends: Vec<Friend>,
}

impl FriendRoster {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// All friends in the order they were supplied
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Find a friend by name (exact match)
    pub fn find(&self, name: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.name == name)
    }

    /// Friends ordered by balance, highest first
    ///
    /// Friends with equal balances keep their original order.
    pub fn sorted_by_debt(&self) -> Vec<&Friend> {
        let mut sorted: Vec<&Friend> = self.friends.iter().collect();
        sorted.sort_by(|a, b| b.owes.total_cmp(&a.owes));
        sorted
    }

    pub fn debt_summary(&self) -> DebtSummary {
        DebtSummary {
            total_owed: self.friends.iter().map(|f| f.owes).sum(),
            friends_with_debt: self.friends.iter().filter(|f| f.has_debt()).count(),
        }
    }

    /// Settle a friend's debt
    ///
    /// Placeholder: the balance is left untouched and `NotImplemented` is
    /// returned for any known friend.
    pub fn settle(&self, name: &str) -> Result<Infallible, StoreError> {
        let friend = self
            .find(name)
            .ok_or_else(|| StoreError::FriendNotFound(name.to_string()))?;
        info!(friend = %friend.name, owes = friend.owes, "debt settlement requested");
        Err(StoreError::NotImplemented {
            feature: "Debt settlement",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(name: &str, owes: f64) -> Friend {
        Friend {
            name: name.to_string(),
            avatar: name[..1].to_string(),
            color: "#000000".to_string(),
            owes,
        }
    }

    fn roster() -> FriendRoster {
        FriendRoster::new(vec![
            friend("Emma", 0.0),
            friend("Mike", 18.0),
            friend("Sarah", 24.5),
            friend("Tom", 18.0),
        ])
    }

    #[test]
    fn test_sorted_by_debt_descending_and_stable() {
        let roster = roster();
        let names: Vec<&str> = roster
            .sorted_by_debt()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sarah", "Mike", "Tom", "Emma"]);
        // Original order is untouched
        assert_eq!(roster.friends()[0].name, "Emma");
    }

    #[test]
    fn test_debt_summary() {
        let summary = roster().debt_summary();
        assert_eq!(summary.friends_with_debt, 3);
        assert!((summary.total_owed - 60.5).abs() < 1e-9);
    }

    #[test]
    fn test_settle_known_friend_is_stub() {
        let roster = roster();
        let result = roster.settle("Sarah");
        assert!(matches!(result, Err(StoreError::NotImplemented { .. })));
        assert_eq!(roster.find("Sarah").unwrap().owes, 24.5);
    }

    #[test]
    fn test_settle_unknown_friend() {
        let result = roster().settle("Zoe");
        assert_eq!(result, Err(StoreError::FriendNotFound("Zoe".to_string())));
    }
}

//! Location data types.

use serde::{Deserialize, Serialize};

use budgetone_shared::types::{Currency, LocationId, UserId};

/// A branch or site whose manager enters budget figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location ID.
    pub id: LocationId,
    /// Display name (e.g., "London HQ").
    pub name: String,
    /// Currency the location reports in.
    pub currency: Currency,
    /// The manager responsible for this location's budget.
    pub manager_id: UserId,
}

/// Finds the location managed by the given user.
///
/// The intended design is at most one location per manager; when the data
/// violates that, the first match wins.
#[must_use]
pub fn find_by_manager(locations: &[Location], manager_id: UserId) -> Option<&Location> {
    locations.iter().find(|l| l.manager_id == manager_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(manager_id: UserId, name: &str) -> Location {
        Location {
            id: LocationId::new(),
            name: name.to_string(),
            currency: Currency::Gbp,
            manager_id,
        }
    }

    #[test]
    fn test_find_by_manager() {
        let manager = UserId::new();
        let locations = vec![location(UserId::new(), "London"), location(manager, "Istanbul")];

        let found = find_by_manager(&locations, manager).unwrap();
        assert_eq!(found.name, "Istanbul");
    }

    #[test]
    fn test_find_by_manager_none_assigned() {
        let locations = vec![location(UserId::new(), "London")];
        assert!(find_by_manager(&locations, UserId::new()).is_none());
    }

    #[test]
    fn test_find_by_manager_first_match_wins() {
        let manager = UserId::new();
        let locations = vec![location(manager, "First"), location(manager, "Second")];

        assert_eq!(find_by_manager(&locations, manager).unwrap().name, "First");
    }
}

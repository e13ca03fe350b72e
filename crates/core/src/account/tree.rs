//! Chart-of-accounts tree validation.
//!
//! The chart is a flat list with optional parent references. Every
//! `parent_id` must reference an existing category and the parent chain must
//! be acyclic (tree, not graph).

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use budgetone_shared::types::CategoryId;

use super::types::Category;

/// Chart validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A category references a parent that does not exist.
    #[error("category {child} references missing parent {parent}")]
    MissingParent {
        /// The referencing category.
        child: CategoryId,
        /// The dangling parent reference.
        parent: CategoryId,
    },

    /// The parent chain contains a cycle.
    #[error("parent chain starting at category {0} contains a cycle")]
    Cycle(CategoryId),

    /// Two categories share the same ID.
    #[error("duplicate category id {0}")]
    DuplicateId(CategoryId),
}

/// Validates the chart-of-accounts invariants.
///
/// # Errors
///
/// Returns the first violation found: a duplicate ID, a dangling parent
/// reference, or a cycle in the parent chain.
pub fn validate_chart(categories: &[Category]) -> Result<(), ChartError> {
    let mut by_id: HashMap<CategoryId, &Category> = HashMap::with_capacity(categories.len());
    for category in categories {
        if by_id.insert(category.id, category).is_some() {
            return Err(ChartError::DuplicateId(category.id));
        }
    }

    for category in categories {
        if let Some(parent_id) = category.parent_id {
            if !by_id.contains_key(&parent_id) {
                return Err(ChartError::MissingParent {
                    child: category.id,
                    parent: parent_id,
                });
            }
        }
    }

    // Walk every parent chain; revisiting a node within one walk means a cycle.
    for category in categories {
        let mut seen: HashSet<CategoryId> = HashSet::new();
        let mut current = category;
        while let Some(parent_id) = current.parent_id {
            if !seen.insert(current.id) {
                return Err(ChartError::Cycle(category.id));
            }
            match by_id.get(&parent_id) {
                Some(parent) => current = parent,
                None => break, // already reported above
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::types::CategoryKind;

    fn category(id: CategoryId, code: &str, parent_id: Option<CategoryId>) -> Category {
        Category {
            id,
            code: code.to_string(),
            name: format!("Category {code}"),
            kind: Some(CategoryKind::Expense),
            parent_id,
            position: 0,
        }
    }

    #[test]
    fn test_valid_two_level_chart() {
        let group = CategoryId::new();
        let chart = vec![
            category(group, "100", None),
            category(CategoryId::new(), "100.01", Some(group)),
            category(CategoryId::new(), "100.02", Some(group)),
        ];

        assert_eq!(validate_chart(&chart), Ok(()));
    }

    #[test]
    fn test_missing_parent_rejected() {
        let child = CategoryId::new();
        let ghost = CategoryId::new();
        let chart = vec![category(child, "100.01", Some(ghost))];

        assert_eq!(
            validate_chart(&chart),
            Err(ChartError::MissingParent {
                child,
                parent: ghost
            })
        );
    }

    #[test]
    fn test_cycle_rejected() {
        let a = CategoryId::new();
        let b = CategoryId::new();
        let chart = vec![category(a, "100", Some(b)), category(b, "200", Some(a))];

        assert!(matches!(validate_chart(&chart), Err(ChartError::Cycle(_))));
    }

    #[test]
    fn test_self_parent_rejected() {
        let a = CategoryId::new();
        let chart = vec![category(a, "100", Some(a))];

        assert_eq!(validate_chart(&chart), Err(ChartError::Cycle(a)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let a = CategoryId::new();
        let chart = vec![category(a, "100", None), category(a, "200", None)];

        assert_eq!(validate_chart(&chart), Err(ChartError::DuplicateId(a)));
    }

    #[test]
    fn test_empty_chart_is_valid() {
        assert_eq!(validate_chart(&[]), Ok(()));
    }
}

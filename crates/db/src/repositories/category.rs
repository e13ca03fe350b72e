//! Category repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use budgetone_core::account::Category;
use budgetone_shared::types::CategoryId;

use crate::entities::categories;

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category not found.
    #[error("category not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Category repository for read access to the chart of accounts.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the chart of accounts in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Category>, CategoryError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Position)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(category_from_model).collect())
    }

    /// Finds a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NotFound` if no such category exists.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Category, CategoryError> {
        categories::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(category_from_model)
            .ok_or(CategoryError::NotFound(id))
    }
}

/// Maps a database row to the domain type.
fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: CategoryId::from_uuid(model.id),
        code: model.code,
        name: model.name,
        kind: model.kind.map(Into::into),
        parent_id: model.parent_id.map(CategoryId::from_uuid),
        position: model.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::sea_orm_active_enums::CategoryKind;

    #[test]
    fn test_category_from_model() {
        let now = chrono::Utc::now().into();
        let parent = Uuid::new_v4();
        let model = categories::Model {
            id: Uuid::new_v4(),
            code: "100.01".to_string(),
            name: "New Business Subscription Revenue".to_string(),
            kind: Some(CategoryKind::Income),
            parent_id: Some(parent),
            position: 1,
            created_at: now,
            updated_at: now,
        };

        let category = category_from_model(model);
        assert_eq!(category.code, "100.01");
        assert_eq!(
            category.kind,
            Some(budgetone_core::account::CategoryKind::Income)
        );
        assert_eq!(category.parent_id, Some(CategoryId::from_uuid(parent)));
        assert!(!category.is_group());
    }
}

//! Location repository for database operations.

use std::str::FromStr;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use budgetone_core::location::Location;
use budgetone_shared::types::{Currency, LocationId, UserId};

use crate::entities::locations;

/// Error types for location operations.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// A stored currency code failed to parse.
    #[error("location {0} carries an unknown currency code: {1}")]
    UnknownCurrency(Uuid, String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Location repository for read access to reference data.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    db: DatabaseConnection,
}

impl LocationRepository {
    /// Creates a new location repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row carries an unknown
    /// currency code.
    pub async fn list(&self) -> Result<Vec<Location>, LocationError> {
        let models = locations::Entity::find()
            .order_by_asc(locations::Column::Name)
            .all(&self.db)
            .await?;

        models.into_iter().map(location_from_model).collect()
    }

    /// Finds the location managed by the given user, if any.
    ///
    /// At most one location per manager is the intended design; the first
    /// match wins when the data disagrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row carries an unknown
    /// currency code.
    pub async fn find_by_manager(
        &self,
        manager_id: Uuid,
    ) -> Result<Option<Location>, LocationError> {
        let model = locations::Entity::find()
            .filter(locations::Column::ManagerId.eq(manager_id))
            .one(&self.db)
            .await?;

        model.map(location_from_model).transpose()
    }

    /// Finds a location by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row carries an unknown
    /// currency code.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, LocationError> {
        let model = locations::Entity::find_by_id(id).one(&self.db).await?;
        model.map(location_from_model).transpose()
    }
}

/// Maps a database row to the domain type.
fn location_from_model(model: locations::Model) -> Result<Location, LocationError> {
    let currency = Currency::from_str(&model.currency)
        .map_err(|_| LocationError::UnknownCurrency(model.id, model.currency.clone()))?;

    Ok(Location {
        id: LocationId::from_uuid(model.id),
        name: model.name,
        currency,
        manager_id: UserId::from_uuid(model.manager_id),
    })
}

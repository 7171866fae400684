//! Service layer for column creation, layout, and default seeding.

use crate::column::{
    domain::{BoardColumn, ColumnDomainError, ColumnId, ColumnKey, ColumnTitle},
    ports::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Default columns seeded into an empty board.
const DEFAULT_COLUMNS: [(&str, &str, i32); 3] = [
    ("todo", "A Fazer", 1),
    ("doing", "Em Progresso", 2),
    ("done", "Concluído", 3),
];

/// Request payload for creating a board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateColumnRequest {
    key: String,
    title: String,
    display_order: Option<i32>,
}

impl CreateColumnRequest {
    /// Creates a request with required column fields.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            display_order: None,
        }
    }

    /// Sets an explicit display position.
    #[must_use]
    pub const fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = Some(display_order);
        self
    }
}

/// Request payload for updating a board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateColumnRequest {
    title: String,
    display_order: Option<i32>,
}

impl UpdateColumnRequest {
    /// Creates a request with the replacement title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            display_order: None,
        }
    }

    /// Sets a replacement display position.
    #[must_use]
    pub const fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = Some(display_order);
        self
    }
}

/// Service-level errors for column layout operations.
#[derive(Debug, Error)]
pub enum ColumnLayoutError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ColumnDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ColumnRepositoryError),
}

/// Result type for column layout service operations.
pub type ColumnLayoutResult<T> = Result<T, ColumnLayoutError>;

/// Column layout orchestration service.
pub struct ColumnLayoutService<R, C>
where
    R: ColumnRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for ColumnLayoutService<R, C>
where
    R: ColumnRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> ColumnLayoutService<R, C>
where
    R: ColumnRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new column layout service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new board column.
    ///
    /// An unset display position appends the column after the current
    /// maximum.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Domain`] when key or title validation
    /// fails and [`ColumnLayoutError::Repository`] when the key is already
    /// taken or persistence fails.
    pub async fn create_column(
        &self,
        request: CreateColumnRequest,
    ) -> ColumnLayoutResult<BoardColumn> {
        let key = ColumnKey::new(request.key).map_err(ColumnDomainError::from)?;
        let title = ColumnTitle::new(request.title)?;

        // Check-then-act duplicate detection mirrors the unique constraint;
        // the constraint still closes the race window.
        if self.repository.find_by_key(&key).await?.is_some() {
            return Err(ColumnRepositoryError::DuplicateColumnKey(key).into());
        }

        let display_order = match request.display_order {
            Some(order) => order,
            None => self
                .repository
                .max_display_order()
                .await?
                .unwrap_or(0)
                .saturating_add(1),
        };

        let column = BoardColumn::new(key, title, display_order, &*self.clock);
        self.repository.store(&column).await?;
        Ok(column)
    }

    /// Updates a column's title and, when provided, its display position.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] with
    /// [`ColumnRepositoryError::NotFound`] when the column does not exist and
    /// [`ColumnLayoutError::Domain`] when the replacement title is invalid.
    pub async fn update_column(
        &self,
        id: ColumnId,
        request: UpdateColumnRequest,
    ) -> ColumnLayoutResult<BoardColumn> {
        let mut column = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ColumnRepositoryError::NotFound(id))?;

        let title = ColumnTitle::new(request.title)?;
        column.rename(title, &*self.clock);
        if let Some(order) = request.display_order {
            column.reposition(order, &*self.clock);
        }

        self.repository.update(&column).await?;
        Ok(column)
    }

    /// Deletes a column. Tasks placed in the column keep their placement.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] with
    /// [`ColumnRepositoryError::NotFound`] when the column does not exist.
    pub async fn delete_column(&self, id: ColumnId) -> ColumnLayoutResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Assigns display positions from the 1-based order of the given keys.
    ///
    /// Keys that match no stored column are silently skipped; columns absent
    /// from the sequence keep their previous position.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] when a lookup or update
    /// fails.
    pub async fn reorder_columns(&self, ordered_keys: Vec<String>) -> ColumnLayoutResult<()> {
        let mut position: i32 = 0;
        for raw_key in ordered_keys {
            position = position.saturating_add(1);
            let Ok(key) = ColumnKey::new(raw_key) else {
                continue;
            };
            let Some(mut column) = self.repository.find_by_key(&key).await? else {
                continue;
            };
            column.reposition(position, &*self.clock);
            self.repository.update(&column).await?;
        }
        Ok(())
    }

    /// Seeds the three default columns when the store is empty.
    ///
    /// Idempotent: any existing column suppresses seeding entirely.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] when counting or storing
    /// fails.
    pub async fn initialize_default_columns(&self) -> ColumnLayoutResult<()> {
        if self.repository.count().await? > 0 {
            return Ok(());
        }

        for (key, title, display_order) in DEFAULT_COLUMNS {
            let column = BoardColumn::new(
                ColumnKey::from_static(key),
                ColumnTitle::new(title)?,
                display_order,
                &*self.clock,
            );
            self.repository.store(&column).await?;
        }
        Ok(())
    }

    /// Returns all columns ordered by display position ascending.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] when the listing fails.
    pub async fn list_columns(&self) -> ColumnLayoutResult<Vec<BoardColumn>> {
        let result: ColumnRepositoryResult<Vec<BoardColumn>> = self.repository.list_all().await;
        Ok(result?)
    }

    /// Retrieves a column by record identifier.
    ///
    /// Returns `Ok(None)` when the column does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] when the lookup fails.
    pub async fn get_column(&self, id: ColumnId) -> ColumnLayoutResult<Option<BoardColumn>> {
        let result: ColumnRepositoryResult<Option<BoardColumn>> =
            self.repository.find_by_id(id).await;
        Ok(result?)
    }

    /// Retrieves a column by external key.
    ///
    /// Returns `Ok(None)` when no column carries the key.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLayoutError::Repository`] when the lookup fails.
    pub async fn get_column_by_key(
        &self,
        key: &ColumnKey,
    ) -> ColumnLayoutResult<Option<BoardColumn>> {
        let result: ColumnRepositoryResult<Option<BoardColumn>> =
            self.repository.find_by_key(key).await;
        Ok(result?)
    }
}

//! In-memory repository for board column tests.

use crate::column::{
    domain::{BoardColumn, ColumnId, ColumnKey},
    ports::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory column repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryColumnRepository {
    state: Arc<RwLock<InMemoryColumnState>>,
}

#[derive(Debug, Default)]
struct InMemoryColumnState {
    columns: HashMap<ColumnId, BoardColumn>,
    key_index: HashMap<ColumnKey, ColumnId>,
}

impl InMemoryColumnRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ColumnRepository for InMemoryColumnRepository {
    async fn store(&self, column: &BoardColumn) -> ColumnRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.columns.contains_key(&column.id()) {
            return Err(ColumnRepositoryError::DuplicateColumn(column.id()));
        }
        if state.key_index.contains_key(column.key()) {
            return Err(ColumnRepositoryError::DuplicateColumnKey(
                column.key().clone(),
            ));
        }

        state.key_index.insert(column.key().clone(), column.id());
        state.columns.insert(column.id(), column.clone());
        Ok(())
    }

    async fn update(&self, column: &BoardColumn) -> ColumnRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let stored_key = state
            .columns
            .get(&column.id())
            .ok_or(ColumnRepositoryError::NotFound(column.id()))?
            .key()
            .clone();

        if *column.key() != stored_key {
            if let Some(&indexed_id) = state.key_index.get(column.key())
                && indexed_id != column.id()
            {
                return Err(ColumnRepositoryError::DuplicateColumnKey(
                    column.key().clone(),
                ));
            }

            state.key_index.remove(&stored_key);
            state.key_index.insert(column.key().clone(), column.id());
        }

        state.columns.insert(column.id(), column.clone());
        Ok(())
    }

    async fn delete(&self, id: ColumnId) -> ColumnRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .columns
            .remove(&id)
            .ok_or(ColumnRepositoryError::NotFound(id))?;
        state.key_index.remove(removed.key());
        Ok(())
    }

    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<BoardColumn>> {
        let state = self.state.read().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.columns.get(&id).cloned())
    }

    async fn find_by_key(&self, key: &ColumnKey) -> ColumnRepositoryResult<Option<BoardColumn>> {
        let state = self.state.read().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let column = state
            .key_index
            .get(key)
            .and_then(|id| state.columns.get(id))
            .cloned();
        Ok(column)
    }

    async fn list_all(&self) -> ColumnRepositoryResult<Vec<BoardColumn>> {
        let state = self.state.read().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut columns: Vec<BoardColumn> = state.columns.values().cloned().collect();
        columns.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });
        Ok(columns)
    }

    async fn count(&self) -> ColumnRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        u64::try_from(state.columns.len()).map_err(ColumnRepositoryError::persistence)
    }

    async fn max_display_order(&self) -> ColumnRepositoryResult<Option<i32>> {
        let state = self.state.read().map_err(|err| {
            ColumnRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.columns.values().map(BoardColumn::display_order).max())
    }
}

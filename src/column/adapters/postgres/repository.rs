//! `PostgreSQL` repository implementation for board column storage.

use super::{
    models::{ColumnChangeset, ColumnRow, NewColumnRow},
    schema::board_columns,
};
use crate::column::{
    domain::{BoardColumn, ColumnId, ColumnKey, ColumnTitle, PersistedColumnData},
    ports::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by column adapters.
pub type ColumnPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed column repository.
#[derive(Debug, Clone)]
pub struct PostgresColumnRepository {
    pool: ColumnPgPool,
}

impl PostgresColumnRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ColumnPgPool) -> Self {
        Self { pool }
    }

    /// Creates the backing table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnRepositoryError::Persistence`] when the DDL statement
    /// fails.
    pub async fn ensure_schema(&self) -> ColumnRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(concat!(
                "CREATE TABLE IF NOT EXISTS board_columns (",
                "id UUID PRIMARY KEY, ",
                "column_key VARCHAR(255) NOT NULL, ",
                "title VARCHAR(255) NOT NULL, ",
                "display_order INTEGER NOT NULL, ",
                "created_at TIMESTAMPTZ NOT NULL, ",
                "updated_at TIMESTAMPTZ NOT NULL, ",
                "CONSTRAINT idx_board_columns_key_unique UNIQUE (column_key))",
            ))
            .execute(connection)
            .map_err(ColumnRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> ColumnRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ColumnRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ColumnRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ColumnRepositoryError::persistence)?
    }
}

#[async_trait]
impl ColumnRepository for PostgresColumnRepository {
    async fn store(&self, column: &BoardColumn) -> ColumnRepositoryResult<()> {
        let column_id = column.id();
        let key = column.key().clone();
        let new_row = to_new_row(column);

        self.run_blocking(move |connection| {
            diesel::insert_into(board_columns::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_key_unique_violation(info.as_ref()) =>
                    {
                        ColumnRepositoryError::DuplicateColumnKey(key.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ColumnRepositoryError::DuplicateColumn(column_id)
                    }
                    _ => ColumnRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, column: &BoardColumn) -> ColumnRepositoryResult<()> {
        let column_id = column.id();
        let key = column.key().clone();
        let changeset = to_changeset(column);

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                board_columns::table.filter(board_columns::id.eq(column_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(|err| match err {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                    if is_key_unique_violation(info.as_ref()) =>
                {
                    ColumnRepositoryError::DuplicateColumnKey(key.clone())
                }
                _ => ColumnRepositoryError::persistence(err),
            })?;

            if affected == 0 {
                return Err(ColumnRepositoryError::NotFound(column_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ColumnId) -> ColumnRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                board_columns::table.filter(board_columns::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(ColumnRepositoryError::persistence)?;

            if affected == 0 {
                return Err(ColumnRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<BoardColumn>> {
        self.run_blocking(move |connection| {
            let row = board_columns::table
                .filter(board_columns::id.eq(id.into_inner()))
                .select(ColumnRow::as_select())
                .first::<ColumnRow>(connection)
                .optional()
                .map_err(ColumnRepositoryError::persistence)?;
            row.map(row_to_column).transpose()
        })
        .await
    }

    async fn find_by_key(&self, key: &ColumnKey) -> ColumnRepositoryResult<Option<BoardColumn>> {
        let lookup_key = key.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = board_columns::table
                .filter(board_columns::column_key.eq(lookup_key))
                .select(ColumnRow::as_select())
                .first::<ColumnRow>(connection)
                .optional()
                .map_err(ColumnRepositoryError::persistence)?;
            row.map(row_to_column).transpose()
        })
        .await
    }

    async fn list_all(&self) -> ColumnRepositoryResult<Vec<BoardColumn>> {
        self.run_blocking(|connection| {
            let rows = board_columns::table
                .order((
                    board_columns::display_order.asc(),
                    board_columns::created_at.asc(),
                ))
                .select(ColumnRow::as_select())
                .load::<ColumnRow>(connection)
                .map_err(ColumnRepositoryError::persistence)?;
            rows.into_iter().map(row_to_column).collect()
        })
        .await
    }

    async fn count(&self) -> ColumnRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let count = board_columns::table
                .count()
                .get_result::<i64>(connection)
                .map_err(ColumnRepositoryError::persistence)?;
            u64::try_from(count).map_err(ColumnRepositoryError::persistence)
        })
        .await
    }

    async fn max_display_order(&self) -> ColumnRepositoryResult<Option<i32>> {
        self.run_blocking(|connection| {
            board_columns::table
                .select(diesel::dsl::max(board_columns::display_order))
                .get_result::<Option<i32>>(connection)
                .map_err(ColumnRepositoryError::persistence)
        })
        .await
    }
}

fn is_key_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_board_columns_key_unique")
}

fn to_new_row(column: &BoardColumn) -> NewColumnRow {
    NewColumnRow {
        id: column.id().into_inner(),
        column_key: column.key().as_str().to_owned(),
        title: column.title().as_str().to_owned(),
        display_order: column.display_order(),
        created_at: column.created_at(),
        updated_at: column.updated_at(),
    }
}

fn to_changeset(column: &BoardColumn) -> ColumnChangeset {
    ColumnChangeset {
        column_key: column.key().as_str().to_owned(),
        title: column.title().as_str().to_owned(),
        display_order: column.display_order(),
        updated_at: column.updated_at(),
    }
}

fn row_to_column(row: ColumnRow) -> ColumnRepositoryResult<BoardColumn> {
    let ColumnRow {
        id,
        column_key: persisted_key,
        title: persisted_title,
        display_order,
        created_at,
        updated_at,
    } = row;

    let key = ColumnKey::new(persisted_key).map_err(ColumnRepositoryError::persistence)?;
    let title = ColumnTitle::new(persisted_title).map_err(ColumnRepositoryError::persistence)?;

    let data = PersistedColumnData {
        id: ColumnId::from_uuid(id),
        key,
        title,
        display_order,
        created_at,
        updated_at,
    };
    Ok(BoardColumn::from_persisted(data))
}

//! SQLite officer DAO implementation.

use crate::{dao::OfficerDao, UnitOfWork};
use async_trait::async_trait;
use sqlx::FromRow;
use starfleet_core::{Officer, OfficerId, Rank, StarfleetError, StarfleetResult};
use tracing::debug;

const OFFICER: &str = "Officer";

/// SQLite officer DAO bound to one unit of work.
pub struct SqliteOfficerDaoImpl<'uow> {
    uow: &'uow mut UnitOfWork,
}

impl<'uow> SqliteOfficerDaoImpl<'uow> {
    /// Creates a DAO that runs every statement inside `uow`.
    #[must_use]
    pub fn new(uow: &'uow mut UnitOfWork) -> Self {
        Self { uow }
    }
}

/// Database row representation of an officer.
#[derive(Debug, FromRow)]
struct OfficerRow {
    id: i32,
    rank: String,
    first_name: String,
    last_name: String,
}

impl TryFrom<OfficerRow> for Officer {
    type Error = StarfleetError;

    fn try_from(row: OfficerRow) -> Result<Self, Self::Error> {
        let rank = Rank::from_stored_name(&row.rank).ok_or_else(|| {
            StarfleetError::Internal(format!("Invalid rank in database: {}", row.rank))
        })?;

        Ok(Officer {
            id: Some(OfficerId::new(row.id)),
            rank,
            first_name: row.first_name,
            last_name: row.last_name,
        })
    }
}

#[async_trait]
impl OfficerDao for SqliteOfficerDaoImpl<'_> {
    async fn save(&mut self, mut officer: Officer) -> StarfleetResult<Officer> {
        debug!(uow = %self.uow.id(), "Saving officer: {}", officer);

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO officers (id, rank, first_name, last_name)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(officer.id.map(OfficerId::into_inner))
        .bind(officer.rank.as_str())
        .bind(&officer.first_name)
        .bind(&officer.last_name)
        .fetch_one(self.uow.connection())
        .await?;

        let id = OfficerId::new(id);
        self.uow.attach(id);
        officer.id = Some(id);
        Ok(officer)
    }

    async fn find_by_id(&mut self, id: OfficerId) -> StarfleetResult<Option<Officer>> {
        debug!(uow = %self.uow.id(), "Finding officer by id: {}", id);

        let row = sqlx::query_as::<_, OfficerRow>(
            "SELECT id, rank, first_name, last_name FROM officers WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.uow.connection())
        .await?;

        let officer = row.map(Officer::try_from).transpose()?;
        if officer.is_some() {
            self.uow.attach(id);
        }
        Ok(officer)
    }

    async fn find_all(&mut self) -> StarfleetResult<Vec<Officer>> {
        debug!(uow = %self.uow.id(), "Finding all officers");

        let rows = sqlx::query_as::<_, OfficerRow>(
            "SELECT id, rank, first_name, last_name FROM officers",
        )
        .fetch_all(self.uow.connection())
        .await?;

        let officers = rows
            .into_iter()
            .map(Officer::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        for id in officers.iter().filter_map(|o| o.id) {
            self.uow.attach(id);
        }
        Ok(officers)
    }

    async fn count(&mut self) -> StarfleetResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM officers")
            .fetch_one(self.uow.connection())
            .await?;

        u64::try_from(count)
            .map_err(|_| StarfleetError::Internal(format!("Negative row count: {}", count)))
    }

    async fn delete(&mut self, officer: &Officer) -> StarfleetResult<()> {
        let id = officer
            .id
            .ok_or_else(|| StarfleetError::detached(OFFICER, "is transient and has no id"))?;

        if !self.uow.is_attached(id) {
            return Err(StarfleetError::detached(
                OFFICER,
                format!("{} is not attached to unit of work {}", id, self.uow.id()),
            ));
        }

        debug!(uow = %self.uow.id(), "Deleting officer: {}", id);

        let result = sqlx::query("DELETE FROM officers WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.uow.connection())
            .await?;

        self.uow.detach(id);

        if result.rows_affected() == 0 {
            return Err(StarfleetError::not_found(OFFICER, id));
        }
        Ok(())
    }

    async fn exists_by_id(&mut self, id: OfficerId) -> StarfleetResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM officers WHERE id = ? LIMIT 1")
            .bind(id.into_inner())
            .fetch_optional(self.uow.connection())
            .await?;

        Ok(result.is_some())
    }
}

impl std::fmt::Debug for SqliteOfficerDaoImpl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteOfficerDaoImpl")
            .field("uow", &self.uow.id())
            .finish()
    }
}

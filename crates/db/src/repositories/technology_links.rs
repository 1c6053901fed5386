//! Shared helpers for the `*_technologies` junction tables.

use sqlx::PgConnection;
use talentdesk_core::types::DbId;

/// A junction table linking an owner row to technologies.
pub(crate) struct TechnologyLinks {
    pub table: &'static str,
    pub owner_column: &'static str,
}

impl TechnologyLinks {
    /// SQL expression yielding the sorted technology names of the owner
    /// row referenced by `owner_ref` (e.g. `e.id`), as `TEXT[]`.
    pub fn names_expr(&self, owner_ref: &str) -> String {
        format!(
            "ARRAY(SELECT tech.name FROM {table} link \
             JOIN technologies tech ON tech.id = link.technology_id \
             WHERE link.{owner} = {owner_ref} ORDER BY tech.name)",
            table = self.table,
            owner = self.owner_column,
        )
    }

    /// Replace all technology links of `owner_id` with `technology_ids`.
    ///
    /// Runs on the caller's connection so it joins the caller's transaction.
    pub async fn replace(
        &self,
        conn: &mut PgConnection,
        owner_id: DbId,
        technology_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let delete = format!(
            "DELETE FROM {} WHERE {} = $1",
            self.table, self.owner_column
        );
        sqlx::query(&delete)
            .bind(owner_id)
            .execute(&mut *conn)
            .await?;

        if technology_ids.is_empty() {
            return Ok(());
        }

        let insert = format!(
            "INSERT INTO {} ({}, technology_id) \
             SELECT $1, UNNEST($2::BIGINT[]) \
             ON CONFLICT DO NOTHING",
            self.table, self.owner_column
        );
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(technology_ids)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

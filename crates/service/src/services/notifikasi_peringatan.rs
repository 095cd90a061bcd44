//! Per-user alert notifications.
//!
//! Rows are created when an alert tied to an SPPG is raised, one per account
//! bound to that SPPG. A user only ever sees or changes their own rows.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use models::notifikasi_peringatan::{self, AksiNotifikasi, FilterNotifikasi, MarkNotifikasi};
use models::{pengguna, peringatan};

use super::peringatan::priority_rank;
use crate::actor::Actor;
use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifikasiWithPeringatan {
    #[serde(flatten)]
    pub notifikasi: notifikasi_peringatan::Model,
    pub peringatan: Option<peringatan::Model>,
}

/// The caller's notifications that are not dismissed, most urgent alert first,
/// then newest.
#[instrument(skip(db, filter), fields(user = %actor.user_id, unread_only = filter.unread_only))]
pub async fn list_for_user(
    db: &DatabaseConnection,
    actor: &Actor,
    filter: &FilterNotifikasi,
) -> Result<Vec<NotifikasiWithPeringatan>, ServiceError> {
    let mut q = notifikasi_peringatan::Entity::find()
        .filter(notifikasi_peringatan::Column::UserId.eq(actor.user_id))
        .filter(notifikasi_peringatan::Column::Dismiss.eq(false));
    if filter.unread_only {
        q = q.filter(notifikasi_peringatan::Column::Dibaca.eq(false));
    }
    let rows = q
        .find_also_related(peringatan::Entity)
        .order_by(priority_rank(), Order::Asc)
        .order_by_desc(notifikasi_peringatan::Column::CreatedAt)
        .limit(filter.limit.max(1))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(notifikasi, peringatan)| NotifikasiWithPeringatan { notifikasi, peringatan })
        .collect())
}

/// Apply `input.action` to the listed rows the caller owns. Returns how many
/// rows changed; ids of other users' rows are ignored.
#[instrument(skip(db, input), fields(user = %actor.user_id, action = ?input.action, n = input.notifikasi_ids.len()))]
pub async fn mark(
    db: &DatabaseConnection,
    actor: &Actor,
    input: MarkNotifikasi,
    now: DateTime<Utc>,
) -> Result<u64, ServiceError> {
    use notifikasi_peringatan::Column;

    let at = Some(now.fixed_offset());
    let q = notifikasi_peringatan::Entity::update_many();
    let q = match input.action {
        AksiNotifikasi::Read => q.col_expr(Column::Dibaca, Expr::value(true)).col_expr(Column::DibacaAt, Expr::value(at)),
        AksiNotifikasi::Dismiss => q.col_expr(Column::Dismiss, Expr::value(true)).col_expr(Column::DismissAt, Expr::value(at)),
        AksiNotifikasi::Undismiss => q
            .col_expr(Column::Dismiss, Expr::value(false))
            .col_expr(Column::DismissAt, Expr::value(None::<chrono::DateTime<chrono::FixedOffset>>)),
    };
    let res = q
        .filter(Column::Id.is_in(input.notifikasi_ids))
        .filter(Column::UserId.eq(actor.user_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Notify every account bound to the SPPG of each `(alert, sppg)` pair.
pub(crate) async fn notify_sppg_users<C: ConnectionTrait>(
    db: &C,
    alerts: &[(Uuid, Uuid)],
    now: DateTime<Utc>,
) -> Result<u64, ServiceError> {
    let units: HashSet<Uuid> = alerts.iter().map(|(_, sppg)| *sppg).collect();
    if units.is_empty() {
        return Ok(0);
    }
    let accounts: Vec<(Uuid, Option<Uuid>)> = pengguna::Entity::find()
        .select_only()
        .column(pengguna::Column::Id)
        .column(pengguna::Column::SppgId)
        .filter(pengguna::Column::SppgId.is_in(units))
        .into_tuple()
        .all(db)
        .await?;
    let mut by_unit: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for (user, unit) in accounts {
        if let Some(unit) = unit {
            by_unit.entry(unit).or_default().push(user);
        }
    }

    let created = now.fixed_offset();
    let rows: Vec<notifikasi_peringatan::ActiveModel> = alerts
        .iter()
        .flat_map(|(alert, unit)| {
            by_unit
                .get(unit)
                .into_iter()
                .flatten()
                .map(move |user| notifikasi_peringatan::new_for(*alert, *user, created))
        })
        .collect();
    if rows.is_empty() {
        return Ok(0);
    }
    let n = rows.len() as u64;
    notifikasi_peringatan::Entity::insert_many(rows).exec_without_returning(db).await?;
    debug!(notified = n, "alert notifications created");
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::peringatan as peringatan_svc;
    use crate::test_support::{get_db, operator, seed_organisasi, seed_sppg};
    use models::peringatan::CreatePeringatan;
    use serde_json::json;

    async fn account(db: &DatabaseConnection, email: &str, sppg_id: Option<Uuid>) -> anyhow::Result<Actor> {
        let user = pengguna::create(db, email, "Operator", "x".into(), "argon2", sppg_id).await?;
        Ok(Actor { user_id: user.id, sppg_id })
    }

    async fn alert(db: &DatabaseConnection, judul: &str, prioritas: &str, sppg_id: Uuid) -> anyhow::Result<peringatan::Model> {
        let raw = json!({
            "judul": judul,
            "deskripsi": "-",
            "jenisPeringatan": "KEAMANAN_PANGAN",
            "tingkatPrioritas": prioritas,
            "sppgId": sppg_id.to_string(),
        });
        Ok(peringatan_svc::create(db, &operator(), CreatePeringatan::parse(&raw)?).await?)
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-10T09:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[tokio::test]
    async fn raised_alert_reaches_unit_accounts_most_urgent_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let other = seed_sppg(&db, org.id, "SPPG B").await?;
        let ani = account(&db, "ani@sppg.id", Some(unit.id)).await?;
        let budi = account(&db, "budi@sppg.id", Some(other.id)).await?;

        alert(&db, "rendah", "RENDAH", unit.id).await?;
        alert(&db, "kritis", "KRITIS", unit.id).await?;
        alert(&db, "lain", "TINGGI", other.id).await?;

        let mine = list_for_user(&db, &ani, &FilterNotifikasi::default()).await?;
        let titles: Vec<&str> = mine.iter().filter_map(|n| n.peringatan.as_ref()).map(|p| p.judul.as_str()).collect();
        assert_eq!(titles, vec!["kritis", "rendah"]);
        assert!(mine.iter().all(|n| n.notifikasi.user_id == ani.user_id && !n.notifikasi.dibaca));
        assert_eq!(list_for_user(&db, &budi, &FilterNotifikasi::default()).await?.len(), 1);

        let one = FilterNotifikasi { limit: 1, unread_only: false };
        assert_eq!(list_for_user(&db, &ani, &one).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn marks_only_own_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let ani = account(&db, "ani@sppg.id", Some(unit.id)).await?;
        let citra = account(&db, "citra@sppg.id", Some(unit.id)).await?;
        alert(&db, "stok", "SEDANG", unit.id).await?;
        alert(&db, "suhu", "TINGGI", unit.id).await?;

        let mine = list_for_user(&db, &ani, &FilterNotifikasi::default()).await?;
        let theirs = list_for_user(&db, &citra, &FilterNotifikasi::default()).await?;
        let first = mine[0].notifikasi.id;
        let foreign = theirs[0].notifikasi.id;

        let read = MarkNotifikasi { notifikasi_ids: vec![first, foreign], action: AksiNotifikasi::Read };
        assert_eq!(mark(&db, &ani, read, now()).await?, 1);
        let unread = FilterNotifikasi { unread_only: true, ..Default::default() };
        let left = list_for_user(&db, &ani, &unread).await?;
        assert_eq!(left.len(), 1);
        assert_ne!(left[0].notifikasi.id, first);
        assert_eq!(list_for_user(&db, &citra, &unread).await?.len(), 2);

        let dismiss = MarkNotifikasi { notifikasi_ids: vec![first], action: AksiNotifikasi::Dismiss };
        assert_eq!(mark(&db, &ani, dismiss, now()).await?, 1);
        let visible = list_for_user(&db, &ani, &FilterNotifikasi::default()).await?;
        assert_eq!(visible.len(), 1);

        let undismiss = MarkNotifikasi { notifikasi_ids: vec![first], action: AksiNotifikasi::Undismiss };
        mark(&db, &ani, undismiss, now()).await?;
        let restored = list_for_user(&db, &ani, &FilterNotifikasi::default()).await?;
        let row = restored.iter().find(|n| n.notifikasi.id == first).expect("restored");
        assert!(!row.notifikasi.dismiss);
        assert!(row.notifikasi.dismiss_at.is_none());
        assert!(row.notifikasi.dibaca);
        assert!(row.notifikasi.dibaca_at.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn alerts_without_unit_notify_nobody() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ani = account(&db, "ani@sppg.id", None).await?;
        let raw = json!({ "judul": "umum", "deskripsi": "-", "jenisPeringatan": "SISTEM_TEKNIS", "tingkatPrioritas": "INFO" });
        peringatan_svc::create(&db, &operator(), CreatePeringatan::parse(&raw)?).await?;
        assert!(list_for_user(&db, &ani, &FilterNotifikasi::default()).await?.is_empty());
        Ok(())
    }
}

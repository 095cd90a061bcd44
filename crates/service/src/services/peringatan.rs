//! Alert listing, lifecycle and the dashboard summary.
//!
//! Listings are ordered by priority (KRITIS first) and then newest first;
//! the priority order comes from the enum's rank, not its string value.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::{CaseStatement, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, TransactionTrait,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use models::enums::{JenisPeringatan, StatusPeringatan, TingkatPrioritas};
use models::peringatan::{self, CreatePeringatan, FilterPeringatan, ResolvePeringatan, UpdatePeringatan};
use models::{organisasi, sppg};

use super::{delete_existing, find_existing, notifikasi_peringatan};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "peringatan";
const RECENT_LIMIT: u64 = 10;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeringatanWithSppg {
    #[serde(flatten)]
    pub peringatan: peringatan::Model,
    pub sppg: Option<sppg::Model>,
}

impl From<(peringatan::Model, Option<sppg::Model>)> for PeringatanWithSppg {
    fn from((peringatan, sppg): (peringatan::Model, Option<sppg::Model>)) -> Self {
        Self { peringatan, sppg }
    }
}

/// One page of alerts plus the totals the pager needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeringatanPage {
    pub data: Vec<PeringatanWithSppg>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_aktif: i64,
    pub total_kritis: i64,
    pub total_tinggi: i64,
    pub total_sedang: i64,
    pub total_rendah: i64,
    pub total_info: i64,
    pub peringatan_terbaru: Vec<PeringatanWithSppg>,
    pub distribusi_jenis: HashMap<JenisPeringatan, i64>,
}

/// Urgency rank of the alert's priority, for ordering.
pub(crate) fn priority_rank() -> SimpleExpr {
    let case = TingkatPrioritas::ALL.iter().fold(CaseStatement::new(), |case, p| {
        case.case(
            Expr::col((peringatan::Entity, peringatan::Column::TingkatPrioritas)).eq(p.to_value()),
            p.rank(),
        )
    });
    case.finally(TingkatPrioritas::ALL.len() as i32).into()
}

fn by_urgency(q: Select<peringatan::Entity>) -> Select<peringatan::Entity> {
    q.order_by(priority_rank(), Order::Asc)
        .order_by_desc(peringatan::Column::CreatedAt)
}

fn contains(column: SimpleExpr, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column)).like(format!("%{}%", needle.to_lowercase()))
}

fn filtered(filter: &FilterPeringatan) -> Select<peringatan::Entity> {
    let mut q = peringatan::Entity::find();
    if !filter.show_resolved {
        q = q.filter(peringatan::Column::StatusPeringatan.is_in(StatusPeringatan::OPEN));
    }
    if let Some(v) = filter.jenis_peringatan {
        q = q.filter(peringatan::Column::JenisPeringatan.eq(v));
    }
    if let Some(v) = filter.tingkat_prioritas {
        q = q.filter(peringatan::Column::TingkatPrioritas.eq(v));
    }
    if let Some(v) = filter.status_peringatan {
        q = q.filter(peringatan::Column::StatusPeringatan.eq(v));
    }
    if let Some(v) = filter.sppg_id {
        q = q.filter(peringatan::Column::SppgId.eq(v));
    }
    if let Some(v) = filter.organisasi_id {
        q = q.filter(peringatan::Column::OrganisasiId.eq(v));
    }
    if let Some(from) = filter.date_from {
        q = q.filter(peringatan::Column::CreatedAt.gte(from));
    }
    if let Some(to) = filter.date_to {
        q = q.filter(peringatan::Column::CreatedAt.lte(to));
    }
    if let Some(search) = filter.search.as_deref() {
        q = q
            .join(JoinType::LeftJoin, peringatan::Relation::Organisasi.def())
            .filter(
                Condition::any()
                    .add(contains(Expr::col((peringatan::Entity, peringatan::Column::Judul)).into(), search))
                    .add(contains(Expr::col((peringatan::Entity, peringatan::Column::Deskripsi)).into(), search))
                    .add(contains(Expr::col((sppg::Entity, sppg::Column::Nama)).into(), search))
                    .add(contains(Expr::col((organisasi::Entity, organisasi::Column::Nama)).into(), search)),
            );
    }
    q
}

/// Filtered, paginated listing. Pages are 1-based.
#[instrument(skip(db, filter), fields(page = filter.page, limit = filter.limit))]
pub async fn list(db: &DatabaseConnection, filter: &FilterPeringatan) -> Result<PeringatanPage, ServiceError> {
    let limit = filter.limit.max(1);
    let page = filter.page.max(1);
    // search refers to sppg columns; the join comes from find_also_related
    let q = by_urgency(filtered(filter));
    let paginator = q.find_also_related(sppg::Entity).paginate(db, limit);
    let total_count = paginator.num_items().await?;
    let rows = paginator.fetch_page(page - 1).await?;
    Ok(PeringatanPage {
        data: rows.into_iter().map(Into::into).collect(),
        total_count,
        total_pages: total_count.div_ceil(limit),
        current_page: page,
    })
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<PeringatanWithSppg>, ServiceError> {
    let row = peringatan::Entity::find_by_id(id)
        .find_also_related(sppg::Entity)
        .one(db)
        .await?;
    Ok(row.map(Into::into))
}

/// Stores the alert and notifies the accounts of its SPPG, in one transaction.
#[instrument(skip(db, input), fields(user = %actor.user_id, jenis = ?input.jenis_peringatan))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreatePeringatan) -> Result<peringatan::Model, ServiceError> {
    let txn = db.begin().await?;
    let created = input.into_active_model(actor.user_id).insert(&txn).await?;
    if let Some(unit) = created.sppg_id {
        notifikasi_peringatan::notify_sppg_users(&txn, &[(created.id, unit)], Utc::now()).await?;
    }
    txn.commit().await?;
    Ok(created)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, input: UpdatePeringatan) -> Result<peringatan::Model, ServiceError> {
    let current = find_existing::<peringatan::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn resolve(db: &DatabaseConnection, actor: &Actor, id: Uuid, input: ResolvePeringatan) -> Result<peringatan::Model, ServiceError> {
    let current = find_existing::<peringatan::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<peringatan::Entity, _>(db, id, ENTITY).await
}

/// Counts and the most urgent open alerts, optionally for one organization.
pub async fn dashboard_summary(
    db: &DatabaseConnection,
    organisasi_id: Option<Uuid>,
) -> Result<DashboardSummary, ServiceError> {
    let open = || {
        let q = peringatan::Entity::find().filter(peringatan::Column::StatusPeringatan.is_in(StatusPeringatan::OPEN));
        match organisasi_id {
            Some(org) => q.filter(peringatan::Column::OrganisasiId.eq(org)),
            None => q,
        }
    };

    let per_priority: Vec<(TingkatPrioritas, i64)> = open()
        .select_only()
        .column(peringatan::Column::TingkatPrioritas)
        .column_as(peringatan::Column::Id.count(), "jumlah")
        .group_by(peringatan::Column::TingkatPrioritas)
        .into_tuple()
        .all(db)
        .await?;
    let per_jenis: Vec<(JenisPeringatan, i64)> = open()
        .select_only()
        .column(peringatan::Column::JenisPeringatan)
        .column_as(peringatan::Column::Id.count(), "jumlah")
        .group_by(peringatan::Column::JenisPeringatan)
        .into_tuple()
        .all(db)
        .await?;
    let recent = by_urgency(open())
        .find_also_related(sppg::Entity)
        .limit(RECENT_LIMIT)
        .all(db)
        .await?;

    let mut out = DashboardSummary {
        peringatan_terbaru: recent.into_iter().map(Into::into).collect(),
        distribusi_jenis: per_jenis.into_iter().collect(),
        ..Default::default()
    };
    for (prioritas, n) in per_priority {
        out.total_aktif += n;
        match prioritas {
            TingkatPrioritas::Kritis => out.total_kritis = n,
            TingkatPrioritas::Tinggi => out.total_tinggi = n,
            TingkatPrioritas::Sedang => out.total_sedang = n,
            TingkatPrioritas::Rendah => out.total_rendah = n,
            TingkatPrioritas::Info => out.total_info = n,
        }
    }
    Ok(out)
}

//! Action envelope around service calls.
//!
//! Every dashboard entry point runs its service future through [`run`], which
//! never fails: errors are logged with their full cause and turned into a
//! fixed, user-facing message plus an [`ErrorKind`] the caller can branch on.

use std::future::Future;

use common::metrics::ACTIONS_TOTAL;
use models::schema::FieldError;
use serde::Serialize;
use tracing::error;

use crate::errors::{ErrorKind, ServiceError};

const MSG_NOT_FOUND: &str = "Data tidak ditemukan";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Verify,
    Evaluate,
    Review,
    Submit,
    Complete,
    Resolve,
    Generate,
    Summary,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Verify => "verify",
            Self::Evaluate => "evaluate",
            Self::Review => "review",
            Self::Submit => "submit",
            Self::Complete => "complete",
            Self::Resolve => "resolve",
            Self::Generate => "generate",
            Self::Summary => "summary",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::List | Self::Get | Self::Summary => "Data berhasil diambil",
            Self::Create => "Data berhasil ditambahkan",
            Self::Update => "Data berhasil diperbarui",
            Self::Delete => "Data berhasil dihapus",
            Self::Verify => "Verifikasi berhasil disimpan",
            Self::Evaluate => "Evaluasi gizi berhasil disimpan",
            Self::Review => "Review berhasil disimpan",
            Self::Submit => "Data berhasil dikirim",
            Self::Complete => "Kegiatan berhasil diselesaikan",
            Self::Resolve => "Peringatan berhasil diselesaikan",
            Self::Generate => "Peringatan otomatis berhasil dibuat",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List | Self::Get => "Gagal mengambil data",
            Self::Create => "Gagal menambah data",
            Self::Update => "Gagal memperbarui data",
            Self::Delete => "Gagal menghapus data",
            Self::Verify => "Gagal menyimpan verifikasi",
            Self::Evaluate => "Gagal menyimpan evaluasi gizi",
            Self::Review => "Gagal menyimpan review",
            Self::Submit => "Gagal mengirim data",
            Self::Complete => "Gagal menyelesaikan kegiatan",
            Self::Resolve => "Gagal menyelesaikan peringatan",
            Self::Generate => "Gagal membuat peringatan otomatis",
            Self::Summary => "Gagal mengambil ringkasan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl<T> ActionResponse<T> {
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.to_string()),
            kind: None,
            fields: Vec::new(),
        }
    }

    pub fn failed(op: Operation, err: ServiceError) -> Self {
        let kind = err.kind();
        let message = match kind {
            ErrorKind::NotFound => MSG_NOT_FOUND,
            _ => op.failure_message(),
        };
        let fields = match err {
            ServiceError::Validation(v) => v.into_fields(),
            _ => Vec::new(),
        };
        Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
            message: None,
            kind: Some(kind),
            fields,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Re-wrap the payload, keeping the outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResponse<U> {
        ActionResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            message: self.message,
            kind: self.kind,
            fields: self.fields,
        }
    }
}

/// Drive `fut` to completion and wrap its outcome. `scope` names the entity
/// (`"sppg"`, `"menu_harian"`, ...) for logs and metrics.
pub async fn run<T, F>(scope: &'static str, op: Operation, fut: F) -> ActionResponse<T>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    let label = format!("{scope}.{}", op.name());
    match fut.await {
        Ok(data) => {
            ACTIONS_TOTAL.with_label_values(&[&label, "success"]).inc();
            ActionResponse::ok(data, op.success_message())
        }
        Err(err) => {
            ACTIONS_TOTAL.with_label_values(&[&label, "failure"]).inc();
            error!(operation = %label, kind = ?err.kind(), error = %err, "action failed");
            ActionResponse::failed(op, err)
        }
    }
}

/// Like [`run`], with an absent row reported as `NOT_FOUND`.
pub async fn run_found<T, F>(scope: &'static str, op: Operation, fut: F) -> ActionResponse<T>
where
    F: Future<Output = Result<Option<T>, ServiceError>>,
{
    run(scope, op, async move { fut.await?.ok_or_else(|| ServiceError::not_found(scope)) }).await
}

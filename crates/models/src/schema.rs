//! Declarative field checks over untyped JSON input.
//!
//! Every `Create*`/`Update*` shape is parsed through [`Fields`], which keeps
//! reading after a violation so callers get the full list of bad fields in
//! one round trip. Keys that are absent or `null` count as not provided.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use sea_orm::ActiveEnum;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

const MSG_REQUIRED: &str = "Wajib diisi";
const MSG_NOT_OBJECT: &str = "Data harus berupa objek";
const MSG_NOT_TEXT: &str = "Harus berupa teks";
const MSG_NOT_NUMBER: &str = "Harus berupa angka";
const MSG_NOT_INTEGER: &str = "Harus berupa bilangan bulat";
const MSG_NOT_BOOL: &str = "Harus berupa nilai benar/salah";
const MSG_NOT_DATE: &str = "Tanggal tidak valid (format YYYY-MM-DD)";
const MSG_NOT_DATETIME: &str = "Waktu tidak valid (format ISO 8601)";
const MSG_NOT_UUID: &str = "ID tidak valid";
const MSG_NOT_LIST: &str = "Harus berupa daftar";
const MSG_LIST_ITEM: &str = "Setiap item harus berupa teks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All violations found while parsing one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError { field: field.into(), message: message.into() }])
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn into_fields(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed")?;
        for (i, e) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{} ({})", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Reader over one JSON object that records every failed rule.
pub struct Fields<'a> {
    obj: Option<&'a Map<String, Value>>,
    prefix: String,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self::scoped(raw, String::new())
    }

    fn scoped(raw: &'a Value, prefix: String) -> Self {
        let mut fields = Self { obj: raw.as_object(), prefix, errors: Vec::new() };
        if fields.obj.is_none() {
            let field = if fields.prefix.is_empty() { "_root".to_string() } else { fields.prefix.clone() };
            fields.errors.push(FieldError { field, message: MSG_NOT_OBJECT.into() });
        }
        fields
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        }
    }

    /// Record a violation for `key` relative to this object.
    pub fn fail(&mut self, key: &str, message: impl Into<String>) {
        let field = self.path(key);
        self.errors.push(FieldError { field, message: message.into() });
    }

    fn raw(&self, key: &str) -> Option<&'a Value> {
        self.obj?.get(key).filter(|v| !v.is_null())
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    pub fn text(&mut self, key: &'static str) -> TextField<'_, 'a> {
        TextField { fields: self, key, non_blank: None }
    }

    pub fn number(&mut self, key: &'static str) -> NumberField<'_, 'a> {
        NumberField { fields: self, key, min: None, max: None }
    }

    pub fn boolean(&mut self, key: &'static str) -> BoolField<'_, 'a> {
        BoolField { fields: self, key }
    }

    pub fn date(&mut self, key: &'static str) -> DateField<'_, 'a> {
        DateField { fields: self, key }
    }

    pub fn datetime(&mut self, key: &'static str) -> DateTimeField<'_, 'a> {
        DateTimeField { fields: self, key }
    }

    pub fn uuid(&mut self, key: &'static str) -> UuidField<'_, 'a> {
        UuidField { fields: self, key }
    }

    pub fn list(&mut self, key: &'static str) -> ListField<'_, 'a> {
        ListField { fields: self, key, min: None }
    }

    pub fn choice<E>(&mut self, key: &'static str) -> ChoiceField<'_, 'a, E>
    where
        E: ActiveEnum<Value = String> + PartialEq,
    {
        ChoiceField { fields: self, key, only: None }
    }

    /// Parse an array of nested objects; violations are reported as `key.<index>.<field>`.
    pub fn objects<T>(
        &mut self,
        key: &'static str,
        min: usize,
        min_message: &'static str,
        mut parse: impl FnMut(&mut Fields<'a>) -> T,
    ) -> Vec<T> {
        let items = match self.raw(key) {
            None => {
                if min > 0 {
                    self.fail(key, min_message);
                }
                return Vec::new();
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.fail(key, MSG_NOT_LIST);
                return Vec::new();
            }
        };
        if items.len() < min {
            self.fail(key, min_message);
        }
        let base = self.path(key);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let mut nested = Fields::scoped(item, format!("{base}.{i}"));
            out.push(parse(&mut nested));
            self.errors.append(&mut nested.errors);
        }
        out
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

pub struct TextField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
    non_blank: Option<&'static str>,
}

impl TextField<'_, '_> {
    /// Reject empty or whitespace-only values with `message`.
    pub fn non_blank(mut self, message: &'static str) -> Self {
        self.non_blank = Some(message);
        self
    }

    /// Present and non-blank.
    pub fn required(self, message: &'static str) -> String {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, message);
            return String::new();
        }
        self.non_blank(message).optional().unwrap_or_default()
    }

    pub fn optional(self) -> Option<String> {
        let raw = self.fields.raw(self.key)?;
        let Some(s) = raw.as_str() else {
            self.fields.fail(self.key, MSG_NOT_TEXT);
            return None;
        };
        if let Some(message) = self.non_blank {
            if s.trim().is_empty() {
                self.fields.fail(self.key, message);
                return None;
            }
        }
        Some(s.to_string())
    }
}

pub struct NumberField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
    min: Option<(f64, &'static str)>,
    max: Option<(f64, &'static str)>,
}

impl NumberField<'_, '_> {
    pub fn min(mut self, min: f64, message: &'static str) -> Self {
        self.min = Some((min, message));
        self
    }

    pub fn max(mut self, max: f64, message: &'static str) -> Self {
        self.max = Some((max, message));
        self
    }

    fn read(&mut self) -> Option<f64> {
        let raw = self.fields.raw(self.key)?;
        let n = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        };
        let Some(n) = n else {
            self.fields.fail(self.key, MSG_NOT_NUMBER);
            return None;
        };
        if let Some((min, message)) = self.min {
            if n < min {
                self.fields.fail(self.key, message);
                return None;
            }
        }
        if let Some((max, message)) = self.max {
            if n > max {
                self.fields.fail(self.key, message);
                return None;
            }
        }
        Some(n)
    }

    pub fn optional(mut self) -> Option<f64> {
        self.read()
    }

    pub fn required(mut self) -> f64 {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, MSG_REQUIRED);
            return 0.0;
        }
        self.read().unwrap_or_default()
    }

    pub fn optional_int(mut self) -> Option<i32> {
        let n = self.read()?;
        if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
            self.fields.fail(self.key, MSG_NOT_INTEGER);
            return None;
        }
        Some(n as i32)
    }

    pub fn required_int(self) -> i32 {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, MSG_REQUIRED);
            return 0;
        }
        self.optional_int().unwrap_or_default()
    }
}

pub struct BoolField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
}

impl BoolField<'_, '_> {
    pub fn optional(self) -> Option<bool> {
        let raw = self.fields.raw(self.key)?;
        match raw.as_bool() {
            Some(b) => Some(b),
            None => {
                self.fields.fail(self.key, MSG_NOT_BOOL);
                None
            }
        }
    }

    /// Missing and mistyped values both report `message`.
    pub fn required(self, message: &'static str) -> bool {
        match self.fields.raw(self.key).map(Value::as_bool) {
            Some(Some(b)) => b,
            _ => {
                self.fields.fail(self.key, message);
                false
            }
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn parse_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive).into());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).into())
}

pub struct DateField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
}

impl DateField<'_, '_> {
    pub fn optional(self) -> Option<NaiveDate> {
        let raw = self.fields.raw(self.key)?;
        match raw.as_str().and_then(parse_date) {
            Some(d) => Some(d),
            None => {
                self.fields.fail(self.key, MSG_NOT_DATE);
                None
            }
        }
    }

    pub fn required(self, message: &'static str) -> NaiveDate {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, message);
            return NaiveDate::MIN;
        }
        self.optional().unwrap_or(NaiveDate::MIN)
    }
}

pub struct DateTimeField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
}

impl DateTimeField<'_, '_> {
    pub fn optional(self) -> Option<DateTime<FixedOffset>> {
        let raw = self.fields.raw(self.key)?;
        match raw.as_str().and_then(parse_datetime) {
            Some(dt) => Some(dt),
            None => {
                self.fields.fail(self.key, MSG_NOT_DATETIME);
                None
            }
        }
    }

    pub fn required(self, message: &'static str) -> DateTime<FixedOffset> {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, message);
            return DateTime::<Utc>::MIN_UTC.into();
        }
        self.optional().unwrap_or_else(|| DateTime::<Utc>::MIN_UTC.into())
    }
}

pub struct UuidField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
}

impl UuidField<'_, '_> {
    pub fn optional(self) -> Option<Uuid> {
        let raw = self.fields.raw(self.key)?;
        match raw.as_str().and_then(|s| Uuid::parse_str(s.trim()).ok()) {
            Some(id) => Some(id),
            None => {
                self.fields.fail(self.key, MSG_NOT_UUID);
                None
            }
        }
    }

    pub fn required(self, message: &'static str) -> Uuid {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, message);
            return Uuid::nil();
        }
        self.optional().unwrap_or_else(Uuid::nil)
    }
}

pub struct ListField<'f, 'a> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
    min: Option<(usize, &'static str)>,
}

impl ListField<'_, '_> {
    pub fn min_items(mut self, min: usize, message: &'static str) -> Self {
        self.min = Some((min, message));
        self
    }

    fn read(&mut self, raw: &Value) -> Option<Vec<String>> {
        let Some(items) = raw.as_array() else {
            self.fields.fail(self.key, MSG_NOT_LIST);
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(s) => out.push(s.to_string()),
                None => {
                    self.fields.fail(self.key, MSG_LIST_ITEM);
                    return None;
                }
            }
        }
        if let Some((min, message)) = self.min {
            if out.len() < min {
                self.fields.fail(self.key, message);
                return None;
            }
        }
        Some(out)
    }

    pub fn optional(mut self) -> Option<Vec<String>> {
        let raw = self.fields.raw(self.key)?;
        self.read(raw)
    }

    /// Absent counts as an empty list, which still has to satisfy `min_items`.
    pub fn or_empty(mut self) -> Vec<String> {
        let empty = Value::Array(Vec::new());
        let raw = self.fields.raw(self.key).unwrap_or(&empty);
        self.read(raw).unwrap_or_default()
    }
}

pub struct ChoiceField<'f, 'a, E> {
    fields: &'f mut Fields<'a>,
    key: &'static str,
    only: Option<Vec<E>>,
}

impl<E> ChoiceField<'_, '_, E>
where
    E: ActiveEnum<Value = String> + PartialEq,
{
    /// Narrow the accepted values to a subset of the enumeration.
    pub fn only(mut self, allowed: &[E]) -> Self
    where
        E: Clone,
    {
        self.only = Some(allowed.to_vec());
        self
    }

    fn allowed_labels(&self) -> String {
        match &self.only {
            Some(only) => only.iter().map(|e| e.to_value()).collect::<Vec<_>>().join(", "),
            None => E::values().join(", "),
        }
    }

    pub fn optional(self) -> Option<E> {
        let raw = self.fields.raw(self.key)?;
        let parsed = raw
            .as_str()
            .and_then(|s| E::try_from_value(&s.trim().to_string()).ok())
            .filter(|e| self.only.as_ref().map_or(true, |only| only.contains(e)));
        if parsed.is_none() {
            let message = format!("Nilai harus salah satu dari: {}", self.allowed_labels());
            self.fields.fail(self.key, message);
        }
        parsed
    }

    pub fn required(self) -> E
    where
        E: Default,
    {
        if !self.fields.is_present(self.key) {
            self.fields.fail(self.key, MSG_REQUIRED);
            return E::default();
        }
        self.optional().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::StatusVerifikasi;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_coerced() {
        let raw = json!({ "n": "500", "m": 2.5 });
        let mut f = Fields::new(&raw);
        let n = f.number("n").min(1.0, "min").required_int();
        let m = f.number("m").optional();
        assert_eq!(f.finish((n, m)).unwrap(), (500, Some(2.5)));
    }

    #[test]
    fn keeps_reading_after_first_violation() {
        let raw = json!({ "nama": "  ", "jumlah": 0, "status": "BOGUS" });
        let mut f = Fields::new(&raw);
        let _ = f.text("nama").required("Nama harus diisi");
        let _ = f.number("jumlah").min(0.1, "Jumlah harus lebih dari 0").required();
        let _ = f.choice::<StatusVerifikasi>("status").required();
        let _ = f.date("tanggal").required("Tanggal harus diisi");
        let errs = f.finish(()).unwrap_err();
        assert_eq!(errs.len(), 4);
        assert_eq!(errs.message_for("nama"), Some("Nama harus diisi"));
        assert_eq!(errs.message_for("jumlah"), Some("Jumlah harus lebih dari 0"));
        assert!(errs.message_for("status").unwrap().contains("UNDER_REVIEW"));
        assert!(errs.has("tanggal"));
    }

    #[test]
    fn null_is_treated_as_absent() {
        let raw = json!({ "kontak": null, "latitude": null });
        let mut f = Fields::new(&raw);
        let kontak = f.text("kontak").optional();
        let lat = f.number("latitude").min(-90.0, "lat").optional();
        assert_eq!(f.finish((kontak, lat)).unwrap(), (None, None));
    }

    #[test]
    fn subset_choice_lists_only_allowed_values() {
        let raw = json!({ "statusVerifikasi": "DRAFT" });
        let mut f = Fields::new(&raw);
        let _ = f
            .choice::<StatusVerifikasi>("statusVerifikasi")
            .only(&StatusVerifikasi::VERDICTS)
            .required();
        let errs = f.finish(()).unwrap_err();
        assert_eq!(
            errs.message_for("statusVerifikasi"),
            Some("Nilai harus salah satu dari: APPROVED, REJECTED, SUSPENDED")
        );
    }

    #[test]
    fn dates_accept_plain_and_rfc3339() {
        let raw = json!({ "a": "2024-05-01", "b": "2024-05-01T10:30:00+07:00", "c": "01/05/2024" });
        let mut f = Fields::new(&raw);
        let a = f.date("a").optional();
        let b = f.date("b").optional();
        let c = f.date("c").optional();
        let errs = f.finish(()).unwrap_err();
        assert_eq!(a, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(b, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(c.is_none());
        assert!(errs.has("c"));
    }

    #[test]
    fn nested_errors_carry_index_path() {
        let raw = json!({ "items": [ { "nama": "ok" }, { "nama": "" } ] });
        let mut f = Fields::new(&raw);
        let items = f.objects("items", 1, "Minimal 1 item", |n| n.text("nama").required("Nama harus diisi"));
        assert_eq!(items.len(), 2);
        let errs = f.finish(()).unwrap_err();
        assert_eq!(errs.message_for("items.1.nama"), Some("Nama harus diisi"));
    }

    #[test]
    fn empty_list_below_minimum_is_rejected() {
        let raw = json!({ "foto": [] });
        let mut f = Fields::new(&raw);
        let _ = f.list("foto").min_items(1, "Minimal 1 foto").or_empty();
        assert_eq!(f.finish(()).unwrap_err().message_for("foto"), Some("Minimal 1 foto"));
    }

    #[test]
    fn non_object_input_is_rejected() {
        let raw = json!([1, 2]);
        let f = Fields::new(&raw);
        assert!(f.finish(()).unwrap_err().has("_root"));
    }
}

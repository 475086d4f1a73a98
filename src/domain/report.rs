use super::payment::PaymentRecord;
use crate::error::ReportError;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The UTC offset whose calendar decides which day a payment belongs to.
///
/// Grouping never consults the host's local time zone; the offset is always explicit and
/// defaults to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTimeZone(FixedOffset);

impl ReportTimeZone {
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    pub fn offset(&self) -> FixedOffset {
        self.0
    }

    /// Calendar date of `ts` as seen from this offset.
    pub fn local_date(&self, ts: DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.0).date_naive()
    }

    pub fn localize(&self, ts: DateTime<Utc>) -> DateTime<FixedOffset> {
        ts.with_timezone(&self.0)
    }
}

impl Default for ReportTimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for ReportTimeZone {
    type Err = ReportError;

    /// Parses `Z`, `UTC`, `+HH:MM`, `-HH:MM` or `+HHMM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }

        let invalid = || ReportError::Config(format!("invalid UTC offset '{raw}'"));
        let (sign, rest) = match raw.as_bytes().first() {
            Some(b'+') => (1, &raw[1..]),
            Some(b'-') => (-1, &raw[1..]),
            _ => return Err(invalid()),
        };
        if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(invalid());
        }
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 => rest.split_at(2),
            None => (rest, "0"),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for ReportTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One payment inside a daily rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    pub payment_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub formatted_method: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// Payments of a single calendar day with their exact decimal total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPaymentReport {
    pub date: NaiveDate,
    pub total_amount: Decimal,
    pub transaction_count: usize,
    pub payments: Vec<PaymentDetail>,
}

impl DailyPaymentReport {
    fn from_group(date: NaiveDate, group: Vec<&PaymentRecord>, zone: ReportTimeZone) -> Self {
        let total_amount = group.iter().map(|record| record.amount.value()).sum();
        let mut payments: Vec<PaymentDetail> = group
            .into_iter()
            .map(|record| PaymentDetail {
                payment_id: record.id,
                user_id: record.user_id,
                amount: record.amount.value(),
                formatted_method: record.formatted_method(),
                timestamp: zone.localize(record.created_at),
            })
            .collect();
        // Stable, so same-instant payments keep upstream order.
        payments.sort_by_key(|detail| detail.timestamp);

        Self {
            date,
            total_amount,
            transaction_count: payments.len(),
            payments,
        }
    }
}

/// Groups payments by calendar day in `zone` and rolls each day up.
///
/// Days come out most recent first; payments inside a day are in ascending time order.
/// Records are summed as received, duplicates included.
pub fn daily_payment_reports(
    records: &[PaymentRecord],
    zone: ReportTimeZone,
) -> Vec<DailyPaymentReport> {
    let mut days: BTreeMap<NaiveDate, Vec<&PaymentRecord>> = BTreeMap::new();
    for record in records {
        days.entry(zone.local_date(record.created_at))
            .or_default()
            .push(record);
    }

    days.into_iter()
        .rev()
        .map(|(date, group)| DailyPaymentReport::from_group(date, group, zone))
        .collect()
}

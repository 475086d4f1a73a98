use super::event::EventId;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// A monetary amount as the payment service reports it.
///
/// The upstream nests the value in a money object (`{"montoPago": 12.50}`); a bare number
/// or decimal string is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Flat(Decimal),
            Nested {
                #[serde(rename = "montopago", alias = "amount", alias = "value")]
                amount: Decimal,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Flat(amount) | Wire::Nested { amount } => Self(amount),
        })
    }
}

/// One payment as returned by the payment history endpoint.
///
/// Field names are matched against lower-cased keys; the HTTP decoder folds key case before
/// this type sees the document. Both the English names and the payment service's own names
/// are accepted. Missing fields fall back to their defaults, as do `null` amounts,
/// timestamps, card digits and method types. A `null` id is rejected.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PaymentRecord {
    pub id: Uuid,
    #[serde(rename = "eventid", alias = "idevento")]
    pub event_id: EventId,
    #[serde(rename = "userid", alias = "idusuario")]
    pub user_id: Uuid,
    #[serde(
        rename = "amount",
        alias = "montopago",
        deserialize_with = "null_as_default"
    )]
    pub amount: Money,
    #[serde(rename = "createdat", deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        rename = "cardlastdigits",
        alias = "ultimosdigitostarjeta",
        deserialize_with = "null_as_default"
    )]
    pub card_last_digits: String,
    #[serde(
        rename = "paymentmethodtype",
        alias = "tipomediodepago",
        deserialize_with = "null_as_default"
    )]
    pub payment_method_type: String,
}

impl PaymentRecord {
    /// Renders the payment method as `"{type} (**{last4})"`.
    pub fn formatted_method(&self) -> String {
        format!(
            "{} (**{})",
            self.payment_method_type,
            last_four(&self.card_last_digits)
        )
    }
}

fn last_four(digits: &str) -> &str {
    let count = digits.chars().count();
    if count <= 4 {
        return digits;
    }
    let skip = digits
        .char_indices()
        .nth(count - 4)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &digits[skip..]
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 timestamps and offset-less ones; the latter are taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(DateTime::<Utc>::default());
    };
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_from_lowercased_english_keys() {
        let json = r#"{
            "id": "e4d3f2a1-1111-2222-3333-444455556666",
            "eventid": "a1b2c3d4-0000-0000-0000-000000000001",
            "userid": "a1b2c3d4-0000-0000-0000-000000000002",
            "amount": { "montopago": 100.25 },
            "createdat": "2025-01-01T10:00:00Z",
            "cardlastdigits": "1234",
            "paymentmethodtype": "CreditCard"
        }"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.amount, Money::new(dec!(100.25)));
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(record.formatted_method(), "CreditCard (**1234)");
    }

    #[test]
    fn test_record_from_payment_service_keys() {
        let json = r#"{
            "idevento": "a1b2c3d4-0000-0000-0000-000000000001",
            "id": "e4d3f2a1-1111-2222-3333-444455556666",
            "montopago": { "montopago": 50 },
            "createdat": "2025-01-01T11:00:00",
            "ultimosdigitostarjeta": "5678",
            "idusuario": "a1b2c3d4-0000-0000-0000-000000000002",
            "tipomediodepago": "DebitCard"
        }"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.amount.value(), dec!(50));
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap()
        );
        assert_eq!(record.payment_method_type, "DebitCard");
        assert_eq!(record.card_last_digits, "5678");
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let json = r#"{"id": "e4d3f2a1-1111-2222-3333-444455556666", "paymentmethodtype": "Debit", "cardlastdigits": null}"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.payment_method_type, "Debit");
        assert_eq!(record.amount, Money::ZERO);
        assert_eq!(record.card_last_digits, "");
        assert!(record.event_id.is_nil());
    }

    #[test]
    fn test_null_id_is_rejected() {
        let json = r#"{"id": "e4d3f2a1-1111-2222-3333-444455556666", "userid": null}"#;
        assert!(serde_json::from_str::<PaymentRecord>(json).is_err());
    }

    #[test]
    fn test_flat_amount_and_offset_timestamp() {
        let json = r#"{"amount": "19.99", "createdat": "2025-01-01T23:30:00-03:00"}"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.amount.value(), dec!(19.99));
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2025, 1, 2, 2, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let json = r#"{"createdat": "yesterday"}"#;
        assert!(serde_json::from_str::<PaymentRecord>(json).is_err());
    }

    #[test]
    fn test_formatted_method_masks_to_last_four() {
        let record = PaymentRecord {
            payment_method_type: "Paypal".to_string(),
            card_last_digits: "4111111111119999".to_string(),
            ..Default::default()
        };
        assert_eq!(record.formatted_method(), "Paypal (**9999)");

        let short = PaymentRecord {
            payment_method_type: "Cash".to_string(),
            card_last_digits: "12".to_string(),
            ..Default::default()
        };
        assert_eq!(short.formatted_method(), "Cash (**12)");
    }
}

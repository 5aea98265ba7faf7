use crate::error::{ReceiptError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so the scoring rules that compare against
/// whole dollars and quarters are exact. On the wire it is always a JSON
/// string such as `"35.35"`; bare JSON numbers are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ReceiptError::InvalidReceipt(format!(
                "amount must not be negative: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Money {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s)
            .map_err(|e| ReceiptError::InvalidReceipt(format!("invalid amount {s:?}: {e}")))?;
        Self::new(value)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One line on a receipt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Money,
}

/// A purchase record as submitted by a client.
///
/// `purchase_date` and `purchase_time` are kept as the submitted text and
/// default to empty when omitted. A missing or malformed date or time is not
/// a decoding error; the rules that read them simply award nothing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: Money,
}

impl Receipt {
    /// Decodes a receipt from a raw JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let receipt: Receipt = serde_json::from_slice(body)?;
        receipt.validate()?;
        Ok(receipt)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.retailer.is_empty() {
            return Err(ReceiptError::InvalidReceipt(
                "retailer must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_validation() {
        assert!(Money::new(dec!(1.25)).is_ok());
        assert!(Money::new(dec!(0.00)).is_ok());
        assert!(matches!(
            Money::new(dec!(-0.01)),
            Err(ReceiptError::InvalidReceipt(_))
        ));
    }

    #[test]
    fn test_money_parses_numeric_strings() {
        assert_eq!("35.35".parse::<Money>().unwrap().value(), dec!(35.35));
        assert_eq!("9".parse::<Money>().unwrap().value(), dec!(9));
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("-1.00".parse::<Money>().is_err());
    }

    #[test]
    fn test_receipt_deserialization() {
        let body = br#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt = Receipt::from_json(body).expect("Failed to decode receipt");
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price.value(), dec!(6.49));
        assert_eq!(receipt.total.value(), dec!(6.49));
    }

    #[test]
    fn test_receipt_accepts_empty_items() {
        let body = br#"{"retailer":"A","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[],"total":"0"}"#;
        let receipt = Receipt::from_json(body).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_receipt_rejects_numeric_total() {
        let body = br#"{"retailer":"A","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[],"total":1.5}"#;
        assert!(matches!(
            Receipt::from_json(body),
            Err(ReceiptError::Json(_))
        ));
    }

    #[test]
    fn test_receipt_rejects_missing_total() {
        let body = br#"{"retailer":"A","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[]}"#;
        assert!(Receipt::from_json(body).is_err());
    }

    #[test]
    fn test_omitted_date_and_time_decode_as_empty() {
        let body = br#"{"retailer":"A","items":[],"total":"1.01"}"#;
        let receipt = Receipt::from_json(body).unwrap();
        assert_eq!(receipt.purchase_date, "");
        assert_eq!(receipt.purchase_time, "");
        // Only the retailer rule awards anything.
        assert_eq!(crate::domain::points::calculate_points(&receipt), 1);
    }

    #[test]
    fn test_receipt_rejects_negative_price() {
        let body = br#"{"retailer":"A","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[{"shortDescription":"x","price":"-2.00"}],"total":"1.00"}"#;
        assert!(Receipt::from_json(body).is_err());
    }

    #[test]
    fn test_receipt_rejects_empty_retailer() {
        let body = br#"{"retailer":"","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[],"total":"1.00"}"#;
        assert!(matches!(
            Receipt::from_json(body),
            Err(ReceiptError::InvalidReceipt(_))
        ));
    }

    #[test]
    fn test_malformed_date_still_decodes() {
        let body = br#"{"retailer":"A","purchaseDate":"yesterday","purchaseTime":"noon","items":[],"total":"1.00"}"#;
        let receipt = Receipt::from_json(body).unwrap();
        assert_eq!(receipt.purchase_date, "yesterday");
    }
}

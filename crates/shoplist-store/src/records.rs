use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A persisted shopping-list entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Store-assigned identifier, never reused.
    pub id: i64,
    pub quantity: i64,
    pub description: String,
    /// Unique across all items when present.
    pub barcode: Option<String>,
    /// Last price paid, if anyone recorded it.
    pub last_price: Option<f64>,
    pub to_purchase: bool,
}

/// An item that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub quantity: i64,
    pub description: String,
    pub barcode: Option<String>,
    pub last_price: Option<f64>,
    pub to_purchase: bool,
}

impl NewItem {
    /// New entries start flagged for purchase with no price.
    pub fn new(description: impl Into<String>, quantity: i64) -> Self {
        Self {
            quantity,
            description: description.into(),
            barcode: None,
            last_price: None,
            to_purchase: true,
        }
    }

    /// Empty barcodes are treated as no barcode.
    pub fn with_barcode(mut self, barcode: Option<String>) -> Self {
        self.barcode = barcode.filter(|code| !code.is_empty());
        self
    }
}

/// Updatable item attributes.
///
/// `id` is deliberately absent: it is assigned once and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Quantity,
    Description,
    Barcode,
    LastPrice,
    ToPurchase,
}

impl ItemField {
    pub const ALL: [ItemField; 5] = [
        ItemField::Quantity,
        ItemField::Description,
        ItemField::Barcode,
        ItemField::LastPrice,
        ItemField::ToPurchase,
    ];

    /// Column name in the `items` table.
    pub fn column(self) -> &'static str {
        match self {
            ItemField::Quantity => "quantity",
            ItemField::Description => "description",
            ItemField::Barcode => "barcode",
            ItemField::LastPrice => "last_price",
            ItemField::ToPurchase => "to_purchase",
        }
    }

    /// Parse a textual value for this field into an update.
    ///
    /// An empty value clears the optional fields (`barcode`, `last_price`).
    pub fn parse_value(self, raw: &str) -> Result<FieldUpdate> {
        let value = raw.trim();
        let invalid = |expected: &str| {
            Error::InvalidField(format!(
                "{}: expected {}, got '{}'",
                self.column(),
                expected,
                raw
            ))
        };

        let update = match self {
            ItemField::Quantity => {
                FieldUpdate::Quantity(value.parse().map_err(|_| invalid("an integer"))?)
            }
            ItemField::Description if value.is_empty() => {
                return Err(invalid("a non-empty description"));
            }
            ItemField::Description => FieldUpdate::Description(raw.to_string()),
            ItemField::Barcode if value.is_empty() => FieldUpdate::Barcode(None),
            ItemField::Barcode => FieldUpdate::Barcode(Some(value.to_string())),
            ItemField::LastPrice if value.is_empty() => FieldUpdate::LastPrice(None),
            ItemField::LastPrice => {
                FieldUpdate::LastPrice(Some(value.parse().map_err(|_| invalid("a number"))?))
            }
            ItemField::ToPurchase => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => FieldUpdate::ToPurchase(true),
                "false" | "0" | "no" => FieldUpdate::ToPurchase(false),
                _ => return Err(invalid("true or false")),
            },
        };

        Ok(update)
    }
}

impl FromStr for ItemField {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        ItemField::ALL
            .into_iter()
            .find(|field| field.column() == name)
            .ok_or_else(|| Error::InvalidField(name.to_string()))
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A single field assignment for `Database::update_partial`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Quantity(i64),
    Description(String),
    Barcode(Option<String>),
    LastPrice(Option<f64>),
    ToPurchase(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> ItemField {
        match self {
            FieldUpdate::Quantity(_) => ItemField::Quantity,
            FieldUpdate::Description(_) => ItemField::Description,
            FieldUpdate::Barcode(_) => ItemField::Barcode,
            FieldUpdate::LastPrice(_) => ItemField::LastPrice,
            FieldUpdate::ToPurchase(_) => ItemField::ToPurchase,
        }
    }

    pub(crate) fn to_sql(&self) -> Box<dyn rusqlite::ToSql + '_> {
        match self {
            FieldUpdate::Quantity(value) => Box::new(*value),
            FieldUpdate::Description(value) => Box::new(value.as_str()),
            FieldUpdate::Barcode(value) => {
                Box::new(value.as_deref().filter(|code| !code.is_empty()))
            }
            FieldUpdate::LastPrice(value) => Box::new(*value),
            FieldUpdate::ToPurchase(value) => Box::new(*value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = NewItem::new("Bread", 2);
        assert!(item.to_purchase);
        assert_eq!(item.last_price, None);
        assert_eq!(item.barcode, None);
    }

    #[test]
    fn test_empty_barcode_is_none() {
        let item = NewItem::new("Bread", 2).with_barcode(Some(String::new()));
        assert_eq!(item.barcode, None);

        let item = NewItem::new("Bread", 2).with_barcode(Some("4006381333931".to_string()));
        assert_eq!(item.barcode.as_deref(), Some("4006381333931"));
    }

    #[test]
    fn test_field_names() -> Result<()> {
        for field in ItemField::ALL {
            assert_eq!(field.column().parse::<ItemField>()?, field);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_field_rejected() {
        for name in ["id", "price", "to_purchase; DROP TABLE items", ""] {
            match name.parse::<ItemField>() {
                Err(Error::InvalidField(got)) => assert_eq!(got, name),
                other => panic!("expected invalid field for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_values() -> Result<()> {
        assert_eq!(
            ItemField::Quantity.parse_value(" 4 ")?,
            FieldUpdate::Quantity(4)
        );
        assert_eq!(
            ItemField::ToPurchase.parse_value("false")?,
            FieldUpdate::ToPurchase(false)
        );
        assert_eq!(
            ItemField::LastPrice.parse_value("1.25")?,
            FieldUpdate::LastPrice(Some(1.25))
        );
        assert_eq!(
            ItemField::Barcode.parse_value("")?,
            FieldUpdate::Barcode(None)
        );
        assert!(ItemField::Quantity.parse_value("many").is_err());
        assert!(ItemField::ToPurchase.parse_value("maybe").is_err());
        Ok(())
    }

    #[test]
    fn test_blank_description_rejected() -> Result<()> {
        for raw in ["", "   "] {
            match ItemField::Description.parse_value(raw) {
                Err(Error::InvalidField(msg)) => assert!(msg.starts_with("description:")),
                other => panic!("expected invalid field, got {other:?}"),
            }
        }
        assert_eq!(
            ItemField::Description.parse_value("Oat milk")?,
            FieldUpdate::Description("Oat milk".to_string())
        );
        Ok(())
    }
}

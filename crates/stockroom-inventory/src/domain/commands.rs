//! Validated commands for the inventory store.
//!
//! Drafts carry caller input exactly as received; converting a draft into a
//! command is the only place presence and quantity rules are checked.

use serde::Deserialize;
use serde_json::Value;
use stockroom_core::error::StoreError;
use stockroom_core::quantity::Quantity;

/// Unvalidated fields for a new product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    /// Requested product id, as a JSON string or number.
    pub id: Option<Value>,
    /// Requested name.
    pub name: Option<Value>,
    /// Requested category.
    pub category: Option<Value>,
    /// Initial quantity, as a JSON number or numeric string.
    pub quantity: Option<Value>,
}

/// Unvalidated stock-in or stock-out request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockDraft {
    /// Product to adjust, as a JSON string or number.
    pub id: Option<Value>,
    /// Units to move, as a JSON number or numeric string.
    pub quantity: Option<Value>,
}

/// Command to add a product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProduct {
    /// Product id, trimmed.
    pub id: String,
    /// Product name, trimmed.
    pub name: String,
    /// Product category, trimmed.
    pub category: String,
    /// Initial stock.
    pub quantity: Quantity,
}

impl AddProduct {
    /// Builds a command from already typed values.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingField` if `id`, `name` or `category` is
    /// blank.
    pub fn new(
        id: &str,
        name: &str,
        category: &str,
        quantity: Quantity,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id: non_blank("id", id)?,
            name: non_blank("name", name)?,
            category: non_blank("category", category)?,
            quantity,
        })
    }
}

impl TryFrom<ProductDraft> for AddProduct {
    type Error = StoreError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        let id = required("id", draft.id.as_ref())?;
        let name = required("name", draft.name.as_ref())?;
        let category = required("category", draft.category.as_ref())?;
        let quantity = required_quantity(draft.quantity.as_ref())?;
        Ok(Self {
            id,
            name,
            category,
            quantity,
        })
    }
}

/// Command to move stock in or out of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveStock {
    /// Product id, trimmed.
    pub id: String,
    /// Units to move.
    pub quantity: Quantity,
}

impl TryFrom<StockDraft> for MoveStock {
    type Error = StoreError;

    fn try_from(draft: StockDraft) -> Result<Self, Self::Error> {
        let id = required("id", draft.id.as_ref())?;
        let quantity = required_quantity(draft.quantity.as_ref())?;
        Ok(Self { id, quantity })
    }
}

/// Reads a text field. Numbers are taken as their decimal text; any other
/// JSON type counts as missing.
fn required(field: &'static str, value: Option<&Value>) -> Result<String, StoreError> {
    match value {
        Some(Value::String(text)) => non_blank(field, text),
        Some(Value::Number(number)) => Ok(number.to_string()),
        _ => Err(StoreError::MissingField(field)),
    }
}

fn non_blank(field: &'static str, text: &str) -> Result<String, StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StoreError::MissingField(field));
    }
    Ok(text.to_owned())
}

fn required_quantity(value: Option<&Value>) -> Result<Quantity, StoreError> {
    match value {
        None | Some(Value::Null) => Err(StoreError::MissingField("quantity")),
        Some(raw) => Ok(Quantity::parse(raw)?),
    }
}

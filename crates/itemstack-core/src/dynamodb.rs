//! DynamoDB-backed store gateway.
//!
//! Items live in a table keyed by the string attribute `id`:
//!
//! ```text
//! id        S  "3f0c..."
//! name      S  "lamp"
//! createdAt S  "2024-05-01T10:00:00Z"
//! updatedAt S  "2024-05-01T10:00:00Z"
//! details   M  { description: S, location: S, quantity: N }
//! ```
//!
//! Empty fields are not written.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};
use itemstack_model::{Details, Item};

use crate::error::StoreError;
use crate::store::{ItemStore, prepare_for_save};

/// Partition key attribute.
const KEY_ID: &str = "id";

/// DynamoDB store gateway.
#[derive(Debug, Clone)]
pub struct DynamoDbItemStore {
    client: Client,
    table_name: String,
}

impl DynamoDbItemStore {
    /// Create a store for `table_name` using an existing client.
    #[must_use]
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// The table this store writes to.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(item_id: &str) -> HashMap<String, AttributeValue> {
        HashMap::from([(KEY_ID.to_owned(), AttributeValue::S(item_id.to_owned()))])
    }
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        let item = prepare_for_save(item);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    table = %self.table_name,
                    error = %DisplayErrorContext(&e),
                    "PutItem failed"
                );
                StoreError::Save(Box::new(e))
            })?;

        Ok(item)
    }

    async fn get_by_id(&self, item_id: &str) -> Result<Item, StoreError> {
        if item_id.is_empty() {
            return Err(StoreError::MissingId);
        }

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(item_id)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    table = %self.table_name,
                    item_id,
                    error = %DisplayErrorContext(&e),
                    "GetItem failed"
                );
                StoreError::Read(Box::new(e))
            })?;

        let attrs = output.item().ok_or(StoreError::NotFound)?;
        item_from_attributes(attrs).inspect_err(|e| {
            tracing::error!(table = %self.table_name, item_id, error = %e, "stored item is malformed");
        })
    }

    async fn delete_by_id(&self, item_id: &str) -> Result<(), StoreError> {
        if item_id.is_empty() {
            return Err(StoreError::MissingId);
        }

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(item_id)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    table = %self.table_name,
                    item_id,
                    error = %DisplayErrorContext(&e),
                    "DeleteItem failed"
                );
                StoreError::Delete(Box::new(e))
            })?;

        Ok(())
    }
}

/// Convert an item into its DynamoDB attribute map.
#[must_use]
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attrs = HashMap::new();
    put_string(&mut attrs, KEY_ID, &item.id);
    put_string(&mut attrs, "name", &item.name);
    if let Some(ts) = item.created_at {
        put_string(&mut attrs, "createdAt", &format_timestamp(ts));
    }
    if let Some(ts) = item.updated_at {
        put_string(&mut attrs, "updatedAt", &format_timestamp(ts));
    }

    if !item.details.is_empty() {
        let mut details = HashMap::new();
        put_string(&mut details, "description", &item.details.description);
        put_string(&mut details, "location", &item.details.location);
        if item.details.quantity != 0 {
            details.insert(
                "quantity".to_owned(),
                AttributeValue::N(item.details.quantity.to_string()),
            );
        }
        attrs.insert("details".to_owned(), AttributeValue::M(details));
    }

    attrs
}

/// Convert a DynamoDB attribute map back into an item.
///
/// Missing attributes take their empty value; attributes of the wrong type
/// are a decode error.
pub fn item_from_attributes(attrs: &HashMap<String, AttributeValue>) -> Result<Item, StoreError> {
    let details = match attrs.get("details") {
        None => Details::default(),
        Some(AttributeValue::M(map)) => Details {
            description: get_string(map, "description")?,
            location: get_string(map, "location")?,
            quantity: get_number(map, "quantity")?,
        },
        Some(_) => return Err(StoreError::Decode("attribute 'details' is not a map".to_owned())),
    };

    Ok(Item {
        id: get_string(attrs, KEY_ID)?,
        name: get_string(attrs, "name")?,
        created_at: get_timestamp(attrs, "createdAt")?,
        updated_at: get_timestamp(attrs, "updatedAt")?,
        details,
    })
}

fn put_string(attrs: &mut HashMap<String, AttributeValue>, name: &str, value: &str) {
    if !value.is_empty() {
        attrs.insert(name.to_owned(), AttributeValue::S(value.to_owned()));
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn get_string(attrs: &HashMap<String, AttributeValue>, name: &str) -> Result<String, StoreError> {
    match attrs.get(name) {
        None => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(_) => Err(StoreError::Decode(format!(
            "attribute '{name}' is not a string"
        ))),
    }
}

fn get_number(attrs: &HashMap<String, AttributeValue>, name: &str) -> Result<i64, StoreError> {
    match attrs.get(name) {
        None => Ok(0),
        Some(AttributeValue::N(n)) => n
            .parse()
            .map_err(|e| StoreError::Decode(format!("attribute '{name}' is not an integer: {e}"))),
        Some(_) => Err(StoreError::Decode(format!(
            "attribute '{name}' is not a number"
        ))),
    }
}

fn get_timestamp(
    attrs: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<Option<DateTime<Utc>>, StoreError> {
    let raw = get_string(attrs, name)?;
    if raw.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| Some(ts.with_timezone(&Utc)))
        .map_err(|e| StoreError::Decode(format!("attribute '{name}' is not RFC 3339: {e}")))
}

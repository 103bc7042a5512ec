use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::core::client::database::constant::{
    CONVERSATION_INDEX, CONVERT_ID_FIELD, CREATE_TIME_FIELD, MESSAGE_COLLECTION,
};
use crate::error::ProvisionerError;

/// Sort direction of one field inside an index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrder {
    Ascending,
    Descending,
}

impl IndexOrder {
    pub fn as_i32(self) -> i32 {
        match self {
            IndexOrder::Ascending => 1,
            IndexOrder::Descending => -1,
        }
    }
}

/// Declarative compound index: ordered `(field, direction)` pairs plus the
/// name the index is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: String,
    pub keys: Vec<(String, IndexOrder)>,
}

impl IndexSpec {
    pub fn new(name: impl Into<String>, keys: Vec<(String, IndexOrder)>) -> Self {
        Self { name: name.into(), keys }
    }

    /// Build the driver-level index model. Key order in the resulting
    /// document follows the order of `self.keys`.
    pub fn to_index_model(&self) -> IndexModel {
        let mut keys = Document::new();
        for (field, order) in &self.keys {
            keys.insert(field.clone(), order.as_i32());
        }
        let options = IndexOptions::builder().name(self.name.clone()).build();
        IndexModel::builder().keys(keys).options(options).build()
    }
}

/// Target collection together with the single compound index it carries
/// after provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    pub collection: String,
    pub index: IndexSpec,
}

impl CollectionSchema {
    pub fn validate(&self) -> Result<(), ProvisionerError> {
        if self.collection.trim().is_empty() {
            return Err(ProvisionerError::ConfigError("Collection name cannot be empty".to_string()));
        }
        if self.index.name.trim().is_empty() {
            return Err(ProvisionerError::ConfigError("Index name cannot be empty".to_string()));
        }
        if self.index.keys.is_empty() {
            return Err(ProvisionerError::ConfigError(format!(
                "Index {} must cover at least one field",
                self.index.name
            )));
        }
        Ok(())
    }
}

/// Canonical schema of the message collection: the conversation index keyed
/// on `convert_id` then `create_time`, both ascending, matching the message
/// service's list query (equality on the conversation, range on the time).
pub fn message_schema() -> CollectionSchema {
    CollectionSchema {
        collection: MESSAGE_COLLECTION.to_string(),
        index: IndexSpec::new(
            CONVERSATION_INDEX,
            vec![
                (CONVERT_ID_FIELD.to_string(), IndexOrder::Ascending),
                (CREATE_TIME_FIELD.to_string(), IndexOrder::Ascending),
            ],
        ),
    }
}

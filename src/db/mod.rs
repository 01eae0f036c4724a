pub mod ads;
pub mod forum;
pub mod freelancers;
pub mod portfolio;
pub mod reservations;

use std::env;

use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use mongodb::{Client, Database};
use serde::Serialize;
use thiserror::Error;

/// Failures at the document-store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),
    #[error("could not encode record: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("could not decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

/// Connect to the document store from `DATABASE_URL` and `DATABASE_NAME`.
pub async fn connect() -> Database {
    let uri = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let name = env::var("DATABASE_NAME").expect("DATABASE_NAME must be set");
    let client = Client::with_uri_str(&uri)
        .await
        .expect("Failed to connect to database");
    client.database(&name)
}

/// Query filter limited to the clause shapes the API actually uses:
/// exact-match equality and case-insensitive substring matching.
#[derive(Debug, Clone, Default)]
pub struct Filter(Document);

impl Filter {
    pub fn new() -> Self {
        Self(Document::new())
    }

    /// Exact-match equality on a field.
    pub fn eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.0.insert(field, value);
        self
    }

    /// Case-insensitive substring match. For array fields this matches if any
    /// element contains the pattern. The pattern is escaped, never raw regex.
    pub fn contains_ci(mut self, field: &str, pattern: &str) -> Self {
        self.0.insert(
            field,
            doc! { "$regex": regex::escape(pattern), "$options": "i" },
        );
        self
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

/// Insert a validated record into the named collection and return the
/// store-generated identifier as a hex string.
pub async fn create_document<T: Serialize>(
    db: &Database,
    collection: &str,
    record: &T,
) -> Result<String, StoreError> {
    let document = bson::to_document(record)?;
    let result = db
        .collection::<Document>(collection)
        .insert_one(document)
        .await?;
    Ok(match result.inserted_id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    })
}

/// Fetch documents matching `filter` in store-native (insertion) order.
/// `limit = None` returns all matches. Each returned document has its `_id`
/// rewritten to the hex-string form clients see.
pub async fn get_documents(
    db: &Database,
    collection: &str,
    filter: Filter,
    limit: Option<i64>,
) -> Result<Vec<Document>, StoreError> {
    let collection = db.collection::<Document>(collection);
    let mut find = collection.find(filter.into_document());
    if let Some(max) = limit {
        find = find.limit(max);
    }
    let mut cursor = find.await?;
    let mut documents = Vec::new();
    while let Some(mut document) = cursor.try_next().await? {
        if let Ok(oid) = document.get_object_id("_id") {
            document.insert("_id", oid.to_hex());
        }
        documents.push(document);
    }
    Ok(documents)
}

/// Check whether a document with the given id exists in a collection.
pub(crate) async fn document_exists(
    db: &Database,
    collection: &str,
    id: ObjectId,
) -> Result<bool, StoreError> {
    let found = db
        .collection::<Document>(collection)
        .find_one(doc! { "_id": id })
        .await?;
    Ok(found.is_some())
}

/// Parse a client-supplied identifier string; `None` means malformed.
pub fn parse_id(value: &str) -> Option<ObjectId> {
    ObjectId::parse_str(value).ok()
}

/// List collection names for the diagnostics endpoint.
pub async fn collection_names(db: &Database) -> Result<Vec<String>, StoreError> {
    Ok(db.list_collection_names().await?)
}

//! MongoDB-backed person collection.
//!
//! One [`Client`] is opened at startup and shared by every request; the
//! driver pools connections internally.

use crate::domain::model::{Age, Person, StoredPerson};
use crate::domain::ports::{PersonStore, StoreResult};
use crate::utils::error::StoreError;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_DATABASE: &str = "people";
pub const DEFAULT_COLLECTION: &str = "personmodels";

/// Write shape only. Reads go through raw documents so foreign fields survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    // Number 欄位一律存成 Double
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<f64>,
    #[serde(rename = "__v", default)]
    version: i32,
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        let message = e.to_string();
        match e.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Unavailable { message },
            _ => StoreError::Backend { message },
        }
    }
}

/// Renders a stored document as JSON: ObjectIds as hex, integral numbers as integers.
pub fn document_to_json(document: Document) -> Map<String, Value> {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Double(n) => serde_json::to_value(Age(n)).unwrap_or(Value::Null),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(inner) => Value::Object(document_to_json(inner)),
        Bson::DateTime(at) => at
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| Value::from(at.timestamp_millis())),
        other => other.into_relaxed_extjson(),
    }
}

#[derive(Debug, Clone)]
pub struct MongoPersonStore {
    people: Collection<PersonDocument>,
    documents: Collection<Document>,
}

impl MongoPersonStore {
    /// Connects using `url`. The database is taken from the URL path,
    /// falling back to `people`.
    pub async fn connect(url: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(url).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        tracing::info!(
            "🗄️ Using MongoDB collection {}.{}",
            database.name(),
            collection
        );

        let people = database.collection::<PersonDocument>(collection);
        let documents = people.clone_with_type::<Document>();
        Ok(Self { people, documents })
    }
}

#[async_trait]
impl PersonStore for MongoPersonStore {
    async fn insert(&self, person: Person) -> StoreResult<StoredPerson> {
        let document = PersonDocument {
            id: ObjectId::new(),
            name: person.name.clone(),
            age: person.age.map(|age| age.0),
            version: 0,
        };

        self.people.insert_one(&document).await?;
        tracing::debug!("Inserted person document {}", document.id);
        Ok(StoredPerson::new(document.id.to_hex(), person))
    }

    async fn find_all(&self) -> StoreResult<Vec<StoredPerson>> {
        let cursor = self.documents.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents
            .into_iter()
            .map(|document| StoredPerson(document_to_json(document)))
            .collect())
    }

    fn backend(&self) -> &'static str {
        "mongo"
    }
}

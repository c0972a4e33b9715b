use bson::Document;
use futures::TryStreamExt;
use log::error;
use mongodb::Collection;

use crate::config::ShelterConfig;
use crate::error::{Error, Result};
use crate::mongo;
use crate::results::{DeleteSummary, UpdateSummary, WriteOutcome};

/// CRUD access to the shelter's animal collection.
///
/// Bound to one database and one collection for its entire lifetime. Each
/// operation is a single request against the store; concurrency and pooling
/// are the driver's business.
///
/// Arguments are `impl Into<Option<Document>>`: pass a `doc! {}` directly, or
/// `None` to exercise the absent-argument path. Absent required arguments
/// raise [`Error::InvalidArgument`] before any network call. Store-side
/// failures never surface as `Err`; they are logged and mapped to a fallback
/// value per operation, so a caller cannot tell a failed `read` from one that
/// matched nothing.
pub struct AnimalShelter {
    collection: Collection<Document>,
}

impl AnimalShelter {
    /// Connects to the production deployment (see [`crate::config`]) with the
    /// given credentials.
    pub async fn connect(username: &str, password: &str) -> Result<Self> {
        Self::with_config(username, password, ShelterConfig::default()).await
    }

    /// Connects with an explicit [`ShelterConfig`].
    pub async fn with_config(
        username: &str,
        password: &str,
        config: ShelterConfig,
    ) -> Result<Self> {
        let collection = mongo::connect(username, password, &config).await?;
        Ok(Self { collection })
    }

    /// Inserts `document` as a new record.
    ///
    /// Returns `Ok(true)` on success, `Ok(false)` if the insert failed.
    pub async fn create(&self, document: impl Into<Option<Document>>) -> Result<bool> {
        let document = document
            .into()
            .ok_or(Error::InvalidArgument("document"))?;
        match self.collection.insert_one(document).await {
            Ok(_) => Ok(true),
            Err(e) => {
                error!("insert failed: {}", e);
                Ok(false)
            }
        }
    }

    /// Returns all documents matching `query`, in the store's natural order.
    ///
    /// An empty vec means either no matches or a failed find; the two cases
    /// are indistinguishable here.
    pub async fn read(&self, query: impl Into<Option<Document>>) -> Result<Vec<Document>> {
        let query = query.into().ok_or(Error::InvalidArgument("query"))?;
        let cursor = match self.collection.find(query).await {
            Ok(cursor) => cursor,
            Err(e) => {
                error!("find failed: {}", e);
                return Ok(Vec::new());
            }
        };
        match cursor.try_collect::<Vec<Document>>().await {
            Ok(documents) => Ok(documents),
            Err(e) => {
                error!("cursor read failed: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Applies `update` to every document matching `filter`.
    ///
    /// Both arguments are required; an empty `filter` matches the whole
    /// collection, which is different from an absent one.
    pub async fn update(
        &self,
        filter: impl Into<Option<Document>>,
        update: impl Into<Option<Document>>,
    ) -> Result<WriteOutcome<UpdateSummary>> {
        let filter = filter.into().ok_or(Error::InvalidArgument("filter"))?;
        let update = update.into().ok_or(Error::InvalidArgument("update"))?;
        match self.collection.update_many(filter, update).await {
            Ok(result) => Ok(WriteOutcome::Completed(result.into())),
            Err(e) => {
                error!("update failed: {}", e);
                Ok(WriteOutcome::Failed)
            }
        }
    }

    /// Deletes every document matching `filter`.
    pub async fn delete(
        &self,
        filter: impl Into<Option<Document>>,
    ) -> Result<WriteOutcome<DeleteSummary>> {
        let filter = filter.into().ok_or(Error::InvalidArgument("filter"))?;
        match self.collection.delete_many(filter).await {
            Ok(result) => Ok(WriteOutcome::Completed(result.into())),
            Err(e) => {
                error!("delete failed: {}", e);
                Ok(WriteOutcome::Failed)
            }
        }
    }
}

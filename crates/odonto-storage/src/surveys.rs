use std::time::Duration;

use aws_sdk_s3::Client;
use futures::stream::{self, StreamExt, TryStreamExt};
use uuid::Uuid;

use odonto_core::models::survey::{SurveyRecord, sort_newest_first};
use odonto_core::store_keys;

use crate::error::StorageError;
use crate::objects;
use crate::subscription::{Subscription, spawn_poller};

/// Concurrent GETs while loading the record set.
const LIST_CONCURRENCY: usize = 8;

/// Survey records for one application id inside one bucket.
#[derive(Debug, Clone)]
pub struct SurveyStore {
    client: Client,
    bucket: String,
    app_id: String,
}

impl SurveyStore {
    pub fn new(client: Client, bucket: impl Into<String>, app_id: impl Into<String>) -> Self {
        SurveyStore {
            client,
            bucket: bucket.into(),
            app_id: app_id.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Persist a new record.
    pub async fn create(&self, record: &SurveyRecord) -> Result<(), StorageError> {
        let key = store_keys::survey(&self.app_id, record.id);
        let body = serde_json::to_vec(record)?;
        objects::put_object(
            &self.client,
            &self.bucket,
            &key,
            body,
            Some("application/json"),
        )
        .await?;
        tracing::info!(key = %key, id = %record.id, "survey saved");
        Ok(())
    }

    /// Load every record, newest first. Objects that fail to decode are
    /// skipped with a warning.
    pub async fn list(&self) -> Result<Vec<SurveyRecord>, StorageError> {
        let prefix = store_keys::surveys_prefix(&self.app_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let bodies: Vec<(String, Vec<u8>)> = stream::iter(keys)
            .filter(|key| std::future::ready(store_keys::survey_id(key).is_some()))
            .map(|key| async move {
                match objects::get_object(&self.client, &self.bucket, &key).await {
                    Ok(body) => Ok(Some((key, body))),
                    // Deleted between LIST and GET.
                    Err(StorageError::NotFound { .. }) => Ok(None),
                    Err(e) => Err(e),
                }
            })
            .buffer_unordered(LIST_CONCURRENCY)
            .try_filter_map(|entry| std::future::ready(Ok(entry)))
            .try_collect()
            .await?;

        let mut records = Vec::with_capacity(bodies.len());
        for (key, body) in bodies {
            match serde_json::from_slice::<SurveyRecord>(&body) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(key = %key, error = %e, "skipping undecodable survey"),
            }
        }

        sort_newest_first(&mut records);
        tracing::debug!(count = records.len(), "surveys listed");
        Ok(records)
    }

    pub async fn get(&self, id: Uuid) -> Result<SurveyRecord, StorageError> {
        let key = store_keys::survey(&self.app_id, id);
        let body = objects::get_object(&self.client, &self.bucket, &key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let key = store_keys::survey(&self.app_id, id);
        if !objects::object_exists(&self.client, &self.bucket, &key).await? {
            return Err(StorageError::NotFound { key });
        }
        objects::delete_object(&self.client, &self.bucket, &key).await?;
        tracing::info!(key = %key, "survey deleted");
        Ok(())
    }

    /// Live feed of the full record set, polled every `interval`.
    pub fn subscribe(&self, interval: Duration) -> Subscription {
        let store = self.clone();
        spawn_poller(interval, move || {
            let store = store.clone();
            async move { store.list().await }
        })
    }
}

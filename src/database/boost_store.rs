// database/boost_store.rs
use chrono::{DateTime, NaiveDate, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::{Collection, Database};

use crate::errors::{AppError, Result};
use crate::models::boost::Boost;

pub const BOOSTS_COLLECTION: &str = "boosts";

/// All persistence queries for boost records. Handlers construct one per
/// request; the collection handle is cheap to create.
pub struct BoostStore {
    collection: Collection<Boost>,
}

impl BoostStore {
    pub fn new(db: &Database) -> Self {
        BoostStore {
            collection: db.collection(BOOSTS_COLLECTION),
        }
    }

    pub async fn create(&self, mut boost: Boost) -> Result<Boost> {
        boost.id = Some(ObjectId::new());
        self.collection.insert_one(&boost).await?;
        Ok(boost)
    }

    pub async fn list(&self) -> Result<Vec<Boost>> {
        let cursor = self.collection.find(doc! {}).await?;
        let mut boosts: Vec<Boost> = cursor.try_collect().await?;
        boosts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(boosts)
    }

    pub async fn get_by_id(&self, id: ObjectId) -> Result<Boost> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(AppError::BoostNotFound)
    }

    pub async fn get_by_identification_number(
        &self,
        identification_number: &str,
    ) -> Result<Vec<Boost>> {
        let cursor = self
            .collection
            .find(doc! { "identificationNumber": identification_number })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Callback reconciliation: a miss is a normal outcome, not an error.
    pub async fn get_by_reference(&self, reference: &str) -> Result<Option<Boost>> {
        Ok(self
            .collection
            .find_one(doc! { "externalReference": reference })
            .await?)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(AppError::BoostNotFound);
        }
        Ok(())
    }

    pub async fn list_paid(
        &self,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<Boost>> {
        let cursor = self.collection.find(paid_filter(window)).await?;
        let mut boosts: Vec<Boost> = cursor.try_collect().await?;
        boosts.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(boosts)
    }

    pub async fn sum_fees(&self, window: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<f64> {
        let cursor = self.collection.find(paid_filter(window)).await?;
        let boosts: Vec<Boost> = cursor.try_collect().await?;
        Ok(boosts.iter().map(|b| b.fee).sum())
    }

    pub async fn count_paid(&self, window: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<u64> {
        Ok(self.collection.count_documents(paid_filter(window)).await?)
    }

    /// Stamps the payment reference onto a record, but only while the record
    /// has none: a reference is set exactly once. Returns false when no
    /// eligible record matched (absent, or already linked).
    pub async fn link_reference(&self, id: ObjectId, reference: &str) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id, "externalReference": null },
                doc! { "$set": { "externalReference": reference } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Marks the record carrying this reference as paid. Re-running the same
    /// callback re-sets the same fields; `paid` never goes back to false.
    pub async fn mark_paid(&self, reference: &str, paid_at: DateTime<Utc>) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "externalReference": reference },
                doc! { "$set": {
                    "paid": true,
                    "paymentDate": BsonDateTime::from_chrono(paid_at),
                } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}

/// Filter for paid boosts, optionally restricted to a closed payment-date
/// interval.
pub fn paid_filter(window: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Document {
    let mut filter = doc! { "paid": true };
    if let Some((start, end)) = window {
        filter.insert(
            "paymentDate",
            doc! {
                "$gte": BsonDateTime::from_chrono(start),
                "$lte": BsonDateTime::from_chrono(end),
            },
        );
    }
    filter
}

/// The whole calendar day: 00:00:00 through 23:59:59.
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        date.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc(),
        date.and_hms_opt(23, 59, 59).expect("end of day is valid").and_utc(),
    )
}

/// start-of-day on `start` through end-of-day on `end`, both inclusive.
pub fn range_window(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (day_window(start).0, day_window(end).1)
}

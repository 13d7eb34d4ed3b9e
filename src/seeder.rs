use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;

use crate::data;
use crate::models::{BloodRequest, SeedRecord};
use crate::rtdb::RtdbClient;

/// Writes the sample collections one record at a time. Any failed write
/// aborts the run.
pub struct Seeder {
    client: RtdbClient,
}

impl Seeder {
    pub fn new(client: RtdbClient) -> Self {
        Seeder { client }
    }

    pub async fn seed_all(&self) -> Result<()> {
        info!("starting data upload to the realtime database");

        let requests = stamp_blood_requests(data::blood_requests(), Utc::now());
        self.write_collection(&requests).await?;
        self.write_collection(&data::campaigns()).await?;
        self.write_collection(&data::campaign_registrations()).await?;
        self.write_collection(&data::qualification_questions()).await?;
        self.write_collection(&data::donor_qualifications()).await?;

        self.client
            .set(data::INCREMENT_PATH, &data::increment_descriptor())
            .await?;
        info!("added increment descriptor at '{}'", data::INCREMENT_PATH);

        info!("data upload complete");
        Ok(())
    }

    async fn write_collection<T: SeedRecord>(
        &self,
        records: &[T],
    ) -> Result<()> {
        for record in records {
            let path = format!("{}/{}", T::PATH, record.key());
            self.client.set(&path, record).await?;
        }

        info!("added {} records to '{}'", records.len(), T::PATH);
        Ok(())
    }
}

/// Blood requests mirror documents the application stamps server-side, so
/// fill the two timestamp fields the literals left out.
pub fn stamp_blood_requests(
    mut requests: Vec<BloodRequest>,
    now: DateTime<Utc>,
) -> Vec<BloodRequest> {
    for request in &mut requests {
        if request.created_at.is_none() {
            request.created_at = Some(now);
        }
        if request.updated_at.is_none() {
            request.updated_at = Some(now);
        }
    }

    requests
}

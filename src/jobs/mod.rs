//! Background jobs.

pub mod campaign_job;

pub use campaign_job::{
    campaign_job_handler, CampaignJobContext, CampaignQueue, CampaignSendJob,
    PostgresCampaignQueue,
};

#[cfg(any(test, feature = "test-utils"))]
pub use campaign_job::MockCampaignQueue;

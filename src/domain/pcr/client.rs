//! PCR sub-client — fetch + sentiment segregation.

use crate::client::MonetaryClient;
use crate::domain::pcr::{classify, PcrRow, SegregatedPcr};
use crate::error::SdkError;

/// Sub-client for put-call-ratio analytics.
pub struct Pcr<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Pcr<'a> {
    /// Fetch the raw PCR rows, unfiltered.
    pub async fn raw(&self) -> Result<Vec<PcrRow>, SdkError> {
        Ok(self.client.http.get_pcr().await?.into_vec())
    }

    /// Fetch and classify into sentiment buckets (top 2 per bucket).
    pub async fn segregated(&self) -> Result<SegregatedPcr, SdkError> {
        Ok(classify(self.raw().await?))
    }
}

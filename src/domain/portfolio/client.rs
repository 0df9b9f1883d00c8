//! Portfolio sub-client — broker holdings and tracked assets.

use crate::client::MonetaryClient;
use crate::domain::portfolio::{AddAssetRequest, Holding, PortfolioAsset};
use crate::error::SdkError;

/// Sub-client for portfolio operations.
pub struct Portfolio<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Portfolio<'a> {
    /// Broker holdings with live P&L (`GET /dashboard/portfolio`).
    pub async fn holdings(&self) -> Result<Vec<Holding>, SdkError> {
        Ok(self.client.http.get_holdings().await?.into_vec())
    }

    /// Manually tracked assets (`GET /portfolio`).
    pub async fn assets(&self) -> Result<Vec<PortfolioAsset>, SdkError> {
        Ok(self.client.http.get_portfolio().await?.into_vec())
    }

    pub async fn add_asset(&self, request: &AddAssetRequest) -> Result<PortfolioAsset, SdkError> {
        Ok(self.client.http.add_asset(request).await?)
    }

    pub async fn delete_asset(&self, id: i64) -> Result<(), SdkError> {
        Ok(self.client.http.delete_asset(id).await?)
    }
}

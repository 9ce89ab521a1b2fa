//! The seam between the interaction controller and whatever answers its queries.

use crate::types::ComplianceResponse;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can turn a query into a [`ComplianceResponse`].
///
/// [`AnalysisClient`](crate::client::AnalysisClient) is the HTTP implementation;
/// tests and embedders may provide their own.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit `query` exactly as given and await a single verdict.
    async fn submit_analysis(&self, query: &str) -> Result<ComplianceResponse>;
}

#[async_trait]
impl<T: AnalysisService + ?Sized> AnalysisService for Arc<T> {
    async fn submit_analysis(&self, query: &str) -> Result<ComplianceResponse> {
        (**self).submit_analysis(query).await
    }
}

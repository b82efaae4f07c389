//! Lead ingestion through the SuperTool public leads API.

use async_trait::async_trait;
use leadline_core::LeadRecord;

use crate::client::{ensure_success, join_url};
use crate::Result;

const SERVICE: &str = "supertool";

/// Something that records leads for the business.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// File one lead.
    async fn submit(&self, lead: &LeadRecord) -> Result<()>;
}

/// SuperTool-backed [`LeadSink`], scoped to one tenant.
#[derive(Clone)]
pub struct SuperToolClient {
    http: reqwest::Client,
    base_url: String,
    tenant_id: String,
}

impl SuperToolClient {
    /// Create a client filing leads under `tenant_id`.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            tenant_id: tenant_id.into(),
        }
    }

    /// Tenant-scoped ingestion endpoint.
    pub fn leads_url(&self) -> String {
        join_url(
            &self.base_url,
            &format!("api/public/leads/{}", self.tenant_id),
        )
    }
}

#[async_trait]
impl LeadSink for SuperToolClient {
    async fn submit(&self, lead: &LeadRecord) -> Result<()> {
        tracing::debug!(kind = lead.kind(), tenant = %self.tenant_id, "submitting lead");
        let response = self
            .http
            .post(self.leads_url())
            .json(lead)
            .send()
            .await?;
        ensure_success(SERVICE, response).await
    }
}

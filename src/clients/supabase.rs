use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::clients::models::common::DayPlan;
use crate::clients::models::requests::{NewPlan, PlanDaysUpdate};
use crate::clients::models::responses::{PLAN_SUMMARY_COLUMNS, PlanRecord, PlanSummary};
use crate::clients::store::PlanStore;
use crate::config::SupabaseConfig;

const PLANS_ENDPOINT: &str = "/rest/v1/weight_cutting_plans";

/// PostgREST client for the hosted `weight_cutting_plans` table.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base: Url,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base: Url::parse(&config.url)?,
            api_key: config.api_key.clone(),
        })
    }

    fn plans_url(&self, filters: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base.join(PLANS_ENDPOINT)?;
        if !filters.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in filters {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                body
            ));
        }

        Ok(body)
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

#[async_trait]
impl PlanStore for SupabaseClient {
    async fn list_plans(&self, owner_id: &str) -> Result<Vec<PlanSummary>> {
        let url = self.plans_url(&[
            ("select", PLAN_SUMMARY_COLUMNS.to_string()),
            ("user_id", eq(owner_id)),
            ("order", "created_at.desc".to_string()),
        ])?;

        let response = self.authorized(self.http.get(url)).send().await?;
        let body = Self::read_body(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse plan list response: {}", e))
    }

    async fn get_plan(&self, plan_id: &str, owner_id: &str) -> Result<Option<PlanRecord>> {
        let url = self.plans_url(&[
            ("select", "*".to_string()),
            ("id", eq(plan_id)),
            ("user_id", eq(owner_id)),
        ])?;

        let response = self.authorized(self.http.get(url)).send().await?;
        let body = Self::read_body(response).await?;

        let rows: Vec<PlanRecord> = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse plan response: {}", e))?;
        Ok(rows.into_iter().next())
    }

    async fn insert_plan(&self, plan: NewPlan) -> Result<PlanRecord> {
        let url = self.plans_url(&[])?;
        let json_body = serde_json::to_string(&plan)?;

        tracing::debug!(owner_id = %plan.user_id, "supabase.insert_plan.request");

        let response = self
            .authorized(self.http.post(url))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(json_body)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let rows: Vec<PlanRecord> = serde_json::from_str(&body)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("API returned empty plan array"))
    }

    async fn update_plan_days(
        &self,
        plan_id: &str,
        owner_id: &str,
        days: &[DayPlan],
    ) -> Result<Option<PlanRecord>> {
        let url = self.plans_url(&[("id", eq(plan_id)), ("user_id", eq(owner_id))])?;
        let json_body = serde_json::to_string(&PlanDaysUpdate {
            ai_generated_plan: days,
        })?;

        tracing::debug!(%plan_id, day_count = days.len(), "supabase.update_plan.request");

        let response = self
            .authorized(self.http.patch(url))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(json_body)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let rows: Vec<PlanRecord> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().next())
    }

    async fn delete_plan(&self, plan_id: &str, owner_id: &str) -> Result<bool> {
        let url = self.plans_url(&[
            ("id", eq(plan_id)),
            ("user_id", eq(owner_id)),
            ("select", "id".to_string()),
        ])?;

        let response = self
            .authorized(self.http.delete(url))
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(&SupabaseConfig {
            url: "https://project.supabase.co".to_string(),
            api_key: "anon-key".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_plans_url_encodes_filters() {
        let url = client()
            .plans_url(&[
                ("id", eq("abc")),
                ("user_id", eq("user 1")),
                ("order", "created_at.desc".to_string()),
            ])
            .unwrap();

        assert_eq!(url.path(), "/rest/v1/weight_cutting_plans");
        assert_eq!(
            url.query(),
            Some("id=eq.abc&user_id=eq.user+1&order=created_at.desc")
        );
    }

    #[test]
    fn test_plans_url_without_filters_has_no_query() {
        let url = client().plans_url(&[]).unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(
            url.as_str(),
            "https://project.supabase.co/rest/v1/weight_cutting_plans"
        );
    }
}

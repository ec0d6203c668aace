use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::clients::models::common::DayPlan;
use crate::clients::models::requests::NewPlan;
use crate::clients::models::responses::{PlanRecord, PlanSummary};

/// Persistence for plan records. Every lookup is scoped to the owner.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Owner's plans, newest first.
    async fn list_plans(&self, owner_id: &str) -> Result<Vec<PlanSummary>>;

    async fn get_plan(&self, plan_id: &str, owner_id: &str) -> Result<Option<PlanRecord>>;

    async fn insert_plan(&self, plan: NewPlan) -> Result<PlanRecord>;

    async fn update_plan_days(
        &self,
        plan_id: &str,
        owner_id: &str,
        days: &[DayPlan],
    ) -> Result<Option<PlanRecord>>;

    /// Returns false when nothing matched.
    async fn delete_plan(&self, plan_id: &str, owner_id: &str) -> Result<bool>;
}

/// Process-local store used when no hosted database is configured.
#[derive(Clone, Default)]
pub struct MemoryPlanStore {
    plans: Arc<Mutex<HashMap<String, PlanRecord>>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_plans<T>(&self, f: impl FnOnce(&mut HashMap<String, PlanRecord>) -> T) -> Result<T> {
        let mut plans = self
            .plans
            .lock()
            .map_err(|_| anyhow::anyhow!("plan store lock poisoned"))?;
        Ok(f(&mut plans))
    }
}

#[async_trait]
impl PlanStore for MemoryPlanStore {
    async fn list_plans(&self, owner_id: &str) -> Result<Vec<PlanSummary>> {
        let mut summaries: Vec<PlanSummary> = self.with_plans(|plans| {
            plans
                .values()
                .filter(|plan| plan.user_id == owner_id)
                .map(PlanSummary::from)
                .collect()
        })?;
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn get_plan(&self, plan_id: &str, owner_id: &str) -> Result<Option<PlanRecord>> {
        self.with_plans(|plans| {
            plans
                .get(plan_id)
                .filter(|plan| plan.user_id == owner_id)
                .cloned()
        })
    }

    async fn insert_plan(&self, plan: NewPlan) -> Result<PlanRecord> {
        let record = PlanRecord {
            id: Uuid::new_v4().to_string(),
            user_id: plan.user_id,
            name: plan.name,
            height: plan.height,
            height_unit: plan.height_unit,
            current_weight: plan.current_weight,
            weight_unit: plan.weight_unit,
            gender: plan.gender,
            age: plan.age,
            sport: plan.sport,
            desired_weight: plan.desired_weight,
            weigh_in_date: plan.weigh_in_date,
            training_schedule: plan.training_schedule,
            food_preferences: plan.food_preferences,
            ai_generated_plan: Some(plan.ai_generated_plan),
            created_at: Utc::now(),
        };

        self.with_plans(|plans| {
            plans.insert(record.id.clone(), record.clone());
        })?;
        Ok(record)
    }

    async fn update_plan_days(
        &self,
        plan_id: &str,
        owner_id: &str,
        days: &[DayPlan],
    ) -> Result<Option<PlanRecord>> {
        self.with_plans(|plans| {
            plans
                .get_mut(plan_id)
                .filter(|plan| plan.user_id == owner_id)
                .map(|plan| {
                    plan.ai_generated_plan = Some(days.to_vec());
                    plan.clone()
                })
        })
    }

    async fn delete_plan(&self, plan_id: &str, owner_id: &str) -> Result<bool> {
        self.with_plans(|plans| {
            let owned = plans
                .get(plan_id)
                .is_some_and(|plan| plan.user_id == owner_id);
            if owned {
                plans.remove(plan_id);
            }
            owned
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clients::models::common::{Gender, HeightUnit, WeightUnit};
    use chrono::NaiveDate;

    pub(crate) fn new_plan(owner: &str, name: &str) -> NewPlan {
        NewPlan {
            user_id: owner.to_string(),
            name: name.to_string(),
            height: 5.8,
            height_unit: HeightUnit::Ft,
            current_weight: 160.0,
            weight_unit: WeightUnit::Lbs,
            gender: Gender::Male,
            age: 30,
            sport: "Wrestling".to_string(),
            desired_weight: 154.0,
            weigh_in_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            training_schedule: "Mornings".to_string(),
            food_preferences: None,
            ai_generated_plan: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_scoped_to_owner() {
        let store = MemoryPlanStore::new();
        let record = store.insert_plan(new_plan("athlete-1", "Cut")).await.unwrap();

        let fetched = store.get_plan(&record.id, "athlete-1").await.unwrap();
        assert_eq!(fetched, Some(record.clone()));

        let foreign = store.get_plan(&record.id, "athlete-2").await.unwrap();
        assert_eq!(foreign, None);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let store = MemoryPlanStore::new();
        let first = store.insert_plan(new_plan("athlete-1", "First")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store.insert_plan(new_plan("athlete-1", "Second")).await.unwrap();
        store.insert_plan(new_plan("athlete-2", "Other")).await.unwrap();

        let plans = store.list_plans("athlete-1").await.unwrap();

        let ids: Vec<&str> = plans.iter().map(|plan| plan.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    }

    #[tokio::test]
    async fn test_update_and_delete_respect_owner() {
        let store = MemoryPlanStore::new();
        let record = store.insert_plan(new_plan("athlete-1", "Cut")).await.unwrap();

        assert_eq!(
            store.update_plan_days(&record.id, "athlete-2", &[]).await.unwrap(),
            None
        );
        assert!(!store.delete_plan(&record.id, "athlete-2").await.unwrap());

        assert!(store.delete_plan(&record.id, "athlete-1").await.unwrap());
        assert_eq!(store.get_plan(&record.id, "athlete-1").await.unwrap(), None);
    }
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::error::PlanError;
use crate::models::DailyTargets;
use crate::plan::{YearPlan, generate_year};

/// Memoized year plans, one per (year, targets). Entries are never replaced.
#[derive(Debug)]
pub struct PlanCache {
    total_units: usize,
    plans: RwLock<HashMap<(i32, DailyTargets), Arc<YearPlan>>>,
}

impl PlanCache {
    pub fn new(total_units: usize) -> Self {
        Self {
            total_units,
            plans: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_or_generate(
        &self,
        year: i32,
        targets: &DailyTargets,
    ) -> Result<Arc<YearPlan>, PlanError> {
        let key = (year, *targets);
        if let Some(plan) = self.read_entry(&key) {
            return Ok(plan);
        }

        let plan = Arc::new(generate_year(year, self.total_units, targets)?);
        let mut plans = self.plans.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have filled the slot while we generated.
        let entry = plans.entry(key).or_insert_with(|| {
            debug!("cached plan for {}", year);
            plan
        });
        Ok(Arc::clone(entry))
    }

    pub fn len(&self) -> usize {
        self.plans.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_entry(&self, key: &(i32, DailyTargets)) -> Option<Arc<YearPlan>> {
        self.plans
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TOTAL_CHAPTERS;

    #[test]
    fn same_year_is_generated_once() {
        let cache = PlanCache::new(TOTAL_CHAPTERS);
        let targets = DailyTargets::default();
        let a = cache.get_or_generate(2025, &targets).unwrap();
        let b = cache.get_or_generate(2025, &targets).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_plan_matches_direct_generation() {
        let cache = PlanCache::new(TOTAL_CHAPTERS);
        let targets = DailyTargets::default();
        let cached = cache.get_or_generate(2024, &targets).unwrap();
        let direct = generate_year(2024, TOTAL_CHAPTERS, &targets).unwrap();
        assert_eq!(*cached, direct);
    }

    #[test]
    fn targets_are_part_of_the_key() {
        let cache = PlanCache::new(TOTAL_CHAPTERS);
        cache.get_or_generate(2025, &DailyTargets::default()).unwrap();
        cache
            .get_or_generate(2025, &DailyTargets::new(4, 5).unwrap())
            .unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = PlanCache::new(100);
        assert!(cache.get_or_generate(2025, &DailyTargets::default()).is_err());
        assert!(cache.is_empty());
    }
}

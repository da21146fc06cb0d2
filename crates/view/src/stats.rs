//! Aggregate campaign statistics for the overview cards.

use serde::Serialize;
use studio_core::types::{Campaign, CampaignStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignStats {
    pub total: usize,
    pub approved: usize,
    pub running: usize,
    pub paused: usize,
    pub completed: usize,
    pub total_budget: u64,
}

impl CampaignStats {
    /// Reduce over the full campaign list. Filters never feed into this.
    pub fn compute(campaigns: &[Campaign]) -> Self {
        campaigns.iter().fold(Self::default(), |mut stats, c| {
            stats.total += 1;
            stats.total_budget = stats.total_budget.saturating_add(c.budget);
            match c.status {
                CampaignStatus::Approved => stats.approved += 1,
                CampaignStatus::Running => stats.running += 1,
                CampaignStatus::Paused => stats.paused += 1,
                CampaignStatus::Completed => stats.completed += 1,
            }
            stats
        })
    }

    pub fn count(&self, status: CampaignStatus) -> usize {
        match status {
            CampaignStatus::Approved => self.approved,
            CampaignStatus::Running => self.running,
            CampaignStatus::Paused => self.paused,
            CampaignStatus::Completed => self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::Catalog;

    #[test]
    fn test_builtin_totals() {
        let stats = CampaignStats::compute(&Catalog::builtin().campaigns);
        assert_eq!(
            stats,
            CampaignStats {
                total: 5,
                approved: 2,
                running: 1,
                paused: 1,
                completed: 1,
                total_budget: 188_000,
            }
        );
    }

    #[test]
    fn test_counts_sum_to_total() {
        let stats = CampaignStats::compute(&Catalog::builtin().campaigns);
        let sum: usize = CampaignStatus::ALL.iter().map(|s| stats.count(*s)).sum();
        assert_eq!(sum, stats.total);
    }

    #[test]
    fn test_budget_total_saturates() {
        let mut campaigns = Catalog::builtin().campaigns;
        campaigns[0].budget = u64::MAX;
        let stats = CampaignStats::compute(&campaigns);
        assert_eq!(stats.total_budget, u64::MAX);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(CampaignStats::compute(&[]), CampaignStats::default());
    }
}

use crate::state::StatusFilter;
use studio_core::types::Campaign;

/// Campaigns whose status passes `filter` and whose name contains `query`,
/// ignoring case. Catalog order is preserved.
pub fn filter_campaigns<'a>(
    campaigns: &'a [Campaign],
    filter: StatusFilter,
    query: &str,
) -> Vec<&'a Campaign> {
    let needle = query.to_lowercase();
    campaigns
        .iter()
        .filter(|c| filter.matches(c.status) && c.name.to_lowercase().contains(&needle))
        .collect()
}

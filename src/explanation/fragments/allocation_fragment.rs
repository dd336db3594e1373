use crate::explanation::types::{MetricCard, StageFragment};
use crate::metrics::AssetAllocation;

/// Generate explanation fragment for the asset split
pub fn generate_allocation_fragment(allocation: &AssetAllocation) -> StageFragment {
    let share = allocation.transport_share();

    StageFragment::card_only(MetricCard {
        code: "TTHR".to_string(),
        name: "Transport-to-Hospital Rate".to_string(),
        value: share,
        display: format!("{:.1}%", share * 100.0),
        interpretation: format!(
            "{} on-site, {} deflected to ACS/telehealth, {} to the ED",
            allocation.on_site, allocation.deflected, allocation.ed_transports
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::allocate_assets;
    use crate::utils::SurgeCalibration;

    #[test]
    fn test_card_lists_buckets() {
        let allocation = allocate_assets(97, &SurgeCalibration::default());
        let fragment = generate_allocation_fragment(&allocation);
        assert_eq!(fragment.card.display, "20.6%");
        assert!(fragment.card.interpretation.contains("63 on-site"));
        assert!(fragment.card.interpretation.contains("14 deflected"));
        assert!(fragment.card.interpretation.contains("20 to the ED"));
    }
}

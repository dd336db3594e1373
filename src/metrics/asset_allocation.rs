//! STAGE 3: ASSET ALLOCATION
//!
//! Splits total presentations across three care assets:
//! - On-site: treated/released at main first aid (65%)
//! - Deflected: alternate care sites / telehealth (15%)
//! - ED transports: the remainder (~20%) that hits the hospital grid
//!
//! The first two buckets are truncated; the transport bucket is derived by
//! subtraction so it absorbs all truncation error and the three always sum
//! to the total.

use serde::{Deserialize, Serialize};
use crate::utils::{truncate_count, SurgeCalibration};

/// Patient split across care assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub total_patients: u32,
    pub on_site: u32,
    pub deflected: u32,
    pub ed_transports: u32,
}

/// Allocate patients to assets
pub fn allocate_assets(total_patients: u32, calibration: &SurgeCalibration) -> AssetAllocation {
    let total = f64::from(total_patients);

    let on_site = truncate_count(total * calibration.on_site_fraction).min(total_patients);
    let deflected =
        truncate_count(total * calibration.deflected_fraction).min(total_patients - on_site);
    let ed_transports = total_patients - on_site - deflected;

    AssetAllocation {
        total_patients,
        on_site,
        deflected,
        ed_transports,
    }
}

impl AssetAllocation {
    /// Share of total presentations sent to the ED (0.0 when nobody presents)
    pub fn transport_share(&self) -> f64 {
        if self.total_patients == 0 {
            0.0
        } else {
            f64::from(self.ed_transports) / f64::from(self.total_patients)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let cal = SurgeCalibration::default();
        let a = allocate_assets(97, &cal);
        // 63.05 → 63, 14.55 → 14, remainder 20
        assert_eq!((a.on_site, a.deflected, a.ed_transports), (63, 14, 20));
    }

    #[test]
    fn test_remainder_absorbs_truncation() {
        let cal = SurgeCalibration::default();
        let a = allocate_assets(15, &cal);
        // 9.75 → 9, 2.25 → 2, remainder 4 (not floor(0.20 × 15) = 3)
        assert_eq!((a.on_site, a.deflected, a.ed_transports), (9, 2, 4));
    }

    #[test]
    fn test_partition_holds_for_every_total() {
        let cal = SurgeCalibration::default();
        for total in 0..5_000 {
            let a = allocate_assets(total, &cal);
            assert_eq!(a.on_site + a.deflected + a.ed_transports, total);
        }
    }

    #[test]
    fn test_zero_patients() {
        let cal = SurgeCalibration::default();
        let a = allocate_assets(0, &cal);
        assert_eq!(a.ed_transports, 0);
        assert_eq!(a.transport_share(), 0.0);
    }
}

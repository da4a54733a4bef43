use log::{info, warn};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::str::FromStr;

use crate::models::{ApySummary, MaxApyReport, ValidatorApyRow, ValidatorRecord};

const WEI_PER_ETH: f64 = 1e18;

fn wei_to_eth(amount: &str) -> f64 {
    match BigInt::from_str(amount.trim()) {
        Ok(wei) => wei.to_f64().unwrap_or(0.0) / WEI_PER_ETH,
        Err(e) => {
            warn!("Failed to parse wei amount {:?}: {}", amount, e);
            0.0
        }
    }
}

/// Derive ETH-denominated amounts and the consensus/execution APY split for
/// every record. A validator with zero total rewards has no defined split;
/// both layer APYs are reported as 0 in that case.
pub fn calculate_apys(validators: &[ValidatorRecord]) -> Vec<ValidatorApyRow> {
    validators.iter().map(derive_row).collect()
}

fn derive_row(validator: &ValidatorRecord) -> ValidatorApyRow {
    let consensus_rewards_eth = wei_to_eth(&validator.consensus_rewards);
    let execution_rewards_eth = wei_to_eth(&validator.execution_rewards);
    let total_rewards_eth = consensus_rewards_eth + execution_rewards_eth;

    let (cl_apy, el_apy) = if total_rewards_eth > 0.0 {
        (
            validator.gross_apy * consensus_rewards_eth / total_rewards_eth,
            validator.gross_apy * execution_rewards_eth / total_rewards_eth,
        )
    } else {
        (0.0, 0.0)
    };

    ValidatorApyRow {
        validator_address: validator.validator_address.clone(),
        validator_index: validator.validator_index,
        state: validator.state.clone(),
        is_kiln: validator.is_kiln,
        effective_balance_eth: wei_to_eth(&validator.effective_balance),
        consensus_rewards_eth,
        execution_rewards_eth,
        total_rewards_eth,
        gross_apy: validator.gross_apy,
        cl_apy,
        el_apy,
        activated_at: validator.activated_at,
    }
}

pub fn calculate_overall_apys(rows: &[ValidatorApyRow]) -> ApySummary {
    if rows.is_empty() {
        return ApySummary::default();
    }

    let count = rows.len() as f64;
    ApySummary {
        avg_gross_apy: rows.iter().map(|r| r.gross_apy).sum::<f64>() / count,
        avg_cl_apy: rows.iter().map(|r| r.cl_apy).sum::<f64>() / count,
        avg_el_apy: rows.iter().map(|r| r.el_apy).sum::<f64>() / count,
    }
}

/// Report the validator attaining the maximum of each APY metric. The first
/// occurrence wins on ties.
pub fn get_max_apy_validators(rows: &[ValidatorApyRow], group_label: &str) -> Option<MaxApyReport> {
    if rows.is_empty() {
        return None;
    }

    let gross = max_by_metric(rows, |r| r.gross_apy);
    let cl = max_by_metric(rows, |r| r.cl_apy);
    let el = max_by_metric(rows, |r| r.el_apy);

    info!("Highest APYs ({}):", group_label);
    info!(
        "  gross: {} at {:.4}%",
        gross.validator_address, gross.gross_apy
    );
    info!("  consensus: {} at {:.4}%", cl.validator_address, cl.cl_apy);
    info!("  execution: {} at {:.4}%", el.validator_address, el.el_apy);

    Some(MaxApyReport {
        gross: gross.clone(),
        cl: cl.clone(),
        el: el.clone(),
    })
}

fn max_by_metric<F>(rows: &[ValidatorApyRow], metric: F) -> &ValidatorApyRow
where
    F: Fn(&ValidatorApyRow) -> f64,
{
    let mut best = &rows[0];
    for row in &rows[1..] {
        // Strict comparison keeps the first occurrence on ties.
        if metric(row) > metric(best) {
            best = row;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, consensus: &str, execution: &str, gross_apy: f64) -> ValidatorRecord {
        ValidatorRecord {
            validator_address: address.to_string(),
            validator_index: None,
            state: "active_ongoing".to_string(),
            balance: "0".to_string(),
            effective_balance: "32000000000000000000".to_string(),
            consensus_rewards: consensus.to_string(),
            execution_rewards: execution.to_string(),
            gross_apy,
            is_kiln: true,
            activated_at: None,
            updated_at: None,
            eigenlayer: None,
        }
    }

    #[test]
    fn apy_split_is_proportional_to_reward_sources() {
        let rows = calculate_apys(&[record(
            "0xa1",
            "3000000000000000000",
            "1000000000000000000",
            4.0,
        )]);

        let row = &rows[0];
        assert!((row.effective_balance_eth - 32.0).abs() < 1e-9);
        assert!((row.total_rewards_eth - 4.0).abs() < 1e-9);
        assert!((row.cl_apy - 3.0).abs() < 1e-9);
        assert!((row.el_apy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn apy_split_sums_to_gross_for_nonzero_rewards() {
        let rows = calculate_apys(&[
            record("0xa1", "123456789012345678", "98765432109876543", 3.7),
            record("0xa2", "1", "999999999999999999", 5.21),
        ]);

        for row in &rows {
            assert!((row.cl_apy + row.el_apy - row.gross_apy).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_rewards_yield_zero_split_not_nan() {
        let rows = calculate_apys(&[record("0xa1", "0", "0", 3.0)]);

        let row = &rows[0];
        assert_eq!(row.cl_apy, 0.0);
        assert_eq!(row.el_apy, 0.0);
        assert!(!row.cl_apy.is_nan() && !row.el_apy.is_nan());
    }

    #[test]
    fn unparseable_amount_reads_as_zero() {
        assert_eq!(wei_to_eth("not-a-number"), 0.0);
        assert_eq!(wei_to_eth(""), 0.0);
    }

    #[test]
    fn overall_apys_are_arithmetic_means() {
        let rows = calculate_apys(&[
            record("0xa1", "1000000000000000000", "1000000000000000000", 3.0),
            record("0xa2", "1000000000000000000", "1000000000000000000", 5.0),
            record("0xa3", "1000000000000000000", "1000000000000000000", 2.0),
        ]);

        let summary = calculate_overall_apys(&rows);
        assert!((summary.avg_gross_apy - 10.0 / 3.0).abs() < 1e-9);
        assert!((summary.avg_cl_apy - 10.0 / 6.0).abs() < 1e-9);
        assert!((summary.avg_el_apy - 10.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn overall_apys_on_empty_table_are_zero() {
        let summary = calculate_overall_apys(&[]);
        assert_eq!(summary, ApySummary::default());
    }

    #[test]
    fn max_report_names_the_gross_apy_maximizer() {
        let rows = calculate_apys(&[
            record("0xa1", "1000000000000000000", "0", 3.0),
            record("0xa2", "1000000000000000000", "0", 5.0),
            record("0xa3", "1000000000000000000", "0", 2.0),
        ]);

        let report = get_max_apy_validators(&rows, "test cohort").unwrap();
        assert_eq!(report.gross.validator_address, "0xa2");
        assert_eq!(report.cl.validator_address, "0xa2");
    }

    #[test]
    fn max_report_keeps_first_occurrence_on_ties() {
        let rows = calculate_apys(&[
            record("0xa1", "1000000000000000000", "0", 5.0),
            record("0xa2", "1000000000000000000", "0", 5.0),
        ]);

        let report = get_max_apy_validators(&rows, "test cohort").unwrap();
        assert_eq!(report.gross.validator_address, "0xa1");
    }

    #[test]
    fn max_report_is_none_for_empty_table() {
        assert!(get_max_apy_validators(&[], "test cohort").is_none());
    }
}

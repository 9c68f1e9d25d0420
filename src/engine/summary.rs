// ==========================================
// 合作社生产记录 - 生产汇总引擎
// ==========================================
// 职责: 计算页面顶部指标卡（总产量/优质产量/活跃社员/状态分布）
// 口径: 数量按记录单位直接累加（同一页面单位一致）
// ==========================================

use crate::domain::production::{member_code_of, ProductionRecord};
use crate::domain::types::{Grade, RecordStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub record_count: usize,
    pub total_quantity: f64,
    pub grade_a_quantity: f64,
    pub grade_a_share_percent: f64, // 优质占比（0-100,1 位小数）
    pub active_farmers: usize,      // 按社员编号去重,无编号时按展示名
    pub total_value: f64,
    pub pending_count: usize,
    pub verified_count: usize,
    pub rejected_count: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, records: &[ProductionRecord]) -> ProductionSummary {
        let mut farmers = HashSet::new();
        let mut summary = ProductionSummary {
            record_count: records.len(),
            total_quantity: 0.0,
            grade_a_quantity: 0.0,
            grade_a_share_percent: 0.0,
            active_farmers: 0,
            total_value: 0.0,
            pending_count: 0,
            verified_count: 0,
            rejected_count: 0,
        };

        for record in records {
            summary.total_quantity += record.quantity.amount;
            summary.total_value += record.value.amount;
            if record.grade == Grade::A {
                summary.grade_a_quantity += record.quantity.amount;
            }
            match record.status {
                RecordStatus::Pending => summary.pending_count += 1,
                RecordStatus::Verified => summary.verified_count += 1,
                RecordStatus::Rejected => summary.rejected_count += 1,
            }
            farmers.insert(member_code_of(&record.farmer).unwrap_or(record.farmer.as_str()));
        }

        summary.active_farmers = farmers.len();
        if summary.total_quantity > 0.0 {
            let share = summary.grade_a_quantity / summary.total_quantity * 100.0;
            summary.grade_a_share_percent = (share * 10.0).round() / 10.0;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed::seed_records;

    #[test]
    fn test_summarize_seed_records() {
        let summary = SummaryEngine::new().summarize(&seed_records());

        assert_eq!(summary.record_count, 8);
        assert!((summary.total_quantity - 24.6).abs() < 1e-9);
        assert!((summary.grade_a_quantity - 13.5).abs() < 1e-9);
        assert_eq!(summary.grade_a_share_percent, 54.9);
        assert_eq!(summary.active_farmers, 8);
        assert!((summary.total_value - 32_530_000.0).abs() < 1e-6);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.verified_count, 6);
        assert_eq!(summary.rejected_count, 1);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = SummaryEngine::new().summarize(&[]);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.grade_a_share_percent, 0.0);
        assert_eq!(summary.active_farmers, 0);
    }
}

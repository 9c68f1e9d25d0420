// ==========================================
// 合作社生产记录 - 筛选引擎
// ==========================================
// 输入: 记录序列 + FilterCriteria
// 输出: 保序子序列（稳定筛选,不重排）
// 红线: 空条件 => 输出等于输入
// ==========================================

use crate::domain::criteria::FilterCriteria;
use crate::domain::production::ProductionRecord;
use tracing::instrument;

// ==========================================
// FilterEngine - 筛选引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按条件筛选,保持输入顺序
    #[instrument(skip(self, records, criteria), fields(total = records.len()))]
    pub fn filter<'a>(
        &self,
        records: &'a [ProductionRecord],
        criteria: &FilterCriteria,
    ) -> Vec<&'a ProductionRecord> {
        if criteria.is_empty() {
            return records.iter().collect();
        }

        let search_lower = criteria.search.to_lowercase();
        let matched: Vec<&ProductionRecord> = records
            .iter()
            .filter(|record| self.matches_lowered(record, &search_lower, criteria))
            .collect();

        tracing::debug!(matched = matched.len(), "筛选完成");
        matched
    }

    /// 单条记录是否满足条件（三项同时成立）
    pub fn matches(&self, record: &ProductionRecord, criteria: &FilterCriteria) -> bool {
        self.matches_lowered(record, &criteria.search.to_lowercase(), criteria)
    }

    fn matches_lowered(
        &self,
        record: &ProductionRecord,
        search_lower: &str,
        criteria: &FilterCriteria,
    ) -> bool {
        let match_search = search_lower.is_empty()
            || record.id.to_lowercase().contains(search_lower)
            || record.farmer.to_lowercase().contains(search_lower)
            || record.crop.as_str().to_lowercase().contains(search_lower);

        match_search && criteria.crop.accepts(record.crop) && criteria.grade.accepts(record.grade)
    }
}

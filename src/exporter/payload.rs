// ==========================================
// 合作社生产记录 - 导出表格载荷
// ==========================================
// 固定 9 列,列序与列名在 CSV / Excel / PDF 三种格式间一致
// 数据源: include_filters ? 当前筛选结果 : 全量仓储
// ==========================================

use crate::domain::criteria::{ExportOptions, FilterCriteria};
use crate::domain::production::ProductionRecord;
use crate::engine::filter::FilterEngine;
use serde::{Deserialize, Serialize};

/// 导出列数
pub const EXPORT_COLUMN_COUNT: usize = 9;

/// 农户列下标（CSV 中恒加引号）
pub const FARMER_COLUMN: usize = 2;

/// 导出表头; 金额列标签随币种变化
pub fn export_headers(currency: &str) -> Vec<String> {
    vec![
        "Production ID".to_string(),
        "Date".to_string(),
        "Farmer".to_string(),
        "Crop".to_string(),
        "Quantity".to_string(),
        "Grade".to_string(),
        "Warehouse".to_string(),
        format!("Value ({})", currency),
        "Status".to_string(),
    ]
}

// ==========================================
// TabularPayload - 归一化表格载荷
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularPayload {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularPayload {
    /// 由记录序列投影
    pub fn from_records<'a, I>(records: I, currency: &str) -> Self
    where
        I: IntoIterator<Item = &'a ProductionRecord>,
    {
        Self {
            headers: export_headers(currency),
            rows: records.into_iter().map(project_record).collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 单条记录 -> 9 列文本
pub fn project_record(record: &ProductionRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.date_display(),
        record.farmer.clone(),
        record.crop.to_string(),
        record.quantity.to_string(),
        record.grade.to_string(),
        record.warehouse.clone(),
        record.value.to_string(),
        record.status.to_string(),
    ]
}

/// 按导出选项选择数据源并构建载荷
///
/// # 参数
/// - records: 全量仓储记录（最新在前）
/// - criteria: 当前页面筛选条件
/// - options: 导出选项（include_filters 决定是否套用 criteria）
/// - currency: 金额列币种标签
pub fn build_payload(
    records: &[ProductionRecord],
    criteria: &FilterCriteria,
    options: &ExportOptions,
    currency: &str,
) -> TabularPayload {
    let payload = if options.include_filters {
        TabularPayload::from_records(FilterEngine::new().filter(records, criteria), currency)
    } else {
        TabularPayload::from_records(records, currency)
    };

    tracing::debug!(
        format = %options.format,
        include_filters = options.include_filters,
        rows = payload.row_count(),
        "导出载荷已构建"
    );
    payload
}

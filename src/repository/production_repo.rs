// ==========================================
// 合作社生产记录 - 生产记录仓储
// ==========================================
// 存储: 进程内有序序列（最新在前）
// 红线: 只允许头插,不允许删除
// 约束: 单写者（页面线程）,无并发控制
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::repository::seed::seed_records;

// ==========================================
// ProductionRepository - 生产记录仓储
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ProductionRepository {
    records: Vec<ProductionRecord>,
}

impl ProductionRepository {
    /// 创建空仓储
    pub fn new() -> Self {
        Self::default()
    }

    /// 以页面初始数据创建仓储（PROD001..PROD008）
    pub fn with_seed_records() -> Self {
        Self::from_records(seed_records())
    }

    /// 以给定顺序装载记录（调用方保证顺序即展示顺序）
    pub fn from_records(records: Vec<ProductionRecord>) -> Self {
        Self { records }
    }

    /// 全部记录,最新在前
    pub fn list(&self) -> &[ProductionRecord] {
        &self.records
    }

    /// 头插新记录
    pub fn add(&mut self, record: ProductionRecord) {
        tracing::debug!(record_id = %record.id, "生产记录入库");
        self.records.insert(0, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ProductionRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

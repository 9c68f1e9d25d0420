// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use agribind_production::domain::{
    Crop, Grade, MonetaryValue, ProductionInput, ProductionRecord, Quantity, RecordStatus,
};
use chrono::NaiveDate;

// ==========================================
// ProductionInput 构建器（录入表单）
// ==========================================

/// 默认值为一份合法的表单
pub struct ProductionInputBuilder {
    farmer: String,
    crop: String,
    quantity: f64,
    grade: String,
    warehouse: String,
    value: f64,
    notes: Option<String>,
}

impl ProductionInputBuilder {
    pub fn new() -> Self {
        Self {
            farmer: "Nana Addo (M009)".to_string(),
            crop: "Maize".to_string(),
            quantity: 1.0,
            grade: "Grade A".to_string(),
            warehouse: "Garoua Warehouse".to_string(),
            value: 100.0,
            notes: None,
        }
    }

    pub fn farmer(mut self, farmer: &str) -> Self {
        self.farmer = farmer.to_string();
        self
    }

    pub fn crop(mut self, crop: &str) -> Self {
        self.crop = crop.to_string();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn grade(mut self, grade: &str) -> Self {
        self.grade = grade.to_string();
        self
    }

    pub fn warehouse(mut self, warehouse: &str) -> Self {
        self.warehouse = warehouse.to_string();
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn build(self) -> ProductionInput {
        ProductionInput {
            farmer: self.farmer,
            crop: self.crop,
            quantity: self.quantity,
            grade: self.grade,
            warehouse: self.warehouse,
            value: self.value,
            notes: self.notes,
        }
    }
}

// ==========================================
// ProductionRecord 构建器（直接入库的记录）
// ==========================================

pub struct ProductionRecordBuilder {
    id: String,
    date: NaiveDate,
    farmer: String,
    crop: Crop,
    quantity: f64,
    grade: Grade,
    warehouse: String,
    value: f64,
    status: RecordStatus,
}

impl ProductionRecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            farmer: "Kwame Osei (M001)".to_string(),
            crop: Crop::Cocoa,
            quantity: 1.0,
            grade: Grade::A,
            warehouse: "Douala Warehouse".to_string(),
            value: 1_000_000.0,
            status: RecordStatus::Verified,
        }
    }

    pub fn farmer(mut self, farmer: &str) -> Self {
        self.farmer = farmer.to_string();
        self
    }

    pub fn crop(mut self, crop: Crop) -> Self {
        self.crop = crop;
        self
    }

    pub fn grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn status(mut self, status: RecordStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> ProductionRecord {
        ProductionRecord {
            id: self.id,
            date: self.date,
            farmer: self.farmer,
            crop: self.crop,
            quantity: Quantity::new(self.quantity, "MT"),
            grade: self.grade,
            warehouse: self.warehouse,
            value: MonetaryValue::new(self.value, "XAF"),
            status: self.status,
            notes: None,
        }
    }
}

/// 生成 n 条记录（PROD001..），作物与等级轮换
pub fn many_records(n: usize) -> Vec<ProductionRecord> {
    (0..n)
        .map(|i| {
            ProductionRecordBuilder::new(&format!("PROD{:03}", i + 1))
                .crop(Crop::ALL[i % Crop::ALL.len()])
                .grade(Grade::ALL[i % Grade::ALL.len()])
                .quantity(1.0 + (i % 5) as f64)
                .build()
        })
        .collect()
}

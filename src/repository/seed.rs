// ==========================================
// 合作社生产记录 - 页面初始数据
// ==========================================
// 8 条示例记录,顺序即页面展示顺序
// ==========================================

use crate::domain::production::{MonetaryValue, ProductionRecord, Quantity};
use crate::domain::types::{Crop, Grade, RecordStatus};
use chrono::NaiveDate;

/// 默认数量单位
pub const DEFAULT_QUANTITY_UNIT: &str = "MT";

/// 默认币种
pub const DEFAULT_CURRENCY: &str = "XAF";

// (id, 日, 月, 社员, 作物, 数量, 等级, 仓库, 金额, 状态)
type SeedRow = (
    &'static str,
    u32,
    u32,
    &'static str,
    Crop,
    f64,
    Grade,
    &'static str,
    f64,
    RecordStatus,
);

const SEED_ROWS: [SeedRow; 8] = [
    ("PROD001", 4, 10, "Kwame Osei (M001)", Crop::Cocoa, 2.5, Grade::A, "Douala Warehouse", 5_250_000.0, RecordStatus::Verified),
    ("PROD002", 4, 10, "Arna Boateng (M002)", Crop::Coffee, 1.8, Grade::A, "Yaoundé Warehouse", 3_960_000.0, RecordStatus::Verified),
    ("PROD003", 3, 10, "Yaw Mensah (M003)", Crop::Cocoa, 3.2, Grade::B, "Douala Warehouse", 6_080_000.0, RecordStatus::Verified),
    ("PROD004", 3, 10, "Akosua Darko (M004)", Crop::Maize, 4.5, Grade::A, "Garoua Warehouse", 2_250_000.0, RecordStatus::Pending),
    ("PROD005", 2, 10, "Kofi Asante (M005)", Crop::PalmOil, 1.2, Grade::A, "Douala Warehouse", 1_920_000.0, RecordStatus::Verified),
    ("PROD006", 2, 10, "Abena Owusu (M006)", Crop::Cotton, 5.8, Grade::B, "Garoua Warehouse", 7_540_000.0, RecordStatus::Verified),
    ("PROD007", 1, 10, "Kwabena Amoah (M007)", Crop::Cassava, 3.5, Grade::A, "Yaoundé Warehouse", 1_750_000.0, RecordStatus::Verified),
    ("PROD008", 1, 10, "Efua Agyeman (M008)", Crop::Coffee, 2.1, Grade::C, "Yaoundé Warehouse", 3_780_000.0, RecordStatus::Rejected),
];

/// 构造页面初始记录
pub fn seed_records() -> Vec<ProductionRecord> {
    SEED_ROWS
        .iter()
        .filter_map(
            |&(id, day, month, farmer, crop, quantity, grade, warehouse, value, status)| {
                let date = NaiveDate::from_ymd_opt(2024, month, day)?;
                Some(ProductionRecord {
                    id: id.to_string(),
                    date,
                    farmer: farmer.to_string(),
                    crop,
                    quantity: Quantity::new(quantity, DEFAULT_QUANTITY_UNIT),
                    grade,
                    warehouse: warehouse.to_string(),
                    value: MonetaryValue::new(value, DEFAULT_CURRENCY),
                    status,
                    notes: None,
                })
            },
        )
        .collect()
}

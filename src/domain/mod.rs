// ==========================================
// 合作社生产记录 - 领域模型层
// ==========================================
// 职责: 定义领域实体、封闭词表、页面选项
// 红线: 不含存储逻辑,不含引擎逻辑
// ==========================================

pub mod criteria;
pub mod production;
pub mod types;

// 重导出核心类型
pub use criteria::{CropSelector, ExportFormat, ExportOptions, FilterCriteria, GradeSelector};
pub use production::{
    group_thousands, member_code_of, MonetaryValue, ProductionInput, ProductionRecord, Quantity,
    DISPLAY_DATE_FORMAT,
};
pub use types::{Crop, Grade, RecordStatus, ALL_CROPS_LABEL, ALL_GRADES_LABEL};

/// 录入表单的社员选项
pub const FARMER_OPTIONS: [&str; 10] = [
    "Kwame Osei (M001)",
    "Arna Boateng (M002)",
    "Yaw Mensah (M003)",
    "Akosua Darko (M004)",
    "Kofi Asante (M005)",
    "Abena Owusu (M006)",
    "Kwabena Amoah (M007)",
    "Efua Agyeman (M008)",
    "Nana Addo (M009)",
    "Ama Serwaa (M010)",
];

/// 录入表单的仓库选项
pub const WAREHOUSE_OPTIONS: [&str; 4] = [
    "Douala Warehouse",
    "Yaoundé Warehouse",
    "Garoua Warehouse",
    "Bamenda Warehouse",
];

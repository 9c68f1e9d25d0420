// ==========================================
// 合作社生产记录 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 进程内 key-value（global scope）
// ==========================================

use crate::engine::intake::GradePolicy;
use crate::engine::paginator::DEFAULT_PAGE_SIZE;
use crate::exporter::renderer::{DEFAULT_FILE_STEM, DEFAULT_REPORT_TITLE};
use crate::repository::seed::{DEFAULT_CURRENCY, DEFAULT_QUANTITY_UNIT};
use serde_json::json;
use std::collections::HashMap;
use std::error::Error;

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "en";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置（所有键取默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从键值对创建
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// 读取配置值，带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// 写入配置值（覆盖已有值）
    pub fn set_config_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        tracing::debug!(key = %key, value = %value, "配置已更新");
        self.values.insert(key, value);
    }

    /// 删除配置值，恢复默认
    pub fn remove_config_value(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let json_value = json!(self.values);
        Ok(serde_json::to_string(&json_value)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    /// - Err: JSON 解析失败
    ///
    /// # 注意
    /// - 覆盖同名键,快照中没有的键保持不变
    pub fn restore_config_from_snapshot(
        &mut self,
        snapshot_json: &str,
    ) -> Result<usize, Box<dyn Error>> {
        let config_map: HashMap<String, String> = serde_json::from_str(snapshot_json)?;

        let count = config_map.len();
        self.values.extend(config_map);
        Ok(count)
    }

    // ===== 页面配置 =====

    /// 每页记录数（至少为 1）
    pub fn get_page_size(&self) -> usize {
        let value = self.get_config_or_default(config_keys::PAGE_SIZE, "20");
        match value.trim().parse::<usize>() {
            Ok(size) if size >= 1 => size,
            _ => {
                tracing::warn!(key = config_keys::PAGE_SIZE, value = %value, "配置值无效,使用默认值");
                DEFAULT_PAGE_SIZE
            }
        }
    }

    /// 界面语言
    pub fn get_locale(&self) -> String {
        non_blank_or_default(self, config_keys::LOCALE, DEFAULT_LOCALE)
    }

    // ===== 录入配置 =====

    /// 金额币种标签
    pub fn get_currency(&self) -> String {
        non_blank_or_default(self, config_keys::CURRENCY, DEFAULT_CURRENCY)
    }

    /// 数量单位标签
    pub fn get_quantity_unit(&self) -> String {
        non_blank_or_default(self, config_keys::QUANTITY_UNIT, DEFAULT_QUANTITY_UNIT)
    }

    /// 未知等级处理策略（STRICT | LENIENT_FALLBACK）
    pub fn get_grade_policy(&self) -> GradePolicy {
        let value = self.get_config_or_default(config_keys::GRADE_POLICY, "STRICT");
        match GradePolicy::parse(&value) {
            Some(policy) => policy,
            None => {
                tracing::warn!(key = config_keys::GRADE_POLICY, value = %value, "配置值无效,使用默认值");
                GradePolicy::Strict
            }
        }
    }

    // ===== 导出配置 =====

    /// 导出文件名主干
    pub fn get_export_filename_stem(&self) -> String {
        non_blank_or_default(self, config_keys::EXPORT_FILENAME_STEM, DEFAULT_FILE_STEM)
    }

    /// PDF 报表标题
    pub fn get_report_title(&self) -> String {
        non_blank_or_default(self, config_keys::REPORT_TITLE, DEFAULT_REPORT_TITLE)
    }
}

fn non_blank_or_default(config: &ConfigManager, key: &str, default: &str) -> String {
    match config.get_config_value(key) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        Some(value) => {
            tracing::warn!(key = key, value = %value, "配置值为空,使用默认值");
            default.to_string()
        }
        None => default.to_string(),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 页面
    pub const PAGE_SIZE: &str = "page_size";
    pub const LOCALE: &str = "locale";

    // 录入
    pub const CURRENCY: &str = "currency";
    pub const QUANTITY_UNIT: &str = "quantity_unit";
    pub const GRADE_POLICY: &str = "grade_policy";

    // 导出
    pub const EXPORT_FILENAME_STEM: &str = "export_filename_stem";
    pub const REPORT_TITLE: &str = "report_title";
}

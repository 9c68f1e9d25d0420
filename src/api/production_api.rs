// ==========================================
// 合作社生产记录 - 生产页面 API
// ==========================================
// 职责: 持有页面状态（仓储、筛选条件、当前页、导出对话框）
//       串联筛选 -> 分页 -> 录入 -> 导出,发布通知
// 红线: 渲染失败在本层捕获,发布 ExportFailed 后以错误值返回
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::export_dialog::ExportDialog;
use crate::config::config_manager::ConfigManager;
use crate::domain::criteria::{
    CropSelector, ExportFormat, ExportOptions, FilterCriteria, GradeSelector,
};
use crate::domain::production::{ProductionInput, ProductionRecord};
use crate::domain::{FARMER_OPTIONS, WAREHOUSE_OPTIONS};
use crate::engine::events::{OptionalEventPublisher, ProductionEvent, ProductionEventPublisher};
use crate::engine::filter::FilterEngine;
use crate::engine::intake::RecordIntake;
use crate::engine::paginator::{paginate, total_pages, PageCursor};
use crate::engine::summary::{ProductionSummary, SummaryEngine};
use crate::exporter::payload::{build_payload, TabularPayload};
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::renderer::{
    ExportDispatcher, ExportedFile, RenderContext, UniversalRenderer,
};
use crate::i18n;
use crate::repository::production_repo::ProductionRepository;

// ==========================================
// RecordPage - 表格当前页
// ==========================================
/// 用于前端表格展示的一页记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPage {
    pub records: Vec<ProductionRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl RecordPage {
    /// "Showing X to Y of N" 的 1 基区间,空页返回 None
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.records.len() - 1))
    }
}

// ==========================================
// ProductionApi - 生产页面 API
// ==========================================

/// 生产页面API
///
/// 职责：
/// 1. 记录查询（筛选 + 分页）
/// 2. 记录录入（校验 + 编号 + 入库）
/// 3. 导出（对话框 + 载荷 + 渲染 + 写出）
/// 4. 汇总卡片数据
pub struct ProductionApi {
    repo: ProductionRepository,
    config: ConfigManager,
    intake: RecordIntake,
    filter_engine: FilterEngine,
    summary_engine: SummaryEngine,
    renderer: Arc<dyn ExportDispatcher>,
    criteria: FilterCriteria,
    cursor: PageCursor,
    page_size: usize,
    export_dialog: ExportDialog,
    event_publisher: OptionalEventPublisher,
}

impl ProductionApi {
    /// 创建新的ProductionApi实例
    ///
    /// # 参数
    /// - repo: 生产记录仓储
    /// - config: 配置管理器（页大小、币种、等级策略、导出命名等）
    pub fn new(repo: ProductionRepository, config: ConfigManager) -> Self {
        let intake = RecordIntake::new(
            config.get_grade_policy(),
            config.get_quantity_unit(),
            config.get_currency(),
        );
        let page_size = config.get_page_size();

        Self {
            repo,
            config,
            intake,
            filter_engine: FilterEngine::new(),
            summary_engine: SummaryEngine::new(),
            renderer: Arc::new(UniversalRenderer),
            criteria: FilterCriteria::new(),
            cursor: PageCursor::new(),
            page_size,
            export_dialog: ExportDialog::new(),
            event_publisher: OptionalEventPublisher::none(),
        }
    }

    /// 以 8 条示例记录和默认配置创建
    pub fn with_seed_records() -> Self {
        Self::new(ProductionRepository::with_seed_records(), ConfigManager::new())
    }

    /// 设置事件发布者
    pub fn with_publisher(mut self, publisher: Arc<dyn ProductionEventPublisher>) -> Self {
        self.event_publisher = OptionalEventPublisher::with_publisher(publisher);
        self
    }

    /// 替换导出渲染器（默认 UniversalRenderer）
    pub fn with_renderer(mut self, renderer: Arc<dyn ExportDispatcher>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    /// 按配置切换界面语言（全局生效）
    pub fn apply_locale(&self) {
        i18n::set_locale(&self.config.get_locale());
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 全量记录（最新在前）
    pub fn records(&self) -> &[ProductionRecord] {
        self.repo.list()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// 当前筛选结果
    pub fn filtered_records(&self) -> Vec<&ProductionRecord> {
        self.filter_engine.filter(self.repo.list(), &self.criteria)
    }

    /// 当前页记录
    pub fn paginated_records(&self) -> RecordPage {
        let filtered = self.filtered_records();
        let page = paginate(&filtered, self.cursor.current(), self.page_size);

        RecordPage {
            records: page.items.iter().map(|r| (*r).clone()).collect(),
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }

    /// 筛选结果的总页数（至少为 1）
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_records().len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 修改页大小（至少为 1）,回到第 1 页
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.cursor.reset();
    }

    // ==========================================
    // 筛选（条件变化时回到第 1 页）
    // ==========================================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.cursor.reset();
    }

    /// 按下拉选项设置作物筛选（"All Crops" 或作物名）
    pub fn set_crop_filter(&mut self, label: &str) -> ApiResult<()> {
        let selector = CropSelector::parse(label)
            .ok_or_else(|| ApiError::InvalidInput(format!("未知作物选项: {}", label)))?;
        self.criteria.crop = selector;
        self.cursor.reset();
        Ok(())
    }

    /// 按下拉选项设置等级筛选（"All Grades" 或 "Grade A" 等）
    pub fn set_grade_filter(&mut self, label: &str) -> ApiResult<()> {
        let selector = GradeSelector::parse(label)
            .ok_or_else(|| ApiError::InvalidInput(format!("未知等级选项: {}", label)))?;
        self.criteria.grade = selector;
        self.cursor.reset();
        Ok(())
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.cursor.reset();
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::new());
    }

    // ==========================================
    // 翻页（夹紧在 [1, total_pages]）
    // ==========================================

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.cursor.next(total)
    }

    pub fn previous_page(&mut self) -> bool {
        self.cursor.previous()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.cursor.go_to(page, total);
    }

    // ==========================================
    // 录入
    // ==========================================

    /// 提交录入表单（记录日期取本地当天）
    pub fn submit_record(&mut self, input: &ProductionInput) -> ApiResult<ProductionRecord> {
        self.submit_record_at(input, Local::now().date_naive())
    }

    /// 提交录入表单（指定记录日期）
    ///
    /// 成功: 记录插入仓储头部,发布 RecordAdded
    /// 失败: 返回字段级 ValidationError,仓储不变
    #[instrument(skip(self, input), fields(store_len = self.repo.len()))]
    pub fn submit_record_at(
        &mut self,
        input: &ProductionInput,
        date: NaiveDate,
    ) -> ApiResult<ProductionRecord> {
        let record = self.intake.submit(input, self.repo.len(), date)?;

        self.repo.add(record.clone());
        info!(record_id = %record.id, crop = %record.crop, "生产记录已添加");

        self.event_publisher.publish(ProductionEvent::RecordAdded {
            record_id: record.id.clone(),
        });
        Ok(record)
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出将包含的记录数
    pub fn export_record_count(&self, include_filters: bool) -> usize {
        if include_filters {
            self.filtered_records().len()
        } else {
            self.repo.len()
        }
    }

    /// 构建导出载荷
    pub fn build_export_payload(&self, options: &ExportOptions) -> TabularPayload {
        build_payload(
            self.repo.list(),
            &self.criteria,
            options,
            &self.config.get_currency(),
        )
    }

    /// 导出（生成时间取本地当前时间）
    pub fn export(&self, options: &ExportOptions) -> ApiResult<ExportedFile> {
        self.export_at(options, Local::now().naive_local())
    }

    /// 导出为指定格式的文件
    ///
    /// 成功: 发布 ExportCompleted
    /// 渲染失败: 发布 ExportFailed,返回 ApiError::ExportRender
    #[instrument(skip(self), fields(format = %options.format))]
    pub fn export_at(
        &self,
        options: &ExportOptions,
        generated_at: NaiveDateTime,
    ) -> ApiResult<ExportedFile> {
        match self.render_at(options, generated_at) {
            Ok(file) => {
                self.publish_completed(&file);
                Ok(file)
            }
            Err(e) => Err(self.publish_failed(options.format, e)),
        }
    }

    /// 导出并写入目录,返回文件路径
    pub fn export_to_dir<P: AsRef<Path>>(
        &self,
        options: &ExportOptions,
        dir: P,
    ) -> ApiResult<PathBuf> {
        self.export_to_dir_at(options, dir, Local::now().naive_local())
    }

    /// 导出并写入目录
    ///
    /// 文件写出成功后才发布 ExportCompleted; 渲染或写出失败均发布 ExportFailed
    #[instrument(skip(self, dir), fields(format = %options.format))]
    pub fn export_to_dir_at<P: AsRef<Path>>(
        &self,
        options: &ExportOptions,
        dir: P,
        generated_at: NaiveDateTime,
    ) -> ApiResult<PathBuf> {
        let written = self
            .render_at(options, generated_at)
            .and_then(|file| file.write_to_dir(dir).map(|path| (file, path)));

        match written {
            Ok((file, path)) => {
                self.publish_completed(&file);
                Ok(path)
            }
            Err(e) => Err(self.publish_failed(options.format, e)),
        }
    }

    /// 构建载荷并渲染,不发布通知
    fn render_at(
        &self,
        options: &ExportOptions,
        generated_at: NaiveDateTime,
    ) -> ExportResult<ExportedFile> {
        let payload = self.build_export_payload(options);
        let ctx = self.render_context(generated_at);
        self.renderer.export(options.format, &payload, &ctx)
    }

    fn publish_completed(&self, file: &ExportedFile) {
        info!(
            file_name = %file.file_name,
            rows = file.row_count,
            bytes = file.bytes.len(),
            "导出完成"
        );
        self.event_publisher.publish(ProductionEvent::ExportCompleted {
            format: file.format,
            file_name: file.file_name.clone(),
            row_count: file.row_count,
        });
    }

    fn publish_failed(&self, format: ExportFormat, e: ExportError) -> ApiError {
        error!(error = %e, "导出失败");
        self.event_publisher.publish(ProductionEvent::ExportFailed {
            format,
            reason: e.to_string(),
        });
        ApiError::ExportRender(e)
    }

    fn render_context(&self, generated_at: NaiveDateTime) -> RenderContext {
        RenderContext::new(generated_at)
            .with_file_stem(self.config.get_export_filename_stem())
            .with_title(self.config.get_report_title())
    }

    // ==========================================
    // 导出对话框
    // ==========================================

    pub fn open_export_dialog(&mut self) {
        self.export_dialog.open();
    }

    pub fn close_export_dialog(&mut self) {
        self.export_dialog.close();
    }

    pub fn export_dialog(&self) -> &ExportDialog {
        &self.export_dialog
    }

    pub fn export_dialog_mut(&mut self) -> &mut ExportDialog {
        &mut self.export_dialog
    }

    /// 确认导出对话框
    ///
    /// # 返回
    /// - Ok(None): 未选择格式,不导出
    /// - Ok(Some(file)): 导出完成
    /// - Err: 渲染失败
    pub fn confirm_export(&mut self) -> ApiResult<Option<ExportedFile>> {
        self.confirm_export_at(Local::now().naive_local())
    }

    pub fn confirm_export_at(
        &mut self,
        generated_at: NaiveDateTime,
    ) -> ApiResult<Option<ExportedFile>> {
        match self.export_dialog.confirm() {
            Some(options) => self.export_at(&options, generated_at).map(Some),
            None => {
                let hint = self.export_dialog.blocking_message().unwrap_or_default();
                debug!(hint = %hint, "未选择导出格式,忽略确认");
                Ok(None)
            }
        }
    }

    // ==========================================
    // 汇总与下拉选项
    // ==========================================

    pub fn summary(&self) -> ProductionSummary {
        self.summary_engine.summarize(self.repo.list())
    }

    pub fn crop_options(&self) -> Vec<&'static str> {
        CropSelector::options()
    }

    pub fn grade_options(&self) -> Vec<&'static str> {
        GradeSelector::options()
    }

    pub fn farmer_options(&self) -> &'static [&'static str] {
        &FARMER_OPTIONS
    }

    pub fn warehouse_options(&self) -> &'static [&'static str] {
        &WAREHOUSE_OPTIONS
    }

    pub fn export_format_options(&self) -> &'static [ExportFormat] {
        &ExportFormat::ALL
    }
}

// ==========================================
// ProductionApi 集成测试
// ==========================================
// 测试范围:
// 1. 查询: 筛选 + 分页 + 翻页夹紧
// 2. 录入: 校验失败 / 成功入库 / 通知
// 3. 导出: 对话框 + 数据源选择 + 通知
// 4. 配置: 页大小 / 等级策略
// ==========================================

mod helpers;

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use agribind_production::api::{ApiError, ProductionApi};
use agribind_production::config::{config_keys, ConfigManager};
use agribind_production::domain::{ExportFormat, ExportOptions, Grade, RecordStatus};
use agribind_production::engine::{ChannelEventPublisher, IntakeField, ProductionEvent};
use agribind_production::exporter::{
    ExportDispatcher, ExportError, ExportResult, ExportedFile, RenderContext, TabularPayload,
};
use agribind_production::repository::ProductionRepository;
use chrono::NaiveDate;
use helpers::test_data_builder::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
}

fn seeded_with_channel() -> (ProductionApi, Receiver<ProductionEvent>) {
    let (publisher, rx) = ChannelEventPublisher::channel();
    let api = ProductionApi::with_seed_records().with_publisher(Arc::new(publisher));
    (api, rx)
}

/// 总是渲染失败的渲染器
struct BrokenRenderer;

impl ExportDispatcher for BrokenRenderer {
    fn export(
        &self,
        _format: ExportFormat,
        _payload: &TabularPayload,
        _ctx: &RenderContext,
    ) -> ExportResult<ExportedFile> {
        Err(ExportError::PdfRenderError("font table missing".to_string()))
    }
}

fn ids(api: &ProductionApi) -> Vec<String> {
    api.filtered_records().iter().map(|r| r.id.clone()).collect()
}

// ==========================================
// 查询测试
// ==========================================

#[test]
fn test_initial_page_正常查询() {
    let api = ProductionApi::with_seed_records();

    let page = api.paginated_records();
    assert_eq!(page.records.len(), 8);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.display_range(), Some((1, 8)));
    assert_eq!(page.records[0].id, "PROD001");
    assert_eq!(page.records[7].id, "PROD008");
}

#[test]
fn test_search_matches_id_farmer_crop() {
    let mut api = ProductionApi::with_seed_records();

    api.set_search("KWAME");
    assert_eq!(ids(&api), vec!["PROD001"]);

    api.set_search("cocoa");
    assert_eq!(ids(&api), vec!["PROD001", "PROD003"]);

    api.set_search("prod00");
    assert_eq!(ids(&api).len(), 8);

    api.set_search("no such thing");
    assert!(api.filtered_records().is_empty());
    assert_eq!(api.total_pages(), 1);
    assert_eq!(api.paginated_records().display_range(), None);
}

#[test]
fn test_selectors_combine() {
    let mut api = ProductionApi::with_seed_records();

    api.set_crop_filter("Coffee").unwrap();
    assert_eq!(ids(&api), vec!["PROD002", "PROD008"]);

    api.set_grade_filter("Grade A").unwrap();
    assert_eq!(ids(&api), vec!["PROD002"]);

    api.clear_filters();
    assert_eq!(ids(&api).len(), 8);
}

#[test]
fn test_paging_clamps_at_boundaries() {
    let config = ConfigManager::from_pairs([(config_keys::PAGE_SIZE, "3")]);
    let mut api = ProductionApi::new(ProductionRepository::with_seed_records(), config);

    assert_eq!(api.total_pages(), 3);
    assert!(!api.previous_page());
    assert_eq!(api.current_page(), 1);

    api.go_to_page(99);
    assert_eq!(api.current_page(), 3);
    let last = api.paginated_records();
    assert_eq!(last.records.len(), 2);
    assert_eq!(last.display_range(), Some((7, 8)));

    assert!(!api.next_page());
    assert!(api.previous_page());
    assert_eq!(api.paginated_records().records[0].id, "PROD004");
}

// ==========================================
// 录入测试
// ==========================================

#[test]
fn test_submit_empty_farmer_仅报告农户字段() {
    let (mut api, rx) = seeded_with_channel();
    let input = ProductionInputBuilder::new().farmer("").build();

    let result = api.submit_record_at(&input, today());
    match result {
        Err(ApiError::Validation(err)) => {
            assert_eq!(err.fields(), vec![IntakeField::Farmer]);
        }
        other => panic!("Expected Validation, got {:?}", other),
    }

    assert_eq!(api.records().len(), 8);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_reports_every_invalid_field() {
    let mut api = ProductionApi::with_seed_records();
    let input = ProductionInputBuilder::new()
        .farmer(" ")
        .crop("")
        .quantity(0.0)
        .grade("")
        .warehouse("")
        .value(f64::NAN)
        .build();

    let err = match api.submit_record_at(&input, today()) {
        Err(ApiError::Validation(err)) => err,
        other => panic!("Expected Validation, got {:?}", other),
    };
    assert_eq!(
        err.fields(),
        vec![
            IntakeField::Farmer,
            IntakeField::Crop,
            IntakeField::Quantity,
            IntakeField::Grade,
            IntakeField::Warehouse,
            IntakeField::Value,
        ]
    );
}

#[test]
fn test_submit_valid_maize_正常入库() {
    let (mut api, rx) = seeded_with_channel();
    let input = ProductionInputBuilder::new()
        .farmer("F")
        .crop("Maize")
        .quantity(1.0)
        .grade("Grade A")
        .warehouse("W")
        .value(100.0)
        .notes("  dry season  ")
        .build();

    let record = api.submit_record_at(&input, today()).unwrap();

    assert_eq!(record.id, "PROD009");
    assert_eq!(record.status, RecordStatus::Pending);
    assert_eq!(record.grade_class(), "grade-a");
    assert_eq!(record.date_display(), "05/10/2024");
    assert_eq!(record.quantity.to_string(), "1 MT");
    assert_eq!(record.value.to_string(), "100 XAF");
    assert_eq!(record.notes.as_deref(), Some("dry season"));

    // 新记录排在最前
    assert_eq!(api.records().len(), 9);
    assert_eq!(api.records()[0].id, "PROD009");
    assert_eq!(api.paginated_records().records[0].id, "PROD009");

    assert_eq!(
        rx.try_recv().unwrap(),
        ProductionEvent::RecordAdded {
            record_id: "PROD009".to_string()
        }
    );
}

#[test]
fn test_unknown_grade_follows_configured_policy() {
    let mut strict = ProductionApi::with_seed_records();
    let input = ProductionInputBuilder::new().grade("Premium").build();
    match strict.submit_record_at(&input, today()) {
        Err(ApiError::Validation(err)) => assert_eq!(err.fields(), vec![IntakeField::Grade]),
        other => panic!("Expected Validation, got {:?}", other),
    }

    let config = ConfigManager::from_pairs([(config_keys::GRADE_POLICY, "LENIENT_FALLBACK")]);
    let mut lenient = ProductionApi::new(ProductionRepository::with_seed_records(), config);
    let record = lenient.submit_record_at(&input, today()).unwrap();
    assert_eq!(record.grade, Grade::C);
    assert_eq!(record.grade_class(), "grade-c");
}

#[test]
fn test_summary_tracks_new_records() {
    let mut api = ProductionApi::with_seed_records();
    let before = api.summary();
    assert_eq!(before.record_count, 8);
    assert_eq!(before.pending_count, 1);

    let input = ProductionInputBuilder::new().quantity(2.0).build();
    api.submit_record_at(&input, today()).unwrap();

    let after = api.summary();
    assert_eq!(after.record_count, 9);
    assert_eq!(after.pending_count, 2);
    assert_eq!(after.active_farmers, 9);
    assert!((after.total_quantity - 26.6).abs() < 1e-9);
}

// ==========================================
// 导出测试
// ==========================================

#[test]
fn test_export_filtered_csv_发布完成通知() {
    let (mut api, rx) = seeded_with_channel();
    api.set_crop_filter("Cocoa").unwrap();

    let at = today().and_hms_opt(8, 5, 0).unwrap();
    let file = api
        .export_at(&ExportOptions::new(ExportFormat::Csv, true), at)
        .unwrap();

    assert_eq!(file.file_name, "production-data_20241005_0805.csv");
    assert_eq!(file.mime_type, "text/csv;charset=utf-8");
    assert_eq!(file.row_count, 2);
    assert_eq!(api.export_record_count(true), 2);
    assert_eq!(api.export_record_count(false), 8);

    assert_eq!(
        rx.try_recv().unwrap(),
        ProductionEvent::ExportCompleted {
            format: ExportFormat::Csv,
            file_name: "production-data_20241005_0805.csv".to_string(),
            row_count: 2,
        }
    );
}

#[test]
fn test_export_dialog_flow() {
    let mut api = ProductionApi::with_seed_records();
    api.set_grade_filter("Grade B").unwrap();
    let at = today().and_hms_opt(16, 45, 0).unwrap();

    // 未选择格式: 不导出
    api.open_export_dialog();
    assert!(!api.export_dialog().can_export());
    assert!(api.confirm_export_at(at).unwrap().is_none());

    // 取消勾选筛选: 导出全量
    api.export_dialog_mut().select_format(ExportFormat::Spreadsheet);
    api.export_dialog_mut().set_include_filters(false);
    let file = api.confirm_export_at(at).unwrap().unwrap();
    assert_eq!(file.file_name, "production-data_20241005_1645.xlsx");
    assert_eq!(file.row_count, 8);
    assert!(!api.export_dialog().is_open());

    // 重新打开时恢复默认（仅导出筛选结果）
    api.open_export_dialog();
    api.export_dialog_mut().select_format(ExportFormat::Document);
    let file = api.confirm_export_at(at).unwrap().unwrap();
    assert_eq!(file.row_count, 2);
    assert!(file.bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_to_dir_writes_file() {
    let temp = tempfile::tempdir().unwrap();
    let api = ProductionApi::with_seed_records();

    let path = api
        .export_to_dir(&ExportOptions::new(ExportFormat::Csv, false), temp.path())
        .unwrap();

    assert!(path.starts_with(temp.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.split('\n').count(), 9);
}

#[test]
fn test_render_failure_发布失败通知() {
    let (api, rx) = seeded_with_channel();
    let api = api.with_renderer(Arc::new(BrokenRenderer));
    let at = today().and_hms_opt(9, 0, 0).unwrap();

    let result = api.export_at(&ExportOptions::new(ExportFormat::Document, true), at);
    match result {
        Err(ApiError::ExportRender(ExportError::PdfRenderError(reason))) => {
            assert_eq!(reason, "font table missing")
        }
        other => panic!("Expected ExportRender, got {:?}", other),
    }

    let events: Vec<ProductionEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ProductionEvent::ExportFailed { format, reason } => {
            assert_eq!(*format, ExportFormat::Document);
            assert!(reason.contains("font table missing"));
        }
        other => panic!("Expected ExportFailed, got {:?}", other),
    }
    assert!(!events
        .iter()
        .any(|e| matches!(e, ProductionEvent::ExportCompleted { .. })));
}

#[test]
fn test_confirm_export_render_failure_returns_error() {
    let (api, rx) = seeded_with_channel();
    let mut api = api.with_renderer(Arc::new(BrokenRenderer));
    let at = today().and_hms_opt(9, 0, 0).unwrap();

    api.open_export_dialog();
    api.export_dialog_mut().select_format(ExportFormat::Csv);
    assert!(matches!(
        api.confirm_export_at(at),
        Err(ApiError::ExportRender(_))
    ));
    assert!(matches!(
        rx.try_recv().unwrap(),
        ProductionEvent::ExportFailed {
            format: ExportFormat::Csv,
            ..
        }
    ));
}

#[test]
fn test_export_to_dir_write_failure_不发布完成通知() {
    let temp = tempfile::tempdir().unwrap();
    let not_a_dir = temp.path().join("exports.txt");
    std::fs::write(&not_a_dir, b"occupied").unwrap();

    let (api, rx) = seeded_with_channel();
    let at = today().and_hms_opt(10, 15, 0).unwrap();
    let result = api.export_to_dir_at(
        &ExportOptions::new(ExportFormat::Csv, false),
        &not_a_dir,
        at,
    );

    assert!(matches!(
        result,
        Err(ApiError::ExportRender(ExportError::ExportDirUnavailable(_)))
    ));
    let events: Vec<ProductionEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        ProductionEvent::ExportFailed {
            format: ExportFormat::Csv,
            ..
        }
    ));
    assert_eq!(std::fs::read(&not_a_dir).unwrap(), b"occupied");
}

#[test]
fn test_export_to_dir_publishes_completion_after_write() {
    let temp = tempfile::tempdir().unwrap();
    let (api, rx) = seeded_with_channel();
    let at = today().and_hms_opt(10, 15, 0).unwrap();

    let path = api
        .export_to_dir_at(&ExportOptions::new(ExportFormat::Csv, false), temp.path(), at)
        .unwrap();

    assert!(path.exists());
    let events: Vec<ProductionEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![ProductionEvent::ExportCompleted {
            format: ExportFormat::Csv,
            file_name: "production-data_20241005_1015.csv".to_string(),
            row_count: 8,
        }]
    );
}

#[test]
fn test_option_lists() {
    let api = ProductionApi::with_seed_records();
    assert_eq!(api.crop_options()[0], "All Crops");
    assert_eq!(api.crop_options().len(), 7);
    assert_eq!(api.grade_options(), vec!["All Grades", "Grade A", "Grade B", "Grade C"]);
    assert_eq!(api.farmer_options().len(), 10);
    assert_eq!(api.warehouse_options().len(), 4);
    assert_eq!(api.export_format_options().len(), 3);
}

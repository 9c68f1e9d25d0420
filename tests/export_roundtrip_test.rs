// ==========================================
// 导出格式集成测试
// ==========================================
// 测试范围:
// 1. CSV: 行数、引号规则、csv 解析回读
// 2. Excel: calamine 回读工作表与单元格
// 3. PDF: 文件头、分页
// 4. 写出目录 + 按扩展名回读
// ==========================================

mod helpers;

use std::io::Cursor;

use agribind_production::domain::{ExportFormat, ExportOptions, FilterCriteria};
use agribind_production::exporter::xlsx_renderer::SHEET_NAME;
use agribind_production::exporter::{
    build_payload, CsvPayloadReader, CsvRenderer, ExportError, ExportRenderer,
    ExcelPayloadReader, RenderContext, TabularPayload, UniversalPayloadReader,
    UniversalRenderer,
};
use agribind_production::repository::seed_records;
use calamine::{Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use helpers::test_data_builder::*;

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn full_payload() -> TabularPayload {
    build_payload(
        &seed_records(),
        &FilterCriteria::new(),
        &ExportOptions::new(ExportFormat::Csv, false),
        "XAF",
    )
}

// ==========================================
// CSV
// ==========================================

#[test]
fn test_csv_all_farmers_quoted() {
    let text = CsvRenderer.render_text(&full_payload());
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 9);
    for (line, record) in lines[1..].iter().zip(seed_records()) {
        assert!(
            line.contains(&format!(",\"{}\",", record.farmer)),
            "farmer not quoted: {}",
            line
        );
    }
}

#[test]
fn test_csv_parses_back_with_csv_crate() {
    let ctx = RenderContext::new(generated_at());
    let file = UniversalRenderer
        .export(ExportFormat::Csv, &full_payload(), &ctx)
        .unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file.bytes.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 9);
    assert_eq!(&headers[7], "Value (XAF)");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.len() == 9));
    assert_eq!(&rows[0][2], "Kwame Osei (M001)");
    assert_eq!(&rows[0][7], "5,250,000 XAF");
}

#[test]
fn test_csv_escapes_embedded_quotes() {
    let record = ProductionRecordBuilder::new("PROD001")
        .farmer("Kojo \"Big\" Mensah (M011)")
        .build();
    let payload = TabularPayload::from_records(&[record], "XAF");
    let text = CsvRenderer.render_text(&payload);

    assert!(text.contains("\"Kojo \"\"Big\"\" Mensah (M011)\""));
    let parsed = CsvPayloadReader.read(text.as_bytes()).unwrap();
    assert_eq!(parsed.rows[0][2], "Kojo \"Big\" Mensah (M011)");
}

// ==========================================
// Excel
// ==========================================

#[test]
fn test_xlsx_readable_by_calamine() {
    let ctx = RenderContext::new(generated_at());
    let file = UniversalRenderer
        .export(ExportFormat::Spreadsheet, &full_payload(), &ctx)
        .unwrap();
    assert_eq!(file.file_name, "production-data_20241005_1000.xlsx");

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(file.bytes.clone())).unwrap();
    assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);

    let range = workbook.worksheet_range(SHEET_NAME).unwrap();
    assert_eq!(range.height(), 9);
    assert_eq!(range.width(), 9);

    let parsed = ExcelPayloadReader.read(&file.bytes).unwrap();
    assert_eq!(parsed, full_payload());
}

// ==========================================
// PDF
// ==========================================

#[test]
fn test_pdf_document_for_large_dataset() {
    let payload = TabularPayload::from_records(&many_records(150), "XAF");
    let ctx = RenderContext::new(generated_at()).with_title("Coop Harvest Report");

    let file = UniversalRenderer
        .export(ExportFormat::Document, &payload, &ctx)
        .unwrap();

    assert_eq!(file.mime_type, "application/pdf");
    assert_eq!(file.row_count, 150);
    assert!(file.bytes.starts_with(b"%PDF-"));
}

// ==========================================
// 写出与回读
// ==========================================

#[test]
fn test_written_files_read_back_by_extension() {
    let temp = tempfile::tempdir().unwrap();
    let ctx = RenderContext::new(generated_at());
    let payload = full_payload();

    for format in [ExportFormat::Csv, ExportFormat::Spreadsheet] {
        let path = UniversalRenderer
            .export(format, &payload, &ctx)
            .unwrap()
            .write_to_dir(temp.path())
            .unwrap();

        let parsed = UniversalPayloadReader.read_file(&path).unwrap();
        assert_eq!(parsed.column_count(), 9);
        assert_eq!(parsed.row_count(), 8);
    }

    let pdf_path = UniversalRenderer
        .export(ExportFormat::Document, &payload, &ctx)
        .unwrap()
        .write_to_dir(temp.path())
        .unwrap();
    assert!(matches!(
        UniversalPayloadReader.read_file(&pdf_path),
        Err(ExportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_renderer_trait_reports_format() {
    assert_eq!(CsvRenderer.format(), ExportFormat::Csv);
    let file = CsvRenderer
        .export(&full_payload(), &RenderContext::new(generated_at()))
        .unwrap();
    assert_eq!(file.format, ExportFormat::Csv);
    assert_eq!(file.row_count, 8);
}

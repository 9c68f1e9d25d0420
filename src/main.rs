// ==========================================
// 合作社生产记录 - 命令行入口
// ==========================================
// 用法:
//   agribind-production [output_dir] [--json-log]
//
// 以 8 条示例记录初始化页面,打印汇总与首页,
// 并将全量数据导出为 CSV / Excel / PDF 到 output_dir（默认下载目录）
// ==========================================

use agribind_production::exporter::default_export_dir;
use agribind_production::{logging, ExportFormat, ExportOptions, ProductionApi};
use anyhow::Context;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--json-log") {
        logging::init_json();
    } else {
        logging::init();
    }

    let output_dir = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(default_export_dir);

    tracing::info!("==================================================");
    tracing::info!("{}", agribind_production::APP_NAME);
    tracing::info!("系统版本: {}", agribind_production::VERSION);
    tracing::info!("==================================================");

    let api = ProductionApi::with_seed_records();
    api.apply_locale();

    let summary = api.summary();
    println!(
        "Records: {} | Total: {:.1} MT | Grade A: {:.1} MT ({:.1}%) | Active farmers: {}",
        summary.record_count,
        summary.total_quantity,
        summary.grade_a_quantity,
        summary.grade_a_share_percent,
        summary.active_farmers
    );

    let page = api.paginated_records();
    for record in &page.records {
        println!(
            "{:<8} {:<11} {:<24} {:<9} {:>8} {:<8} {:<20} {:>15} {}",
            record.id,
            record.date_display(),
            record.farmer,
            record.crop,
            record.quantity,
            record.grade,
            record.warehouse,
            record.value,
            record.status
        );
    }
    if let Some((first, last)) = page.display_range() {
        println!(
            "Showing {} to {} of {} entries (page {} of {})",
            first, last, page.total_items, page.page, page.total_pages
        );
    }

    for format in ExportFormat::ALL {
        let path = api
            .export_to_dir(&ExportOptions::new(format, false), &output_dir)
            .with_context(|| format!("{} 导出到 {} 失败", format, output_dir.display()))?;
        println!("{} -> {}", format, path.display());
    }

    Ok(())
}

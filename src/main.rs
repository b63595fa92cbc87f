use imperfection_inspector::inspection::{Inspector, InspectorConfig};
use imperfection_inspector::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let filenames: Vec<String> = std::env::args().skip(1).collect();

    let config = InspectorConfig::builder()
        .worker_count(16)
        .min_imperfection_area(30)
        .max_imperfection_area(100)
        .debug_mode(std::env::var_os("INSPECTOR_DEBUG").is_some())
        .build();

    logger::init(config.debug_mode);

    info!("Starting imperfection inspector...");
    info!("Workers: {}", config.worker_count);
    info!(
        "Imperfection area: {}..={}",
        config.min_imperfection_area, config.max_imperfection_area
    );
    info!("Mask threshold: {}", config.mask_threshold);

    let inspector = Inspector::new(config)?;

    match inspector.run(&filenames) {
        Ok(report) => info!(
            "Inspection finished: {} succeeded, {} failed, {} defects",
            report.succeeded(),
            report.failed(),
            report.total_defects()
        ),
        Err(e) => error!("Inspection aborted: {}", e),
    }

    Ok(())
}

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumade_engine::config::Config;
use resumade_engine::export::{export_file_name, render_text, write_pdf};
use resumade_engine::layout::{layout, HelveticaMeasurer, PageGeometry};
use resumade_engine::models::resume::ResumeDocument;
use resumade_engine::store::{JsonFileStore, ResumeStore};
use resumade_engine::validation::validate;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resumade_engine={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resumade v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonFileStore::new(&config.data_dir)?;
    let doc = match store.load()? {
        Some(doc) => {
            info!("Loaded résumé from the store slot");
            doc
        }
        None => {
            info!("Store slot empty; seeding it with the sample résumé");
            let doc = ResumeDocument::sample();
            store.save(&doc)?;
            doc
        }
    };

    // Export is blocked on validation issues, exactly like the download
    // button; the preview path below would render them regardless.
    let report = validate(&doc);
    if !report.is_empty() {
        for (field, issue) in &report {
            warn!(field = %field, kind = ?issue.kind, "{}", issue.message);
        }
        anyhow::bail!(
            "résumé has {} validation issue(s); fix them and re-run",
            report.len()
        );
    }

    let geometry = PageGeometry::default();
    let result = layout(&doc, &config.style(), &HelveticaMeasurer, &geometry)?;
    info!(
        instructions = result.instructions.len(),
        end_cursor = f64::from(result.metrics.end_cursor),
        "Layout complete"
    );
    if result.metrics.end_cursor > geometry.page_height - geometry.margin {
        warn!("content runs past the page bottom; consider trimming a section");
    }

    print!("{}", render_text(&result.instructions));

    let bytes = write_pdf(&result.instructions, &geometry)?;
    let out_path = config
        .out_path
        .clone()
        .unwrap_or_else(|| export_file_name(&doc.personal.name));
    std::fs::write(&out_path, &bytes)?;
    info!(path = %out_path, bytes = bytes.len(), "Wrote PDF artifact");

    Ok(())
}

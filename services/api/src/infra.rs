use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use traitharbor::quiz::{CatalogError, QuizCatalog};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Bundled data unless an operator directory is configured.
pub(crate) fn load_catalog(data_dir: Option<&Path>) -> Result<QuizCatalog, CatalogError> {
    let catalog = match data_dir {
        Some(dir) => QuizCatalog::from_dir(dir)?,
        None => QuizCatalog::standard()?,
    };
    let source = data_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    info!(
        facets = catalog.facets().len(),
        %source,
        "quiz catalog loaded"
    );
    Ok(catalog)
}

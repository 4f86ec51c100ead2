use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use std::time::Duration;

use crate::models::DocumentKind;

/// Métricas del servicio. Cada estado tiene su propio `Registry`; el
/// endpoint `/metrics` lo expone junto al registro global del proceso.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    documents_generated: IntCounterVec,
    render_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let documents_generated = IntCounterVec::new(
            Opts::new("documents_generated_total", "Documentos generados"),
            &["kind"],
        )?;
        let render_seconds = HistogramVec::new(
            HistogramOpts::new("document_render_seconds", "Tiempo de renderizado")
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]),
            &["kind"],
        )?;

        registry.register(Box::new(documents_generated.clone()))?;
        registry.register(Box::new(render_seconds.clone()))?;

        Ok(Metrics {
            registry,
            documents_generated,
            render_seconds,
        })
    }

    pub fn record(&self, kind: DocumentKind, elapsed: Duration) {
        self.documents_generated
            .with_label_values(&[kind.as_str()])
            .inc();
        self.render_seconds
            .with_label_values(&[kind.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    pub fn generated(&self, kind: DocumentKind) -> u64 {
        self.documents_generated
            .with_label_values(&[kind.as_str()])
            .get()
    }

    pub fn gather(&self) -> Vec<prometheus::proto::MetricFamily> {
        let mut families = prometheus::gather();
        families.extend(self.registry.gather());
        families
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_per_kind() {
        let metrics = Metrics::new().unwrap();
        metrics.record(DocumentKind::Invoice, Duration::from_millis(12));
        metrics.record(DocumentKind::Invoice, Duration::from_millis(3));
        metrics.record(DocumentKind::Receipt, Duration::from_millis(8));

        assert_eq!(metrics.generated(DocumentKind::Invoice), 2);
        assert_eq!(metrics.generated(DocumentKind::Receipt), 1);

        let names: Vec<_> = metrics
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"documents_generated_total".to_string()));
        assert!(names.contains(&"document_render_seconds".to_string()));
    }
}

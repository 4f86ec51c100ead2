use std::num::NonZeroU32;
use std::sync::Arc;
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DashMapStateStore};

use crate::core::AppConfig;
use crate::generators::DocumentAssembler;
use crate::renderers::{FontCandidates, RendererRegistry};
use super::form::FormPage;
use super::metrics::Metrics;

pub type KeyedRateLimiter = Arc<RateLimiter<String, DashMapStateStore<String>, DefaultClock>>;

#[derive(Clone)]
pub struct ApiState {
    pub assembler: Arc<DocumentAssembler>,
    pub form: Arc<FormPage>,
    pub rate_limiter: KeyedRateLimiter,
    pub metrics: Metrics,
    pub config: Arc<AppConfig>,
}

impl ApiState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        // Renderizadores
        let fonts = FontCandidates::from_config(&config.fonts);
        let registry = Arc::new(RendererRegistry::new(fonts));
        let assembler = Arc::new(DocumentAssembler::new(registry));

        let form = Arc::new(FormPage::new()?);
        let metrics = Metrics::new()?;

        // Rate limiter por IP
        let per_minute = NonZeroU32::new(config.security.rate_limit_per_minute)
            .ok_or_else(|| anyhow::anyhow!("rate_limit_per_minute debe ser mayor que cero"))?;
        let burst = NonZeroU32::new(config.security.rate_limit_burst)
            .ok_or_else(|| anyhow::anyhow!("rate_limit_burst debe ser mayor que cero"))?;
        let quota = Quota::per_minute(per_minute).allow_burst(burst);
        let rate_limiter = Arc::new(RateLimiter::dashmap_with_clock(quota, &DefaultClock::default()));

        tracing::info!(
            formats = ?assembler.registry().list(),
            api_key_required = config.required_api_key().is_some(),
            "Estado de la API inicializado"
        );

        Ok(ApiState {
            assembler,
            form,
            rate_limiter,
            metrics,
            config: Arc::new(config),
        })
    }
}

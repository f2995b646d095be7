use plmnscope_application::ports::HostResolver;
use plmnscope_domain::config::{ResolverConfig, ResolverMode};
use plmnscope_infrastructure::resolver::{SystemHostResolver, UpstreamHostResolver};
use std::sync::Arc;
use tracing::info;

pub fn build_resolver(cfg: &ResolverConfig) -> anyhow::Result<Arc<dyn HostResolver>> {
    let resolver: Arc<dyn HostResolver> = match cfg.mode {
        ResolverMode::System => Arc::new(SystemHostResolver::new()),
        ResolverMode::Upstream => {
            let servers = cfg
                .parsed_upstream_servers()
                .map_err(|e| anyhow::anyhow!(e))?;
            Arc::new(UpstreamHostResolver::new(servers))
        }
    };

    info!(
        mode = cfg.mode.as_str(),
        concurrency = cfg.concurrency,
        max_in_flight = cfg.max_in_flight,
        timeout_secs = cfg.timeout_secs,
        "Host resolver ready"
    );

    Ok(resolver)
}

use nexus_backend::{config::Config, logger, server};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure (port in use, privileged port) is fatal; no retry
    let listener = server::bind(addr)?;
    let local_addr = listener.local_addr()?;
    logger::log_server_start(&local_addr, &cfg);

    server::serve(listener, Arc::new(cfg)).await;
    Ok(())
}

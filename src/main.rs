use crate::config::Config;
use crate::router::handle;
use astra::Server;

mod config;
mod domain;
mod errors;
mod logging;
mod repository;
mod responses;
mod router;
mod search;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    // 1️⃣ Configuration and listing source
    let cfg = Config::from_env()?;
    let repo = repository::from_config(&cfg)?;

    // 2️⃣ Start the server
    tracing::info!("Starting server at http://{}", cfg.bind_addr);
    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    // 3️⃣ Serve requests, passing the repository into the closure
    server.serve(move |req, _info| match handle(req, repo.as_ref()) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    })?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

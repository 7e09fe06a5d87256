//! Lists customers from a running backend and toggles the first one's block flag.
//!
//! `CADASTRO_API_URL=http://localhost:8889/api/v1 cargo run --example cadastro_store --features client`

use cadastro::client::*;
use cadastro::mask_documento;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env()?;
    println!("Backend: {}", config.base_url);

    let mut store = CadastroStore::new(CadastroClient::new(&config)?);
    store.fetch_clientes().await;
    if let Some(err) = store.error() {
        eprintln!("{err}");
        return Ok(());
    }

    for c in store.clientes() {
        let status = if c.bloqueado { "bloqueado" } else { "ativo" };
        println!("  [{}] {:<30} {:<20} {status}", c.id, c.nome, mask_documento(&c.documento));
    }

    let Some(first) = store.clientes().first().map(|c| c.id.clone()) else {
        println!("  (nenhum cliente)");
        return Ok(());
    };
    store.toggle_block_status(&first).await;
    match store.error() {
        Some(err) => eprintln!("{err}"),
        None => println!("Toggled block status of {first}"),
    }
    Ok(())
}

use folio_config::Config;
use tracing::info;

use crate::environment::{ConfigProvider, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(ConfigProvider::new(&config)?);
    let server = provider.rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

use lambda_runtime::{handler_fn, Context, Error};
use log_forwarder::{Config, Forwarder, HttpCollector};
use serde_json::Value;
use simple_logger::SimpleLogger;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    SimpleLogger::from_env().init()?;

    let config = Config::from_env().map_err(|err| {
        log::error!("{}", err);
        err
    })?;
    let forwarder = Arc::new(Forwarder::new(HttpCollector::new(config)));

    let func = handler_fn(move |event: Value, _: Context| {
        let forwarder = Arc::clone(&forwarder);
        async move { lambda(&forwarder, event).await }
    });
    lambda_runtime::run(func).await?;

    Ok(())
}

async fn lambda(forwarder: &Forwarder<HttpCollector>, event: Value) -> Result<(), Error> {
    log::debug!("event: {:?}", event);

    forwarder.handle(event).await?;

    Ok(())
}

use actix_web::{
    middleware::{from_fn, Logger as ActixLogger},
    web, App, HttpServer,
};
use apikey_demo::{
    config::{load_env_file, ServerConfig},
    cors::cors_headers,
    logger::setup_logger,
    routes, KeyStore, NAME, VERSION,
};
use log::{error, info};
use std::process::{exit, id as process_id};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_logger();
    load_env_file();

    let config = ServerConfig::from_env();
    let target_server = config.bind_addr();
    let store = web::Data::new(KeyStore::new());

    info!("{} v{} (PID: {})", NAME, VERSION, process_id());
    info!("Server starting on {}", target_server);

    let server = match HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(from_fn(cors_headers))
            .wrap(ActixLogger::default())
            .configure(routes::configure)
    })
    .bind(&target_server)
    {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to start server on {}: {}", target_server, e);
            exit(1);
        }
    };

    let execution = server.run().await;
    info!("Worker stopped with PID: {}", process_id());

    if let Err(e) = execution {
        error!("Server runtime failure: {:?}", e);
        return Err(e);
    }
    Ok(())
}

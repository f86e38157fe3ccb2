use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, export_route, extract_route},
    services::OpenaiClient,
};

pub fn run(
    listener: TcpListener,
    http_client: reqwest::Client,
    openai_client: OpenaiClient,
) -> Result<Server, std::io::Error> {
    let http_client = web::Data::new(http_client);
    let openai_client = web::Data::new(openai_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::index)
            .service(extract_route::extract)
            .service(export_route::export)
            .app_data(http_client.clone())
            .app_data(openai_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

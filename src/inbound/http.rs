use crate::configuration::ApplicationSettings;
use crate::domain::auth::ports::AuthService;
use crate::domain::config_export::ports::ConfigExportService;
use crate::domain::contact::ports::ContactService;
use crate::inbound::http::handlers::{contact_user, export_config, health_check};
use crate::inbound::http::state::{
    SharedAuthState, SharedConfigExportState, SharedContactState,
};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod auth;
mod errors;
mod handlers;
pub mod state;

pub struct Application {
    port: u16,
    server: Server,
}

fn run<XS: ConfigExportService, CS: ContactService, AS: AuthService>(
    listener: TcpListener,
    config_export_state: SharedConfigExportState<XS>,
    contact_state: SharedContactState<CS>,
    auth_state: SharedAuthState<AS>,
) -> Result<Server, std::io::Error> {
    let config_export_state = web::Data::new(config_export_state);
    let contact_state = web::Data::new(contact_state);
    let auth_state = web::Data::new(auth_state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .app_data(config_export_state.clone())
            .route(
                "/api/config-export/{config_name}",
                web::get().to(export_config::<XS>),
            )
            .route("/api/config-export", web::get().to(export_config::<XS>))
            .route("/api/config-export/", web::get().to(export_config::<XS>))
            .app_data(contact_state.clone())
            .app_data(auth_state.clone())
            .route("/api/contact-user", web::post().to(contact_user::<CS, AS>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

impl Application {
    pub async fn build<XS, CS, AS>(
        config_export_service: XS,
        contact_service: CS,
        auth_service: AS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error>
    where
        XS: ConfigExportService,
        CS: ContactService,
        AS: AuthService,
    {
        let address = format!("{}:{}", configuration.host, configuration.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let config_export_state = SharedConfigExportState::new(config_export_service);
        let contact_state = SharedContactState::new(contact_service);
        let auth_state = SharedAuthState::new(auth_service);

        let server: Server = run(listener, config_export_state, contact_state, auth_state)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

use std::sync::Arc;

use anyhow::Context;
use contact_api::configuration::get_configuration;
use contact_api::domain::auth::service::Auth;
use contact_api::domain::config_export::service::ConfigExport;
use contact_api::domain::contact::service::Contact;
use contact_api::inbound::http::Application;
use contact_api::outbound::db::postgres_db::PostgresDb;
use contact_api::outbound::notifier::email_client::EmailClient;
use contact_api::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_logger("contact_api", configuration.log_level(), std::io::stdout);

    let email_client = Arc::new(EmailClient::new(configuration.email_client)?);
    let repo = Arc::new(PostgresDb::new(&configuration.database));

    let config_export_service = ConfigExport::new(Arc::clone(&repo));
    let contact_service = Contact::new(
        Arc::clone(&repo),
        Arc::clone(&repo),
        Arc::clone(&repo),
        Arc::clone(&email_client),
    );
    let auth_service = Auth::new(Arc::clone(&repo));

    let application = Application::build(
        config_export_service,
        contact_service,
        auth_service,
        configuration.application,
    )
    .await?;

    application.run_until_stopped().await?;
    Ok(())
}

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use async_trait::async_trait;
use contact_api::configuration::{get_configuration, ApplicationSettings};
use contact_api::domain::account::{email::AccountEmail, user::UserAccount, user::UserId};
use contact_api::domain::auth::credentials::{CredentialsError, StoredCredentials};
use contact_api::domain::auth::ports::AuthRepository;
use contact_api::domain::auth::service::Auth;
use contact_api::domain::config_export::models::{
    config_entry::ConfigEntry, config_name::ConfigName,
};
use contact_api::domain::config_export::ports::ConfigStore;
use contact_api::domain::config_export::service::ConfigExport;
use contact_api::domain::contact::models::message::Message;
use contact_api::domain::contact::models::preference::{CONTACT_ENABLED_KEY, CONTACT_MODULE};
use contact_api::domain::contact::ports::{MessageRepository, UserDataRepository, UserRepository};
use contact_api::domain::contact::service::Contact;
use contact_api::inbound::http::Application;
use contact_api::outbound::notifier::email_client::EmailClient;
use contact_api::outbound::telemetry::init_logger;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let c = get_configuration().expect("Failed to read configuration");
    let default_filter_level = c.general.log_level;
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_logger(&subscriber_name, &default_filter_level, std::io::stdout);
    } else {
        init_logger(&subscriber_name, &default_filter_level, std::io::sink);
    }
});

pub struct TestUser {
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl TestUser {
    pub fn generate(user_id: i64) -> Self {
        let username = uuid::Uuid::new_v4().to_string();
        Self {
            user_id,
            email: format!("{}@example.com", username),
            username,
            password: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn account(&self) -> UserAccount {
        UserAccount::new(
            UserId::try_from(self.user_id).unwrap(),
            self.username.clone(),
            AccountEmail::parse(self.email.clone()).unwrap(),
        )
    }

    fn password_hash(&self) -> String {
        let salt = SaltString::generate(&mut rand::thread_rng());
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).unwrap(),
        )
        .hash_password(self.password.as_bytes(), &salt)
        .unwrap()
        .to_string()
    }
}

#[derive(Default)]
struct StoreState {
    configs: HashMap<String, Map<String, Value>>,
    users: HashMap<i64, UserAccount>,
    passwords: HashMap<String, (i64, String)>,
    user_data: HashMap<(i64, String, String), String>,
    messages: Vec<Message>,
}

/// Stands in for the database behind every store port.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn insert_config(&self, name: &str, data: Value) {
        let data = match data {
            Value::Object(map) => map,
            other => panic!("configuration data must be an object, got {}", other),
        };
        self.state
            .lock()
            .unwrap()
            .configs
            .insert(name.to_string(), data);
    }

    pub fn insert_user(&self, user: &TestUser) {
        let hash = user.password_hash();
        let mut state = self.state.lock().unwrap();
        state.users.insert(user.user_id, user.account());
        state
            .passwords
            .insert(user.username.clone(), (user.user_id, hash));
    }

    pub fn set_contact_enabled(&self, user_id: i64, value: &str) {
        self.state.lock().unwrap().user_data.insert(
            (user_id, CONTACT_MODULE.into(), CONTACT_ENABLED_KEY.into()),
            value.into(),
        );
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().unwrap().messages.clone()
    }
}

#[async_trait]
impl ConfigStore for InMemoryStore {
    async fn get(&self, name: &ConfigName) -> Result<Option<ConfigEntry>, anyhow::Error> {
        let state = self.state.lock().unwrap();
        Ok(state
            .configs
            .get(name.as_str())
            .map(|data| ConfigEntry::new(name.clone(), data.clone())))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn load_user(&self, id: &UserId) -> Result<Option<UserAccount>, anyhow::Error> {
        Ok(self.state.lock().unwrap().users.get(&id.as_i64()).cloned())
    }
}

#[async_trait]
impl UserDataRepository for InMemoryStore {
    async fn get_user_data(
        &self,
        module: &str,
        id: &UserId,
        name: &str,
    ) -> Result<Option<String>, anyhow::Error> {
        let key = (id.as_i64(), module.to_string(), name.to_string());
        Ok(self.state.lock().unwrap().user_data.get(&key).cloned())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn save_message(&self, message: Message) -> Result<Message, anyhow::Error> {
        let message = message.with_id(Some(uuid::Uuid::new_v4()));
        self.state.lock().unwrap().messages.push(message.clone());
        Ok(message)
    }
}

#[async_trait]
impl AuthRepository for InMemoryStore {
    async fn get_stored_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, CredentialsError> {
        let state = self.state.lock().unwrap();
        Ok(state.passwords.get(username).and_then(|(id, hash)| {
            state
                .users
                .get(id)
                .map(|account| StoredCredentials::new(account.clone(), hash.clone()))
        }))
    }
}

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub email_server: MockServer,
    pub sender: TestUser,
}

impl TestApp {
    pub async fn get_config_export(&self, name: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/api/config-export/{}", &self.address, name))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_user(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact-user", &self.address))
            .basic_auth(&self.sender.username, Some(&self.sender.password))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_user_raw(&self, body: &'static str) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact-user", &self.address))
            .basic_auth(&self.sender.username, Some(&self.sender.password))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers a user who accepts contact messages.
    pub fn add_recipient(&self, user_id: i64) -> TestUser {
        let recipient = TestUser::generate(user_id);
        self.store.insert_user(&recipient);
        self.store.set_contact_enabled(user_id, "1");
        recipient
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);
    let email_server = MockServer::start().await;
    let email_settings = {
        let mut c = get_configuration()
            .expect("Failed to read configuration")
            .email_client;
        c.base_url = email_server.uri();
        c.timeout_milliseconds = 500;
        c
    };

    let store = Arc::new(InMemoryStore::default());
    let email_client =
        Arc::new(EmailClient::new(email_settings).expect("Failed to build email client"));

    let config_export_service = ConfigExport::new(Arc::clone(&store));
    let contact_service = Contact::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&email_client),
    );
    let auth_service = Auth::new(Arc::clone(&store));

    let application = Application::build(
        config_export_service,
        contact_service,
        auth_service,
        ApplicationSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
    )
    .await
    .expect("Failed to build application");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let sender = TestUser::generate(1);
    store.insert_user(&sender);

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        store,
        email_server,
        sender,
    }
}

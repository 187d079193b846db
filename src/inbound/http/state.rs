use crate::domain::auth::ports::AuthService;
use crate::domain::config_export::ports::ConfigExportService;
use crate::domain::contact::ports::ContactService;
use std::sync::Arc;

#[derive(Debug)]
pub struct ConfigExportState<XS: ConfigExportService> {
    config_export_service: XS,
}

#[derive(Debug)]
pub struct SharedConfigExportState<XS: ConfigExportService>(Arc<ConfigExportState<XS>>);

impl<XS: ConfigExportService> SharedConfigExportState<XS> {
    pub fn new(config_export_service: XS) -> Self {
        Self(Arc::new(ConfigExportState {
            config_export_service,
        }))
    }

    pub fn config_export_service(&self) -> &XS {
        &self.0.config_export_service
    }
}

impl<XS: ConfigExportService> Clone for SharedConfigExportState<XS> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

#[derive(Debug)]
pub struct ContactState<CS: ContactService> {
    contact_service: CS,
}

#[derive(Debug)]
pub struct SharedContactState<CS: ContactService>(Arc<ContactState<CS>>);

impl<CS: ContactService> SharedContactState<CS> {
    pub fn new(contact_service: CS) -> Self {
        Self(Arc::new(ContactState { contact_service }))
    }

    pub fn contact_service(&self) -> &CS {
        &self.0.contact_service
    }
}

impl<CS: ContactService> Clone for SharedContactState<CS> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

#[derive(Debug)]
pub struct AuthState<AS: AuthService> {
    auth_service: AS,
}

#[derive(Debug)]
pub struct SharedAuthState<AS: AuthService>(Arc<AuthState<AS>>);

impl<AS: AuthService> SharedAuthState<AS> {
    pub fn new(auth_service: AS) -> Self {
        Self(Arc::new(AuthState { auth_service }))
    }

    pub fn auth_service(&self) -> &AS {
        &self.0.auth_service
    }
}

impl<AS: AuthService> Clone for SharedAuthState<AS> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

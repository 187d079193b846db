use crate::{
    domain::config_export::{errors::ConfigExportError, ports::ConfigExportService},
    inbound::http::{errors::AppError, SharedConfigExportState},
};
use actix_web::{web, HttpResponse};

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// Missing and unknown names are answered here with an `error` body; only
/// store failures surface as `AppError`.
#[tracing::instrument(
    name = "Export a configuration object",
    skip(config_name, state),
    fields(config_name = tracing::field::Empty)
)]
pub async fn export_config<XS: ConfigExportService>(
    config_name: Option<web::Path<String>>,
    state: web::Data<SharedConfigExportState<XS>>,
) -> Result<HttpResponse, AppError> {
    let config_name = config_name.map(|p| p.into_inner()).unwrap_or_default();
    tracing::Span::current().record("config_name", config_name.as_str());

    match state.config_export_service().export(config_name).await {
        Ok(entry) => Ok(HttpResponse::Ok().json(entry.into_data())),
        Err(e @ ConfigExportError::InvalidName(_)) => {
            Ok(HttpResponse::BadRequest().json(ErrorBody {
                error: e.to_string(),
            }))
        }
        Err(e @ ConfigExportError::NotFound(_)) => Ok(HttpResponse::NotFound().json(ErrorBody {
            error: e.to_string(),
        })),
        Err(ConfigExportError::Unexpected(e)) => Err(AppError::Unexpected(e)),
    }
}

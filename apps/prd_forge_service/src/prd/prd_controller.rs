use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
    Extension, Form, Json, Router,
};
use chrono::Local;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::prd_export::{export_file, ExportFile, ExportSummary};
use super::prd_page::{render_page, PageView};
use super::prd_types::{ExportFormat, GenerationForm, GenerationResult};
use crate::{app_module::AppState, error::AppError};

/// RFC 5987 `attr-char`: alphanumerics plus these marks stay literal.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub text: String,
    pub fallback: bool,
    pub export: ExportSummary,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub app_name: String,
    pub text: String,
    #[serde(default)]
    pub export_format: ExportFormat,
}

pub fn prd_router() -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/export", post(export))
}

/// Validation gate, then exactly one model call. Nothing reaches the model
/// unless both required fields are filled in.
async fn run_trigger(
    ctx: &AppState,
    form: &GenerationForm,
) -> Result<(Uuid, GenerationResult, ExportFile), AppError> {
    let prd_service = ctx.service.prd_service()?;
    let request = form.validate().map_err(|e| {
        tracing::warn!("Rejected generation request: {}", e);
        e
    })?;

    let request_id = Uuid::new_v4();
    let result = prd_service.generate(request_id, &request).await?;
    let file = export_file(
        request.app_name(),
        &result.text,
        form.export_format,
        Local::now().naive_local(),
    );

    Ok((request_id, result, file))
}

pub async fn show_form(Extension(ctx): Extension<AppState>) -> Html<String> {
    Html(render_page(&PageView {
        config_error: config_error(&ctx),
        ..PageView::default()
    }))
}

pub async fn submit_form(
    Extension(ctx): Extension<AppState>,
    form: Result<Form<GenerationForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let e = AppError::Validation(rejection.body_text());
            tracing::warn!("Rejected generation request: {}", e);
            let view = PageView {
                config_error: config_error(&ctx),
                warning: Some(e.to_string()),
                ..PageView::default()
            };
            return (e.status_code(), Html(render_page(&view))).into_response();
        }
    };

    match run_trigger(&ctx, &form).await {
        Ok((_, result, file)) => Html(render_page(&PageView {
            form: Some(&form),
            warning: result
                .fallback
                .then(|| "The model returned no content.".to_string()),
            document: Some((result.text.as_str(), &file)),
            ..PageView::default()
        }))
        .into_response(),
        Err(e) => {
            let mut view = PageView {
                form: Some(&form),
                config_error: config_error(&ctx),
                ..PageView::default()
            };
            match &e {
                AppError::Validation(message) => view.warning = Some(message.clone()),
                AppError::ExternalService(_) => view.error = Some(e.to_string()),
                AppError::Configuration => {}
            }
            (e.status_code(), Html(render_page(&view))).into_response()
        }
    }
}

pub async fn generate(
    Extension(ctx): Extension<AppState>,
    form: Result<Json<GenerationForm>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(form) = form.map_err(rejected)?;
    let (request_id, result, file) = run_trigger(&ctx, &form).await?;

    Ok(Json(GenerateResponse {
        request_id,
        text: result.text,
        fallback: result.fallback,
        export: file.summary(),
    }))
}

pub async fn export(
    request: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = request.map_err(rejected)?;
    let file = export_file(
        &request.app_name,
        &request.text,
        request.export_format,
        Local::now().naive_local(),
    );
    Ok(file_response(file))
}

/// Unknown labels or malformed bodies are input problems, not server ones.
fn rejected(rejection: JsonRejection) -> AppError {
    let e = AppError::Validation(rejection.body_text());
    tracing::warn!("Rejected generation request: {}", e);
    e
}

fn config_error(ctx: &AppState) -> Option<String> {
    (!ctx.generation_enabled()).then(|| AppError::Configuration.to_string())
}

fn file_response(file: ExportFile) -> Response {
    let disposition = HeaderValue::from_str(&content_disposition(&file.file_name))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(file.mime_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response()
}

/// ASCII `filename` for old clients plus an RFC 5987 `filename*` carrying
/// the exact UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let encoded = utf8_percent_encode(file_name, ATTR_CHAR).to_string();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii, encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii() {
        assert_eq!(
            content_disposition("My_App_PRD_20240101_120000.md"),
            "attachment; filename=\"My_App_PRD_20240101_120000.md\"; filename*=UTF-8''My_App_PRD_20240101_120000.md"
        );
    }

    #[test]
    fn test_content_disposition_non_ascii() {
        let value = content_disposition("ऐप_\"x\".md");

        assert!(value.contains("filename=\"____x_.md\""));
        assert!(value.contains("filename*=UTF-8''%E0%A4%90%E0%A4%AA_%22x%22.md"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_content_disposition_keeps_attr_chars() {
        let value = content_disposition("a!#$&+-.^_`|~ b.md");

        assert!(value.ends_with("filename*=UTF-8''a!#$&+-.^_`|~%20b.md"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }
}

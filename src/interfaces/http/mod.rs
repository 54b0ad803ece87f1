// ============================================================
// HTTP INTERFACE
// ============================================================
// POST /api/clean: multipart upload + config fields in, cleaned
// file attachment out

use actix_cors::Cors;
use actix_multipart::form::bytes::Bytes;
use actix_multipart::form::text::Text;
use actix_multipart::form::{MultipartForm, MultipartFormConfig};
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::CleaningEngine;
use crate::domain::clean::{
    split_names, CleanConfig, DateFormat, OutputFormat, TextCase,
};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::adapters;
use crate::infrastructure::settings::ServerSettings;
use crate::infrastructure::writers;

/// Multipart form fields, spelled as the front-end sends them.
/// Every scalar is optional; absent or unparseable values fall back
/// to the configuration defaults.
#[derive(Debug, MultipartForm)]
pub struct CleanUpload {
    pub file: Bytes,

    pub columns: Option<Text<String>>,
    pub trim: Option<Text<String>>,
    #[multipart(rename = "collapseSpaces")]
    pub collapse_spaces: Option<Text<String>>,
    #[multipart(rename = "textCase")]
    pub text_case: Option<Text<String>>,
    #[multipart(rename = "dateFormat")]
    pub date_format: Option<Text<String>>,
    #[multipart(rename = "dedupeKeys")]
    pub dedupe_keys: Option<Text<String>>,
    #[multipart(rename = "dropEmptyRows")]
    pub drop_empty_rows: Option<Text<String>>,
    #[multipart(rename = "dropEmptyCols")]
    pub drop_empty_cols: Option<Text<String>>,
    #[multipart(rename = "normalizeTypes")]
    pub normalize_types: Option<Text<String>>,
    #[multipart(rename = "validateEmail")]
    pub validate_email: Option<Text<String>>,
    #[multipart(rename = "removeInvalidEmails")]
    pub remove_invalid_emails: Option<Text<String>>,
    #[multipart(rename = "validateUrl")]
    pub validate_url: Option<Text<String>>,
    #[multipart(rename = "removeInvalidUrls")]
    pub remove_invalid_urls: Option<Text<String>>,
    #[multipart(rename = "outputFormat")]
    pub output_format: Option<Text<String>>,
    #[multipart(rename = "keepOrder")]
    pub keep_order: Option<Text<String>>,
}

fn text(field: &Option<Text<String>>) -> Option<&str> {
    field.as_ref().map(|t| t.0.as_str())
}

/// Permissive bool binding: anything outside true/false keeps the
/// default
fn flag(field: &Option<Text<String>>, default: bool) -> bool {
    match text(field).map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "true" => true,
        Some(v) if v == "false" => false,
        _ => default,
    }
}

/// Decode the configuration record from the form fields.
/// An empty column list is the one binding error.
fn bind_config(form: &CleanUpload) -> Result<CleanConfig> {
    let defaults = CleanConfig::default();

    let columns = split_names(text(&form.columns).unwrap_or(""));
    if columns.is_empty() {
        return Err(AppError::InvalidRequest("No columns provided".to_string()));
    }

    Ok(CleanConfig {
        columns,
        trim: flag(&form.trim, defaults.trim),
        collapse_spaces: flag(&form.collapse_spaces, defaults.collapse_spaces),
        text_case: text(&form.text_case)
            .map(TextCase::parse_or_default)
            .unwrap_or(defaults.text_case),
        date_format: text(&form.date_format)
            .map(DateFormat::parse_or_default)
            .unwrap_or(defaults.date_format),
        dedupe_keys: split_names(text(&form.dedupe_keys).unwrap_or("")),
        drop_empty_rows: flag(&form.drop_empty_rows, defaults.drop_empty_rows),
        drop_empty_cols: flag(&form.drop_empty_cols, defaults.drop_empty_cols),
        normalize_types: flag(&form.normalize_types, defaults.normalize_types),
        validate_email: flag(&form.validate_email, defaults.validate_email),
        remove_invalid_emails: flag(&form.remove_invalid_emails, defaults.remove_invalid_emails),
        validate_url: flag(&form.validate_url, defaults.validate_url),
        remove_invalid_urls: flag(&form.remove_invalid_urls, defaults.remove_invalid_urls),
        output_format: text(&form.output_format)
            .map(OutputFormat::parse_or_default)
            .unwrap_or(defaults.output_format),
        keep_order: flag(&form.keep_order, defaults.keep_order),
    })
}

static STRIP_FOR_XLSX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(xlsx|xls|csv)$").unwrap());
static STRIP_FOR_CSV: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(xlsx|xls)$").unwrap());

/// Attachment name: the upload's base name with its extension swapped
/// for the output extension
fn derived_filename(original: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Xlsx => format!("cleaned_{}", STRIP_FOR_XLSX.replace(original, ".xlsx")),
        OutputFormat::Csv => format!("cleaned_{}", STRIP_FOR_CSV.replace(original, ".csv")),
    }
}

/// Run the full pipeline for one upload. Returns the response bytes,
/// content type, and attachment name.
fn process(form: &CleanUpload, filename: &str) -> Result<(Vec<u8>, &'static str, String)> {
    let config = bind_config(form)?;
    let format = adapters::detect_format(filename)?;

    let table = adapters::open_table(format, &form.file.data)?;
    let cleaned = CleaningEngine::new(&config).clean(table.as_ref());

    tracing::info!(
        file = %filename,
        rows_in = table.row_count(),
        rows_out = cleaned.rows.len(),
        cols_out = cleaned.header.len(),
        "Cleaned table"
    );

    let bytes = writers::write_table(config.output_format, &cleaned)?;
    let attachment = derived_filename(filename, config.output_format);

    Ok((bytes, config.output_format.content_type(), attachment))
}

#[post("/clean")]
async fn clean(MultipartForm(form): MultipartForm<CleanUpload>) -> impl Responder {
    let filename = form
        .file
        .file_name
        .clone()
        .unwrap_or_else(|| "file".to_string());

    tracing::info!(file = %filename, bytes = form.file.data.len(), "Clean request");

    match process(&form, &filename) {
        Ok((bytes, content_type, attachment)) => HttpResponse::Ok()
            .content_type(content_type)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", attachment),
            ))
            .body(bytes),
        Err(err @ AppError::InvalidRequest(_)) => {
            tracing::warn!(file = %filename, error = %err, "Rejected clean request");
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(err.client_message())
        }
        Err(err) => {
            tracing::error!(file = %filename, error = %err, "Clean request failed");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(err.client_message())
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn start_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let max_upload = settings.max_upload_bytes;
    let multipart_config = MultipartFormConfig::default()
        .total_limit(max_upload)
        .memory_limit(max_upload);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(multipart_config.clone())
            .service(web::scope("/api").service(clean).service(health))
    })
    .bind((settings.host.as_str(), settings.port))?;

    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    Ok(server.run())
}

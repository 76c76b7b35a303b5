use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

/// The generated snippets are YAML, but callers paste them into their own
/// configuration files, so they go out as plain text.
pub fn rendered_yaml(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

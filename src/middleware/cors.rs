use actix_cors::Cors;

/// Request headers the browser client is allowed to send.
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// CORS policy shared by the AI endpoints: any origin, a fixed header set.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(["GET", "POST", "OPTIONS"])
        .allowed_headers(ALLOWED_HEADERS)
        .max_age(3600)
}

/// Per-server state handed to the actix handlers.
pub mod http_service_data;

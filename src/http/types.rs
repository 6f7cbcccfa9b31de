use std::collections::HashMap;
use actix_web::HttpResponse;

/// Lower-cased query keys to their percent-decoded values.
pub type QueryMap = HashMap<String, Vec<Vec<u8>>>;

/// Ready-made bencoded failure answer.
pub type QueryFailure = HttpResponse;

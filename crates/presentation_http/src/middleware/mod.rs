//! HTTP middleware components
//!
//! Request correlation and request validation.

pub mod request_id;
pub mod validation;

pub use request_id::{
    MakeRequestUuidV7, REQUEST_ID_HEADER, make_request_span, propagate_request_id_layer,
    set_request_id_layer,
};
pub use validation::{ValidatedJson, ValidatedQuery, ValidationError};

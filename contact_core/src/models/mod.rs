pub mod request;
pub mod response;

pub use request::ContactFormRequest;
pub use response::{
    ContactFormResponse, FieldError, ResponseBody, ResponseHeaders, ResponseStatus,
    INTERNAL_FAILURE_MESSAGE,
};

pub mod json;

pub use json::{ContactJson, ContactJsonRejection};

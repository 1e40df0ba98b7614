pub mod scratch;
pub mod validator;

pub use validator::{validate, Pruned, RejectReason, Rejection, Validation, Validator};

//! Contact and quote-request submissions: validation, then projection into an
//! outgoing [`ContactRequest`].

pub mod form;
pub mod message;

pub use form::{ContactForm, FieldError, InquiryKind, ValidatedContact, ValidationErrors};
pub use message::ContactRequest;

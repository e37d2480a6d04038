// Application layer: use cases and the ports they depend on

pub mod contact_use_case;
pub mod ports;

pub use contact_use_case::{send_email, ContactUseCase, SubmissionError, SubmissionReceipt};
pub use ports::{AnalyticsBeacon, EmailReceipt, EmailSender};

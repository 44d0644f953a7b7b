// src/infrastructure/notifications/mod.rs
mod logging;
mod smtp;
mod social;

pub use logging::{LoggingEmailSender, LoggingSocialPoster};
pub use smtp::{SmtpEmailSender, SmtpSettings};
pub use social::HttpSocialPoster;

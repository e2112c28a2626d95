pub mod analytics;
pub mod contact;

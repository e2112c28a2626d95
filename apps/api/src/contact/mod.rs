pub mod handlers;
pub mod inbox;
pub mod validation;

//! Response middleware shared by every service.

pub mod security;

pub use security::security_headers;

pub mod analyze;
pub mod domains;
pub mod session;

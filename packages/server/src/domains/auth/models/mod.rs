pub mod alert;
pub mod session;

// TableFinder - restaurant discovery core
//
// Search-parameter model shared by every search form, postcode lookup,
// login/signup flows and the HTTP surface (auth proxy + JSON endpoints).

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

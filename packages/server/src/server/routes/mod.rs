// HTTP routes
pub mod health;
pub mod listings;
pub mod locations;
pub mod proxy;
pub mod search;

pub use health::*;
pub use listings::*;
pub use locations::*;
pub use proxy::*;
pub use search::*;

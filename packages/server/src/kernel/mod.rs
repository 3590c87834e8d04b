// Infrastructure seams (traits + adapters over external clients)

pub mod deps;
pub mod traits;

pub use deps::AuthApiAdapter;
pub use traits::BaseAuthApi;

pub mod profile;
pub mod repository;

pub use profile::*;
pub use repository::*;

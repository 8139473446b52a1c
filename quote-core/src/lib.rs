pub mod calculations;
pub mod company_info;
pub mod models;

pub use models::*;

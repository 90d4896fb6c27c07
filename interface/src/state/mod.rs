pub mod account_data;

pub use account_data::*;

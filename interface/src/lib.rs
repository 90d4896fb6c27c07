//! Layouts shared by the quotient program and its clients: the instruction payload, the app
//! account record, and the seed used to derive the app account address.

pub mod error;
pub mod instructions;
pub mod pack;
pub mod seeds;
pub mod state;

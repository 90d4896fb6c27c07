//! An in-memory cluster for exercising the pipeline without a validator.

mod mock_rpc;

pub use mock_rpc::*;

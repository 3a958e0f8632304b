pub mod kind;

pub use fx_error::Error;

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod label;
pub mod option;
pub mod selection;
pub mod value;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use filter::*;
pub use label::*;
pub use option::*;
pub use selection::*;
pub use value::*;

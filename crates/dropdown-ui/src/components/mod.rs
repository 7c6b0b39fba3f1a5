pub mod deal_dropdown;

pub use deal_dropdown::*;

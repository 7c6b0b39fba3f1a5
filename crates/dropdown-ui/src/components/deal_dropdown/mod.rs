mod component;
mod menu;
mod outside_click;
mod tag;

pub use component::*;
pub use menu::*;
pub use outside_click::*;
pub use tag::*;

pub mod trail;

pub use trail::*;

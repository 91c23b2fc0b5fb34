pub mod quat;
pub mod vec;

pub use quat::*;
pub use vec::*;

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

mod ops;
pub mod prelude;
mod traits;

mod sealed {
    pub trait Sealed {}
}

pub use ops::*;
pub use traits::UnsignedBits;

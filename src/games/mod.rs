//! Ready-made game setups.

pub mod classic;

pub use classic::ClassicGameBuilder;

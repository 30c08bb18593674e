//! Persistence model
//!
//! The `Cupcake` row shape and the default image constant.

pub mod cupcake;

pub use cupcake::DEFAULT_IMAGE_URL;

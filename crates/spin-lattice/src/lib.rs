#![deny(missing_docs)]
#![doc = "Binary spin configurations on a one-dimensional lattice: decimal and sign-string initializers and magnetization."]

/// `SpinConfiguration` value object and its queries.
pub mod configuration;
/// Sign-string parsing and rendering.
pub mod signs;

pub use configuration::SpinConfiguration;

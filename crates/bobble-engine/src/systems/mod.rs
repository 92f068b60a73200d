#[cfg(feature = "vectors")]
pub mod text;
#[cfg(feature = "vectors")]
pub mod vector;

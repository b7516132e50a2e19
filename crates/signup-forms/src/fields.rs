//! Field types used by the sign-up schema

pub mod char_field;

pub use char_field::CharField;

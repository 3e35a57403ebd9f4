//! Typed values accepted on the command line.

pub mod role;

pub use role::Role;

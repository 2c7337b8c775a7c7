//! Common utilities and types shared across the demo crates.
//!
//! The centrepiece is [`Outcome`], the value-or-error type every fallible
//! initialization step returns.

pub mod color;
pub mod error;
pub mod outcome;

pub use color::Color;
pub use error::{DemoError, ErrorSource};
pub use outcome::{IntoOutcome, Maybe, Outcome};

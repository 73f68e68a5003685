//! Core traits for the scankit I/O pipeline.
//!
//! This module defines the seams between the scanner/writer pair and the
//! outside world. The scanner pulls lines through [`LineSource`] and hands
//! tokens to [`FromToken`]; the writer pushes text into an [`OutputSink`].
//! The two halves share no state and can be used independently.
//!
//! # Trait Hierarchy
//!
//! ```text
//! LineSource (line-oriented input)
//!     └── Scanner::token() / Scanner::parse::<T>() where T: FromToken
//!
//! OutputSink (text output)
//!     └── Writer::write(fragment) where fragment: Fragment
//! ```
//!
//! # Feature Flags
//!
//! - `std`: Enables the `std::io` implementations in [`crate::io`] and the
//!   `std::error::Error` impl for [`crate::Error`]

mod parse;
mod sink;
mod source;

pub use parse::FromToken;
pub use sink::OutputSink;
pub use source::LineSource;

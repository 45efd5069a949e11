//! Progress reporting while OrderBot is thinking

pub mod spinner;

pub use spinner::SpinnerProgress;

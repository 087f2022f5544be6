//! Compares a live compass heading against a target bearing.

pub mod alignment;
pub mod heading;


#[doc(inline)]
pub use alignment::{AlignmentState, Turn, TurnConvention, evaluate_alignment};
#[doc(inline)]
pub use heading::{Heading, HeadingError};

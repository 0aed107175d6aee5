//! csslens Values
//!
//! Tells a learner what type of CSS value they typed: a length, a color, a
//! keyword, a function call, a list of several of those. Classification is
//! built on the `csslens-lexer` token stream and, like the scanner, never fails.
//!
//! # Example
//!
//! ```
//! use csslens_values::{classify, ValueType};
//!
//! assert_eq!(classify("12px"), ValueType::Length);
//! assert_eq!(classify("rgba(0, 0, 0, .5)"), ValueType::Color);
//! assert_eq!(classify("1px solid red"), ValueType::List);
//! ```

pub mod classifier;
pub mod keywords;
pub mod value_type;

pub use classifier::{classify, components, Classifier};
pub use value_type::ValueType;

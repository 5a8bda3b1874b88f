//! Step-expression inference for behaviour-driven test frameworks.
//!
//! The crate turns an example sentence such as `I have 2 cukes and 1.5 euro`
//! into a reusable expression such as `I have {arg1:int} cukes and
//! {arg2:double} euro`. Parameter types describe the value classes to look
//! for, the registry holds them and the generator selects a leftmost,
//! widest-on-tie, non-overlapping set of matches.

mod builtins;
mod capture;
mod errors;
mod generator;
mod parameter_type;
mod registry;

pub use builtins::{NumberLocale, builtin_parameter_types};
pub use capture::extract_captured_values;
pub use errors::{ParameterTypeError, RegistryError, TransformError};
pub use generator::{ExpressionGenerator, GeneratedExpression, Segment};
pub use parameter_type::{
    ParameterType, ParameterTypeBuilder, ParameterValue, RegexSource, ValueType,
};
pub use registry::ParameterTypeRegistry;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The data type of a CSS value, as a learner would describe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Nothing but whitespace and comments.
    Empty,
    Length,
    Angle,
    Time,
    Frequency,
    Resolution,
    Flex,
    /// A number with a unit this classifier does not know.
    Dimension,
    Percentage,
    Integer,
    Number,
    Color,
    Url,
    Image,
    /// `var(...)`
    Variable,
    /// `calc(...)` and the other math functions.
    Calculation,
    Function,
    String,
    /// `inherit`, `initial` and the other CSS-wide keywords.
    GlobalKeyword,
    Keyword,
    /// A `--name` reference.
    CustomProperty,
    /// More than one component.
    List,
    Unknown,
}

impl ValueType {
    pub fn label(self) -> &'static str {
        match self {
            ValueType::Empty => "empty",
            ValueType::Length => "length",
            ValueType::Angle => "angle",
            ValueType::Time => "time",
            ValueType::Frequency => "frequency",
            ValueType::Resolution => "resolution",
            ValueType::Flex => "flexible length",
            ValueType::Dimension => "dimension",
            ValueType::Percentage => "percentage",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::Color => "color",
            ValueType::Url => "url",
            ValueType::Image => "image",
            ValueType::Variable => "variable reference",
            ValueType::Calculation => "calculation",
            ValueType::Function => "function",
            ValueType::String => "string",
            ValueType::GlobalKeyword => "global keyword",
            ValueType::Keyword => "keyword",
            ValueType::CustomProperty => "custom property",
            ValueType::List => "list",
            ValueType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

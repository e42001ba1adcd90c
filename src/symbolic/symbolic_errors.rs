use crate::symbolic::symbolic_engine::Variable;
use std::fmt;

/// Failures of the numeric functions in the operator registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Error types for numeric evaluation of expressions.
///
/// Differentiation and simplification never fail, so this is the only error a caller of the
/// engine has to handle besides configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// a partial numeric function was applied outside of its domain
    Arithmetic(ArithmeticError),
    /// the environment (or argument list) holds no value for this variable
    UnboundVariable(Variable),
    /// an operator was requested by a name the registry does not know
    UnsupportedOperator(String),
    /// a compiled function was called with the wrong number of values
    ArgumentCount { expected: usize, found: usize },
    /// a numeric check was asked to sample no points at all
    EmptyDomain,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::Arithmetic(err) => write!(f, "Arithmetic error: {}", err),
            EvalError::UnboundVariable(var) => write!(f, "Unbound variable: {}", var),
            EvalError::UnsupportedOperator(name) => write!(f, "Unsupported operator: {}", name),
            EvalError::ArgumentCount { expected, found } => write!(
                f,
                "Wrong number of arguments: expected {}, found {}",
                expected, found
            ),
            EvalError::EmptyDomain => write!(f, "Empty domain: at least one sample point is needed"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(err: ArithmeticError) -> Self {
        EvalError::Arithmetic(err)
    }
}

/// Error types for settings and logger initialisation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownLogLevel(String),
    Toml(String),
    InvalidValue { key: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnknownLogLevel(level) => write!(
                f,
                "Unknown log level '{}': expected trace, debug, info, warn, error or off",
                level
            ),
            ConfigError::Toml(msg) => write!(f, "Invalid TOML: {}", msg),
            ConfigError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for '{}': {}", key, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

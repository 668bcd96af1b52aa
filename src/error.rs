// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

/// Errors reported by fallible `Int` and reduction-context operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A numeral with no digits.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character that is not a digit of the requested base.
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// A radix outside `2..=36`.
    #[error("invalid base {0}, expected 2..=36")]
    InvalidBase(u32),

    /// Serialization into a buffer shorter than the value.
    #[error("value needs {needed} bytes but only {available} are available")]
    BufferTooSmall { needed: usize, available: usize },

    /// A floating-point value with a fractional part, or not finite.
    #[error("value is not an integer")]
    NotAnInteger,

    #[error("division by zero")]
    DivisionByZero,

    /// A negative operand where only non-negative values are defined.
    #[error("operand must be non-negative")]
    NegativeOperand,

    /// A reduction modulus that is not greater than one, or unusable for the operation.
    #[error("invalid modulus")]
    InvalidModulus,

    #[error("value is not invertible for the modulus")]
    NotInvertible,

    #[error("value is not a quadratic residue")]
    NotQuadraticResidue,

    /// A reduction-context name that is not registered.
    #[error("unknown prime {0:?}")]
    UnknownPrime(String),

    /// Operands reduced under different contexts.
    #[error("operands belong to different reduction contexts")]
    ContextMismatch,

    /// A value too large for the requested target.
    #[error("value does not fit in {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

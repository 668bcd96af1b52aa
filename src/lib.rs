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

/*!
 * Arbitrary-precision signed integers stored as 26-bit limbs, with modular reduction
 * contexts for repeated arithmetic under a fixed modulus.
 *
 * `Int` is the integer type. The `ll` module holds the slice kernels it is built from, and
 * `red` provides generic, pseudo-Mersenne and Montgomery reduction contexts.
 *
 * ```
 * use redint::Int;
 *
 * let a = Int::from_str_radix("ff", 16).unwrap();
 * let b: Int = "-10".parse().unwrap();
 * assert_eq!(&a + &b, 245);
 * assert_eq!(b.umod(&Int::from(3)).unwrap(), 2);
 * ```
 */

#![crate_type = "lib"]
#![crate_name = "redint"]

pub mod error;
pub mod ll;

#[macro_use]
pub mod int;
mod bits;
mod convert;
mod gcd;

pub mod red;
pub mod traits;

// Re-exports

pub use crate::convert::{Endian, MAX_SAFE_INTEGER};
pub use crate::error::{Error, Result};
pub use crate::gcd::Egcd;
pub use crate::int::Int;
pub use crate::int::RandomInt;
pub use crate::red::{Red, Reduced};

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
 * Low-level limb kernels.
 *
 * Every function here works on little-endian slices of 26-bit limbs. Nothing in this module
 * knows about signs; sizes are implied by slice lengths, and output slices must be large
 * enough for the documented result.
 */

use std::cmp::Ordering;

use crate::error::Error;

mod addsub;
mod bit;
mod div;
mod mul;

pub mod base;
pub mod limb;
use self::limb::Limb;

pub use self::addsub::{add, add_1, add_n, decr, incr, sub, sub_1, sub_n};
pub use self::bit::{and_n, not, or_n, scan_1, shl, shr, xor_n};
pub use self::div::{divrem, divrem_1, rem_1};
pub use self::mul::{addmul_1, mul, mul_1, sqr, submul_1};

/**
 * Called when a divide by zero occurs.
 *
 * Operator overloads have no way to report an error, so like the primitive integer types
 * they unwind instead.
 */
#[cold]
#[inline(never)]
pub fn divide_by_zero() -> ! {
    panic!("{}", Error::DivisionByZero)
}

/**
 * Called when an operator overload is used outside its domain. The checked methods report
 * the same condition as an `Err`.
 */
#[cold]
#[inline(never)]
pub fn precondition_failed(err: Error) -> ! {
    panic!("{}", err)
}

/**
 * Returns the number of limbs in `xp` up to and including the most significant non-zero
 * limb. Returns 0 if every limb is zero.
 */
#[inline]
pub fn normalize(xp: &[Limb]) -> usize {
    let mut n = xp.len();
    while n > 0 && xp[n - 1] == 0 {
        n -= 1;
    }
    n
}

/**
 * Checks that all limbs in `xp` are zero
 */
#[inline]
pub fn is_zero(xp: &[Limb]) -> bool {
    xp.iter().all(|&l| l == 0)
}

/**
 * Sets every limb in `wp` to zero
 */
#[inline]
pub fn zero(wp: &mut [Limb]) {
    for w in wp.iter_mut() {
        *w = 0;
    }
}

/**
 * Compares `xp` and `yp`, which must be the same length, returning whether
 * `xp` is less than, equal to or greater than `yp`
 */
pub fn cmp(xp: &[Limb], yp: &[Limb]) -> Ordering {
    debug_assert_eq!(xp.len(), yp.len());

    for (x, y) in xp.iter().rev().zip(yp.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }

    Ordering::Equal
}

/**
 * Compares two magnitudes of possibly different lengths. Both must be normalized.
 */
#[inline]
pub fn cmp_sized(xp: &[Limb], yp: &[Limb]) -> Ordering {
    match xp.len().cmp(&yp.len()) {
        Ordering::Equal => cmp(xp, yp),
        o => o,
    }
}

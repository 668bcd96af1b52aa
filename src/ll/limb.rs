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
 * A "Limb" is a single digit in base 2^26.
 *
 * Limbs are stored in a `u32`, so the top six bits of the storage are always clear. Keeping
 * the radix well below the storage width means a product of two limbs (52 bits) plus a
 * handful of carries always fits in a `u64` without overflow checks.
 */

pub type BaseInt = u32;

/// A single 26-bit digit. Only the low `BITS` bits may be set.
pub type Limb = BaseInt;

/// Wide type used to hold products and carries.
pub type DoubleLimb = u64;

/// Number of significant bits in a limb.
pub const BITS: usize = 26;

/// The limb radix, 2^26.
pub const BASE: DoubleLimb = 1 << BITS;

/// Mask selecting the valid bits of a limb.
pub const MASK: Limb = (1 << BITS) - 1;

/// Half a limb, used by the split multiplication kernel.
pub const HALF_BITS: usize = BITS / 2;
pub const HALF_MASK: Limb = (1 << HALF_BITS) - 1;

/**
 * Returns the number of significant bits in `l`, i.e. the position of the highest set bit
 * plus one. Returns 0 for 0.
 */
#[inline(always)]
pub fn count_bits(l: Limb) -> u32 {
    debug_assert!(l <= MASK);
    BaseInt::BITS - l.leading_zeros()
}

/**
 * Returns the number of leading zeros of `l` within the 26 significant bits.
 */
#[inline(always)]
pub fn leading_zeros(l: Limb) -> u32 {
    BITS as u32 - count_bits(l)
}

/**
 * Returns the number of trailing zeros in `l`. Returns 26 for 0.
 */
#[inline(always)]
pub fn trailing_zeros(l: Limb) -> u32 {
    if l == 0 {
        BITS as u32
    } else {
        l.trailing_zeros()
    }
}

/**
 * Returns whether or not the highest bit in the limb is set.
 *
 * Division algorithms often require the highest limb of the divisor
 * to be `d >= BASE/2`.
 */
#[inline(always)]
pub fn high_bit_set(l: Limb) -> bool {
    l & (1 << (BITS - 1)) != 0
}

/**
 * Splits a wide value into its low limb and the remaining high part.
 */
#[inline(always)]
pub fn split(w: DoubleLimb) -> (DoubleLimb, Limb) {
    (w >> BITS, (w as Limb) & MASK)
}

/**
 * Splits the limb into a high and a low 13-bit half, as (high, low).
 */
#[inline(always)]
pub fn split_half(l: Limb) -> (Limb, Limb) {
    (l >> HALF_BITS, l & HALF_MASK)
}

/**
 * Performs `u * v` returning the two-limb result as (high, low).
 */
#[inline(always)]
pub fn mul(u: Limb, v: Limb) -> (Limb, Limb) {
    debug_assert!(u <= MASK && v <= MASK);
    let (h, l) = split(u as DoubleLimb * v as DoubleLimb);
    (h as Limb, l)
}

/**
 * Divides the two-limb numerator `(nh, nl)` by `d`, returning a single-limb
 * quotient, Q, and remainder, R, as (Q, R).
 *
 * In order to ensure a single-limb result `nh` must be less than `d`.
 */
#[inline(always)]
pub fn div(nh: Limb, nl: Limb, d: Limb) -> (Limb, Limb) {
    debug_assert!(d != 0);
    debug_assert!(nh < d);
    debug_assert!(nl <= MASK);

    let n = ((nh as DoubleLimb) << BITS) | nl as DoubleLimb;
    let d = d as DoubleLimb;
    ((n / d) as Limb, (n % d) as Limb)
}

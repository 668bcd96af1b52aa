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

//! Radix conversion kernels. Digits are raw values (`0..base`), most-significant first.

use crate::ll;
use crate::ll::limb::{self, DoubleLimb, Limb, BITS, MASK};

/// Information for converting to/from a given base, B. Stored in a table generated
/// by build.rs
struct Base {
    /// Number of base-B digits whose value always fits below the limb radix.
    digits_per_limb: u32,
    /// The "big base", B^digits_per_limb.
    big_base: Limb,
}
// Include BASES table
include!(concat!(env!("OUT_DIR"), "/bases_table.rs"));

/// Lowest supported radix.
pub const MIN_BASE: u32 = 2;
/// Highest supported radix (digits `0-9a-z`).
pub const MAX_BASE: u32 = 36;

/// Number of base-`base` digits packed into one limb chunk.
#[inline]
pub fn digits_per_limb(base: u32) -> usize {
    debug_assert!(base >= MIN_BASE && base <= MAX_BASE);
    BASES[base as usize].digits_per_limb as usize
}

/// `base` raised to `digits_per_limb(base)`.
#[inline]
pub fn big_base(base: u32) -> Limb {
    debug_assert!(base >= MIN_BASE && base <= MAX_BASE);
    BASES[base as usize].big_base
}

/// Returns the number of bits per digit if `base` is a power of two.
#[inline]
fn pow2_bits(base: u32) -> Option<usize> {
    if base.is_power_of_two() {
        Some(base.trailing_zeros() as usize)
    } else {
        None
    }
}

/**
 * Converts the digit string `digits` in the given base to limbs. The result is not
 * normalized.
 */
pub fn from_base(digits: &[u8], base: u32) -> Vec<Limb> {
    debug_assert!(base >= MIN_BASE && base <= MAX_BASE);
    debug_assert!(digits.iter().all(|&d| (d as u32) < base));

    match pow2_bits(base) {
        Some(bits) => from_pow2(digits, bits),
        None => from_base_chunked(digits, base),
    }
}

/**
 * Packs digits of `bits` bits each, starting at the least significant digit. A digit that
 * straddles a limb boundary is split between the two limbs.
 */
fn from_pow2(digits: &[u8], bits: usize) -> Vec<Limb> {
    let mut out = vec![0; (digits.len() * bits) / BITS + 2];

    let mut j = 0;
    let mut off = 0;
    for &d in digits.iter().rev() {
        let d = d as Limb;
        out[j] |= (d << off) & MASK;
        if off + bits > BITS {
            out[j + 1] |= d >> (BITS - off);
        }
        off += bits;
        if off >= BITS {
            off -= BITS;
            j += 1;
        }
    }

    out
}

// w = w * m + a, growing `wp` by a limb if needed
fn mul_add_1(wp: &mut Vec<Limb>, m: Limb, a: Limb) {
    let mut cl = a as DoubleLimb;
    for w in wp.iter_mut() {
        let (h, l) = limb::split(*w as DoubleLimb * m as DoubleLimb + cl);
        *w = l;
        cl = h;
    }
    if cl != 0 {
        wp.push(cl as Limb);
    }
}

/**
 * Reads the digits in chunks of `digits_per_limb`, so every chunk's value is a single limb,
 * folding each one in with a multiply by B^chunk_len and an add.
 */
fn from_base_chunked(digits: &[u8], base: u32) -> Vec<Limb> {
    let mut out = Vec::with_capacity(digits.len() / digits_per_limb(base) + 2);
    out.push(0);

    for chunk in digits.chunks(digits_per_limb(base)) {
        let mut val: Limb = 0;
        let mut mult: Limb = 1;
        for &d in chunk {
            val = val * base + d as Limb;
            mult *= base;
        }
        mul_add_1(&mut out, mult, val);
    }

    out
}

/**
 * Converts `xp` to digits in the given base. Zero produces a single `0` digit; otherwise
 * there are no leading zero digits.
 */
pub fn to_base(xp: &[Limb], base: u32) -> Vec<u8> {
    debug_assert!(base >= MIN_BASE && base <= MAX_BASE);

    let xs = ll::normalize(xp);
    if xs == 0 {
        return vec![0];
    }
    let xp = &xp[..xs];

    match pow2_bits(base) {
        Some(bits) => to_pow2(xp, bits),
        None => to_base_chunked(xp, base),
    }
}

// Fast path for powers-of-two, since each digit is just a run of bits
fn to_pow2(xp: &[Limb], bits: usize) -> Vec<u8> {
    let xs = xp.len();
    let total_bits = xs * BITS - limb::leading_zeros(xp[xs - 1]) as usize;
    let ndigits = (total_bits + bits - 1) / bits;
    let digit_mask = (1 << bits) - 1;

    let mut out = Vec::with_capacity(ndigits);
    for i in (0..ndigits).rev() {
        let pos = i * bits;
        let (j, off) = (pos / BITS, pos % BITS);
        let mut v = xp[j] >> off;
        if off + bits > BITS && j + 1 < xs {
            v |= xp[j + 1] << (BITS - off);
        }
        out.push((v & digit_mask) as u8);
    }

    out
}

fn to_base_chunked(xp: &[Limb], base: u32) -> Vec<u8> {
    let dpl = digits_per_limb(base);
    let big_base = big_base(base);

    let mut n = xp.to_vec();
    let mut q = vec![0; xp.len()];
    // Least significant digit first, reversed at the end
    let mut out = Vec::with_capacity(xp.len() * dpl);

    while !n.is_empty() {
        let mut r = ll::divrem_1(&mut q[..n.len()], &n, big_base);
        let qs = ll::normalize(&q[..n.len()]);
        n.clear();
        n.extend_from_slice(&q[..qs]);

        if n.is_empty() {
            // Most significant chunk, no zero padding
            while r != 0 {
                out.push((r % base) as u8);
                r /= base;
            }
        } else {
            for _ in 0..dpl {
                out.push((r % base) as u8);
                r /= base;
            }
        }
    }

    out.reverse();
    out
}

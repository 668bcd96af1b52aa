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

//! Conversions between `Int` and strings, byte buffers and primitive numbers.

use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::int::Int;
use crate::ll::base::{self, MAX_BASE, MIN_BASE};
use crate::ll::limb::{DoubleLimb, Limb, BITS, MASK};

/// The largest magnitude that converts exactly to and from an `f64`, 2^53 - 1.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Byte order for buffer conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

fn check_base(base: u32) -> Result<()> {
    if base < MIN_BASE || base > MAX_BASE {
        Err(Error::InvalidBase(base))
    } else {
        Ok(())
    }
}

impl Int {
    /**
     * Creates a new Int from the given string in base `base`, with an optional leading `-`.
     * Letters are accepted in either case.
     */
    pub fn from_str_radix(src: &str, base: u32) -> Result<Int> {
        check_base(base)?;

        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };
        if digits.is_empty() {
            return Err(Error::Empty);
        }

        let mut buf = Vec::with_capacity(digits.len());
        for c in digits.chars() {
            let d = c.to_digit(base).ok_or(Error::InvalidDigit { digit: c, base })?;
            buf.push(d as u8);
        }

        Ok(Int::from_limbs(base::from_base(&buf, base), negative))
    }

    /**
     * Returns a string containing the value of self in base `base`, using lower-case letters
     * for bases greater than ten.
     */
    pub fn to_str_radix(&self, base: u32) -> Result<String> {
        self.to_str_padded(base, 1)
    }

    /**
     * Like `to_str_radix`, but left-pads the digits with zeros to a multiple of `padding`
     * digits. A padding of zero is treated as one.
     */
    pub fn to_str_padded(&self, base: u32, padding: usize) -> Result<String> {
        check_base(base)?;

        let digits = self.digit_string(base, false, padding);
        if self.negative {
            Ok(format!("-{}", digits))
        } else {
            Ok(digits)
        }
    }

    // The digits of the magnitude, without sign
    fn digit_string(&self, base: u32, upper: bool, padding: usize) -> String {
        let digits = base::to_base(&self.limbs, base);
        let padding = cmp::max(padding, 1);
        let pad = (padding - digits.len() % padding) % padding;
        let letter = if upper { b'A' } else { b'a' };

        let mut s = String::with_capacity(pad + digits.len());
        for _ in 0..pad {
            s.push('0');
        }
        for d in digits {
            let c = if d < 10 { b'0' + d } else { letter + (d - 10) };
            s.push(c as char);
        }
        s
    }

    /**
     * Creates a non-negative Int from a byte buffer in the given byte order.
     */
    pub fn from_bytes(bytes: &[u8], endian: Endian) -> Int {
        // Least-significant byte first
        let le: Vec<u8> = match endian {
            Endian::Little => bytes.to_vec(),
            Endian::Big => bytes.iter().rev().cloned().collect(),
        };

        let mut limbs = vec![0; (le.len() * 8) / BITS + 2];
        let mut j = 0;
        let mut off = 0;
        // Three bytes per step, always less than a limb
        for chunk in le.chunks(3) {
            let w = chunk.iter().rev().fold(0 as DoubleLimb, |acc, &b| (acc << 8) | b as DoubleLimb);
            let shifted = w << off;
            limbs[j] |= (shifted as Limb) & MASK;
            limbs[j + 1] |= (shifted >> BITS) as Limb;
            off += 24;
            if off >= BITS {
                off -= BITS;
                j += 1;
            }
        }

        Int::from_limbs(limbs, false)
    }

    /**
     * Serializes the magnitude into `out` in the given byte order, zero-filling the unused
     * high bytes. Fails if the value is negative or `out` is shorter than `byte_length`.
     */
    pub fn write_bytes(&self, out: &mut [u8], endian: Endian) -> Result<()> {
        if self.negative {
            return Err(Error::NegativeOperand);
        }
        let needed = self.byte_length();
        if out.len() < needed {
            return Err(Error::BufferTooSmall { needed, available: out.len() });
        }

        let len = out.len();
        for k in 0..len {
            let b = if k < needed { self.byte_at(k) } else { 0 };
            match endian {
                Endian::Little => out[k] = b,
                Endian::Big => out[len - 1 - k] = b,
            }
        }

        Ok(())
    }

    /**
     * Serializes the magnitude into a new buffer. With `len` the buffer has exactly that
     * many bytes, otherwise it is as short as possible (one byte for zero).
     */
    pub fn to_bytes(&self, endian: Endian, len: Option<usize>) -> Result<Vec<u8>> {
        let len = len.unwrap_or_else(|| cmp::max(self.byte_length(), 1));
        let mut out = vec![0; len];
        self.write_bytes(&mut out, endian)?;
        Ok(out)
    }

    // Byte `k` of the magnitude, counting from the least significant
    fn byte_at(&self, k: usize) -> u8 {
        let pos = k * 8;
        let (j, off) = (pos / BITS, pos % BITS);
        if j >= self.limbs.len() {
            return 0;
        }
        let mut v = self.limbs[j] >> off;
        if off + 8 > BITS && j + 1 < self.limbs.len() {
            v |= self.limbs[j + 1] << (BITS - off);
        }
        v as u8
    }

    /**
     * Converts an integral `f64` within `±MAX_SAFE_INTEGER`.
     */
    pub fn from_f64(n: f64) -> Result<Int> {
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(Error::NotAnInteger);
        }
        if n.abs() > MAX_SAFE_INTEGER as f64 {
            return Err(Error::Overflow("safe integer range"));
        }
        Ok(Int::from(n as i64))
    }

    /**
     * Converts to an `i64` if the magnitude is at most `MAX_SAFE_INTEGER`, so the result
     * is also exact as an `f64`.
     */
    pub fn to_number(&self) -> Result<i64> {
        match self.magnitude_u128() {
            Some(m) if m <= MAX_SAFE_INTEGER as u128 => {
                let m = m as i64;
                Ok(if self.negative { -m } else { m })
            }
            _ => Err(Error::Overflow("safe integer range")),
        }
    }

    /// Nearest `f64`, or infinity when out of range.
    pub fn to_f64(&self) -> f64 {
        let radix = (1u64 << BITS) as f64;
        let m = self.limbs.iter().rev().fold(0.0, |acc, &l| acc * radix + l as f64);
        if self.negative { -m } else { m }
    }

    /**
     * Returns the `width`-bit two's-complement encoding of self: unchanged when
     * non-negative, otherwise `!|self| + 1` over `width` bits.
     */
    pub fn to_twos(&self, width: usize) -> Int {
        if self.negative {
            let mut r = self.abs().notn(width);
            r.iaddn(1);
            r
        } else {
            self.clone()
        }
    }

    /**
     * Interprets self as a `width`-bit two's-complement value, the inverse of `to_twos`.
     */
    pub fn from_twos(&self, width: usize) -> Int {
        if width > 0 && self.testn(width - 1) {
            let mut r = self.notn(width);
            r.iaddn(1);
            r.negate();
            r
        } else {
            self.clone()
        }
    }
}

fn from_magnitude(mut mag: u128, negative: bool) -> Int {
    let mut limbs = Vec::with_capacity(5);
    loop {
        limbs.push((mag as Limb) & MASK);
        mag >>= BITS;
        if mag == 0 {
            break;
        }
    }
    Int::from_limbs(limbs, negative)
}

macro_rules! impl_from_prim (
    (signed $($t:ty),*) => {
        $(impl From<$t> for Int {
            fn from(val: $t) -> Int {
                from_magnitude((val as i128).unsigned_abs(), val < 0)
            }
        })*
    };
    (unsigned $($t:ty),*) => {
        $(impl From<$t> for Int {
            fn from(val: $t) -> Int {
                from_magnitude(val as u128, false)
            }
        })*
    }
);

impl_from_prim!(signed   i8, i16, i32, i64, i128, isize);
impl_from_prim!(unsigned u8, u16, u32, u64, u128, usize);

// Conversion *to* primitives fails rather than truncating.

macro_rules! impl_try_from_int (
    ($($t:ident),*) => {
        $(impl<'a> TryFrom<&'a Int> for $t {
            type Error = Error;

            fn try_from(i: &'a Int) -> Result<$t> {
                let overflow = || Error::Overflow(stringify!($t));
                let mag = i.magnitude_u128().ok_or_else(overflow)?;
                if i.negative {
                    let min_mag = (<$t>::min_value() as i128).unsigned_abs();
                    if mag > min_mag {
                        return Err(overflow());
                    }
                    Ok((mag as i128).wrapping_neg() as $t)
                } else {
                    if mag > <$t>::max_value() as u128 {
                        return Err(overflow());
                    }
                    Ok(mag as $t)
                }
            }
        })*
    }
);

impl_try_from_int!(i32, u32, i64, u64, i128, u128, isize, usize);

impl FromStr for Int {
    type Err = Error;

    fn from_str(src: &str) -> Result<Int> {
        Int::from_str_radix(src, 10)
    }
}

// Number formatting - There's not much difference between the impls,
// hence the macro

macro_rules! impl_fmt (
    ($t:path, $radix:expr, $upper:expr, $prefix:expr) => {
        impl $t for Int {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let s = self.digit_string($radix, $upper, 1);
                f.pad_integral(!self.negative, $prefix, &s)
            }
        }
    };

    ($t:path, $radix:expr, $prefix:expr) => {
        impl_fmt!($t, $radix, false, $prefix);
    }
);

impl_fmt!(fmt::Binary,    2, "0b");
impl_fmt!(fmt::Octal,     8, "0o");
impl_fmt!(fmt::Display,  10, "");
impl_fmt!(fmt::Debug,    10, "");
impl_fmt!(fmt::LowerHex, 16, false, "0x");
impl_fmt!(fmt::UpperHex, 16, true, "0x");

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

//! Bit-level operations. Unless noted otherwise these act on the magnitude and keep the sign.

use std::mem;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::error::{Error, Result};
use crate::int::Int;
use crate::ll;
use crate::ll::limb::{self, Limb, BITS};

impl Int {
    /// Number of bits in the magnitude. Zero has no bits.
    pub fn bit_length(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() - 1) * BITS + limb::count_bits(top) as usize
    }

    /// Number of bytes needed to hold the magnitude.
    pub fn byte_length(&self) -> usize {
        (self.bit_length() + 7) / 8
    }

    /// Number of trailing zero bits. Zero has none.
    pub fn zero_bits(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            ll::scan_1(&self.limbs) as usize
        }
    }

    /// Returns whether bit `bit` of the magnitude is set.
    pub fn testn(&self, bit: usize) -> bool {
        let (j, off) = (bit / BITS, bit % BITS);
        j < self.limbs.len() && (self.limbs[j] >> off) & 1 == 1
    }

    /// Sets or clears bit `bit` of the magnitude.
    pub fn setn(&mut self, bit: usize, val: bool) {
        let (j, off) = (bit / BITS, bit % BITS);
        self.expand(j + 1);
        if val {
            self.limbs[j] |= 1 << off;
        } else {
            self.limbs[j] &= !(1 << off);
        }
        self.strip();
    }

    /// Returns the lowest limb of the magnitude masked with `mask`.
    #[inline]
    pub fn andln(&self, mask: Limb) -> Limb {
        self.limbs[0] & mask
    }

    // Keeps only the low `bits` bits of the magnitude
    pub(crate) fn mask_magnitude(&mut self, bits: usize) {
        let (n, off) = (bits / BITS, bits % BITS);
        if n >= self.limbs.len() {
            return;
        }
        if off == 0 {
            self.limbs.truncate(n);
        } else {
            self.limbs.truncate(n + 1);
            self.limbs[n] &= (1 << off) - 1;
        }
        self.strip();
    }

    /// Returns the low `bits` bits of self. Only defined for non-negative values.
    pub fn maskn(&self, bits: usize) -> Result<Int> {
        let mut r = self.clone();
        r.imaskn(bits)?;
        Ok(r)
    }

    pub fn imaskn(&mut self, bits: usize) -> Result<()> {
        if self.negative {
            return Err(Error::NegativeOperand);
        }
        self.mask_magnitude(bits);
        Ok(())
    }

    /**
     * Inverts the low `width` bits of the magnitude. Bits of the top partial limb above
     * `width` are cleared, and whole limbs above it are left alone.
     */
    pub fn inotn(&mut self, width: usize) {
        let n = (width + BITS - 1) / BITS;
        self.expand(n);
        ll::not(&mut self.limbs[..n]);
        let off = width % BITS;
        if off != 0 {
            self.limbs[n - 1] &= (1 << off) - 1;
        }
        self.strip();
    }

    pub fn notn(&self, width: usize) -> Int {
        let mut r = self.clone();
        r.inotn(width);
        r
    }

    /// Shifts the magnitude left by `bits`.
    pub fn ishln(&mut self, bits: usize) {
        if self.is_zero() || bits == 0 {
            return;
        }
        let (n, cnt) = (bits / BITS, (bits % BITS) as u32);
        let c = ll::shl(&mut self.limbs, cnt);
        if c != 0 {
            self.limbs.push(c);
        }
        if n > 0 {
            let high = mem::replace(&mut self.limbs, vec![0; n]);
            self.limbs.extend(high);
        }
    }

    /// Shifts the magnitude right by `bits`, so negative values truncate toward zero.
    pub fn ishrn(&mut self, bits: usize) {
        let (n, cnt) = (bits / BITS, (bits % BITS) as u32);
        if n >= self.limbs.len() {
            *self = Int::zero();
            return;
        }
        self.limbs.drain(..n);
        ll::shr(&mut self.limbs, cnt);
        self.strip();
    }

    pub fn shln(&self, bits: usize) -> Int {
        let mut r = self.clone();
        r.ishln(bits);
        r
    }

    pub fn shrn(&self, bits: usize) -> Int {
        let mut r = self.clone();
        r.ishrn(bits);
        r
    }

    /**
     * Shifts right by `bits`, also returning the bits shifted out as a non-negative value.
     */
    pub fn shr_extended(&self, bits: usize) -> (Int, Int) {
        let mut low = self.abs();
        low.mask_magnitude(bits);
        (self.shrn(bits), low)
    }

    /// Bitwise AND of the magnitudes.
    pub fn uand(&self, other: &Int) -> Int {
        let n = std::cmp::min(self.limbs.len(), other.limbs.len());
        let mut limbs = self.limbs[..n].to_vec();
        ll::and_n(&mut limbs, &other.limbs[..n]);
        Int::from_limbs(limbs, false)
    }

    /// Bitwise OR of the magnitudes.
    pub fn uor(&self, other: &Int) -> Int {
        let (long, short) = longer_first(self, other);
        let mut limbs = long.limbs.clone();
        ll::or_n(&mut limbs, &short.limbs);
        Int::from_limbs(limbs, false)
    }

    /// Bitwise XOR of the magnitudes.
    pub fn uxor(&self, other: &Int) -> Int {
        let (long, short) = longer_first(self, other);
        let mut limbs = long.limbs.clone();
        ll::xor_n(&mut limbs, &short.limbs);
        Int::from_limbs(limbs, false)
    }

    /// Bitwise AND, defined only when neither operand is negative.
    pub fn checked_and(&self, other: &Int) -> Result<Int> {
        check_unsigned(self, other)?;
        Ok(self.uand(other))
    }

    /// Bitwise OR, defined only when neither operand is negative.
    pub fn checked_or(&self, other: &Int) -> Result<Int> {
        check_unsigned(self, other)?;
        Ok(self.uor(other))
    }

    /// Bitwise XOR, defined only when neither operand is negative.
    pub fn checked_xor(&self, other: &Int) -> Result<Int> {
        check_unsigned(self, other)?;
        Ok(self.uxor(other))
    }
}

fn longer_first<'a>(x: &'a Int, y: &'a Int) -> (&'a Int, &'a Int) {
    if x.limbs.len() >= y.limbs.len() {
        (x, y)
    } else {
        (y, x)
    }
}

fn check_unsigned(x: &Int, y: &Int) -> Result<()> {
    if x.negative || y.negative {
        Err(Error::NegativeOperand)
    } else {
        Ok(())
    }
}

macro_rules! impl_bitop_assign {
    ($tr_assign:ident, $method_assign:ident, $checked:ident) => {
        impl<'a> $tr_assign<&'a Int> for Int {
            fn $method_assign(&mut self, other: &'a Int) {
                match self.$checked(other) {
                    Ok(r) => *self = r,
                    Err(e) => ll::precondition_failed(e),
                }
            }
        }
    };
}

impl_bitop_assign!(BitAndAssign, bitand_assign, checked_and);
impl_bitop_assign!(BitOrAssign, bitor_assign, checked_or);
impl_bitop_assign!(BitXorAssign, bitxor_assign, checked_xor);

impl_binop_via_assign!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_binop_via_assign!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_binop_via_assign!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl ShlAssign<usize> for Int {
    #[inline]
    fn shl_assign(&mut self, cnt: usize) {
        self.ishln(cnt);
    }
}

impl ShrAssign<usize> for Int {
    #[inline]
    fn shr_assign(&mut self, cnt: usize) {
        self.ishrn(cnt);
    }
}

impl Shl<usize> for Int {
    type Output = Int;

    #[inline]
    fn shl(mut self, cnt: usize) -> Int {
        self.ishln(cnt);
        self
    }
}

impl<'a> Shl<usize> for &'a Int {
    type Output = Int;

    #[inline]
    fn shl(self, cnt: usize) -> Int {
        self.shln(cnt)
    }
}

impl Shr<usize> for Int {
    type Output = Int;

    #[inline]
    fn shr(mut self, cnt: usize) -> Int {
        self.ishrn(cnt);
        self
    }
}

impl<'a> Shr<usize> for &'a Int {
    type Output = Int;

    #[inline]
    fn shr(self, cnt: usize) -> Int {
        self.shrn(cnt)
    }
}

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

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::{
    Add, Sub, Mul, Div, Rem, Neg,
    AddAssign, SubAssign, MulAssign, DivAssign, RemAssign,
};

use num_integer::Integer;
use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};
use rand::Rng;

use crate::error::{Error, Result};
use crate::ll;
use crate::ll::limb::{Limb, BITS, MASK};
use crate::traits::DivRem;

/**
 * An arbitrary-precision signed integer.
 *
 * The magnitude is stored as little-endian 26-bit limbs. The representation is always
 * canonical: there are no leading zero limbs (zero is a single `0` limb) and zero is never
 * negative, so derived equality and hashing are value equality and hashing.
 *
 * ## Creation
 *
 * - `Int::zero` and `Int::one` construct a zero- and one-valued `Int` respectively.
 *
 * - `Int::from` will convert from any primitive integer type to an `Int` of the same value
 *
 *   ```
 *   # use redint::Int;
 *   let four = Int::from(4);
 *   ```
 *
 * - `Int::from_str_radix` (or `str::parse` for base 10) parses a numeral, and
 *   `Int::from_bytes` reads a big- or little-endian byte buffer.
 *
 *   ```
 *   # use redint::Int;
 *   let a = Int::from_str_radix("ff", 16).unwrap();
 *   let b: Int = "255".parse().unwrap();
 *   assert_eq!(a, b);
 *   ```
 *
 * ## Usage
 *
 * Arithmetic is available through the operators for any combination of owned and borrowed
 * operands (`a + b`, `&a * &b`, ...), and with `i32` right-hand sides, which use the
 * single-limb fast paths. Operators cannot report errors, so dividing by zero through `/` or
 * `%` panics; the named methods (`checked_div`, `umod`, ...) return a `Result` instead.
 *
 * ### Semantics
 *
 * Division truncates toward zero, and the remainder of `N / D` takes the sign of `N`, so
 * `N = Q*D + R` always holds. `umod` gives the non-negative remainder and `div_round` rounds
 * the quotient to nearest, with ties away from zero.
 */
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Int {
    pub(crate) limbs: Vec<Limb>,
    pub(crate) negative: bool,
}

impl Int {
    pub fn zero() -> Int {
        Int { limbs: vec![0], negative: false }
    }

    pub fn one() -> Int {
        Int::from_single_limb(1)
    }

    /// Creates a new non-negative Int from the given Limb.
    pub fn from_single_limb(limb: Limb) -> Int {
        debug_assert!(limb <= MASK);
        Int { limbs: vec![limb], negative: false }
    }

    /**
     * Creates an Int from little-endian limbs and a sign. Every limb must be below 2^26.
     * Leading zero limbs are stripped and a zero magnitude is never negative.
     */
    pub fn from_limbs(mut limbs: Vec<Limb>, negative: bool) -> Int {
        debug_assert!(limbs.iter().all(|&l| l <= MASK));
        if limbs.is_empty() {
            limbs.push(0);
        }
        let mut i = Int { limbs, negative };
        i.strip();
        i
    }

    /// The significant limbs of the magnitude, least-significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of significant limbs. Zero has one limb.
    #[inline]
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /**
     * Drops leading zero limbs, keeping at least one, and clears the sign of zero.
     */
    pub(crate) fn strip(&mut self) {
        let n = ll::normalize(&self.limbs);
        if n == 0 {
            self.limbs.truncate(1);
            if self.limbs.is_empty() {
                self.limbs.push(0);
            }
            self.negative = false;
        } else {
            self.limbs.truncate(n);
        }
    }

    /**
     * Zero-extends the limbs to at least `n`. The value is not canonical again until the
     * next `strip`.
     */
    pub(crate) fn expand(&mut self, n: usize) {
        if self.limbs.len() < n {
            self.limbs.resize(n, 0);
        }
    }

    pub(crate) fn well_formed(&self) -> bool {
        let len = self.limbs.len();
        if len == 0 || self.limbs.iter().any(|&l| l > MASK) {
            return false;
        }
        if len == 1 && self.limbs[0] == 0 {
            return !self.negative;
        }
        self.limbs[len - 1] != 0
    }

    /**
     * Returns the sign of the Int as either -1, 0 or 1 for self being negative, zero
     * or positive, respectively.
     */
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns the absolute value of self.
    pub fn abs(&self) -> Int {
        Int { limbs: self.limbs.clone(), negative: false }
    }

    /// Flips the sign of self. Zero stays non-negative.
    #[inline]
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Returns the least-significant limb of the magnitude.
    #[inline]
    pub fn to_single_limb(&self) -> Limb {
        self.limbs[0]
    }

    /**
     * Compare the absolute value of self to the absolute value of other,
     * returning an Ordering with the result.
     */
    #[inline]
    pub fn ucmp(&self, other: &Int) -> Ordering {
        ll::cmp_sized(&self.limbs, &other.limbs)
    }

    /// Compares self with a small signed value.
    pub fn cmpn(&self, n: i32) -> Ordering {
        cmp_prim(self, n.unsigned_abs() as u128, n < 0)
    }

    /// The magnitude as a `u128`, if it fits.
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        if self.bit_length() > 128 {
            return None;
        }
        Some(self.limbs.iter().rev().fold(0u128, |acc, &l| (acc << BITS) | l as u128))
    }

    // self += other, with `other_neg` standing in for the sign of other
    fn add_signed(&mut self, other: &Int, other_neg: bool) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            self.limbs.clone_from(&other.limbs);
            self.negative = other_neg;
            return;
        }

        if self.negative == other_neg {
            mag_add(&mut self.limbs, &other.limbs);
            return;
        }

        match self.ucmp(other) {
            Ordering::Equal => {
                *self = Int::zero();
            }
            Ordering::Greater => {
                mag_sub(&mut self.limbs, &other.limbs);
                self.strip();
            }
            Ordering::Less => {
                let mut r = other.limbs.clone();
                mag_sub(&mut r, &self.limbs);
                self.limbs = r;
                self.negative = other_neg;
                self.strip();
            }
        }
    }

    // self += (-1)^neg * l for a single limb `l`
    fn add_limb(&mut self, l: Limb, neg: bool) {
        debug_assert!(l <= MASK);
        if l == 0 {
            return;
        }
        if self.is_zero() {
            self.limbs[0] = l;
            self.negative = neg;
            return;
        }

        if self.negative == neg {
            let c = ll::incr(&mut self.limbs, l);
            if c != 0 {
                self.limbs.push(c);
            }
        } else if self.limbs.len() == 1 && self.limbs[0] < l {
            self.limbs[0] = l - self.limbs[0];
            self.negative = neg;
        } else {
            ll::decr(&mut self.limbs, l);
            self.strip();
        }
    }

    // self *= (-1)^neg * l for a single limb `l`
    fn mul_limb(&mut self, l: Limb, neg: bool) {
        debug_assert!(l <= MASK);
        if l == 0 || self.is_zero() {
            *self = Int::zero();
            return;
        }

        let n = self.limbs.len();
        let mut w = vec![0; n + 1];
        w[n] = ll::mul_1(&mut w, &self.limbs, l);
        self.limbs = w;
        self.negative ^= neg;
        self.strip();
    }

    /// Returns `self + n`.
    pub fn addn(&self, n: i32) -> Int {
        let mut r = self.clone();
        r.iaddn(n);
        r
    }

    /// Adds `n` to self in place.
    pub fn iaddn(&mut self, n: i32) {
        match small_operand(n) {
            Some((l, neg)) => self.add_limb(l, neg),
            None => *self += &Int::from(n),
        }
    }

    /// Returns `self - n`.
    pub fn subn(&self, n: i32) -> Int {
        let mut r = self.clone();
        r.isubn(n);
        r
    }

    /// Subtracts `n` from self in place.
    pub fn isubn(&mut self, n: i32) {
        match small_operand(n) {
            Some((l, neg)) => self.add_limb(l, !neg),
            None => *self -= &Int::from(n),
        }
    }

    /// Returns `self * n`.
    pub fn muln(&self, n: i32) -> Int {
        let mut r = self.clone();
        r.imuln(n);
        r
    }

    /// Multiplies self by `n` in place.
    pub fn imuln(&mut self, n: i32) {
        match small_operand(n) {
            Some((l, neg)) => self.mul_limb(l, neg),
            None => *self *= &Int::from(n),
        }
    }

    /// Returns `self / n`, truncated toward zero.
    pub fn divn(&self, n: i32) -> Result<Int> {
        let mut r = self.clone();
        r.idivn(n)?;
        Ok(r)
    }

    /// Divides self by `n` in place, truncating toward zero.
    pub fn idivn(&mut self, n: i32) -> Result<()> {
        match small_operand(n) {
            Some((0, _)) => Err(Error::DivisionByZero),
            Some((l, neg)) => {
                let mut q = vec![0; self.limbs.len()];
                ll::divrem_1(&mut q, &self.limbs, l);
                self.limbs = q;
                self.negative ^= neg;
                self.strip();
                Ok(())
            }
            None => {
                *self = self.checked_div(&Int::from(n))?;
                Ok(())
            }
        }
    }

    /// Returns `self % n`, which takes the sign of self.
    pub fn modrn(&self, n: i32) -> Result<i32> {
        match small_operand(n) {
            Some((0, _)) => Err(Error::DivisionByZero),
            Some((l, _)) => {
                let r = ll::rem_1(&self.limbs, l) as i32;
                Ok(if self.negative { -r } else { r })
            }
            None => {
                let r = self.checked_rem(&Int::from(n))?;
                r.to_i32().ok_or(Error::Overflow("i32"))
            }
        }
    }

    fn mul_ref(&self, other: &Int) -> Int {
        if self.is_zero() || other.is_zero() {
            return Int::zero();
        }

        let mut w = vec![0; self.limbs.len() + other.limbs.len()];
        ll::mul(&mut w, &self.limbs, &other.limbs);
        Int::from_limbs(w, self.negative != other.negative)
    }

    /**
     * Returns the square of `self`.
     */
    pub fn sqr(&self) -> Int {
        if self.is_zero() {
            return Int::zero();
        }

        let mut w = vec![0; 2 * self.limbs.len()];
        ll::sqr(&mut w, &self.limbs);
        Int::from_limbs(w, false)
    }

    /**
     * Raises self to the power of `exp` by square-and-multiply over the bits of the
     * exponent, most significant first. Fails for a negative exponent.
     */
    pub fn pow(&self, exp: &Int) -> Result<Int> {
        if exp.negative {
            return Err(Error::NegativeOperand);
        }
        Ok(self.pow_bits(exp.bit_length(), |i| exp.testn(i)))
    }

    fn pow_bits<F: Fn(usize) -> bool>(&self, nbits: usize, bit: F) -> Int {
        let mut r = Int::one();
        for i in (0..nbits).rev() {
            r = r.sqr();
            if bit(i) {
                r = r.mul_ref(self);
            }
        }
        r
    }

    /**
     * Divide self by other, returning the quotient, Q, and remainder, R as (Q, R).
     *
     * With N = self, D = other, Q and R satisfy: `N = QD + R`. Q is truncated toward
     * zero and R has the sign of N.
     */
    pub fn divmod(&self, other: &Int) -> Result<(Int, Int)> {
        debug_assert!(self.well_formed());
        debug_assert!(other.well_formed());
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (q, r) = divrem_magnitude(&self.limbs, &other.limbs);
        Ok((Int::from_limbs(q, self.negative != other.negative),
            Int::from_limbs(r, self.negative)))
    }

    /// The quotient of `self / other`, truncated toward zero.
    pub fn checked_div(&self, other: &Int) -> Result<Int> {
        self.divmod(other).map(|(q, _)| q)
    }

    /// The remainder of `self / other`, with the sign of self.
    pub fn checked_rem(&self, other: &Int) -> Result<Int> {
        self.divmod(other).map(|(_, r)| r)
    }

    /// The remainder of `self / m` in `[0, |m|)`.
    pub fn umod(&self, m: &Int) -> Result<Int> {
        let mut r = self.checked_rem(m)?;
        if r.negative {
            r.add_signed(m, false);
        }
        Ok(r)
    }

    /**
     * The quotient of `self / other` rounded to the nearest integer. Halfway cases round
     * away from zero.
     */
    pub fn div_round(&self, other: &Int) -> Result<Int> {
        let (mut q, r) = self.divmod(other)?;
        if r.is_zero() {
            return Ok(q);
        }

        let mut r2 = r.limbs;
        let c = ll::shl(&mut r2, 1);
        if c != 0 {
            r2.push(c);
        }
        if ll::cmp_sized(&r2, &other.limbs) != Ordering::Less {
            q.add_limb(1, self.negative != other.negative);
        }
        Ok(q)
    }

    /// Floor division: the quotient rounds toward negative infinity and the remainder has
    /// the sign of the divisor.
    pub fn divmod_floor(&self, other: &Int) -> Result<(Int, Int)> {
        let (mut q, mut r) = self.divmod(other)?;
        if !r.is_zero() && r.negative != other.negative {
            q.add_limb(1, true);
            r.add_signed(other, other.negative);
        }
        Ok((q, r))
    }

    /// Number of set bits in the magnitude.
    pub fn count_ones(&self) -> usize {
        let bytes: Vec<u8> = self.limbs.iter().flat_map(|l| l.to_le_bytes()).collect();
        hamming::weight(&bytes) as usize
    }
}

#[inline]
fn small_operand(n: i32) -> Option<(Limb, bool)> {
    let mag = n.unsigned_abs();
    if mag <= MASK {
        Some((mag, n < 0))
    } else {
        None
    }
}

// wp += yp over magnitudes, growing wp as needed
fn mag_add(wp: &mut Vec<Limb>, yp: &[Limb]) {
    if wp.len() < yp.len() {
        wp.resize(yp.len(), 0);
    }
    let c = ll::add_n(wp, yp);
    let c = ll::incr(&mut wp[yp.len()..], c);
    if c != 0 {
        wp.push(c);
    }
}

// wp -= yp over magnitudes, requires |wp| >= |yp|
fn mag_sub(wp: &mut [Limb], yp: &[Limb]) {
    let b = ll::sub_n(wp, yp);
    let b = ll::decr(&mut wp[yp.len()..], b);
    debug_assert_eq!(b, 0);
}

pub(crate) fn divrem_magnitude(np: &[Limb], dp: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    if np.len() < dp.len() {
        return (vec![0], np.to_vec());
    }
    let mut q = vec![0; np.len() - dp.len() + 1];
    let mut r = vec![0; dp.len()];
    ll::divrem(&mut q, &mut r, np, dp);
    (q, r)
}

impl Default for Int {
    #[inline]
    fn default() -> Int {
        Int::zero()
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Int) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.ucmp(other),
            (true, true) => other.ucmp(self),
        }
    }
}

impl PartialOrd<Int> for Int {
    #[inline]
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_prim(x: &Int, mag: u128, neg: bool) -> Ordering {
    let other_neg = neg && mag != 0;
    let mag_cmp = || match x.magnitude_u128() {
        Some(v) => v.cmp(&mag),
        None => Ordering::Greater,
    };
    match (x.negative, other_neg) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => mag_cmp(),
        (true, true) => mag_cmp().reverse(),
    }
}

macro_rules! impl_cmp_prim {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Int {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.partial_cmp(other) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Int> for $t {
            #[inline]
            fn eq(&self, other: &Int) -> bool {
                other.eq(self)
            }
        }

        impl PartialOrd<$t> for Int {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                let v = *other as i128;
                Some(cmp_prim(self, v.unsigned_abs(), v < 0))
            }
        }

        impl PartialOrd<Int> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
                other.partial_cmp(self).map(|o| o.reverse())
            }
        }
    )*}
}

impl_cmp_prim!(i32, i64, u32, u64, usize);

impl<'a> AddAssign<&'a Int> for Int {
    #[inline]
    fn add_assign(&mut self, other: &'a Int) {
        self.add_signed(other, other.negative);
    }
}

impl<'a> SubAssign<&'a Int> for Int {
    #[inline]
    fn sub_assign(&mut self, other: &'a Int) {
        self.add_signed(other, !other.negative);
    }
}

impl<'a> MulAssign<&'a Int> for Int {
    #[inline]
    fn mul_assign(&mut self, other: &'a Int) {
        *self = self.mul_ref(other);
    }
}

impl<'a> DivAssign<&'a Int> for Int {
    fn div_assign(&mut self, other: &'a Int) {
        match self.checked_div(other) {
            Ok(q) => *self = q,
            Err(_) => ll::divide_by_zero(),
        }
    }
}

impl<'a> RemAssign<&'a Int> for Int {
    fn rem_assign(&mut self, other: &'a Int) {
        match self.checked_rem(other) {
            Ok(r) => *self = r,
            Err(_) => ll::divide_by_zero(),
        }
    }
}

/// Derives the by-value and by-reference forms of a binary operator from its
/// `OpAssign<&Int>` implementation.
macro_rules! impl_binop_via_assign {
    ($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident) => {
        impl $tr_assign<Int> for Int {
            #[inline]
            fn $method_assign(&mut self, other: Int) {
                self.$method_assign(&other);
            }
        }

        impl<'a> $tr<&'a Int> for Int {
            type Output = Int;

            #[inline]
            fn $method(mut self, other: &'a Int) -> Int {
                self.$method_assign(other);
                self
            }
        }

        impl $tr<Int> for Int {
            type Output = Int;

            #[inline]
            fn $method(mut self, other: Int) -> Int {
                self.$method_assign(&other);
                self
            }
        }

        impl<'a> $tr<Int> for &'a Int {
            type Output = Int;

            #[inline]
            fn $method(self, other: Int) -> Int {
                let mut r = self.clone();
                r.$method_assign(&other);
                r
            }
        }

        impl<'a, 'b> $tr<&'a Int> for &'b Int {
            type Output = Int;

            #[inline]
            fn $method(self, other: &'a Int) -> Int {
                let mut r = self.clone();
                r.$method_assign(other);
                r
            }
        }
    };
}

impl_binop_via_assign!(Add, add, AddAssign, add_assign);
impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign);
impl_binop_via_assign!(Mul, mul, MulAssign, mul_assign);
impl_binop_via_assign!(Div, div, DivAssign, div_assign);
impl_binop_via_assign!(Rem, rem, RemAssign, rem_assign);

impl Neg for Int {
    type Output = Int;

    #[inline]
    fn neg(mut self) -> Int {
        self.negate();
        self
    }
}

impl<'a> Neg for &'a Int {
    type Output = Int;

    #[inline]
    fn neg(self) -> Int {
        -self.clone()
    }
}

// Small-operand arithmetic. These go through the single-limb paths whenever the
// operand fits in a limb.

impl AddAssign<i32> for Int {
    #[inline]
    fn add_assign(&mut self, other: i32) {
        self.iaddn(other);
    }
}

impl SubAssign<i32> for Int {
    #[inline]
    fn sub_assign(&mut self, other: i32) {
        self.isubn(other);
    }
}

impl MulAssign<i32> for Int {
    #[inline]
    fn mul_assign(&mut self, other: i32) {
        self.imuln(other);
    }
}

impl DivAssign<i32> for Int {
    fn div_assign(&mut self, other: i32) {
        if self.idivn(other).is_err() {
            ll::divide_by_zero();
        }
    }
}

impl RemAssign<i32> for Int {
    fn rem_assign(&mut self, other: i32) {
        match self.modrn(other) {
            Ok(r) => *self = Int::from(r),
            Err(_) => ll::divide_by_zero(),
        }
    }
}

macro_rules! impl_arith_prim {
    ($($tr:ident $method:ident $method_assign:ident),*) => {$(
        impl $tr<i32> for Int {
            type Output = Int;

            #[inline]
            fn $method(mut self, other: i32) -> Int {
                self.$method_assign(other);
                self
            }
        }

        impl<'a> $tr<i32> for &'a Int {
            type Output = Int;

            #[inline]
            fn $method(self, other: i32) -> Int {
                let mut r = self.clone();
                r.$method_assign(other);
                r
            }
        }
    )*}
}

impl_arith_prim!(Add add add_assign, Sub sub sub_assign, Mul mul mul_assign,
                 Div div div_assign, Rem rem rem_assign);

impl<'a, 'b> DivRem<&'a Int> for &'b Int {
    type Output = (Int, Int);

    fn divrem(self, other: &'a Int) -> (Int, Int) {
        match self.divmod(other) {
            Ok(qr) => qr,
            Err(_) => ll::divide_by_zero(),
        }
    }
}

impl DivRem<i32> for Int {
    type Output = (Int, i32);

    fn divrem(self, other: i32) -> (Int, i32) {
        match (self.divn(other), self.modrn(other)) {
            (Ok(q), Ok(r)) => (q, r),
            _ => ll::divide_by_zero(),
        }
    }
}

impl Zero for Int {
    #[inline]
    fn zero() -> Int {
        Int::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}

impl One for Int {
    #[inline]
    fn one() -> Int {
        Int::one()
    }
}

impl Num for Int {
    type FromStrRadixErr = Error;

    fn from_str_radix(src: &str, radix: u32) -> Result<Int> {
        Int::from_str_radix(src, radix)
    }
}

impl Signed for Int {
    fn abs(&self) -> Int {
        Int::abs(self)
    }

    fn abs_sub(&self, other: &Int) -> Int {
        if self <= other {
            Int::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Int {
        Int::from(self.sign())
    }

    fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl Integer for Int {
    fn div_floor(&self, other: &Int) -> Int {
        match self.divmod_floor(other) {
            Ok((q, _)) => q,
            Err(_) => ll::divide_by_zero(),
        }
    }

    fn mod_floor(&self, other: &Int) -> Int {
        match self.divmod_floor(other) {
            Ok((_, r)) => r,
            Err(_) => ll::divide_by_zero(),
        }
    }

    fn gcd(&self, other: &Int) -> Int {
        Int::gcd(self, other)
    }

    fn lcm(&self, other: &Int) -> Int {
        Int::lcm(self, other)
    }

    fn is_multiple_of(&self, other: &Int) -> bool {
        match self.checked_rem(other) {
            Ok(r) => r.is_zero(),
            Err(_) => self.is_zero(),
        }
    }

    fn is_even(&self) -> bool {
        Int::is_even(self)
    }

    fn is_odd(&self) -> bool {
        Int::is_odd(self)
    }

    fn div_rem(&self, other: &Int) -> (Int, Int) {
        self.divrem(other)
    }
}

impl ToPrimitive for Int {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Int::to_f64(self))
    }
}

impl FromPrimitive for Int {
    fn from_i64(n: i64) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_u64(n: u64) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_i128(n: i128) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_u128(n: u128) -> Option<Int> {
        Some(Int::from(n))
    }

    fn from_f64(n: f64) -> Option<Int> {
        Int::from_f64(n).ok()
    }
}

impl Pow<u32> for Int {
    type Output = Int;

    fn pow(self, exp: u32) -> Int {
        Pow::pow(&self, exp)
    }
}

impl<'a> Pow<u32> for &'a Int {
    type Output = Int;

    fn pow(self, exp: u32) -> Int {
        let nbits = (32 - exp.leading_zeros()) as usize;
        self.pow_bits(nbits, |i| (exp >> i) & 1 == 1)
    }
}

/// Trait for generating random `Int`.
///
/// # Example
///
/// Generate a random `Int` of size `256` bits:
///
/// ```
/// use redint::RandomInt;
///
/// let mut rng = rand::thread_rng();
/// let big_i = rng.gen_int(256);
/// assert!(big_i.bit_length() <= 256);
/// ```
pub trait RandomInt {
    /// Generate a random unsigned `Int` of given bit size.
    fn gen_uint(&mut self, bits: usize) -> Int;
    /// Generate a random `Int` of given bit size.
    fn gen_int(&mut self, bits: usize) -> Int;
    /// Generate a random unsigned `Int` less than the given bound.
    /// Fails when the bound is zero or negative.
    fn gen_uint_below(&mut self, bound: &Int) -> Int;
    /// Generate a random `Int` within the given range.
    /// The lower bound is inclusive; the upper bound is exclusive.
    /// Fails when the upper bound is not greater than the lower bound.
    fn gen_int_range(&mut self, lbound: &Int, ubound: &Int) -> Int;
}

impl<R: Rng> RandomInt for R {
    fn gen_uint(&mut self, bits: usize) -> Int {
        assert!(bits > 0, "cannot generate an integer of zero bits");

        let limbs = bits / BITS;
        let rem = bits % BITS;

        let mut v = Vec::with_capacity(limbs + 1);
        for _ in 0..limbs {
            v.push(self.gen::<Limb>() & MASK);
        }
        if rem > 0 {
            v.push(self.gen::<Limb>() & ((1 << rem) - 1));
        }

        Int::from_limbs(v, false)
    }

    fn gen_int(&mut self, bits: usize) -> Int {
        let i = self.gen_uint(bits);

        if i.is_zero() {
            // Zero has only one representation, so re-roll half the time to keep it as
            // likely as any other value.
            if self.gen() {
                self.gen_uint(bits)
            } else {
                i
            }
        } else if self.gen() {
            -i
        } else {
            i
        }
    }

    fn gen_uint_below(&mut self, bound: &Int) -> Int {
        assert!(bound.sign() > 0, "bound must be positive");
        // Each draw succeeds with probability above one half.
        const ITER_LIMIT: usize = 10000;

        let bits = bound.bit_length();
        for _ in 0..ITER_LIMIT {
            let n = self.gen_uint(bits);
            if n < *bound {
                return n;
            }
        }

        panic!("no value below the bound generated in {} iterations", ITER_LIMIT);
    }

    fn gen_int_range(&mut self, lbound: &Int, ubound: &Int) -> Int {
        assert!(*lbound < *ubound, "empty range");
        lbound + self.gen_uint_below(&(ubound - lbound))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::DivRem;

    macro_rules! assert_mp_eq (
        ($l:expr, $r:expr) => (
            {
                let l : &Int = &$l;
                let r : &Int = &$r;
                if l != r {
                    println!("assertion failed: {} == {}", stringify!($l), stringify!($r));
                    panic!("{:} != {:}", l, r);
                }
            }
        )
    );

    fn int(s: &str) -> Int {
        s.parse().unwrap()
    }

    #[test]
    fn strip_leading_zero_limbs() {
        let a = Int::from_limbs(vec![5, 0, 0], false);
        assert_eq!(a.limbs(), &[5]);
        assert_eq!(a, Int::from(5));

        let z = Int::from_limbs(vec![0, 0, 0], true);
        assert_eq!(z.limb_len(), 1);
        assert!(!z.is_negative());
        assert_eq!(z, Int::zero());
        assert!(z.well_formed());

        let mut e = Int::from(7);
        e.expand(4);
        assert_eq!(e.limbs.len(), 4);
        e.strip();
        assert_mp_eq!(e, Int::from(7));
    }

    #[test]
    fn add() {
        let cases = [
            ("0", "0", "0"),
            ("1", "0", "1"),
            ("1", "1", "2"),
            ("190000000000000", "1", "190000000000001"),
            ("192834857324591531", "431343873217510631841", "431536708074835223372"),
            ("0", "-1", "-1"),
            ("1", "-1", "0"),
            ("100000000", "-1", "99999999"),
            ("-100", "-100", "-200"),
            ("-192834857324591531", "-431343873217510631841", "-431536708074835223372"),
            // (2**64 - 1) * 2**64 + 2**64 == 2**128
            ("340282366920938463444927863358058659840", "18446744073709551616",
             "340282366920938463463374607431768211456"),
        ];

        for &(l, r, a) in cases.iter() {
            let (l, r, a) = (int(l), int(r), int(a));

            assert_mp_eq!(&l + &r, a);
            assert_mp_eq!(&r + l.clone(), a);
            assert_mp_eq!(l + r, a);
        }
    }

    #[test]
    fn sub() {
        let cases = [
            ("0", "0", "0"),
            ("1", "0", "1"),
            ("1", "1", "0"),
            ("0", "1", "-1"),
            ("190000000000000", "1", "189999999999999"),
            ("192834857324591531", "431343873217510631841", "-431151038360186040310"),
            ("0", "-1", "1"),
            ("1", "-1", "2"),
            ("100000000", "-1", "100000001"),
            ("-100", "-100", "0"),
            ("-100", "100", "-200"),
            ("237", "236", "1"),
            ("-192834857324591531", "-431343873217510631841", "431151038360186040310"),
            // (2**64 - 1) * 2**64 - -2**64 == 2**128
            ("340282366920938463444927863358058659840", "-18446744073709551616",
             "340282366920938463463374607431768211456"),
        ];

        for &(l, r, a) in cases.iter() {
            let (l, r, a) = (int(l), int(r), int(a));

            assert_mp_eq!(&l - &r, a.clone());
            assert_mp_eq!(&l - r.clone(), a.clone());
            assert_mp_eq!(l.clone() - &r, a.clone());
            assert_mp_eq!(l - r, a);
        }
    }

    #[test]
    fn zero_is_never_negative() {
        let a = int("-12345678901234567890");
        let z = &a - &a;
        assert!(!z.is_negative());
        assert_eq!(z.sign(), 0);

        let z = &a * &Int::zero();
        assert!(!z.is_negative());

        let z = a.muln(0);
        assert!(!z.is_negative());

        let mut s = Int::from(-5);
        s.iaddn(5);
        assert!(!s.is_negative());
        assert!(s.is_zero());
    }

    #[test]
    fn small_operands() {
        let a = int("67108863"); // one full limb
        assert_mp_eq!(a.addn(1), int("67108864"));
        assert_mp_eq!(int("67108864").subn(1), a);
        assert_mp_eq!(Int::from(3).subn(5), Int::from(-2));
        assert_mp_eq!(Int::from(-3).addn(5), Int::from(2));
        assert_mp_eq!(a.muln(-2), int("-134217726"));
        // operands that don't fit in a limb take the general path
        assert_mp_eq!(Int::from(1).addn(i32::MAX), int("2147483648"));
        assert_mp_eq!(Int::from(0).subn(i32::MIN), int("2147483648"));
        assert_mp_eq!(Int::from(2).muln(i32::MIN), int("-4294967296"));

        assert_mp_eq!(int("-1000000000000").divn(7).unwrap(), int("-142857142857"));
        assert_eq!(int("-1000000000000").modrn(7).unwrap(), -1);
        assert_eq!(int("1000000000000").modrn(-7).unwrap(), 1);
        // 10^12 mod 2^31
        assert_eq!(int("1000000000000").modrn(i32::MIN).unwrap(), 1_420_103_680);
        assert_eq!(Int::from(5).divn(0), Err(Error::DivisionByZero));

        let mut x = Int::from(10);
        x += 5;
        x -= 20;
        x *= -3;
        assert_mp_eq!(x, Int::from(15));
        assert_mp_eq!(&x / 4, Int::from(3));
        assert_mp_eq!(&x % 4, Int::from(3));
    }

    #[test]
    fn mul() {
        let cases = [
            ("0", "0", "0"),
            ("1", "0", "0"),
            ("1", "1", "1"),
            ("1234", "-1", "-1234"),
            ("8", "9", "72"),
            ("-8", "-9", "72"),
            ("8", "-9", "-72"),
            ("1234567891011", "9876543210123", "12193263121400563935904353"),
            ("-1234567891011", "9876543210123", "-12193263121400563935904353"),
        ];

        for &(l, r, a) in cases.iter() {
            let (l, r, a) = (int(l), int(r), int(a));

            assert_mp_eq!(&l * &r, a);
            assert_mp_eq!(r * l, a);
        }
    }

    #[test]
    fn sqr_and_pow() {
        let bases = ["0", "1", "190000000000000", "192834857324591531",
                     "340282366920938463463374607431768211456", // 2**128
                     "-1", "-100", "-192834857324591531"];

        for b in bases.iter() {
            let b = int(b);
            assert_mp_eq!(b.sqr(), &b * &b);

            let mut x = Int::one();
            for e in 0..64 {
                assert_mp_eq!(Int::pow(&b, &Int::from(e)).unwrap(), x);
                assert_mp_eq!(Pow::pow(&b, e as u32), x);
                x = &x * &b;
            }
        }

        assert_eq!(Int::pow(&Int::from(2), &Int::from(-1)), Err(Error::NegativeOperand));
    }

    #[test]
    fn div() {
        let cases = [
            ("1", "1", "1"),
            ("1234", "-1", "-1234"),
            ("8", "9", "0"),
            ("-9", "-3", "3"),
            ("1234567891011121314151617", "95123654789852856006", "12978"),
            ("-1234567891011121314151617", "95123654789852856006", "-12978"),
            ("-1198775410753307067346230628764044530011323809665206377243907561641040294348297309637331525393593945901384203950086960228531308793518800829453656715578105987032036211272103322425770761458186593",
             "979504192721382235629958845425279521512826176107035761459344386626944187481828320416870752582555",
             "-1223859397092234843008309150569447886995823751180958876260102037121722431272801092547910923059616")
        ];

        for &(l, r, a) in cases.iter() {
            let (l, r, a) = (int(l), int(r), int(a));

            assert_mp_eq!(&l / &r, a);
            assert_mp_eq!(l.checked_div(&r).unwrap(), a);
        }
    }

    #[test]
    fn rem() {
        let cases = [
            ("2", "1", "0"),
            ("1", "2", "1"),
            ("100", "2", "0"),
            ("100", "3", "1"),
            ("-100", "3", "-1"),
            ("234129835798275032157029375235", "4382109473241242142341234", "2490861941946976021925083")
        ];

        for &(l, r, a) in cases.iter() {
            let (l, r, a) = (int(l), int(r), int(a));

            assert_mp_eq!(&l % &r, a);
        }
    }

    #[test]
    fn divrem() {
        let dividend = int("20000000000000000000000000000000000000000000000400000000000000000000000000000000000000000000001");
        let divisor = int("100000000000000000000000000000000000000000000001");

        let (q, r) = (&dividend).divrem(&divisor);
        assert_mp_eq!(q, int("200000000000000000000000000000000000000000000001"));
        assert_mp_eq!(r, int("100000000000000000000000000000000000000000000000"));
    }

    #[test]
    fn signed_division() {
        let (a, b) = (Int::from(-10), Int::from(3));
        assert_mp_eq!(a.checked_div(&b).unwrap(), Int::from(-3));
        assert_mp_eq!(a.checked_rem(&b).unwrap(), Int::from(-1));
        assert_mp_eq!(a.umod(&b).unwrap(), Int::from(2));
        assert_mp_eq!(a.umod(&-&b).unwrap(), Int::from(2));
        assert_mp_eq!(a.div_floor(&b), Int::from(-4));
        assert_mp_eq!(a.mod_floor(&b), Int::from(2));
        assert_mp_eq!(Int::from(10).mod_floor(&Int::from(-3)), Int::from(-2));

        assert_eq!(a.divmod(&Int::zero()), Err(Error::DivisionByZero));
        assert_eq!(a.umod(&Int::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn div_round() {
        let cases = [
            (7, 2, 4),
            (-7, 2, -4),
            (7, -2, -4),
            (5, 3, 2),
            (4, 3, 1),
            (-4, 3, -1),
            (-5, 3, -2),
            (1, 2, 1),
            (-1, 2, -1),
            (6, 3, 2),
        ];

        for &(n, d, q) in cases.iter() {
            assert_mp_eq!(Int::from(n).div_round(&Int::from(d)).unwrap(), Int::from(q));
        }
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_zero_panics() {
        let _ = Int::from(1) / Int::zero();
    }

    #[test]
    fn compare() {
        let cases = [
            ("0", "0", Ordering::Equal),
            ("1", "0", Ordering::Greater),
            ("-1", "0", Ordering::Less),
            ("-1", "-2", Ordering::Greater),
            ("340282366920938463463374607431768211456", "-340282366920938463463374607431768211456",
             Ordering::Greater),
            ("192834857324591531", "431343873217510631841", Ordering::Less),
        ];

        for &(l, r, o) in cases.iter() {
            assert_eq!(int(l).cmp(&int(r)), o);
        }

        let big = int("340282366920938463463374607431768211456");
        assert!(big > u64::max_value());
        assert!(-&big < i64::min_value());
        assert!(Int::from(-5) < 3);
        assert!(Int::from(-5) == -5i64);
        assert!(7u32 == Int::from(7));
        assert_eq!(Int::from(-5).cmpn(-6), Ordering::Greater);
        assert_eq!(int("-67108864").cmpn(-67108864), Ordering::Equal);
        assert_eq!(big.ucmp(&-&big), Ordering::Equal);
    }

    #[test]
    fn is_even() {
        let cases = [
            ("0", true),
            ("1", false),
            ("47398217493274092174042109472", true),
            ("47398217493274092174042109471", false),
        ];

        for &(v, even) in cases.iter() {
            let val = int(v);
            assert_eq!(val.is_even(), even);
            assert_eq!((-val).is_odd(), !even);
        }
    }

    #[test]
    fn count_ones() {
        assert_eq!(Int::zero().count_ones(), 0);
        assert_eq!(Int::from(0b1011).count_ones(), 3);
        assert_eq!(int("340282366920938463463374607431768211455").count_ones(), 128);
    }

    #[test]
    fn num_traits() {
        let a = <Int as Num>::from_str_radix("-ff", 16).unwrap();
        assert_mp_eq!(a, Int::from(-255));
        assert_mp_eq!(Signed::signum(&a), Int::from(-1));
        assert_mp_eq!(Signed::abs_sub(&Int::from(3), &Int::from(5)), Int::zero());
        assert_eq!(a.to_i64(), Some(-255));
        assert_eq!(a.to_u64(), None);
        assert_eq!(Int::from_u64(u64::max_value()).unwrap().to_u64(), Some(u64::max_value()));
        assert_eq!(Int::from_f64(1.5), Err(Error::NotAnInteger));
        assert!(<Int as Zero>::is_zero(&Int::zero()));
        assert!(Int::from(12).is_multiple_of(&Int::from(4)));
        assert_mp_eq!(Integer::lcm(&Int::from(4), &Int::from(6)), Int::from(12));
    }

    #[test]
    fn random_values() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let a = rng.gen_uint(100);
            assert!(a.bit_length() <= 100);
            assert!(a.well_formed());

            let bound = int("1000000000000000000000");
            let b = rng.gen_uint_below(&bound);
            assert!(b < bound && b >= 0);

            let lo = Int::from(-50);
            let hi = Int::from(50);
            let c = rng.gen_int_range(&lo, &hi);
            assert!(c >= lo && c < hi);
        }
    }
}

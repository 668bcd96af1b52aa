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
 * Modular reduction contexts.
 *
 * A `Red` fixes a modulus `m > 1` and a reduction strategy: plain division, folding for a
 * pseudo-Mersenne prime, or Montgomery multiplication. Values lifted into a context with
 * `Red::to_red` become `Reduced` values, which borrow the context and are always in
 * `[0, m)` (in Montgomery form for a Montgomery context). Arithmetic on `Reduced` values
 * checks that both operands come from the same context object.
 *
 * ```
 * # use redint::{Int, Red};
 * let red = Red::named("p25519").unwrap();
 * let two = red.to_red(&Int::from(2)).unwrap();
 * let three = red.to_red(&Int::from(3)).unwrap();
 * assert_eq!(two.red_mul(&three).unwrap().from_red(), 6);
 * ```
 */

use std::fmt;
use std::ptr;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::int::{divrem_magnitude, Int};

mod mont;
mod prime;

use self::mont::Mont;
pub use self::prime::PseudoMersenne;

/// Exponent bits consumed per step of `Red::pow`.
const WINDOW: usize = 4;

#[derive(Debug)]
enum Reducer {
    Plain,
    Prime(PseudoMersenne),
    Mont(Mont),
}

/// A reduction context for a fixed modulus.
#[derive(Debug)]
pub struct Red {
    m: Int,
    reducer: Reducer,
}

/**
 * A value in `[0, m)` tied to the context that reduced it.
 */
#[derive(Clone)]
pub struct Reduced<'a> {
    red: &'a Red,
    val: Int,
}

fn check_modulus(m: &Int) -> Result<()> {
    if m.cmpn(1).is_le() {
        Err(Error::InvalidModulus)
    } else {
        Ok(())
    }
}

impl Red {
    /// A context reducing by division.
    pub fn new(m: Int) -> Result<Red> {
        check_modulus(&m)?;
        debug!(bits = m.bit_length(), "generic reduction context");
        Ok(Red { m, reducer: Reducer::Plain })
    }

    /**
     * One of the registered pseudo-Mersenne primes: `k256`, `p224`, `p192` or `p25519`.
     * The contexts are built once and shared.
     */
    pub fn named(name: &str) -> Result<&'static Red> {
        prime::lookup(name).ok_or_else(|| Error::UnknownPrime(name.to_string()))
    }

    /// A context for `2^n - k` reducing by folding, for `k` with fewer than `n - 1` bits.
    pub fn pseudo_mersenne(n: usize, k: &Int) -> Result<Red> {
        let prime = PseudoMersenne::checked(n, k)?;
        check_modulus(prime.modulus())?;
        debug!(bits = n, "pseudo-Mersenne reduction context");
        Ok(Red::from_prime(prime))
    }

    fn from_prime(prime: PseudoMersenne) -> Red {
        Red { m: prime.modulus().clone(), reducer: Reducer::Prime(prime) }
    }

    /// A Montgomery context. The modulus must be odd.
    pub fn mont(m: Int) -> Result<Red> {
        check_modulus(&m)?;
        let mont = Mont::new(&m)?;
        debug!(bits = m.bit_length(), shift = mont.shift, "Montgomery reduction context");
        Ok(Red { m, reducer: Reducer::Mont(mont) })
    }

    pub fn modulus(&self) -> &Int {
        &self.m
    }

    pub fn is_montgomery(&self) -> bool {
        matches!(self.reducer, Reducer::Mont(_))
    }

    /// The registry name of a named prime context.
    pub fn prime_name(&self) -> Option<&'static str> {
        match self.reducer {
            Reducer::Prime(ref p) => p.name(),
            _ => None,
        }
    }

    fn check(&self, a: &Reduced) -> Result<()> {
        if ptr::eq(self, a.red) {
            Ok(())
        } else {
            Err(Error::ContextMismatch)
        }
    }

    fn wrap(&self, val: Int) -> Reduced<'_> {
        debug_assert!(!val.is_negative() && val < self.m);
        Reduced { red: self, val }
    }

    // Reduces a non-negative value into [0, m)
    fn imod(&self, a: Int) -> Int {
        debug_assert!(!a.is_negative());
        match self.reducer {
            Reducer::Prime(ref p) => p.ireduce(a),
            _ => {
                let (_, r) = divrem_magnitude(&a.limbs, &self.m.limbs);
                Int::from_limbs(r, false)
            }
        }
    }

    // Lifts a non-negative value into the context's representation
    fn lift(&self, a: Int) -> Int {
        match self.reducer {
            Reducer::Mont(ref mont) => self.imod(a << mont.shift),
            _ => self.imod(a),
        }
    }

    /// Reduces `a` into the context. Negative values must be reduced with `umod` first.
    pub fn to_red(&self, a: &Int) -> Result<Reduced<'_>> {
        if a.is_negative() {
            return Err(Error::NegativeOperand);
        }
        Ok(self.wrap(self.lift(a.clone())))
    }

    /// Converts a value of this context back to a plain `Int` in `[0, m)`.
    pub fn from_red(&self, a: &Reduced) -> Result<Int> {
        self.check(a)?;
        Ok(self.lower(&a.val))
    }

    fn lower(&self, v: &Int) -> Int {
        match self.reducer {
            Reducer::Mont(ref mont) => self.imod(v * &mont.rinv),
            _ => v.clone(),
        }
    }

    fn one_raw(&self) -> Int {
        self.lift(Int::one())
    }

    fn add_raw(&self, a: &Int, b: &Int) -> Int {
        let mut r = a + b;
        if r >= self.m {
            r -= &self.m;
        }
        r
    }

    fn sub_raw(&self, a: &Int, b: &Int) -> Int {
        let mut r = a - b;
        if r.is_negative() {
            r += &self.m;
        }
        r
    }

    fn mul_raw(&self, a: &Int, b: &Int) -> Int {
        match self.reducer {
            Reducer::Mont(ref mont) => mont.mul(&self.m, a, b),
            _ => self.imod(a * b),
        }
    }

    fn sqr_raw(&self, a: &Int) -> Int {
        match self.reducer {
            Reducer::Mont(ref mont) => mont.mul(&self.m, a, a),
            _ => self.imod(a.sqr()),
        }
    }

    fn neg_raw(&self, a: &Int) -> Int {
        if a.is_zero() {
            Int::zero()
        } else {
            &self.m - a
        }
    }

    fn invm_raw(&self, a: &Int) -> Result<Int> {
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        let inv = if self.m.is_odd() {
            a.invmp(&self.m)?
        } else {
            a.invm(&self.m)?
        };
        match self.reducer {
            // (aR)^-1 * R^2 = a^-1 * R
            Reducer::Mont(ref mont) => Ok(self.imod(inv * &mont.r2)),
            _ => Ok(inv),
        }
    }

    /**
     * Fixed 4-bit window exponentiation: the powers `a^0..a^15` are computed once, then each
     * window of the exponent costs four squarings and at most one multiplication.
     */
    fn pow_raw(&self, a: &Int, e: &Int) -> Int {
        debug_assert!(!e.is_negative());
        let one = self.one_raw();
        if e.is_zero() {
            return one;
        }

        let mut wnd = Vec::with_capacity(1 << WINDOW);
        wnd.push(one.clone());
        wnd.push(a.clone());
        for i in 2..(1 << WINDOW) {
            let next = self.mul_raw(&wnd[i - 1], a);
            wnd.push(next);
        }

        let windows = (e.bit_length() + WINDOW - 1) / WINDOW;
        let mut res = one;
        let mut started = false;
        for w in (0..windows).rev() {
            if started {
                for _ in 0..WINDOW {
                    res = self.sqr_raw(&res);
                }
            }

            let mut idx = 0;
            for b in (0..WINDOW).rev() {
                idx = (idx << 1) | e.testn(w * WINDOW + b) as usize;
            }
            if idx != 0 {
                res = if started { self.mul_raw(&res, &wnd[idx]) } else { wnd[idx].clone() };
                started = true;
            }
        }

        res
    }

    fn sqrt_raw(&self, a: &Int) -> Result<Int> {
        if a.is_zero() {
            return Ok(Int::zero());
        }

        let r = match self.m.andln(3) {
            3 => {
                let e = self.m.addn(1).shrn(2);
                self.pow_raw(a, &e)
            }
            1 => self.tonelli_shanks(a)?,
            _ => return Err(Error::InvalidModulus),
        };

        if self.sqr_raw(&r) != *a {
            return Err(Error::NotQuadraticResidue);
        }
        Ok(r)
    }

    fn tonelli_shanks(&self, a: &Int) -> Result<Int> {
        // p - 1 = 2^s * q, q odd
        let mut q = self.m.subn(1);
        let s = q.zero_bits();
        q.ishrn(s);

        let one = self.one_raw();
        let minus_one = self.neg_raw(&one);
        let half = self.m.subn(1).shrn(1);

        // The least non-residue of a prime is below 2*log(p)^2
        let bits = self.m.bit_length();
        let limit = 2 * bits * bits + 2;
        let z = (2..limit)
            .map(|c| self.lift(Int::from(c)))
            .find(|z| self.pow_raw(z, &half) == minus_one)
            .ok_or(Error::InvalidModulus)?;
        trace!(s, "found quadratic non-residue");

        let mut c = self.pow_raw(&z, &q);
        let mut r = self.pow_raw(a, &q.addn(1).shrn(1));
        let mut t = self.pow_raw(a, &q);
        let mut m = s;

        while t != one {
            let mut tmp = t.clone();
            let mut i = 0;
            while tmp != one {
                tmp = self.sqr_raw(&tmp);
                i += 1;
                if i >= m {
                    return Err(Error::NotQuadraticResidue);
                }
            }

            let b = self.pow_raw(&c, &(Int::one() << (m - i - 1)));
            r = self.mul_raw(&r, &b);
            c = self.sqr_raw(&b);
            t = self.mul_raw(&t, &c);
            m = i;
        }

        Ok(r)
    }

    pub fn add<'a>(&'a self, a: &Reduced<'a>, b: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.wrap(self.add_raw(&a.val, &b.val)))
    }

    pub fn iadd<'a>(&'a self, a: &mut Reduced<'a>, b: &Reduced<'a>) -> Result<()> {
        *a = self.add(a, b)?;
        Ok(())
    }

    pub fn sub<'a>(&'a self, a: &Reduced<'a>, b: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.wrap(self.sub_raw(&a.val, &b.val)))
    }

    pub fn isub<'a>(&'a self, a: &mut Reduced<'a>, b: &Reduced<'a>) -> Result<()> {
        *a = self.sub(a, b)?;
        Ok(())
    }

    pub fn mul<'a>(&'a self, a: &Reduced<'a>, b: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.wrap(self.mul_raw(&a.val, &b.val)))
    }

    pub fn imul<'a>(&'a self, a: &mut Reduced<'a>, b: &Reduced<'a>) -> Result<()> {
        *a = self.mul(a, b)?;
        Ok(())
    }

    pub fn sqr<'a>(&'a self, a: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        Ok(self.wrap(self.sqr_raw(&a.val)))
    }

    pub fn isqr<'a>(&'a self, a: &mut Reduced<'a>) -> Result<()> {
        *a = self.sqr(a)?;
        Ok(())
    }

    /// `m - a`, or zero for zero.
    pub fn neg<'a>(&'a self, a: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        Ok(self.wrap(self.neg_raw(&a.val)))
    }

    /// `a * 2^bits`, reduced.
    pub fn shl<'a>(&'a self, a: &Reduced<'a>, bits: usize) -> Result<Reduced<'a>> {
        self.check(a)?;
        Ok(self.wrap(self.imod(a.val.shln(bits))))
    }

    pub fn invm<'a>(&'a self, a: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        Ok(self.wrap(self.invm_raw(&a.val)?))
    }

    /**
     * A square root of `a` for a prime modulus: `a^((p+1)/4)` when `p = 3 mod 4`,
     * Tonelli-Shanks when `p = 1 mod 4`. The candidate is checked by squaring it.
     */
    pub fn sqrt<'a>(&'a self, a: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.check(a)?;
        Ok(self.wrap(self.sqrt_raw(&a.val)?))
    }

    /// `a^e` for a non-negative exponent.
    pub fn pow<'a>(&'a self, a: &Reduced<'a>, e: &Int) -> Result<Reduced<'a>> {
        self.check(a)?;
        if e.is_negative() {
            return Err(Error::NegativeOperand);
        }
        Ok(self.wrap(self.pow_raw(&a.val, e)))
    }
}

impl<'a> Reduced<'a> {
    /// The context this value belongs to.
    pub fn context(&self) -> &'a Red {
        self.red
    }

    /// The stored representative, in Montgomery form for a Montgomery context.
    pub fn raw(&self) -> &Int {
        &self.val
    }

    /// Converts back to a plain `Int` in `[0, m)`.
    pub fn from_red(&self) -> Int {
        self.red.lower(&self.val)
    }

    pub fn red_add(&self, other: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.red.add(self, other)
    }

    pub fn red_iadd(&mut self, other: &Reduced<'a>) -> Result<()> {
        let red = self.red;
        red.iadd(self, other)
    }

    pub fn red_sub(&self, other: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.red.sub(self, other)
    }

    pub fn red_isub(&mut self, other: &Reduced<'a>) -> Result<()> {
        let red = self.red;
        red.isub(self, other)
    }

    pub fn red_mul(&self, other: &Reduced<'a>) -> Result<Reduced<'a>> {
        self.red.mul(self, other)
    }

    pub fn red_imul(&mut self, other: &Reduced<'a>) -> Result<()> {
        let red = self.red;
        red.imul(self, other)
    }

    pub fn red_sqr(&self) -> Result<Reduced<'a>> {
        self.red.sqr(self)
    }

    pub fn red_isqr(&mut self) -> Result<()> {
        let red = self.red;
        red.isqr(self)
    }

    pub fn red_neg(&self) -> Result<Reduced<'a>> {
        self.red.neg(self)
    }

    pub fn red_shl(&self, bits: usize) -> Result<Reduced<'a>> {
        self.red.shl(self, bits)
    }

    pub fn red_invm(&self) -> Result<Reduced<'a>> {
        self.red.invm(self)
    }

    pub fn red_sqrt(&self) -> Result<Reduced<'a>> {
        self.red.sqrt(self)
    }

    pub fn red_pow(&self, e: &Int) -> Result<Reduced<'a>> {
        self.red.pow(self, e)
    }
}

impl<'a> PartialEq for Reduced<'a> {
    fn eq(&self, other: &Reduced<'a>) -> bool {
        ptr::eq(self.red, other.red) && self.val == other.val
    }
}

impl<'a> Eq for Reduced<'a> {}

impl<'a> fmt::Debug for Reduced<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Reduced")
            .field("value", &self.from_red())
            .field("modulus", &self.red.m)
            .finish()
    }
}

impl<'a> fmt::Display for Reduced<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.from_red(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn small(m: i32) -> Red {
        Red::new(Int::from(m)).unwrap()
    }

    #[test]
    fn invalid_modulus() {
        assert_eq!(Red::new(Int::one()).unwrap_err(), Error::InvalidModulus);
        assert_eq!(Red::new(Int::from(-7)).unwrap_err(), Error::InvalidModulus);
        assert_eq!(Red::mont(Int::from(10)).unwrap_err(), Error::InvalidModulus);
        assert_eq!(Red::named("p999").unwrap_err(), Error::UnknownPrime("p999".to_string()));
    }

    #[test]
    fn lift_and_lower() {
        let red = small(13);
        assert_eq!(red.to_red(&Int::from(30)).unwrap().from_red(), 4);
        assert_eq!(red.to_red(&Int::from(-1)).unwrap_err(), Error::NegativeOperand);

        let mont = Red::mont(Int::from(13)).unwrap();
        let a = mont.to_red(&Int::from(30)).unwrap();
        assert_eq!(a.from_red(), 4);
        assert_eq!(mont.from_red(&a).unwrap(), 4);
        assert_eq!(red.from_red(&a).unwrap_err(), Error::ContextMismatch);
    }

    #[test]
    fn arithmetic() {
        for red in [small(13), Red::mont(Int::from(13)).unwrap()].iter() {
            let a = red.to_red(&Int::from(9)).unwrap();
            let b = red.to_red(&Int::from(7)).unwrap();
            assert_eq!(a.red_add(&b).unwrap().from_red(), 3);
            assert_eq!(a.red_sub(&b).unwrap().from_red(), 2);
            assert_eq!(b.red_sub(&a).unwrap().from_red(), 11);
            assert_eq!(a.red_mul(&b).unwrap().from_red(), 11);
            assert_eq!(a.red_sqr().unwrap().from_red(), 3);
            assert_eq!(a.red_neg().unwrap().from_red(), 4);
            assert_eq!(a.red_shl(3).unwrap().from_red(), 7);
            assert_eq!(a.red_invm().unwrap().from_red(), 3);
            assert_eq!(a.red_pow(&Int::from(12)).unwrap().from_red(), 1);
            assert_eq!(a.red_pow(&Int::zero()).unwrap().from_red(), 1);
            assert_eq!(a.red_pow(&Int::from(-1)).unwrap_err(), Error::NegativeOperand);

            let zero = red.to_red(&Int::zero()).unwrap();
            assert!(zero.red_neg().unwrap().from_red().is_zero());
            assert_eq!(zero.red_invm().unwrap_err(), Error::NotInvertible);

            let mut c = a.clone();
            c.red_iadd(&b).unwrap();
            c.red_imul(&b).unwrap();
            c.red_isqr().unwrap();
            c.red_isub(&a).unwrap();
            // ((9 + 7) * 7)^2 - 9 = 12535 = 3 mod 13
            assert_eq!(c.from_red(), 3);
        }
    }

    #[test]
    fn context_mismatch() {
        let r1 = small(13);
        let r2 = small(13);
        let a = r1.to_red(&Int::from(2)).unwrap();
        let b = r2.to_red(&Int::from(2)).unwrap();
        assert_eq!(a.red_add(&b).unwrap_err(), Error::ContextMismatch);
        assert_eq!(r2.sqr(&a).unwrap_err(), Error::ContextMismatch);
        assert!(a != b);
    }

    #[test]
    fn pow_windows() {
        let m = Int::from(1_000_000_007);
        let red = Red::new(m.clone()).unwrap();
        let a = red.to_red(&Int::from(3)).unwrap();
        for &e in [1u64, 15, 16, 17, 255, 256, 65537, 999_999_999].iter() {
            let e = Int::from(e);
            let expected = Int::from(3).pow(&e).unwrap().umod(&m).unwrap();
            assert_eq!(a.red_pow(&e).unwrap().from_red(), expected, "3^{}", e);
        }
    }

    #[test]
    fn sqrt() {
        // 13 = 1 mod 4 goes through Tonelli-Shanks, 11 = 3 mod 4 takes the fast path
        for &p in [13, 11, 17, 41].iter() {
            let red = small(p);
            for v in 1..p {
                let a = red.to_red(&Int::from(v)).unwrap();
                let sq = a.red_sqr().unwrap();
                let root = sq.red_sqrt().unwrap();
                assert_eq!(root.red_sqr().unwrap(), sq, "sqrt({}) mod {}", v * v, p);
            }
        }

        let red = small(13);
        // 2 is not a square mod 13
        let two = red.to_red(&Int::from(2)).unwrap();
        assert_eq!(two.red_sqrt().unwrap_err(), Error::NotQuadraticResidue);
        let zero = red.to_red(&Int::zero()).unwrap();
        assert!(zero.red_sqrt().unwrap().from_red().is_zero());

        assert_eq!(small(16).to_red(&Int::from(4)).unwrap().red_sqrt().unwrap_err(),
                   Error::InvalidModulus);
    }
}

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

//! Greatest common divisors and modular inverses.

use std::cmp::{self, Ordering};
use std::mem;

use crate::error::{Error, Result};
use crate::int::Int;

/// Bézout coefficients: `a*x + b*p == gcd` for the inputs `x` and `p` of `Int::egcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Egcd {
    pub a: Int,
    pub b: Int,
    pub gcd: Int,
}

fn check_modulus(p: &Int) -> Result<()> {
    if p.is_zero() {
        Err(Error::DivisionByZero)
    } else if p.is_negative() {
        Err(Error::NegativeOperand)
    } else {
        Ok(())
    }
}

// Halves `x`, first adding `dx` to it (and subtracting `dy` from `y`) whenever either is odd,
// which keeps `x*a + y*b` invariant for the pair of coefficients being tracked.
fn halve_pair(x: &mut Int, y: &mut Int, dx: &Int, dy: &Int) {
    if x.is_odd() || y.is_odd() {
        *x += dx;
        *y -= dy;
    }
    x.ishrn(1);
    y.ishrn(1);
}

impl Int {
    /**
     * Returns the greatest common divisor of the magnitudes of self and other, using the
     * binary algorithm. `gcd(0, x)` is `|x|`.
     */
    pub fn gcd(&self, other: &Int) -> Int {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }

        let mut a = self.abs();
        let mut b = other.abs();
        let shift = cmp::min(a.zero_bits(), b.zero_bits());
        a.ishrn(shift);
        b.ishrn(shift);

        loop {
            let za = a.zero_bits();
            a.ishrn(za);
            let zb = b.zero_bits();
            b.ishrn(zb);

            match a.ucmp(&b) {
                Ordering::Less => mem::swap(&mut a, &mut b),
                Ordering::Equal => break,
                Ordering::Greater if b == 1 => break,
                Ordering::Greater => {}
            }
            a -= &b;
        }

        b.ishln(shift);
        b
    }

    /// Returns the least common multiple of the magnitudes. Zero if either is zero.
    pub fn lcm(&self, other: &Int) -> Int {
        if self.is_zero() || other.is_zero() {
            return Int::zero();
        }
        let g = self.gcd(other);
        let mut l = self.abs();
        l /= &g;
        l *= &other.abs();
        l
    }

    /**
     * Extended binary GCD. Returns `a`, `b` and `g` with `a*x + b*p == g`, where `x` is self
     * (reduced into `[0, p)` first if negative) and `g` is `gcd(x, p)`.
     *
     * `p` must be positive.
     */
    pub fn egcd(&self, p: &Int) -> Result<Egcd> {
        check_modulus(p)?;

        let mut x = if self.is_negative() { self.umod(p)? } else { self.clone() };
        let mut y = p.clone();

        let mut a = Int::one();
        let mut b = Int::zero();
        let mut c = Int::zero();
        let mut d = Int::one();

        let mut g = 0;
        while x.is_even() && y.is_even() {
            x.ishrn(1);
            y.ishrn(1);
            g += 1;
        }

        let yp = y.clone();
        let xp = x.clone();

        while !x.is_zero() {
            let i = x.zero_bits();
            x.ishrn(i);
            for _ in 0..i {
                halve_pair(&mut a, &mut b, &yp, &xp);
            }

            let j = y.zero_bits();
            y.ishrn(j);
            for _ in 0..j {
                halve_pair(&mut c, &mut d, &yp, &xp);
            }

            if x >= y {
                x -= &y;
                a -= &c;
                b -= &d;
            } else {
                y -= &x;
                c -= &a;
                d -= &b;
            }
        }

        y.ishln(g);
        Ok(Egcd { a: c, b: d, gcd: y })
    }

    /**
     * Returns the inverse of self modulo `m`, in `[0, m)`.
     */
    pub fn invm(&self, m: &Int) -> Result<Int> {
        let e = self.egcd(m)?;
        if e.gcd != 1 {
            return Err(Error::NotInvertible);
        }
        e.a.umod(m)
    }

    /**
     * Binary inversion for an odd modulus `p`, tracking only the coefficient of self.
     * Returns the inverse in `[0, p)`.
     */
    pub fn invmp(&self, p: &Int) -> Result<Int> {
        check_modulus(p)?;
        if p.is_even() {
            return Err(Error::InvalidModulus);
        }
        if *p == 1 {
            return Ok(Int::zero());
        }

        let mut a = if self.is_negative() { self.umod(p)? } else { self.clone() };
        let mut b = p.clone();
        let mut x1 = Int::one();
        let mut x2 = Int::zero();

        // Halve `x`, adding p first when odd so the division is exact
        let halve = |x: &mut Int| {
            if x.is_odd() {
                *x += p;
            }
            x.ishrn(1);
        };

        while a > 1 && b > 1 {
            let i = a.zero_bits();
            a.ishrn(i);
            for _ in 0..i {
                halve(&mut x1);
            }

            let j = b.zero_bits();
            b.ishrn(j);
            for _ in 0..j {
                halve(&mut x2);
            }

            if a >= b {
                a -= &b;
                x1 -= &x2;
            } else {
                b -= &a;
                x2 -= &x1;
            }
        }

        let res = if a == 1 {
            x1
        } else if b == 1 {
            x2
        } else {
            return Err(Error::NotInvertible);
        };
        res.umod(p)
    }
}

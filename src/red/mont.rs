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
 * Montgomery form. A value `x` is held as `x*R mod m` where `R = 2^shift` is the smallest
 * power of the limb radix above `m`, so products reduce with masks and shifts only.
 */

use crate::error::{Error, Result};
use crate::int::Int;
use crate::ll::limb::BITS;

#[derive(Debug)]
pub(super) struct Mont {
    /// `log2(R)`, a multiple of the limb width.
    pub shift: usize,
    /// `R^2 mod m`
    pub r2: Int,
    /// `R^-1 mod m`
    pub rinv: Int,
    /// `m^-1 mod R`
    pub minv: Int,
}

impl Mont {
    pub fn new(m: &Int) -> Result<Mont> {
        if m.is_even() || m.cmpn(1).is_le() {
            return Err(Error::InvalidModulus);
        }

        let mut shift = m.bit_length();
        if shift % BITS != 0 {
            shift += BITS - shift % BITS;
        }

        let r = Int::one() << shift;
        let r2 = r.sqr().umod(m)?;
        let rinv = r.invmp(m)?;

        // m' = (R*R^-1 - 1) / m is -m^-1 mod R; keep its negation
        let mut minv = (&rinv * &r).subn(1).checked_div(m)?;
        minv = minv.umod(&r)?;
        minv = &r - minv;
        minv.mask_magnitude(shift);

        Ok(Mont { shift, r2, rinv, minv })
    }

    /**
     * Returns `a*b*R^-1 mod m` for `a, b` in `[0, m)`. With `c = ((t mod R)*m^-1 mod R)*m`,
     * `t - c` is an exact multiple of `R` and `(t - c)/R` lies in `(-m, m)`.
     */
    pub fn mul(&self, m: &Int, a: &Int, b: &Int) -> Int {
        if a.is_zero() || b.is_zero() {
            return Int::zero();
        }

        let t = a * b;
        let mut c = t.clone();
        c.mask_magnitude(self.shift);
        c *= &self.minv;
        c.mask_magnitude(self.shift);
        c *= m;

        let mut u = t - c;
        u.ishrn(self.shift);
        if u >= *m {
            u -= m;
        } else if u.is_negative() {
            u += m;
        }
        u
    }
}

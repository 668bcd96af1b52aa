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

use std::cmp::{self, Ordering};

use crate::ll;
use crate::ll::limb::{self, DoubleLimb, Limb, BITS, MASK};

/**
 * Divides the limbs at `xp` by `d`, storing the quotient in `{qp, xs}`. The remainder is
 * returned.
 */
pub fn divrem_1(qp: &mut [Limb], xp: &[Limb], d: Limb) -> Limb {
    debug_assert!(d != 0 && d <= MASK);
    debug_assert!(qp.len() >= xp.len());

    let mut r = 0;
    for (q, &x) in qp[..xp.len()].iter_mut().zip(xp.iter()).rev() {
        let (qi, ri) = limb::div(r, x, d);
        *q = qi;
        r = ri;
    }

    r
}

/**
 * Returns `{xp, xs} % d`.
 */
pub fn rem_1(xp: &[Limb], d: Limb) -> Limb {
    debug_assert!(d != 0 && d <= MASK);

    let d = d as DoubleLimb;
    let mut r: DoubleLimb = 0;
    for &x in xp.iter().rev() {
        r = ((r << BITS) | x as DoubleLimb) % d;
    }

    r as Limb
}

/**
 * Divides {np, ns} by {dp, ds}. The quotient is stored to {qp, (ns - ds) + 1} and the
 * remainder to {rp, ds}. If ns < ds the quotient is zero and the remainder is N.
 *
 * The top limb of D must be non-zero.
 */
pub fn divrem(qp: &mut [Limb], rp: &mut [Limb], np: &[Limb], dp: &[Limb]) {
    let (ns, ds) = (np.len(), dp.len());
    debug_assert!(ds > 0 && dp[ds - 1] != 0);
    debug_assert!(rp.len() >= ds);

    ll::zero(qp);
    ll::zero(&mut rp[..ds]);

    if ns < ds {
        rp[..ns].copy_from_slice(np);
        return;
    }
    debug_assert!(qp.len() > ns - ds);

    if ds == 1 {
        rp[0] = divrem_1(qp, np, dp[0]);
        return;
    }

    // Shift so the top bit of the divisor is set; this keeps every quotient estimate
    // within two of the true digit.
    let cnt = limb::leading_zeros(dp[ds - 1]);

    let mut d = dp.to_vec();
    ll::shl(&mut d, cnt);

    let mut n = Vec::with_capacity(ns + 1);
    n.extend_from_slice(np);
    let c = ll::shl(&mut n, cnt);
    if c > 0 {
        n.push(c);
    }

    let qh = sb_div(qp, &mut n, &d);
    if c == 0 {
        qp[ns - ds] = qh;
    } else {
        debug_assert_eq!(qh, 0);
    }

    ll::shr(&mut n[..ds], cnt);
    rp[..ds].copy_from_slice(&n[..ds]);
}

/**
 * "Schoolbook" division of two unsigned integers, N, D, producing Q = floor(N/D).
 * The return value is the highest limb of the quotient, which may be zero or one.
 * The remaining `ns - ds` limbs of the quotient are written to `qp`.
 *
 * The limbs stored in `np` are modified and the lowest `ds` limbs contain the remainder
 * of the division.
 *
 * The highest bit of the top limb of D must be set and `ns >= ds`.
 */
fn sb_div(qp: &mut [Limb], np: &mut [Limb], dp: &[Limb]) -> Limb {
    let (ns, ds) = (np.len(), dp.len());
    debug_assert!(ds >= 2);
    debug_assert!(ns >= ds);
    debug_assert!(limb::high_bit_set(dp[ds - 1]));

    let m = ns - ds;

    // If N < D*B^m, then the high limb is zero. If not, then the high limb
    // is 1 and we subtract D*B^m from N.
    let qh = if let Ordering::Less = ll::cmp(&np[m..], dp) {
        0
    } else {
        ll::sub_n(&mut np[m..], dp);
        1
    };

    let dh = dp[ds - 1] as DoubleLimb;
    for j in (0..m).rev() {
        let top = ((np[ds + j] as DoubleLimb) << BITS) | np[ds + j - 1] as DoubleLimb;
        let mut q = cmp::min(top / dh, MASK as DoubleLimb) as Limb;

        let borrow = ll::submul_1(&mut np[j..j + ds], dp, q);
        let mut high = np[ds + j] as i64 - borrow as i64;
        // The estimate is at most two too large
        while high < 0 {
            q -= 1;
            high += ll::add_n(&mut np[j..j + ds], dp) as i64;
        }
        np[ds + j] = high as Limb;

        qp[j] = q;
    }

    qh
}

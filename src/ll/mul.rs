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

use std::cmp;

use crate::ll;
use crate::ll::limb::{self, DoubleLimb, Limb, BITS, HALF_BITS, MASK};

/// Both operands exactly this many limbs use the split-half kernel.
pub const COMB10_LIMBS: usize = 10;
/// Combined sizes below this use the row-by-row schoolbook kernel.
pub const SMALL_MUL_LIMBS: usize = 63;
/// Combined sizes from here on use Karatsuba over the carry-spreading kernel.
pub const KARATSUBA_LIMBS: usize = 1024;

/**
 * Multiplies the `n` least-significant limbs of `xp` by `vl` storing the `n` least-significant
 * limbs of the product in `{wp, n}`.
 *
 * Returns the highest limb of the product
 */
#[inline]
pub fn mul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());
    debug_assert!(vl <= MASK);

    let mut cl: DoubleLimb = 0;
    for (w, &x) in wp.iter_mut().zip(xp.iter()) {
        let (h, l) = limb::split(x as DoubleLimb * vl as DoubleLimb + cl);
        *w = l;
        cl = h;
    }

    cl as Limb
}

/**
 * Multiplies the `n` least-signficiant digits of `xp` by `vl` and adds them to the `n`
 * least-significant digits of `wp`. Returns the highest limb of the result.
 */
#[inline]
pub fn addmul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());
    debug_assert!(vl <= MASK);

    let mut cl: DoubleLimb = 0;
    for (w, &x) in wp.iter_mut().zip(xp.iter()) {
        let (h, l) = limb::split(x as DoubleLimb * vl as DoubleLimb + *w as DoubleLimb + cl);
        *w = l;
        cl = h;
    }

    cl as Limb
}

/**
 * Multiplies the `n` least-signficiant digits of `xp` by `vl` and subtracts them from the `n`
 * least-significant digits of `wp`. Returns the highest limb of the result, adjust for borrow.
 */
pub fn submul_1(wp: &mut [Limb], xp: &[Limb], vl: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());
    debug_assert!(vl <= MASK);

    let mut cl: DoubleLimb = 0;
    for (w, &x) in wp.iter_mut().zip(xp.iter()) {
        let (mut h, l) = limb::split(x as DoubleLimb * vl as DoubleLimb + cl);
        let (v, borrow) = w.overflowing_sub(l);
        *w = if borrow {
            h += 1;
            v.wrapping_add(1 << BITS)
        } else {
            v
        };
        cl = h;
    }

    cl as Limb
}

/**
 * Multiplies `{xp, xs}` by `{yp, ys}`, storing the result to `{wp, xs + ys}`.
 *
 * Both inputs must be non-empty. The kernel is picked from the operand sizes:
 * exactly 10x10 limbs uses the split-half kernel, small products use the schoolbook
 * kernel, medium ones the carry-spreading kernel and very large ones recurse through
 * Karatsuba.
 */
pub fn mul(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let (xs, ys) = (xp.len(), yp.len());
    debug_assert!(xs > 0 && ys > 0);
    debug_assert!(wp.len() >= xs + ys);

    let wp = &mut wp[..xs + ys];
    ll::zero(wp);

    if xs + ys >= KARATSUBA_LIMBS {
        mul_rec(wp, xp, yp);
    } else {
        mul_quadratic(wp, xp, yp);
    }
}

/**
 * Squares `{xp, xs}`, storing the result to `{wp, 2 * xs}`.
 */
#[inline]
pub fn sqr(wp: &mut [Limb], xp: &[Limb]) {
    mul(wp, xp, xp);
}

#[inline]
fn mul_quadratic(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let (xs, ys) = (xp.len(), yp.len());
    if xs == COMB10_LIMBS && ys == COMB10_LIMBS {
        mul_comb10(wp, xp, yp);
    } else if xs + ys < SMALL_MUL_LIMBS {
        mul_basecase(wp, xp, yp);
    } else {
        mul_carry(wp, xp, yp);
    }
}

fn mul_basecase(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let xs = xp.len();

    wp[xs] = mul_1(wp, xp, yp[0]);
    for (i, &y) in yp.iter().enumerate().skip(1) {
        wp[i + xs] = addmul_1(&mut wp[i..], xp, y);
    }
}

// One output column of the 10x10 kernel. Every limb is split into 13-bit halves so the
// three partial sums stay far below the accumulator width regardless of the column.
#[inline(always)]
fn comb10_column(k: usize,
                 al: &[DoubleLimb; 10], ah: &[DoubleLimb; 10],
                 bl: &[DoubleLimb; 10], bh: &[DoubleLimb; 10]) -> (DoubleLimb, DoubleLimb, DoubleLimb) {
    let mut lo = 0;
    let mut mid = 0;
    let mut hi = 0;

    let first = if k >= COMB10_LIMBS { k - (COMB10_LIMBS - 1) } else { 0 };
    let last = cmp::min(k, COMB10_LIMBS - 1);
    for j in first..=last {
        let i = k - j;
        lo += al[i] * bl[j];
        mid += al[i] * bh[j] + ah[i] * bl[j];
        hi += ah[i] * bh[j];
    }

    (lo, mid, hi)
}

/**
 * Fixed-size kernel for two 10-limb operands, producing 19 columns plus the final carry.
 */
fn mul_comb10(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let mut al = [0; 10];
    let mut ah = [0; 10];
    let mut bl = [0; 10];
    let mut bh = [0; 10];
    for i in 0..COMB10_LIMBS {
        let (h, l) = limb::split_half(xp[i]);
        ah[i] = h as DoubleLimb;
        al[i] = l as DoubleLimb;
        let (h, l) = limb::split_half(yp[i]);
        bh[i] = h as DoubleLimb;
        bl[i] = l as DoubleLimb;
    }

    let half_mask = (1 << HALF_BITS) - 1;
    let mut c: DoubleLimb = 0;
    for k in 0..(2 * COMB10_LIMBS - 1) {
        let (lo, mid, hi) = comb10_column(k, &al, &ah, &bl, &bh);
        let w = c + lo + ((mid & half_mask) << HALF_BITS);
        c = hi + (mid >> HALF_BITS) + (w >> BITS);
        wp[k] = (w as Limb) & MASK;
    }
    wp[2 * COMB10_LIMBS - 1] = c as Limb;
}

/**
 * Column-wise kernel for longer operands. The running carry for the next column is kept
 * reduced below the radix, with its overflow spread into a separate high-carry register
 * that seeds the column after that.
 */
fn mul_carry(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let (xs, ys) = (xp.len(), yp.len());
    let len = xs + ys;
    let mask = MASK as DoubleLimb;

    let mut carry: DoubleLimb = 0;
    let mut hncarry: DoubleLimb = 0;
    for k in 0..(len - 1) {
        let mut ncarry = hncarry;
        hncarry = 0;
        let mut rword = carry & mask;

        let first = if k >= xs { k - (xs - 1) } else { 0 };
        let last = cmp::min(k, ys - 1);
        for j in first..=last {
            let i = k - j;
            let (h, l) = limb::split(xp[i] as DoubleLimb * yp[j] as DoubleLimb);
            ncarry += h;
            let lo = l as DoubleLimb + rword;
            rword = lo & mask;
            ncarry += lo >> BITS;
            hncarry += ncarry >> BITS;
            ncarry &= mask;
        }

        wp[k] = rword as Limb;
        carry = ncarry;
    }
    wp[len - 1] = carry as Limb;
}

// Adds `yp` into `wp`, propagating the carry through the rest of `wp`.
fn add_in_place(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    let c = ll::add_n(wp, yp);
    ll::incr(&mut wp[yp.len()..], c)
}

// Subtracts `yp` from `wp`, propagating the borrow through the rest of `wp`.
fn sub_in_place(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    let b = ll::sub_n(wp, yp);
    ll::decr(&mut wp[yp.len()..], b)
}

// `wp` must be zeroed and exactly `xs + ys` limbs long.
fn mul_rec(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let (xs, ys) = (xp.len(), yp.len());
    if xs + ys < KARATSUBA_LIMBS {
        mul_quadratic(wp, xp, yp);
    } else if xs * 2 >= ys * 3 {
        mul_unbalanced(wp, xp, yp);
    } else if ys * 2 >= xs * 3 {
        mul_unbalanced(wp, yp, xp);
    } else {
        mul_karatsuba(wp, xp, yp);
    }
}

/**
 * Karatsuba step on roughly balanced operands.
 *
 * With x = x1*B^h + x0 and y = y1*B^h + y0:
 *
 *    x*y = z2*B^2h + (z1 - z2 - z0)*B^h + z0
 *
 * where z0 = x0*y0, z2 = x1*y1 and z1 = (x0 + x1)*(y0 + y1).
 */
fn mul_karatsuba(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let (xs, ys) = (xp.len(), yp.len());
    let h = (cmp::max(xs, ys) + 1) / 2;
    debug_assert!(xs > h && ys > h);

    let (x0, x1) = xp.split_at(h);
    let (y0, y1) = yp.split_at(h);

    let mut z0 = vec![0; 2 * h];
    mul_rec(&mut z0, x0, y0);

    let mut z2 = vec![0; x1.len() + y1.len()];
    mul_rec(&mut z2, x1, y1);

    let mut sx = vec![0; h + 1];
    sx[h] = ll::add(&mut sx, x0, x1);
    let mut sy = vec![0; h + 1];
    sy[h] = ll::add(&mut sy, y0, y1);

    let mut z1 = vec![0; 2 * h + 2];
    mul_rec(&mut z1, &sx, &sy);
    sub_in_place(&mut z1, &z0);
    sub_in_place(&mut z1, &z2);
    let z1_len = ll::normalize(&z1);

    wp[..2 * h].copy_from_slice(&z0);
    wp[2 * h..].copy_from_slice(&z2);
    if z1_len > 0 {
        add_in_place(&mut wp[h..], &z1[..z1_len]);
    }
}

/**
 * Handles multiplication when xs is much bigger than ys.
 *
 * Works basically the same way `mul_1` does, except with `ys` limbs
 * instead of a single limb.
 */
fn mul_unbalanced(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
    let ys = yp.len();
    let mut tmp = vec![0; 2 * ys];

    for (n, chunk) in xp.chunks(ys).enumerate() {
        let off = n * ys;
        let tmp = &mut tmp[..chunk.len() + ys];
        ll::zero(tmp);
        mul_rec(tmp, chunk, yp);
        let tn = ll::normalize(tmp);
        if tn > 0 {
            add_in_place(&mut wp[off..], &tmp[..tn]);
        }
    }
}

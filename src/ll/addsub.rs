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

use crate::ll::limb::{Limb, BITS, MASK};

/**
 * Adds the `n = yp.len()` least signficant limbs of `yp` into `wp`, in place.
 * If there was a carry out of the top limb, it is returned.
 */
#[inline]
pub fn add_n(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() >= yp.len());

    let mut carry = 0;
    for (w, &y) in wp.iter_mut().zip(yp.iter()) {
        let s = *w + y + carry;
        *w = s & MASK;
        carry = s >> BITS;
    }

    carry
}

/**
 * Subtracts the `n = yp.len()` least signficant limbs of `yp` from `wp`, in place.
 * If there was a borrow from a higher-limb (i.e., the result would be negative), it is returned.
 */
#[inline]
pub fn sub_n(wp: &mut [Limb], yp: &[Limb]) -> Limb {
    debug_assert!(wp.len() >= yp.len());

    let mut borrow = 0;
    for (w, &y) in wp.iter_mut().zip(yp.iter()) {
        let d = (*w as i32) - (y as i32) - borrow;
        borrow = (d < 0) as i32;
        *w = (d as Limb) & MASK;
    }

    borrow as Limb
}

/**
 * Adds `{xp, xs}` and `{yp, ys}`, storing the `xs` least significant limbs of the sum in `wp`.
 * Requires `xs >= ys`. The carry out of the top limb is returned.
 */
pub fn add(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    let (xs, ys) = (xp.len(), yp.len());
    debug_assert!(xs >= ys);
    debug_assert!(wp.len() >= xs);

    wp[..xs].copy_from_slice(xp);
    let carry = add_n(&mut wp[..xs], yp);
    if carry == 0 {
        return 0;
    }
    incr(&mut wp[ys..xs], carry)
}

/**
 * Subtracts `{yp, ys}` from `{xp, xs}`, storing the `xs` least significant limbs of the
 * difference in `wp`. Requires `xs >= ys`. Returns the borrow out of the top limb.
 */
pub fn sub(wp: &mut [Limb], xp: &[Limb], yp: &[Limb]) -> Limb {
    let (xs, ys) = (xp.len(), yp.len());
    debug_assert!(xs >= ys);
    debug_assert!(wp.len() >= xs);

    wp[..xs].copy_from_slice(xp);
    let borrow = sub_n(&mut wp[..xs], yp);
    if borrow == 0 {
        return 0;
    }
    decr(&mut wp[ys..xs], borrow)
}

/**
 * Adds the single limb `y` to `{xp, xs}`, storing the result in `wp`. Returns the carry.
 */
pub fn add_1(wp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());
    wp[..xp.len()].copy_from_slice(xp);
    incr(&mut wp[..xp.len()], y)
}

/**
 * Subtracts the single limb `y` from `{xp, xs}`, storing the result in `wp`. Returns the borrow.
 */
pub fn sub_1(wp: &mut [Limb], xp: &[Limb], y: Limb) -> Limb {
    debug_assert!(wp.len() >= xp.len());
    wp[..xp.len()].copy_from_slice(xp);
    decr(&mut wp[..xp.len()], y)
}

/**
 * Adds `incr` to `wp` in place, propagating the carry as far as needed. Returns the carry
 * that fell off the end of the slice.
 */
#[inline]
pub fn incr(wp: &mut [Limb], incr: Limb) -> Limb {
    debug_assert!(incr <= MASK);

    let mut carry = incr;
    for w in wp.iter_mut() {
        if carry == 0 {
            break;
        }
        let s = *w + carry;
        *w = s & MASK;
        carry = s >> BITS;
    }

    carry
}

/**
 * Subtracts `decr` from `wp` in place, propagating the borrow as far as needed. Returns the
 * borrow that fell off the end of the slice.
 */
#[inline]
pub fn decr(wp: &mut [Limb], decr: Limb) -> Limb {
    debug_assert!(decr <= MASK);

    let mut borrow = decr as i32;
    for w in wp.iter_mut() {
        if borrow == 0 {
            break;
        }
        let d = (*w as i32) - borrow;
        borrow = (d < 0) as i32;
        *w = (d as Limb) & MASK;
    }

    borrow as Limb
}

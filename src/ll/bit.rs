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

use crate::ll::limb::{self, Limb, BITS, MASK};

/**
 * Performs a bit-shift of the limbs in `wp`, left by `cnt` bits, in place. The top-most
 * shifted bits are returned in the low bits of the return value.
 *
 * `cnt` must be less than the number of bits in a limb.
 */
pub fn shl(wp: &mut [Limb], cnt: u32) -> Limb {
    debug_assert!((cnt as usize) < BITS);
    if cnt == 0 || wp.is_empty() {
        return 0;
    }

    let inv_cnt = BITS as u32 - cnt;
    let mut carry = 0;
    for w in wp.iter_mut() {
        let l = *w;
        *w = ((l << cnt) | carry) & MASK;
        carry = l >> inv_cnt;
    }

    carry
}

/**
 * Performs a bit-shift of the limbs in `wp`, right by `cnt` bits, in place. The bottom-most
 * shifted bits are returned in the low bits of the return value.
 *
 * `cnt` must be less than the number of bits in a limb.
 */
pub fn shr(wp: &mut [Limb], cnt: u32) -> Limb {
    debug_assert!((cnt as usize) < BITS);
    if cnt == 0 || wp.is_empty() {
        return 0;
    }

    let inv_cnt = BITS as u32 - cnt;
    let low_mask = (1 << cnt) - 1;
    let mut carry = 0;
    for w in wp.iter_mut().rev() {
        let l = *w;
        *w = (l >> cnt) | (carry << inv_cnt);
        carry = l & low_mask;
    }

    carry
}

// Common function for the operations below, since they're all essentially the same
#[inline(always)]
fn bitop<F: Fn(Limb, Limb) -> Limb>(wp: &mut [Limb], yp: &[Limb], op: F) {
    for (w, &y) in wp.iter_mut().zip(yp.iter()) {
        *w = op(*w, y);
    }
}

/**
 * Performs a bitwise "and" (`&`) of the least signficant limbs of `wp` and `yp`, storing the
 * result in `wp`
 */
pub fn and_n(wp: &mut [Limb], yp: &[Limb]) {
    bitop(wp, yp, |x, y| x & y);
}

/**
 * Performs a bitwise "or" (`|`) of the least signficant limbs of `wp` and `yp`, storing the
 * result in `wp`
 */
pub fn or_n(wp: &mut [Limb], yp: &[Limb]) {
    bitop(wp, yp, |x, y| x | y);
}

/**
 * Performs a bitwise "xor" (`^`) of the least signficant limbs of `wp` and `yp`, storing the
 * result in `wp`
 */
pub fn xor_n(wp: &mut [Limb], yp: &[Limb]) {
    bitop(wp, yp, |x, y| x ^ y);
}

/**
 * Performs a bitwise inversion ("not") of every limb in `wp`, keeping each limb within the
 * radix.
 */
pub fn not(wp: &mut [Limb]) {
    for w in wp.iter_mut() {
        *w = !*w & MASK;
    }
}

/**
 * Scans for the first 1 bit starting from the least-significant bit the the most, returning
 * the bit index. Returns `BITS * xp.len()` if there is no set bit.
 */
pub fn scan_1(xp: &[Limb]) -> u32 {
    let mut cnt = 0u32;

    for &x in xp {
        if x != 0 {
            return cnt + limb::trailing_zeros(x);
        }
        cnt += BITS as u32;
    }

    cnt
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shl() {
        let mut w = [MASK, 1];
        assert_eq!(shl(&mut w, 1), 0);
        assert_eq!(w, [MASK - 1, 3]);

        let mut w = [0, MASK];
        assert_eq!(shl(&mut w, 4), 0xf);
        assert_eq!(w, [0, MASK - 0xf]);
    }

    #[test]
    fn test_shr() {
        let mut w = [0, 3];
        assert_eq!(shr(&mut w, 1), 0);
        assert_eq!(w, [1 << 25, 1]);

        let mut w = [0b1011, 0];
        assert_eq!(shr(&mut w, 3), 0b011);
        assert_eq!(w, [1, 0]);
    }

    #[test]
    fn test_scan_1() {
        assert_eq!(scan_1(&[0, 0, 4]), 54);
        assert_eq!(scan_1(&[1]), 0);
        assert_eq!(scan_1(&[0]), 26);
    }

    #[test]
    fn test_not() {
        let mut w = [0, MASK, 5];
        not(&mut w);
        assert_eq!(w, [MASK, 0, MASK - 5]);
    }
}

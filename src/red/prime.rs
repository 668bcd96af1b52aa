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

//! Pseudo-Mersenne primes, `p = 2^n - k` for a small `k`, and the named-prime registry.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::int::Int;
use crate::ll::limb::{Limb, MASK};

use super::Red;

/// The registered primes as `(name, n, k)` with `p = 2^n - k`.
const NAMED: [(&str, usize, u128); 4] = [
    ("k256", 256, 0x1_0000_03d1),
    ("p224", 224, (1 << 96) - 1),
    ("p192", 192, (1 << 64) + 1),
    ("p25519", 255, 19),
];

static REGISTRY: OnceLock<Vec<Red>> = OnceLock::new();

/// Looks up a named prime context, building all of them on first use.
pub(super) fn lookup(name: &str) -> Option<&'static Red> {
    let registry = REGISTRY.get_or_init(|| {
        debug!(count = NAMED.len(), "building named prime registry");
        NAMED.iter()
            .map(|&(name, n, k)| Red::from_prime(PseudoMersenne::new(Some(name), n, Int::from(k))))
            .collect()
    });
    registry.iter().find(|r| r.prime_name() == Some(name))
}

// Multiplier for the high part; a single-limb `k` is folded in with one carry pass
#[derive(Debug)]
enum K {
    Limb(Limb),
    Wide(Int),
}

/// A prime of the form `2^n - k`.
#[derive(Debug)]
pub struct PseudoMersenne {
    name: Option<&'static str>,
    p: Int,
    n: usize,
    k: K,
}

impl PseudoMersenne {
    fn new(name: Option<&'static str>, n: usize, k: Int) -> PseudoMersenne {
        let p = (Int::one() << n) - &k;
        let k = if k.limb_len() == 1 {
            K::Limb(k.to_single_limb())
        } else {
            K::Wide(k)
        };
        PseudoMersenne { name, p, n, k }
    }

    /**
     * `2^n - k` for a `k` small enough that each folding step shrinks the value. `k` must
     * be positive with fewer than `n - 1` bits.
     */
    pub(super) fn checked(n: usize, k: &Int) -> Result<PseudoMersenne> {
        if k.sign() <= 0 || k.bit_length() + 1 >= n {
            return Err(Error::InvalidModulus);
        }
        Ok(PseudoMersenne::new(None, n, k.clone()))
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn modulus(&self) -> &Int {
        &self.p
    }

    /// The bit length `n` of the prime.
    pub fn bits(&self) -> usize {
        self.n
    }

    // hi * k
    fn mul_k(&self, mut hi: Int) -> Int {
        match self.k {
            K::Limb(k) => {
                debug_assert!(k <= MASK);
                hi.imuln(k as i32);
                hi
            }
            K::Wide(ref k) => hi * k,
        }
    }

    /**
     * Reduces a non-negative value into `[0, p)` by repeatedly replacing `hi*2^n + lo` with
     * `hi*k + lo`, then subtracting `p` at most once.
     */
    pub fn ireduce(&self, mut r: Int) -> Int {
        debug_assert!(!r.is_negative());
        loop {
            let (hi, lo) = r.shr_extended(self.n);
            r = self.mul_k(hi);
            r += &lo;
            if r.bit_length() <= self.n {
                break;
            }
        }

        if r >= self.p {
            r -= &self.p;
        }
        r
    }
}

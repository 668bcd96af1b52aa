extern crate num_bigint;
extern crate quickcheck;
extern crate redint;

use num_bigint::BigUint;
use quickcheck::TestResult;
use redint::ll;
use redint::ll::limb::{self, Limb, BITS, MASK};

#[cfg(feature = "full-quickcheck")]
const QUICKCHECK_THOROUGNESS: u64 = 100;
#[cfg(not(feature = "full-quickcheck"))]
const QUICKCHECK_THOROUGNESS: u64 = 1;

macro_rules! quickcheck {
    (@as_items $($i:item)*) => ($($i)*);
    {
        $(
            fn $fn_name:ident($($arg_name:ident : $arg_ty:ty),*) -> $ret:ty {
                $($code:tt)*
            }
        )*
    } => (
        quickcheck! {
            @as_items
            $(
                #[test]
                fn $fn_name() {
                    fn prop($($arg_name: $arg_ty),*) -> $ret {
                        $($code)*
                    }
                    quickcheck::QuickCheck::new()
                        .tests(QUICKCHECK_THOROUGNESS*1_000)
                        .max_tests(QUICKCHECK_THOROUGNESS*10_000)
                        .quickcheck(prop as fn($($arg_ty),*) -> $ret);
                }
            )*
        }
    )
}

// Random words cut down to valid limbs
fn limbs(v: &[u32]) -> Vec<Limb> {
    v.iter().map(|&x| x & MASK).collect()
}

fn big(xp: &[Limb]) -> BigUint {
    xp.iter().rev().fold(BigUint::from(0u32), |acc, &l| (acc << BITS) + BigUint::from(l))
}

quickcheck!{
    fn check_mul_limb(a: u32, b: u32) -> TestResult {
        let (a, b) = (a & MASK, b & MASK);
        let (hw, lw) = limb::mul(a, b);

        TestResult::from_bool(big(&[lw, hw]) == BigUint::from(a) * BigUint::from(b))
    }
}

quickcheck!{
    fn check_div_limb(hn: u32, ln: u32, d: u32) -> TestResult {
        let (hn, ln, d) = (hn & MASK, ln & MASK, d & MASK);
        if d == 0 || hn >= d {
            return TestResult::discard();
        }

        let num_n = big(&[ln, hn]);
        let (q, r) = limb::div(hn, ln, d);

        TestResult::from_bool(&num_n / d == BigUint::from(q) && &num_n % d == BigUint::from(r))
    }
}

quickcheck!{
    fn check_add(a: Vec<u32>, b: Vec<u32>) -> TestResult {
        let (mut xp, mut yp) = (limbs(&a), limbs(&b));
        if xp.len() < yp.len() {
            std::mem::swap(&mut xp, &mut yp);
        }
        if yp.is_empty() {
            return TestResult::discard();
        }

        let mut w = vec![0; xp.len()];
        let c = ll::add(&mut w, &xp, &yp);
        w.push(c);

        TestResult::from_bool(big(&w) == big(&xp) + big(&yp))
    }
}

quickcheck!{
    fn check_sub(a: Vec<u32>, b: Vec<u32>) -> TestResult {
        let (xp, yp) = (limbs(&a), limbs(&b));
        if yp.is_empty() || xp.len() < yp.len() || big(&xp) < big(&yp) {
            return TestResult::discard();
        }

        let mut w = vec![0; xp.len()];
        let borrow = ll::sub(&mut w, &xp, &yp);

        TestResult::from_bool(borrow == 0 && big(&w) == big(&xp) - big(&yp))
    }
}

quickcheck!{
    fn check_mul(a: Vec<u32>, b: Vec<u32>) -> TestResult {
        let (xp, yp) = (limbs(&a), limbs(&b));
        if xp.is_empty() || yp.is_empty() {
            return TestResult::discard();
        }

        let mut w = vec![0; xp.len() + yp.len()];
        ll::mul(&mut w, &xp, &yp);

        TestResult::from_bool(big(&w) == big(&xp) * big(&yp))
    }
}

quickcheck!{
    fn check_divrem(n: Vec<u32>, d: Vec<u32>) -> TestResult {
        let np = limbs(&n);
        let mut dp = limbs(&d);
        dp.truncate(ll::normalize(&dp));
        if dp.is_empty() || np.len() < dp.len() {
            return TestResult::discard();
        }

        let mut q = vec![0; np.len() - dp.len() + 1];
        let mut r = vec![0; dp.len()];
        ll::divrem(&mut q, &mut r, &np, &dp);

        let (num_n, num_d) = (big(&np), big(&dp));
        TestResult::from_bool(big(&q) == &num_n / &num_d && big(&r) == &num_n % &num_d)
    }
}

quickcheck!{
    fn check_divrem_1(n: Vec<u32>, d: u32) -> TestResult {
        let np = limbs(&n);
        let d = d & MASK;
        if np.is_empty() || d == 0 {
            return TestResult::discard();
        }

        let mut q = vec![0; np.len()];
        let r = ll::divrem_1(&mut q, &np, d);

        TestResult::from_bool(big(&q) == big(&np) / d
                              && BigUint::from(r) == big(&np) % d
                              && r == ll::rem_1(&np, d))
    }
}

quickcheck!{
    fn check_shl(a: Vec<u32>, cnt: u32) -> TestResult {
        let mut wp = limbs(&a);
        let cnt = cnt % BITS as u32;
        let num = big(&wp) << cnt as usize;

        let c = ll::shl(&mut wp, cnt);
        wp.push(c);

        TestResult::from_bool(big(&wp) == num)
    }
}

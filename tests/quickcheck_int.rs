extern crate num_bigint;
extern crate num_integer;
extern crate quickcheck;
extern crate redint;

use num_bigint::BigInt;
use num_integer::Integer;
use quickcheck::TestResult;
use redint::ll::limb::MASK;
use redint::{Endian, Int};

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
                        .tests(QUICKCHECK_THOROUGNESS*500)
                        .max_tests(QUICKCHECK_THOROUGNESS*5_000)
                        .quickcheck(prop as fn($($arg_ty),*) -> $ret);
                }
            )*
        }
    )
}

// Builds an Int from arbitrary words and a sign
fn int(v: &[u32], neg: bool) -> Int {
    let limbs = v.iter().map(|&x| x & MASK).collect();
    Int::from_limbs(limbs, neg)
}

fn big(i: &Int) -> BigInt {
    i.to_string().parse().unwrap()
}

quickcheck!{
    fn string_round_trip(a: Vec<u32>, neg: bool, base: u8) -> TestResult {
        let a = int(&a, neg);
        let base = 2 + (base as u32 % 35);

        let s = a.to_str_radix(base).unwrap();
        let back = Int::from_str_radix(&s, base).unwrap();
        let upper = Int::from_str_radix(&s.to_uppercase(), base).unwrap();

        TestResult::from_bool(back == a && upper == a && s == big(&a).to_str_radix(base))
    }
}

quickcheck!{
    fn bytes_round_trip(a: Vec<u32>) -> TestResult {
        let a = int(&a, false);
        let be = a.to_bytes(Endian::Big, None).unwrap();
        let le = a.to_bytes(Endian::Little, Some(be.len() + 3)).unwrap();

        TestResult::from_bool(Int::from_bytes(&be, Endian::Big) == a
                              && Int::from_bytes(&le, Endian::Little) == a
                              && be == big(&a).to_bytes_be().1)
    }
}

quickcheck!{
    fn twos_round_trip(a: Vec<u32>, neg: bool, extra: u8) -> TestResult {
        let a = int(&a, neg);
        let width = a.bit_length() + 1 + extra as usize;
        let t = a.to_twos(width);

        TestResult::from_bool(!t.is_negative() && t.bit_length() <= width && t.from_twos(width) == a)
    }
}

quickcheck!{
    fn add_sub(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, b) = (int(&a, an), int(&b, bn));
        let sum = &a + &b;
        let diff = &a - &b;

        TestResult::from_bool(big(&sum) == big(&a) + big(&b)
                              && big(&diff) == big(&a) - big(&b)
                              && &sum - &b == a)
    }
}

quickcheck!{
    fn mul_commutes(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, b) = (int(&a, an), int(&b, bn));
        let p = &a * &b;

        TestResult::from_bool(p == &b * &a && big(&p) == big(&a) * big(&b) && a.sqr() == &a * &a)
    }
}

quickcheck!{
    fn divmod(a: Vec<u32>, an: bool, b: Vec<u32>, bn: bool) -> TestResult {
        let (a, b) = (int(&a, an), int(&b, bn));
        if b.is_zero() {
            return TestResult::discard();
        }

        let (q, r) = a.divmod(&b).unwrap();
        let u = a.umod(&b).unwrap();
        let (fq, fr) = a.divmod_floor(&b).unwrap();
        let (ba, bb) = (big(&a), big(&b));

        TestResult::from_bool(big(&q) == &ba / &bb
                              && big(&r) == &ba % &bb
                              && &q * &b + &r == a
                              && !u.is_negative() && u.ucmp(&b) == std::cmp::Ordering::Less
                              && big(&fq) == ba.div_floor(&bb)
                              && big(&fr) == ba.mod_floor(&bb))
    }
}

quickcheck!{
    fn mod_of_product(a: Vec<u32>, b: Vec<u32>, m: Vec<u32>) -> TestResult {
        let (a, b, m) = (int(&a, false), int(&b, true), int(&m, false));
        if m.is_zero() {
            return TestResult::discard();
        }

        let lhs = (&a * &b).umod(&m).unwrap();
        let rhs = (a.umod(&m).unwrap() * b.umod(&m).unwrap()).umod(&m).unwrap();
        TestResult::from_bool(lhs == rhs)
    }
}

quickcheck!{
    fn gcd_and_inverse(a: Vec<u32>, m: Vec<u32>) -> TestResult {
        let (a, m) = (int(&a, false), int(&m, false));
        if m.cmpn(1) != std::cmp::Ordering::Greater {
            return TestResult::discard();
        }

        let g = a.gcd(&m);
        if big(&g) != big(&a).gcd(&big(&m)) {
            return TestResult::failed();
        }

        let e = a.egcd(&m).unwrap();
        if &e.a * &a + &e.b * &m != e.gcd || e.gcd != g {
            return TestResult::failed();
        }

        match a.invm(&m) {
            Ok(inv) => TestResult::from_bool(g == 1 && (&a * &inv).umod(&m).unwrap() == 1),
            Err(_) => TestResult::from_bool(g != 1),
        }
    }
}

quickcheck!{
    fn shifts(a: Vec<u32>, neg: bool, bits: u8) -> TestResult {
        let a = int(&a, neg);
        let bits = bits as usize;
        let ba = big(&a);
        let mag = if neg { -&ba } else { ba.clone() };
        let shr = &mag >> bits;
        let expected_shr = if neg { -shr } else { shr };

        TestResult::from_bool(big(&(&a << bits)) == &ba << bits
                              && big(&(&a >> bits)) == expected_shr
                              && (&a << bits) >> bits == a)
    }
}

quickcheck!{
    fn bitwise(a: Vec<u32>, b: Vec<u32>) -> TestResult {
        let (a, b) = (int(&a, false), int(&b, false));
        let (ba, bb) = (big(&a), big(&b));

        TestResult::from_bool(big(&(&a & &b)) == &ba & &bb
                              && big(&(&a | &b)) == &ba | &bb
                              && big(&(&a ^ &b)) == &ba ^ &bb
                              && a.count_ones() == ba.to_str_radix(2).matches('1').count())
    }
}

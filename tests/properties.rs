use big_uint::{BigUint, BigUintError};
use proptest::prelude::*;

fn big_uint() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u32>(), 0..10).prop_map(BigUint::from_limbs)
}

fn from_u128(val: u128) -> BigUint {
    BigUint::from_limbs(vec![val as u32, (val >> 32) as u32, (val >> 64) as u32, (val >> 96) as u32])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hex_round_trip(x in big_uint()) {
        let parsed = BigUint::from_hex(&x.to_hex()).unwrap();
        prop_assert_eq!(parsed.limbs(), x.limbs());
    }

    #[test]
    fn upper_hex_parses_and_prints_unchanged(upper_hex in "([0-9A-F]{8}){0,8}") {
        let x: BigUint = upper_hex.parse().unwrap();
        prop_assert_eq!(x.to_hex(), upper_hex);
    }

    #[test]
    fn bad_length_is_rejected(s in "[0-9a-f]{1,40}") {
        prop_assume!(s.len() % 8 != 0);
        let mut x = BigUint::from(7u32);
        prop_assert_eq!(x.set_hex(&s), Err(BigUintError::InvalidFormat { len: s.len() }));
        prop_assert!(x.limbs().is_empty());
    }

    #[test]
    fn add_commutes_and_associates(a in big_uint(), b in big_uint(), c in big_uint()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn bitwise_commutes_and_associates(a in big_uint(), b in big_uint(), c in big_uint()) {
        prop_assert_eq!(&a & &b, &b & &a);
        prop_assert_eq!(&a | &b, &b | &a);
        prop_assert_eq!(&a ^ &b, &b ^ &a);
        prop_assert_eq!(&(&a & &b) & &c, &a & &(&b & &c));
        prop_assert_eq!(&(&a | &b) | &c, &a | &(&b | &c));
        prop_assert_eq!(&(&a ^ &b) ^ &c, &a ^ &(&b ^ &c));
    }

    #[test]
    fn sub_undoes_add(a in big_uint(), b in big_uint()) {
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!((&a + &b).checked_sub(&a), Ok(b.clone()));
    }

    #[test]
    fn sub_underflow_is_reported(a in big_uint(), b in big_uint()) {
        prop_assume!(a < b);
        prop_assert_eq!(a.checked_sub(&b), Err(BigUintError::Underflow));
    }

    #[test]
    fn division_law(a in big_uint(), b in big_uint()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&(&q * &b) + &r, a);
    }

    #[test]
    fn shift_right_then_left_clears_low_bits(x in big_uint(), n in 0u32..400) {
        let y = (&x >> n) << n;
        for bit in 0..x.bit_length() + 64 {
            prop_assert_eq!(y.test_bit(bit), bit >= n as usize && x.test_bit(bit));
        }
    }

    #[test]
    fn shift_left_then_right_is_identity(x in big_uint(), n in 0u32..400) {
        prop_assert_eq!((&x << n) >> n, x.clone());
        prop_assert_eq!(&x << 0, x.clone());
        prop_assert_eq!(&x >> 0, x);
    }

    #[test]
    fn not_is_an_involution(x in big_uint()) {
        let twice = !!x.clone();
        prop_assert_eq!(twice.limbs(), x.limbs());
        prop_assert_eq!((!&x).limbs().len(), x.limbs().len());
    }

    #[test]
    fn matches_u128_arithmetic(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (BigUint::from(a), BigUint::from(b));
        prop_assert_eq!(&x + &y, from_u128(a as u128 + b as u128));
        prop_assert_eq!(&x * &y, from_u128(a as u128 * b as u128));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!(&x << 37, from_u128((a as u128) << 37));
        prop_assert_eq!(&x >> 37, BigUint::from(a >> 37));
        if b != 0 {
            prop_assert_eq!(x.div_rem(&y), Ok((BigUint::from(a / b), BigUint::from(a % b))));
        }
    }
}

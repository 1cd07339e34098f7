// tests/property_tests.rs
use endian_swap::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn fixed32_is_involution(v in any::<u32>()) {
        prop_assert_eq!(swap_fixed32(swap_fixed32(v)), v);
    }

    #[test]
    fn fixed64_is_involution(v in any::<u64>()) {
        prop_assert_eq!(swap_fixed64(swap_fixed64(v)), v);
    }

    #[test]
    fn signed_swaps_are_involutions(a in any::<i32>(), b in any::<i64>()) {
        prop_assert_eq!(swap_i32(swap_i32(a)), a);
        prop_assert_eq!(swap_i64(swap_i64(b)), b);
    }

    // Float inputs are built from raw bits so NaN payloads are covered
    #[test]
    fn float_reversal_is_involution(a in any::<u32>(), b in any::<u64>()) {
        let single = f32::from_bits(a);
        let double = f64::from_bits(b);
        prop_assert_eq!(reverse_f32(reverse_f32(single)).to_bits(), a);
        prop_assert_eq!(reverse_f64(reverse_f64(double)).to_bits(), b);
    }

    #[test]
    fn in_place_is_involution(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut buffer = data.clone();
        reverse_in_place(&mut buffer);
        reverse_in_place(&mut buffer);
        prop_assert_eq!(buffer, data);
    }

    #[test]
    fn fixed32_matches_in_place(v in any::<u32>()) {
        let mut bytes = v.to_ne_bytes();
        reverse_in_place(&mut bytes);
        prop_assert_eq!(swap_fixed32(v).to_ne_bytes(), bytes);
    }

    #[test]
    fn fixed64_matches_in_place(v in any::<u64>()) {
        let mut bytes = v.to_ne_bytes();
        reverse_in_place(&mut bytes);
        prop_assert_eq!(swap_fixed64(v).to_ne_bytes(), bytes);
    }

    #[test]
    fn floats_match_copy_reversal(a in any::<u32>(), b in any::<u64>()) {
        let mut out4 = [0u8; 4];
        reverse_to_output(&a.to_ne_bytes(), &mut out4).unwrap();
        prop_assert_eq!(reverse_f32(f32::from_bits(a)).to_bits().to_ne_bytes(), out4);

        let mut out8 = [0u8; 8];
        reverse_to_output(&b.to_ne_bytes(), &mut out8).unwrap();
        prop_assert_eq!(reverse_f64(f64::from_bits(b)).to_bits().to_ne_bytes(), out8);
    }

    #[test]
    fn copy_leaves_input_and_matches_in_place(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let input = data.clone();
        let mut output = vec![0u8; input.len()];
        reverse_to_output(&input, &mut output).unwrap();
        prop_assert_eq!(&input, &data);

        let mut in_place = data;
        reverse_in_place(&mut in_place);
        prop_assert_eq!(output, in_place);
    }

    #[test]
    fn trait_agrees_with_generic(v in any::<u64>()) {
        prop_assert_eq!(v.reverse_bytes(), reverse_value(v));
        prop_assert_eq!((v as i64).reverse_bytes(), reverse_value(v as i64));
    }
}

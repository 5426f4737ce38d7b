// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use gw_math::{int_add, int_sub, int_type_max, int_type_min};

#[test]
fn bounds_match_primitive_constants() {
    assert_eq!(int_type_min::<i8>(), i8::MIN);
    assert_eq!(int_type_max::<u16>(), u16::MAX);
    assert_eq!(int_type_min::<u64>(), 0);
    assert_eq!(int_type_max::<isize>(), isize::MAX);
}

#[test]
fn same_width_signed_unsigned_mixes() {
    let mut dst: i32 = 0;
    assert!(!int_add(&mut dst, u32::MAX, i32::MIN));
    assert_eq!(dst, i32::MAX);

    // u32::MAX + 0 does not fit in i32.
    assert!(int_add(&mut dst, u32::MAX, 0_i32));
    assert_eq!(dst, i32::MAX);

    let mut dst: u32 = 5;
    assert!(!int_add(&mut dst, -1_i32, 1_u32));
    assert_eq!(dst, 0);
    assert!(int_add(&mut dst, -1_i32, 0_u32));
    assert_eq!(dst, 0);

    let mut dst: u64 = 1;
    assert!(!int_add(&mut dst, i64::MAX, i64::MAX));
    assert_eq!(dst, u64::MAX - 1);
}

#[test]
fn widest_operands_keep_every_bit() {
    let mut dst: i64 = 0;
    assert!(!int_add(&mut dst, u64::MAX, i64::MIN));
    assert_eq!(dst, i64::MAX);
    assert!(!int_sub(&mut dst, i64::MIN, 0_u8));
    assert_eq!(dst, i64::MIN);

    let mut dst: u64 = 3;
    assert!(!int_sub(&mut dst, u64::MAX, u64::MAX));
    assert_eq!(dst, 0);
    // One past the widest destination still fails cleanly.
    assert!(int_add(&mut dst, u64::MAX, 1_u8));
    assert_eq!(dst, 0);

    let mut dst: i8 = 7;
    assert!(int_sub(&mut dst, i64::MIN, u64::MAX));
    assert_eq!(dst, 7);
}

#[test]
fn narrowing_destinations() {
    let mut dst: u8 = 9;
    assert!(!int_add(&mut dst, 200_u64, 55_i16));
    assert_eq!(dst, 255);
    assert!(int_add(&mut dst, 200_u64, 56_i16));
    assert_eq!(dst, 255);

    let mut dst: i8 = 1;
    assert!(!int_sub(&mut dst, -100_i64, 28_u32));
    assert_eq!(dst, i8::MIN);
    assert!(int_sub(&mut dst, -100_i64, 29_u32));
    assert_eq!(dst, i8::MIN);

    let mut dst: i16 = 0;
    assert!(int_add(&mut dst, u64::MAX, i64::MIN));
    assert_eq!(dst, 0);
}

#[test]
fn results_crossing_zero() {
    let mut dst: u16 = 42;
    assert!(int_sub(&mut dst, 3_u8, 4_u8));
    assert_eq!(dst, 42);
    assert!(!int_sub(&mut dst, 4_u8, 4_u8));
    assert_eq!(dst, 0);

    let mut dst: i64 = 0;
    assert!(!int_sub(&mut dst, 0_u64, u64::from(u32::MAX)));
    assert_eq!(dst, -i64::from(u32::MAX));

    let mut dst: i32 = 0;
    assert!(!int_add(&mut dst, -7_i8, 10_u8));
    assert_eq!(dst, 3);
}

#[test]
fn extremes_of_64_bit_operands() {
    let mut dst: i64 = 0;
    assert!(int_sub(&mut dst, i64::MIN, 1_u8));
    assert_eq!(dst, 0);
    assert!(!int_sub(&mut dst, i64::MIN, -1_i8));
    assert_eq!(dst, i64::MIN + 1);

    let mut dst: u64 = 0;
    assert!(int_add(&mut dst, u64::MAX, 1_u8));
    assert!(!int_sub(&mut dst, u64::MAX, u64::MAX));
    assert_eq!(dst, 0);

    let mut dst: usize = 0;
    assert!(!int_add(&mut dst, 1_usize, 2_isize));
    assert_eq!(dst, 3);
}

//! # BigUint
//! Immutable arbitrary-precision unsigned integers stored as 32-bit limbs, least-significant limb first.
//! Values are read from and written to big-endian hex strings, one 8-digit group per limb.
//! # Example
//! ```
//! use big_uint::BigUint;
//!
//! let a = BigUint::from_hex("0000000000000002").unwrap();
//! let b = BigUint::from_hex("0000000000000003").unwrap();
//! assert_eq!((&a + &b).to_hex(), "0000000000000005");
//! assert_eq!(&a * &b, BigUint::from(6u32));
//! let (q, r) = b.div_rem(&a).unwrap();
//! assert_eq!((q, r), (BigUint::from(1u32), BigUint::from(1u32)));
//! println!("a << 40 = {}", &a << 40);
//! ```
//!

use std::fmt::{self, Display, LowerHex, UpperHex};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Not,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use tracing::{trace, warn};

use crate::big_uint_cache::*;
use crate::big_uint_constants::*;
use crate::errors::BigUintError;

const LIMB_BASE: u64 = 1 << LIMB_BITS;

macro_rules! trim_high_zero {
    ($vec: expr) => {
        {
            let mut v: Vec<u32> = $vec;
            while v.last() == Some(&0) {
                v.pop();
            }
            v
        }
    };
}

macro_rules! limb_at {
    ($vec: expr, $i: expr) => {
        $vec.get($i).copied().unwrap_or(0) as u64
    };
}

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (LIMB_BITS - $n.leading_zeros()) as usize
    };
}

/// An arbitrary-precision unsigned integer.
///
/// High zero limbs may be stored; they give a value its *width* (see [`BigUint::to_hex`]
/// and the `!` operator) but never take part in equality, hashing or ordering.
#[derive(Debug, Clone, Default)]
pub struct BigUint {
    limbs: Vec<u32>,
}

// Miscellaneous helpers
impl BigUint {
    /// Number of limbs up to and including the most-significant nonzero one
    fn significant_len(limbs: &[u32]) -> usize {
        limbs.iter().rposition(|x| *x != 0).map_or(0, |i| i + 1)
    }
    fn significant(&self) -> &[u32] {
        &self.limbs[..BigUint::significant_len(&self.limbs)]
    }
}

// Construction
impl BigUint {
    pub const ZERO: BigUint = BigUint { limbs: Vec::new() };

    /// Creates an empty value, which is zero.
    pub const fn new() -> Self {
        BigUint::ZERO
    }
    /// Wraps `limbs`, least-significant first. High zero limbs are kept as width.
    pub fn from_limbs(limbs: Vec<u32>) -> Self {
        BigUint { limbs }
    }
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|x| *x == 0)
    }
    /// The number of bits required to represent this number
    pub fn bit_length(&self) -> usize {
        let len = BigUint::significant_len(&self.limbs);
        if len == 0 {
            0
        } else {
            ((len - 1) * LIMB_BITS as usize) + bit_length_u32!(self.limbs[len - 1])
        }
    }
    /// Test if bit N is set. Bits past the stored limbs read as zero.
    pub fn test_bit(&self, bit: usize) -> bool {
        let limb_idx = bit / LIMB_BITS as usize;
        let bit_idx = bit % LIMB_BITS as usize;
        self.limbs.get(limb_idx).is_some_and(|limb| (limb >> bit_idx) & 1 == 1)
    }
    /// Drops high zero limbs.
    pub fn normalize(&mut self) {
        let len = BigUint::significant_len(&self.limbs);
        self.limbs.truncate(len);
    }
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

macro_rules! impl_unsigned_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_uint!(u8, u16, u32, u64, usize);

impl BigUint {
    fn value_of(val: u64) -> BigUint {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let high = (val >> LIMB_BITS) as u32;
        let low = val as u32;
        if high == 0 {
            BigUint::from_limbs(vec![low])
        } else {
            BigUint::from_limbs(vec![low, high])
        }
    }
}

// Parsing
impl BigUint {
    /// Parses a big-endian hex string whose length is a multiple of 8.
    ///
    /// Each group of 8 digits becomes one limb, the rightmost group being limb 0.
    /// Upper and lower case digits are accepted; no prefix or sign is allowed.
    pub fn from_hex(hex: &str) -> Result<BigUint, BigUintError> {
        let len = hex.len();
        if len % HEX_DIGITS_PER_LIMB != 0 {
            warn!(len, "rejected hex string: length is not a multiple of {}", HEX_DIGITS_PER_LIMB);
            return Err(BigUintError::InvalidFormat { len });
        }
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            warn!(digit = ?c, "rejected hex string: invalid digit");
            return Err(BigUintError::InvalidDigit(c));
        }

        let mut limbs = Vec::with_capacity(len / HEX_DIGITS_PER_LIMB);
        let mut end = len;
        while end > 0 {
            let start = end - HEX_DIGITS_PER_LIMB;
            limbs.push(BigUint::parse_limb(&hex[start..end])?);
            end = start;
        }
        Ok(BigUint::from_limbs(limbs))
    }
    /// Replaces the value with the parsed `hex`. On failure the value is left empty.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), BigUintError> {
        self.limbs.clear();
        *self = BigUint::from_hex(hex)?;
        Ok(())
    }
    fn parse_limb(group: &str) -> Result<u32, BigUintError> {
        group.chars().try_fold(0u32, |limb, c| {
            c.to_digit(16)
                .map(|digit| (limb << 4) | digit)
                .ok_or(BigUintError::InvalidDigit(c))
        })
    }
}

impl FromStr for BigUint {
    type Err = BigUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_hex(s)
    }
}

// Printing
impl BigUint {
    /// Big-endian hex, 8 uppercase digits per stored limb. An empty value prints as `""`.
    pub fn to_hex(&self) -> String {
        format!("{:X}", self)
    }
}

impl UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{:08X}", limb)?;
        }
        Ok(())
    }
}

impl LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{:08x}", limb)?;
        }
        Ok(())
    }
}

impl Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(self, f)
    }
}

// Comparison
impl BigUint {
    fn compare_limbs(x: &[u32], y: &[u32]) -> Ordering {
        let x = &x[..BigUint::significant_len(x)];
        let y = &y[..BigUint::significant_len(y)];

        match x.len().cmp(&y.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        BigUint::compare_limbs(&self.limbs, &other.limbs).is_eq()
    }
}
impl Eq for BigUint {}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        BigUint::compare_limbs(&self.limbs, &other.limbs)
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

// Owned and assigning forms of a binary operator, all routed to the `&BigUint op &BigUint` impl
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: Self) -> Self::Output {
                <&BigUint as $imp<&BigUint>>::$method(&self, &rhs)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> Self::Output {
                <&BigUint as $imp<&BigUint>>::$method(&self, rhs)
            }
        }

        impl $imp_assign for BigUint {
            fn $method_assign(&mut self, rhs: Self) {
                *self = <&BigUint as $imp<&BigUint>>::$method(self, &rhs);
            }
        }

        impl $imp_assign<&BigUint> for BigUint {
            fn $method_assign(&mut self, rhs: &BigUint) {
                *self = <&BigUint as $imp<&BigUint>>::$method(self, rhs);
            }
        }
    };
}

// Bitwise logic
impl BigUint {
    fn zip_limbs(x: &[u32], y: &[u32], op: impl Fn(u32, u32) -> u32) -> Vec<u32> {
        let len = x.len().max(y.len());
        (0..len)
            .map(|i| op(limb_at!(x, i) as u32, limb_at!(y, i) as u32))
            .collect()
    }
}

impl BitAnd<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: &BigUint) -> Self::Output {
        BigUint::from_limbs(BigUint::zip_limbs(&self.limbs, &rhs.limbs, |a, b| a & b))
    }
}
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);

impl BitOr<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: &BigUint) -> Self::Output {
        BigUint::from_limbs(BigUint::zip_limbs(&self.limbs, &rhs.limbs, |a, b| a | b))
    }
}
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);

impl BitXor<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: &BigUint) -> Self::Output {
        BigUint::from_limbs(BigUint::zip_limbs(&self.limbs, &rhs.limbs, |a, b| a ^ b))
    }
}
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

/// Complements the stored limbs only; the width does not change.
impl Not for BigUint {
    type Output = BigUint;

    fn not(mut self) -> Self::Output {
        self.limbs.iter_mut().for_each(|limb| *limb = !*limb);
        self
    }
}

impl Not for &BigUint {
    type Output = BigUint;

    fn not(self) -> Self::Output {
        BigUint::from_limbs(self.limbs.iter().map(|limb| !limb).collect())
    }
}

// Addition
impl BigUint {
    fn add_limbs(x: &[u32], y: &[u32]) -> Vec<u32> {
        let len = x.len().max(y.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry: u64 = 0;

        for i in 0..len {
            let sum = limb_at!(x, i) + limb_at!(y, i) + carry;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }

        if carry != 0 {
            result.push(carry as u32);
        }

        result
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> Self::Output {
        BigUint::from_limbs(BigUint::add_limbs(&self.limbs, &rhs.limbs))
    }
}
forward_binop!(Add, add, AddAssign, add_assign);

// Subtraction
impl BigUint {
    /// `big -= little` limb by limb; `big` must hold at least as many limbs as `little`
    /// and must not be smaller in value.
    fn sub_in_place(big: &mut Vec<u32>, little: &[u32]) {
        let mut borrow = false;

        for (i, limb) in big.iter_mut().enumerate() {
            let difference = LIMB_BASE + *limb as u64 - limb_at!(little, i) - borrow as u64;
            *limb = difference as u32;
            borrow = difference < LIMB_BASE;
        }
        debug_assert!(!borrow, "subtraction underflow");

        while big.last() == Some(&0) {
            big.pop();
        }
    }
    fn sub_limbs(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = big.to_vec();
        result.resize(big.len().max(little.len()), 0);
        BigUint::sub_in_place(&mut result, little);
        result
    }

    /// `self - rhs`, or [`BigUintError::Underflow`] when `rhs` is larger than `self`.
    /// The result is normalized.
    pub fn checked_sub(&self, rhs: &BigUint) -> Result<BigUint, BigUintError> {
        if self < rhs {
            return Err(BigUintError::Underflow);
        }
        Ok(BigUint::from_limbs(BigUint::sub_limbs(&self.limbs, &rhs.limbs)))
    }
}

/// # Panics
/// Panics when `rhs` is larger than `self`, like the primitive unsigned integers do.
/// Use [`BigUint::checked_sub`] to handle that case.
impl Sub<&BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &BigUint) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Sub, sub, SubAssign, sub_assign);

// Multiplication
impl BigUint {
    fn mul_limbs(x: &[u32], y: &[u32]) -> Vec<u32> {
        let mut result = Vec::new();

        for (i, &a) in x.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut partial = Vec::with_capacity(i + y.len() + 1);
            partial.resize(i, 0);

            let mut carry: u64 = 0;
            for &b in y {
                let product = a as u64 * b as u64 + carry;
                partial.push(product as u32);
                carry = product >> LIMB_BITS;
            }
            if carry != 0 {
                partial.push(carry as u32);
            }

            result = BigUint::add_limbs(&result, &partial);
        }

        trim_high_zero!(result)
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> Self::Output {
        BigUint::from_limbs(BigUint::mul_limbs(&self.limbs, &rhs.limbs))
    }
}
forward_binop!(Mul, mul, MulAssign, mul_assign);

// Left shift
impl BigUint {
    fn shl_limbs(limbs: &[u32], n: u32) -> Vec<u32> {
        let n_limbs = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;
        let len = limbs.len();

        let mut result = vec![0u32; n_limbs];
        result.reserve(len + 1);

        if n_bits == 0 {
            result.extend_from_slice(limbs);
            return result;
        }

        // Walk down from the top limb; the bits pushed out of limb i land in limb i + 1.
        let mut shifted = vec![0u32; len + 1];
        for i in (0..len).rev() {
            shifted[i + 1] |= limbs[i] >> (LIMB_BITS - n_bits);
            shifted[i] = limbs[i] << n_bits;
        }
        if shifted[len] == 0 {
            shifted.pop();
        }

        result.extend_from_slice(&shifted);
        result
    }
}

impl Shl<u32> for &BigUint {
    type Output = BigUint;

    fn shl(self, n: u32) -> Self::Output {
        if n == 0 {
            self.clone()
        } else {
            BigUint::from_limbs(BigUint::shl_limbs(&self.limbs, n))
        }
    }
}

impl Shl<u32> for BigUint {
    type Output = BigUint;

    fn shl(self, n: u32) -> Self::Output {
        if n == 0 {
            self
        } else {
            &self << n
        }
    }
}

impl ShlAssign<u32> for BigUint {
    fn shl_assign(&mut self, n: u32) {
        *self = &*self << n;
    }
}

// Right shift
impl BigUint {
    fn shr_limbs(limbs: &[u32], n: u32) -> Vec<u32> {
        let n_limbs = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;

        if n_limbs >= limbs.len() {
            return Vec::new();
        }

        let mut result = limbs[n_limbs..].to_vec();

        if n_bits != 0 {
            // Walk down from the top limb; the bits pushed out of limb i land in limb i - 1.
            let mut carry = 0u32;
            for limb in result.iter_mut().rev() {
                let out = *limb << (LIMB_BITS - n_bits);
                *limb = (*limb >> n_bits) | carry;
                carry = out;
            }
        }

        trim_high_zero!(result)
    }
}

impl Shr<u32> for &BigUint {
    type Output = BigUint;

    fn shr(self, n: u32) -> Self::Output {
        BigUint::from_limbs(BigUint::shr_limbs(&self.limbs, n))
    }
}

impl Shr<u32> for BigUint {
    type Output = BigUint;

    fn shr(self, n: u32) -> Self::Output {
        &self >> n
    }
}

impl ShrAssign<u32> for BigUint {
    fn shr_assign(&mut self, n: u32) {
        *self = &*self >> n;
    }
}

// Division
impl BigUint {
    /// Performs both division and remainder and returns the pair `(quotient, remainder)`.
    ///
    /// Binary long division: one quotient bit is decided per dividend bit, so the cost is
    /// quadratic in the bit width. Both results are normalized.
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint), BigUintError> {
        if divisor.is_zero() {
            return Err(BigUintError::DivideByZero);
        }
        if self < divisor {
            return Ok((BigUint::ZERO, self.clone().normalized()));
        }

        let bits = self.bit_length();
        let divisor_limbs = divisor.significant();
        trace!(dividend_bits = bits, divisor_bits = divisor.bit_length(), "binary long division");

        let mut quotient = vec![0u32; bits.div_ceil(LIMB_BITS as usize)];
        let mut remainder: Vec<u32> = Vec::with_capacity(divisor_limbs.len() + 1);

        for bit in (0..bits).rev() {
            BigUint::shl_one_in_place(&mut remainder, self.test_bit(bit));
            if BigUint::compare_limbs(&remainder, divisor_limbs) != Ordering::Less {
                BigUint::sub_in_place(&mut remainder, divisor_limbs);
                quotient[bit / LIMB_BITS as usize] |= 1 << (bit % LIMB_BITS as usize);
            }
        }

        Ok((
            BigUint::from_limbs(trim_high_zero!(quotient)),
            BigUint::from_limbs(remainder),
        ))
    }
    /// `self / divisor`, or [`BigUintError::DivideByZero`].
    pub fn checked_div(&self, divisor: &BigUint) -> Result<BigUint, BigUintError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }
    /// `self % divisor`, or [`BigUintError::DivideByZero`].
    pub fn checked_rem(&self, divisor: &BigUint) -> Result<BigUint, BigUintError> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
    /// Shifts `limbs` left by one bit and sets bit 0 to `low_bit`.
    fn shl_one_in_place(limbs: &mut Vec<u32>, low_bit: bool) {
        let mut carry = low_bit as u32;
        for limb in limbs.iter_mut() {
            let out = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = out;
        }
        if carry != 0 {
            limbs.push(carry);
        }
    }
}

/// # Panics
/// Panics when `rhs` is zero. Use [`BigUint::checked_div`] to handle that case.
impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Div, div, DivAssign, div_assign);

/// # Panics
/// Panics when `rhs` is zero. Use [`BigUint::checked_rem`] to handle that case.
impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Rem, rem, RemAssign, rem_assign);

#[cfg(test)]
fn hex(s: &str) -> BigUint {
    BigUint::from_hex(s).unwrap()
}

#[cfg(test)]
const A: &str = "36F028580BB02CC8272A9A020F4200E346E276AE664E45EE80745574E2F5AB80";
#[cfg(test)]
const B: &str = "70983D692F648185FEBE6D6FA607630AE68649F7E6FC45B94680096C06E4FADB";

#[test]
fn test_from() {
    let big: BigUint = 12u8.into();
    assert_eq!(big.limbs, vec![12]);

    let big: BigUint = 0u32.into();
    assert!(big.limbs.is_empty());
    assert!(big.is_zero());

    let big: BigUint = 0xdead_beefu32.into();
    assert_eq!(big.limbs, vec![0xdead_beef]);

    let big: BigUint = 0x1_0000_0002u64.into();
    assert_eq!(big.limbs, vec![2, 1]);

    let big: BigUint = 16usize.into();
    assert_eq!(big.limbs, vec![16]);
}

#[test]
fn test_from_hex() {
    let a = hex("00000010");
    assert_eq!(a.limbs, vec![0x10]);
    assert_eq!(a.to_hex(), "00000010");

    // rightmost group is limb 0, zero groups are kept
    let a = hex("0000000100000000ffffffff");
    assert_eq!(a.limbs, vec![0xffff_ffff, 0, 1]);

    let a = hex("0000000000000002");
    assert_eq!(a.limbs, vec![2, 0]);
    assert_eq!(a, BigUint::from(2u32));

    let a = hex("");
    assert!(a.limbs.is_empty());

    let a: BigUint = A.parse().unwrap();
    assert_eq!(a.limbs.len(), 8);
    assert_eq!(a.limbs[0], 0xE2F5_AB80);
    assert_eq!(a.limbs[7], 0x36F0_2858);
}

#[test]
fn test_from_hex_errors() {
    assert_eq!(BigUint::from_hex("123"), Err(BigUintError::InvalidFormat { len: 3 }));
    assert_eq!(BigUint::from_hex("0x000010"), Err(BigUintError::InvalidDigit('x')));
    assert_eq!(BigUint::from_hex("+0000010"), Err(BigUintError::InvalidDigit('+')));
    assert_eq!(BigUint::from_hex("0000000g"), Err(BigUintError::InvalidDigit('g')));
    assert_eq!(BigUint::from_hex("00000é0"), Err(BigUintError::InvalidDigit('é')));

    let mut a = hex("00000010");
    assert_eq!(a.set_hex("123"), Err(BigUintError::InvalidFormat { len: 3 }));
    assert!(a.limbs.is_empty());
    assert_eq!(a.to_hex(), "");

    assert_eq!(a.set_hex("0000002A"), Ok(()));
    assert_eq!(a, BigUint::from(42u32));
}

#[test]
fn test_to_hex() {
    assert_eq!(BigUint::new().to_hex(), "");
    assert_eq!(BigUint::from_limbs(vec![0]).to_hex(), "00000000");
    assert_eq!(BigUint::from_limbs(vec![0xab, 0x1]).to_hex(), "00000001000000AB");
    assert_eq!(hex(&A.to_lowercase()).to_hex(), A);
    assert_eq!(format!("{:x}", hex(A)), A.to_lowercase());
    assert_eq!(format!("{}", hex(B)), B);
}

#[test]
fn test_compare() {
    let a = hex(A);
    let b = hex(B);
    assert!(b > a);
    assert!(b >= a);
    assert!(a >= a.clone());
    assert!(!(a > a.clone()));
    assert_eq!(a.cmp(&b), Ordering::Less);

    // width does not matter
    assert_eq!(hex("0000000000000005"), hex("00000005"));
    assert!(hex("0000000000000006") > hex("00000005"));
    assert!(hex("0000000100000000") > hex("00000000FFFFFFFF"));
    assert_eq!(BigUint::from_limbs(vec![0, 0]), BigUint::new());
    assert_eq!(BigUint::from_limbs(vec![0, 0]).cmp(&BigUint::new()), Ordering::Equal);

    // most-significant limb decides
    assert!(BigUint::from_limbs(vec![0, 2]) > BigUint::from_limbs(vec![u32::MAX, 1]));
}

#[test]
fn test_hash_ignores_width() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(hex("0000000000000007"));
    assert!(set.contains(&hex("00000007")));
    assert!(set.contains(&BigUint::from(7u32)));
}

#[test]
fn test_bitwise() {
    let a = hex(A);
    let b = hex(B);
    assert_eq!((&a ^ &b).to_hex(), "4668153124D4AD4DD994F76DA94563E9A0643F5980B20057C6F45C18E411515B");
    assert_eq!((&a | &b).to_hex(), "76F83D792FF4ADCDFFBEFF6FAF4763EBE6E67FFFE6FE45FFC6F45D7CE6F5FBDB");
    assert_eq!((&a & &b).to_hex(), "309028480B200080262A080206020002468240A6664C45A80000016402E4AA80");
    assert_eq!((!&a).to_hex(), "C90FD7A7F44FD337D8D565FDF0BDFF1CB91D895199B1BA117F8BAA8B1D0A547F");

    // width is max(len_a, len_b) and is not trimmed
    let short = hex("FFFFFFFF");
    let long = hex("00000000FFFFFFFF");
    assert_eq!((&short & &long).to_hex(), "00000000FFFFFFFF");
    assert_eq!((&short ^ &long).to_hex(), "0000000000000000");
    assert_eq!((&short | &BigUint::new()).to_hex(), "FFFFFFFF");

    // not keeps the width and only flips stored bits
    assert_eq!((!hex("00000000FFFFFFFF")).to_hex(), "FFFFFFFF00000000");
    assert_eq!((!BigUint::new()).to_hex(), "");

    let mut c = a.clone();
    c ^= &b;
    c ^= b;
    assert_eq!(c, a);
}

#[test]
fn test_add() {
    let a = hex("0000000000000002");
    let b = hex("0000000000000003");
    assert_eq!((&a + &b).to_hex(), "0000000000000005");

    assert_eq!((hex(A) + hex(B)).to_hex(), "A78865C13B14AE4E25E90771B54963EE2D68C0A64D4A8BA7C6F45EE0E9DAA65B");

    // carry into a new limb
    assert_eq!((hex("FFFFFFFF") + hex("00000001")).to_hex(), "0000000100000000");
    assert_eq!((hex("FFFFFFFFFFFFFFFF") + hex("00000001")).limbs, vec![0, 0, 1]);

    let mut c = BigUint::new();
    c += hex("00000001");
    c += &hex("00000001");
    assert_eq!(c, BigUint::from(2u32));
}

#[test]
fn test_sub() {
    let a = hex(A);
    let b = hex(B);
    assert_eq!((&b - &a).to_hex(), "39A8151123B454BDD793D36D96C562279FA3D34980ADFFCAC60BB3F723EF4F5B");
    assert_eq!(a.checked_sub(&b), Err(BigUintError::Underflow));

    // borrow across every limb, then the high zero limbs are dropped
    let c = hex("000000010000000000000000") - hex("00000001");
    assert_eq!(c.limbs, vec![u32::MAX, u32::MAX]);

    // operands near the limb boundary
    let c = hex("FFFFFFFF80000000") - hex("7FFFFFFFFFFFFFFF");
    assert_eq!(c.to_hex(), "7FFFFFFF80000001");

    assert!((&a - &a).limbs.is_empty());
    assert_eq!(hex("00000005") - BigUint::new(), BigUint::from(5u32));
}

#[test]
#[should_panic(expected = "Subtraction underflow")]
fn test_sub_underflow_panics() {
    let _ = hex("00000001") - hex("00000002");
}

#[test]
fn test_mul() {
    let a = hex("0000000000000002");
    let b = hex("0000000000000003");
    assert_eq!(&a * &b, hex("0000000000000006"));

    assert_eq!(
        (hex(A) * hex(B)).to_hex(),
        "1829BD6C45AD341BA0365687296B9B049CE48EBA082A20A0518EEAE6E508B787C452C31987D828B6CA609430160430FFCD38142CDA061E9B7B10FF73CFA4B680"
    );

    assert_eq!(hex("FFFFFFFF") * hex("FFFFFFFF"), hex("FFFFFFFE00000001"));
    assert!((hex(A) * BigUint::new()).is_zero());
    assert_eq!(hex(A) * BigUint::from(1u32), hex(A));

    let mut c = BigUint::from(10u32);
    c *= BigUint::from(10u32);
    assert_eq!(c, BigUint::from(100u32));
}

#[test]
fn test_shl() {
    let a = hex(A);
    assert_eq!((&a << 16).to_hex(), "000036F028580BB02CC8272A9A020F4200E346E276AE664E45EE80745574E2F5AB800000");
    assert_eq!((&a << 0).to_hex(), A);
    assert_eq!((&a << 64).to_hex(), format!("{}{}", A, "0000000000000000"));

    assert_eq!(hex("80000001") << 1, hex("0000000100000002"));
    assert_eq!((hex("00000001") << 35).to_hex(), "0000000800000000");

    let mut b = BigUint::from(1u32);
    b <<= 100;
    assert_eq!(b.bit_length(), 101);
    assert!(b.test_bit(100));
}

#[test]
fn test_shr() {
    let a = hex(A);
    assert_eq!((&a >> 16).to_hex(), "000036F028580BB02CC8272A9A020F4200E346E276AE664E45EE80745574E2F5");
    assert_eq!(&a >> 0, a);
    assert!((&a >> 256).is_zero());
    assert!((&a >> 1000).limbs.is_empty());

    // bits move from the higher limb into the lower one
    assert_eq!(hex("0000000100000000") >> 1, hex("80000000"));
    assert_eq!(hex("0000000300000000") >> 33, hex("00000001"));

    let mut b = hex(A);
    b >>= 32;
    assert_eq!(b.to_hex(), &A[..56]);
}

#[test]
fn test_div_rem() {
    let a = hex("0000000000000002");
    let b = hex("0000000000000003");
    let (q, r) = b.div_rem(&a).unwrap();
    assert_eq!(q, BigUint::from(1u32));
    assert_eq!(r, BigUint::from(1u32));

    let a = hex(A);
    let b = hex(B);
    let (q, r) = b.div_rem(&a).unwrap();
    assert_eq!(q, BigUint::from(2u32));
    assert_eq!(r.to_hex(), "02B7ECB9180427F5B069396B8783614458C15C9B1A5FB9DC45975E8240F9A3DB");
    assert_eq!(&q * &a + &r, b);

    // dividend smaller than divisor
    let (q, r) = a.div_rem(&b).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, a);

    let n = hex("00000001000000000000000000000000");
    let (q, r) = n.div_rem(&hex("00000003")).unwrap();
    assert_eq!(q.to_hex(), "555555555555555555555555");
    assert_eq!(r, BigUint::from(1u32));

    assert_eq!(&b / &a, BigUint::from(2u32));
    assert_eq!((&b % &a).to_hex(), "02B7ECB9180427F5B069396B8783614458C15C9B1A5FB9DC45975E8240F9A3DB");

    let mut c = b.clone();
    c /= &a;
    assert_eq!(c, BigUint::from(2u32));
    c %= BigUint::from(2u32);
    assert!(c.is_zero());
}

#[test]
fn test_div_by_zero() {
    let a = hex(A);
    assert_eq!(a.div_rem(&BigUint::new()), Err(BigUintError::DivideByZero));
    assert_eq!(a.checked_div(&hex("00000000")), Err(BigUintError::DivideByZero));
    assert_eq!(a.checked_rem(&BigUint::from_limbs(vec![0, 0])), Err(BigUintError::DivideByZero));
}

#[test]
#[should_panic(expected = "Divide by zero")]
fn test_div_by_zero_panics() {
    let _ = hex(A) / BigUint::new();
}

#[test]
fn test_bit_length() {
    assert_eq!(BigUint::new().bit_length(), 0);
    assert_eq!(BigUint::from_limbs(vec![0, 0]).bit_length(), 0);
    assert_eq!(BigUint::from(1u32).bit_length(), 1);
    assert_eq!(hex("0000000100000000").bit_length(), 33);
    assert_eq!(hex(B).bit_length(), 255);
    assert!(hex(B).test_bit(254));
    assert!(!hex(B).test_bit(255));
    assert!(!hex(B).test_bit(10_000));
}

#[test]
fn test_normalize() {
    let mut a = hex("000000000000000000000007");
    assert_eq!(a.limbs.len(), 3);
    a.normalize();
    assert_eq!(a.limbs, vec![7]);
    assert!(BigUint::from_limbs(vec![0]).normalized().limbs.is_empty());
}

use lazy_static::*;

use crate::BigUint;
use crate::big_uint_constants::*;

lazy_static! {
    pub static ref SMALL_CACHE: [BigUint; MAX_CONSTANT + 1] = [
        BigUint::from_limbs(vec![ ]),
        BigUint::from_limbs(vec![1]),
        BigUint::from_limbs(vec![2]),
        BigUint::from_limbs(vec![3]),
        BigUint::from_limbs(vec![4]),
        BigUint::from_limbs(vec![5]),
        BigUint::from_limbs(vec![6]),
        BigUint::from_limbs(vec![7]),
        BigUint::from_limbs(vec![8]),
        BigUint::from_limbs(vec![9]),
        BigUint::from_limbs(vec![10]),
        BigUint::from_limbs(vec![11]),
        BigUint::from_limbs(vec![12]),
        BigUint::from_limbs(vec![13]),
        BigUint::from_limbs(vec![14]),
        BigUint::from_limbs(vec![15]),
        BigUint::from_limbs(vec![16]),
    ];
}

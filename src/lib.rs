//! Big Uint \
//! This crate provides:
//! - [`BigUint`]: Immutable arbitrary-precision unsigned integers read from and written to big-endian hex.
//! - [`BigUintError`]: The recoverable failures of parsing, subtraction and division.

mod big_uint;
mod big_uint_cache;
mod big_uint_constants;
mod errors;

pub use big_uint::BigUint;
pub use errors::BigUintError;

#[cfg(test)]
mod tests {
    use crate::BigUint;

    #[test]
    fn it_works() {
        let a: BigUint = "36f028580bb02cc8272a9a020f4200e346e276ae664e45ee80745574e2f5ab80".parse().unwrap();
        let b: BigUint = "70983d692f648185febe6d6fa607630ae68649f7e6fc45b94680096c06e4fadb".parse().unwrap();
        println!("a = {}", a);
        println!("a ^ b = {}", &a ^ &b);
        println!("a + b = {}", &a + &b);
        println!("!a = {}", !&a);
        println!("a | b = {}", &a | &b);
        println!("a & b = {}", &a & &b);
        println!("a >> 16 = {}", &a >> 16);
        println!("a << 16 = {}", &a << 16);
        println!("b - a = {}", &b - &a);
        println!("a * b = {}", &a * &b);
        println!("b / a = {}", &b / &a);
        println!("b % a = {}", &b % &a);
    }
}

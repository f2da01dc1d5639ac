pub const LIMB_BITS: u32 = u32::BITS;

pub const HEX_DIGITS_PER_LIMB: usize = (LIMB_BITS / 4) as usize;

pub const MAX_CONSTANT: usize = 16;

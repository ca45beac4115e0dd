pub const MAX_ULPS_DIFF: u8 = 4;

pub const BITS_PER_BYTE: u32 = 8;

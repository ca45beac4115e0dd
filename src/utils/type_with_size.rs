/// Marker for a byte width known at compile time.
pub struct ByteWidth<const N: usize>;

/// Integer types with exactly `N` bytes. Only widths 1, 2, 4 and 8 are
/// implemented, any other width is rejected by the compiler.
pub trait TypeWithSize {
    type Int;
    type UInt;
}

/// Floating point type with exactly `N` bytes.
pub trait FloatWithSize: TypeWithSize {
    type Float;
}

impl TypeWithSize for ByteWidth<1> {
    type Int = i8;
    type UInt = u8;
}

impl TypeWithSize for ByteWidth<2> {
    type Int = i16;
    type UInt = u16;
}

impl TypeWithSize for ByteWidth<4> {
    type Int = i32;
    type UInt = u32;
}

impl FloatWithSize for ByteWidth<4> {
    type Float = f32;
}

impl TypeWithSize for ByteWidth<8> {
    type Int = i64;
    type UInt = u64;
}

impl FloatWithSize for ByteWidth<8> {
    type Float = f64;
}

pub type IntOf<const N: usize> = <ByteWidth<N> as TypeWithSize>::Int;

pub type UIntOf<const N: usize> = <ByteWidth<N> as TypeWithSize>::UInt;

pub type FloatOf<const N: usize> = <ByteWidth<N> as FloatWithSize>::Float;

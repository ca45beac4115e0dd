use wasm_bindgen::prelude::*;
use web_sys::js_sys::Uint8Array;

pub mod constants;
pub mod ieee754;
pub mod utils;

use crate::ieee754::{F32Cmp, F64Cmp, Ieee754};
use crate::utils::almost_equal::AlmostEqual;
use crate::utils::buffer_cmp::compare_buffers;

fn to_uint8_array(mask: &[u8]) -> Uint8Array {
    let out = Uint8Array::new_with_length(mask.len() as u32);

    out.copy_from(mask);

    out
}

fn compare_buffers_js<T: Ieee754>(lhs: &[T], rhs: &[T]) -> Uint8Array {
    if lhs.len() != rhs.len() {
        crate::wasm_log!(
            "compare_buffers: length mismatch ({} vs {}), returning empty mask",
            lhs.len(),
            rhs.len()
        );
    }

    to_uint8_array(&compare_buffers(lhs, rhs))
}

#[wasm_bindgen]
pub fn almost_equal_f32(a: f32, b: f32) -> bool {
    a.almost_equal(b)
}

#[wasm_bindgen]
pub fn almost_equal_f64(a: f64, b: f64) -> bool {
    a.almost_equal(b)
}

#[wasm_bindgen]
pub fn is_nan_f32(value: f32) -> bool {
    F32Cmp::new(value).is_nan()
}

#[wasm_bindgen]
pub fn is_nan_f64(value: f64) -> bool {
    F64Cmp::new(value).is_nan()
}

#[wasm_bindgen]
pub fn sign_bit_f32(value: f32) -> u32 {
    F32Cmp::new(value).sign_bit()
}

#[wasm_bindgen]
pub fn sign_bit_f64(value: f64) -> u64 {
    F64Cmp::new(value).sign_bit()
}

#[wasm_bindgen]
pub fn exponent_bits_f32(value: f32) -> u32 {
    F32Cmp::new(value).exponent_bits()
}

#[wasm_bindgen]
pub fn exponent_bits_f64(value: f64) -> u64 {
    F64Cmp::new(value).exponent_bits()
}

#[wasm_bindgen]
pub fn significand_bits_f32(value: f32) -> u32 {
    F32Cmp::new(value).significand_bits()
}

#[wasm_bindgen]
pub fn significand_bits_f64(value: f64) -> u64 {
    F64Cmp::new(value).significand_bits()
}

#[wasm_bindgen]
pub fn ulp_distance_f32(a: f32, b: f32) -> u32 {
    F32Cmp::ulp_distance(a.to_bit_pattern(), b.to_bit_pattern())
}

#[wasm_bindgen]
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    F64Cmp::ulp_distance(a.to_bit_pattern(), b.to_bit_pattern())
}

#[wasm_bindgen]
pub fn compare_buffers_f32(lhs: &[f32], rhs: &[f32]) -> Uint8Array {
    compare_buffers_js(lhs, rhs)
}

#[wasm_bindgen]
pub fn compare_buffers_f64(lhs: &[f64], rhs: &[f64]) -> Uint8Array {
    compare_buffers_js(lhs, rhs)
}

pub mod almost_equal;
pub mod buffer_cmp;
pub mod type_with_size;
pub mod wasm_logger;

use wasm_bindgen::prelude::*;

const LOG_PREFIX: &str = "[wasm-float-cmp]";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

pub fn wasm_log<S: std::fmt::Display>(msg: S) {
    log(&format!("{} {}", LOG_PREFIX, msg));
}

pub fn wasm_logf(args: std::fmt::Arguments) {
    wasm_log(args);
}

#[macro_export]
macro_rules! wasm_log {
    ($($t:tt)*) => ($crate::utils::wasm_logger::wasm_logf(format_args!($($t)*)))
}

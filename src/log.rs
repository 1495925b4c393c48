//! Feature-gated logging.
//!
//! With the `esp32-log` feature enabled, messages go to `esp-println`.
//! Otherwise the arguments are only type-checked.

macro_rules! log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use log;

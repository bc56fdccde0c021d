// Console diagnostics, compiled out unless `debug-events` is enabled.
// Native builds (unit tests) must not touch browser imports, so they go to stderr.

macro_rules! drag_log {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "debug-events", target_arch = "wasm32"))]
        zoon::eprintln!($($arg)*);
        #[cfg(all(feature = "debug-events", not(target_arch = "wasm32")))]
        std::eprintln!($($arg)*);
        #[cfg(not(feature = "debug-events"))]
        let _ = format_args!($($arg)*);
    }};
}

// Diagnostics go through the `log` facade when the `log` feature is enabled.
// Without it the arguments are still type-checked but nothing is emitted.

#[cfg(feature = "log")]
macro_rules! wire_log {
    (trace, $($arg:expr),*) => { log::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { log::debug!($($arg),*) };
}

#[cfg(not(feature = "log"))]
macro_rules! wire_log {
    ($level:ident, $($arg:expr),*) => {{ $( let _ = &$arg; )* }}
}

macro_rules! wire_trace {
    ($($arg:expr),*) => { wire_log!(trace, $($arg),*) };
}

macro_rules! wire_debug {
    ($($arg:expr),*) => { wire_log!(debug, $($arg),*) };
}

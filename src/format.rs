//! Styled log lines, written as `level[from]: message` (or `level: message`).
//!
//! Every macro returns the `std::io::Result` of the write, so callers can propagate it with `?`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($color:ident, $level:literal, to: $writer:expr, from: $from:expr, $($args:tt)+) => {{
        use ::std::io::Write;
        use ::console::style;
        writeln!(
            $writer,
            "{}{}{} {}",
            style(concat!($level, "[")).bold().$color(),
            style($from).bold(),
            style("]:").bold().$color(),
            style(format_args!($($args)+)).bold(),
        )
    }};

    ($color:ident, $level:literal, to: $writer:expr, $($args:tt)+) => {{
        use ::std::io::Write;
        use ::console::style;
        writeln!(
            $writer,
            "{} {}",
            style(concat!($level, ":")).bold().$color(),
            style(format_args!($($args)+)).bold(),
        )
    }};
}

#[macro_export]
macro_rules! info {
    (to: $writer:expr, $($rest:tt)+) => {
        $crate::__log!(blue, "info", to: $writer, $($rest)+)
    };

    ($($rest:tt)+) => {
        $crate::__log!(blue, "info", to: std::io::stdout(), $($rest)+)
    };
}

#[macro_export]
macro_rules! success {
    (to: $writer:expr, $($rest:tt)+) => {
        $crate::__log!(green, "success", to: $writer, $($rest)+)
    };

    ($($rest:tt)+) => {
        $crate::__log!(green, "success", to: std::io::stdout(), $($rest)+)
    };
}

#[macro_export]
macro_rules! warning {
    (to: $writer:expr, $($rest:tt)+) => {
        $crate::__log!(yellow, "warning", to: $writer, $($rest)+)
    };

    ($($rest:tt)+) => {
        $crate::__log!(yellow, "warning", to: std::io::stderr(), $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    (to: $writer:expr, $($rest:tt)+) => {
        $crate::__log!(red, "error", to: $writer, $($rest)+)
    };

    ($($rest:tt)+) => {
        $crate::__log!(red, "error", to: std::io::stderr(), $($rest)+)
    };
}

#[macro_export]
macro_rules! debug {
    (to: $writer:expr, $($rest:tt)+) => {
        $crate::__log!(magenta, "debug", to: $writer, $($rest)+)
    };

    ($($rest:tt)+) => {
        $crate::__log!(magenta, "debug", to: std::io::stderr(), $($rest)+)
    };
}

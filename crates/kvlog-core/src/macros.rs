//! Convenience macros

use std::fmt;

/// Concatenation of several printable values without separators
///
/// Built by [`sprint!`](crate::sprint); pass it to any emission method.
pub struct Sprint<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Sprint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // a failing part is skipped, the rest still renders
        for part in self.0 {
            let _ = part.fmt(f);
        }
        Ok(())
    }
}

/// Build a [`Fields`](crate::Fields) mapping
///
/// ```
/// let fields = kvlog_core::fields! { "name" => "john doe", "age" => 18 };
/// assert_eq!(fields.render(), "age=18 name=john doe ");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}

/// Concatenate printable values into one message
///
/// ```
/// let message = kvlog_core::sprint!("retry ", 3, "/", 5).to_string();
/// assert_eq!(message, "retry 3/5");
/// ```
#[macro_export]
macro_rules! sprint {
    ($($arg:expr),* $(,)?) => {
        $crate::Sprint(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(::std::format_args!($($arg)*))
    };
}

/// Formatted fatal line, then process exit
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatalf(::std::format_args!($($arg)*))
    };
}

/// Formatted panic line, then unwind
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)*) => {
        $logger.panicf(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Fields, Logger, MemorySink, Severity};
    use std::sync::Arc;

    #[test]
    fn test_fields_macro() {
        let empty: Fields = fields!();
        assert!(empty.is_empty());

        let fields = fields! { "b" => true, "a" => 1, };
        assert_eq!(fields.render(), "a=1 b=true ");
    }

    #[test]
    fn test_sprint_concatenates_without_spaces() {
        assert_eq!(sprint!("a", 1, 'b', 2.5).to_string(), "a1b2.5");
        assert_eq!(sprint!().to_string(), "");
    }

    #[test]
    fn test_sprint_skips_failing_part() {
        struct Faulty;

        impl std::fmt::Display for Faulty {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        assert_eq!(sprint!("a", Faulty, "b").to_string(), "ab");
    }

    #[test]
    fn test_log_macros_report_call_site() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(sink.clone(), Severity::Debug, fields! { "name" => "john doe" });

        let line = line!() + 1;
        log_debug!(logger, "Hi, {}", "John");
        log_info!(logger, "{} + {} = {}", 1, 2, 1 + 2);
        log_warn!(logger, "plain");
        log_error!(logger, "code={code}", code = 500);
        logger.info(sprint!("hello", " ", "world"));

        let lines = sink.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with(&format!("macros.rs:{line}: DBG name=john doe Hi, John")));
        assert!(lines[1].ends_with("INF name=john doe 1 + 2 = 3"));
        assert!(lines[2].ends_with("WRN name=john doe plain"));
        assert!(lines[3].ends_with("ERR name=john doe code=500"));
        assert!(lines[4].ends_with("INF name=john doe hello world"));
    }
}

#[macro_export]
macro_rules! kind_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::debugger::should_log($level) {
            eprintln!(
                "{} [{}] {}",
                $crate::debugger::debugger::level_label($level),
                $component,
                format!($($arg)*)
            );
        }
    };
}

#[macro_export]
macro_rules! kind_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::kind_log!($crate::debugger::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! kind_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::kind_log!($crate::debugger::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! kind_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::kind_log!($crate::debugger::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! kind_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::kind_log!($crate::debugger::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! kind_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::kind_log!($crate::debugger::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}

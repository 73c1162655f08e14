//! Console messages for the headless commands (`list`, `add`, `delete`, `set-api`, `reset`).

const INFO_PREFIX: &str = "\x1b[1;33m[INFO]\x1b[0m";
const SUCCESS_PREFIX: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";
const ERROR_PREFIX: &str = "\x1b[1;31m[ERROR]\x1b[0m";

fn print_with_details(prefix: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{} {}", prefix, title);
    } else {
        println!("{} {}\t {}", prefix, title, details);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_with_details(INFO_PREFIX, title, details);
}

pub fn print_success(title: &str, details: &str) {
    print_with_details(SUCCESS_PREFIX, title, details);
}

/// Errors go to stderr so `list` output stays pipeable.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", ERROR_PREFIX, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", ERROR_PREFIX, details);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

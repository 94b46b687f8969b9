//! Calendar-year helpers.

use chrono::{Datelike, Local};

/// The current calendar year, used as the default requested year.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!(year >= 2024, "clock is set before this code was written");
    }
}

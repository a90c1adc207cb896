//! Terminal output helpers: status lines and the generation summary.

mod messages;

use std::path::Path;
use std::time::Duration;

use owo_colors::OwoColorize;

pub use messages::{info, success, warning};

/// Format a duration as `ms` below one second, seconds otherwise.
///
/// ```
/// use apidoc_cli::ui::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Print the closing summary of a build.
pub fn print_generation_summary(documents: usize, out_dir: &Path, elapsed: Duration) {
    let noun = if documents == 1 { "document" } else { "documents" };
    success(&format!(
        "Generated {} {} in {} → {}",
        documents.bold(),
        noun,
        format_duration(elapsed),
        out_dir.display().cyan()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sub_second_durations() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn formats_seconds() {
        assert_eq!(format_duration(Duration::from_secs(3)), "3.00s");
    }
}

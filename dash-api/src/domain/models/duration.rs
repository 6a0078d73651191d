/// Formats a millisecond duration as `HH:MM:SS`.
///
/// `None` and negative values format as zero. Milliseconds are truncated and
/// hours are not wrapped at 24.
pub fn format_duration(milliseconds: Option<i64>) -> String {
    let total_seconds = milliseconds.unwrap_or(0).max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

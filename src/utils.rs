use chrono::Local;

/// Timestamp layout shared by every log record.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats the current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

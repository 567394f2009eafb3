use flexi_logger::{DeferredNow, style};
use log::Record;

/// `level: message`, colored by level.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{}",
        style(level).paint(format!(
            "{}: {}",
            level.as_str().to_lowercase(),
            record.args()
        ))
    )
}

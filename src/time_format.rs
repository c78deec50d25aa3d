use chrono::{Local, NaiveDateTime};

/// Offset appended to every rendered timestamp, whatever the host zone is.
pub const WIRE_OFFSET: &str = "+03:00";

const WIRE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Current wall-clock time of the host, without zone information.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Renders `t` as `YYYY-MM-DDThh:mm:ss+03:00`.
///
/// The offset is attached to the naive value as-is; no zone conversion
/// takes place. Sub-second precision is dropped.
pub fn format(t: NaiveDateTime) -> String {
    format!("{}{}", t.format(WIRE_PATTERN), WIRE_OFFSET)
}

pub fn format_opt(t: Option<NaiveDateTime>) -> Option<String> {
    t.map(format)
}

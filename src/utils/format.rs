/// Formats a USD amount with thousands grouping: "$1,234,567.89".
///
/// Matches locale-default display rules: at most 3 fraction digits,
/// trailing zeros trimmed, so $69,702.3 stays $69,702.3 and whole-dollar
/// market caps carry no decimal point at all.
pub fn format_usd(value: f64) -> String {
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };

    // Integer math after a single rounding step avoids float residue like 0.299999.
    let millis = (value.abs() * 1000.0).round() as u128;
    let whole = millis / 1000;
    let frac = millis % 1000;

    let grouped = group_thousands(whole);
    if frac == 0 {
        format!("${sign}{grouped}")
    } else {
        let digits = format!("{frac:03}");
        format!("${sign}{grouped}.{}", digits.trim_end_matches('0'))
    }
}

fn group_thousands(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{g:03}"));
    }
    out
}

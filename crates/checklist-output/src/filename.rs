//! Export file naming.

use chrono::NaiveDate;

/// `<title>_<YYYY-MM-DD>.<extension>`, with every whitespace run in the title
/// collapsed to `_`.
///
/// Path separators would turn the title into a directory, so they are
/// replaced as well.
pub fn export_file_name(title: &str, date: NaiveDate, extension: &str) -> String {
    let mut name = String::with_capacity(title.len() + 16);
    let mut in_whitespace = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        name.push(if matches!(ch, '/' | '\\') { '-' } else { ch });
    }
    format!("{name}_{}.{extension}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(
            export_file_name("Pre  flight\tchecks", date(), "csv"),
            "Pre_flight_checks_2026-03-01.csv"
        );
    }

    #[test]
    fn edge_whitespace_is_kept_as_underscore() {
        assert_eq!(
            export_file_name(" Daily ", date(), "json"),
            "_Daily__2026-03-01.json"
        );
    }

    #[test]
    fn separators_do_not_create_directories() {
        assert_eq!(
            export_file_name("A/B", date(), "csv"),
            "A-B_2026-03-01.csv"
        );
    }
}

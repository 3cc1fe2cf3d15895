//! Locale-aware cell formatting and a plain-text table renderer for the CLI.

use crate::models::{Column, CountryRecord};
use num_format::{Locale, ToFormattedString};

/// Locale tags offered by the viewer, with their display names.
pub const LOCALES: [(&str, &str); 7] = [
    ("en", "English (en)"),
    ("de", "German (de)"),
    ("fr", "French (fr)"),
    ("es", "Spanish (es)"),
    ("it", "Italian (it)"),
    ("pt", "Portuguese (pt)"),
    ("nl", "Dutch (nl)"),
];

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Integer with thousands separators, e.g. `83240525` -> `83,240,525` (en).
pub fn format_count(n: u64, locale_tag: &str) -> String {
    let (loc, _) = map_locale(locale_tag);
    n.to_formatted_string(loc)
}

/// Area with thousands separators and up to two decimals; trailing zeros are trimmed.
pub fn format_area(area: f64, locale_tag: &str) -> String {
    if !area.is_finite() || area <= 0.0 {
        return "0".to_string();
    }
    let (loc, dec) = map_locale(locale_tag);
    let hundredths = (area * 100.0).round() as u64;
    let whole = (hundredths / 100).to_formatted_string(loc);
    let frac = hundredths % 100;
    match frac {
        0 => whole,
        f if f % 10 == 0 => format!("{whole}{dec}{}", f / 10),
        f => format!("{whole}{dec}{f:02}"),
    }
}

/// Display text of one cell.
pub fn cell(record: &CountryRecord, column: Column, locale_tag: &str) -> String {
    match column {
        Column::Name => record.name.clone(),
        Column::Region => record.region.clone(),
        Column::Population => format_count(record.population, locale_tag),
        Column::AreaKm2 => format_area(record.area_km2, locale_tag),
        Column::Borders => format_count(record.borders as u64, locale_tag),
        Column::Languages => format_count(record.languages as u64, locale_tag),
        Column::Timezones => format_count(record.timezones as u64, locale_tag),
    }
}

/// Render rows as an aligned text table: text columns left-aligned, numbers right-aligned.
pub fn render_table(rows: &[CountryRecord], locale_tag: &str) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| Column::ALL.iter().map(|c| cell(r, *c, locale_tag)).collect())
        .collect();

    let widths: Vec<usize> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(c.label().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = Column::ALL.iter().map(|c| c.label().to_string()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(Column::ALL)
        .zip(widths)
        .map(|((s, col), &w)| {
            // `{:<w$}` pads by chars, which is what we measured with.
            if col.is_text() {
                format!("{s:<w$}")
            } else {
                format!("{s:>w$}")
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_locale() {
        assert_eq!(format_count(83_240_525, "en"), "83,240,525");
        assert_eq!(format_count(83_240_525, "de"), "83.240.525");
        assert_eq!(format_count(7, "fr"), "7");
    }

    #[test]
    fn every_offered_locale_is_recognized() {
        for (tag, _) in LOCALES {
            let (loc, dec) = map_locale(tag);
            if tag == "en" {
                assert_eq!(dec, '.');
            } else {
                assert_ne!(*loc, Locale::en, "{tag} fell back to English");
                assert_eq!(dec, ',');
            }
        }
        assert_eq!(
            format_area(1234.5, "pt"),
            format!("{},5", 1234u64.to_formatted_string(&Locale::pt))
        );
        assert_eq!(
            format_area(1234.5, "nl"),
            format!("{},5", 1234u64.to_formatted_string(&Locale::nl))
        );
    }

    #[test]
    fn area_trims_decimals() {
        assert_eq!(format_area(357_114.0, "en"), "357,114");
        assert_eq!(format_area(0.44, "en"), "0.44");
        assert_eq!(format_area(2.5, "de"), "2,5");
        assert_eq!(format_area(0.0, "en"), "0");
    }

    #[test]
    fn table_has_header_rule_and_rows() {
        let rows = vec![CountryRecord {
            name: "Testland".into(),
            region: "Testregion".into(),
            population: 100,
            area_km2: 12.5,
            borders: 2,
            languages: 1,
            timezones: 3,
        }];
        let t = render_table(&rows, "en");
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("--------"));
        assert!(lines[2].starts_with("Testland"));
        assert!(lines[2].contains("12.5"));
    }
}

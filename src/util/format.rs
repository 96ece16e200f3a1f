// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Conversion of raw show data into display strings.

use std::sync::LazyLock;

use regex::Regex;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid markup pattern"));

static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-zA-Z]+);").expect("valid entity pattern")
});

/// Removes markup tags from a long-form description and decodes its
/// character references.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_markup("<p><b>Law &amp; Order</b> is a drama.</p>"), "Law & Order is a drama.");
/// ```
pub(crate) fn strip_markup(text: &str) -> String {
    let text = MARKUP_TAG.replace_all(text, "");
    decode_entities(&text).trim().to_string()
}

/// Decodes named and numeric character references in a single pass, so an
/// escaped ampersand is never decoded twice. Unknown references are kept.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    CHARACTER_REFERENCE
        .replace_all(text, |caps: &regex::Captures| {
            let reference = &caps[1];
            let decoded = match reference {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_reference(reference),
            };

            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_reference(reference: &str) -> Option<char> {
    let code = match reference.strip_prefix('#')? {
        hex if hex.starts_with(['x', 'X']) => u32::from_str_radix(&hex[1..], 16).ok()?,
        decimal => decimal.parse().ok()?,
    };
    char::from_u32(code)
}

/// Formats an average rating, or `N/A` for unrated shows.
pub(crate) fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r > 0.0 => format!("{}", r),
        _ => "N/A".to_string(),
    }
}

/// Takes the year from a `YYYY-MM-DD` premiere date.
pub(crate) fn premiere_year(premiered: Option<&str>) -> String {
    premiered
        .map(|date| date.chars().take(4).collect())
        .unwrap_or_default()
}

/// Formats a count with thousands separators, e.g. `12,345`.
pub(crate) fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_and_attributed_tags() {
        let summary = r#"<p><b>Under the Dome</b> is the story of a small town that is suddenly and inexplicably sealed off from the rest of the world by an enormous transparent dome. <i>Based on the novel</i>.</p>"#;
        assert_eq!(
            strip_markup(summary),
            "Under the Dome is the story of a small town that is suddenly and inexplicably sealed off from the rest of the world by an enormous transparent dome. Based on the novel."
        );
        assert_eq!(strip_markup(r#"<a href="x">link</a>"#), "link");
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(
            strip_markup("<p>Law &amp; Order&#39;s &quot;best&quot; season</p>"),
            "Law & Order's \"best\" season"
        );
    }

    #[test]
    fn character_references_are_decoded_once() {
        assert_eq!(strip_markup("Fish&nbsp;&amp;&nbsp;Chips"), "Fish & Chips");
        assert_eq!(strip_markup("&#x41;&#66;&lt;C&gt;"), "AB<C>");
        assert_eq!(strip_markup("&amp;lt;"), "&lt;");
        assert_eq!(strip_markup("AT&T &unknown; &#xFFFFFF;"), "AT&T &unknown; &#xFFFFFF;");
    }

    #[test]
    fn missing_or_zero_rating_is_not_available() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(0.0)), "N/A");
        assert_eq!(format_rating(Some(6.5)), "6.5");
        assert_eq!(format_rating(Some(8.0)), "8");
    }

    #[test]
    fn premiere_year_takes_leading_four_characters() {
        assert_eq!(premiere_year(Some("2013-06-24")), "2013");
        assert_eq!(premiere_year(Some("")), "");
        assert_eq!(premiere_year(None), "");
    }

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(240), "240");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}

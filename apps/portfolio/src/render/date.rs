use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::errors::AppError;

/// How the declaration date is printed. Models the host locale's short date format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStyle {
    format: String,
}

impl DateStyle {
    /// Short date format for a BCP 47 style locale tag (`en-US`, `en_IN`, `de-DE.UTF-8`).
    /// Unknown locales fall back to ISO 8601.
    pub fn for_locale(tag: &str) -> Self {
        let normalized = tag
            .split('.')
            .next()
            .unwrap_or_default()
            .replace('_', "-")
            .to_ascii_lowercase();

        let format = match normalized.as_str() {
            "en-us" | "en" | "c" | "posix" => "%-m/%-d/%Y",
            "en-gb" | "en-in" | "en-au" | "en-nz" | "hi-in" | "bn-in" | "fr-fr" | "es-es"
            | "it-it" | "pt-br" => "%d/%m/%Y",
            "de-de" | "de-at" | "de-ch" | "ru-ru" | "pl-pl" | "fi-fi" | "nb-no" => "%d.%m.%Y",
            "ja-jp" | "zh-cn" | "ko-kr" => "%Y/%m/%d",
            "nl-nl" => "%d-%m-%Y",
            _ => "%Y-%m-%d",
        };
        DateStyle {
            format: format.to_string(),
        }
    }

    /// An explicit chrono format string. Rejected up front if chrono cannot apply it to a
    /// plain date (unknown specifiers, or time fields such as `%H` and `%z`), since
    /// `format` would otherwise panic at render time.
    pub fn custom(format: impl Into<String>) -> Result<Self, AppError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!("invalid date format '{format}'")));
        }

        let mut trial = String::new();
        write!(trial, "{}", NaiveDate::default().format(&format)).map_err(|_| {
            AppError::Config(format!("date format '{format}' needs more than a date"))
        })?;
        Ok(DateStyle { format })
    }

    pub fn format_str(&self) -> &str {
        &self.format
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.format).to_string()
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        DateStyle::for_locale("en-US")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_en_us_has_no_padding() {
        assert_eq!(DateStyle::for_locale("en-US").format(date()), "3/7/2026");
    }

    #[test]
    fn test_en_in_is_day_first() {
        assert_eq!(DateStyle::for_locale("en_IN.UTF-8").format(date()), "07/03/2026");
    }

    #[test]
    fn test_de_uses_dots() {
        assert_eq!(DateStyle::for_locale("de-DE").format(date()), "07.03.2026");
    }

    #[test]
    fn test_unknown_locale_is_iso() {
        assert_eq!(DateStyle::for_locale("xx-YY").format(date()), "2026-03-07");
    }

    #[test]
    fn test_custom_format() {
        let style = DateStyle::custom("%d %B %Y").unwrap();
        assert_eq!(style.format(date()), "07 March 2026");
    }

    #[test]
    fn test_custom_format_rejects_time_fields() {
        for format in ["%H:%M", "%d %S", "%p", "%Y %z"] {
            assert!(
                matches!(DateStyle::custom(format), Err(AppError::Config(_))),
                "{format} accepted"
            );
        }
    }

    #[test]
    fn test_custom_format_rejects_bad_specifier() {
        assert!(matches!(DateStyle::custom("%Q"), Err(AppError::Config(_))));
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::error::{Error, Result};

lazy_static! {
    // Both the ASCII and the full-width comma separate tags
    static ref TAG_SEPARATOR: Regex = Regex::new(",|，").unwrap();
}

pub fn slugify(text: &str) -> String {
    let ascii = unidecode(text);

    let mut slug = String::with_capacity(ascii.len());
    let mut prev_sep = true;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_sep = false;
        } else if !prev_sep {
            slug.push('-');
            prev_sep = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Splits a flag-supplied tag list, keeping entries as typed.
pub fn split_tags(raw: &str) -> Vec<String> {
    TAG_SEPARATOR.split(raw).map(str::to_string).collect()
}

/// Splits a prompt entry, dropping empty values so that an empty
/// answer resolves to no tags at all.
pub fn split_tag_entry(entry: &str) -> Vec<String> {
    TAG_SEPARATOR
        .split(entry)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.naive_utc());
    }

    let patterns = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for pattern in patterns {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(date_time);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(Error::DateParse { value: value.to_string() })
}

/// Translates a calendar pattern such as "yyyy/MM" into the strftime
/// specifiers chrono formats with.
pub fn to_strftime(pattern: &str) -> Result<String> {
    let mut strftime = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            if c == '%' {
                strftime.push_str("%%");
            } else {
                strftime.push(c);
            }
            continue;
        }

        let mut len = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            len += 1;
        }

        let spec = match (c, len) {
            ('y', 4) => "%Y",
            ('y', 2) => "%y",
            ('M', 2) => "%m",
            ('M', 1) => "%-m",
            ('d', 2) => "%d",
            ('d', 1) => "%-d",
            ('H', 2) => "%H",
            ('H', 1) => "%-H",
            ('m', 2) => "%M",
            ('m', 1) => "%-M",
            ('s', 2) => "%S",
            ('s', 1) => "%-S",
            _ => {
                return Err(Error::TimeFormat {
                    pattern: pattern.to_string(),
                    token: c.to_string().repeat(len),
                })
            }
        };
        strftime.push_str(spec);
    }

    Ok(strftime)
}

pub fn format_date(date_time: &NaiveDateTime, pattern: &str) -> Result<String> {
    let strftime = to_strftime(pattern)?;
    Ok(date_time.format(&strftime).to_string())
}

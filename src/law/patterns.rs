//! Shapes of the numbers found in headings and citations.
//!
//! All patterns are anchored: a token either is a number of that shape or it is not.

use once_cell::sync::Lazy;
use regex::Regex;

/// `2/2013`, `2-A/2013`, `2/2013/A`, `15/99`
pub static DOCUMENT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\-A-Z]+/(?:\d{4}|\d{2})(?:/[A-Z])?$").unwrap());

/// `3º`, `4º-A`, or the relative `anterior` / `seguinte`
pub static ARTICLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\dA-Z\-]+º(?:-[A-Z]+)?$|^anterior$|^seguinte$").unwrap());

/// Article heading numbers, which may also be `único`.
pub static ARTICLE_HEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\dA-Z\-]+º(?:-[A-Z]+)?$|^[Úú]nico$|^ÚNICO$").unwrap());

/// Number-section citations: a single digit, or `anterior` / `seguinte`.
pub static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$|^anterior$|^seguinte$").unwrap());

/// Number-section headings (`1 - `, `12 - `).
pub static NUMBER_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// `a)`, `f)`, `aa)`, `1)`
pub static LINE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\da-z]+\)$").unwrap());

/// Annex, Part, Title, Chapter and Section headings: `IV`, `A`, `2` or `único`.
pub static HEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[IVXLC]+$|^[A-Z]$|^\d+$|^[ÚU]NICO$|^[Úú]nico$").unwrap());

/// Clause headings are a bare roman numeral on their own line.
pub static ROMAN_NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVXLC]+$").unwrap());

/// Unordered list bullets.
pub static ITEM_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-—•]$").unwrap());

/// Directives and decisions: year first (`2000/29/CE`).
pub static EU_LAW_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d+(?:/CE|/UE)?$").unwrap());

/// Regulations: id first (`1907/2006`).
pub static EU_REGULATION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+/\d{4}$").unwrap());

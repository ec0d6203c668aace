use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::services::unit_conversion::{Unit, format_quantity, parse_quantity};

// A range is tried before the bare value at every position, so the upper
// bound of "80-100 oz" is never picked up on its own. The trailing `\b`
// keeps "l" out of "lbs" and "g" out of "grapes".
const NUMBER: &str = r"(?P<low>\d+(?:\.\d+)?)(?:(?P<sep>\s*-\s*)(?P<high>\d+(?:\.\d+)?))?";

static OUNCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| build_pattern("oz"));
static GRAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| build_pattern("g"));
static LITER_PATTERN: LazyLock<Regex> = LazyLock::new(|| build_pattern("l"));

fn build_pattern(unit: &str) -> Regex {
    Regex::new(&format!(r"(?i){}\s*{}\b", NUMBER, unit)).unwrap()
}

fn pattern_for(unit: Unit) -> &'static Regex {
    match unit {
        Unit::Oz => &*OUNCE_PATTERN,
        Unit::G => &*GRAM_PATTERN,
        Unit::L => &*LITER_PATTERN,
    }
}

/// A number or range followed by a unit tag, located inside free text.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityMention<'t> {
    pub span: Range<usize>,
    pub low: f64,
    pub high: Option<f64>,
    pub separator: Option<&'t str>,
}

pub fn find_mentions(text: &str, unit: Unit) -> Vec<QuantityMention<'_>> {
    pattern_for(unit)
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            Some(QuantityMention {
                span: whole.range(),
                low: parse_quantity(captures.name("low").map_or("", |m| m.as_str())),
                high: captures.name("high").map(|m| parse_quantity(m.as_str())),
                separator: captures.name("sep").map(|m| m.as_str()),
            })
        })
        .collect()
}

/// Re-expresses every `from` mention in `to` using `convert`, leaving the rest
/// of the text untouched. Same-unit requests return the text without scanning.
pub fn rewrite_mentions(text: &str, from: Unit, to: Unit, convert: fn(f64) -> f64) -> String {
    if from == to {
        return text.to_string();
    }

    let mut rewritten = String::with_capacity(text.len());
    let mut cursor = 0;

    for mention in find_mentions(text, from) {
        rewritten.push_str(&text[cursor..mention.span.start]);
        rewritten.push_str(&format_quantity(convert(mention.low)));
        if let (Some(separator), Some(high)) = (mention.separator, mention.high) {
            rewritten.push_str(separator);
            rewritten.push_str(&format_quantity(convert(high)));
        }
        rewritten.push_str(to.suffix());
        cursor = mention.span.end;
    }

    rewritten.push_str(&text[cursor..]);
    rewritten
}

use crate::expr::{self, format_number};
use crate::query::error::QueryError;
use crate::query::keywords::match_calculator;
use crate::query::result::InterpretedResult;
use crate::shell::CalculatorId;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    /// "15% of 200", optionally preceded by "what is"
    static ref PERCENT_OF: Regex = Regex::new(
        r"(?:what\s+is\s+)?([0-9]+(?:\.[0-9]+)?)\s*%\s*of\s*([0-9]+(?:\.[0-9]+)?)"
    ).unwrap();

    /// Characters an arithmetic query may consist of
    static ref MATH_CHARSET: Regex = Regex::new(r"^[0-9\s+\-*/().^%]+$").unwrap();
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
    static ref HAS_OPERATOR: Regex = Regex::new(r"[+\-*/^%]").unwrap();

    /// Everything the evaluator does not understand. This also drops `^` and
    /// `%` even though MATH_CHARSET admits them.
    static ref NOT_EVALUABLE: Regex = Regex::new(r"[^0-9+\-*/().\s]").unwrap();

    /// "convert 5 feet to meters"
    static ref UNIT_PHRASE: Regex = Regex::new(
        r"(?i)(convert|change)\s+([0-9]+(?:\.[0-9]+)?)\s+([a-z0-9_]+)\s+to\s+([a-z0-9_]+)"
    ).unwrap();
}

/// Source unit -> (target unit, multiplier)
static PHRASE_CONVERSIONS: [(&str, &[(&str, f64)]); 4] = [
    ("feet", &[("meters", 0.3048), ("inches", 12.0), ("cm", 30.48)]),
    ("meters", &[("feet", 3.28084), ("inches", 39.3701), ("cm", 100.0)]),
    ("inches", &[("feet", 0.0833333), ("meters", 0.0254), ("cm", 2.54)]),
    ("cm", &[("meters", 0.01), ("feet", 0.0328084), ("inches", 0.393701)]),
];

/// One classification step: a predicate and the handler that runs when it holds
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub handle: fn(&str) -> Result<InterpretedResult, QueryError>,
}

/// Classification order. The first rule whose predicate holds handles the query.
pub static RULES: [Rule; 4] = [
    Rule {
        name: "percentage",
        matches: is_percentage_query,
        handle: handle_percentage,
    },
    Rule {
        name: "arithmetic",
        matches: is_math_expression,
        handle: handle_math,
    },
    Rule {
        name: "navigation",
        matches: is_navigation_request,
        handle: handle_navigation,
    },
    Rule {
        name: "unit_phrase",
        matches: is_unit_phrase,
        handle: handle_unit_phrase,
    },
];

fn parse_number(caps: &Captures<'_>, group: usize) -> Result<f64, QueryError> {
    let text = caps.get(group).map(|m| m.as_str()).unwrap_or_default();
    text.parse::<f64>()
        .map_err(|_| QueryError::InvalidNumber(text.to_string()))
}

pub fn is_percentage_query(query: &str) -> bool {
    PERCENT_OF.is_match(query)
}

pub fn handle_percentage(query: &str) -> Result<InterpretedResult, QueryError> {
    let caps = PERCENT_OF
        .captures(query)
        .ok_or(QueryError::PatternMismatch("percentage"))?;
    let percentage = parse_number(&caps, 1)?;
    let value = parse_number(&caps, 2)?;
    let result = percentage * value / 100.0;

    let (p, v, r) = (
        format_number(percentage),
        format_number(value),
        format_number(result),
    );
    Ok(InterpretedResult::Calculation {
        value: result,
        formatted: format!("{p}% of {v} = {r}"),
        message: format!("{p}% of {v} equals {r}"),
    })
}

pub fn is_math_expression(query: &str) -> bool {
    MATH_CHARSET.is_match(query) && HAS_DIGIT.is_match(query) && HAS_OPERATOR.is_match(query)
}

pub fn handle_math(query: &str) -> Result<InterpretedResult, QueryError> {
    let sanitized = NOT_EVALUABLE.replace_all(query, "");
    if sanitized != query {
        debug!(query, sanitized = %sanitized, "dropped unsupported operators before evaluation");
    }

    let result = expr::evaluate(&sanitized)?;
    let r = format_number(result);
    Ok(InterpretedResult::Calculation {
        value: result,
        formatted: format!("{query} = {r}"),
        message: format!("{query} equals {r}"),
    })
}

pub fn is_navigation_request(query: &str) -> bool {
    match_calculator(query).is_some()
}

pub fn handle_navigation(query: &str) -> Result<InterpretedResult, QueryError> {
    match_calculator(query)
        .map(InterpretedResult::navigation)
        .ok_or(QueryError::PatternMismatch("navigation"))
}

pub fn is_unit_phrase(query: &str) -> bool {
    UNIT_PHRASE.is_match(query)
}

fn phrase_factor(from: &str, to: &str) -> Option<f64> {
    PHRASE_CONVERSIONS
        .iter()
        .find(|(source, _)| *source == from)
        .and_then(|(_, targets)| targets.iter().find(|(target, _)| *target == to))
        .map(|(_, factor)| *factor)
}

pub fn handle_unit_phrase(query: &str) -> Result<InterpretedResult, QueryError> {
    let caps = UNIT_PHRASE
        .captures(query)
        .ok_or(QueryError::PatternMismatch("unit_phrase"))?;
    let amount = parse_number(&caps, 2)?;
    let from = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
    let to = caps.get(4).map(|m| m.as_str()).unwrap_or_default();

    let Some(factor) = phrase_factor(&from.to_lowercase(), &to.to_lowercase()) else {
        // Unknown pair: hand over to the full converter instead of failing
        return Ok(InterpretedResult::Navigation {
            target: CalculatorId::Unit,
            message: format!(
                "I'll help you convert {from} to {to}. Opening the unit converter."
            ),
        });
    };

    let result = amount * factor;
    let n = format_number(amount);
    Ok(InterpretedResult::Calculation {
        value: result,
        formatted: format!("{n} {from} = {result:.4} {to}"),
        message: format!("{n} {from} equals {result:.4} {to}"),
    })
}

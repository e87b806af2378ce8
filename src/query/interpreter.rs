use crate::query::result::InterpretedResult;
use crate::query::rules::RULES;
use tracing::debug;

/// Classify a free-text query and answer it.
///
/// The query is trimmed and lowercased, then offered to each rule in order.
/// This never fails: handler errors become the apology message and a query no
/// rule accepts (including an empty one) gets the guidance message.
pub fn interpret(query: &str) -> InterpretedResult {
    let normalized = query.trim().to_lowercase();

    for rule in RULES.iter() {
        if !(rule.matches)(&normalized) {
            continue;
        }
        debug!(rule = rule.name, query = %normalized, "query matched");
        return match (rule.handle)(&normalized) {
            Ok(result) => result,
            Err(e) => {
                debug!(rule = rule.name, error = %e, "rule failed");
                InterpretedResult::apology()
            }
        };
    }

    debug!(query = %normalized, "no rule matched");
    InterpretedResult::guidance()
}

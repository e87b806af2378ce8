use crate::shell::CalculatorId;

// Iteration order decides overlaps: "age" reaches Date before Age,
// and "change" contains "age" too.
static KEYWORDS: [(CalculatorId, &[&str]); 10] = [
    (CalculatorId::Standard, &["basic", "simple", "standard", "normal"]),
    (
        CalculatorId::Scientific,
        &["scientific", "advanced", "sine", "cosine", "logarithm"],
    ),
    (CalculatorId::Bmi, &["bmi", "body mass index", "weight", "health"]),
    (
        CalculatorId::Currency,
        &["currency", "exchange", "convert money", "dollars", "euros"],
    ),
    (CalculatorId::Date, &["date", "days between", "age", "time"]),
    (CalculatorId::Loan, &["loan", "mortgage", "interest", "payment"]),
    (CalculatorId::Tip, &["tip", "gratuity", "restaurant"]),
    (CalculatorId::Age, &["age", "how old", "born"]),
    (
        CalculatorId::Unit,
        &["convert", "units", "meters", "feet", "inches", "temperature"],
    ),
    (CalculatorId::Percentage, &["percent", "percentage", "%"]),
];

/// First calculator with a keyword contained in the (already lowercased) query
pub fn match_calculator(query: &str) -> Option<CalculatorId> {
    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(id, _)| *id)
}

pub fn keywords_for(id: CalculatorId) -> &'static [&'static str] {
    KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// What each calculator is for, as the assistant explains it
pub fn describe(id: CalculatorId) -> &'static str {
    match id {
        CalculatorId::Standard => {
            "The Standard Calculator performs basic arithmetic operations like addition, \
             subtraction, multiplication, and division."
        }
        CalculatorId::Scientific => {
            "The Scientific Calculator is an advanced tool for complex calculations, including \
             trigonometric, logarithmic, and power functions."
        }
        CalculatorId::Bmi => {
            "The BMI Calculator helps you determine if your body weight is healthy based on your \
             height and weight."
        }
        CalculatorId::Currency => {
            "The Currency Converter allows you to quickly convert a value from one currency to \
             another using fixed reference exchange rates."
        }
        CalculatorId::Date => {
            "The Date Calculator helps you find the duration between two dates or add/subtract \
             time from a specific date."
        }
        CalculatorId::Loan => {
            "The Loan Calculator computes your monthly loan payment, total interest, and total \
             cost based on the loan amount, interest rate, and term."
        }
        CalculatorId::Tip => {
            "The Tip Calculator helps you figure out the tip amount for a bill and can split the \
             total evenly among a group of people."
        }
        CalculatorId::Age => {
            "The Age Calculator determines a person's exact age in years, months, and days based \
             on their date of birth."
        }
        CalculatorId::Unit => {
            "The Unit Converter is a versatile tool that converts values between different units \
             of measurement, such as length, weight, and temperature."
        }
        CalculatorId::Percentage => {
            "The Percentage Calculator solves various percentage problems, including finding a \
             percentage of a value or calculating percentage increases and decreases."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_calculator_has_keywords() {
        for id in CalculatorId::ALL {
            assert!(!keywords_for(id).is_empty(), "{id} has no keywords");
            assert!(!describe(id).is_empty());
        }
    }

    #[test]
    fn test_table_order_breaks_ties() {
        assert_eq!(match_calculator("what is my age"), Some(CalculatorId::Date));
        assert_eq!(match_calculator("how old am i"), Some(CalculatorId::Age));
        assert_eq!(
            match_calculator("simple interest"),
            Some(CalculatorId::Standard)
        );
        assert_eq!(match_calculator("nothing relevant"), None);
    }
}

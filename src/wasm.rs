// WebAssembly bindings for the browser front end.
// Results cross the boundary as JSON strings; "null" means nothing to show.
use crate::calc::{
    self, Direction, Key, PercentageMode, ScientificCalculator, StandardCalculator, TipRate,
    UnitSystem,
};
use crate::contact::ContactForm;
use crate::currency::{self, CurrencyService};
use crate::expr::AngleMode;
use crate::query;
use crate::shell::{CalculatorId, Shell, Tab};
use crate::units::{self, UnitCategory};
use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct OmniCalcWasm {
    shell: Shell,
    standard: StandardCalculator,
    scientific: ScientificCalculator,
}

impl Default for OmniCalcWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl OmniCalcWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            shell: Shell::default(),
            standard: StandardCalculator::new(),
            scientific: ScientificCalculator::new(),
        }
    }

    /// Interpret a query without touching the chat transcript
    #[wasm_bindgen]
    pub fn interpret(&self, query: &str) -> Result<String, JsValue> {
        to_json(&query::interpret(query))
    }

    /// Send a chat message. Returns the assistant's result, or "null" for blank input
    #[wasm_bindgen]
    pub fn ask(&mut self, query: &str) -> Result<String, JsValue> {
        let result = self.shell.ask(query);
        to_json(&result)
    }

    /// Returns JSON array of chat messages
    #[wasm_bindgen]
    pub fn transcript(&self) -> Result<String, JsValue> {
        to_json(&self.shell.transcript().messages())
    }

    #[wasm_bindgen]
    pub fn clear_chat(&mut self) {
        self.shell.clear_chat();
    }

    #[wasm_bindgen]
    pub fn toggle_assistant(&mut self) -> bool {
        self.shell.toggle_assistant();
        self.shell.assistant_open()
    }

    #[wasm_bindgen]
    pub fn close_assistant(&mut self) {
        self.shell.close_assistant();
    }

    /// Returns JSON of the active tab: {"kind": "calculator", "id": "bmi"} or {"kind": "contact"}
    #[wasm_bindgen]
    pub fn active_tab(&self) -> Result<String, JsValue> {
        to_json(&self.shell.active())
    }

    /// Select a calculator by id, or "contact"
    #[wasm_bindgen]
    pub fn select(&mut self, id: &str) -> Result<(), JsValue> {
        let tab = if id == "contact" {
            Tab::Contact
        } else {
            let calculator: CalculatorId = id
                .parse()
                .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
            Tab::Calculator(calculator)
        };
        self.shell.select(tab);
        Ok(())
    }

    /// Calculator ids in navigation order
    #[wasm_bindgen]
    pub fn calculators(&self) -> js_sys::Array {
        CalculatorId::ALL
            .iter()
            .map(|id| JsValue::from_str(id.as_str()))
            .collect()
    }

    #[wasm_bindgen]
    pub fn describe(&self, id: &str) -> Result<String, JsValue> {
        let calculator: CalculatorId = id
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        Ok(query::describe(calculator).to_string())
    }

    #[wasm_bindgen]
    pub fn bmi(&self, weight: &str, height: &str, system: &str) -> Result<String, JsValue> {
        let system = match system {
            "imperial" => UnitSystem::Imperial,
            _ => UnitSystem::Metric,
        };
        let reading = calc::bmi(calc::parse_input(weight), calc::parse_input(height), system);
        #[derive(Serialize)]
        struct Reading {
            bmi: f64,
            category: &'static str,
            range: &'static str,
            scale_position: f64,
        }
        to_json(&reading.map(|r| Reading {
            bmi: r.bmi,
            category: r.category.label(),
            range: r.category.range_label(),
            scale_position: r.scale_position(),
        }))
    }

    #[wasm_bindgen]
    pub fn loan(&self, principal: &str, rate: &str, years: &str) -> Result<String, JsValue> {
        to_json(&calc::loan(
            calc::parse_input(principal),
            calc::parse_input(rate),
            calc::parse_input(years),
        ))
    }

    /// `preset` is the selected preset button, `custom` the free-text field
    #[wasm_bindgen]
    pub fn tip(
        &self,
        bill: &str,
        preset: Option<f64>,
        custom: &str,
        people: &str,
    ) -> Result<String, JsValue> {
        let rate = TipRate::from_inputs(preset, calc::parse_input(custom));
        let people = calc::parse_count(people);
        to_json(&calc::tip(calc::parse_input(bill), rate, people))
    }

    /// `target` defaults to today's date in the browser
    #[wasm_bindgen]
    pub fn age(&self, birth: &str, target: Option<String>) -> Result<String, JsValue> {
        let birth = parse_date(birth)?;
        let target = match target {
            Some(t) => parse_date(&t)?,
            None => today()?,
        };
        to_json(&calc::age(birth, target))
    }

    #[wasm_bindgen]
    pub fn date_difference(&self, start: &str, end: &str) -> Result<String, JsValue> {
        to_json(&calc::difference(parse_date(start)?, parse_date(end)?))
    }

    /// `direction` is "add" or "subtract"; blank amounts count as zero
    #[wasm_bindgen]
    pub fn date_shift(
        &self,
        base: &str,
        years: &str,
        months: &str,
        days: &str,
        direction: &str,
    ) -> Result<String, JsValue> {
        let direction = match direction {
            "subtract" => Direction::Subtract,
            _ => Direction::Add,
        };
        let amount = |s: &str| calc::parse_input(s).map(|v| v.trunc() as i64).unwrap_or(0);
        let shifted = calc::shift(
            parse_date(base)?,
            amount(years),
            amount(months),
            amount(days),
            direction,
        );
        to_json(&shifted)
    }

    #[wasm_bindgen]
    pub fn percentage(
        &self,
        mode: &str,
        value1: &str,
        value2: &str,
        percent: &str,
    ) -> Result<String, JsValue> {
        let mode: PercentageMode = mode.parse().map_err(|e: String| JsValue::from_str(&e))?;
        to_json(&calc::percentage(
            mode,
            calc::parse_input(value1),
            calc::parse_input(value2),
            calc::parse_input(percent),
        ))
    }

    /// Returns JSON of the category's units
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<String, JsValue> {
        let category = parse_category(category)?;
        to_json(&units::units_for(category))
    }

    /// Returns JSON [from, to] of the units preselected for a category
    #[wasm_bindgen]
    pub fn default_units(&self, category: &str) -> Result<String, JsValue> {
        let category = parse_category(category)?;
        to_json(&units::default_pair(category))
    }

    /// Formatted converted value, or "null"
    #[wasm_bindgen]
    pub fn convert_unit(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &str,
    ) -> Result<String, JsValue> {
        let category = parse_category(category)?;
        to_json(&units::convert_input(category, from, to, calc::parse_input(value)))
    }

    #[wasm_bindgen]
    pub fn swap_units(
        &self,
        from: &str,
        to: &str,
        converted: Option<String>,
    ) -> Result<String, JsValue> {
        to_json(&units::swap(from, to, converted.as_deref()))
    }

    /// Returns JSON array of supported currencies
    #[wasm_bindgen]
    pub fn currencies(&self) -> Result<String, JsValue> {
        to_json(&CurrencyService::new().currencies())
    }

    #[wasm_bindgen]
    pub fn convert_currency(&self, amount: &str, from: &str, to: &str) -> Result<String, JsValue> {
        to_json(&currency::convert_input(calc::parse_input(amount), from, to))
    }

    /// Press a standard keypad button; returns the new display
    #[wasm_bindgen]
    pub fn press_standard(&mut self, label: &str) -> Result<String, JsValue> {
        let key = Key::parse(label)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown key: {}", label)))?;
        Ok(self.standard.press(key).to_string())
    }

    /// Pending operation shown above the standard display, if any
    #[wasm_bindgen]
    pub fn standard_pending(&self) -> Option<String> {
        self.standard.pending()
    }

    #[wasm_bindgen]
    pub fn press_scientific(&mut self, button: &str) -> String {
        self.scientific.press(button).to_string()
    }

    /// Flip RAD/DEG; returns "RAD" or "DEG"
    #[wasm_bindgen]
    pub fn toggle_angle(&mut self) -> String {
        match self.scientific.toggle_angle() {
            AngleMode::Radians => "RAD".to_string(),
            AngleMode::Degrees => "DEG".to_string(),
        }
    }

    /// Check the contact form before the page posts it
    #[wasm_bindgen]
    pub fn validate_contact(&self, name: &str, email: &str, message: &str) -> Result<(), JsValue> {
        ContactForm::new(name, email, message)
            .validate()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn parse_category(text: &str) -> Result<UnitCategory, JsValue> {
    text.parse().map_err(|e| JsValue::from_str(&format!("{}", e)))
}

fn parse_date(text: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", text, e)))
}

fn today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| JsValue::from_str("Browser clock returned an invalid date"))
}

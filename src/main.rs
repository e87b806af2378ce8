use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use omnicalc::calc::{
    self, Direction, Key, PercentageMode, ScientificCalculator, StandardCalculator, TipRate,
    UnitSystem,
};
use omnicalc::config::{Config, DEFAULT_CONFIG_FILE};
use omnicalc::contact::{ContactClient, ContactForm, ContactStatus};
use omnicalc::currency::{self, CurrencyService};
use omnicalc::expr::{self, AngleMode, EvalOptions};
use omnicalc::query::{self, InterpretedResult};
use omnicalc::shell::{CalculatorId, Role, Shell, Tab};
use omnicalc::units::{self, UnitCategory};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omnicalc")]
#[command(about = "Calculator suite with a natural-language assistant", long_about = None)]
struct Cli {
    /// Configuration file (default: ./omnicalc.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the assistant (e.g. "15% of 200", "open the loan calculator")
    Ask { query: String },

    /// List the calculators
    List,

    /// Describe what a calculator does
    Explain { calculator: CalculatorId },

    /// Body mass index
    Bmi {
        /// Weight in kg (lb with --imperial)
        #[arg(allow_negative_numbers = true)]
        weight: f64,
        /// Height in cm (in with --imperial)
        #[arg(allow_negative_numbers = true)]
        height: f64,
        #[arg(long)]
        imperial: bool,
    },

    /// Monthly payment of a fixed-rate loan
    Loan {
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Term in years
        #[arg(allow_negative_numbers = true)]
        years: f64,
    },

    /// Tip and bill split
    Tip {
        #[arg(allow_negative_numbers = true)]
        bill: f64,
        /// One of the preset percentages
        #[arg(long)]
        preset: Option<f64>,
        /// Any percentage; overrides --preset
        #[arg(long)]
        custom: Option<f64>,
        #[arg(long, default_value_t = 1)]
        people: u32,
    },

    /// Age in years, months and days
    Age {
        /// Birth date (YYYY-MM-DD)
        birth: NaiveDate,
        /// Date to measure on (default: today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Date differences and offsets
    Date {
        #[command(subcommand)]
        action: DateAction,
    },

    /// Percentage of, increase, decrease or difference
    Percent {
        /// of | increase | decrease | difference
        mode: PercentageMode,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Percentage (of, increase, decrease)
        #[arg(long)]
        percent: Option<f64>,
        /// Second value (difference)
        #[arg(long)]
        to: Option<f64>,
    },

    /// Convert between units: `unit 5 km mi` or `unit 5km mi`
    Unit {
        #[arg(num_args = 2..=3, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
        /// Category, when the unit names alone are ambiguous
        #[arg(long)]
        category: Option<UnitCategory>,
    },

    /// Convert between currencies at the built-in rates
    Currency {
        amount: Option<f64>,
        from: Option<String>,
        to: Option<String>,
        /// Show the supported currencies
        #[arg(long)]
        list: bool,
    },

    /// Evaluate an arithmetic expression
    Calc {
        expression: String,
        /// Allow ^, functions and constants
        #[arg(long)]
        scientific: bool,
        /// Trigonometry in degrees
        #[arg(long, requires = "scientific")]
        degrees: bool,
    },

    /// Press keypad buttons in order and show the display
    Keypad {
        /// Button labels, e.g. 2 + 3 =
        #[arg(required = true)]
        keys: Vec<String>,
        #[arg(long)]
        scientific: bool,
        #[arg(long, requires = "scientific")]
        degrees: bool,
    },

    /// Send a message through the contact form
    Contact {
        name: String,
        email: String,
        message: String,
        /// Mail relay URL (overrides the configuration)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Interactive assistant session
    Shell {
        /// Calculator to open on
        #[arg(long)]
        open: Option<CalculatorId>,
    },
}

#[derive(Subcommand)]
enum DateAction {
    /// Distance between two dates
    Diff { start: NaiveDate, end: NaiveDate },
    /// Move a date forward
    Add(Offset),
    /// Move a date backward
    Subtract(Offset),
}

#[derive(clap::Args)]
struct Offset {
    date: NaiveDate,
    #[arg(long, default_value_t = 0)]
    years: i64,
    #[arg(long, default_value_t = 0)]
    months: i64,
    #[arg(long, default_value_t = 0)]
    days: i64,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Ask { query } => {
            let result = query::interpret(&query);
            if json {
                println!("{}", query::format_result_json(&result));
            } else {
                println!("{}", query::format_result_text(&result));
            }
        }
        Commands::List => list_calculators(json)?,
        Commands::Explain { calculator } => {
            println!("{}: {}", calculator.display_name(), query::describe(calculator));
            println!("Assistant keywords: {}", query::keywords_for(calculator).join(", "));
        }
        Commands::Bmi { weight, height, imperial } => {
            let system = if imperial { UnitSystem::Imperial } else { UnitSystem::Metric };
            let reading = calc::bmi(Some(weight), Some(height), system)
                .ok_or_else(|| anyhow!("weight and height must be positive"))?;
            emit(json, &reading, |r| {
                format!("BMI {} ({}, {})", r.bmi, r.category.label(), r.category.range_label())
            })?;
        }
        Commands::Loan { principal, rate, years } => {
            let summary = calc::loan(Some(principal), Some(rate), Some(years))
                .ok_or_else(|| anyhow!("principal, rate and term must be positive"))?;
            emit(json, &summary, |s| {
                format!(
                    "Monthly payment: {:.2}\nTotal payment:   {:.2}\nTotal interest:  {:.2}",
                    s.monthly_payment, s.total_payment, s.total_interest
                )
            })?;
        }
        Commands::Tip { bill, preset, custom, people } => {
            if let Some(p) = preset {
                if !calc::TIP_PRESETS.contains(&p) {
                    bail!(
                        "preset must be one of 10, 15, 18, 20, 25 (use --custom for other rates)"
                    );
                }
            }
            let rate = TipRate::from_inputs(preset, custom);
            let split = calc::tip(Some(bill), rate, Some(people)).ok_or_else(|| {
                anyhow!("bill must be positive, tip non-negative and people at least 1")
            })?;
            emit(json, &split, |s| {
                let mut out = format!(
                    "Tip ({}%): {:.2}\nTotal:     {:.2}",
                    expr::format_number(rate.percent()),
                    s.tip_amount,
                    s.total_amount
                );
                if people > 1 {
                    out.push_str(&format!(
                        "\nPer person: {:.2} (tip {:.2})",
                        s.per_person, s.tip_per_person
                    ));
                }
                out
            })?;
        }
        Commands::Age { birth, on } => {
            let target = on.unwrap_or_else(|| chrono::Local::now().date_naive());
            let breakdown = calc::age(birth, target)
                .ok_or_else(|| anyhow!("birth date {} is after {}", birth, target))?;
            emit(json, &breakdown, |b| {
                format!(
                    "{} years, {} months, {} days\n\
                     {} days ({} weeks, {} months) in total\n\
                     Next birthday: {} (in {} days)",
                    b.years,
                    b.months,
                    b.days,
                    b.total_days,
                    b.total_weeks,
                    b.total_months,
                    b.next_birthday,
                    b.days_to_next_birthday
                )
            })?;
        }
        Commands::Date { action } => date_command(action, json)?,
        Commands::Percent { mode, value, percent, to } => {
            let outcome =
                calc::percentage(mode, Some(value), to, percent).ok_or_else(|| match mode {
                    PercentageMode::Difference => {
                        anyhow!("difference needs two non-zero values (--to)")
                    }
                    _ => anyhow!("{} needs a non-zero value and --percent", mode),
                })?;
            emit(json, &outcome, |o| o.narrative.clone())?;
        }
        Commands::Unit { args, category } => {
            let (value, from, to) = match args.as_slice() {
                [quantity, to] if units::looks_like_unit_string(quantity) => {
                    let (value, from) = units::parse_quantity(quantity)?;
                    (value, from.to_string(), to.clone())
                }
                [value, from, to] => {
                    let value = calc::parse_input(value)
                        .ok_or_else(|| anyhow!("'{}' is not a number", value))?;
                    (value, from.clone(), to.clone())
                }
                _ => bail!(
                    "usage: omnicalc unit <VALUE> <FROM> <TO> or omnicalc unit <VALUE><FROM> <TO>"
                ),
            };
            unit_command(value, &from, &to, category, json)?;
        }
        Commands::Currency { amount, from, to, list } => {
            if list {
                list_currencies(json)?;
            } else {
                let (Some(amount), Some(from), Some(to)) = (amount, from, to) else {
                    bail!("usage: omnicalc currency <AMOUNT> <FROM> <TO> or --list");
                };
                let service = CurrencyService::new();
                // Surface an unknown code as an error rather than an empty result
                service.find(&from)?;
                service.find(&to)?;
                let quote = currency::convert_input(Some(amount), &from, &to)
                    .ok_or_else(|| anyhow!("amount must be positive"))?;
                emit(json, &quote, |q| {
                    format!(
                        "{:.2} {} = {:.2} {}\n1 {} = {:.4} {}",
                        amount,
                        from.to_uppercase(),
                        q.converted,
                        to.to_uppercase(),
                        from.to_uppercase(),
                        q.rate,
                        to.to_uppercase()
                    )
                })?;
            }
        }
        Commands::Calc { expression, scientific, degrees } => {
            let options = EvalOptions {
                scientific,
                angle: if degrees { AngleMode::Degrees } else { AngleMode::Radians },
            };
            let value = expr::evaluate_with(&expression, &options)
                .with_context(|| format!("could not evaluate '{}'", expression))?;
            emit(json, &value, |v| expr::format_number(*v))?;
        }
        Commands::Keypad { keys, scientific, degrees } => {
            let display = if scientific {
                let mut keypad = ScientificCalculator::new();
                if degrees {
                    keypad.set_angle(AngleMode::Degrees);
                }
                for key in &keys {
                    keypad.press(key);
                }
                keypad.display().to_string()
            } else {
                let mut keypad = StandardCalculator::new();
                for label in &keys {
                    let key = Key::parse(label).ok_or_else(|| anyhow!("unknown key '{}'", label))?;
                    keypad.press(key);
                }
                keypad.display().to_string()
            };
            emit(json, &display, |d| d.clone())?;
        }
        Commands::Contact { name, email, message, endpoint } => {
            let form = ContactForm::new(name, email, message);
            form.validate()?;
            let mut client = ContactClient::new(endpoint.unwrap_or(config.contact.endpoint));
            let status = client.send(&form);
            let banner = status.banner().unwrap_or_default();
            if status == ContactStatus::Success {
                println!("{}", banner);
            } else {
                bail!("{}", banner);
            }
        }
        Commands::Shell { open } => {
            let tab = Tab::Calculator(open.unwrap_or(config.shell.default_calculator));
            run_shell(Shell::new(tab))?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Ok(Config::load_from_file(path)?);
    }
    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.exists() {
        Ok(Config::load_from_file(default)?)
    } else {
        Ok(Config::empty())
    }
}

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn list_calculators(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CalculatorId::ALL)?);
        return Ok(());
    }
    println!("Calculators ({}):", CalculatorId::ALL.len());
    for id in CalculatorId::ALL {
        println!("  - {:<11} {}", id.as_str(), id.display_name());
    }
    Ok(())
}

fn list_currencies(json: bool) -> anyhow::Result<()> {
    let service = CurrencyService::new();
    if json {
        println!("{}", serde_json::to_string_pretty(service.currencies())?);
        return Ok(());
    }
    println!("Currencies (rate per USD):");
    for currency in service.currencies() {
        println!("  - {} {:<18} {}", currency.code, currency.name, currency.rate);
    }
    let pairs: Vec<String> = currency::QUICK_PAIRS
        .iter()
        .map(|(from, to)| format!("{}/{}", from, to))
        .collect();
    println!("\nQuick pairs: {}", pairs.join(", "));
    Ok(())
}

fn date_command(action: DateAction, json: bool) -> anyhow::Result<()> {
    let (offset, direction) = match action {
        DateAction::Diff { start, end } => {
            let diff = calc::difference(start, end);
            return emit(json, &diff, |d| {
                format!(
                    "{} days\n{} weeks\n{} months\n{} years",
                    d.days, d.weeks, d.months, d.years
                )
            });
        }
        DateAction::Add(offset) => (offset, Direction::Add),
        DateAction::Subtract(offset) => (offset, Direction::Subtract),
    };

    let shifted = calc::shift(offset.date, offset.years, offset.months, offset.days, direction)
        .ok_or_else(|| anyhow!("resulting date is out of range"))?;
    emit(json, &shifted, |d| d.format("%A, %B %-d, %Y").to_string())
}

fn unit_command(
    value: f64,
    from: &str,
    to: &str,
    category: Option<UnitCategory>,
    json: bool,
) -> anyhow::Result<()> {
    let (category, from_key) = match category {
        Some(category) => (category, from.to_string()),
        None => {
            let (category, unit) =
                units::find_unit(from).ok_or_else(|| anyhow!("unknown unit '{}'", from))?;
            (category, unit.key.to_string())
        }
    };
    let to_key = units::units_for(category)
        .iter()
        .find(|u| u.key == to)
        .map(|u| u.key)
        .or_else(|| match units::find_unit(to) {
            Some((c, unit)) if c == category => Some(unit.key),
            _ => None,
        })
        .ok_or_else(|| anyhow!("unknown {} unit '{}'", category, to))?;

    // Reports unknown keys with their category
    units::convert(category, &from_key, to_key, value)?;
    let converted = units::convert_input(category, &from_key, to_key, Some(value))
        .ok_or_else(|| anyhow!("{} values must be positive", category.display_name()))?;

    #[derive(Serialize)]
    struct Conversion<'a> {
        category: UnitCategory,
        from: &'a str,
        to: &'a str,
        value: f64,
        converted: &'a str,
    }
    let conversion = Conversion {
        category,
        from: &from_key,
        to: to_key,
        value,
        converted: &converted,
    };
    emit(json, &conversion, |c| {
        format!("{} {} = {} {}", expr::format_number(c.value), c.from, c.converted, c.to)
    })
}

fn run_shell(mut shell: Shell) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for message in shell.transcript().messages() {
        println!("{}", message.content);
    }
    println!("(:open <calculator>, :contact, :history, :clear, :quit)");

    loop {
        print!("[{}] > ", shell.active());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            (":quit", _) | (":q", _) => break,
            (":clear", _) => {
                shell.clear_chat();
                println!("{}", shell.transcript().messages()[0].content);
            }
            (":history", _) => {
                for message in shell.transcript().messages() {
                    let who = match message.role {
                        Role::User => "you",
                        Role::Assistant => "assistant",
                    };
                    let time = message.timestamp.format("%H:%M:%S");
                    println!("{} {:>9}: {}", time, who, message.content);
                }
            }
            (":contact", _) => shell.select(Tab::Contact),
            (":open", name) => match name.trim().parse::<CalculatorId>() {
                Ok(id) => shell.select(Tab::Calculator(id)),
                Err(e) => println!("{}", e),
            },
            _ => {
                if let Some(result) = shell.ask(line) {
                    print_reply(&result);
                }
            }
        }
    }

    Ok(())
}

fn print_reply(result: &InterpretedResult) {
    match result {
        InterpretedResult::Navigation { target, message } => {
            println!("{}", message);
            println!("(switched to {})", target.display_name());
        }
        other => println!("{}", other.message()),
    }
}

use bmi_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Body-mass-index calculator with session history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive calculator session (default)
    Session,

    /// Calculate a single BMI and exit
    Calc {
        /// Name of the person
        #[arg(long)]
        name: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Height, whole feet
        #[arg(long, allow_hyphen_values = true)]
        feet: String,

        /// Height, remaining inches
        #[arg(long, allow_hyphen_values = true)]
        inches: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config path
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    bmi_core::logging::init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::default_config_path);
    let config = Config::load_or_default(&config_path)?;
    let clock = SystemClock::new(config.clock.timezone);

    match cli.command {
        Some(Commands::Calc {
            name,
            weight,
            feet,
            inches,
            json,
        }) => cmd_calc(InputRecord::new(name, weight, feet, inches), json, &clock),
        Some(Commands::Config { write }) => cmd_config(&config, &config_path, write),
        Some(Commands::Session) | None => {
            let stdin = io::stdin();
            cmd_session(stdin.lock(), &config, &clock)
        }
    }
}

fn cmd_calc(record: InputRecord, json: bool, clock: &dyn Clock) -> Result<()> {
    let input = match validate(&record) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("⚠ {}", e);
            std::process::exit(1);
        }
    };

    let calculation = calculate(&input, clock)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        display_result(&calculation);
    }

    Ok(())
}

fn cmd_config(config: &Config, path: &std::path::Path, write: bool) -> Result<()> {
    if write {
        config.save_to(path)?;
        println!("✓ Wrote config to {}", path.display());
    } else {
        println!("# {}", path.display());
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

fn cmd_session(input: impl BufRead, config: &Config, clock: &dyn Clock) -> Result<()> {
    let mut state = CalculatorState::new();

    println!("BMI Calculator");
    println!("Type 'help' for commands.");

    let mut lines = input.lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_command(&line) {
            SessionCommand::Set(field, value) => match field {
                Field::Name => state.set_name(value),
                Field::Weight => state.set_weight(value),
                Field::Feet => state.set_feet(value),
                Field::Inches => state.set_inches(value),
            },
            SessionCommand::Calculate => match state.calculate(clock) {
                Ok(calculation) => display_result(calculation),
                // Not fatal: the form stays as entered
                Err(e) => println!("⚠ {}", e),
            },
            SessionCommand::Reset => {
                state.reset();
                println!("Form cleared.");
            }
            SessionCommand::History => {
                display_history(state.history(), config.display.history_order)
            }
            SessionCommand::Show => display_form(&state),
            SessionCommand::Help => display_help(),
            SessionCommand::Quit => break,
            SessionCommand::Empty => {}
            SessionCommand::Unknown(word) => {
                println!("Unknown command: {}. Type 'help' for commands.", word);
            }
        }
    }

    tracing::debug!(
        "Session ended with {} history entries",
        state.history().len()
    );
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Field {
    Name,
    Weight,
    Feet,
    Inches,
}

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Set(Field, String),
    Calculate,
    Reset,
    History,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim().to_string()),
        None => (line, String::new()),
    };

    match word.to_lowercase().as_str() {
        "" => SessionCommand::Empty,
        "name" => SessionCommand::Set(Field::Name, rest),
        "weight" => SessionCommand::Set(Field::Weight, rest),
        "feet" => SessionCommand::Set(Field::Feet, rest),
        "inches" => SessionCommand::Set(Field::Inches, rest),
        "calc" | "c" => SessionCommand::Calculate,
        "reset" | "r" => SessionCommand::Reset,
        "history" | "h" => SessionCommand::History,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

fn display_result(calculation: &Calculation) {
    println!("Your BMI: {}", calculation.bmi);
    println!("Interpretation: {}", calculation.category);
}

fn display_history(history: &History, order: HistoryOrder) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BMI HISTORY");
    println!("╰─────────────────────────────────────────╯");

    if history.is_empty() {
        println!("  No calculations yet.");
        return;
    }

    for entry in history.ordered(order) {
        println!(
            "  {}'s BMI: {} | Height: {} ft {} in",
            entry.name, entry.bmi, entry.height_feet, entry.height_inches
        );
        println!("  Date: {}", entry.timestamp);
    }
    println!();
}

fn display_form(state: &CalculatorState) {
    let record = state.input_record();
    println!("  Name:            {}", record.name);
    println!("  Weight (kg):     {}", record.weight_kg);
    println!("  Height (feet):   {}", record.height_feet);
    println!("  Height (inches): {}", record.height_inches);
    if let Some(calculation) = state.last() {
        display_result(calculation);
    }
}

fn display_help() {
    println!("─────────────────────────────────────────");
    println!("  name <text>     set your name");
    println!("  weight <kg>     set weight in kilograms");
    println!("  feet <n>        set height, feet");
    println!("  inches <n>      set height, inches");
    println!("  calc            calculate BMI");
    println!("  reset           clear the form (history is kept)");
    println!("  history         view history");
    println!("  show            show the form");
    println!("  quit            end the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_commands_keep_value_text() {
        assert_eq!(
            parse_command("name Mary Ann"),
            SessionCommand::Set(Field::Name, "Mary Ann".into())
        );
        assert_eq!(
            parse_command("  WEIGHT   70.5 "),
            SessionCommand::Set(Field::Weight, "70.5".into())
        );
        assert_eq!(
            parse_command("feet"),
            SessionCommand::Set(Field::Feet, String::new())
        );
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command("calc"), SessionCommand::Calculate);
        assert_eq!(parse_command("r"), SessionCommand::Reset);
        assert_eq!(parse_command("history"), SessionCommand::History);
        assert_eq!(parse_command("q"), SessionCommand::Quit);
        assert_eq!(parse_command("   "), SessionCommand::Empty);
        assert_eq!(
            parse_command("jump 3"),
            SessionCommand::Unknown("jump".into())
        );
    }
}

use anyhow::Context;
use clap::Parser;
use pcs_utils::core::{datetime, fields, patterns};
use pcs_utils::utils::{logger, validation::Validate};
use pcs_utils::{CliConfig, Command, FieldRules, UrlPart};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(config.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::ConvertDate { date } => datetime::convert_date(&date)?,
        Command::FormatTime { time } => datetime::format_time(&time),
        Command::AddTime { time1, time2 } => datetime::add_time(&time1, &time2)?,
        Command::DayMonth { text } => {
            let (day, month) = datetime::get_day_month(&text)?;
            format!("{} {}", day, month)
        }
        Command::Fields {
            available,
            requested,
        } => {
            let available: Vec<&str> = available.iter().map(String::as_str).collect();
            fields::parse_table_fields_args(&requested, &available)?.join("\n")
        }
        Command::MatchUrl { url, parts } => {
            let parts = parts
                .iter()
                .map(|p| p.parse::<UrlPart>())
                .collect::<Result<Vec<_>, _>>()?;
            patterns::matches(&url, &parts)?.to_string()
        }
        Command::Validate {
            rules,
            field,
            value,
        } => {
            // 載入規則檔
            let field_rules = FieldRules::from_file(&rules)
                .with_context(|| format!("Failed to load rule file '{}'", rules))?;
            field_rules
                .validate()
                .with_context(|| format!("Rule file '{}' is invalid", rules))?;
            tracing::info!("✅ Loaded rules from {}", rules);

            field_rules.validate_field(&field, value.as_deref())?;
            format!("{}: ok", field)
        }
    };
    Ok(output)
}

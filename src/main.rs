//! Tip calculator - Entry Point

use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tiptime::model::{
    parse_decimal_or_default, AppError, Locale, LocaleCurrencyFormatter, TipInput, TipReport,
};
use tiptime::state::FormState;
use tiptime::view::ColorConfig;
use tracing::info;

/// Tip calculator - compute a gratuity and format it for your locale
#[derive(Parser, Debug)]
#[command(name = "tiptime")]
#[command(version)]
#[command(about = "Calculate a tip from a bill amount and a tip percentage")]
pub struct Args {
    /// Bill amount; when given, print the tip and exit instead of opening the form
    #[arg(short, long, allow_hyphen_values = true)]
    pub bill: Option<String>,

    /// Tip percentage (defaults to the configured tip, 15 unless set)
    #[arg(short, long, allow_hyphen_values = true)]
    pub tip: Option<String>,

    /// Round the tip up to the next whole currency unit
    #[arg(short, long)]
    pub round_up: bool,

    /// Currency locale, e.g. en-US or de_DE.UTF-8 (detected from the environment if omitted)
    #[arg(short, long, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Print a JSON report instead of the formatted tip (with --bill)
    #[arg(long, requires = "bill")]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_locale(tag: &str) -> Result<Locale, String> {
    Locale::parse(tag).ok_or_else(|| format!("'{tag}' is not a locale tag"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tiptime::config::load_config_with_precedence(args.config.clone())?;
        let merged = tiptime::config::merge_config(config_file);
        let with_env = tiptime::config::apply_env_overrides(merged);

        // Only override round_up if the flag was explicitly set
        let round_up_override = if args.round_up { Some(true) } else { None };
        tiptime::config::apply_cli_overrides(with_env, args.locale.clone(), round_up_override)
    };

    tiptime::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let formatter = LocaleCurrencyFormatter::for_locale(&config.locale);

    match args.bill.as_deref() {
        Some(bill_text) => {
            let tip_percent = match args.tip.as_deref() {
                Some(tip_text) => parse_decimal_or_default(tip_text, Decimal::ZERO),
                None => config.default_tip_percent,
            };
            let input = TipInput::new(
                parse_decimal_or_default(bill_text, Decimal::ZERO),
                tip_percent,
                config.round_up,
            );

            let report = TipReport::evaluate(&input, &formatter);
            info!(?input, formatted = %report.formatted, "One-shot calculation");

            if args.json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report.formatted);
            }
        }
        None => {
            let form = FormState::prefilled("", args.tip.unwrap_or_default(), config.round_up);
            tiptime::view::run_form(
                form,
                Box::new(formatter),
                ColorConfig::from_env_and_args(args.no_color),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["tiptime", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["tiptime", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["tiptime"]);
        assert_eq!(args.bill, None);
        assert_eq!(args.tip, None);
        assert!(!args.round_up);
        assert_eq!(args.locale, None);
        assert!(!args.json);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_bill_and_tip_long_flags() {
        let args = Args::parse_from(["tiptime", "--bill", "10.00", "--tip", "18"]);
        assert_eq!(args.bill.as_deref(), Some("10.00"));
        assert_eq!(args.tip.as_deref(), Some("18"));
    }

    #[test]
    fn test_bill_and_tip_short_flags() {
        let args = Args::parse_from(["tiptime", "-b", "42", "-t", "20", "-r"]);
        assert_eq!(args.bill.as_deref(), Some("42"));
        assert_eq!(args.tip.as_deref(), Some("20"));
        assert!(args.round_up);
    }

    #[test]
    fn test_negative_bill_is_accepted_as_value() {
        let args = Args::parse_from(["tiptime", "--bill", "-10"]);
        assert_eq!(args.bill.as_deref(), Some("-10"));
    }

    #[test]
    fn test_locale_flag_parses_posix_tag() {
        let args = Args::parse_from(["tiptime", "--locale", "de_DE.UTF-8"]);
        assert_eq!(args.locale.map(|l| l.to_string()), Some("de-DE".to_string()));
    }

    #[test]
    fn test_locale_flag_rejects_garbage() {
        let result = Args::try_parse_from(["tiptime", "--locale", "!!"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_json_requires_bill() {
        let result = Args::try_parse_from(["tiptime", "--json"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["tiptime", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["tiptime", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_locale_flows_through_config_precedence_chain() {
        use tiptime::config::{
            apply_cli_overrides, apply_env_overrides_from, merge_config, ConfigFile,
        };

        // Simulate full precedence chain: Defaults → Config File → Env Vars → CLI Args
        let config_file = ConfigFile {
            locale: Some("fr-FR".to_string()),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.locale.to_string(), "fr-FR");

        let with_env = apply_env_overrides_from(merged, |key| {
            (key == tiptime::config::LOCALE_ENV_VAR).then(|| "de-DE".to_string())
        });
        assert_eq!(with_env.locale.to_string(), "de-DE");

        let with_cli = apply_cli_overrides(with_env, Locale::parse("ja-JP"), None);
        assert_eq!(
            with_cli.locale.to_string(),
            "ja-JP",
            "CLI locale should override all other sources"
        );
    }
}

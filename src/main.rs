use clap::Parser;
use serde::Serialize;
use speak_time::utils::error::ErrorSeverity;
use speak_time::utils::{logger, validation::Validate};
use speak_time::{
    ClockTime, CliConfig, ConsoleSpeaker, FormatMode, PracticeSession, SpeakTimeError, TomlConfig,
    Verdict,
};

#[derive(Serialize)]
struct Summary<'a> {
    time: String,
    format: &'a FormatMode,
    phrase: String,
    allowed_formats: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<Verdict>,
}

fn exit_code(e: &SpeakTimeError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: SpeakTimeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e).max(1));
}

fn starting_time(config: &CliConfig) -> Result<ClockTime, SpeakTimeError> {
    if let Some(input) = &config.time {
        return ClockTime::parse(input);
    }
    if config.now {
        return Ok(ClockTime::from_chrono(&chrono::Local::now()));
    }
    Ok(ClockTime::default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 先讀偏好設定，日誌等級可能來自設定檔
    let prefs = match config.config.as_deref().map(TomlConfig::from_file) {
        Some(Ok(prefs)) => Some(prefs),
        Some(Err(e)) => {
            logger::init_cli_logger(config.verbose);
            fail(e);
        }
        None => None,
    };

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger_with_level(
            config.verbose,
            prefs.as_ref().and_then(|p| p.log_level()),
        );
    }

    tracing::info!("Starting speak-time");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }
    if let Some(Err(e)) = prefs.as_ref().map(|p| p.validate()) {
        fail(e);
    }

    let time = starting_time(&config).unwrap_or_else(|e| fail(e));
    let prefs = prefs.unwrap_or_default();
    let mut base = PracticeSession::new(time);
    if config.random {
        base.randomize(&mut rand::rng());
    }
    let mut session = prefs.apply_to(base);
    if config.mute {
        session.set_muted(true);
    }

    if config.auto_format {
        session.auto_format();
    } else if let Some(mode) = config.format.clone() {
        if let Err(e) = session.select_format(mode) {
            // 不可用的格式只警告，沿用目前格式
            eprintln!("⚠️  {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    } else if prefs.practice.default_format.is_none() {
        session.auto_format();
    }

    tracing::info!(time = %session.time(), format = %session.format(), "phrase ready");

    let verdict = config.check.as_deref().map(|heard| session.check(heard));

    if config.json {
        let summary = Summary {
            time: session.input_value(),
            format: session.format(),
            phrase: session.phrase(),
            allowed_formats: FormatMode::KNOWN
                .iter()
                .filter(|m| session.can_use_format(m))
                .map(|m| m.name().to_string())
                .collect(),
            verdict: verdict.clone(),
        };
        let json = serde_json::to_string_pretty(&summary)
            .map_err(SpeakTimeError::from)
            .unwrap_or_else(|e| fail(e));
        println!("{}", json);
    } else {
        println!("🕒 {}", session.input_value());
        let mut speaker = ConsoleSpeaker::stdout();
        match session.speak(&mut speaker) {
            Ok(Some(_)) => {}
            Ok(None) => println!("{}", session.phrase()),
            Err(e) => fail(e),
        }

        match &verdict {
            Some(Verdict::Pass) => println!("✅ Correct! Your pronunciation was correct"),
            Some(Verdict::Fail { expected, heard }) => {
                println!("❌ Expected: \"{}\"", expected);
                println!("   You said: \"{}\"", heard);
            }
            None => {}
        }
    }

    if matches!(verdict, Some(Verdict::Fail { .. })) {
        std::process::exit(1);
    }

    Ok(())
}

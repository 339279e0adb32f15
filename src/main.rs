use clap::Parser;
use mortgage_calc::core::ConfigProvider;
use mortgage_calc::utils::{logger, validation::Validate};
use mortgage_calc::{
    CliConfig, MortgageEngine, MortgageError, OutputFormat, PromptSession, Settings, TomlConfig,
};
use std::io;

fn main() {
    let cli = CliConfig::parse();

    // 驗證命令列與配置檔
    if let Err(e) = cli.validate() {
        exit_with(e);
    }
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}'", path.display());
                exit_with(e);
            }
        },
        None => None,
    };

    let mut providers: Vec<&dyn ConfigProvider> = vec![&cli];
    if let Some(file_config) = &file_config {
        providers.push(file_config);
    }
    let settings = Settings::resolve(&providers);
    if let Err(e) = settings.validate() {
        exit_with(e);
    }

    // 初始化日誌
    match settings.output_format {
        OutputFormat::Json => logger::init_json_logger(settings.log_level.as_deref()),
        OutputFormat::Text => logger::init_cli_logger(settings.log_level.as_deref()),
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let renderer = settings.renderer();

    if cli.interactive {
        let session = PromptSession::new(io::stdin().lock(), io::stdout().lock(), renderer);
        if let Err(e) = session.run() {
            exit_with(e);
        }
        return;
    }

    let mut engine = MortgageEngine::new();
    match engine.submit(&settings.loan_input) {
        Ok(result) => match renderer.render_result(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => exit_with(e),
        },
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{}", error);
            }
            if renderer.format() == OutputFormat::Json {
                match renderer.render_errors(&errors) {
                    Ok(json) => println!("{}", json),
                    Err(e) => exit_with(e),
                }
            }
            std::process::exit(MortgageError::from(errors).severity().exit_code());
        }
    }
}

fn exit_with(e: MortgageError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

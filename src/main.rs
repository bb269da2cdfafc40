use clap::Parser;
use std::time::Duration;
use titanic_survival::adapters::animation::AnimationClient;
use titanic_survival::core::runner::FormRunner;
use titanic_survival::core::ConfigProvider;
use titanic_survival::utils::logger;
use titanic_survival::{CliConfig, LogisticModel, ModelHandle, PredictionService};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if !config.json {
        println!("🚢 {}", settings.title);
    }

    // 模型只載入一次；失敗時 load_with 已記錄錯誤，預測會回報 ModelUnavailable
    let model = ModelHandle::load_with(settings.model_path(), |path| {
        LogisticModel::from_file(path)
    });
    let service = PredictionService::new(model);
    let runner = FormRunner::new(&service, config.json);

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let code = match &config.batch {
        Some(path) => runner.predict_batch_file(path, &mut out, &mut err),
        None => runner.predict_one(&config.passenger(), &mut out, &mut err),
    };
    drop(out);
    drop(err);

    if let Some(url) = settings.animation_url() {
        let client =
            AnimationClient::new(Duration::from_secs(settings.animation_timeout_seconds()));
        if let Some(animation) = client.fetch(url).await {
            if !config.json {
                println!("{}", animation.summary());
            }
        }
    }

    if code != 0 {
        std::process::exit(code);
    }
}

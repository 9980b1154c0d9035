use clap::Parser;
use fitnessedge::adapters::visits::render_visit_count;
use fitnessedge::config::Command;
use fitnessedge::core::display::{format_rupees, QuoteView};
use fitnessedge::core::link::interest_from_query;
use fitnessedge::utils::error::ErrorSeverity;
use fitnessedge::utils::{logger, validation::Validate};
use fitnessedge::{
    CliConfig, ContactSink, ContactSubmission, Duration, HttpContactSink, HttpVisitCounter,
    Planner, PricingEngine, Selection, Service, SiteConfig, SiteError, VisitCounter,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置，未指定檔案時使用預設值
    let config = match &cli.config {
        Some(path) => match SiteConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => SiteConfig::default(),
    };

    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting {} CLI", config.site.name);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, config: &SiteConfig) -> fitnessedge::Result<()> {
    match command {
        Command::Quote {
            services,
            duration,
            json,
        } => {
            let planner = planner_for(config, &services, duration)?;
            let quote = planner.quote();

            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
                return Ok(());
            }

            let view = QuoteView::from_quote(&quote);
            let names: Vec<&str> = planner
                .selection()
                .services()
                .map(|s| s.display_name())
                .collect();
            println!("Plan: {} ({})", names.join(" + "), duration.display_name());
            if let Some(original) = &view.original_label {
                println!("{}", original);
            }
            println!("Your Bundle Price: {}", view.price_label);
            if quote.is_best_value {
                println!("⭐ BEST VALUE");
            }
            if !view.lock_in_enabled {
                println!("Select at least one service to lock in this rate");
            }
        }
        Command::Rates => {
            let engine = PricingEngine::standard();
            let header: Vec<String> = Duration::ALL
                .iter()
                .map(|d| format!("{:>10}", d.display_name()))
                .collect();
            println!("{:<20}{}", "", header.join(""));
            for service in Service::ALL {
                let row: Vec<String> = Duration::ALL
                    .iter()
                    .map(|d| {
                        let price = f64::from(engine.rates().base_price(service, *d));
                        format!("{:>10}", format_rupees(price))
                    })
                    .collect();
                println!("{:<20}{}", service.display_name(), row.join(""));
            }
        }
        Command::Link { services, duration } => {
            let planner = planner_for(config, &services, duration)?;
            println!("{}", planner.lock_in_link());
        }
        Command::Contact {
            name,
            email,
            phone,
            interest,
            from_link,
            message,
        } => {
            let interest = interest
                .or_else(|| from_link.as_deref().and_then(interest_from_query))
                .ok_or_else(|| SiteError::ContactValidationError {
                    field: "interest".to_string(),
                    message: "Please let us know what you are interested in".to_string(),
                })?;

            let submission = ContactSubmission {
                name,
                email,
                phone,
                interest,
                message,
            };

            let sink = HttpContactSink::from_config(&config.contact)?;
            sink.submit(&submission).await?;
            println!("✅ Thank you! We'll be in touch soon.");
        }
        Command::Visits { increment } => {
            let counter = HttpVisitCounter::from_config(&config.visits)?;
            let result = if increment {
                counter.increment().await
            } else {
                counter.current().await
            };

            // 與網站一致：失敗時顯示 ---
            let count = match result {
                Ok(count) => count,
                Err(e) => {
                    tracing::warn!("Error fetching visit count: {}", e);
                    0
                }
            };
            println!("Visits: {}", render_visit_count(Some(count)));
        }
    }

    Ok(())
}

fn planner_for(
    config: &SiteConfig,
    services: &[Service],
    duration: Duration,
) -> fitnessedge::Result<Planner> {
    let mut planner = Planner::default().with_contact_anchor(config.site.contact_anchor.clone());
    planner.select(Selection::of(services))?;
    planner.set_duration(duration);
    Ok(planner)
}

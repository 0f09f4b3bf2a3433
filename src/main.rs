use clap::Parser;
use sleigh_planner::app::report::{self, OutputFormat};
use sleigh_planner::config::cli::{ChildCommand, Command, PlaceCommand};
use sleigh_planner::utils::validation::Validate;
use sleigh_planner::utils::{logger, validation};
use sleigh_planner::{CliConfig, DeliveryService, JsonFileStore, PlaceId, PlannerError, Settings};

type Service = DeliveryService<JsonFileStore, JsonFileStore>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail("Invalid settings", &e),
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose, &settings.log_level);
    } else {
        logger::init_cli_logger(settings.verbose, &settings.log_level);
    }
    tracing::debug!("Settings: {:?}", settings);

    // 同一個檔案同時作為地點與孩子的儲存
    let store = match JsonFileStore::open(&settings.data_file).await {
        Ok(store) => store,
        Err(e) => fail("Could not open data file", &e),
    };
    let service = DeliveryService::new(store.clone(), store);

    match run(&service, &cli.command, settings.format).await {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => fail("Request failed", &e),
    }

    Ok(())
}

fn fail(context: &str, e: &PlannerError) -> ! {
    tracing::error!(
        "{}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn run(
    service: &Service,
    command: &Command,
    format: OutputFormat,
) -> sleigh_planner::Result<String> {
    match command {
        Command::Place(PlaceCommand::Add(args)) => {
            let place = service.create_place(&args.to_payload()).await?;
            report::render_places(&[place], format)
        }
        Command::Place(PlaceCommand::List) => {
            let places = service.list_places().await?;
            report::render_places(&places, format)
        }
        Command::Place(PlaceCommand::Show { key }) => {
            let place = match service.find_place(&PlaceId::from(key.as_str())).await? {
                Some(place) => Some(place),
                None => service.find_place_by_name(key).await?,
            };
            let place = place.ok_or_else(|| PlannerError::UnresolvedReference {
                place_id: key.clone(),
            })?;
            report::render_places(&[place], format)
        }
        Command::Child(ChildCommand::Add(args)) => {
            let child = service.create_child(&args.to_payload()).await?;
            report::render_children(&[child], None, format)
        }
        Command::Child(ChildCommand::List { behavior }) => {
            let (children, filter) = match behavior {
                Some(token) => {
                    let behavior = validation::parse_behavior(&token.as_str().into())?;
                    (service.children_by_behavior(behavior).await?, Some(behavior))
                }
                None => (service.list_children().await?, None),
            };
            report::render_children(&children, filter, format)
        }
        Command::Deliveries => {
            let deliveries = service.deliveries().await?;
            report::render_deliveries(&deliveries, format)
        }
        Command::Route => {
            let plan = service.route_plan().await?;
            report::render_route(&plan, format)
        }
    }
}

use clap::Parser;
use storypage::application::{
    list_pages, CaptionOptions, ConfigService, GenerateOptions, GeneratePageService,
    InspectService, RegenerateCaptionService,
};
use storypage::cli::{format_generation_outcome, format_inspection, format_page_list, Cli, Commands};
use storypage::domain::{parse_iso_date, Milestones};
use storypage::error::StorypageError;
use storypage::infrastructure::{AlbumRepository, FileSystemRepository, GeminiGenerator};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), StorypageError> {
    match cli.command {
        Some(Commands::Init {
            path,
            conception,
            delivery,
        }) => {
            let defaults = Milestones::default();
            let conception = parse_cli_date_or(conception, defaults.conception)?;
            let delivery = parse_cli_date_or(delivery, defaults.delivery)?;
            if conception > delivery {
                return Err(StorypageError::Config(
                    "Conception milestone must not be after delivery".to_string(),
                ));
            }

            storypage::application::init::init(&path, Milestones::new(conception, delivery))
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("conception = {}", config.conception);
                println!("delivery = {}", config.delivery);
                println!("variants = {}", config.variants);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: storypage config [--list | <key> [<value>]]");
                println!("Valid keys: conception, delivery, variants, created");
                Ok(())
            }
        }
        Some(Commands::Inspect { input }) => {
            // Milestones come from the enclosing album when there is one;
            // inspection still works outside an album with the defaults.
            let milestones = FileSystemRepository::discover()
                .and_then(|repo| repo.load_config())
                .map(|config| config.milestones())
                .unwrap_or_default();

            let inspection = InspectService::new(milestones).execute(&input);
            print!("{}", format_inspection(&inspection));
            Ok(())
        }
        Some(Commands::Generate {
            photo,
            date,
            note,
            heading,
            variants,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let generator = GeminiGenerator::from_env()?;
            let service = GeneratePageService::new(repo, &generator);

            let outcome = service.execute(&GenerateOptions {
                photo,
                date,
                note,
                heading,
                variants,
            })?;
            print!("{}", format_generation_outcome(&outcome));
            Ok(())
        }
        Some(Commands::Caption { page, photo, note }) => {
            let repo = FileSystemRepository::discover()?;
            let generator = GeminiGenerator::from_env()?;
            let service = RegenerateCaptionService::new(repo, &generator);

            let caption = service.execute(&CaptionOptions { page, photo, note })?;
            println!("{}", caption);
            Ok(())
        }
        Some(Commands::List { from, to, limit }) => {
            let repo = FileSystemRepository::discover()?;

            let from = from.as_deref().map(parse_cli_date).transpose()?;
            let to = to.as_deref().map(parse_cli_date).transpose()?;

            let pages = list_pages(&repo, from, to, limit)?;
            println!("{}", format_page_list(&pages).trim_end());
            Ok(())
        }
        None => {
            println!("storypage - Terminal storybook page generator");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_cli_date(value: &str) -> Result<chrono::NaiveDate, StorypageError> {
    parse_iso_date(value)
        .ok_or_else(|| StorypageError::Config(format!("Invalid date value: '{}'", value)))
}

fn parse_cli_date_or(
    value: Option<String>,
    default: chrono::NaiveDate,
) -> Result<chrono::NaiveDate, StorypageError> {
    match value {
        Some(v) => parse_cli_date(&v),
        None => Ok(default),
    }
}

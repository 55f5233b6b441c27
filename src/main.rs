use blogctl::application::{init::init, ConfigService, PostService, TagService};
use blogctl::cli::{
    format_config_list, format_exists, parse_date, Cli, Commands, ConsoleReporter, TagCommands,
};
use blogctl::error::BlogError;
use blogctl::infrastructure::FileSystemRepository;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn post_service(date: Option<String>) -> Result<PostService<ConsoleReporter>, BlogError> {
    let repo = FileSystemRepository::discover()?;
    let service = PostService::new(repo, ConsoleReporter);
    match date {
        Some(d) => Ok(service.with_date(parse_date(&d)?)),
        None => Ok(service),
    }
}

fn run(cli: Cli) -> Result<(), BlogError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized blog at {}", path.display());
            Ok(())
        }
        Commands::New { title, tags, date } => {
            post_service(date)?.create(&title, &tags)?;
            Ok(())
        }
        Commands::Delete { title } => {
            post_service(None)?.delete(&title)?;
            Ok(())
        }
        Commands::Rename {
            old_title,
            new_title,
            date,
        } => {
            post_service(date)?.rename(&old_title, &new_title)?;
            Ok(())
        }
        Commands::Exists { name, tag } => {
            let repo = FileSystemRepository::discover()?;
            let exists = if tag {
                TagService::new(repo, ConsoleReporter).exists(&name)?
            } else {
                PostService::new(repo, ConsoleReporter).exists(&name)?
            };
            println!("{}", format_exists(exists));
            Ok(())
        }
        Commands::Tag { command } => {
            let repo = FileSystemRepository::discover()?;
            let service = TagService::new(repo, ConsoleReporter);
            match command {
                TagCommands::New { name } => service.create(&name)?,
                TagCommands::Delete { name } => service.delete(&name)?,
            };
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config_list(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: blogctl config [--list | <key> [<value>]]");
                println!("Valid keys: posts_dir, tags_dir, tag_index");
                Ok(())
            }
        }
    }
}

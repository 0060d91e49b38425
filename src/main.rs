use clap::Parser;
use souvenir::application::{
    delete_entry, init, list_entries, show_entry, ConfigService, EntryComposer,
};
use souvenir::cli::{format_entry_detail, format_entry_list, Cli, Commands};
use souvenir::error::SouvenirError;
use souvenir::infrastructure::{EnvLocation, FileCamera, FileMicrophone, FileSystemRepository};

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

fn run(cli: Cli) -> Result<(), SouvenirError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::New {
            title,
            content,
            photo,
            voice,
            locate,
        } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store()?;

            let mut composer = EntryComposer::new();
            composer.set_title(&title);
            composer.set_content(&content);

            if locate {
                let point = composer.detect_location(&EnvLocation::new())?;
                println!("Located at {:.4}°, {:.4}°", point.lat, point.lon);
            }
            if let Some(path) = photo {
                composer.take_photo(&FileCamera::new(path))?;
                println!("Photo captured");
            }
            if let Some(path) = voice {
                composer.record_voice(&FileMicrophone::new(path))?;
                println!("Voice memo captured");
            }

            let entry = composer.submit(&store)?;
            println!("Saved entry {}", entry.id);
            Ok(())
        }
        Commands::List { limit } => {
            let repo = FileSystemRepository::discover()?;
            let entries = list_entries(&repo, limit)?;
            let rendered = format_entry_list(&entries);
            println!("{}", rendered.trim_end_matches('\n'));
            Ok(())
        }
        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let entry = show_entry(&repo, &id)?;
            print!("{}", format_entry_detail(&entry));
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            delete_entry(&repo, &id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
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
                println!("Usage: souvenir config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, created");
                Ok(())
            }
        }
    }
}

use std::{io::Write, sync::Arc};

use api_client::{ApiClient, ApiConfig, CredentialProvider, FileCredentials, MemoryCredentials};
use tokio::io::{AsyncBufReadExt, BufReader};
use workflows::{Ignored, Outcome, Session};

mod commands;
mod render;

use commands::{Command, HELP};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = ApiConfig::from_env();
    let credentials: Arc<dyn CredentialProvider> = match &config.token_file {
        Some(path) => Arc::new(FileCredentials::new(path)),
        None => Arc::new(MemoryCredentials::new(config.auth_token.clone())),
    };

    let client = ApiClient::new(&config, credentials)?;
    tracing::info!("Using backend {}", client.base_url());

    let session = Session::new(Arc::new(client));

    println!("MedInsight Doctor Portal. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => handle(&session, command).await,
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

async fn handle(session: &Session, command: Command) {
    match command {
        Command::Lookup { patient_id } => match session.search(&patient_id).await {
            Outcome::Completed(Ok(patient)) => print!("{}", render::patient_card(&patient)),
            Outcome::Completed(Err(e)) => println!("Error: {}", e),
            Outcome::Ignored(reason) => println!("{}", ignored(reason)),
            Outcome::Stale => {}
        },
        Command::Show => match session.patient() {
            Some(patient) => print!("{}", render::patient_card(&patient)),
            None => println!("Enter a patient ID to begin creating a prescription."),
        },
        Command::Add => {
            let index = session.add_medication();
            println!("Added medication #{}", index + 1);
        }
        Command::Set {
            index,
            field,
            value,
        } => {
            if let Err(e) = session.update_medication(index, field, value) {
                println!("{}", e);
            }
        }
        Command::Remove { index } => match session.remove_medication(index) {
            Ok(_) => print!("{}", render::drafts(&session.drafts())),
            Err(e) => println!("{}", e),
        },
        Command::Drafts => print!("{}", render::drafts(&session.drafts())),
        Command::Save => match session.save().await {
            Outcome::Completed(Ok(_)) => {
                if let Some(message) = session.success_message() {
                    println!("{}", message);
                }
            }
            Outcome::Completed(Err(e)) => println!("Error: {}", e),
            Outcome::Ignored(reason) => println!("{}", ignored(reason)),
            Outcome::Stale => {}
        },
        Command::Reset => {
            session.reset_patient();
            println!("Cleared. Enter a patient ID to begin.");
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}

fn ignored(reason: Ignored) -> &'static str {
    match reason {
        Ignored::BlankIdentifier => "Enter a patient ID first.",
        Ignored::InProgress => "Still working on the previous request.",
        Ignored::NothingToSubmit => {
            "Fill in name, dosage, quantity and start date for at least one medication."
        }
        Ignored::NoPatient => "Look up a patient before saving a prescription.",
    }
}

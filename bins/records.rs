//! Console front end: the same open → fill → submit → reload cycle as the
//! table UI, printed as text.

use clap::{Parser, Subcommand};
use client::{view, ClientError, HttpRecordApi, ListController, WriteOutcome};
use dotenvy::dotenv;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "records", version, about = "Manage student records")]
struct Cli {
    /// Record service base URL (defaults to config / RECORDS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the student table
    List,
    /// Add a student
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        course: String,
    },
    /// Edit a listed student's contact details
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        course: Option<String>,
    },
    /// Delete a listed student
    Delete { id: String },
}

fn report(outcome: &WriteOutcome) -> bool {
    match &outcome.write {
        Ok(Some(s)) => println!("{:?} ok: {}", outcome.action, s.id),
        Ok(None) => println!("{:?}: record no longer exists", outcome.action),
        Err(e) => eprintln!("{:?} failed: {e}", outcome.action),
    }
    if let Err(e) = &outcome.reload {
        eprintln!("list not refreshed: {e}");
    }
    outcome.succeeded()
}

/// An invalid form is a user mistake: report it and fail, like a failed write.
fn settled(res: Result<WriteOutcome, ClientError>) -> anyhow::Result<bool> {
    match res {
        Ok(outcome) => Ok(report(&outcome)),
        Err(ClientError::InvalidForm(e)) => {
            eprintln!("not sent: {e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

async fn run(cli: Cli, api_url: String) -> anyhow::Result<bool> {
    let mut c = ListController::new(HttpRecordApi::new(api_url));
    // stale (empty) list on failure; already logged
    let _ = c.load().await;

    let ok = match cli.command {
        Command::List => true,
        Command::Add { name, email, course } => {
            c.open_for_create()?;
            let form = c.form_mut();
            form.name = name;
            form.email = email;
            form.course = course;
            settled(c.submit().await)?
        }
        Command::Edit { id, name, email, course } => {
            let target = c
                .find(&id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no listed student with id {id}"))?;
            c.open_for_edit(&target)?;
            let form = c.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(course) = course {
                form.course = course;
            }
            settled(c.submit().await)?
        }
        Command::Delete { id } => {
            let target = c
                .find(&id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no listed student with id {id}"))?;
            c.open_for_delete(&target)?;
            settled(c.confirm_delete().await)?
        }
    };

    print!("{}", view::render(&c));
    Ok(ok)
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_with("warn");

    let cli = Cli::parse();
    let api_url = match cli.api_url.clone() {
        Some(url) => url,
        None => match configs::AppConfig::load_and_validate() {
            Ok(cfg) => cfg.client.api_url,
            Err(e) => {
                error!(error = %e, "cannot load configuration");
                return std::process::ExitCode::FAILURE;
            }
        },
    };

    match run(cli, api_url).await {
        Ok(true) => std::process::ExitCode::SUCCESS,
        Ok(false) => std::process::ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

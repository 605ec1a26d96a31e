use std::env;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use vending_sim::csv::{read_catalog, read_events, write_transcript};
use vending_sim::{Catalog, VendingMachine};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            "warn".parse().expect("static directive is valid"),
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(session) = args.next() else {
        eprintln!("usage: vending-sim <session.csv> [catalog.csv]");
        return ExitCode::from(2);
    };

    if !session.ends_with(".csv") {
        warn!(path = %session, "input file seems to not be a csv file");
    }

    let catalog = match args.next() {
        Some(path) => match read_catalog(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(path, "failed to load catalog: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::standard(),
    };

    let events = match read_events(Path::new(&session)) {
        Ok(events) => events,
        Err(e) => {
            error!(path = %session, "{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut machine = VendingMachine::with_catalog(catalog);
    let (event_sender, event_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in events {
            match result {
                Ok(event) => {
                    if event_sender.send(event).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    machine.run(ReceiverStream::new(event_receiver)).await;

    if let Err(e) = write_transcript(io::stdout().lock(), &machine) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

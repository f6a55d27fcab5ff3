use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};

use wordbattle::config::Config;
use wordbattle::console::{Command, CommandError, Screen, HELP};
use wordbattle::game::{self, GameIntention, GameInteractor};
use wordbattle::logging::init_tracing;
use wordbattle::repository::{GameRepository, HttpWordApi};

/// Shared-screen word translation buzzer game.
#[derive(Debug, Parser)]
#[command(name = "wordbattle", version)]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the word list URL
    #[arg(long)]
    url: Option<String>,

    /// Log filter, e.g. "debug" or "wordbattle=trace"
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = args.url {
        config.words.url = url;
        config.validate()?;
    }
    init_tracing(args.log.as_deref().unwrap_or(&config.logging.filter));

    let api = HttpWordApi::new(&config.words)?;
    tracing::info!(url = %api.url(), "Starting game");
    let repository = Arc::new(GameRepository::new(Arc::new(api)));
    let view_model = game::view_model(GameInteractor::new(repository, &config.game));

    let screen = Arc::new(Mutex::new(Screen::default()));
    let mut states = view_model.states();
    let render_screen = Arc::clone(&screen);
    let renderer = tokio::spawn(async move {
        while let Some(state) = states.recv().await {
            let lines = render_screen.lock().render(&state);
            for line in lines {
                println!("{}", line);
            }
        }
    });

    view_model.process_intentions(futures::stream::iter([GameIntention::Init]));
    let intentions = view_model.intentions();
    println!("{}", HELP);

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = input.next_line() => line?,
            _ = tokio::signal::ctrl_c() => break,
        };
        let Some(line) = line else {
            break;
        };

        let command = screen.lock().parse(&line);
        match command {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Intention(intention)) => {
                if !intentions.send(intention) {
                    break;
                }
            }
            Err(CommandError::Empty) => {}
            Err(err) => println!("{}", err),
        }
    }

    drop(view_model);
    renderer.abort();
    Ok(())
}

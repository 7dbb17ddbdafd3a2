use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use dishub::{
    load_config, load_config_from, render, DishSearch, Key, RequestHandle, UiConfig, UiEvent,
};

const HELP: &str = "Type a dish name to search. Commands: :open N, :close, :help, :quit";

#[derive(Parser, Debug)]
#[command(name = "dishub", version, about = "Search recipes by name and read their details")]
struct Args {
    /// Search for this right away
    query: Option<String>,

    /// Configuration file (defaults to ./dishub.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spoonacular API key (overrides configuration and SPOONACULAR_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Alternative API endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Print the widget as HTML instead of text
    #[arg(long)]
    html: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Open(usize),
    Close,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(Command::Search(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("open"), Some(n)) => n
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(Command::Open)
            .ok_or_else(|| format!("Not a card number: {}", n)),
        (Some("close"), None) => Ok(Command::Close),
        (Some("help"), None) => Ok(Command::Help),
        (Some("quit") | Some("q"), None) => Ok(Command::Quit),
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

struct Terminal {
    widget: DishSearch,
    ui: UiConfig,
    html: bool,
}

impl Terminal {
    async fn apply(&self, request: Option<RequestHandle>) {
        if let Some(request) = request {
            request.settled().await;
        }
        self.show();
    }

    fn show(&self) {
        let state = self.widget.snapshot();
        if self.html {
            println!("{}", render::render_html(&state, &self.ui));
        } else {
            println!("{}\n", render::render_text(&state, &self.ui));
        }
    }

    async fn search(&self, query: String) {
        self.widget.dispatch(UiEvent::QueryChanged(query));
        let request = self.widget.dispatch(UiEvent::KeyPressed(Key::Enter));
        self.apply(request).await;
    }

    async fn open(&self, card: usize) {
        let id = self
            .widget
            .snapshot()
            .search
            .results
            .get(card - 1)
            .map(|dish| dish.id);

        match id {
            Some(id) => {
                let request = self.widget.dispatch(UiEvent::CardClicked(id));
                self.apply(request).await;
            }
            None => eprintln!("No card number {}", card),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    let ui = config.ui.clone();

    let mut builder = DishSearch::builder().config(config);
    if let Some(key) = args.api_key {
        builder = builder.api_key(key);
    }
    if let Some(url) = args.base_url {
        builder = builder.base_url(url);
    }

    let terminal = Terminal {
        widget: builder.build()?,
        ui,
        html: args.html,
    };
    debug!("Using {} recipe service", terminal.widget.service_name());

    match args.query {
        Some(query) => terminal.search(query).await,
        None => {
            eprintln!("{}", HELP);
            terminal.show();
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Search(query)) => terminal.search(query).await,
            Ok(Command::Open(card)) => terminal.open(card).await,
            Ok(Command::Close) => {
                terminal.widget.dispatch(UiEvent::CloseClicked);
                terminal.show();
            }
            Ok(Command::Help) => eprintln!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(message) => eprintln!("{}", message),
        }
    }

    Ok(())
}

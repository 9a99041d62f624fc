//! Command-line front end: inspect or toggle the persisted theme, and render
//! components to stdout.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use duskmode::{
    ComponentRenderer, FileStorage, Host, MemoryDocument, Message, MessageKind, Orientation,
    OsAppearance, PreferenceSource, Separator, StoreConfig, Theme, ThemePreferenceStore,
};

#[derive(Debug, Parser)]
#[command(name = "duskmode", version, about = "Light/dark theme preference and UI components")]
struct Cli {
    /// Preference file the theme is persisted in
    #[arg(long, env = "DUSKMODE_STORE", default_value = ".duskmode.json", global = true)]
    store: PathBuf,

    /// Storage key the theme is kept under
    #[arg(long, default_value = duskmode::theme::DEFAULT_STORAGE_KEY, global = true)]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current theme and where it came from, without saving it
    Show,
    /// Switch to the other theme and persist it
    Toggle,
    /// Render a message banner
    Message {
        #[arg(long, value_enum, default_value_t = KindArg::Success)]
        kind: KindArg,
        text: String,
    },
    /// Render a separator
    Separator {
        #[arg(long)]
        vertical: bool,
        /// Expose the separator to assistive technology
        #[arg(long)]
        semantic: bool,
        #[arg(long, default_value = "")]
        class: String,
        /// Extra attribute as NAME=VALUE; may be repeated
        #[arg(long = "attr", value_name = "NAME=VALUE")]
        attrs: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Success,
    Error,
}

impl From<KindArg> for MessageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Success => MessageKind::Success,
            KindArg::Error => MessageKind::Error,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Show => {
            let (theme, source) =
                ThemePreferenceStore::resolve(&file_host(&cli.store), &store_config(&cli.key));
            print_theme(theme, Some(source));
        }
        Command::Toggle => {
            let mut store = open_store(&cli.store, &cli.key);
            let theme = store.toggle();
            print_theme(theme, None);
        }
        Command::Message { kind, text } => {
            let renderer = ComponentRenderer::new()?;
            let message = Message::new(kind.into(), text);
            println!("{}", renderer.message(Some(&message))?);
        }
        Command::Separator {
            vertical,
            semantic,
            class,
            attrs,
        } => {
            let orientation = if vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let mut separator = Separator::new()
                .orientation(orientation)
                .decorative(!semantic)
                .class(class);
            for raw in &attrs {
                let (name, value) = parse_attr(raw)?;
                separator = separator.attr(name, value);
            }
            let renderer = ComponentRenderer::new()?;
            println!("{}", renderer.separator(&separator)?);
        }
    }
    Ok(())
}

fn file_host(path: &std::path::Path) -> Host {
    Host::new(
        FileStorage::new(path),
        MemoryDocument::new(),
        OsAppearance::new(),
    )
}

fn store_config(key: &str) -> StoreConfig {
    StoreConfig::new().storage_key(key)
}

fn open_store(path: &std::path::Path, key: &str) -> ThemePreferenceStore {
    ThemePreferenceStore::with_config(Some(file_host(path)), store_config(key))
}

fn print_theme(theme: Theme, source: Option<PreferenceSource>) {
    let label = match theme {
        Theme::Dark => style(theme.as_str()).magenta().bold(),
        Theme::Light => style(theme.as_str()).yellow().bold(),
    };
    match source {
        Some(PreferenceSource::Persisted) => println!("{label} (saved preference)"),
        Some(PreferenceSource::Ambient) => println!("{label} (system appearance)"),
        Some(PreferenceSource::Default) => println!("{label} (default)"),
        None => println!("{label}"),
    }
}

fn parse_attr(raw: &str) -> Result<(&str, &str)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("attribute '{raw}' is not NAME=VALUE"))?;
    if name.is_empty() {
        bail!("attribute '{raw}' has an empty name");
    }
    Ok((name, value))
}

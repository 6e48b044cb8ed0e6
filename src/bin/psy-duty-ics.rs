#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use psy_duty_ics::{
    calendar::{CalendarOptions, GenerationStamp},
    export::export_calendars,
    storage::{load_roster, DirectorySink},
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Génère un fichier .ics par personne à partir de l'export JSON du tableau de garde
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Construire les calendriers par personne
    Build {
        /// Export JSON de l'application (duty-roster.json)
        input_json: PathBuf,
        /// Répertoire de sortie
        #[arg(short, long, default_value = "dist/ics")]
        out: PathBuf,
        /// Titre du calendrier (X-WR-CALNAME), suivi du nom
        #[arg(long, default_value = "Psy Duty")]
        title: String,
    },

    /// Servir un répertoire sous un préfixe d'URL (aperçu navigateur)
    #[cfg(feature = "serve")]
    Serve {
        /// Port (0 = choisi automatiquement)
        #[arg(long, default_value_t = 0)]
        port: u16,
        /// Préfixe de montage (ex. /app/ ou /dangjik/)
        #[arg(long, default_value = "/app/")]
        prefix: String,
        /// Répertoire servi
        #[arg(long, default_value = "dist/ics")]
        root: PathBuf,
        /// Ouvre le navigateur sur l'URL servie
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    match cli.cmd {
        Commands::Build {
            input_json,
            out,
            title,
        } => {
            let roster = load_roster(&input_json)?;
            let mut sink = DirectorySink::create(&out)?;
            let stamp = GenerationStamp::now();
            let summary = export_calendars(&roster, &mut sink, &stamp, &CalendarOptions { title })?;
            let dir = sink.dir().canonicalize()?;
            println!("Wrote {} ICS files to {}", summary.count(), dir.display());
        }
        #[cfg(feature = "serve")]
        Commands::Serve {
            port,
            prefix,
            root,
            open,
        } => {
            let config = psy_duty_ics::serve::PreviewConfig {
                root,
                prefix,
                port,
                open_browser: open,
            };
            tokio::runtime::Runtime::new()?.block_on(psy_duty_ics::serve::run(config))?;
        }
    }

    Ok(())
}

#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use shiftplan::{
    report::{ReportRenderer, TextReport},
    scheduler::{AssignOptions, RandomSelector, Scheduler, ValidationPolicy},
    storage::{FileFormat, PreferenceFile, PreferenceSource, ScheduleFile, ScheduleSink},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier de préférences (.json, .yaml/.yml ou .csv)
    #[arg(long, global = true, default_value = "preferences.json")]
    preferences: String,

    /// Nombre maximal de jours travaillés par semaine
    #[arg(long, global = true, default_value_t = 5)]
    max_work_days: u8,

    /// Contrôle des préférences : tous les employés, ou arrêt au premier fautif
    #[arg(long, global = true, value_enum, default_value_t = Validation::All)]
    validation: Validation,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Validation {
    All,
    Halt,
}

impl From<Validation> for ValidationPolicy {
    fn from(v: Validation) -> Self {
        match v {
            Validation::All => ValidationPolicy::CollectAll,
            Validation::Halt => ValidationPolicy::HaltOnFirst,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer le planning de la semaine
    Assign {
        /// Effectif maximal par créneau
        #[arg(long, default_value_t = 2)]
        staffing_cap: u8,
        /// Graine du complément aléatoire (reproductible)
        #[arg(long)]
        seed: Option<u64>,
        /// Désactive le complément des créneaux en sous-effectif
        #[arg(long)]
        no_backfill: bool,
        /// Écrit le planning en JSON, quelle que soit l'extension
        #[arg(long)]
        out_json: Option<String>,
        /// Écrit le planning en YAML, quelle que soit l'extension
        #[arg(long)]
        out_yaml: Option<String>,
        /// Écrit le planning en CSV, quelle que soit l'extension
        #[arg(long)]
        out_csv: Option<String>,
        /// Affiche la provenance (repli, complément) des affectations
        #[arg(long)]
        show_origin: bool,
        /// Code de sortie 2 si un avertissement est émis
        #[arg(long)]
        strict: bool,
    },

    /// Vérifier les préférences sans planifier
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let store = PreferenceFile::open(&cli.preferences)?.load()?;

    let code = match cli.cmd {
        Commands::Assign {
            staffing_cap,
            seed,
            no_backfill,
            out_json,
            out_yaml,
            out_csv,
            show_origin,
            strict,
        } => {
            let opts = AssignOptions {
                max_work_days: cli.max_work_days,
                staffing_cap,
                validation: cli.validation.into(),
                backfill: !no_backfill,
            };
            let mut scheduler = Scheduler::new(opts)?;
            let mut selector = match seed {
                Some(seed) => RandomSelector::new(seed),
                None => RandomSelector::from_entropy(),
            };
            let report = scheduler.run(&store, &mut selector)?;

            let outputs = [
                (out_json, FileFormat::Json),
                (out_yaml, FileFormat::Yaml),
                (out_csv, FileFormat::Csv),
            ];
            for (path, format) in outputs {
                if let Some(path) = path {
                    ScheduleFile::with_format(path, format).save(scheduler.schedule())?;
                }
            }

            let renderer = TextReport {
                with_origin: show_origin,
            };
            let text = renderer.render(scheduler.schedule(), &report);
            for line in text.lines() {
                if line.starts_with("warning:") {
                    eprintln!("{line}");
                } else {
                    println!("{line}");
                }
            }
            println!(
                "{} employee(s) scheduled, {} shift(s) backfilled",
                scheduler.schedule().len(),
                report.backfilled
            );

            // Code 2 = WARNING/INCOMPLETE
            if strict && report.has_warnings() {
                2
            } else {
                0
            }
        }
        Commands::Validate => {
            let opts = AssignOptions {
                max_work_days: cli.max_work_days,
                validation: cli.validation.into(),
                ..AssignOptions::default()
            };
            let violations = Scheduler::new(opts)?.validate(&store);
            if violations.is_empty() {
                println!("OK: {} employee(s), no violations", store.len());
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    eprintln!("{v}");
                }
                2
            }
        }
    };

    std::process::exit(code);
}

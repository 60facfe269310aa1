use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use eyre::Result;
use jiff::civil::Date;
use uuid::Uuid;

use odonto_cli::aws;
use odonto_cli::chart;
use odonto_cli::config::{self, CredentialSource, SurveyConfig};
use odonto_core::form::{SubmissionMeta, SurveyForm};
use odonto_core::models::patient::{Gender, Referral};
use odonto_core::models::survey::SurveyRecord;
use odonto_core::store_keys::DEFAULT_APP_ID;
use odonto_export::render::render_detail;
use odonto_export::rows::format_date;
use odonto_export::xlsx::{export_file_name, write_workbook};
use odonto_storage::subscription::SubscriptionEvent;
use odonto_storage::surveys::SurveyStore;

#[derive(Subcommand)]
pub enum Command {
    /// Validate credentials and save the configuration
    Configure {
        #[arg(long)]
        region: String,
        #[arg(long)]
        bucket: String,
        /// Application id; examiners sharing it share one record set
        #[arg(long, default_value = DEFAULT_APP_ID)]
        app_id: String,
        /// Named AWS profile
        #[arg(long, conflicts_with = "access_key_id")]
        profile: Option<String>,
        #[arg(long, requires = "secret_access_key")]
        access_key_id: Option<String>,
        #[arg(long, requires = "access_key_id")]
        secret_access_key: Option<String>,
        #[arg(long, requires = "access_key_id")]
        session_token: Option<String>,
    },
    /// Show the current configuration (credentials redacted)
    Config,
    /// Show or change the shared session id
    Session {
        /// New session id
        id: Option<String>,
    },
    /// Fill in and submit a survey
    New(NewSurvey),
    /// List stored surveys, newest first
    List,
    /// Show one survey in detail
    Show { id: Uuid },
    /// Delete a stored survey
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export every stored survey to an XLSX spreadsheet
    Export {
        /// Output path (default: DataSurveiGigi_<today>.xlsx)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Follow the record set live
    Watch {
        #[arg(long, default_value_t = 5)]
        interval_secs: u64,
    },
    /// Print both condition code alphabets
    Codes,
}

#[derive(Args)]
pub struct NewSurvey {
    #[arg(long)]
    name: String,
    /// Age in years
    #[arg(long)]
    age: u32,
    #[arg(long, default_value = "Laki-laki")]
    gender: Gender,
    /// YYYY-MM-DD
    #[arg(long)]
    birth_date: Option<Date>,
    #[arg(long, default_value = "")]
    occupation: String,
    #[arg(long, default_value = "")]
    address: String,
    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    exam_date: Option<Date>,
    #[arg(long)]
    bleeding_gums: bool,
    #[arg(long)]
    mucosal_lesion: bool,
    #[arg(long, default_value = "")]
    recommendation: String,
    #[arg(long, default_value = "Tidak Dirujuk")]
    referral: Referral,
    /// Tooth condition, e.g. `--tooth 16=1 --tooth 55=B`
    #[arg(long = "tooth", value_name = "N=CODE", value_parser = parse_tooth_edit)]
    teeth: Vec<ToothEdit>,
    /// Show the chart and indices without saving
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone)]
struct ToothEdit {
    tooth: u8,
    code: String,
}

fn parse_tooth_edit(s: &str) -> Result<ToothEdit, String> {
    let (tooth, code) = s
        .split_once('=')
        .ok_or_else(|| format!("expected N=CODE, got '{s}'"))?;
    let tooth = tooth
        .trim()
        .parse()
        .map_err(|_| format!("invalid tooth number '{tooth}'"))?;
    Ok(ToothEdit {
        tooth,
        code: code.trim().to_string(),
    })
}

pub async fn run(command: Command) -> Result<()> {
    match command {
        Command::Configure {
            region,
            bucket,
            app_id,
            profile,
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            let credentials = match (profile, access_key_id, secret_access_key) {
                (Some(profile_name), _, _) => CredentialSource::Profile { profile_name },
                (None, Some(access_key_id), Some(secret_access_key)) => CredentialSource::Inline {
                    access_key_id,
                    secret_access_key,
                    session_token,
                },
                _ => CredentialSource::DefaultChain,
            };
            configure(region, bucket, app_id, credentials).await
        }
        Command::Config => {
            let config = config::load_config()?;
            println!("{}", serde_json::to_string_pretty(&config::config_info(&config))?);
            Ok(())
        }
        Command::Session { id } => session(id),
        Command::New(args) => new_survey(args).await,
        Command::List => {
            let store = open_store(&config::load_config()?).await;
            print_table(&store.list().await?);
            Ok(())
        }
        Command::Show { id } => {
            let store = open_store(&config::load_config()?).await;
            let record = store.get(id).await?;
            print!("{}", render_detail(&record)?);
            Ok(())
        }
        Command::Delete { id, yes } => delete(id, yes).await,
        Command::Export { out } => export(out).await,
        Command::Watch { interval_secs } => watch(Duration::from_secs(interval_secs.max(1))).await,
        Command::Codes => {
            print!("{}", chart::render_catalog());
            Ok(())
        }
    }
}

async fn configure(
    region: String,
    bucket: String,
    app_id: String,
    credentials: CredentialSource,
) -> Result<()> {
    let sdk = aws::build_aws_config(&region, &credentials).await;
    let identity = aws::validate_credentials(&sdk).await?;
    tracing::info!(arn = %identity.arn, "credentials validated");

    // Keep a session id the examiner already chose.
    let session_id = config::existing_session_id_in(&config::config_dir()?)
        .unwrap_or_else(|| identity.user_id.clone());

    let config = SurveyConfig {
        config_version: 0,
        region,
        bucket,
        app_id,
        created_by: identity.user_id,
        session_id,
        created_at: jiff::Timestamp::now(),
        credentials,
    };
    config::save_config(&config)?;
    println!("{}", serde_json::to_string_pretty(&config::config_info(&config))?);
    Ok(())
}

fn session(id: Option<String>) -> Result<()> {
    let mut config = config::load_config()?;
    if let Some(id) = id {
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err(eyre::eyre!("session id cannot be empty"));
        }
        config.session_id = id;
        config::save_config(&config)?;
    }
    println!("{}", config.session_id);
    Ok(())
}

async fn new_survey(args: NewSurvey) -> Result<()> {
    let today = jiff::Zoned::now().date();
    let mut form = SurveyForm::new(args.exam_date.unwrap_or(today));
    form.name = args.name;
    form.gender = args.gender;
    form.birth_date = args.birth_date;
    form.occupation = args.occupation;
    form.address = args.address;
    form.bleeding_gums = args.bleeding_gums;
    form.oral_mucosal_lesion = args.mucosal_lesion;
    form.recommendation = args.recommendation;
    form.referral = args.referral;

    form.set_age(Some(args.age));
    for edit in &args.teeth {
        form.set_tooth(edit.tooth, &edit.code)?;
    }

    print!("{}", chart::render_odontogram(form.teeth()));
    let findings = chart::render_findings(form.teeth());
    if !findings.is_empty() {
        println!("Temuan:");
        print!("{findings}");
    }
    print!("{}", chart::render_indices(&form.indices()));

    if args.dry_run {
        return Ok(());
    }

    let config = config::load_config()?;
    let record = form.submit(SubmissionMeta {
        created_by: config.created_by.clone(),
        session_id: config.session_id.clone(),
        created_at: jiff::Timestamp::now(),
    })?;

    let store = open_store(&config).await;
    store.create(&record).await?;
    println!("saved {}", record.id);
    Ok(())
}

async fn delete(id: Uuid, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Hapus data survei {id}? Tindakan ini tidak dapat dibatalkan. [y/N] "))? {
        println!("Batal");
        return Ok(());
    }
    let store = open_store(&config::load_config()?).await;
    store.delete(id).await?;
    println!("deleted {id}");
    Ok(())
}

async fn export(out: Option<PathBuf>) -> Result<()> {
    let store = open_store(&config::load_config()?).await;
    let records = store.list().await?;
    let bytes = write_workbook(&records)?;

    let path = out.unwrap_or_else(|| PathBuf::from(export_file_name(jiff::Zoned::now().date())));
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), records = records.len(), "export written");
    println!("{}", path.display());
    Ok(())
}

async fn watch(interval: Duration) -> Result<()> {
    let store = open_store(&config::load_config()?).await;
    let mut subscription = store.subscribe(interval);

    loop {
        tokio::select! {
            event = subscription.next() => match event {
                Some(SubscriptionEvent::Snapshot(records)) => {
                    println!("--- {} ---", jiff::Zoned::now().strftime("%H:%M:%S"));
                    print_table(&records);
                }
                Some(SubscriptionEvent::Error(message)) => {
                    eprintln!("Gagal mengambil data dari database: {message}");
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    subscription.unsubscribe();
    Ok(())
}

async fn open_store(config: &SurveyConfig) -> SurveyStore {
    let sdk = aws::build_aws_config(&config.region, &config.credentials).await;
    let client = aws_sdk_s3::Client::new(&sdk);
    SurveyStore::new(client, config.bucket.clone(), config.app_id.clone())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "ya" | "yes"))
}

fn print_table(records: &[SurveyRecord]) {
    if records.is_empty() {
        println!("Belum ada data survei.");
        return;
    }
    println!(
        "{:<36}  {:<24} {:>4}  {:<12} {}",
        "ID", "Nama", "Usia", "Tgl Periksa", "Rujukan"
    );
    for r in records {
        println!(
            "{:<36}  {:<24} {:>4}  {:<12} {}",
            r.id,
            r.patient.name,
            r.patient.age,
            format_date(Some(r.examination.date)),
            r.examination.referral
        );
    }
}

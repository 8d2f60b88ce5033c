//! Hirewatch CLI - interactive vacancy ingestion and query menu
//!
//! Composition root: wires the SQLite repositories and the HTTP vacancy
//! client into the core services, then drives a numbered text menu.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hirewatch_core::application::{load_companies, IngestService};
use hirewatch_core::domain::{CompanyVacancyCount, VacancyListing};
use hirewatch_core::port::VacancyRepository;
use hirewatch_infra_http::{HhClient, DEFAULT_BASE_URL};
use hirewatch_infra_sqlite::{
    create_pool, ensure_schema, tables_exist, SqliteCompanyRepository, SqliteVacancyRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "hirewatch")]
#[command(about = "Vacancy ingestion and query menu", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database path
    #[arg(long, env = "HIREWATCH_DB_PATH", default_value = "hirewatch.db")]
    db: String,

    /// Seed file with the companies to track
    #[arg(long, env = "HIREWATCH_SEED_PATH", default_value = "data/companies.json")]
    seed: PathBuf,

    /// Base URL of the vacancy API
    #[arg(long, env = "HIREWATCH_API_BASE", default_value = DEFAULT_BASE_URL)]
    api_base: String,
}

#[derive(Tabled)]
struct CountRow {
    company: String,
    vacancies: i64,
}

#[derive(Tabled)]
struct ListingRow {
    company: String,
    title: String,
    salary: String,
    url: String,
}

fn salary_cell(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", min, max),
        (Some(min), None) => format!("from {}", min),
        (None, Some(max)) => format!("up to {}", max),
        (None, None) => "n/a".to_string(),
    }
}

fn print_counts(counts: &[CompanyVacancyCount]) {
    let rows: Vec<CountRow> = counts
        .iter()
        .map(|c| CountRow {
            company: c.name.clone(),
            vacancies: c.vacancies,
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn print_listings(listings: &[VacancyListing]) {
    if listings.is_empty() {
        println!("{}", "No vacancies found".yellow());
        return;
    }
    let rows: Vec<ListingRow> = listings
        .iter()
        .map(|v| ListingRow {
            company: v.company_name.clone(),
            title: v.title.clone(),
            salary: salary_cell(v.salary_min, v.salary_max),
            url: v.url.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn print_menu() {
    println!();
    println!("{}", "Hirewatch".cyan().bold());
    println!("1. Create tables");
    println!("2. Load data from the vacancy API");
    println!("3. Companies with vacancy counts");
    println!("4. All vacancies");
    println!("5. Average salary");
    println!("6. Vacancies with above-average salary");
    println!("7. Search vacancies by keyword");
    println!("8. Exit");
}

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

struct App {
    pool: sqlx::SqlitePool,
    vacancies: Arc<SqliteVacancyRepository>,
    ingest: IngestService,
}

impl App {
    async fn dispatch(&self, choice: &str) -> Result<bool> {
        match choice {
            "1" => {
                if tables_exist(&self.pool).await? {
                    println!("{}", "Tables already exist".yellow());
                } else {
                    ensure_schema(&self.pool).await?;
                    println!("{}", "✓ Tables created".green());
                }
            }
            "2" => {
                let report = self.ingest.run().await?;
                println!(
                    "{}",
                    format!(
                        "✓ Ingestion finished: {} vacancies from {} companies",
                        report.inserted, report.companies_ok
                    )
                    .green()
                    .bold()
                );
                if report.skipped_records > 0 {
                    println!(
                        "{}",
                        format!("{} malformed records skipped", report.skipped_records).yellow()
                    );
                }
                for (employer_id, error) in &report.failed_companies {
                    println!(
                        "{}",
                        format!("✗ employer {} failed: {}", employer_id, error).red()
                    );
                }
            }
            "3" => {
                let counts = self.vacancies.counts_by_company().await?;
                print_counts(&counts);
            }
            "4" => {
                let listings = self.vacancies.list_all().await?;
                print_listings(&listings);
            }
            "5" => match self.vacancies.average_salary().await? {
                Some(avg) => println!("Average salary across vacancies: {:.2}", avg),
                None => println!("{}", "No vacancies loaded yet".yellow()),
            },
            "6" => {
                let listings = self.vacancies.with_salary_above_average().await?;
                print_listings(&listings);
            }
            "7" => {
                let keyword = prompt("Keyword: ")?;
                let listings = self.vacancies.search_by_title(&keyword).await?;
                print_listings(&listings);
            }
            "8" => return Ok(false),
            other => {
                println!("{}", format!("Unknown choice: {}", other).yellow());
            }
        }
        Ok(true)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging: pretty for development, json when asked for
    let log_format = std::env::var("HIREWATCH_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("hirewatch=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Hirewatch v{} starting...", VERSION);

    // Database: one pool for the process lifetime
    let pool = create_pool(&cli.db).await?;
    ensure_schema(&pool).await?;

    // DI wiring
    let companies = Arc::new(SqliteCompanyRepository::new(pool.clone()));
    let vacancies = Arc::new(SqliteVacancyRepository::new(pool.clone()));
    let api = Arc::new(HhClient::with_base_url(&cli.api_base));

    // Seed set loads once at startup; malformed seed data is fatal here
    load_companies(companies.as_ref(), &cli.seed).await?;

    let app = App {
        pool: pool.clone(),
        vacancies: vacancies.clone(),
        ingest: IngestService::new(companies, vacancies, api),
    };

    loop {
        print_menu();
        let choice = prompt("Choice: ")?;

        // A failing action prints a diagnostic and returns to the prompt;
        // the menu loop itself never dies on it.
        match app.dispatch(&choice).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("{}", format!("✗ {}", e).red().bold()),
        }
    }

    info!("Shutdown complete.");
    Ok(())
}

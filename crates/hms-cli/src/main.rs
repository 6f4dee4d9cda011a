use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use hms_cli::admin::create_admin;
use hms_cli::seeder::{self, SeedConfig};
use hms_config::database::DatabaseConfig;
use hms_db::{SqlitePool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "hms-cli")]
#[command(about = "HMS CLI - Administrative tools for the hospital API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake patients, doctors, medicines, staff and appointments
    Seed {
        /// Number of patients to create
        #[arg(long, default_value = "50")]
        patients: usize,

        /// Number of doctors to create
        #[arg(long, default_value = "10")]
        doctors: usize,

        /// Number of medicines to create
        #[arg(long, default_value = "30")]
        medicines: usize,

        /// Number of staff members to create
        #[arg(long, default_value = "15")]
        staff: usize,

        /// Number of appointments to create
        #[arg(long, default_value = "40")]
        appointments: usize,

        /// Also create one demo login per non-admin role
        #[arg(long)]
        accounts: bool,
    },
    /// Clear all records (keeps user accounts)
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;

    let result = match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&pool, name, email, password).await,
        Commands::Seed {
            patients,
            doctors,
            medicines,
            staff,
            appointments,
            accounts,
        } => {
            let config = SeedConfig {
                patients,
                doctors,
                medicines,
                staff,
                appointments,
                role_accounts: accounts,
            };
            seeder::seed_all(&pool, config).await.map(|_| ())
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_create_admin(
    pool: &SqlitePool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name")
            .interact_text()
            .context("Failed to read name")?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    create_admin(pool, &name, &email, &password)
        .await
        .context("Error creating admin")?;

    println!("\n✅ Admin created successfully!");
    println!("   Email: {}", email);
    println!("   Name: {}", name);
    Ok(())
}

//! sqlcast CLI
//!
//! Resolves MySQL column types and constraint names, and runs catalog
//! lookups against a live server.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::mysql::MySqlPoolOptions;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlcast_core::{Dialect, FieldDescriptor};
use sqlcast_mysql::{MysqlDialect, PoolCatalog};

/// MySQL schema translation.
#[derive(Parser)]
#[command(name = "sqlcast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (only needed by catalog commands).
    #[arg(short, long, env = "DATABASE_URL")]
    database: Option<String>,

    /// Maximum number of pooled connections.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the column type of every field in a descriptor file.
    ColumnTypes {
        /// JSON array of field descriptors, or `-` to read stdin.
        input: PathBuf,
    },

    /// Print the foreign key constraint name for a column.
    FkName {
        /// Table holding the foreign key column.
        table: String,
        /// Foreign key column.
        field: String,
        /// Referenced table.
        dest: String,
    },

    /// Print the database the connection is using.
    CurrentDatabase,

    /// Report whether a foreign key constraint exists.
    HasFk {
        /// Table holding the constraint.
        table: String,
        /// Constraint name.
        name: String,
    },

    /// Drop an index.
    DropIndex {
        /// Table holding the index.
        table: String,
        /// Index name.
        index: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = MysqlDialect::new();

    match &cli.command {
        Commands::ColumnTypes { input } => {
            for mut field in read_descriptors(input)? {
                let sql_type = dialect
                    .data_type_of(&mut field)
                    .with_context(|| format!("resolving field `{}`", field.name))?;
                println!("{}\t{sql_type}", field.name);
            }
        }

        Commands::FkName { table, field, dest } => {
            println!("{}", dialect.build_foreign_key_name(table, field, dest));
        }

        Commands::CurrentDatabase => {
            let catalog = connect(&cli).await?;
            println!("{}", dialect.current_database(&catalog).await);
        }

        Commands::HasFk { table, name } => {
            let catalog = connect(&cli).await?;
            println!("{}", dialect.has_foreign_key(&catalog, table, name).await);
        }

        Commands::DropIndex { table, index } => {
            let catalog = connect(&cli).await?;
            dialect.remove_index(&catalog, table, index).await?;
            info!("Dropped index {index} on {table}.");
        }
    }

    Ok(())
}

async fn connect(cli: &Cli) -> anyhow::Result<PoolCatalog> {
    let url = cli
        .database
        .as_deref()
        .context("no database URL; pass --database or set DATABASE_URL")?;
    let pool = MySqlPoolOptions::new()
        .max_connections(cli.max_connections)
        .connect(url)
        .await?;
    Ok(PoolCatalog::new(pool))
}

fn read_descriptors(input: &Path) -> anyhow::Result<Vec<FieldDescriptor>> {
    let json = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?
    };
    serde_json::from_str(&json).context("parsing field descriptors")
}

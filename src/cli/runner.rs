//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::etl::EtlStore;
use crate::http::HttpClient;
use crate::schema::{infer_schema_opt, resolve, to_table};
use crate::server;
use crate::types::JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Infer { file, path, to_db } => self.infer(file, path, *to_db),
            Commands::Fetch { pipeline, etl_dir } => self.fetch(pipeline, etl_dir).await,
            Commands::Serve { port, etl_dir } => self.serve(*port, etl_dir.clone()).await,
        }
    }

    fn infer(&self, file: &Path, path: &str, to_db: bool) -> Result<()> {
        let text = fs::read_to_string(file)?;
        let value: JsonValue = serde_json::from_str(&text)?;

        let narrowed = resolve(&value, path);
        let schema = infer_schema_opt(narrowed, path);

        let output = if to_db {
            serde_json::to_string_pretty(&to_table(Some(&schema)))?
        } else {
            serde_json::to_string_pretty(&schema)?
        };

        println!("{output}");
        Ok(())
    }

    async fn fetch(&self, pipeline: &str, etl_dir: &Path) -> Result<()> {
        let store = EtlStore::new(etl_dir);
        let client = HttpClient::new();

        let records = store.fetch(pipeline, &client).await?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        Ok(())
    }

    async fn serve(&self, port: Option<u16>, etl_dir: Option<PathBuf>) -> Result<()> {
        let mut settings = Settings::from_env();
        if let Some(port) = port {
            settings.port = port;
        }
        if let Some(dir) = etl_dir {
            settings.etl_dir = dir;
        }

        server::serve(settings).await
    }
}

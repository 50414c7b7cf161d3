//! CLI for the flowio file-system helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use flowio_core::checksum::DigestAlgorithm;
use flowio_core::config;
use std::path::Path;

use commands::{
    run_checksum, run_delete, run_ext, run_gzip, run_list, run_mkdirs, run_size, run_untar,
    run_unzip_jar,
};

/// Top-level CLI for flowio.
#[derive(Debug, Parser)]
#[command(name = "flowio")]
#[command(about = "flowio: checksums, recursive listing/deletion and archive helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Unit for `flowio size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeUnit {
    B,
    Kib,
    Mib,
}

fn parse_algorithm(s: &str) -> Result<DigestAlgorithm, String> {
    s.parse::<DigestAlgorithm>().map_err(|e| e.to_string())
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the MD5 / SHA-1 / SHA-256 digest of a file or URL.
    Checksum {
        /// Local path or http(s)/ftp URL.
        source: String,
        /// Digest algorithm (md5, sha-1, sha-256). Defaults to the configured one.
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<DigestAlgorithm>,
    },

    /// List everything beneath a directory, depth-first.
    List {
        /// Directory to list.
        dir: String,
        /// Print each directory before its contents instead of after.
        #[arg(long)]
        pre_order: bool,
        /// Descend into symbolic links to directories.
        #[arg(long)]
        follow_symlinks: bool,
    },

    /// Delete a directory and everything beneath it.
    Delete {
        /// Directory to delete.
        dir: String,
    },

    /// Extract a JAR (zip) archive into a directory.
    UnzipJar {
        /// Path to the JAR.
        jar: String,
        /// Destination directory.
        dest: String,
    },

    /// Unpack a .tar.gz archive into a directory (created if missing).
    Untar {
        /// Path to the archive.
        archive: String,
        /// Destination directory.
        dest: String,
    },

    /// Gzip-compress a single file.
    Gzip {
        /// File to compress.
        source: String,
        /// Output file.
        target: String,
    },

    /// Print the size of a file.
    Size {
        /// Path to the file.
        file: String,
        #[arg(long, value_enum, default_value = "b")]
        unit: SizeUnit,
    },

    /// Print the extension of a file name, or the name without it.
    Ext {
        /// File name or path.
        path: String,
        /// Print the name with its extension removed instead.
        #[arg(long)]
        strip: bool,
    },

    /// Create several directories under a location.
    Mkdirs {
        /// Existing parent directory.
        location: String,
        /// Directory names to create.
        #[arg(required = true)]
        names: Vec<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Checksum { source, algorithm } => {
                run_checksum(&cfg, &source, algorithm).await?
            }
            CliCommand::List {
                dir,
                pre_order,
                follow_symlinks,
            } => run_list(&cfg, Path::new(&dir), pre_order, follow_symlinks).await?,
            CliCommand::Delete { dir } => run_delete(Path::new(&dir)).await?,
            CliCommand::UnzipJar { jar, dest } => {
                run_unzip_jar(Path::new(&jar), Path::new(&dest)).await?
            }
            CliCommand::Untar { archive, dest } => {
                run_untar(Path::new(&archive), Path::new(&dest)).await?
            }
            CliCommand::Gzip { source, target } => {
                run_gzip(Path::new(&source), Path::new(&target)).await?
            }
            CliCommand::Size { file, unit } => run_size(Path::new(&file), unit),
            CliCommand::Ext { path, strip } => run_ext(&path, strip),
            CliCommand::Mkdirs { location, names } => run_mkdirs(Path::new(&location), &names)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use foldview_core::{predict, DEMO_SEQUENCE};
use foldview_fetch::{FoldClient, ESM_ATLAS_URL};
use log::info;

use crate::viewer;

/// Fold a protein sequence with the ESM Atlas API and report the predicted
/// structure with its plDDT confidence.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Protein sequence, pasted as-is (FASTA headers, digits and
    /// whitespace are stripped automatically)
    sequence: Option<String>,

    /// Read the sequence text from a file instead; replaces SEQUENCE
    #[arg(short, long, value_name = "PATH")]
    fasta: Option<PathBuf>,

    /// Directory where predicted.pdb and viewer.html are written
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Prediction endpoint
    #[arg(long, default_value = ESM_ATLAS_URL)]
    url: String,

    /// Bound the request to this many seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Fold the built-in 300-residue demo sequence
    #[arg(long)]
    demo: bool,

    /// Do not write the viewer.html page
    #[arg(long)]
    no_viewer: bool,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let raw = self.raw_input()?;

        let mut client = FoldClient::with_url(&self.url);
        if let Some(secs) = self.timeout {
            client = client.with_timeout(Duration::from_secs(secs));
        }

        let prediction = predict(&raw, &client)?;

        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("could not create {}", self.out_dir.display()))?;

        let pdb_path = self.out_dir.join("predicted.pdb");
        fs::write(&pdb_path, &prediction.pdb)
            .with_context(|| format!("could not write {}", pdb_path.display()))?;
        info!("wrote {}", pdb_path.display());
        println!("structure: {}", pdb_path.display());

        if !self.no_viewer {
            let viewer_path = self.out_dir.join("viewer.html");
            viewer::write_page(&viewer_path, &prediction.pdb)?;
            println!("viewer:    {}", viewer_path.display());
        }

        println!("plDDT:     {}", prediction.confidence);
        println!("plDDT is a per-residue estimate of prediction confidence on a scale from 0-100.");
        Ok(())
    }

    /// Resolve the raw text to sanitize: an uploaded file wins over pasted
    /// text, `--demo` fills in the built-in sequence, and with nothing else
    /// the text is read from stdin.
    fn raw_input(&self) -> Result<String> {
        if let Some(path) = &self.fasta {
            return fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()));
        }
        if let Some(sequence) = &self.sequence {
            return Ok(sequence.clone());
        }
        if self.demo {
            return Ok(DEMO_SEQUENCE.to_string());
        }
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("could not read a sequence from stdin")?;
        Ok(buffer)
    }
}

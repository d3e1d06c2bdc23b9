//! Inspect command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use punkt_core::Parameters;

use crate::model;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Trained model (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub model: PathBuf,

    /// Which part of the model to show
    #[arg(short, long, value_enum, default_value = "all")]
    pub section: Section,
}

/// Parts of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Abbreviations,
    Collocations,
    Starters,
    /// Orthographic context of every type
    Ortho,
    /// Everything except orthographic contexts, which are only counted
    All,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let params = model::load(&self.model)?;
        print!("{}", render(&params, self.section));
        Ok(())
    }
}

fn render(params: &Parameters, section: Section) -> String {
    let mut out = String::new();
    let all = section == Section::All;

    if all || section == Section::Abbreviations {
        out.push_str(&format!("Abbreviations ({}):\n", params.abbreviation_count()));
        for typ in params.abbreviations() {
            out.push_str(&format!("  {typ}\n"));
        }
    }
    if all || section == Section::Collocations {
        out.push_str(&format!("Collocations ({}):\n", params.collocation_count()));
        for (first, second) in params.collocations() {
            out.push_str(&format!("  {first} {second}\n"));
        }
    }
    if all || section == Section::Starters {
        out.push_str(&format!(
            "Sentence starters ({}):\n",
            params.sentence_starter_count()
        ));
        for typ in params.sentence_starters() {
            out.push_str(&format!("  {typ}\n"));
        }
    }
    if section == Section::Ortho {
        for (typ, context) in params.ortho_contexts() {
            out.push_str(&format!("  {typ}: {context}\n"));
        }
    }
    if all {
        out.push_str(&format!(
            "Orthographic contexts: {}\n",
            params.ortho_context_count()
        ));
    }
    out
}

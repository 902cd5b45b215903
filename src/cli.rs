//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: interactive search session (default)
//! - **search**: one-shot search with facet flags
//! - **labels**: print the active filter labels a set of facet flags produces
//! - **vocab**: list the manufacturer, genre and additive vocabularies
//!
//! # Examples
//!
//! ```bash
//! addiless search スミノフ
//! addiless search --additive 香料 --genre チューハイ
//! addiless search --additive-mode none --format json
//! addiless labels --manufacturer サントリー --genre ビール --genre 焼酎
//! addiless vocab genres
//! ```

use crate::facets::{AdditiveMode, Vocabulary};
use crate::output::OutputFormat;
use crate::state::Action;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addiless")]
#[command(about = "Search alcoholic beverages by name, brand, genre and declared additives", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON catalog to load instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive search session
    #[command(visible_alias = "b")]
    Browse,

    /// Search the catalog once and print matching products
    #[command(visible_alias = "s")]
    Search {
        /// Free text matched against name, brand and genre
        query: Option<String>,

        #[command(flatten)]
        facets: FacetArgs,

        /// Remove an active filter label after applying the facets
        #[arg(long = "remove", value_name = "LABEL")]
        remove: Vec<String>,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the active filter labels for a facet selection
    #[command(visible_alias = "l")]
    Labels {
        #[command(flatten)]
        facets: FacetArgs,
    },

    /// List facet vocabularies
    Vocab {
        /// Which vocabulary to list (all when omitted)
        #[arg(value_enum)]
        vocabulary: Option<VocabVariant>,
    },
}

/// Vocabulary argument for the vocab command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabVariant {
    Manufacturers,
    Genres,
    Additives,
}

impl From<VocabVariant> for Vocabulary {
    fn from(variant: VocabVariant) -> Self {
        match variant {
            VocabVariant::Manufacturers => Self::Manufacturers,
            VocabVariant::Genres => Self::Genres,
            VocabVariant::Additives => Self::Additives,
        }
    }
}

/// Facet flags shared by search and labels
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetArgs {
    /// Additive condition: has, none, dont-care, unspecified (or あり, なし, ありでない, 指定しない)
    #[arg(long, value_name = "MODE")]
    pub additive_mode: Option<AdditiveMode>,

    /// Require a specific additive (repeatable; implies --additive-mode has)
    #[arg(long = "additive", value_name = "NAME")]
    pub additives: Vec<String>,

    /// Restrict to one manufacturer ("all" for none)
    #[arg(long, value_name = "NAME")]
    pub manufacturer: Option<String>,

    /// Restrict to a genre (repeatable; all given genres must match)
    #[arg(long = "genre", value_name = "NAME")]
    pub genres: Vec<String>,
}

impl FacetArgs {
    /// The reducer actions these flags stand for, in dispatch order
    ///
    /// Additives without an explicit mode select the "has" mode.
    #[must_use]
    pub fn to_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        let mode = match self.additive_mode {
            Some(mode) => Some(mode),
            None if !self.additives.is_empty() => Some(AdditiveMode::Has),
            None => None,
        };
        if let Some(mode) = mode {
            actions.push(Action::SetAdditiveMode(mode));
        }
        if !self.additives.is_empty() {
            actions.push(Action::SetChosenAdditives(self.additives.clone()));
        }
        if let Some(manufacturer) = &self.manufacturer {
            actions.push(Action::SetManufacturer(manufacturer.clone()));
        }
        if !self.genres.is_empty() {
            actions.push(Action::SetGenres(self.genres.clone()));
        }

        actions
    }
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, defaulting to browse
    #[must_use]
    pub fn take_command(&mut self) -> Commands {
        self.command.take().unwrap_or(Commands::Browse)
    }
}

//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Rating, SkillLevel, TerrainContext};

pub mod commands;

/// Turn Lab - ski skill progression and recommendation engine
#[derive(Parser, Debug)]
#[command(name = "turnlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/turnlab/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skill catalog JSON path
    #[arg(long, global = true, env = "TURNLAB_CATALOG", default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Assessment database path (default: platform data dir)
    #[arg(long, global = true, env = "TURNLAB_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set your assessed level and compute fair-access grants
    Init {
        /// Assessed level from onboarding
        #[arg(long, value_parser = parse_level)]
        level: SkillLevel,
    },
    /// Record a self-assessment for a skill
    Assess {
        /// Skill ID
        skill_id: String,
        /// Terrain context tag (groomed_green, bumps, powder, ...)
        #[arg(long, value_parser = parse_context)]
        context: TerrainContext,
        /// Rating (needs_work, developing, confident, mastered)
        #[arg(long, value_parser = parse_rating)]
        rating: Rating,
        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show progress toward the next level
    Progress {
        /// Level to inspect (defaults to your current level)
        #[arg(long, value_parser = parse_level)]
        level: Option<SkillLevel>,
    },
    /// Suggest skills to work on next
    Suggest {
        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show overall progress statistics
    Stats,
    /// Check whether a skill is accessible to you
    Access {
        /// Skill ID
        skill_id: String,
    },
    /// List recent assessments
    History {
        /// Window in days
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Delete an assessment by ID
    Delete {
        /// Assessment ID
        assessment_id: String,
    },
    /// Advance to the next level if the threshold is cleared
    Advance,
    /// Show or set your focus skill
    Focus {
        /// Skill ID to focus on (omit to show, "none" to clear)
        skill_id: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: clap_complete::Shell,
    },
}

fn parse_context(value: &str) -> Result<TerrainContext, String> {
    TerrainContext::from_tag(value).ok_or_else(|| {
        let tags: Vec<&str> = TerrainContext::ALL.iter().map(|c| c.tag()).collect();
        format!("unknown terrain context '{value}' (expected one of: {})", tags.join(", "))
    })
}

fn parse_rating(value: &str) -> Result<Rating, String> {
    match value {
        "not_assessed" => Ok(Rating::NotAssessed),
        "needs_work" => Ok(Rating::NeedsWork),
        "developing" => Ok(Rating::Developing),
        "confident" => Ok(Rating::Confident),
        "mastered" => Ok(Rating::Mastered),
        other => Err(format!(
            "unknown rating '{other}' (expected not_assessed, needs_work, developing, confident, or mastered)"
        )),
    }
}

fn parse_level(value: &str) -> Result<SkillLevel, String> {
    match value {
        "beginner" => Ok(SkillLevel::Beginner),
        "novice" => Ok(SkillLevel::Novice),
        "intermediate" => Ok(SkillLevel::Intermediate),
        "expert" => Ok(SkillLevel::Expert),
        other => Err(format!(
            "unknown level '{other}' (expected beginner, novice, intermediate, or expert)"
        )),
    }
}

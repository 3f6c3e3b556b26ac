//! Command handlers.

use clap::CommandFactory;
use colored::Colorize;
use itertools::Itertools;
use serde_json::json;
use tracing::warn;

use super::{Cli, Commands};
use crate::catalog::{level_slice, Catalog, CatalogProvider};
use crate::config::PolicyConfig;
use crate::domain::{Rating, SkillLevel, TerrainContext};
use crate::engine::{access, aggregate, prereq, progression, recommend};
use crate::error::{Result, TlError};
use crate::storage::sqlite::SqliteStore;
use crate::storage::AssessmentStore;

/// Everything a command needs: catalog + store + policy snapshots.
pub struct CommandContext {
    pub catalog: Catalog,
    pub store: SqliteStore,
    pub policy: PolicyConfig,
    pub machine: bool,
}

impl CommandContext {
    /// Build the context from parsed CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let policy = PolicyConfig::load(cli.config.as_deref())?;
        let catalog = Catalog::load(&cli.catalog)?;
        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .ok_or_else(|| TlError::Config("data directory not found".to_string()))?
                .join("turnlab/turnlab.db"),
        };
        let store = SqliteStore::open(db_path)?;
        Ok(Self {
            catalog,
            store,
            policy,
            machine: cli.machine,
        })
    }
}

/// Dispatch a parsed command.
pub fn run(ctx: &mut CommandContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Init { level } => init(ctx, *level),
        Commands::Assess {
            skill_id,
            context,
            rating,
            notes,
        } => assess(ctx, skill_id, *context, *rating, notes.clone()),
        Commands::Progress { level } => progress(ctx, *level),
        Commands::Suggest { limit } => suggest(ctx, *limit),
        Commands::Stats => stats(ctx),
        Commands::Access { skill_id } => check_access(ctx, skill_id),
        Commands::History { days } => history(ctx, *days),
        Commands::Delete { assessment_id } => delete(ctx, assessment_id),
        Commands::Advance => advance(ctx),
        Commands::Focus { skill_id } => focus(ctx, skill_id.as_deref()),
        Commands::Completions { shell } => {
            completions(*shell);
            Ok(())
        }
    }
}

fn init(ctx: &mut CommandContext, level: SkillLevel) -> Result<()> {
    let mut state = ctx.store.user_state()?;
    state.current_level = level;

    // Grants are computed once, here; later catalog changes must not
    // revoke them, so they only ever accumulate.
    let slice = level_slice(&ctx.catalog, level);
    let grants = access::granted_free_skill_ids(level, &slice, &ctx.policy);
    state.granted_free_skill_ids.extend(grants);
    ctx.store.save_user_state(&state)?;

    if ctx.machine {
        println!(
            "{}",
            json!({
                "level": level.display_name(),
                "granted_free_skill_ids": state.granted_free_skill_ids,
            })
        );
    } else {
        println!(
            "Assessed level set to {}. {}",
            level.display_name().bold(),
            level.description()
        );
        if !state.granted_free_skill_ids.is_empty() {
            println!(
                "Granted {} free skill(s) at this level.",
                state.granted_free_skill_ids.len()
            );
        }
    }
    Ok(())
}

fn assess(
    ctx: &mut CommandContext,
    skill_id: &str,
    context: TerrainContext,
    rating: Rating,
    notes: Option<String>,
) -> Result<()> {
    let skill = ctx
        .catalog
        .skill(skill_id)
        .ok_or_else(|| TlError::SkillNotFound(skill_id.to_string()))?
        .clone();

    if !skill.assessment_contexts.is_empty() && !skill.assessment_contexts.contains(&context) {
        warn!(
            skill = skill.id,
            context = context.tag(),
            "skill does not declare this assessment context"
        );
    }

    let assessment = ctx.store.save(skill_id, context, rating, notes)?;

    if ctx.machine {
        println!("{}", serde_json::to_string(&assessment)?);
    } else {
        println!(
            "Recorded {} for {} on {}",
            rating.display_name().bold(),
            skill.name.cyan(),
            context.display_name()
        );
        println!("  {}", skill.milestones.description_for(rating).dimmed());
    }
    Ok(())
}

fn progress(ctx: &mut CommandContext, level: Option<SkillLevel>) -> Result<()> {
    let state = ctx.store.user_state()?;
    let level = level.unwrap_or(state.current_level);
    let slice = level_slice(&ctx.catalog, level);
    let summary = aggregate::rating_summary(&ctx.store.all()?);

    let fraction = progression::progress(&slice, &summary);
    let can_advance = progression::can_advance(&slice, &summary, &ctx.policy);
    let next = progression::next_level(level);

    if ctx.machine {
        println!(
            "{}",
            json!({
                "level": level.display_name(),
                "progress": fraction,
                "can_advance": can_advance,
                "next_level": next.map(SkillLevel::display_name),
                "unlock_threshold": ctx.policy.unlock_threshold,
            })
        );
        return Ok(());
    }

    println!(
        "{} progress: {:.0}% (threshold {:.0}%)",
        level.display_name().bold(),
        fraction * 100.0,
        ctx.policy.unlock_threshold * 100.0
    );
    for skill in &slice {
        let rating = aggregate::summary_rating(&summary, &skill.id);
        let marker = if rating.counts_toward_progression() {
            "+".green()
        } else {
            "-".red()
        };
        println!("  {marker} {:<24} {}", skill.name, rating.short_name());
    }
    match next {
        Some(next) if can_advance => {
            println!("{}", format!("Ready to advance to {}!", next.display_name()).green());
        }
        Some(next) => println!("Keep going to unlock {}.", next.display_name()),
        None => println!("You are at the top level."),
    }
    Ok(())
}

fn suggest(ctx: &mut CommandContext, limit: Option<usize>) -> Result<()> {
    let state = ctx.store.user_state()?;
    let level = state.current_level;
    let slice = level_slice(&ctx.catalog, level);
    let summary = aggregate::rating_summary(&ctx.store.all()?);
    let limit = limit.unwrap_or(ctx.policy.suggestion_limit);

    let suggestions = recommend::suggest(level, &slice, &summary, limit);

    if ctx.machine {
        println!("{}", serde_json::to_string(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("Nothing to suggest - every {} skill is Confident or better.", level.display_name());
        return Ok(());
    }
    for suggestion in &suggestions {
        let gate = if prereq::prerequisites_met(&suggestion.skill, &summary) {
            String::new()
        } else {
            format!(" {}", "(prerequisites not met)".yellow())
        };
        println!(
            "{:<24} {}{}",
            suggestion.skill.name.cyan(),
            suggestion.reason.display_text().dimmed(),
            gate
        );
    }
    Ok(())
}

fn stats(ctx: &mut CommandContext) -> Result<()> {
    let history = ctx.store.all()?;
    let summary = aggregate::rating_summary(&history);
    let recent = ctx.store.recent(ctx.policy.recent_window_days)?;
    let stats = progression::statistics(ctx.catalog.all_skills(), &summary, recent.len());
    let counts = aggregate::assessment_counts(&history);

    if ctx.machine {
        println!(
            "{}",
            json!({
                "total_skills": stats.total_skills,
                "assessed_skills": stats.assessed_skills,
                "confident_skills": stats.confident_skills,
                "recent_assessments": stats.recent_assessments,
                "completion_percentage": stats.completion_percentage,
            })
        );
        return Ok(());
    }

    println!("Skills:       {} assessed / {} total", stats.assessed_skills, stats.total_skills);
    println!("Confident+:   {}", stats.confident_skills);
    println!(
        "Last {} days: {} assessments",
        ctx.policy.recent_window_days, stats.recent_assessments
    );
    println!("Completion:   {:.0}%", stats.completion_percentage * 100.0);
    if !counts.is_empty() {
        let breakdown = counts
            .iter()
            .map(|(rating, count)| format!("{} {}", count, rating.display_name()))
            .join(", ");
        println!("Breakdown:    {breakdown}");
    }
    Ok(())
}

fn check_access(ctx: &mut CommandContext, skill_id: &str) -> Result<()> {
    let skill = ctx
        .catalog
        .skill(skill_id)
        .ok_or_else(|| TlError::SkillNotFound(skill_id.to_string()))?;
    let state = ctx.store.user_state()?;
    let accessible = access::can_access(
        skill,
        state.is_premium_unlocked,
        &state.granted_free_skill_ids,
    );

    if ctx.machine {
        println!(
            "{}",
            json!({ "skill_id": skill.id, "accessible": accessible })
        );
    } else if accessible {
        println!("{} is {}", skill.name.cyan(), "accessible".green());
    } else {
        println!(
            "{} is {} ({} level requires premium)",
            skill.name.cyan(),
            "locked".red(),
            skill.level.display_name()
        );
    }
    Ok(())
}

fn history(ctx: &mut CommandContext, days: u32) -> Result<()> {
    let recent = ctx.store.recent(days)?;

    if ctx.machine {
        println!("{}", serde_json::to_string(&recent)?);
        return Ok(());
    }

    if recent.is_empty() {
        println!("No assessments in the last {days} days.");
        return Ok(());
    }
    for assessment in &recent {
        let name = ctx
            .catalog
            .skill(&assessment.skill_id)
            .map_or(assessment.skill_id.as_str(), |s| s.name.as_str());
        println!(
            "{}  {:<24} {:<14} {}",
            assessment.recorded_at.format("%Y-%m-%d"),
            name,
            assessment.context.short_name(),
            assessment.rating.display_name()
        );
    }
    Ok(())
}

fn delete(ctx: &mut CommandContext, assessment_id: &str) -> Result<()> {
    ctx.store.delete(assessment_id)?;
    if ctx.machine {
        println!("{}", json!({ "deleted": assessment_id }));
    } else {
        println!("Deleted assessment {assessment_id}");
    }
    Ok(())
}

fn advance(ctx: &mut CommandContext) -> Result<()> {
    let mut state = ctx.store.user_state()?;
    let slice = level_slice(&ctx.catalog, state.current_level);
    let summary = aggregate::rating_summary(&ctx.store.all()?);

    if !progression::can_advance(&slice, &summary, &ctx.policy) {
        let fraction = progression::progress(&slice, &summary);
        if ctx.machine {
            println!("{}", json!({ "advanced": false, "progress": fraction }));
        } else {
            println!(
                "Not yet: {:.0}% of {} skills are Confident or better ({:.0}% needed).",
                fraction * 100.0,
                state.current_level.display_name(),
                ctx.policy.unlock_threshold * 100.0
            );
        }
        return Ok(());
    }

    let Some(next) = progression::next_level(state.current_level) else {
        if ctx.machine {
            println!("{}", json!({ "advanced": false, "at_top": true }));
        } else {
            println!("Already at the top level.");
        }
        return Ok(());
    };

    // New grants are added, never revoked; earlier grants survive level
    // changes the same way they survive catalog changes.
    let next_slice = level_slice(&ctx.catalog, next);
    let new_grants = access::granted_free_skill_ids(next, &next_slice, &ctx.policy);
    state.granted_free_skill_ids.extend(new_grants);
    state.current_level = next;
    ctx.store.save_user_state(&state)?;

    if ctx.machine {
        println!(
            "{}",
            json!({ "advanced": true, "level": next.display_name() })
        );
    } else {
        println!("{}", format!("Advanced to {}!", next.display_name()).green().bold());
    }
    Ok(())
}

fn focus(ctx: &mut CommandContext, skill_id: Option<&str>) -> Result<()> {
    let mut state = ctx.store.user_state()?;

    match skill_id {
        None => {
            match &state.focus_skill_id {
                Some(id) => {
                    let name = ctx.catalog.skill(id).map_or(id.as_str(), |s| s.name.as_str());
                    println!("Focus skill: {}", name.cyan());
                }
                None => println!("No focus skill set."),
            }
            return Ok(());
        }
        Some("none") => {
            state.focus_skill_id = None;
            println!("Cleared focus skill.");
        }
        Some(id) => {
            let skill = ctx
                .catalog
                .skill(id)
                .ok_or_else(|| TlError::SkillNotFound(id.to_string()))?;
            state.focus_skill_id = Some(skill.id.clone());
            println!("Focus skill set to {}", skill.name.cyan());
        }
    }
    ctx.store.save_user_state(&state)?;
    Ok(())
}

/// Generate shell completions to stdout.
pub fn completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "turnlab", &mut std::io::stdout());
}

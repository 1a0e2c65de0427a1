//! Renders a `DashboardView` as colored terminal text.
//!
//! Rendering is a pure function of the view. Display buckets map to terminal
//! colors here and nowhere else.

use colored::{Color, ColoredString, Colorize};
use std::fmt::Write;

use crate::domain::career::{CareerSummary, IndustryDemand};
use crate::domain::dashboard::{
    ClassicView, DashboardView, MilestoneCardView, ProgressTrackerView, TimelineEntry,
    TimelineView,
};
use crate::domain::progress::PaceTier;
use crate::domain::roadmap::{PhaseStatus, Recommendation, ResourceColor, ResourceIcon};

const BAR_WIDTH: usize = 20;

pub fn resource_color(color: ResourceColor) -> Color {
    match color {
        ResourceColor::Purple => Color::Magenta,
        ResourceColor::Blue => Color::Blue,
        ResourceColor::Green => Color::Green,
        ResourceColor::Red => Color::Red,
        ResourceColor::Gray => Color::BrightBlack,
    }
}

fn resource_glyph(icon: ResourceIcon) -> &'static str {
    match icon {
        ResourceIcon::PlayCircle => "▶",
        ResourceIcon::BookOpen => "📖",
        ResourceIcon::ExternalLink => "↗",
    }
}

fn pace_color(tier: PaceTier) -> Color {
    match tier {
        PaceTier::Fast => Color::Green,
        PaceTier::Steady | PaceTier::Neutral => Color::Blue,
        // closest terminal color to orange
        PaceTier::Slow => Color::Yellow,
    }
}

fn status_marker(status: PhaseStatus) -> ColoredString {
    match status {
        PhaseStatus::Completed => "✓".green().bold(),
        PhaseStatus::Current => "●".blue().bold(),
        PhaseStatus::Upcoming => "○".dimmed(),
    }
}

fn demand_badge(demand: IndustryDemand, label: &str) -> ColoredString {
    match demand {
        IndustryDemand::Trending => label.green().bold(),
        IndustryDemand::Stable => label.blue(),
        IndustryDemand::Emerging => label.yellow(),
    }
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Renders the whole dashboard.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Welcome back, {}", view.learner).bold());

    if let Some(career) = &view.career {
        out.push('\n');
        render_career(&mut out, career);
    }
    if let Some(progress) = &view.progress {
        out.push('\n');
        render_progress(&mut out, progress);
    }
    if let Some(recommendation) = &view.recommendation {
        out.push('\n');
        render_recommendation(&mut out, recommendation);
    }
    if let Some(timeline) = &view.timeline {
        out.push('\n');
        render_timeline(&mut out, timeline);
    }
    if let Some(classic) = &view.classic {
        out.push('\n');
        render_classic(&mut out, classic);
    }
    if view.needs_generation {
        out.push('\n');
        let _ = writeln!(out, "{}", "No roadmap yet.".bold());
        let _ = writeln!(
            out,
            "Run `skillroute generate` to build a learning roadmap from your profile."
        );
    }
    if let Some(caption) = view.switch_caption {
        out.push('\n');
        let _ = writeln!(out, "{}", format!("[{}]", caption).dimmed());
    }
    if view.loading {
        let _ = writeln!(out, "{}", "Working...".dimmed());
    } else if view.updating {
        let _ = writeln!(out, "{}", "Updating...".dimmed());
    }
    out
}

fn render_career(out: &mut String, career: &CareerSummary) {
    let _ = writeln!(
        out,
        "{}  {}  {}",
        career.career.bold(),
        format!("{} Match", career.confidence).cyan(),
        demand_badge(career.demand, career.demand_label)
    );
    if !career.reasoning.is_empty() {
        let _ = writeln!(out, "  {}", career.reasoning);
    }
    let _ = writeln!(
        out,
        "  Skill match      {} {}",
        bar(career.skill_match.value()),
        career.skill_match
    );
    let _ = writeln!(
        out,
        "  Market readiness {} {}",
        bar(career.market_readiness.value()),
        career.market_readiness
    );
    let _ = writeln!(
        out,
        "  Job ready in     {}",
        career.time_to_job_ready.as_deref().unwrap_or("TBD")
    );
    let _ = writeln!(out, "  Industry demand  {}", career.demand_text);
    if career.has_insights() {
        for strength in &career.key_strengths {
            let _ = writeln!(out, "  {} {}", "+".green(), strength);
        }
        for gap in &career.skill_gaps {
            let _ = writeln!(out, "  {} {}", "-".yellow(), gap);
        }
    }
    if !career.alternatives.is_empty() {
        let _ = writeln!(out, "  {}", "Alternatives:".dimmed());
        for alt in &career.alternatives {
            let _ = writeln!(out, "    {} ({}) {}", alt.career, alt.match_score, alt.reason);
        }
    }
}

fn render_progress(out: &mut String, progress: &ProgressTrackerView) {
    let _ = writeln!(
        out,
        "{} {} {}",
        "Progress".bold(),
        bar(progress.percentage.value()),
        progress.percentage
    );
    let _ = writeln!(
        out,
        "  Streak: {} Days   Pace: {}   Last active: {}",
        progress.streak_days,
        progress.pace.label.color(pace_color(progress.pace.tier)),
        progress.last_active
    );
    if progress.celebrate {
        let _ = writeln!(out, "  {}", "🎉 Roadmap complete!".green().bold());
    }
}

fn render_recommendation(out: &mut String, recommendation: &Recommendation) {
    match &recommendation.focus {
        Some(focus) => {
            let _ = writeln!(out, "{} {}", "Focus next:".bold(), focus.name);
            if let Some(then) = &recommendation.then {
                let _ = writeln!(out, "  Then: {}", then.name);
            }
        }
        None => {
            let _ = writeln!(out, "{}", "All phases completed.".green());
        }
    }
}

fn render_timeline(out: &mut String, timeline: &TimelineView) {
    let _ = writeln!(out, "{}", timeline.caption.bold());
    for entry in &timeline.entries {
        render_timeline_entry(out, entry);
    }
}

fn render_timeline_entry(out: &mut String, entry: &TimelineEntry) {
    let mut line = format!(
        "{} {}. {}",
        status_marker(entry.status),
        entry.phase.index + 1,
        entry.phase.name
    );
    if let Some(duration) = &entry.phase.duration {
        let _ = write!(line, "  {}", duration.dimmed());
    }
    if let Some(difficulty) = entry.difficulty {
        let _ = write!(line, "  [{}]", format!("{:?}", difficulty).to_lowercase());
    }
    let _ = writeln!(out, "{}", line);

    if !entry.expanded {
        if let Some(preview) = &entry.skill_preview {
            let _ = writeln!(out, "    {}", preview.dimmed());
        }
        return;
    }

    if !entry.phase.focus_skills.is_empty() {
        let _ = writeln!(out, "    Skills: {}", entry.phase.focus_skills.join(", "));
    }
    if !entry.phase.prerequisites.is_empty() {
        let _ = writeln!(
            out,
            "    Prerequisites: {}",
            entry.phase.prerequisites.join(", ")
        );
    }
    for outcome in &entry.phase.outcomes {
        let _ = writeln!(out, "    → {}", outcome);
    }
    for card in &entry.milestones {
        render_milestone(out, card);
    }
}

fn render_milestone(out: &mut String, card: &MilestoneCardView) {
    let check = if card.completed { "[x]" } else { "[ ]" };
    let mut line = format!("    {} {} {}", check, card.at, card.name.bold());
    if let Some(badge) = &card.time_badge {
        let _ = write!(line, " ({})", badge);
    }
    let _ = writeln!(out, "{}", line);
    if !card.description.is_empty() {
        let _ = writeln!(out, "        {}", card.description);
    }
    for resource in &card.resources {
        let label = format!(
            "{} {}",
            resource_glyph(resource.bucket.icon),
            resource.resource.title
        );
        let _ = writeln!(
            out,
            "        {} {}",
            label.color(resource_color(resource.bucket.color)),
            resource.resource.url.dimmed()
        );
    }
    if card.can_mark_complete {
        let _ = writeln!(out, "        {}", "Mark as Complete".cyan());
    }
}

fn render_classic(out: &mut String, classic: &ClassicView) {
    let title = match classic.duration_months {
        Some(months) => format!("Learning Roadmap ({} months)", months),
        None => "Learning Roadmap".to_string(),
    };
    let _ = writeln!(out, "{}", title.bold());
    for entry in &classic.entries {
        let check = if entry.completed {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        let _ = writeln!(out, "  {} {}. {}", check, entry.phase.index + 1, entry.phase.name);
    }
    let mut actions = Vec::new();
    if classic.adapt_enabled {
        actions.push("`skillroute adapt` to re-plan");
    }
    if classic.reset_enabled {
        actions.push("`skillroute reset` to start over");
    }
    if !actions.is_empty() {
        let _ = writeln!(out, "  {}", actions.join("  |  ").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::career::CareerDecision;
    use crate::domain::dashboard::{DashboardState, StateChange, ViewContext};
    use crate::domain::progress::Progress;
    use crate::domain::roadmap::{LearningRoadmap, Milestone, Phase, Resource, RoadmapSnapshot};
    use chrono::{TimeZone, Utc};

    fn plain(view: &DashboardView) -> String {
        colored::control::set_override(false);
        render_dashboard(view)
    }

    fn snapshot() -> RoadmapSnapshot {
        let phases = vec![
            Phase::new(0, "Month 1")
                .with_focus_skills(["python", "git", "sql", "http"])
                .with_milestones(vec![Milestone::new("Basics")
                    .with_hours(10.0)
                    .with_resources(vec![Resource::new("Docs", "https://docs", "documentation")])]),
            Phase::new(1, "Month 2").with_focus_skills(["rust", "tokio", "serde", "axum"]),
        ];
        RoadmapSnapshot {
            learning_roadmap: Some(LearningRoadmap::new(phases).with_duration_months(2)),
            progress: Some(Progress::new(0, 2)),
            career_decision: Some(CareerDecision::new("Backend Developer")),
        }
    }

    fn view_of(state: &DashboardState) -> DashboardView {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        DashboardView::build(state, &ViewContext::at(now))
    }

    #[test]
    fn timeline_shows_expanded_and_collapsed_phases() {
        let state = DashboardState::default().apply(StateChange::RoadmapLoaded(snapshot()));
        let text = plain(&view_of(&state));

        assert!(text.contains("0 of 2 phases completed"));
        assert!(text.contains("Skills: python, git, sql, http"));
        assert!(text.contains("1.1 Basics (10h)"));
        assert!(text.contains("rust, tokio, serde ..."));
        assert!(text.contains("Emerging"));
        assert!(text.contains("Job ready in     TBD"));
        assert!(text.contains("Industry demand  stable"));
        assert!(text.contains("[Show Classic View]"));
        assert!(!text.contains("Mark as Complete"));
    }

    #[test]
    fn classic_lists_every_phase() {
        let state = DashboardState::default()
            .apply(StateChange::RoadmapLoaded(snapshot()))
            .apply(StateChange::DisplayModeToggled);
        let text = plain(&view_of(&state));

        assert!(text.contains("Learning Roadmap (2 months)"));
        assert!(text.contains("[ ] 2. Month 2"));
        assert!(text.contains("[Show Timeline View]"));
        assert!(text.contains("`skillroute reset` to start over"));
    }

    #[test]
    fn roadmap_without_phases_keeps_header_and_actions() {
        let state = DashboardState::default().apply(StateChange::RoadmapLoaded(RoadmapSnapshot {
            learning_roadmap: None,
            progress: Some(Progress::new(0, 0)),
            career_decision: None,
        }));
        let text = plain(&view_of(&state));

        assert!(text.contains("Learning Roadmap"));
        assert!(text.contains("`skillroute adapt` to re-plan"));
        assert!(!text.contains("No roadmap yet."));
    }

    #[test]
    fn empty_dashboard_prompts_generation() {
        let text = plain(&view_of(&DashboardState::default()));
        assert!(text.contains("No roadmap yet."));
        assert!(!text.contains("Show Classic View"));
    }

    #[test]
    fn bar_scales_with_percentage() {
        assert_eq!(bar(0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(50).chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }
}

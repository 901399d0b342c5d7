//! Product design file renderer
//!
//! One renderer serves two views: [`RenderMode::Full`] for export and
//! [`RenderMode::Summary`] for a condensed progress view, which keeps only
//! each feature's intent and explicit exclusions.

use crate::markdown::{ListStyle, MarkdownWriter};
use crate::render::{emphasis_item, Render};
use gist_model::{DesignDecision, Feature, GistDesignFile, PatternUsage};
use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "Product Design";
const UNTITLED_FEATURE: &str = "Untitled feature";

/// Feature detail level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Every subsection
    #[default]
    Full,
    /// Intent and exclusions only
    Summary,
}

/// Render a design file in the given mode
#[must_use]
pub fn render_design_file(file: &GistDesignFile, mode: RenderMode) -> String {
    let mut w = MarkdownWriter::new();
    let name = file.product.name.trim();
    w.heading(1, if name.is_empty() { DEFAULT_TITLE } else { name });
    w.paragraph(&file.product.description);

    w.section(2, "Product", |s| {
        s.field("Audience", &file.product.audience)
            .field("AI approach", &file.product.ai_approach);
    });
    w.section(2, "Positioning", |s| {
        let p = &file.positioning;
        s.field("Category", &p.category)
            .field("For", &p.for_who)
            .field("Not for", &p.not_for_who)
            .labeled_list("Compared to", ListStyle::Bullets, &p.comparisons);
    });
    w.section(2, "Context", |s| {
        let c = &file.context;
        s.field("Stage", &c.stage)
            .field("Pricing", &c.pricing)
            .inline_list("Integrates with", &c.integrates_with)
            .inline_list("Requires", &c.requires);
    });
    w.section(2, "Features", |s| {
        for feature in &file.features {
            render_feature(s, feature, mode);
        }
    });

    w.finish()
}

impl Render for GistDesignFile {
    fn to_markdown(&self) -> String {
        render_design_file(self, RenderMode::Full)
    }
}

fn render_feature(w: &mut MarkdownWriter, feature: &Feature, mode: RenderMode) {
    let body = |s: &mut MarkdownWriter| {
        feature_intent(s, feature);
        if mode == RenderMode::Full {
            feature_details(s, feature);
        }
        s.labeled_list("Not this", ListStyle::Bullets, &feature.not_this);
        if mode == RenderMode::Full {
            s.labeled_list("Open questions", ListStyle::Checklist, &feature.open_questions);
        }
    };

    let name = feature.name.trim();
    if name.is_empty() {
        w.section(3, UNTITLED_FEATURE, body);
    } else {
        w.heading(3, name);
        body(w);
    }
}

fn feature_intent(w: &mut MarkdownWriter, feature: &Feature) {
    let intent = &feature.intent;
    w.field("Goal", &intent.goal)
        .field("Core anxiety", &intent.core_anxiety)
        .labeled_list("Not trying to", ListStyle::Bullets, &intent.not_trying_to);
}

fn feature_details(w: &mut MarkdownWriter, feature: &Feature) {
    let flow = &feature.interaction_model;
    w.labeled_list("Primary flow", ListStyle::Numbered, &flow.primary_flow)
        .labeled_list("Key interactions", ListStyle::Bullets, &flow.key_interactions)
        .labeled_list("Error handling", ListStyle::Bullets, &flow.error_handling);

    let decisions: Vec<String> = feature.design_decisions.iter().filter_map(decision_item).collect();
    w.labeled_list("Design decisions", ListStyle::Bullets, &decisions);

    let patterns: Vec<String> = feature.patterns_used.iter().filter_map(pattern_item).collect();
    w.labeled_list("Patterns", ListStyle::Bullets, &patterns);

    let constraints: Vec<String> = feature
        .constraints
        .iter()
        .filter_map(|c| emphasis_item(&c.constraint, &c.design_response))
        .collect();
    w.labeled_list("Constraints", ListStyle::Bullets, &constraints);
}

/// `Chose **X** over Y because Z`
fn decision_item(d: &DesignDecision) -> Option<String> {
    let chose = d.chose.trim();
    if chose.is_empty() {
        return None;
    }
    let mut item = format!("Chose **{chose}**");
    if !d.over.trim().is_empty() {
        item.push_str(&format!(" over {}", d.over.trim()));
    }
    if !d.because.trim().is_empty() {
        item.push_str(&format!(" because {}", d.because.trim()));
    }
    Some(item)
}

fn pattern_item(p: &PatternUsage) -> Option<String> {
    let mut item = emphasis_item(&p.pattern_name, &p.usage)?;
    if let Some(url) = p.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        item.push_str(&format!(" ({url})"));
    }
    Some(item)
}

//! Testing utilities for Gist workspace
//!
//! Shared fixtures: one populated document of every kind.

#![allow(missing_docs)]

use gist_model::{
    Approach, Brief, BriefPattern, Constraint, ConstraintCategory, ConstraintMap, ContextInfo,
    Decision, DesignDecision, DesignImplication, EvaluationCriterion, Feature, FeatureConstraint,
    GistDesignFile, Ideation, Intent, InteractionModel, Objection, PatternUsage, Phase,
    Positioning, ProductInfo, ReadyToDesign, Recommendation, StakeholderPrep,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn sample_brief() -> Brief {
    Brief {
        goal: Some("Reduce signup friction".to_string()),
        context: strings(&["B2B analytics tool", "40% drop-off on step two"]),
        decisions: vec![Decision {
            decision: "Defer company details".to_string(),
            rationale: "Not needed until first report".to_string(),
        }],
        open_questions: strings(&["Do we need email verification up front?"]),
        patterns: vec![BriefPattern {
            pattern_id: "progressive-disclosure".to_string(),
            reason: "Only ask what the next step needs".to_string(),
            added_to_brief: true,
        }],
        ready_to_design: Some(ReadyToDesign {
            prompt: "Design a two-step signup".to_string(),
            checklist: strings(&["Goal agreed", "Metrics chosen"]),
        }),
    }
}

pub fn sample_approach(id: &str, title: &str) -> Approach {
    Approach {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} flow"),
        target_users: "First-time admins".to_string(),
        strengths: strings(&["Familiar"]),
        weaknesses: strings(&["More clicks"]),
        patterns: strings(&["wizard"]),
        effort: "medium".to_string(),
    }
}

pub fn sample_ideation() -> Ideation {
    Ideation {
        problem_statement: Some("Admins abandon setup before inviting their team".to_string()),
        approaches: vec![
            sample_approach("a1", "Guided wizard"),
            sample_approach("a2", "Checklist sidebar"),
        ],
        evaluation_criteria: vec![EvaluationCriterion {
            criterion: "Time to first invite".to_string(),
            weight: "high".to_string(),
        }],
        recommendation: Some(Recommendation {
            approach_id: "a2".to_string(),
            reasoning: "Lets admins skip around".to_string(),
            next_steps: strings(&["Prototype the sidebar", "Test with five admins"]),
        }),
    }
}

pub fn sample_constraint(id: &str, category: ConstraintCategory, text: &str) -> Constraint {
    Constraint {
        id: id.to_string(),
        category,
        constraint: text.to_string(),
        severity: "high".to_string(),
        source: None,
    }
}

pub fn sample_constraint_map() -> ConstraintMap {
    ConstraintMap {
        project_context: Some("Checkout redesign for a marketplace".to_string()),
        constraints: vec![
            sample_constraint("c1", ConstraintCategory::Technical, "No budget for new infra"),
            Constraint {
                source: Some("Legal".to_string()),
                ..sample_constraint("c2", ConstraintCategory::Regulatory, "PCI scope must not grow")
            },
        ],
        design_implications: vec![DesignImplication {
            id: "d1".to_string(),
            constraint_id: "c1".to_string(),
            implication: "Reuse the existing payment service".to_string(),
            design_response: "Keep the hosted payment page".to_string(),
        }],
        opportunities: strings(&["Drop the legacy coupon field"]),
        current_phase: Some(Phase::Refinement),
    }
}

pub fn sample_objection(id: &str) -> Objection {
    Objection {
        id: id.to_string(),
        stakeholder: "Head of Sales".to_string(),
        objection: "Removing the demo form hides leads".to_string(),
        counter_arguments: strings(&["Self-serve trials convert better"]),
        evidence_needed: strings(&["Trial conversion by segment"]),
    }
}

pub fn sample_stakeholder_prep() -> StakeholderPrep {
    StakeholderPrep {
        design_decision: Some("Replace the demo form with a free trial".to_string()),
        context: strings(&["Quarterly planning review"]),
        objections: vec![sample_objection("o1")],
        talking_points: strings(&["Open with the funnel numbers", "Show the trial prototype"]),
        risk_mitigations: strings(&["Keep a demo link for enterprise"]),
        current_phase: Some(Phase::Ready),
    }
}

pub fn sample_feature(name: &str) -> Feature {
    Feature {
        id: None,
        name: name.to_string(),
        intent: Intent {
            goal: "Get data in within five minutes".to_string(),
            core_anxiety: "Will my data be mangled?".to_string(),
            not_trying_to: strings(&["Replace an ETL tool"]),
        },
        interaction_model: InteractionModel {
            primary_flow: strings(&["Drop a CSV", "Review the mapping", "Confirm"]),
            key_interactions: strings(&["Inline column rename"]),
            error_handling: strings(&["Bad rows are listed, not dropped"]),
        },
        design_decisions: vec![DesignDecision {
            chose: "Preview before import".to_string(),
            over: "Import then undo".to_string(),
            because: "Users distrust silent changes".to_string(),
        }],
        patterns_used: vec![PatternUsage {
            pattern_name: "Preview".to_string(),
            usage: "Mapping step".to_string(),
            url: Some("https://example.com/patterns/preview".to_string()),
        }],
        constraints: vec![FeatureConstraint {
            constraint: "Files up to 50 MB".to_string(),
            design_response: "Stream parsing with progress".to_string(),
        }],
        not_this: strings(&["Scheduled syncs"]),
        open_questions: strings(&["Support Excel files?"]),
    }
}

pub fn sample_design_file() -> GistDesignFile {
    GistDesignFile {
        product: ProductInfo {
            name: "Lumen".to_string(),
            description: "Analytics for small teams".to_string(),
            audience: "Operations leads".to_string(),
            ai_approach: "Suggests charts, never edits data".to_string(),
        },
        positioning: Positioning {
            category: "Self-serve analytics".to_string(),
            for_who: "Teams without a data engineer".to_string(),
            not_for_who: "Enterprises with a warehouse".to_string(),
            comparisons: strings(&["Simpler than Looker"]),
        },
        context: ContextInfo {
            pricing: "Per seat".to_string(),
            integrates_with: strings(&["Google Sheets"]),
            requires: strings(&["A modern browser"]),
            stage: "Beta".to_string(),
        },
        features: vec![sample_feature("CSV import")],
    }
}

use gist_core::prelude::*;
use gist_core::{CoreError, SessionDocument};
use gist_test_utils::{sample_constraint_map, sample_ideation};
use pretty_assertions::assert_eq;
use std::io::Write;

fn replay<D: SessionDocument>(session: &mut Session<D>, turns: &[&str]) {
    for raw in turns {
        session.apply_turn(raw);
    }
}

#[test]
fn brief_conversation_accumulates() {
    let mut session: Session<Brief> = Session::default();
    replay(
        &mut session,
        &[
            "Let's start.\n<brief_update>{\"goal\": \"Reduce signup friction\", \"context\": [\"B2B SaaS\"]}</brief_update>",
            "Good point.\n<brief_update>{\"decisions\": [{\"decision\": \"Social login\", \"rationale\": \"Fewer fields\"}], \"openQuestions\": [\"Verify email?\"]}</brief_update>",
            "One more.\n<brief_update>{\"context\": [\"Mobile heavy\"], \"goal\": null}</brief_update>",
        ],
    );

    let brief = session.document();
    assert_eq!(brief.goal, None);
    assert_eq!(brief.context, ["B2B SaaS", "Mobile heavy"]);
    assert_eq!(brief.decisions.len(), 1);
    assert_eq!(session.turns(), 3);
    assert_eq!(session.info().title, "Design Brief");
    assert!(session.export_markdown().contains("- [ ] Verify email?"));
}

#[test]
fn constraint_patch_from_template() {
    let config = GistConfig::default();
    let mut session = Session::from_document(sample_constraint_map(), &config);
    let before = session.document().clone();

    let outcome = session.apply_turn(
        "Raised it.\n<constraints_update>{\"updateConstraints\": [{\"id\": \"c1\", \"severity\": \"critical\"}, {\"id\": \"zz\", \"severity\": \"low\"}]}</constraints_update>",
    );

    assert!(outcome.applied());
    let after = session.document();
    assert_eq!(after.constraints.len(), before.constraints.len());
    assert_eq!(after.constraints[0].severity, "critical");
    assert_eq!(after.constraints[0].constraint, before.constraints[0].constraint);
    assert_eq!(after.constraints[1], before.constraints[1]);
}

#[test]
fn ideation_recommendation_renders_after_merge() {
    let mut session = Session::from_document(sample_ideation(), &GistConfig::default());
    session.apply_turn(
        "<ideation_update>{\"recommendation\": {\"approachId\": \"a9\", \"reasoning\": \"Pending\", \"nextSteps\": []}}</ideation_update>",
    );
    assert!(session.export_markdown().contains("### Recommended Approach: a9"));
}

#[test]
fn snapshot_survives_handoff_between_kinds() {
    let config = GistConfig::default();
    let mut session = AnySession::new(DocumentKind::Ideation, &config);
    session
        .apply_turn("<ideation_update>{\"problemStatement\": \"Setup takes a week\"}</ideation_update>")
        .unwrap();
    let json = session.snapshot().unwrap();

    let restored = AnySession::restore(&json, &config).unwrap();
    assert_eq!(restored.kind(), DocumentKind::Ideation);
    assert_eq!(restored.info().title, "Setup takes a week");

    let err = Session::<StakeholderPrep>::restore(&json, &config).unwrap_err();
    assert!(matches!(err, CoreError::KindMismatch { .. }));
}

#[test]
fn config_file_drives_previews() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[info]\ntitle_max_chars = 5\nmin_line_count = 1").unwrap();

    let config = GistConfig::load(file.path()).unwrap();
    let mut session: Session<Brief> = Session::new(&config);
    session.apply_turn("<brief_update>{\"goal\": \"Reduce signup friction\"}</brief_update>");

    let info = session.info();
    assert_eq!(info.title, "Reduc...");
    assert_eq!(info.line_count, 5);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GistConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CoreError::Io { .. }));
}

mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn empty_store_shows_empty_states() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No study data available yet"))
        .stdout(predicate::str::contains("No goals set yet"));
}

#[test]
fn seeded_dashboard_aggregates_the_sample_data() {
    let fixture = TestFixture::new();
    fixture.command().arg("init").assert().success();

    let dashboard = fixture.json(&["dashboard", "--format", "json"]);

    // 90 + 60 + 45 + 120 sample minutes.
    assert_eq!(dashboard["total_minutes"], 315);
    assert_eq!(dashboard["total_time"], "5h 15m");
    assert_eq!(dashboard["session_count"], 4);

    let by_subject = dashboard["by_subject"].as_array().unwrap();
    assert_eq!(by_subject.len(), 4);
    // First-occurrence order of the newest-first snapshot.
    assert_eq!(by_subject[0]["subject"], "Mathematics");
    assert_eq!(by_subject[0]["minutes"], 90);

    assert_eq!(dashboard["goals"].as_array().unwrap().len(), 3);
}

#[test]
fn by_subject_totals_partition_the_total() {
    let fixture = TestFixture::new();
    fixture.command().arg("init").assert().success();
    fixture
        .command()
        .args(["log", "Mathematics", "--duration", "45"])
        .assert()
        .success();

    let dashboard = fixture.json(&["dashboard", "--format", "json"]);

    let total = dashboard["total_minutes"].as_u64().unwrap();
    let group_sum: u64 = dashboard["by_subject"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["minutes"].as_u64().unwrap())
        .sum();
    assert_eq!(group_sum, total);
    assert_eq!(total, 360);
}

#[test]
fn recent_sessions_respect_the_configured_limit() {
    let fixture = TestFixture::new();
    std::fs::create_dir_all(fixture.data_path()).unwrap();
    std::fs::write(
        fixture.data_path().join("config.toml"),
        "recent_limit = 2\n",
    )
    .unwrap();

    for subject in ["A", "B", "C"] {
        fixture
            .command()
            .args(["log", subject, "--duration", "30"])
            .assert()
            .success();
    }

    let dashboard = fixture.json(&["dashboard", "--format", "json"]);
    let recent = dashboard["recent_sessions"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    // Newest first: the last session logged leads.
    assert_eq!(recent[0]["subject"], "C");
}

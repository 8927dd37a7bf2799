//! End-to-end tests for the `tarot` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tarot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tarot").unwrap();
    cmd.env("TAROT_DATA_DIR", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("TAROT_LINK_BASE")
        .env_remove("RUST_LOG");
    cmd
}

/// Draw with `args` as JSON and return the parsed output.
fn draw_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let out = tarot(dir)
        .arg("draw")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(out.status.success(), "draw failed: {out:?}");
    serde_json::from_slice(&out.stdout).unwrap()
}

fn history_json(dir: &TempDir, args: &[&str]) -> Vec<serde_json::Value> {
    let out = tarot(dir)
        .arg("history")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).unwrap()
}

fn reading_id(value: &serde_json::Value) -> String {
    value["reading"]["id"].as_u64().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_known_seed() {
    let dir = TempDir::new().unwrap();
    let out = draw_json(&dir, &["--deck", "major", "--seed", "42"]);
    let reading = &out["reading"];
    assert_eq!(reading["seed"], 42);
    assert_eq!(reading["deckType"], "major");
    assert_eq!(reading["spreadType"], "single");
    assert_eq!(reading["drawnCards"][0]["englishName"], "The Hierophant");
    assert_eq!(reading["drawnCards"][0]["orientation"], "reversed");
    assert_eq!(reading["bottomCard"]["englishName"], "Death");
    assert_eq!(reading["bottomCard"]["orientation"], "upright");
    assert_eq!(reading["bottomCard"]["position"], "Bottom");
    assert_eq!(
        out["link"],
        "https://tarot.local/?seed=42&deck=major&spread=single"
    );
}

#[test]
fn draw_three_card_spread() {
    let dir = TempDir::new().unwrap();
    let out = draw_json(
        &dir,
        &["-d", "major", "-s", "three", "--seed", "7", "-q", "Next step?"],
    );
    let names: Vec<&str> = out["reading"]["drawnCards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["englishName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Justice", "The World", "Strength"]);
    assert_eq!(out["reading"]["bottomCard"]["englishName"], "The Fool");
    assert_eq!(out["reading"]["question"], "Next step?");
    assert!(out["link"].as_str().unwrap().ends_with("&q=Next+step%3F"));
}

#[test]
fn draw_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let a = draw_json(&dir, &["--spread", "celtic", "--seed", "2024"]);
    let b = draw_json(&dir, &["--spread", "celtic", "--seed", "2024"]);
    assert_eq!(a["reading"]["drawnCards"], b["reading"]["drawnCards"]);
    assert_eq!(a["reading"]["bottomCard"], b["reading"]["bottomCard"]);
    assert_ne!(a["reading"]["id"], b["reading"]["id"]);
}

#[test]
fn draw_without_seed_picks_one() {
    let dir = TempDir::new().unwrap();
    let out = draw_json(&dir, &[]);
    assert!(out["reading"]["seed"].as_u64().unwrap() < 1_000_000_000);
}

#[test]
fn draw_table_output() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .args(["draw", "--spread", "three", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Past, Present, Future"))
        .stdout(predicate::str::contains("Bottom"))
        .stdout(predicate::str::contains("seed 1"));
}

#[test]
fn draw_rejects_unknown_spread() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .args(["draw", "--spread", "horseshoe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown spread"));
}

#[test]
fn draw_rejects_unknown_deck() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .args(["draw", "--deck", "tiny"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown deck"));
    assert!(history_json(&dir, &[]).is_empty());
}

// ---------------------------------------------------------------------------
// link / replay
// ---------------------------------------------------------------------------

#[test]
fn link_then_replay() {
    let dir = TempDir::new().unwrap();
    let out = tarot(&dir)
        .args(["link", "-d", "minor", "-s", "weekly", "--seed", "99"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let link = String::from_utf8(out.stdout).unwrap().trim().to_string();
    assert_eq!(link, "https://tarot.local/?seed=99&deck=minor&spread=weekly");

    let direct = draw_json(&dir, &["-d", "minor", "-s", "weekly", "--seed", "99"]);
    let out = tarot(&dir)
        .args(["replay", &link, "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let replayed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(replayed["reading"]["drawnCards"], direct["reading"]["drawnCards"]);
    assert_eq!(history_json(&dir, &[]).len(), 2);
}

#[test]
fn replay_bare_query_and_custom_base() {
    let dir = TempDir::new().unwrap();
    let out = tarot(&dir)
        .args([
            "replay",
            "seed=5&spread=three",
            "--link-base",
            "https://example.org/tarot",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        value["link"],
        "https://example.org/tarot?seed=5&deck=full&spread=three"
    );
}

#[test]
fn replay_rejects_link_without_seed() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .args(["replay", "https://tarot.local/?deck=major"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing seed"));
}

// ---------------------------------------------------------------------------
// history and annotations
// ---------------------------------------------------------------------------

#[test]
fn history_empty() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings found."));
}

#[test]
fn history_newest_first_with_filters() {
    let dir = TempDir::new().unwrap();
    let first = draw_json(&dir, &["-s", "single", "--seed", "1"]);
    let second = draw_json(&dir, &["-s", "three", "--seed", "2"]);
    let third = draw_json(&dir, &["-s", "single", "--seed", "3"]);

    let all = history_json(&dir, &[]);
    let seeds: Vec<u64> = all.iter().map(|r| r["seed"].as_u64().unwrap()).collect();
    assert_eq!(seeds, vec![3, 2, 1]);

    let singles = history_json(&dir, &["--spread", "single"]);
    assert_eq!(singles.len(), 2);

    tarot(&dir)
        .args(["tag", &reading_id(&first), "add", "love"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added tag \"love\""));
    tarot(&dir)
        .args(["tag", &reading_id(&third), "toggle", "love"])
        .assert()
        .success();
    tarot(&dir)
        .args(["favorite", &reading_id(&second)])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as favorite"));

    let loved = history_json(&dir, &["--tag", "love"]);
    let seeds: Vec<u64> = loved.iter().map(|r| r["seed"].as_u64().unwrap()).collect();
    assert_eq!(seeds, vec![3, 1]);

    let favs = history_json(&dir, &["--favorites"]);
    assert_eq!(favs.len(), 1);
    assert_eq!(favs[0]["seed"], 2);

    assert!(history_json(&dir, &["--favorites", "--tag", "love"]).is_empty());
    assert_eq!(history_json(&dir, &["-n", "1"]).len(), 1);
}

#[test]
fn note_and_show() {
    let dir = TempDir::new().unwrap();
    let out = draw_json(&dir, &["-s", "three", "--seed", "11", "-q", "Move?"]);
    let id = reading_id(&out);

    tarot(&dir)
        .args(["note", &id, "sounds right"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note saved"));

    tarot(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("note: sounds right"))
        .stdout(predicate::str::contains("Move?"));

    tarot(&dir)
        .args(["show", &id, "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Past, Present, Future - Move?\n---\nPast: ",
        ))
        .stdout(predicate::str::contains("\nBottom: "))
        .stdout(predicate::str::contains("seed=11&deck=full&spread=three&q=Move%3F"));
}

#[test]
fn tags_listing() {
    let dir = TempDir::new().unwrap();
    let out = draw_json(&dir, &["--seed", "4"]);
    tarot(&dir)
        .args(["tag", &reading_id(&out), "add", "career"])
        .assert()
        .success();
    tarot(&dir)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("In use: career"))
        .stdout(predicate::str::contains("work, love, health"));
}

#[test]
fn unknown_id_is_reported() {
    let dir = TempDir::new().unwrap();
    for args in [
        vec!["show", "123"],
        vec!["favorite", "123"],
        vec!["note", "123", "x"],
        vec!["remove", "123"],
        vec!["tag", "123", "add", "x"],
    ] {
        tarot(&dir)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("reading not found: 123"));
    }
    tarot(&dir)
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid reading id"));
}

#[test]
fn remove_and_clear() {
    let dir = TempDir::new().unwrap();
    let a = draw_json(&dir, &["--seed", "1"]);
    draw_json(&dir, &["--seed", "2"]);
    draw_json(&dir, &["--seed", "3"]);

    tarot(&dir)
        .args(["remove", &reading_id(&a)])
        .assert()
        .success();
    assert_eq!(history_json(&dir, &[]).len(), 2);

    tarot(&dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
    assert_eq!(history_json(&dir, &[]).len(), 2);

    tarot(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 readings"));
    assert!(history_json(&dir, &[]).is_empty());
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_empty() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("readings:      0"))
        .stdout(predicate::str::contains("(0.0%)"))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn stats_counts() {
    let dir = TempDir::new().unwrap();
    draw_json(&dir, &["-s", "three", "--seed", "1"]);
    draw_json(&dir, &["-s", "single", "--seed", "2"]);
    let out = tarot(&dir).args(["stats", "--json"]).output().unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["summary"]["readingCount"], 2);
    assert_eq!(value["summary"]["totalCards"], 6);
    assert_eq!(value["averageCards"], 3.0);
    assert_eq!(value["summary"]["spreads"]["Single Card"], 1);
}

// ---------------------------------------------------------------------------
// export / import
// ---------------------------------------------------------------------------

#[test]
fn export_then_import_elsewhere() {
    let src = TempDir::new().unwrap();
    draw_json(&src, &["--seed", "10"]);
    draw_json(&src, &["--seed", "20"]);
    tarot(&src)
        .args(["prefs", "--style", "emoji"])
        .assert()
        .success();

    let file = src.path().join("backup.json");
    tarot(&src)
        .args(["export", "-o", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 readings"));

    let archive: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(archive["version"], "5.2.0");
    assert_eq!(archive["visualStyle"], "emoji");
    assert_eq!(archive["history"].as_array().unwrap().len(), 2);

    let dst = TempDir::new().unwrap();
    draw_json(&dst, &["--seed", "30"]);
    tarot(&dst)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 readings"));
    let seeds: Vec<u64> = history_json(&dst, &[])
        .iter()
        .map(|r| r["seed"].as_u64().unwrap())
        .collect();
    assert_eq!(seeds, vec![20, 10]);
    tarot(&dst)
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("style:      emoji"));
}

#[test]
fn import_rejects_missing_history() {
    let dir = TempDir::new().unwrap();
    draw_json(&dir, &["--seed", "1"]);
    let file = dir.path().join("bad.json");
    fs::write(&file, r#"{"version": "5.2.0", "readings": []}"#).unwrap();
    tarot(&dir)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid import format"));
    assert_eq!(history_json(&dir, &[]).len(), 1);
}

#[test]
fn export_markdown_to_stdout() {
    let dir = TempDir::new().unwrap();
    draw_json(&dir, &["-s", "three", "--seed", "5", "-q", "Trip?"]);
    tarot(&dir)
        .args(["export", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tarot Journal"))
        .stdout(predicate::str::contains("## Past, Present, Future"))
        .stdout(predicate::str::contains("**Question**: Trip?"));
}

#[test]
fn export_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .args(["export", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// ---------------------------------------------------------------------------
// corrupt storage
// ---------------------------------------------------------------------------

#[test]
fn corrupt_history_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readingHistory.json"), "{{{ not json").unwrap();
    tarot(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings found."));
    draw_json(&dir, &["--seed", "1"]);
    assert_eq!(history_json(&dir, &[]).len(), 1);
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn cards_search() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .args(["cards", "queen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Queen of Cups"))
        .stdout(predicate::str::contains("4 cards"));
    tarot(&dir)
        .args(["cards", "--deck", "major"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22 cards"));
    tarot(&dir)
        .args(["cards", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards found."));
}

#[test]
fn spreads_listing() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .arg("spreads")
        .assert()
        .success()
        .stdout(predicate::str::contains("celtic"))
        .stdout(predicate::str::contains("Celtic Cross"));
}

// ---------------------------------------------------------------------------
// prefs
// ---------------------------------------------------------------------------

#[test]
fn prefs_defaults_and_updates() {
    let dir = TempDir::new().unwrap();
    tarot(&dir)
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("style:      text"))
        .stdout(predicate::str::contains("theme:      system"))
        .stdout(predicate::str::contains("shortcuts:  on"));
    tarot(&dir)
        .args(["prefs", "--theme", "dark", "--shortcuts", "false"])
        .assert()
        .success();
    tarot(&dir)
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme:      dark"))
        .stdout(predicate::str::contains("shortcuts:  off"));
    tarot(&dir)
        .args(["prefs", "--style", "hologram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown style"));
}

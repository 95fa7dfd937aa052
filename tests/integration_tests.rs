//! Integration Tests
//!
//! End-to-end tests for the discover → group → package pipeline.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use zip::ZipArchive;

use bankroll::asset::{Asset, AssetKind};
use bankroll::discovery::discover_assets;
use bankroll::pipeline::{group_assets, render_report, write_banks};

/// Helper to drop a JSON document into a kind subdirectory.
fn write_asset(user_dir: &Path, kind_dir: &str, filename: &str, doc: &Value) {
    let dir = user_dir.join(kind_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(filename), serde_json::to_string(doc).unwrap()).unwrap();
}

/// Helper to read every entry of an archive back into (path, document).
fn read_archive(path: &Path) -> BTreeMap<String, Value> {
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entries = BTreeMap::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        entries.insert(file.name().to_string(), serde_json::from_str(&text).unwrap());
    }
    entries
}

// === Full Pipeline Tests ===

#[test]
fn test_grouping_and_packaging_round_trip() {
    let root = tempfile::tempdir().unwrap();
    let user_dir = root.path().join("User");
    let out_dir = root.path().join("Banks");

    let pluck = json!({"settings": {"osc_1_level": 0.7}});
    let drone = json!({"settings": {"osc_1_level": 0.2}});
    write_asset(&user_dir, "Presets", "Lead::Pluck.vital", &pluck);
    write_asset(&user_dir, "Presets", "Lead::Drone.vital", &drone);

    let assets = discover_assets(&user_dir).unwrap();
    let registry = group_assets(assets, "::").unwrap();

    // Exactly one bank holding exactly the two cleaned presets.
    assert_eq!(registry.len(), 1);
    let lead = registry.get("Lead").unwrap();
    let presets = lead.assets_of_kind(AssetKind::Preset).unwrap();
    assert_eq!(
        presets.keys().collect::<Vec<_>>(),
        vec!["Drone", "Pluck"]
    );

    let written = write_banks(&registry, &out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("Lead.vitalbank")]);

    let entries = read_archive(&written[0]);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries["Lead/Presets/Pluck.vital"], pluck);
    assert_eq!(entries["Lead/Presets/Drone.vital"], drone);
}

#[test]
fn test_mixed_kinds_land_in_their_own_subdirectories() {
    let root = tempfile::tempdir().unwrap();
    let user_dir = root.path().join("User");
    let out_dir = root.path().join("Banks");

    write_asset(&user_dir, "Presets", "Bass::Sub.vital", &json!({"settings": {}}));
    write_asset(
        &user_dir,
        "LFOs",
        "anything.vitallfo",
        &json!({"name": "Bass::Wobble", "points": [0.0, 1.0]}),
    );
    write_asset(
        &user_dir,
        "Wavetables",
        "whatever.vitaltable",
        &json!({"name": "Bass::Square", "groups": []}),
    );

    let assets = discover_assets(&user_dir).unwrap();
    let registry = group_assets(assets, "::").unwrap();
    let written = write_banks(&registry, &out_dir).unwrap();

    let entries = read_archive(&written[0]);
    assert_eq!(entries.len(), 3);
    assert!(entries.contains_key("Bass/Presets/Sub.vital"));
    assert!(entries.contains_key("Bass/LFOs/Wobble.vitallfo"));
    assert!(entries.contains_key("Bass/Wavetables/Square.vitaltable"));

    // Embedded names were rewritten to the clean member name.
    assert_eq!(entries["Bass/LFOs/Wobble.vitallfo"]["name"], "Wobble");
    assert_eq!(entries["Bass/Wavetables/Square.vitaltable"]["name"], "Square");
}

#[test]
fn test_standalone_assets_are_left_out() {
    let root = tempfile::tempdir().unwrap();
    let user_dir = root.path().join("User");

    write_asset(&user_dir, "Presets", "Loner.vital", &json!({}));
    write_asset(&user_dir, "Presets", "Lead::Pluck.vital", &json!({}));

    let assets = discover_assets(&user_dir).unwrap();
    let registry = group_assets(assets, "::").unwrap();

    assert_eq!(registry.len(), 1);
    for bank in registry.iter() {
        for (_, asset) in bank.iter() {
            assert_ne!(asset.name(), "Loner");
        }
    }
}

#[test]
fn test_one_archive_per_bank() {
    let root = tempfile::tempdir().unwrap();
    let user_dir = root.path().join("User");
    let out_dir = root.path().join("Banks");

    write_asset(&user_dir, "Presets", "Lead::Pluck.vital", &json!({}));
    write_asset(&user_dir, "Presets", "Bass::Sub.vital", &json!({}));

    let assets = discover_assets(&user_dir).unwrap();
    let registry = group_assets(assets, "::").unwrap();
    let written = write_banks(&registry, &out_dir).unwrap();

    assert_eq!(
        written,
        vec![out_dir.join("Bass.vitalbank"), out_dir.join("Lead.vitalbank")]
    );
}

#[test]
fn test_duplicate_member_overwrites_silently() {
    // Two source names that clean to the same (kind, member) key: the
    // second one grouped wins and only one archive entry remains.
    let registry = group_assets(
        vec![
            Asset::new(AssetKind::Preset, json!({"marker": 1}), None, Some("Lead::X")).unwrap(),
            Asset::new(AssetKind::Preset, json!({"marker": 2}), None, Some("Lead ::X")).unwrap(),
        ],
        "::",
    )
    .unwrap();

    let out = tempfile::tempdir().unwrap();
    let written = write_banks(&registry, out.path()).unwrap();
    let entries = read_archive(&written[0]);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries["Lead/Presets/X.vital"]["marker"], 2);
}

#[test]
fn test_report_enumerates_banks_before_writing() {
    let registry = group_assets(
        vec![
            Asset::new(AssetKind::Preset, json!({}), None, Some("Lead::Pluck")).unwrap(),
            Asset::new(AssetKind::Lfo, json!({"name": "Lead::Wob"}), None, None).unwrap(),
        ],
        "::",
    )
    .unwrap();

    let report = render_report(&registry);

    assert_eq!(report, "Lead\n\tLfo\n\t\tWob\n\tPreset\n\t\tPluck\n");
}

#[test]
fn test_repacking_overwrites_previous_archive() {
    let root = tempfile::tempdir().unwrap();
    let user_dir = root.path().join("User");
    let out_dir = root.path().join("Banks");

    write_asset(&user_dir, "Presets", "Lead::Pluck.vital", &json!({"v": 1}));

    let registry = group_assets(discover_assets(&user_dir).unwrap(), "::").unwrap();
    write_banks(&registry, &out_dir).unwrap();

    // Second pass with changed content replaces the archive wholesale.
    write_asset(&user_dir, "Presets", "Lead::Pluck.vital", &json!({"v": 2}));
    let registry = group_assets(discover_assets(&user_dir).unwrap(), "::").unwrap();
    let written = write_banks(&registry, &out_dir).unwrap();

    let entries = read_archive(&written[0]);
    assert_eq!(entries["Lead/Presets/Pluck.vital"]["v"], 2);
}

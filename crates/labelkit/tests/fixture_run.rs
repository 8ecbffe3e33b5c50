//! End-to-end runs against captured NX-OS output.

use labelkit::source::commands;
use labelkit::source::fixture::{FixtureSource, capture_file_name};
use labelkit::source::platform::{DetectedPlatform, Platform};
use labelkit::{
    ApplyOutcome, AutoConfirm, AutoDecline, Description, InterfaceId, NoProgress, Plan, apply,
};
use std::fs;
use tempfile::TempDir;

const CDP: &str = r#"{
  "neigh_count": 3,
  "TABLE_cdp_neighbor_brief_info": {
    "ROW_cdp_neighbor_brief_info": [
      {"ifindex": 436207616, "device_id": "core1.dc.example.net(FOX1722G0AB)", "intf_id": "Ethernet1/1",
       "ttl": 141, "capability": ["router", "switch"], "platform_id": "N7K-C7010", "port_id": "Ethernet3/1"},
      {"ifindex": 436208128, "device_id": "core2.dc.example.net(FOX1722G0CD)", "intf_id": "Ethernet1/2",
       "ttl": 141, "platform_id": "N7K-C7010", "port_id": "Ethernet3/1"},
      {"ifindex": 436211712, "device_id": "n2k-101", "intf_id": "Ethernet1/9",
       "ttl": 150, "platform_id": "N2K-C2248TP", "port_id": "Ethernet1/1"}
    ]
  }
}"#;

const PORT_CHANNELS: &str = r#"{
  "TABLE_channel": {
    "ROW_channel": [
      {"group": 1, "port-channel": "port-channel1", "layer": "S", "status": "U", "type": "Eth", "prtcl": "LACP",
       "TABLE_member": {"ROW_member": [
         {"port": "Ethernet1/1", "port-status": "P"},
         {"port": "Ethernet1/2", "port-status": "P"}
       ]}},
      {"group": 20, "port-channel": "port-channel20", "layer": "S", "status": "D", "type": "Eth", "prtcl": "NONE"},
      {"group": 101, "port-channel": "port-channel101", "layer": "S", "status": "U", "type": "Eth", "prtcl": "NONE",
       "TABLE_member": {"ROW_member": {"port": "Ethernet1/9", "port-status": "P"}}}
    ]
  }
}"#;

const FEX: &str = r#"{
  "TABLE_fex_info": {
    "ROW_fex_info": {
      "chas_id": 101, "desc": "FEX0101", "state": "Online", "model": "N2K-C2248TP-1GE",
      "TABLE_fbr_state": {"ROW_fbr_state": [
        {"fbr_index": "Ethernet1/9", "fbr_state": "Active"},
        {"fbr_index": "port-channel101", "fbr_state": "Active"}
      ]}
    }
  }
}"#;

fn write(dir: &TempDir, command: &str, body: &str) {
    fs::write(dir.path().join(capture_file_name(command)), body).unwrap();
}

fn nexus5k_captures() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(&dir, commands::CDP_NEIGHBORS, CDP);
    write(&dir, commands::PORT_CHANNEL_SUMMARY, PORT_CHANNELS);
    write(&dir, commands::FEX_DETAIL, FEX);
    write(
        &dir,
        commands::VERSION,
        r#"{"host_name": "agg1", "chassis_id": "Nexus 5596 Chassis"}"#,
    );
    write(
        &dir,
        commands::FEATURE,
        r#"{"TABLE_cfcFeatureCtrlTable": {"ROW_cfcFeatureCtrlTable": [
            {"cfcFeatureCtrlName2": "lacp", "cfcFeatureCtrlInstanceNum2": 1, "cfcFeatureCtrlOpStatus2": "enabled"},
            {"cfcFeatureCtrlName2": "fex", "cfcFeatureCtrlInstanceNum2": 1, "cfcFeatureCtrlOpStatus2": "enabled"}
        ]}}"#,
    );
    dir
}

#[test]
fn plan_from_captured_nexus5k() {
    let dir = nexus5k_captures();
    let source = FixtureSource::new(dir.path()).unwrap();
    let platform = DetectedPlatform::detect(&source).unwrap();
    assert_eq!(platform.platform, Platform::Nexus5000);

    let plan = Plan::build(&source, &platform).unwrap();
    let rendered: Vec<_> = plan.commands.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "interface Eth1/1 ; description core1:Eth3/1",
            "interface Eth1/2 ; description core2:Eth3/1",
            "interface Eth1/9 ; description FEX101",
            "interface Po1 ; description core1:Eth3/1",
            "interface Po101 ; description FEX101",
        ]
    );

    // Down channel without members gets nothing.
    assert!(
        !plan
            .descriptions
            .contains(&InterfaceId::from("port-channel20"))
    );
    assert_eq!(
        plan.descriptions.get(&InterfaceId::from("Ethernet1/9")),
        Some(&Description::new("FEX101", None))
    );
}

#[test]
fn plan_without_fex_feature_ignores_fex_capture() {
    let dir = nexus5k_captures();
    write(
        &dir,
        commands::FEATURE,
        r#"{"TABLE_cfcFeatureCtrlTable": {"ROW_cfcFeatureCtrlTable":
            {"cfcFeatureCtrlName2": "fex", "cfcFeatureCtrlInstanceNum2": 1, "cfcFeatureCtrlOpStatus2": "disabled"}
        }}"#,
    );
    let source = FixtureSource::new(dir.path()).unwrap();
    let platform = DetectedPlatform::detect(&source).unwrap();

    let plan = Plan::build(&source, &platform).unwrap();
    assert!(plan.facts.fex.is_empty());
    assert_eq!(
        plan.descriptions
            .get(&InterfaceId::from("Ethernet1/9"))
            .map(Description::render)
            .as_deref(),
        Some("n2k-101:Eth1/1")
    );
    assert_eq!(
        plan.descriptions
            .get(&InterfaceId::from("port-channel101"))
            .map(Description::render)
            .as_deref(),
        Some("n2k-101:Eth1/1")
    );
}

#[test]
fn switch_without_cdp_neighbors_still_labels_fex_ports() {
    let dir = nexus5k_captures();
    write(&dir, commands::CDP_NEIGHBORS, r#"{"neigh_count": 0}"#);
    let source = FixtureSource::new(dir.path()).unwrap();
    let platform = DetectedPlatform::detect(&source).unwrap();

    let plan = Plan::build(&source, &platform).unwrap();
    assert!(plan.facts.neighbors.is_empty());
    let rendered: Vec<_> = plan.commands.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "interface Eth1/9 ; description FEX101",
            "interface Po101 ; description FEX101",
        ]
    );
}

#[test]
fn missing_required_source_aborts_plan() {
    let dir = nexus5k_captures();
    fs::remove_file(dir.path().join(capture_file_name(commands::PORT_CHANNEL_SUMMARY))).unwrap();
    let source = FixtureSource::new(dir.path()).unwrap();
    let platform = DetectedPlatform::detect_or_disabled(&source);

    let err = Plan::build(&source, &platform).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn apply_records_commands_only_after_confirmation() {
    let dir = nexus5k_captures();
    let mut device = FixtureSource::new(dir.path()).unwrap();
    let platform = DetectedPlatform::detect_or_disabled(&device);
    let plan = Plan::build(&device, &platform).unwrap();

    let outcome = apply(&plan.commands, &mut device, &mut AutoDecline, &mut NoProgress).unwrap();
    assert!(matches!(outcome, ApplyOutcome::Declined));
    assert!(device.applied().is_empty());

    let outcome = apply(&plan.commands, &mut device, &mut AutoConfirm, &mut NoProgress).unwrap();
    let ApplyOutcome::Applied(report) = outcome else {
        panic!("expected commands to be applied");
    };
    assert!(report.is_success());
    assert_eq!(device.applied(), plan.commands.as_slice());
}

#[test]
fn identical_captures_give_identical_commands() {
    let dir = nexus5k_captures();
    let source = FixtureSource::new(dir.path()).unwrap();
    let platform = DetectedPlatform::detect(&source).unwrap();

    let first = Plan::build(&source, &platform).unwrap();
    let second = Plan::build(&source, &platform).unwrap();
    assert_eq!(first.commands, second.commands);
}

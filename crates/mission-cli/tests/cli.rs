//! End-to-end checks of the `amp-mission` binary. AMP is stood in for by a
//! local `tiny_http` server where a run needs one.

use std::path::Path;
use std::process::{Command, Output};
use std::thread::JoinHandle;

use pretty_assertions::assert_eq;

const LAB_VARS: [&str; 5] = [
    "AMP_HOST",
    "AMP_CLIENT_ID",
    "AMP_API_KEY",
    "WEBEX_TEAMS_ACCESS_TOKEN",
    "WEBEX_TEAMS_ROOM_ID",
];

fn amp_mission(root: &Path, args: &[&str]) -> Output {
    amp_mission_in(root, root, args)
}

fn amp_mission_in(cwd: &Path, root: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_amp-mission"));
    command
        .args(args)
        .arg("--root")
        .arg(root)
        .arg("--color")
        .arg("never")
        .current_dir(cwd);
    for var in LAB_VARS {
        command.env_remove(var);
    }
    command.output().expect("binary runs")
}

/// Answer one `/v1/events` request with `body`, returning the base URL.
fn serve_events_once(body: &'static str) -> (String, JoinHandle<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = std::thread::spawn(move || {
        let request = server.recv().unwrap();
        let url = request.url().to_string();
        request
            .respond(tiny_http::Response::from_string(body).with_status_code(200))
            .unwrap();
        url
    });
    (format!("http://{addr}"), handle)
}

fn write_amp_config(root: &Path, base_url: &str) {
    std::fs::write(
        root.join("amp-mission.toml"),
        format!("[amp]\nclient_id = \"id\"\napi_key = \"key\"\nbase_url = \"{base_url}\"\n"),
    )
    .unwrap();
}

#[test]
fn artifacts_json_reads_saved_lists() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("mission-data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("macaddr.json"), "[\n  \"aa:bb\"\n]").unwrap();
    std::fs::write(data.join("sha256list.json"), "[\n  \"f00d\"\n]").unwrap();

    let output = amp_mission(dir.path(), &["artifacts", "--json"]);

    assert!(output.status.success(), "{output:?}");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "mac_addresses": ["aa:bb"], "sha256_hashes": ["f00d"] })
    );
}

#[test]
fn artifacts_without_files_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = amp_mission(dir.path(), &["artifacts"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read MAC address artifact"), "{stderr}");
}

#[test]
fn run_without_credentials_is_rejected_before_any_request() {
    let dir = tempfile::tempdir().unwrap();

    let output = amp_mission(dir.path(), &["run"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "{stderr}");
    assert!(stderr.contains("'amp'"), "{stderr}");
    assert!(!dir.path().join("mission-data").exists());
}

#[test]
fn run_requires_webex_unless_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("amp-mission.toml"),
        "[amp]\nclient_id = \"id\"\napi_key = \"key\"\n",
    )
    .unwrap();

    let output = amp_mission(dir.path(), &["run"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'webex'"), "{stderr}");
}

#[test]
fn run_without_malware_events_exits_one_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (base_url, server) = serve_events_once(r#"{"data":[{"event_type_id":553648130}]}"#);
    write_amp_config(dir.path(), &base_url);

    let output = amp_mission(dir.path(), &["run", "--skip-notify"]);
    let url = server.join().unwrap();

    assert_eq!(url, "/v1/events");
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Retrieved 1 events from AMP"), "{stdout}");
    assert!(stdout.contains("No malware events found."), "{stdout}");
    assert!(!dir.path().join("mission-data").exists());
}

#[test]
fn run_saves_observables_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let (base_url, server) = serve_events_once(
        r#"{"data":[
            {"event_type_id":553648130},
            {
                "event_type_id":1107296272,
                "computer":{
                    "hostname":"Demo_AMP_Threat_Audit",
                    "network_addresses":[{"ip":"10.0.0.5","mac":"e6:80:50:1e:e5:20"}]
                },
                "file":{"identity":{"sha256":"4d2d2ed7"}}
            }
        ]}"#,
    );
    write_amp_config(dir.path(), &base_url);

    let output = amp_mission(dir.path(), &["run", "--skip-notify"]);
    server.join().unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved 1 observables from 2 events"), "{stdout}");
    assert!(stdout.contains("Demo_AMP_Threat_Audit (10.0.0.5, e6:80:50:1e:e5:20)"), "{stdout}");
    assert!(stdout.contains("Skipped the Webex Teams notification"), "{stdout}");

    let data = dir.path().join("mission-data");
    assert_eq!(
        std::fs::read_to_string(data.join("macaddr.json")).unwrap(),
        "[\n  \"e6:80:50:1e:e5:20\"\n]"
    );
    assert_eq!(
        std::fs::read_to_string(data.join("sha256list.json")).unwrap(),
        "[\n  \"4d2d2ed7\"\n]"
    );
}

#[test]
fn root_without_config_ignores_cwd_config() {
    let cwd = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        cwd.path().join("amp-mission.toml"),
        "[amp]\nclient_id = \"id\"\napi_key = \"key\"\n",
    )
    .unwrap();

    let output = amp_mission_in(cwd.path(), root.path(), &["run", "--skip-notify"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'amp'"), "{stderr}");
}

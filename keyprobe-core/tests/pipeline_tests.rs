// keyprobe-core/tests/pipeline_tests.rs

use keyprobe_core::external::mocks::{MockFrameProbe, MockResponse};
use keyprobe_core::{CoreConfigBuilder, CoreError, Stage, extract_keyframes, filter_iframes};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

const REPORT: &str = "[FRAME]\npict_type=I\npts=100\npts_time=4.0\n[/FRAME]\n\
                      [FRAME]\npict_type=P\npts=101\n[/FRAME]\n\
                      [FRAME]\npict_type=I\npts=200\n[/FRAME]\n";

#[test]
fn test_end_to_end_writes_keyframe_lines() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("iframe_info.txt");
    let config = CoreConfigBuilder::new()
        .input_path(PathBuf::from("movie.mp4"))
        .output_path(output.clone())
        .build();
    let probe = MockFrameProbe::with_report(REPORT);

    let summary = extract_keyframes(&config, &probe)?;

    assert_eq!(summary.keyframes, 2);
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.incomplete_blocks, 0);
    assert_eq!(probe.received_calls(), vec![PathBuf::from("movie.mp4")]);
    assert_eq!(
        fs::read_to_string(&output)?,
        "pict_type=I, pts_time=4.0, pts=100\npict_type=I, pts_time=N/A, pts=200\n"
    );
    Ok(())
}

#[test]
fn test_no_keyframes_produces_empty_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("out.txt");
    let config = CoreConfigBuilder::new().output_path(output.clone()).build();

    let summary = extract_keyframes(&config, &MockFrameProbe::with_report(""))?;

    assert_eq!(summary.keyframes, 0);
    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output)?, "");
    Ok(())
}

#[test]
fn test_incomplete_blocks_are_counted_in_lenient_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("out.txt");
    let config = CoreConfigBuilder::new().output_path(output.clone()).build();
    let report = format!("{REPORT}[FRAME]\npict_type=I\npts=300\n");

    let summary = extract_keyframes(&config, &MockFrameProbe::with_report(report))?;

    assert_eq!(summary.keyframes, 2);
    assert_eq!(summary.incomplete_blocks, 1);
    assert_eq!(fs::read_to_string(&output)?.lines().count(), 2);
    Ok(())
}

#[test]
fn test_incomplete_blocks_fail_in_strict_mode() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let config = CoreConfigBuilder::new()
        .output_path(output.clone())
        .strict(true)
        .build();
    let report = format!("{REPORT}[FRAME]\npict_type=I\n");

    let err = extract_keyframes(&config, &MockFrameProbe::with_report(report)).unwrap_err();

    assert!(matches!(err, CoreError::IncompleteFrames { count: 1 }));
    assert_eq!(err.stage(), Stage::Filter);
    assert!(!output.exists());
}

#[test]
fn test_probe_timeout_is_a_probe_stage_failure() {
    let dir = tempdir().unwrap();
    let config = CoreConfigBuilder::new()
        .output_path(dir.path().join("out.txt"))
        .build();

    let err = extract_keyframes(&config, &MockFrameProbe::new(MockResponse::Timeout(Duration::from_secs(30))))
        .unwrap_err();

    assert_eq!(err.stage(), Stage::Probe);
    assert!(err.to_string().contains("30.000s"));
}

#[test]
fn test_unwritable_destination_is_a_write_stage_failure() {
    let dir = tempdir().unwrap();
    let config = CoreConfigBuilder::new()
        .output_path(dir.path().join("no_such_dir").join("out.txt"))
        .build();

    let err = extract_keyframes(&config, &MockFrameProbe::with_report(REPORT)).unwrap_err();

    assert_eq!(err.stage(), Stage::Write);
}

#[test]
fn test_summary_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = CoreConfigBuilder::new()
        .output_path(dir.path().join("out.txt"))
        .build();

    let summary = extract_keyframes(&config, &MockFrameProbe::with_report(REPORT))?;
    let value: serde_json::Value = serde_json::from_str(&summary.to_json()?)?;

    assert_eq!(value["keyframes"], 2);
    assert_eq!(value["frames"], 3);
    Ok(())
}

#[test]
fn test_keyframe_count_matches_input_blocks() {
    let mut report = String::new();
    for i in 0..50 {
        let kind = if i % 10 == 0 { "I" } else if i % 3 == 0 { "B" } else { "P" };
        report.push_str(&format!(
            "[FRAME]\npict_type={kind}\npts={i}\npts_time={}.0\n[/FRAME]\n",
            i
        ));
    }

    let lines = filter_iframes(&report);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "pict_type=I, pts_time=0.0, pts=0");
    assert_eq!(lines[4], "pict_type=I, pts_time=40.0, pts=40");
    for line in &lines {
        assert_eq!(line.split(", ").count(), 3);
    }
}

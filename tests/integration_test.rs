// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for loading pose files and computing joint angles

use std::fs;
use std::path::Path;

use pose_angles::{
    AnglePlot, AnimationTarget, Body25Joint, FrameStore, JointCoords, JointTriplet, Keypoint,
    PlotConfig, PoseError, angle_series,
};

/// Flat BODY_25 array with the given joints set and everything else zero.
fn keypoints(joints: &[(Body25Joint, [f64; 3])]) -> Vec<f64> {
    let mut kp = vec![0.0; 75];
    for (joint, triple) in joints {
        let offset = joint.index() * 3;
        kp[offset..offset + 3].copy_from_slice(triple);
    }
    kp
}

fn document(people: &[Vec<f64>]) -> String {
    let people: Vec<String> = people
        .iter()
        .map(|kp| {
            let values: Vec<String> = kp.iter().map(f64::to_string).collect();
            format!(r#"{{"pose_keypoints_2d":[{}]}}"#, values.join(","))
        })
        .collect();
    format!(r#"{{"version":1.3,"people":[{}]}}"#, people.join(","))
}

fn write_frame(dir: &Path, name: &str, people: &[Vec<f64>]) {
    fs::write(dir.join(name), document(people)).unwrap();
}

fn arm(shoulder: [f64; 2], elbow: [f64; 2], wrist: [f64; 2]) -> Vec<f64> {
    keypoints(&[
        (Body25Joint::RShoulder, [shoulder[0], shoulder[1], 0.9]),
        (Body25Joint::RElbow, [elbow[0], elbow[1], 0.8]),
        (Body25Joint::RWrist, [wrist[0], wrist[1], 0.7]),
    ])
}

#[test]
fn test_single_file_returns_triple() {
    let dir = tempfile::tempdir().unwrap();
    let kp = keypoints(&[
        (Body25Joint::Nose, [10.0, 20.0, 0.9]),
        (Body25Joint::Neck, [30.0, 40.0, 0.8]),
    ]);
    write_frame(dir.path(), "frame.json", &[kp]);

    let store = FrameStore::load(dir.path().join("frame.json")).unwrap();
    assert!(!store.is_sequence());
    assert_eq!(
        store.joint_coords(Body25Joint::Nose, 0).unwrap(),
        JointCoords::Single(Keypoint::new(10.0, 20.0, 0.9))
    );
    assert_eq!(
        store.joint_coords(Body25Joint::Neck, 0).unwrap(),
        JointCoords::Single(Keypoint::new(30.0, 40.0, 0.8))
    );
    for joint in Body25Joint::ALL.into_iter().skip(2) {
        assert_eq!(
            store.joint_coords(joint, 0).unwrap(),
            JointCoords::Single(Keypoint::new(0.0, 0.0, 0.0))
        );
    }
}

#[test]
fn test_directory_loads_in_filename_order() {
    let dir = tempfile::tempdir().unwrap();
    for (name, x) in [("b.json", 2.0), ("a.json", 1.0), ("c.json", 3.0)] {
        write_frame(
            dir.path(),
            name,
            &[keypoints(&[(Body25Joint::RKnee, [x, x * 10.0, 0.5])])],
        );
    }

    let store = FrameStore::load(dir.path()).unwrap();
    assert!(store.is_sequence());
    assert_eq!(store.len(), 3);

    let track = store.joint_track(Body25Joint::RKnee, 0).unwrap();
    assert_eq!(track.x, [1.0, 2.0, 3.0]);
    assert_eq!(track.y, [10.0, 20.0, 30.0]);
    assert_eq!(track.confidence, [0.5, 0.5, 0.5]);
}

#[test]
fn test_missing_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        FrameStore::load(dir.path().join("missing")),
        Err(PoseError::NotFound(_))
    ));
}

#[test]
fn test_malformed_file_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "frame_000001.json", &[keypoints(&[])]);
    fs::write(dir.path().join("frame_000002.json"), "{\"people\": [").unwrap();
    write_frame(dir.path(), "frame_000003.json", &[keypoints(&[])]);

    assert!(matches!(
        FrameStore::load(dir.path()),
        Err(PoseError::FormatError(_))
    ));
}

#[test]
fn test_short_keypoint_array_fails_every_query() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "frame.json", &[vec![1.0; 74]]);

    let store = FrameStore::load(dir.path().join("frame.json")).unwrap();
    for joint in Body25Joint::ALL {
        assert!(matches!(
            store.joint_coords(joint, 0),
            Err(PoseError::FormatError(_))
        ));
    }
}

#[test]
fn test_person_index_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "frame_0.json", &[keypoints(&[]), keypoints(&[])]);
    write_frame(dir.path(), "frame_1.json", &[keypoints(&[])]);

    let store = FrameStore::load(dir.path()).unwrap();
    assert!(store.joint_coords(Body25Joint::Nose, 0).is_ok());
    assert!(matches!(
        store.joint_coords(Body25Joint::Nose, 1),
        Err(PoseError::LookupError(_))
    ));
}

#[test]
fn test_right_arm_angles_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(
        dir.path(),
        "frame_000000000000_keypoints.json",
        &[arm([0.0, 0.0], [0.0, 10.0], [10.0, 10.0])],
    );
    write_frame(
        dir.path(),
        "frame_000000000001_keypoints.json",
        &[arm([0.0, 0.0], [0.0, 10.0], [0.0, 20.0])],
    );

    let store = FrameStore::load(dir.path()).unwrap();
    let angles = angle_series(&store, JointTriplet::RIGHT_ARM, 0, true).unwrap();
    assert_eq!(angles.len(), 2);
    assert!((angles[0] - 90.0).abs() < 1e-9);
    assert!((angles[1] - 180.0).abs() < 1e-9);
}

#[test]
fn test_undetected_arm_is_degenerate() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "frame.json", &[keypoints(&[])]);

    let store = FrameStore::load(dir.path().join("frame.json")).unwrap();
    assert!(matches!(
        angle_series(&store, JointTriplet::RIGHT_ARM, 0, true),
        Err(PoseError::DegenerateInput(_))
    ));
}

#[test]
fn test_animation_frames_match_series_length() {
    let dir = tempfile::tempdir().unwrap();
    let frames_dir = dir.path().join("poses");
    fs::create_dir(&frames_dir).unwrap();
    for i in 0..5 {
        let y = 10.0 + f64::from(i);
        write_frame(
            &frames_dir,
            &format!("frame_{i:03}.json"),
            &[arm([0.0, 0.0], [0.0, 10.0], [10.0, y])],
        );
    }

    let store = FrameStore::load(&frames_dir).unwrap();
    let angles = angle_series(&store, JointTriplet::RIGHT_ARM, 0, true).unwrap();

    let config = PlotConfig::new()
        .with_window(3)
        .with_size(200, 160)
        .with_download_font(false);
    let plot = AnglePlot::with_font(&angles, config, None).unwrap();
    let out = dir.path().join("plot");
    let written = plot.animate(&AnimationTarget::Frames(out.clone())).unwrap();

    assert_eq!(written, 5);
    assert!(out.join("frame_000004.png").is_file());
}

#[test]
fn test_binary_file_in_directory_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "a.json", &[keypoints(&[])]);
    fs::write(dir.path().join("b.json"), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    assert!(matches!(
        FrameStore::load(dir.path()),
        Err(PoseError::FormatError(_))
    ));
}

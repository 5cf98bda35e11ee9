//! End-to-end: detector transcript JSON in, training CSV out.

use std::fs;

use vapgen_app::input::DetectorTranscript;
use vapgen_app::writer::DatasetWriter;
use vapgen_core::{WindowConfig, Windower};

const TRANSCRIPT: &str = r#"{
    "audio_path": "session.wav",
    "duration": 42.0,
    "speakers": {
        "caller": [
            {"start": 1.0, "end": 2.5},
            {"start": 18.5, "end": 19.5}
        ],
        "operator": [
            {"start": 21.0, "end": 30.0}
        ]
    }
}"#;

#[test]
fn transcript_to_csv_round() {
    let session = DetectorTranscript::parse(TRANSCRIPT)
        .unwrap()
        .into_session()
        .unwrap();

    let config = WindowConfig {
        shift: 1.0,
        ..Default::default()
    };
    let windower = Windower::new(
        &session.channels[0],
        &session.channels[1],
        session.duration.unwrap(),
        config,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("output.csv");
    let mut writer = DatasetWriter::create(&csv_path).unwrap();
    for row in windower.rows("session.wav", 0, "sample") {
        writer.write_row(&row).unwrap();
    }
    assert_eq!(writer.finish().unwrap(), 2);

    let text = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two windows");
    assert_eq!(lines[0], "audio_path,start,end,vad_list,session,dataset");

    // Window [0, 20): caller speech verbatim, operator silent
    assert!(lines[1].starts_with("session.wav,0,20,"));
    assert!(lines[1].contains("[[[1.0,2.5],[18.5,19.5]],[]]"), "{}", lines[1]);

    // Window [19, 39): caller burst clipped to [0, 0.5], operator clipped
    assert!(lines[2].starts_with("session.wav,19,39,"));
    assert!(lines[2].contains("[[[0.0,0.5]],[[2.0,11.0]]]"), "{}", lines[2]);
}

#[test]
fn short_recording_produces_header_only_table() {
    let json = r#"{
        "duration": 12.0,
        "speakers": {"a": [{"start": 0.5, "end": 1.0}], "b": []}
    }"#;
    let session = DetectorTranscript::parse(json).unwrap().into_session().unwrap();
    let windower = Windower::new(
        &session.channels[0],
        &session.channels[1],
        session.duration.unwrap(),
        WindowConfig::default(),
    )
    .unwrap();

    let mut writer = DatasetWriter::from_writer(Vec::new()).unwrap();
    for row in windower.rows("a.wav", 0, "sample") {
        writer.write_row(&row).unwrap();
    }
    assert_eq!(writer.finish().unwrap(), 0);
}

#[test]
fn invalid_transcript_writes_nothing() {
    let json = r#"{
        "duration": 42.0,
        "speakers": {"a": [{"start": 5.0, "end": 3.0}], "b": []}
    }"#;
    let session = DetectorTranscript::parse(json).unwrap().into_session().unwrap();
    let result = Windower::new(
        &session.channels[0],
        &session.channels[1],
        session.duration.unwrap(),
        WindowConfig::default(),
    );
    assert!(result.is_err(), "inverted interval must fail before output");
}

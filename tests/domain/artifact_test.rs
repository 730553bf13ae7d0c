use medivoice::domain::{ArtifactName, ArtifactNamer, InvalidArtifactName};

#[test]
fn given_stamp_when_building_recording_name_then_format_is_prefix_stamp_extension() {
    assert_eq!(
        ArtifactName::recording_wav(1234).as_str(),
        "recording_1234.wav"
    );
    assert_eq!(
        ArtifactName::response_mp3(1234).as_str(),
        "response_1234.mp3"
    );
    assert_eq!(
        ArtifactName::response_wav(1234).as_str(),
        "response_1234.wav"
    );
}

#[test]
fn given_plain_filename_when_validating_then_accepted() {
    let name = ArtifactName::new("response_7.mp3").unwrap();
    assert_eq!(name.as_str(), "response_7.mp3");
    assert_eq!(format!("{}", name), name.as_str());
}

#[test]
fn given_blank_name_when_validating_then_rejected() {
    assert!(matches!(
        ArtifactName::new(""),
        Err(InvalidArtifactName::Empty)
    ));
    assert!(matches!(
        ArtifactName::new("   "),
        Err(InvalidArtifactName::Empty)
    ));
}

#[test]
fn given_path_components_when_validating_then_rejected() {
    for candidate in ["../secret.mp3", "a/b.wav", "a\\b.wav", "..", "x..y.mp3"] {
        assert!(
            matches!(
                ArtifactName::new(candidate),
                Err(InvalidArtifactName::PathEscape(_))
            ),
            "accepted {candidate}"
        );
    }
}

#[test]
fn given_messy_upload_name_when_sanitizing_then_result_is_safe() {
    assert_eq!(
        ArtifactName::sanitize("skin rash (left arm).png")
            .unwrap()
            .as_str(),
        "skin_rash__left_arm_.png"
    );
    assert_eq!(
        ArtifactName::sanitize("../../etc/passwd").unwrap().as_str(),
        "passwd"
    );
    assert_eq!(
        ArtifactName::sanitize(".hidden.png").unwrap().as_str(),
        "hidden.png"
    );
}

#[test]
fn given_nothing_usable_when_sanitizing_then_rejected() {
    assert!(matches!(
        ArtifactName::sanitize("???"),
        Err(InvalidArtifactName::Empty)
    ));
    assert!(matches!(
        ArtifactName::sanitize(""),
        Err(InvalidArtifactName::Empty)
    ));
}

#[test]
fn given_rapid_calls_when_taking_stamps_then_strictly_increasing() {
    let namer = ArtifactNamer::new();
    let mut previous = namer.next_stamp();
    for _ in 0..1000 {
        let next = namer.next_stamp();
        assert!(next > previous, "{next} did not advance past {previous}");
        previous = next;
    }
}

#[test]
fn given_concurrent_callers_when_taking_stamps_then_no_duplicates() {
    use std::collections::HashSet;
    use std::sync::Arc;

    let namer = Arc::new(ArtifactNamer::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let namer = Arc::clone(&namer);
        handles.push(std::thread::spawn(move || {
            (0..250).map(|_| namer.next_stamp()).collect::<Vec<_>>()
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for stamp in handle.join().unwrap() {
            assert!(seen.insert(stamp), "stamp {stamp} issued twice");
        }
    }
}

use medivoice::application::ports::PlaybackError;
use medivoice::infrastructure::audio::PlaybackCommand;

#[test]
fn given_known_operating_systems_when_resolving_then_maps_to_native_player() {
    assert_eq!(
        PlaybackCommand::resolve("macos").unwrap(),
        PlaybackCommand::Afplay
    );
    assert_eq!(
        PlaybackCommand::resolve("windows").unwrap(),
        PlaybackCommand::PowerShell
    );
    assert_eq!(
        PlaybackCommand::resolve("linux").unwrap(),
        PlaybackCommand::Aplay
    );
}

#[test]
fn given_unknown_operating_system_when_resolving_then_returns_unsupported_os() {
    let result = PlaybackCommand::resolve("freebsd");

    match result {
        Err(PlaybackError::UnsupportedOs(os)) => assert_eq!(os, "freebsd"),
        other => panic!("expected UnsupportedOs, got {:?}", other),
    }
}

#[test]
fn given_resolved_player_when_displayed_then_names_the_binary() {
    assert_eq!(PlaybackCommand::Afplay.to_string(), "afplay");
    assert_eq!(PlaybackCommand::PowerShell.to_string(), "powershell");
    assert_eq!(PlaybackCommand::Aplay.to_string(), "aplay");
}

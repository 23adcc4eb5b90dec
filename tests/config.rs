use std::io::Write;

use iconmap::{
    config::{Config, Error, IconTheme},
    icons::IconId,
};

#[test]
fn empty_document_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    assert_eq!(Config::from_toml_str("[icons]\n").unwrap(), Config::default());
}

#[test]
fn overrides_are_resolved() {
    let config = Config::from_toml_str(
        r#"
        [icons]
        folder = "FolderOpen"
        placeholder = "Search"
        "#,
    )
    .unwrap();

    assert_eq!(config.icons.folder, IconId::FolderOpen);
    assert_eq!(config.icons.placeholder, IconId::Search);
    assert_eq!(config.icons.play, IconTheme::default().play);
}

#[test]
fn unknown_identifier_is_an_explicit_error() {
    let err = Config::from_toml_str("[icons]\nplay = \"NotAnIcon\"\n").unwrap_err();
    assert!(matches!(err, Error::UnknownIcon { slot: "play", .. }));
    assert_eq!(err.unknown_icon().unwrap().id(), "NotAnIcon");
    assert_eq!(
        err.to_string(),
        "icon slot 'play': unknown icon identifier 'NotAnIcon'"
    );
}

#[test]
fn unknown_slots_and_bad_types_are_parse_errors() {
    assert!(matches!(
        Config::from_toml_str("[icons]\nshuffle = \"Shuffle\"\n"),
        Err(Error::Parse(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[icons]\nplay = 3\n"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[icons]\nstop = \"Heart\"").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.icons.stop, IconId::Heart);
    assert_eq!(
        Config::load_or_default(Some(file.path())).unwrap(),
        config
    );
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_or_default(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

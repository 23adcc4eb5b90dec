use std::{collections::HashSet, str::FromStr, thread};

use iconmap::{
    UnknownIconId,
    icons::{ICONS, IconId, IconKey, IconRegistry, nerd},
};

iconmap::icon_registry! {
    pub enum Transport {
        Play => nerd::PLAY,
        Pause => nerd::PAUSE,
    }
}

#[test]
fn every_key_has_a_handle() {
    for (id, icon) in ICONS.iter() {
        assert!(!icon.glyph().is_empty(), "{id}");
        assert!(std::ptr::eq(icon, ICONS.get(id)));
    }
}

#[test]
fn identifier_set_equals_key_set() {
    let keys: HashSet<IconId> = ICONS.keys().iter().copied().collect();
    let all: HashSet<IconId> = IconId::ALL.iter().copied().collect();
    assert_eq!(keys, all);
    assert_eq!(keys.len(), ICONS.keys().len());
}

#[test]
fn keys_are_stable_between_calls() {
    assert_eq!(ICONS.keys(), ICONS.keys());
    assert_eq!(ICONS.keys()[0], IconId::Play);
    assert_eq!(ICONS.keys()[1], IconId::Pause);
}

#[test]
fn unknown_string_is_rejected() {
    let err = ICONS.lookup("NotAnIcon").unwrap_err();
    assert_eq!(err, UnknownIconId::new("NotAnIcon"));
    assert_eq!(ICONS.resolve("NotAnIcon").unwrap_err().id(), "NotAnIcon");
    assert!(IconId::from_str("NotAnIcon").is_err());
}

#[test]
fn play_pause_registry() {
    let registry = IconRegistry::<Transport>::new();
    assert_eq!(registry.len(), 2);
    assert!(std::ptr::eq(registry.get(Transport::Play), &nerd::PLAY));
    assert_eq!(registry.lookup("Play"), Ok(Transport::Play));
    assert_eq!(registry.lookup("Stop"), Err(UnknownIconId::new("Stop")));
    assert_eq!(Transport::Pause.to_string(), "Pause");
}

#[test]
fn serde_boundary_validates_names() {
    let id: IconId = serde_json::from_str("\"FolderOpen\"").unwrap();
    assert_eq!(id, IconId::FolderOpen);
    assert_eq!(serde_json::to_string(&IconId::Stop).unwrap(), "\"Stop\"");

    let err = serde_json::from_str::<IconId>("\"Stopp\"").unwrap_err();
    assert!(err.to_string().contains("unknown icon identifier 'Stopp'"));

    let ids: Vec<Transport> = serde_json::from_str("[\"Pause\", \"Play\"]").unwrap();
    assert_eq!(ids, vec![Transport::Pause, Transport::Play]);
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| ICONS.iter().map(|(_, icon)| icon.codepoint()).sum::<u32>()))
        .collect();
    let sums: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(sums.windows(2).all(|w| w[0] == w[1]));
}

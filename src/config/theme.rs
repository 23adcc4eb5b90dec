// src/config/theme.rs
//! Assignment of registry icons to the places the UI draws them.

use serde::Deserialize;

use super::error::{Error, Result};
use crate::{
    fs::FileCategory,
    icons::{ICONS, Icon, IconId},
};

/// Which icon each UI slot uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTheme {
    pub folder: IconId,
    pub audio: IconId,
    pub image: IconId,
    pub video: IconId,
    pub document: IconId,
    pub binary: IconId,
    pub play: IconId,
    pub pause: IconId,
    pub stop: IconId,
    pub previous: IconId,
    pub next: IconId,
    /// Shown by the UI when a name cannot be resolved.
    pub placeholder: IconId,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder: IconId::Folder,
            audio: IconId::FileAudio,
            image: IconId::FileImage,
            video: IconId::FileVideo,
            document: IconId::FileText,
            binary: IconId::FileBinary,
            play: IconId::Play,
            pause: IconId::Pause,
            stop: IconId::Stop,
            previous: IconId::Previous,
            next: IconId::Next,
            placeholder: IconId::Question,
        }
    }
}

impl IconTheme {
    pub fn category_icon(&self, category: FileCategory) -> &'static Icon {
        let id = match category {
            FileCategory::Image => self.image,
            FileCategory::Audio => self.audio,
            FileCategory::Video => self.video,
            FileCategory::Document => self.document,
            FileCategory::Binary => self.binary,
        };
        ICONS.get(id)
    }

    pub fn placeholder(&self) -> &'static Icon {
        ICONS.get(self.placeholder)
    }

    /// `(slot, icon)` pairs in a fixed order.
    pub fn slots(&self) -> [(&'static str, IconId); 12] {
        [
            ("folder", self.folder),
            ("audio", self.audio),
            ("image", self.image),
            ("video", self.video),
            ("document", self.document),
            ("binary", self.binary),
            ("play", self.play),
            ("pause", self.pause),
            ("stop", self.stop),
            ("previous", self.previous),
            ("next", self.next),
            ("placeholder", self.placeholder),
        ]
    }

    /// Names of the slots currently assigned `id`.
    pub fn slots_using(&self, id: IconId) -> Vec<&'static str> {
        self.slots()
            .into_iter()
            .filter(|&(_, slot)| slot == id)
            .map(|(name, _)| name)
            .collect()
    }
}

/// `[icons]` table as written in the file. Names stay raw strings here so a
/// bad one is reported against its slot.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct RawIconTheme {
    folder: Option<String>,
    audio: Option<String>,
    image: Option<String>,
    video: Option<String>,
    document: Option<String>,
    binary: Option<String>,
    play: Option<String>,
    pause: Option<String>,
    stop: Option<String>,
    previous: Option<String>,
    next: Option<String>,
    placeholder: Option<String>,
}

impl RawIconTheme {
    pub(super) fn resolve(self) -> Result<IconTheme> {
        let mut theme = IconTheme::default();
        let raw = [
            ("folder", self.folder, &mut theme.folder),
            ("audio", self.audio, &mut theme.audio),
            ("image", self.image, &mut theme.image),
            ("video", self.video, &mut theme.video),
            ("document", self.document, &mut theme.document),
            ("binary", self.binary, &mut theme.binary),
            ("play", self.play, &mut theme.play),
            ("pause", self.pause, &mut theme.pause),
            ("stop", self.stop, &mut theme.stop),
            ("previous", self.previous, &mut theme.previous),
            ("next", self.next, &mut theme.next),
            ("placeholder", self.placeholder, &mut theme.placeholder),
        ];

        for (slot, name, target) in raw {
            if let Some(name) = name {
                *target = ICONS
                    .lookup(&name)
                    .map_err(|source| Error::UnknownIcon { slot, source })?;
            }
        }
        Ok(theme)
    }
}

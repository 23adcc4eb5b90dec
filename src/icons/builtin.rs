// src/icons/builtin.rs
//! The application's icon set.

use super::{IconRegistry, nerd};

crate::icon_registry! {
    /// Names of every icon the application can refer to.
    pub enum IconId {
        Play => nerd::PLAY,
        Pause => nerd::PAUSE,
        Stop => nerd::STOP,
        Previous => nerd::STEP_BACKWARD,
        Next => nerd::STEP_FORWARD,
        Shuffle => nerd::RANDOM,
        Repeat => nerd::REPEAT,
        VolumeUp => nerd::VOLUME_UP,
        VolumeMute => nerd::VOLUME_OFF,
        Folder => nerd::FOLDER,
        FolderOpen => nerd::FOLDER_OPEN,
        FileAudio => nerd::FILE_AUDIO,
        FileImage => nerd::FILE_IMAGE,
        FileVideo => nerd::FILE_VIDEO,
        FileText => nerd::FILE_TEXT,
        FileBinary => nerd::FILE_ARCHIVE,
        Music => nerd::MUSIC,
        Search => nerd::SEARCH,
        Heart => nerd::HEART,
        Star => nerd::STAR,
        List => nerd::LIST,
        Question => nerd::QUESTION_CIRCLE,
    }
}

/// The application-wide registry.
pub static ICONS: IconRegistry<IconId> = IconRegistry::new();

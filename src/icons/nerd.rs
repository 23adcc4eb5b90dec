// src/icons/nerd.rs
//! Nerd Font glyphs (Font Awesome range).

use super::Icon;

// Transport
pub static PLAY: Icon = Icon::new("\u{f04b}");
pub static PAUSE: Icon = Icon::new("\u{f04c}");
pub static STOP: Icon = Icon::new("\u{f04d}");
pub static STEP_BACKWARD: Icon = Icon::new("\u{f048}");
pub static STEP_FORWARD: Icon = Icon::new("\u{f051}");
pub static RANDOM: Icon = Icon::new("\u{f074}");
pub static REPEAT: Icon = Icon::new("\u{f01e}");
pub static VOLUME_UP: Icon = Icon::new("\u{f028}");
pub static VOLUME_OFF: Icon = Icon::new("\u{f026}");

// Files
pub static FOLDER: Icon = Icon::new("\u{f07b}");
pub static FOLDER_OPEN: Icon = Icon::new("\u{f07c}");
pub static FILE_AUDIO: Icon = Icon::new("\u{f1c7}");
pub static FILE_IMAGE: Icon = Icon::new("\u{f1c5}");
pub static FILE_VIDEO: Icon = Icon::new("\u{f1c8}");
pub static FILE_TEXT: Icon = Icon::new("\u{f15c}");
pub static FILE_ARCHIVE: Icon = Icon::new("\u{f1c6}");

// General
pub static MUSIC: Icon = Icon::new("\u{f001}");
pub static SEARCH: Icon = Icon::new("\u{f002}");
pub static HEART: Icon = Icon::new("\u{f004}");
pub static STAR: Icon = Icon::new("\u{f005}");
pub static LIST: Icon = Icon::new("\u{f03a}");
pub static QUESTION_CIRCLE: Icon = Icon::new("\u{f059}");

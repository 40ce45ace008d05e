use bevy::prelude::*;

use crate::constants::{INITIAL_STATUS_INFO, INITIAL_STATUS_MESSAGE};

/// Text shown in the status strip at the bottom of the window.
///
/// The left slot carries transient messages (selected file, load errors);
/// the right slot carries persistent info (native image size). Each setter
/// overwrites its slot; there is no history.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
    info: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            message: INITIAL_STATUS_MESSAGE.to_string(),
            info: INITIAL_STATUS_INFO.to_string(),
        }
    }
}

impl StatusBar {
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.info = text.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}

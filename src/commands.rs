//! User commands and the key bindings that trigger them.
//!
//! Menu items and keyboard shortcuts both produce [`AppCommand`] messages.
//! Shortcuts are looked up in the [`CommandTable`], which is filled once at
//! startup, so the menu can show the same accelerator text the keyboard
//! handler reacts to.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::controller::SizePreset;

/// Something the user asked the application to do
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// File >> Open
    Open,
    /// File >> Save As... (not available yet)
    SaveAs,
    /// File >> Exit
    Exit,
    /// Edit >> Resize...
    ResizeImage,
    /// Settings >> Center
    ToggleCenter,
    /// Settings >> Window >> Small/Medium/Large
    SelectPreset(SizePreset),
}

/// A key pressed together with an optional Ctrl modifier.
///
/// Shift is ignored so that Ctrl+O and Ctrl+Shift+O (or caps lock) trigger
/// the same command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub key: KeyCode,
}

impl KeyChord {
    pub const fn ctrl(key: KeyCode) -> Self {
        Self { ctrl: true, key }
    }

    /// Human-readable form for menus, e.g. `Ctrl+O`
    pub fn label(&self) -> String {
        let key = format!("{:?}", self.key);
        let key = key.strip_prefix("Key").unwrap_or(&key);
        if self.ctrl {
            format!("Ctrl+{}", key)
        } else {
            key.to_string()
        }
    }
}

/// Registered key bindings
#[derive(Resource, Default, Debug)]
pub struct CommandTable {
    bindings: Vec<(KeyChord, AppCommand)>,
}

impl CommandTable {
    /// Bind a chord to a command, replacing any previous binding of the chord
    pub fn bind(&mut self, chord: KeyChord, command: AppCommand) {
        self.bindings.retain(|(existing, _)| *existing != chord);
        self.bindings.push((chord, command));
    }

    pub fn lookup(&self, chord: KeyChord) -> Option<AppCommand> {
        self.bindings
            .iter()
            .find(|(existing, _)| *existing == chord)
            .map(|(_, command)| *command)
    }

    /// First chord bound to a command, for showing accelerators in menus
    pub fn chord_for(&self, command: AppCommand) -> Option<KeyChord> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == command)
            .map(|(chord, _)| *chord)
    }

    /// Menu accelerator text for a command, empty when unbound
    pub fn shortcut_label(&self, command: AppCommand) -> String {
        self.chord_for(command)
            .map(|chord| chord.label())
            .unwrap_or_default()
    }
}

/// Startup system that registers the default key bindings
pub fn register_default_bindings(mut table: ResMut<CommandTable>) {
    table.bind(KeyChord::ctrl(KeyCode::KeyO), AppCommand::Open);
    table.bind(KeyChord::ctrl(KeyCode::KeyQ), AppCommand::Exit);
}

/// Turn key presses into commands through the binding table
pub fn dispatch_key_chords(
    keyboard: Res<ButtonInput<KeyCode>>,
    table: Res<CommandTable>,
    mut contexts: EguiContexts,
    mut command_events: MessageWriter<AppCommand>,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    for key in keyboard.get_just_pressed() {
        if let Some(command) = table.lookup(KeyChord { ctrl, key: *key }) {
            debug!("Shortcut {} -> {:?}", KeyChord { ctrl, key: *key }.label(), command);
            command_events.write(command);
        }
    }
}

//! Input system.
//!
//! The decoration takes no user input besides the debug toggle:
//! [`debug_toggle_system`] triggers
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) when
//! the debug key is pressed.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;

/// Key that toggles the debug overlay.
pub const DEBUG_KEY: KeyboardKey = KeyboardKey::KEY_F11;

/// Poll Raylib for the debug key and toggle the overlay on press.
pub fn debug_toggle_system(rl: NonSend<raylib::RaylibHandle>, mut commands: Commands) {
    if rl.is_key_pressed(DEBUG_KEY) {
        commands.trigger(SwitchDebugEvent {});
    }
}

use bevy_ecs::prelude::Resource;

/// Time source for the decoration.
///
/// `elapsed` is the scaled number of seconds since the loop started and is
/// the only input of the idle animation besides each item's own data.
/// `time_scale` comes from the `[decor]` section of the config file.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Speed up (`> 1`) or slow down (`< 1`) the animation.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

//! Planner configuration with documented constants

/// Configuration for floor layout geometry and the voice input path
///
/// Layout offsets are computed in pixels against a reference floor width
/// so that engine-side placement lines up with what the presentation
/// layer renders.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Reference pixel width of a floor strip
    ///
    /// A placed team renders at `(occupancy / capacity) * floor_px_width`
    /// pixels wide. Compaction and free-offset computation use the same
    /// width, so appended teams land exactly after the last occupant.
    pub floor_px_width: f32,

    /// Ceiling on voice recording length, in seconds
    ///
    /// Bounds the audio input path to the command bridge. The placement
    /// core never sees this value.
    pub max_recording_secs: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            floor_px_width: 400.0,
            max_recording_secs: 30,
        }
    }
}

impl PlannerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.floor_px_width <= 0.0 {
            return Err(format!(
                "floor_px_width ({}) must be positive",
                self.floor_px_width
            ));
        }
        if self.max_recording_secs == 0 {
            return Err("max_recording_secs must be positive".into());
        }
        Ok(())
    }
}

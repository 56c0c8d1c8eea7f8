use std::default::Default;

use holo_shared::Tick;

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Distance, in blocks, within which an observer sees phantom entities
    pub perception_range: f64,
    /// Simulation steps between two checks that an item holder's carrier
    /// still exists
    pub anchor_check_period: Tick,
    /// Simulation steps between two runs of the text refreshers
    pub text_refresh_period: Tick,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            perception_range: 48.0,
            anchor_check_period: 20,
            text_refresh_period: 2,
        }
    }
}

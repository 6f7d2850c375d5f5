// Craft dimensions in meters. The collision evaluator treats the craft as a
// triangle standing on a base of LANDER_WIDTH; both base corners must be over
// the pad for a touchdown to count as a landing.
pub const LANDER_HEIGHT: f32 = 3.0;
pub const LANDER_WIDTH: f32 = 2.0;
pub const LANDER_BASE_OFFSET: f32 = LANDER_HEIGHT / 2.0; // center to base
pub const LANDER_HALF_WIDTH: f32 = LANDER_WIDTH / 2.0;

//! Ball and paddle motion authority
//!
//! Both only run while play is active; the game loop holds the ball still
//! and ignores paddle input in every other phase.

use glam::Vec3;
use rand::Rng;

use crate::tuning::Tuning;

/// Minimum |z| speed after a paddle deflection, so the ball never rides the paddle
pub const MIN_DEFLECT_Z: f32 = 0.1;

/// Keeps the ball at a fixed speed
#[derive(Debug, Clone, Copy)]
pub struct BallGovernor {
    speed: f32,
}

impl BallGovernor {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.ball_speed)
    }

    /// Serve velocity: random sideways component, always heading away from the player
    pub fn launch_velocity<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let x = rng.random_range(-1.0f32..=1.0);
        Vec3::new(x, 0.0, 1.0).normalize() * self.speed
    }

    /// Velocity to apply this tick: same direction, fixed speed
    pub fn regulate(&self, velocity: Vec3) -> Vec3 {
        velocity.normalize_or_zero() * self.speed
    }

    /// Bounce off the paddle: sideways speed grows with distance from center
    pub fn deflect(&self, velocity: Vec3, offset_x: f32, half_width: f32) -> Vec3 {
        let speed = velocity.length();
        if speed <= f32::EPSILON || half_width <= 0.0 {
            return velocity;
        }

        let sideways = offset_x / half_width * speed * 0.5;
        let mut out = Vec3::new(sideways, velocity.y, velocity.z).normalize_or_zero() * speed;
        if out.z.abs() < MIN_DEFLECT_Z {
            out.z = if out.z > 0.0 {
                MIN_DEFLECT_Z
            } else {
                -MIN_DEFLECT_Z
            };
        }
        out
    }
}

/// Horizontal paddle movement
#[derive(Debug, Clone, Copy)]
pub struct PaddleGovernor {
    x: f32,
    move_speed: f32,
    x_limit: f32,
    half_width: f32,
}

impl PaddleGovernor {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            x: 0.0,
            move_speed: tuning.paddle_move_speed,
            x_limit: tuning.paddle_x_limit,
            half_width: tuning.paddle_half_width,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Apply horizontal input in [-1, 1]; returns the new x
    pub fn steer(&mut self, input: f32, dt: f32) -> f32 {
        let input = input.clamp(-1.0, 1.0);
        self.x = (self.x + input * self.move_speed * dt).clamp(-self.x_limit, self.x_limit);
        self.x
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

//! Horizontal bounce state component.
//!
//! A [`Bouncer`] carries the sign of horizontal travel and a constant speed.
//! The movement system flips the facing when the entity hits a viewport
//! edge; the render system mirrors the sprite when it faces left so it
//! visually points where it is going.

use bevy_ecs::prelude::Component;
use std::str::FromStr;

/// Direction of horizontal travel. Doubles as the velocity sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Velocity sign: +1 when moving right, -1 when moving left.
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// True when the sprite should be drawn horizontally mirrored.
    pub fn mirrored(&self) -> bool {
        matches!(self, Facing::Left)
    }
}

impl FromStr for Facing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(Facing::Right),
            "left" => Ok(Facing::Left),
            other => Err(format!("Unknown facing '{}', expected right/left", other)),
        }
    }
}

/// Bounce movement state: travel direction plus constant per-entity speed.
///
/// `speed` is positive and never changes for the entity's lifetime; only
/// `facing` mutates, when the movement system reflects at a viewport edge.
#[derive(Component, Clone, Copy, Debug)]
pub struct Bouncer {
    pub facing: Facing,
    pub speed: f32,
}

impl Bouncer {
    pub fn new(facing: Facing, speed: f32) -> Self {
        Bouncer { facing, speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_signs() {
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn facing_mirrored_only_when_left() {
        assert!(Facing::Left.mirrored());
        assert!(!Facing::Right.mirrored());
    }

    #[test]
    fn facing_parses_case_insensitive() {
        assert_eq!("right".parse::<Facing>().unwrap(), Facing::Right);
        assert_eq!(" Left ".parse::<Facing>().unwrap(), Facing::Left);
        assert_eq!("LEFT".parse::<Facing>().unwrap(), Facing::Left);
    }

    #[test]
    fn facing_rejects_unknown_names() {
        assert!("up".parse::<Facing>().is_err());
        assert!("".parse::<Facing>().is_err());
    }
}

//! Collision reactors
//!
//! The engine reports raw contacts (what was touched, and the tag of what
//! touched it). Only contacts made by the ball matter; they become typed
//! [`GameEvent`]s the game loop consumes synchronously.

use glam::Vec3;

use crate::platform::EntityHandle;

/// Tag the engine gives the ball
pub const BALL_TAG: &str = "Ball";

/// Something the engine detected a contact on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// A spawned block
    Block(EntityHandle),
    /// Trigger volume behind the paddle
    GameOverZone,
    /// The player's paddle, centered at `center_x`
    Paddle { center_x: f32 },
}

/// A contact reported by the physics collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub collider: Collider,
    /// Category tag of the other body
    pub other_tag: String,
    /// World-space contact point
    pub point: Vec3,
}

impl Contact {
    pub fn new(collider: Collider, other_tag: &str, point: Vec3) -> Self {
        Self {
            collider,
            other_tag: other_tag.to_string(),
            point,
        }
    }

    /// Contact made by the ball
    pub fn ball(collider: Collider, point: Vec3) -> Self {
        Self::new(collider, BALL_TAG, point)
    }

    pub fn is_ball(&self) -> bool {
        self.other_tag == BALL_TAG
    }
}

/// Domain events produced from contacts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The ball broke a block
    BlockDestroyed { id: EntityHandle },
    /// The engine removed a block's entity by other means
    BlockRemoved { id: EntityHandle },
    /// The ball fell past the paddle
    BallLost,
    /// The ball hit the paddle `offset_x` from its center
    PaddleHit { offset_x: f32 },
}

/// Translate a contact into a domain event (None if it is irrelevant)
pub fn react(contact: &Contact) -> Option<GameEvent> {
    if !contact.is_ball() {
        return None;
    }
    let event = match contact.collider {
        Collider::Block(id) => GameEvent::BlockDestroyed { id },
        Collider::GameOverZone => GameEvent::BallLost,
        Collider::Paddle { center_x } => GameEvent::PaddleHit {
            offset_x: contact.point.x - center_x,
        },
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_contacts_become_events() {
        let block = Contact::ball(Collider::Block(EntityHandle(7)), Vec3::ZERO);
        assert_eq!(
            react(&block),
            Some(GameEvent::BlockDestroyed { id: EntityHandle(7) })
        );

        let zone = Contact::ball(Collider::GameOverZone, Vec3::ZERO);
        assert_eq!(react(&zone), Some(GameEvent::BallLost));

        let paddle = Contact::ball(Collider::Paddle { center_x: 2.0 }, Vec3::new(2.5, 0.0, -6.0));
        assert_eq!(react(&paddle), Some(GameEvent::PaddleHit { offset_x: 0.5 }));
    }

    #[test]
    fn test_other_tags_are_ignored() {
        let contact = Contact::new(Collider::GameOverZone, "Block", Vec3::ZERO);
        assert_eq!(react(&contact), None);
        let contact = Contact::new(Collider::Block(EntityHandle(1)), "Wall", Vec3::ZERO);
        assert_eq!(react(&contact), None);
    }
}

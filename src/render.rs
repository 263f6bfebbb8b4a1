//! Collaborator contracts for the surfaces the core does not own.
//!
//! The core never touches pixels or DOM widgets. Each frame it hands the
//! host a clear plus one rectangle per entity, tagged symbolically; the
//! host maps tags to whatever palette its surface uses.

use glam::Vec2;

/// Symbolic color tag for a drawn rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Background,
    Ball,
    Paddle,
}

/// Rendering surface collaborator
pub trait Renderer {
    /// Repaint the whole arena background
    fn clear(&mut self, width: f32, height: f32);

    /// Fill one axis-aligned rectangle
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: ColorTag);
}

/// Score widget collaborator, told the new total after every point
pub trait ScoreDisplay {
    fn set_score(&mut self, player: u8, score: u32);
}

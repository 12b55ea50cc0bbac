//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Buffer layout for hosts drawing the scene with wgpu
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const PLAYER: [f32; 4] = [0.3, 0.55, 1.0, 1.0];
    pub const BOSS: [f32; 4] = [0.75, 0.2, 0.85, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // Yellow
    pub const HP_BAR_BACK: [f32; 4] = [0.25, 0.25, 0.3, 1.0];
    pub const HP_BAR_FILL: [f32; 4] = [0.2, 0.85, 0.35, 1.0];
    pub const RESTART_BUTTON: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // Green
    pub const EXIT_BUTTON: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // Red
    pub const GAME_OVER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BUTTON_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BUTTON_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

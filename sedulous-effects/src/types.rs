//! The value types a parameter slot can stage.  Vectors and matrices
//! come straight from `ultraviolet` (with its `bytemuck` feature, so
//! they can be copied in and out of the byte buffer); `Color` is a
//! packed RGBA8 quad, which is how color uniforms travel to the GPU
//! anyway.

use bytemuck::{Pod, Zeroable};

pub use ultraviolet::mat::Mat4;
pub use ultraviolet::vec::{Vec2, Vec3, Vec4};

/// An RGBA color with 8 bits per channel.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Zeroable, Pod)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);

    /// Expand to normalized floats, one channel per lane.
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            self.3 as f32 / 255.0,
        )
    }
}

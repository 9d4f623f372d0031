//! Staging storage for shader effect parameters.
//!
//! A shader program's uniforms get their values from application code
//! at unpredictable times, but the GPU only wants them once per draw.
//! This crate sits in that gap: each parameter owns a
//! [`ParameterData`] slot (a fixed block of bytes, a tag saying what
//! kind of value the bytes are, plus a version counter), and an
//! [`Effect`] groups the slots by uniform name and flushes the ones
//! whose version moved to whatever upload path the renderer uses.
//! Slots allocate once at construction and never again, so a scene
//! staging hundreds of parameters per frame does not touch the heap.
//!
//! There is no graphics API in here.  Slots hold scalars, vectors and
//! matrices (from `ultraviolet`), packed [`Color`]s, arrays of any of
//! those, or non-owning [`Texture2D`]/[`Texture3D`] handles into a
//! texture registry the caller keeps.  A renderer reads values out
//! with the typed getters (or grabs [`ParameterData::value_bytes`] for
//! a whole uniform block at once) and binds them however its backend
//! likes.  Everything is single-threaded, built for the render thread.

mod parameter;
pub use parameter::{ParameterData, ParameterError, ParameterKind};

mod effect;
pub use effect::{Effect, EffectError, ParameterId};

mod texture;
pub use texture::{Texture2D, Texture3D};

pub mod types;
pub use types::{Color, Mat4, Vec2, Vec3, Vec4};

pub use ultraviolet;

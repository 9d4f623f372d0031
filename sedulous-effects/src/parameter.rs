//! Each effect parameter stages its value in a [`ParameterData`] slot
//! before anything touches the graphics API.  A slot is a small fixed
//! block of bytes plus a tag saying what those bytes currently are; it
//! can hold any of the scalar/vector/matrix kinds, an array of them, or
//! a non-owning texture handle.  Setting a value only reuses the bytes
//! allocated at construction, so staging hundreds of parameters per
//! frame costs no heap traffic.
//!
//! Every mutation bumps a version counter.  Scalars get a bytewise
//! compare first, so re-setting an unchanged value is free and leaves
//! the version alone; arrays always bump, because deep-comparing an
//! array costs about as much as copying it.  Uploaders watch the
//! version to decide whether a parameter needs to go back to the GPU
//! (see [`crate::Effect::flush`]).  Don't "fix" the asymmetry: it is
//! the contract, and the tests pin it from both sides.

use bytemuck::{Pod, Zeroable};

use crate::texture::{Texture2D, Texture3D};
use crate::types::{Color, Mat4, Vec2, Vec3, Vec4};

/// What a [`ParameterData`] slot currently holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParameterKind {
    /// Never set, or cleared.  Getters return zero values in this state.
    Empty,
    Bool,
    Int,
    Uint,
    Float,
    Double,
    Vec2,
    Vec3,
    Vec4,
    Color,
    Mat4,
    BoolArray,
    IntArray,
    UintArray,
    FloatArray,
    DoubleArray,
    Vec2Array,
    Vec3Array,
    Vec4Array,
    ColorArray,
    Mat4Array,
    Texture2D,
    Texture3D,
}

impl ParameterKind {
    /// The byte size of one stored element, or `None` for kinds that
    /// don't live in the byte buffer (`Empty` and the texture handles).
    /// `Bool` elements are stored as single bytes.
    pub fn element_size(self) -> Option<usize> {
        match self {
            Self::Empty | Self::Texture2D | Self::Texture3D => None,
            Self::Bool | Self::BoolArray => Some(1),
            Self::Int | Self::IntArray => Some(std::mem::size_of::<i32>()),
            Self::Uint | Self::UintArray => Some(std::mem::size_of::<u32>()),
            Self::Float | Self::FloatArray => Some(std::mem::size_of::<f32>()),
            Self::Double | Self::DoubleArray => Some(std::mem::size_of::<f64>()),
            Self::Vec2 | Self::Vec2Array => Some(std::mem::size_of::<Vec2>()),
            Self::Vec3 | Self::Vec3Array => Some(std::mem::size_of::<Vec3>()),
            Self::Vec4 | Self::Vec4Array => Some(std::mem::size_of::<Vec4>()),
            Self::Color | Self::ColorArray => Some(std::mem::size_of::<Color>()),
            Self::Mat4 | Self::Mat4Array => Some(std::mem::size_of::<Mat4>()),
        }
    }
    /// Whether this kind is one of the array kinds.
    pub fn is_array(self) -> bool {
        matches!(
            self,
            Self::BoolArray
                | Self::IntArray
                | Self::UintArray
                | Self::FloatArray
                | Self::DoubleArray
                | Self::Vec2Array
                | Self::Vec3Array
                | Self::Vec4Array
                | Self::ColorArray
                | Self::Mat4Array
        )
    }
}

/// Errors raised by typed access to a [`ParameterData`] slot.  These
/// are programmer errors (the caller knows each parameter's declared
/// type), so there is nothing to retry; they surface synchronously
/// before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// A getter asked for a different kind than the slot holds.
    #[error("parameter holds {found:?}, requested {expected:?}")]
    TypeMismatch {
        expected: ParameterKind,
        found: ParameterKind,
    },
    /// An array count doesn't fit the destination or the slot's capacity.
    #[error("count {count} out of range (limit {limit})")]
    CountOutOfRange { count: usize, limit: usize },
}

enum TextureRef {
    D2(Texture2D),
    D3(Texture3D),
}

/// A reusable, type-erased storage cell for one effect parameter.
///
/// The backing buffer is sized once at construction, to at least
/// [`ParameterData::MIN_SIZE`] bytes (enough for a `Mat4`), and never
/// grows.  Array sets that don't fit are clamped to capacity, with the
/// extra source elements silently dropped; pass a larger size hint up
/// front if a parameter stages long arrays or `f64` data.
pub struct ParameterData {
    raw: Box<[u8]>,
    texture: Option<TextureRef>,
    kind: ParameterKind,
    element_count: usize,
    version: i64,
}

impl ParameterData {
    /// Minimum capacity of any slot: one 4x4 float matrix.
    pub const MIN_SIZE: usize = 16 * std::mem::size_of::<f32>();

    /// Create a slot with at least `size_hint` bytes of storage
    /// (clamped up to [`Self::MIN_SIZE`]).
    pub fn new(size_hint: usize) -> Self {
        Self {
            raw: vec![0u8; size_hint.max(Self::MIN_SIZE)].into_boxed_slice(),
            texture: None,
            kind: ParameterKind::Empty,
            element_count: 0,
            version: 1,
        }
    }

    /// What the slot currently holds.
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }
    /// Monotonically increasing change counter.  Starts at 1; bumped by
    /// every [`clear`](Self::clear) and every `set_*` that actually
    /// changes something (arrays and textures per the rules in the
    /// module doc).  Compare against a remembered value to decide
    /// whether an upload can be skipped.
    pub fn version(&self) -> i64 {
        self.version
    }
    /// Number of logical elements stored: 1 for scalar and texture
    /// kinds, the copied length for arrays, 0 when empty.
    pub fn element_count(&self) -> usize {
        self.element_count
    }
    /// Capacity of the backing buffer in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.raw.len()
    }
    /// The whole backing buffer, live prefix and stale tail alike.
    /// Bulk-upload paths that hand a fixed-size uniform block to the
    /// graphics API want this; everyone else wants
    /// [`value_bytes`](Self::value_bytes).
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }
    /// The bytes of the currently stored value:
    /// `element_count * element_size` for inline kinds, empty for
    /// `Empty` and texture kinds.
    pub fn value_bytes(&self) -> &[u8] {
        match self.kind.element_size() {
            Some(elem) => &self.raw[..self.element_count * elem],
            None => &self.raw[..0],
        }
    }

    /// Reset to the unset state.  The backing buffer is kept (an effect
    /// reuses its slots when its parameter set is redefined, e.g. on
    /// shader reload) and the version is bumped so watchers notice.
    pub fn clear(&mut self) {
        self.kind = ParameterKind::Empty;
        self.element_count = 0;
        self.texture = None;
        self.version += 1;
    }

    // Scalar store: compare-then-bump.  The comparison is bytewise over
    // the stored representation, so a re-set of the identical bits is a
    // no-op and the version holds still.
    fn set_inline<T: Pod>(&mut self, kind: ParameterKind, value: T) {
        let bytes = bytemuck::bytes_of(&value);
        if self.kind == kind && &self.raw[..bytes.len()] == bytes {
            return;
        }
        self.raw[..bytes.len()].copy_from_slice(bytes);
        self.kind = kind;
        self.element_count = 1;
        self.version += 1;
    }

    // Array store: always-bump, clamp to capacity.
    fn set_inline_array<T: Pod>(&mut self, kind: ParameterKind, values: &[T]) {
        let elem = std::mem::size_of::<T>();
        let fit = self.raw.len() / elem;
        let count = values.len().min(fit);
        if count < values.len() {
            log::warn!(
                "{kind:?} set truncated from {} to {count} elements (capacity {} bytes)",
                values.len(),
                self.raw.len()
            );
        }
        self.raw[..count * elem].copy_from_slice(bytemuck::cast_slice(&values[..count]));
        self.kind = kind;
        self.element_count = count;
        self.version += 1;
    }

    fn get_inline<T: Pod>(&self, kind: ParameterKind) -> Result<T, ParameterError> {
        match self.kind {
            ParameterKind::Empty => Ok(T::zeroed()),
            k if k == kind => {
                // the buffer has byte alignment, so read unaligned
                Ok(bytemuck::pod_read_unaligned(
                    &self.raw[..std::mem::size_of::<T>()],
                ))
            }
            found => Err(ParameterError::TypeMismatch {
                expected: kind,
                found,
            }),
        }
    }

    fn get_inline_array<T: Pod>(
        &self,
        kind: ParameterKind,
        dest: &mut [T],
        count: usize,
    ) -> Result<(), ParameterError> {
        if count >= dest.len() {
            return Err(ParameterError::CountOutOfRange {
                count,
                limit: dest.len(),
            });
        }
        match self.kind {
            ParameterKind::Empty => {
                dest[..count].fill(T::zeroed());
                Ok(())
            }
            k if k == kind => {
                let elem = std::mem::size_of::<T>();
                let fit = self.raw.len() / elem;
                // capacity check, not element-count: reading past the
                // live prefix yields whatever bytes are there, same as
                // reading a partially-written uniform block
                if count > fit {
                    return Err(ParameterError::CountOutOfRange { count, limit: fit });
                }
                bytemuck::cast_slice_mut(&mut dest[..count])
                    .copy_from_slice(&self.raw[..count * elem]);
                Ok(())
            }
            found => Err(ParameterError::TypeMismatch {
                expected: kind,
                found,
            }),
        }
    }

    pub fn set_bool(&mut self, value: bool) {
        // bools live in the buffer as single 0/1 bytes
        self.set_inline(ParameterKind::Bool, value as u8)
    }
    pub fn set_int(&mut self, value: i32) {
        self.set_inline(ParameterKind::Int, value)
    }
    pub fn set_uint(&mut self, value: u32) {
        self.set_inline(ParameterKind::Uint, value)
    }
    pub fn set_float(&mut self, value: f32) {
        self.set_inline(ParameterKind::Float, value)
    }
    pub fn set_double(&mut self, value: f64) {
        self.set_inline(ParameterKind::Double, value)
    }
    pub fn set_vec2(&mut self, value: Vec2) {
        self.set_inline(ParameterKind::Vec2, value)
    }
    pub fn set_vec3(&mut self, value: Vec3) {
        self.set_inline(ParameterKind::Vec3, value)
    }
    pub fn set_vec4(&mut self, value: Vec4) {
        self.set_inline(ParameterKind::Vec4, value)
    }
    pub fn set_color(&mut self, value: Color) {
        self.set_inline(ParameterKind::Color, value)
    }
    pub fn set_mat4(&mut self, value: Mat4) {
        self.set_inline(ParameterKind::Mat4, value)
    }

    pub fn set_bool_array(&mut self, values: &[bool]) {
        // no Pod for bool; marshal by hand into 0/1 bytes
        let count = values.len().min(self.raw.len());
        if count < values.len() {
            log::warn!(
                "BoolArray set truncated from {} to {count} elements (capacity {} bytes)",
                values.len(),
                self.raw.len()
            );
        }
        for (slot, &v) in self.raw[..count].iter_mut().zip(values) {
            *slot = v as u8;
        }
        self.kind = ParameterKind::BoolArray;
        self.element_count = count;
        self.version += 1;
    }
    pub fn set_int_array(&mut self, values: &[i32]) {
        self.set_inline_array(ParameterKind::IntArray, values)
    }
    pub fn set_uint_array(&mut self, values: &[u32]) {
        self.set_inline_array(ParameterKind::UintArray, values)
    }
    pub fn set_float_array(&mut self, values: &[f32]) {
        self.set_inline_array(ParameterKind::FloatArray, values)
    }
    pub fn set_double_array(&mut self, values: &[f64]) {
        self.set_inline_array(ParameterKind::DoubleArray, values)
    }
    pub fn set_vec2_array(&mut self, values: &[Vec2]) {
        self.set_inline_array(ParameterKind::Vec2Array, values)
    }
    pub fn set_vec3_array(&mut self, values: &[Vec3]) {
        self.set_inline_array(ParameterKind::Vec3Array, values)
    }
    pub fn set_vec4_array(&mut self, values: &[Vec4]) {
        self.set_inline_array(ParameterKind::Vec4Array, values)
    }
    pub fn set_color_array(&mut self, values: &[Color]) {
        self.set_inline_array(ParameterKind::ColorArray, values)
    }
    pub fn set_mat4_array(&mut self, values: &[Mat4]) {
        self.set_inline_array(ParameterKind::Mat4Array, values)
    }

    /// Store a non-owning reference to a 2D texture.  The slot never
    /// extends the texture's lifetime; if the registry entry behind the
    /// handle goes away, later gets return a dangling handle and that's
    /// the caller's problem.
    pub fn set_texture2d(&mut self, texture: Texture2D) {
        if self.kind == ParameterKind::Texture2D {
            if let Some(TextureRef::D2(t)) = self.texture {
                if t == texture {
                    return;
                }
            }
        }
        self.texture = Some(TextureRef::D2(texture));
        self.kind = ParameterKind::Texture2D;
        self.element_count = 1;
        self.version += 1;
    }
    /// Store a non-owning reference to a 3D texture.  Same lifetime
    /// rules as [`set_texture2d`](Self::set_texture2d).
    pub fn set_texture3d(&mut self, texture: Texture3D) {
        if self.kind == ParameterKind::Texture3D {
            if let Some(TextureRef::D3(t)) = self.texture {
                if t == texture {
                    return;
                }
            }
        }
        self.texture = Some(TextureRef::D3(texture));
        self.kind = ParameterKind::Texture3D;
        self.element_count = 1;
        self.version += 1;
    }

    pub fn get_bool(&self) -> Result<bool, ParameterError> {
        self.get_inline::<u8>(ParameterKind::Bool).map(|b| b != 0)
    }
    pub fn get_int(&self) -> Result<i32, ParameterError> {
        self.get_inline(ParameterKind::Int)
    }
    pub fn get_uint(&self) -> Result<u32, ParameterError> {
        self.get_inline(ParameterKind::Uint)
    }
    pub fn get_float(&self) -> Result<f32, ParameterError> {
        self.get_inline(ParameterKind::Float)
    }
    pub fn get_double(&self) -> Result<f64, ParameterError> {
        self.get_inline(ParameterKind::Double)
    }
    pub fn get_vec2(&self) -> Result<Vec2, ParameterError> {
        self.get_inline(ParameterKind::Vec2)
    }
    pub fn get_vec3(&self) -> Result<Vec3, ParameterError> {
        self.get_inline(ParameterKind::Vec3)
    }
    pub fn get_vec4(&self) -> Result<Vec4, ParameterError> {
        self.get_inline(ParameterKind::Vec4)
    }
    pub fn get_color(&self) -> Result<Color, ParameterError> {
        self.get_inline(ParameterKind::Color)
    }
    pub fn get_mat4(&self) -> Result<Mat4, ParameterError> {
        self.get_inline(ParameterKind::Mat4)
    }

    /// Copy `count` stored booleans into `dest`.  `count` must be
    /// strictly less than `dest.len()`; an empty slot fills with
    /// `false`.
    pub fn get_bool_array(&self, dest: &mut [bool], count: usize) -> Result<(), ParameterError> {
        if count >= dest.len() {
            return Err(ParameterError::CountOutOfRange {
                count,
                limit: dest.len(),
            });
        }
        match self.kind {
            ParameterKind::Empty => {
                dest[..count].fill(false);
                Ok(())
            }
            ParameterKind::BoolArray => {
                if count > self.raw.len() {
                    return Err(ParameterError::CountOutOfRange {
                        count,
                        limit: self.raw.len(),
                    });
                }
                for (slot, &byte) in dest[..count].iter_mut().zip(self.raw.iter()) {
                    *slot = byte != 0;
                }
                Ok(())
            }
            found => Err(ParameterError::TypeMismatch {
                expected: ParameterKind::BoolArray,
                found,
            }),
        }
    }
    pub fn get_int_array(&self, dest: &mut [i32], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::IntArray, dest, count)
    }
    pub fn get_uint_array(&self, dest: &mut [u32], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::UintArray, dest, count)
    }
    pub fn get_float_array(&self, dest: &mut [f32], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::FloatArray, dest, count)
    }
    pub fn get_double_array(&self, dest: &mut [f64], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::DoubleArray, dest, count)
    }
    pub fn get_vec2_array(&self, dest: &mut [Vec2], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::Vec2Array, dest, count)
    }
    pub fn get_vec3_array(&self, dest: &mut [Vec3], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::Vec3Array, dest, count)
    }
    pub fn get_vec4_array(&self, dest: &mut [Vec4], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::Vec4Array, dest, count)
    }
    pub fn get_color_array(&self, dest: &mut [Color], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::ColorArray, dest, count)
    }
    pub fn get_mat4_array(&self, dest: &mut [Mat4], count: usize) -> Result<(), ParameterError> {
        self.get_inline_array(ParameterKind::Mat4Array, dest, count)
    }

    /// The stored 2D texture handle, `None` if the slot is empty.
    pub fn get_texture2d(&self) -> Result<Option<Texture2D>, ParameterError> {
        match self.kind {
            ParameterKind::Empty => Ok(None),
            ParameterKind::Texture2D => match self.texture {
                Some(TextureRef::D2(t)) => Ok(Some(t)),
                _ => Ok(None),
            },
            found => Err(ParameterError::TypeMismatch {
                expected: ParameterKind::Texture2D,
                found,
            }),
        }
    }
    /// The stored 3D texture handle, `None` if the slot is empty.
    pub fn get_texture3d(&self) -> Result<Option<Texture3D>, ParameterError> {
        match self.kind {
            ParameterKind::Empty => Ok(None),
            ParameterKind::Texture3D => match self.texture {
                Some(TextureRef::D3(t)) => Ok(Some(t)),
                _ => Ok(None),
            },
            found => Err(ParameterError::TypeMismatch {
                expected: ParameterKind::Texture3D,
                found,
            }),
        }
    }
}

impl Default for ParameterData {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for ParameterData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterData")
            .field("kind", &self.kind)
            .field("element_count", &self.element_count)
            .field("version", &self.version)
            .field("capacity", &self.raw.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_slot_reads_as_defaults() {
        let slot = ParameterData::new(0);
        assert_eq!(slot.kind(), ParameterKind::Empty);
        assert_eq!(slot.version(), 1);
        assert_eq!(slot.element_count(), 0);
        assert_eq!(slot.size_in_bytes(), ParameterData::MIN_SIZE);
        assert_eq!(slot.get_bool(), Ok(false));
        assert_eq!(slot.get_int(), Ok(0));
        assert_eq!(slot.get_uint(), Ok(0));
        assert_eq!(slot.get_float(), Ok(0.0));
        assert_eq!(slot.get_double(), Ok(0.0));
        assert_eq!(slot.get_vec2(), Ok(Vec2::zeroed()));
        assert_eq!(slot.get_vec3(), Ok(Vec3::zeroed()));
        assert_eq!(slot.get_vec4(), Ok(Vec4::zeroed()));
        assert_eq!(slot.get_color(), Ok(Color(0, 0, 0, 0)));
        assert_eq!(
            bytemuck::bytes_of(&slot.get_mat4().unwrap()),
            [0u8; 64].as_slice()
        );
        assert_eq!(slot.get_texture2d(), Ok(None));
        assert_eq!(slot.get_texture3d(), Ok(None));
    }

    #[test]
    fn scalars_round_trip() {
        let mut slot = ParameterData::new(0);
        slot.set_bool(true);
        assert_eq!(slot.get_bool(), Ok(true));
        assert_eq!(slot.kind(), ParameterKind::Bool);
        assert_eq!(slot.element_count(), 1);
        slot.set_int(-41);
        assert_eq!(slot.get_int(), Ok(-41));
        slot.set_uint(99);
        assert_eq!(slot.get_uint(), Ok(99));
        slot.set_float(0.25);
        assert_eq!(slot.get_float(), Ok(0.25));
        slot.set_double(1e300);
        assert_eq!(slot.get_double(), Ok(1e300));
        slot.set_vec2(Vec2::new(1.0, 2.0));
        assert_eq!(slot.get_vec2(), Ok(Vec2::new(1.0, 2.0)));
        slot.set_vec3(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(slot.get_vec3(), Ok(Vec3::new(1.0, 2.0, 3.0)));
        slot.set_vec4(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(slot.get_vec4(), Ok(Vec4::new(1.0, 2.0, 3.0, 4.0)));
        slot.set_color(Color(10, 20, 30, 255));
        assert_eq!(slot.get_color(), Ok(Color(10, 20, 30, 255)));
        assert_eq!(slot.kind(), ParameterKind::Color);
        assert_eq!(slot.element_count(), 1);
    }

    #[test]
    fn redundant_scalar_set_keeps_version() {
        let mut slot = ParameterData::new(0);
        slot.set_float(5.0);
        let v = slot.version();
        slot.set_float(5.0);
        assert_eq!(slot.version(), v);
        slot.set_float(6.0);
        assert_eq!(slot.version(), v + 1);
    }

    #[test]
    fn scalar_set_after_kind_change_always_writes() {
        let mut slot = ParameterData::new(0);
        slot.set_int(0);
        let v = slot.version();
        // same bytes, different kind: must bump and retag
        slot.set_uint(0);
        assert_eq!(slot.kind(), ParameterKind::Uint);
        assert_eq!(slot.version(), v + 1);
    }

    #[test]
    fn array_set_always_bumps() {
        let mut slot = ParameterData::new(0);
        let data = [1.0f32, 2.0, 3.0];
        slot.set_float_array(&data);
        let v = slot.version();
        slot.set_float_array(&data);
        assert_eq!(slot.version(), v + 1);
        assert_eq!(slot.kind(), ParameterKind::FloatArray);
        assert_eq!(slot.element_count(), 3);
    }

    #[test]
    fn type_mismatch_is_an_error() {
        let mut slot = ParameterData::new(0);
        slot.set_int(5);
        assert_eq!(
            slot.get_float(),
            Err(ParameterError::TypeMismatch {
                expected: ParameterKind::Float,
                found: ParameterKind::Int,
            })
        );
        assert_eq!(slot.get_int(), Ok(5));
    }

    #[test]
    fn oversized_array_clamps_to_capacity() {
        let mut slot = ParameterData::new(0);
        assert_eq!(slot.size_in_bytes(), 64);
        let twenty = [7.0f32; 20];
        slot.set_float_array(&twenty);
        assert_eq!(slot.element_count(), 16);
        let mut dest = [0.0f32; 17];
        slot.get_float_array(&mut dest, 16).unwrap();
        assert_eq!(&dest[..16], &twenty[..16]);
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut slot = ParameterData::new(0);
        slot.set_vec3(Vec3::new(1.0, 2.0, 3.0));
        let v = slot.version();
        slot.clear();
        assert_eq!(slot.version(), v + 1);
        assert_eq!(slot.kind(), ParameterKind::Empty);
        assert_eq!(slot.element_count(), 0);
        assert_eq!(slot.get_vec3(), Ok(Vec3::zeroed()));
    }

    #[test]
    fn texture_set_compares_handles() {
        let tex_a = Texture2D::new(3);
        let tex_b = Texture2D::new(4);
        let mut slot = ParameterData::new(0);
        slot.set_texture2d(tex_a);
        assert_eq!(slot.kind(), ParameterKind::Texture2D);
        assert_eq!(slot.element_count(), 1);
        let v = slot.version();
        slot.set_texture2d(tex_a);
        assert_eq!(slot.version(), v);
        slot.set_texture2d(tex_b);
        assert_eq!(slot.version(), v + 1);
        assert_eq!(slot.get_texture2d(), Ok(Some(tex_b)));
    }

    #[test]
    fn texture_kinds_do_not_cross() {
        let mut slot = ParameterData::new(0);
        slot.set_texture3d(Texture3D::new(0));
        assert_eq!(
            slot.get_texture2d(),
            Err(ParameterError::TypeMismatch {
                expected: ParameterKind::Texture2D,
                found: ParameterKind::Texture3D,
            })
        );
    }

    #[test]
    fn array_get_rejects_count_at_dest_len() {
        let slot = ParameterData::new(0);
        let mut dest = [0.0f32; 4];
        // count must be strictly less than the destination length,
        // whatever the slot holds
        assert_eq!(
            slot.get_float_array(&mut dest, 4),
            Err(ParameterError::CountOutOfRange { count: 4, limit: 4 })
        );
    }

    #[test]
    fn array_get_rejects_count_past_capacity() {
        let mut slot = ParameterData::new(0);
        slot.set_float_array(&[1.0; 4]);
        let mut dest = [0.0f32; 64];
        assert_eq!(
            slot.get_float_array(&mut dest, 17),
            Err(ParameterError::CountOutOfRange {
                count: 17,
                limit: 16
            })
        );
    }

    #[test]
    fn empty_array_get_fills_defaults() {
        let slot = ParameterData::new(0);
        let mut dest = [9i32; 5];
        slot.get_int_array(&mut dest, 4).unwrap();
        assert_eq!(dest, [0, 0, 0, 0, 9]);
    }

    #[test]
    fn identity_matrix_round_trips_bit_exact() {
        let mut slot = ParameterData::new(0);
        slot.set_mat4(Mat4::identity());
        assert_eq!(slot.kind(), ParameterKind::Mat4);
        assert_eq!(slot.element_count(), 1);
        assert_eq!(slot.version(), 2);
        let out = slot.get_mat4().unwrap();
        assert_eq!(
            bytemuck::bytes_of(&out),
            bytemuck::bytes_of(&Mat4::identity())
        );
    }

    #[test]
    fn bool_arrays_marshal_bytewise() {
        let mut slot = ParameterData::new(0);
        slot.set_bool_array(&[true, false, true]);
        assert_eq!(slot.kind(), ParameterKind::BoolArray);
        assert_eq!(slot.element_count(), 3);
        assert_eq!(slot.value_bytes(), &[1, 0, 1]);
        let mut dest = [false; 4];
        slot.get_bool_array(&mut dest, 3).unwrap();
        assert_eq!(dest, [true, false, true, false]);
    }

    #[test]
    fn value_bytes_tracks_live_prefix() {
        let mut slot = ParameterData::new(0);
        assert!(slot.value_bytes().is_empty());
        slot.set_vec4(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(slot.value_bytes().len(), 16);
        assert_eq!(slot.raw_bytes().len(), slot.size_in_bytes());
        slot.set_texture2d(Texture2D::new(0));
        assert!(slot.value_bytes().is_empty());
    }

    #[test]
    fn larger_hint_raises_capacity() {
        let slot = ParameterData::new(256);
        assert_eq!(slot.size_in_bytes(), 256);
        let mut slot = ParameterData::new(2 * std::mem::size_of::<Mat4>());
        slot.set_mat4_array(&[Mat4::identity(); 3]);
        assert_eq!(slot.element_count(), 2);
    }
}

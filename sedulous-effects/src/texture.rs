//! Non-owning texture handles.  A parameter slot that holds a texture
//! holds one of these: a plain index into whatever registry the
//! content layer keeps its textures in.  Storing a handle in a slot
//! does nothing for the texture's lifetime.  If the registry drops the
//! texture while an effect still references it, the handle dangles and
//! the next draw reads garbage, exactly as it would with a raw GPU
//! resource id.  Keeping textures alive is the registry's job.

/// A handle to a 2D texture owned elsewhere.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Texture2D(usize);

impl Texture2D {
    /// Wrap a registry index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    /// The registry index this handle refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A handle to a 3D (volume) texture owned elsewhere.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Texture3D(usize);

impl Texture3D {
    /// Wrap a registry index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    /// The registry index this handle refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

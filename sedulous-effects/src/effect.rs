//! An [`Effect`] is the staging side of a shader program: one named
//! [`ParameterData`] slot per declared uniform.  Material and game code
//! set values through the slots whenever they like; at draw time the
//! renderer calls [`Effect::flush`], which walks the parameters whose
//! version moved since the last flush and hands just those to an
//! upload callback.  The setting of parameter values and the uploading
//! of them are separated on purpose, the same way staged sprite data
//! and `upload_sprites` are separated in a sprite renderer: a value
//! set five times between draws uploads once, and a value never
//! touched uploads never (after the first prime).

use crate::parameter::ParameterData;

/// Errors raised while declaring an effect's parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    /// A parameter with this name was already declared.
    #[error("duplicate parameter {0:?}")]
    DuplicateParameter(String),
}

/// Handle to one parameter of an [`Effect`].  Stable for the life of
/// the effect.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct ParameterId(usize);

struct Parameter {
    name: String,
    data: ParameterData,
    // version handed to the uploader at the last flush; 0 so a fresh
    // parameter (version 1) is primed by the first flush even if
    // nothing ever set it
    flushed_version: i64,
}

/// A named collection of parameter slots, one per shader uniform.
#[derive(Default)]
pub struct Effect {
    parameters: Vec<Parameter>,
}

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter and get a handle to it.  `size_hint` sizes
    /// the slot's buffer (see [`ParameterData::new`]); pass the byte
    /// size of the uniform's declared type, or 0 for anything a `Mat4`
    /// covers.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        size_hint: usize,
    ) -> Result<ParameterId, EffectError> {
        let name = name.into();
        if self.parameters.iter().any(|p| p.name == name) {
            return Err(EffectError::DuplicateParameter(name));
        }
        self.parameters.push(Parameter {
            name,
            data: ParameterData::new(size_hint),
            flushed_version: 0,
        });
        Ok(ParameterId(self.parameters.len() - 1))
    }

    /// Find a parameter by its uniform name.
    pub fn lookup(&self, name: &str) -> Option<ParameterId> {
        self.parameters
            .iter()
            .position(|p| p.name == name)
            .map(ParameterId)
    }

    /// The slot behind a handle.  Panics on a handle from a different
    /// effect, like any other out-of-bounds index.
    pub fn parameter(&self, id: ParameterId) -> &ParameterData {
        &self.parameters[id.0].data
    }
    pub fn parameter_mut(&mut self, id: ParameterId) -> &mut ParameterData {
        &mut self.parameters[id.0].data
    }

    pub fn parameter_by_name(&self, name: &str) -> Option<&ParameterData> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.data)
    }
    pub fn parameter_by_name_mut(&mut self, name: &str) -> Option<&mut ParameterData> {
        self.parameters
            .iter_mut()
            .find(|p| p.name == name)
            .map(|p| &mut p.data)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate all parameters as `(name, slot)` pairs, in declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterData)> {
        self.parameters.iter().map(|p| (p.name.as_str(), &p.data))
    }

    /// Hand every parameter whose version moved since the last flush to
    /// `upload`, and remember the versions seen.  Returns how many
    /// parameters were flushed.  Whether the callback actually talks to
    /// a GPU is its own business; this only applies the version
    /// contract.
    pub fn flush(&mut self, mut upload: impl FnMut(&str, &ParameterData)) -> usize {
        let mut flushed = 0;
        for param in self.parameters.iter_mut() {
            let version = param.data.version();
            if version != param.flushed_version {
                log::trace!("flush {} v{version} ({:?})", param.name, param.data.kind());
                upload(&param.name, &param.data);
                param.flushed_version = version;
                flushed += 1;
            }
        }
        if flushed > 0 {
            log::debug!("flushed {flushed}/{} parameters", self.parameters.len());
        }
        flushed
    }

    /// Clear every slot back to the unset state, keeping the slots and
    /// their buffers.  This is the shader-reload path: the parameter
    /// set stays declared, every version moves, and the next flush
    /// re-primes everything.
    pub fn reset_parameters(&mut self) {
        for param in self.parameters.iter_mut() {
            param.data.clear();
        }
    }
}

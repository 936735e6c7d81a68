// Tri-state result of probing an optional browser capability.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    Supported,
    Unsupported,
    #[default]
    Unknown,
}

impl Capability {
    #[inline]
    pub fn from_probe(available: bool) -> Self {
        if available {
            Capability::Supported
        } else {
            Capability::Unsupported
        }
    }

    #[inline]
    pub fn is_supported(self) -> bool {
        self == Capability::Supported
    }

    /// Run `probe` only while the state is still unknown; later calls reuse the answer.
    pub fn resolve_with(&mut self, probe: impl FnOnce() -> bool) -> Capability {
        if *self == Capability::Unknown {
            *self = Capability::from_probe(probe());
        }
        *self
    }
}

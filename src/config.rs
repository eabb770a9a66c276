/// Controls how a fresh [`crate::Bus`] is wired up.
#[derive(Default)]
pub struct BusConfig {
    /// Force CGB or DMG behavior, overriding the cartridge header's
    /// own flags. `None` defers to the cartridge.
    pub force_cgb: Option<bool>,

    /// Bootrom image handed to the bus by the driver. `None` means no
    /// bootrom is mapped in at all.
    pub bootrom: Option<Vec<u8>>,

    /// If `true`, the bus starts with post-bootrom register values
    /// already seeded and the bootrom overlay disabled, as if a real
    /// bootrom had just finished running. Ignored when `bootrom` is
    /// `None`, since there is nothing to skip.
    pub skip_bootrom: bool,
}

impl BusConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bootrom(mut self, data: Vec<u8>) -> Self {
        self.bootrom = Some(data);
        self
    }

    pub fn with_forced_cgb(mut self, is_cgb: bool) -> Self {
        self.force_cgb = Some(is_cgb);
        self
    }

    pub fn skipping_bootrom(mut self) -> Self {
        self.skip_bootrom = true;
        self
    }
}

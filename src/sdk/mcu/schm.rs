use critical_section::RestoreState;

/// Exclusive areas guarding the PORT/GPIO read-modify-write sequences.
///
/// Every sequence that reads a shared register, changes some bits and writes it
/// back has its own area, so a trace of entered areas identifies the exact
/// call site. On the single-core target all areas share one implementation:
/// global interrupts are masked on enter and the previous state is restored on
/// exit.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExclusiveArea {
    /// DFER update while configuring a pin.
    InitDigitalFilter = 0,
    /// Output level preset before a pin is switched to output.
    InitOutputLevel = 1,
    /// PDDR update while configuring a pin.
    InitDirection = 2,
    /// PIDR update while configuring a pin.
    InitInputBuffer = 3,
    /// PCR mux field update.
    MuxModeSel = 4,
    /// PDDR update on a runtime direction change.
    PinDirection = 5,
    /// PIDR update on a runtime direction change.
    PinInputBuffer = 6,
    EnableDigitalFilter = 7,
    DisableDigitalFilter = 8,
    /// Output level preset for an unused pin.
    UnusedOutputLevel = 9,
    /// PDDR update for an unused pin.
    UnusedDirection = 10,
    /// PIDR update for an unused pin.
    UnusedInputBuffer = 11,
}

pub const EXCLUSIVE_AREA_COUNT: usize = 12;

/// Scope of an entered exclusive area. Dropping it exits the area.
///
/// Guards must be dropped in the reverse order they were created, which scoped
/// use (or [`ExclusiveArea::with`]) guarantees.
#[must_use]
pub struct AreaGuard {
    area: ExclusiveArea,
    restore_state: RestoreState,
}

impl ExclusiveArea {
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn enter(self) -> AreaGuard {
        let restore_state = unsafe { critical_section::acquire() };
        #[cfg(test)]
        reentry::entered(self);

        AreaGuard {
            area: self,
            restore_state,
        }
    }

    /// Runs `f` inside the area.
    #[inline(always)]
    pub fn with<R>(self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

impl AreaGuard {
    pub fn area(&self) -> ExclusiveArea {
        self.area
    }
}

impl Drop for AreaGuard {
    fn drop(&mut self) {
        #[cfg(test)]
        reentry::exited(self.area);

        unsafe { critical_section::release(self.restore_state) }
    }
}

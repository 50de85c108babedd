use bitflags::bitflags;
use bytemuck::Zeroable;
use core::ptr::NonNull;

use crate::{BIT, BIT_RNG};

/// Number of PORT/GPIO instances on the S32K144 (A to E).
pub const PORT_INSTANCE_COUNT: usize = 5;
/// Pin control registers per PORT instance.
pub const PORT_PCR_COUNT: usize = 32;

pub const PORTA_BASE: usize = 0x4004_9000;
pub const PORTB_BASE: usize = 0x4004_A000;
pub const PORTC_BASE: usize = 0x4004_B000;
pub const PORTD_BASE: usize = 0x4004_C000;
pub const PORTE_BASE: usize = 0x4004_D000;

pub const PTA_BASE: usize = 0x400F_F000;
pub const PTB_BASE: usize = 0x400F_F040;
pub const PTC_BASE: usize = 0x400F_F080;
pub const PTD_BASE: usize = 0x400F_F0C0;
pub const PTE_BASE: usize = 0x400F_F100;

/****************************************************
 PORT regs struct: one instance per port, 0x1000 apart
 *****************************************************/
#[repr(C)]
#[derive(Zeroable)]
pub struct PortRegisters {
    pub pcr: [u32; PORT_PCR_COUNT],
    pub gpclr: u32,
    pub gpchr: u32,
    pub giclr: u32,
    pub gichr: u32,
    _reserved0: [u32; 4],
    pub isfr: u32,
    _reserved1: [u32; 7],
    pub dfer: u32,
    pub dfcr: u32,
    pub dfwr: u32,
}

/****************************************************
 GPIO regs struct: one instance per port, 0x40 apart
 *****************************************************/
#[repr(C)]
#[derive(Zeroable)]
pub struct GpioRegisters {
    pub pdor: u32,
    pub psor: u32,
    pub pcor: u32,
    pub ptor: u32,
    pub pdir: u32,
    pub pddr: u32,
    pub pidr: u32,
}

bitflags! {
    /// Pin control register (PORTx_PCRn) fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FLD_PORT_PCR: u32 {
        const PS   = BIT!(0);
        const PE   = BIT!(1);
        const PFE  = BIT!(4);
        const DSE  = BIT!(6);
        const MUX  = BIT_RNG!(8, 10);
        const LK   = BIT!(15);
        const IRQC = BIT_RNG!(16, 19);
        const ISF  = BIT!(24);
    }
}

pub const PORT_PCR_MUX_SHIFT: u32 = 8;

// GPCLR / GPCHR: GPWD in the low half, GPWE (pin select) in the high half
pub const PORT_GPC_GPWD_MASK: u32 = BIT_RNG!(0, 15);
pub const PORT_GPC_GPWE_SHIFT: u32 = 16;

pub const PORT_DFCR_CS_MASK: u32 = BIT!(0);
pub const PORT_DFWR_FILT_MASK: u32 = BIT_RNG!(0, 4);

// Generates volatile accessors for a field of the register block behind the handle
macro_rules! blockrw {
    ( $x:ident, $s:ty ) => {
        paste::paste! {
            #[inline(always)]
            pub fn [<read_ $x>](&self) -> $s {
                unsafe {
                    return core::ptr::read_volatile(core::ptr::addr_of!((*self.0.as_ptr()).$x))
                }
            }

            #[inline(always)]
            pub fn [<write_ $x>](&self, value: $s) {
                unsafe {
                    core::ptr::write_volatile(core::ptr::addr_of_mut!((*self.0.as_ptr()).$x), value)
                }
            }
        }
    };
}

macro_rules! blockrw_idx {
    ( $x:ident, $s:ty ) => {
        paste::paste! {
            #[inline(always)]
            pub fn [<read_ $x>](&self, i: usize) -> $s {
                unsafe {
                    return core::ptr::read_volatile(core::ptr::addr_of!((*self.0.as_ptr()).$x[i]))
                }
            }

            #[inline(always)]
            pub fn [<write_ $x>](&self, value: $s, i: usize) {
                unsafe {
                    core::ptr::write_volatile(core::ptr::addr_of_mut!((*self.0.as_ptr()).$x[i]), value)
                }
            }
        }
    };
}

/// Handle to one PORT register block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortBase(NonNull<PortRegisters>);

/// Handle to one GPIO register block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioBase(NonNull<GpioRegisters>);

// The handles only name a memory-mapped block; every access is a single volatile
// load or store and read-modify-write sequences are guarded by the caller.
unsafe impl Send for PortBase {}
unsafe impl Sync for PortBase {}
unsafe impl Send for GpioBase {}
unsafe impl Sync for GpioBase {}

impl PortBase {
    /// # Safety
    ///
    /// `addr` must be the address of a PORT register block (or memory laid out
    /// like one) that stays valid for the lifetime of every copy of the handle.
    pub const unsafe fn from_addr(addr: usize) -> Self {
        Self(NonNull::new_unchecked(addr as *mut PortRegisters))
    }

    /// # Safety
    ///
    /// Same contract as [`PortBase::from_addr`].
    pub const unsafe fn from_ptr(ptr: NonNull<PortRegisters>) -> Self {
        Self(ptr)
    }

    blockrw_idx!(pcr, u32);
    blockrw!(gpclr, u32);
    blockrw!(gpchr, u32);
    blockrw!(dfer, u32);
    blockrw!(dfcr, u32);
    blockrw!(dfwr, u32);

    pub fn is_pcr_locked(&self, pin: u32) -> bool {
        self.read_pcr(pin as usize) & FLD_PORT_PCR::LK.bits() != 0
    }
}

impl GpioBase {
    /// # Safety
    ///
    /// `addr` must be the address of a GPIO register block (or memory laid out
    /// like one) that stays valid for the lifetime of every copy of the handle.
    pub const unsafe fn from_addr(addr: usize) -> Self {
        Self(NonNull::new_unchecked(addr as *mut GpioRegisters))
    }

    /// # Safety
    ///
    /// Same contract as [`GpioBase::from_addr`].
    pub const unsafe fn from_ptr(ptr: NonNull<GpioRegisters>) -> Self {
        Self(ptr)
    }

    blockrw!(pdor, u32);
    blockrw!(psor, u32);
    blockrw!(pcor, u32);
    blockrw!(ptor, u32);
    blockrw!(pdir, u32);
    blockrw!(pddr, u32);
    blockrw!(pidr, u32);
}

pub const PORTA: PortBase = unsafe { PortBase::from_addr(PORTA_BASE) };
pub const PORTB: PortBase = unsafe { PortBase::from_addr(PORTB_BASE) };
pub const PORTC: PortBase = unsafe { PortBase::from_addr(PORTC_BASE) };
pub const PORTD: PortBase = unsafe { PortBase::from_addr(PORTD_BASE) };
pub const PORTE: PortBase = unsafe { PortBase::from_addr(PORTE_BASE) };

pub const PTA: GpioBase = unsafe { GpioBase::from_addr(PTA_BASE) };
pub const PTB: GpioBase = unsafe { GpioBase::from_addr(PTB_BASE) };
pub const PTC: GpioBase = unsafe { GpioBase::from_addr(PTC_BASE) };
pub const PTD: GpioBase = unsafe { GpioBase::from_addr(PTD_BASE) };
pub const PTE: GpioBase = unsafe { GpioBase::from_addr(PTE_BASE) };

/// PORT instances indexed by port number (A = 0).
pub const PORT_BASE_PTRS: [PortBase; PORT_INSTANCE_COUNT] = [PORTA, PORTB, PORTC, PORTD, PORTE];
/// GPIO instances indexed by port number (A = 0).
pub const GPIO_BASE_PTRS: [GpioBase; PORT_INSTANCE_COUNT] = [PTA, PTB, PTC, PTD, PTE];

//! Opcode Table.
//!
//! Defines the opcode bytes of the ten implemented instructions and the
//! `Opcode` enumeration used by the dispatch table and the statistics.

/// Load Register (RR).
pub const OP_LR: u8 = 0x18;

/// Compare Register (RR).
pub const OP_CR: u8 = 0x19;

/// Add Register (RR).
pub const OP_AR: u8 = 0x1A;

/// Subtract Register (RR).
pub const OP_SR: u8 = 0x1B;

/// Load Address (RX).
pub const OP_LA: u8 = 0x41;

/// Branch on Count (RX).
pub const OP_BCT: u8 = 0x46;

/// Branch on Condition (RX).
pub const OP_BC: u8 = 0x47;

/// Store (RX).
pub const OP_ST: u8 = 0x50;

/// Load (RX).
pub const OP_L: u8 = 0x58;

/// Compare (RX).
pub const OP_C: u8 = 0x59;

/// Canonical halt byte. Any opcode whose high nibble is zero halts.
pub const OP_HALT: u8 = 0x00;

/// The ten executable opcodes, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Load Register.
    Lr,
    /// Compare Register.
    Cr,
    /// Add Register.
    Ar,
    /// Subtract Register.
    Sr,
    /// Load Address.
    La,
    /// Branch on Count.
    Bct,
    /// Branch on Condition.
    Bc,
    /// Store.
    St,
    /// Load.
    L,
    /// Compare.
    C,
}

impl Opcode {
    /// Number of executable opcodes.
    pub const COUNT: usize = 10;

    /// All opcodes in report order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Lr,
        Self::Cr,
        Self::Ar,
        Self::Sr,
        Self::La,
        Self::Bct,
        Self::Bc,
        Self::St,
        Self::L,
        Self::C,
    ];

    /// Looks up an opcode byte; unknown bytes yield `None`.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            OP_LR => Some(Self::Lr),
            OP_CR => Some(Self::Cr),
            OP_AR => Some(Self::Ar),
            OP_SR => Some(Self::Sr),
            OP_LA => Some(Self::La),
            OP_BCT => Some(Self::Bct),
            OP_BC => Some(Self::Bc),
            OP_ST => Some(Self::St),
            OP_L => Some(Self::L),
            OP_C => Some(Self::C),
            _ => None,
        }
    }

    /// The encoded opcode byte.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Lr => OP_LR,
            Self::Cr => OP_CR,
            Self::Ar => OP_AR,
            Self::Sr => OP_SR,
            Self::La => OP_LA,
            Self::Bct => OP_BCT,
            Self::Bc => OP_BC,
            Self::St => OP_ST,
            Self::L => OP_L,
            Self::C => OP_C,
        }
    }

    /// Position of this opcode in [`Opcode::ALL`] and in the per-opcode tallies.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lr => "LR",
            Self::Cr => "CR",
            Self::Ar => "AR",
            Self::Sr => "SR",
            Self::La => "LA",
            Self::Bct => "BCT",
            Self::Bc => "BC",
            Self::St => "ST",
            Self::L => "L",
            Self::C => "C",
        }
    }
}

/// The order in which the octets of a multi-byte value are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant octet first.
    LittleEndian,
    /// Most significant octet first.
    BigEndian,
}

impl ByteOrder {
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;
    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;
}

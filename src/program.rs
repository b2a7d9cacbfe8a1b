//! # Program Image
//!
//! The loaded machine code, addressed from 0 in its own space. Instruction fetch
//! reads from here and never from the data bus. Reads past the end are an error
//! rather than garbage or a wrap.

use crate::ExecutionError;

/// An owned cartridge/program byte sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramImage {
    bytes: Vec<u8>,
}

impl ProgramImage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// `ProgramOutOfBounds` if `address` is past the end of the image.
    pub fn read8(&self, address: u16) -> Result<u8, ExecutionError> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(ExecutionError::ProgramOutOfBounds {
                address,
                len: self.bytes.len(),
            })
    }

    /// Reads a little-endian word (low byte at `address`).
    ///
    /// ```
    /// use lr35902::ProgramImage;
    ///
    /// let image = ProgramImage::new(vec![0x21, 0x34, 0x12]);
    /// assert_eq!(image.read16(1).unwrap(), 0x1234);
    /// ```
    pub fn read16(&self, address: u16) -> Result<u16, ExecutionError> {
        let low = self.read8(address)?;
        let high = self.read8(address.wrapping_add(1))?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Overwrites one byte in place. The image never grows.
    pub fn write(&mut self, address: u16, value: u8) -> Result<(), ExecutionError> {
        let len = self.bytes.len();
        match self.bytes.get_mut(address as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ExecutionError::ProgramOutOfBounds { address, len }),
        }
    }
}

impl From<Vec<u8>> for ProgramImage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ProgramImage {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read8_in_bounds() {
        let image = ProgramImage::new(vec![0x00, 0xAF]);
        assert_eq!(image.read8(0).unwrap(), 0x00);
        assert_eq!(image.read8(1).unwrap(), 0xAF);
    }

    #[test]
    fn test_read8_past_end() {
        let image = ProgramImage::new(vec![0x00]);
        assert_eq!(
            image.read8(1),
            Err(ExecutionError::ProgramOutOfBounds { address: 1, len: 1 })
        );
    }

    #[test]
    fn test_read16_needs_both_bytes() {
        let image = ProgramImage::new(vec![0x01, 0x34]);
        assert!(matches!(
            image.read16(1),
            Err(ExecutionError::ProgramOutOfBounds { address: 2, .. })
        ));
    }

    #[test]
    fn test_empty_image_faults_on_first_read() {
        let image = ProgramImage::default();
        assert!(image.is_empty());
        assert!(image.read8(0).is_err());
    }

    #[test]
    fn test_write_in_place() {
        let mut image = ProgramImage::new(vec![0x00, 0x00]);
        image.write(1, 0x76).unwrap();
        assert_eq!(image.as_bytes(), &[0x00, 0x76]);
        assert!(image.write(2, 0x00).is_err());
        assert_eq!(image.len(), 2);
    }
}

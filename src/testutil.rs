use ark_std::rand::{Error as RandError, RngCore};

/// Serves bytes from a fixed buffer and errors once it runs out, standing in
/// for an exhaustible randomness source.
pub(crate) struct FixedRng {
    data: Vec<u8>,
    at: usize,
}

impl FixedRng {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data, at: 0 }
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).expect("fixed rng exhausted")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        let end = self.at + dest.len();
        if end > self.data.len() {
            return Err(RandError::new("cannot source enough entropy"));
        }
        dest.copy_from_slice(&self.data[self.at..end]);
        self.at = end;
        Ok(())
    }
}

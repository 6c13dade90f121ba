use crate::codec::CodecError;

pub fn ensure_frame_size(bytes: &[u8], expected: usize) -> Result<(), CodecError> {
    if bytes.len() != expected {
        return Err(CodecError::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(())
}

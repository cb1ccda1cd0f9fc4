//! Minimal PNG writer for the built-in backend
//!
//! Emits 8-bit RGBA (color type 6) files: signature, IHDR, one IDAT, IEND.
//! Scanlines carry filter type 0 and the zlib stream uses stored deflate
//! blocks only, so the writer needs no compression dependencies. Chunk CRCs
//! use the standard reflected 0xEDB88320 polynomial over type + data.

use thiserror::Error;

/// PNG file signature
pub const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

#[derive(Debug, Error)]
pub enum PngError {
    #[error("pixel buffer is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Encode a row-major, top-to-bottom RGBA buffer as a complete PNG file
pub fn encode_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, PngError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(PngError::BufferSize {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    let mut out = Vec::with_capacity(expected + 128);
    out.extend_from_slice(&SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type (RGBA)
    ihdr.push(0); // compression
    ihdr.push(0); // filter
    ihdr.push(0); // interlace
    write_chunk(&mut out, b"IHDR", &ihdr);

    // Scanlines with filter type 0 (none)
    let row_bytes = width as usize * 4;
    let mut raw = Vec::with_capacity((row_bytes + 1) * height as usize);
    for y in 0..height as usize {
        raw.push(0);
        raw.extend_from_slice(&rgba[y * row_bytes..(y + 1) * row_bytes]);
    }

    write_chunk(&mut out, b"IDAT", &zlib_stored(&raw));
    write_chunk(&mut out, b"IEND", &[]);

    Ok(out)
}

/// Frame one chunk: big-endian length, type, data, CRC-32 over type + data
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    let crc = !crc32_update(crc32_update(0xffff_ffff, chunk_type), data);
    out.extend_from_slice(&crc.to_be_bytes());
}

/// CRC-32 as used by PNG chunk trailers
pub fn crc32(data: &[u8]) -> u32 {
    !crc32_update(0xffff_ffff, data)
}

fn crc32_update(mut crc: u32, data: &[u8]) -> u32 {
    for byte in data {
        crc ^= *byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xedb8_8320;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

/// Wrap raw bytes in a zlib stream of stored (uncompressed) deflate blocks
fn zlib_stored(data: &[u8]) -> Vec<u8> {
    // 2-byte header + stored-block framing + 4-byte Adler-32
    let mut out = Vec::with_capacity(data.len() + data.len() / 65535 * 5 + 11);
    out.push(0x78);
    out.push(0x01);

    let mut blocks = data.chunks(65535).peekable();
    loop {
        // An empty input still needs one final (empty) stored block
        let block = blocks.next().unwrap_or(&[]);
        let is_final = blocks.peek().is_none();

        out.push(if is_final { 0x01 } else { 0x00 });
        let len = block.len() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(block);

        if is_final {
            break;
        }
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for byte in data {
        a = (a + *byte as u32) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undo `zlib_stored`: returns the raw bytes and the Adler-32 trailer
    fn inflate_stored(zlib: &[u8]) -> (Vec<u8>, u32) {
        assert_eq!(zlib[0], 0x78);
        let mut rest = &zlib[2..];
        let mut out = Vec::new();
        loop {
            let header = rest[0];
            assert_eq!(header >> 1, 0, "expected stored blocks only");
            let len = u16::from_le_bytes([rest[1], rest[2]]);
            let nlen = u16::from_le_bytes([rest[3], rest[4]]);
            assert_eq!(!len, nlen);
            out.extend_from_slice(&rest[5..5 + len as usize]);
            rest = &rest[5 + len as usize..];
            if header & 1 == 1 {
                break;
            }
        }
        assert_eq!(rest.len(), 4);
        (out, u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]))
    }

    #[test]
    fn test_crc32_known_values() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
        assert_eq!(crc32(b"IEND"), 0xae42_6082);
    }

    #[test]
    fn test_adler32_known_values() {
        assert_eq!(adler32(b""), 1);
        assert_eq!(adler32(b"Wikipedia"), 0x11e6_0398);
    }

    #[test]
    fn test_zlib_stored_round_trip() {
        // Long enough to need multiple stored blocks
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let zlib = zlib_stored(&data);
        let (raw, adler) = inflate_stored(&zlib);
        assert_eq!(raw, data);
        assert_eq!(adler, adler32(&data));
    }

    #[test]
    fn test_zlib_stored_empty_input() {
        let zlib = zlib_stored(&[]);
        let (raw, adler) = inflate_stored(&zlib);
        assert!(raw.is_empty());
        assert_eq!(adler, 1);
    }

    #[test]
    fn test_encode_layout() {
        let png = encode_rgba(2, 2, &[0xab; 16]).unwrap();
        assert_eq!(&png[..8], &SIGNATURE);
        // First chunk is a 13-byte IHDR with our dimensions
        assert_eq!(u32::from_be_bytes(png[8..12].try_into().unwrap()), 13);
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes(png[16..20].try_into().unwrap()), 2);
        assert_eq!(u32::from_be_bytes(png[20..24].try_into().unwrap()), 2);
        assert_eq!(png[24], 8); // bit depth
        assert_eq!(png[25], 6); // color type RGBA
        // File ends with an empty IEND chunk
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_encode_rejects_wrong_buffer_size() {
        let err = encode_rgba(2, 2, &[0; 15]).unwrap_err();
        assert!(matches!(
            err,
            PngError::BufferSize {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_round_trips_through_decoder() {
        let mut rgba = Vec::with_capacity(4 * 4 * 4);
        for i in 0..4 * 4 {
            rgba.extend_from_slice(&[i as u8 * 16, 255 - i as u8 * 16, i as u8, 255]);
        }
        let png = encode_rgba(4, 4, &rgba).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.into_raw(), rgba);
    }
}

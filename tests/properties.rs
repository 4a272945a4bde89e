use imgconv::{DecodeRequest, EncodeRequest, Image, Pixel};
use quickcheck::quickcheck;

fn pixels_from_seed(count: usize, mut seed: u64) -> Vec<Pixel> {
    (0..count)
        .map(|_| {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let bytes = seed.to_le_bytes();
            Pixel {
                r: bytes[0],
                g: bytes[1],
                b: bytes[2],
            }
        })
        .collect()
}

quickcheck! {
    fn bmp_roundtrip_any_size(width: u8, height: u8, seed: u64) -> bool {
        let w = usize::from(width % 64) + 1;
        let h = usize::from(height % 16) + 1;
        let image = Image::from_pixels(pixels_from_seed(w * h, seed), w, h).unwrap();

        let encoded = EncodeRequest::bmp().encode(&image).unwrap();
        // stride invariants, observed through the emitted scanlines
        let scanline = (encoded.len() - 54) / h;
        if scanline % 4 != 0 || scanline < w * 3 || scanline - w * 3 >= 4 {
            return false;
        }
        if encoded.len() != 54 + scanline * h {
            return false;
        }

        DecodeRequest::new(&encoded).decode().unwrap() == image
    }

    fn ppm_roundtrip_any_size(width: u8, height: u8, seed: u64) -> bool {
        let w = usize::from(width % 64) + 1;
        let h = usize::from(height % 16) + 1;
        let image = Image::from_pixels(pixels_from_seed(w * h, seed), w, h).unwrap();

        let encoded = EncodeRequest::ppm().encode(&image).unwrap();
        DecodeRequest::new(&encoded).decode().unwrap() == image
    }
}

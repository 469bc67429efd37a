use std::io::{self, Write};
use std::path::Path;

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
struct FileHeader {
    bf_type: u16,
    bf_size: u32,
    bf_reserved: u32,
    bf_off_bits: u32,
}

impl FileHeader {
    fn from(pixel_array_size: usize) -> Self {
        Self {
            bf_type: 0x4d42,
            bf_size: std::mem::size_of::<FileHeader>() as u32
                + std::mem::size_of::<InfoHeader>() as u32
                + pixel_array_size as u32,
            bf_reserved: 0,
            bf_off_bits: std::mem::size_of::<FileHeader>() as u32
                + std::mem::size_of::<InfoHeader>() as u32,
        }
    }
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
struct InfoHeader {
    bi_size: u32,
    bi_width: i32,
    bi_height: i32,
    bi_planes: u16,
    bi_bit_count: u16,
    bi_compression: u32,
    bi_size_image: u32,
    bi_x_pels_per_meter: i32,
    bi_y_pels_per_meter: i32,
    bi_clr_used: u32,
    bi_clr_important: u32,
}

impl InfoHeader {
    fn from(width: usize, height: usize, pixel_array_size: usize) -> Self {
        Self {
            bi_size: std::mem::size_of::<InfoHeader>() as u32,
            bi_width: width as i32,
            // Negative height marks a top-down pixel order
            bi_height: -(height as i32),
            bi_planes: 1,
            bi_bit_count: 24,
            bi_compression: 0,
            bi_size_image: pixel_array_size as u32,
            bi_x_pels_per_meter: 2835,
            bi_y_pels_per_meter: 2835,
            bi_clr_used: 0,
            bi_clr_important: 0,
        }
    }
}

fn header_bytes<T>(header: &T) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(header as *const T as *const u8, std::mem::size_of::<T>())
    }
}

/// 24-bit uncompressed BMP writer. `pixels` are RGB, row-major, top-left
/// origin; the byte swap to the file's BGR order happens on write.
pub struct Bmp<'a> {
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

impl<'a> Bmp<'a> {
    pub fn from_rgb(width: usize, height: usize, pixels: &'a [u8]) -> Self {
        assert_eq!(
            pixels.len(),
            3 * width * height,
            "pixel data does not match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        // Rows are padded to a 4 byte boundary
        let row_size = (3 * self.width + 3) & !3;
        let pixel_array_size = row_size * self.height;
        let file_header = FileHeader::from(pixel_array_size);
        let info_header = InfoHeader::from(self.width, self.height, pixel_array_size);
        let mut file = std::fs::File::create(filename)?;

        file.write_all(header_bytes(&file_header))?;
        file.write_all(header_bytes(&info_header))?;

        let padding = vec![0u8; row_size - 3 * self.width];
        let mut row = Vec::with_capacity(row_size);
        for y in 0..self.height {
            row.clear();
            for x in 0..self.width {
                let i = 3 * (y * self.width + x);
                row.extend_from_slice(&[self.pixels[i + 2], self.pixels[i + 1], self.pixels[i]]);
            }
            row.extend_from_slice(&padding);
            file.write_all(&row)?;
        }
        Ok(())
    }
}

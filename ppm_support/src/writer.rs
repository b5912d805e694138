use raycast_core::models::image::Image;
use raycast_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

pub struct PPMWriter {
}

impl PPMWriter {

    pub fn new() -> Self {
        PPMWriter {}
    }
}

impl ImageWriter for PPMWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if image.pixels.len() != image.width * image.height {
            return Err(ImageIOError::FailedToWrite {
                description: format!(
                    "pixel buffer holds {} entries for a {}x{} image",
                    image.pixels.len(),
                    image.width,
                    image.height
                ),
            });
        }

        let ascii = options.get_bool("ascii", false)?;

        let mut bytes = write_header(if ascii { "P3" } else { "P6" }, image);
        if ascii {
            write_p3_raster(image, &mut bytes);
        } else {
            write_p6_raster(image, &mut bytes);
        }

        Ok(bytes)
    }
}

fn write_header(magic_number: &str, image: &Image) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.width * image.height * 3 + 32);
    bytes.extend_from_slice(magic_number.as_bytes());
    // 10 - LF
    bytes.push(10);
    bytes.extend_from_slice(image.width.to_string().as_bytes());
    bytes.extend_from_slice(b" ");
    bytes.extend_from_slice(image.height.to_string().as_bytes());
    bytes.push(10);
    bytes.extend_from_slice(b"255");
    bytes.push(10);
    bytes
}

// raw triples, row major, top row first, nothing after the last pixel
fn write_p6_raster(image: &Image, bytes: &mut Vec<u8>) {
    for pixel in &image.pixels {
        bytes.push(pixel.red);
        bytes.push(pixel.green);
        bytes.push(pixel.blue);
    }
}

fn write_p3_raster(image: &Image, bytes: &mut Vec<u8>) {
    for y in 0..image.height {
        for x in 0..image.width {
            let pixel = image.get_pixel(x, y);
            bytes.extend_from_slice(pixel.red.to_string().as_bytes());
            bytes.extend_from_slice(b" ");
            bytes.extend_from_slice(pixel.green.to_string().as_bytes());
            bytes.extend_from_slice(b" ");
            bytes.extend_from_slice(pixel.blue.to_string().as_bytes());
            bytes.extend_from_slice(b" ");
        }
        bytes.push(10);
    }
}

#[cfg(test)]
mod tests {
    use raycast_core::models::pixel::Pixel;

    use super::*;

    #[test]
    fn p6_header_and_raster() {
        let mut image = Image::new(2, 2);
        image.set_pixel(0, 0, Pixel::from_rgb(255, 0, 0));
        image.set_pixel(1, 0, Pixel::from_rgb(0, 255, 0));
        image.set_pixel(1, 1, Pixel::from_rgb(0, 0, 255));

        let bytes = PPMWriter::new().write(&image, &ImageWriterOptions::default())
            .expect("failed to write the image");

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 2 * 2 * 3);

        let raster = &bytes[header.len()..];
        assert_eq!(&raster[0..3], &[255, 0, 0]);
        assert_eq!(&raster[3..6], &[0, 255, 0]);
        assert_eq!(&raster[6..9], &[0, 0, 0]);
        assert_eq!(&raster[9..12], &[0, 0, 255]);
    }

    #[test]
    fn p3_raster_when_ascii_option_is_set() {
        let mut image = Image::new(2, 1);
        image.set_pixel(0, 0, Pixel::from_rgb(255, 0, 0));
        image.set_pixel(1, 0, Pixel::from_rgb(0, 199, 3));

        let options = ImageWriterOptions::default().with_option_bool("ascii", true);
        let bytes = PPMWriter::new().write(&image, &options)
            .expect("failed to write the image");

        assert_eq!(bytes, b"P3\n2 1\n255\n255 0 0 0 199 3 \n".to_vec());
    }

    #[test]
    fn rejects_malformed_ascii_option() {
        let image = Image::new(1, 1);
        let options = ImageWriterOptions::default().with_option("ascii", "yes");

        let result = PPMWriter::new().write(&image, &options);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_inconsistent_pixel_buffer() {
        let mut image = Image::new(2, 2);
        image.pixels.pop();

        let result = PPMWriter::new().write(&image, &ImageWriterOptions::default());
        assert!(result.is_err());
    }
}

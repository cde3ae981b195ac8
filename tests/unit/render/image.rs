//! Tests for the pixel buffer contract including out-of-bounds access

#[cfg(test)]
mod tests {
    use identicon::render::image::{Bounds, Image, TRANSPARENT};
    use image::{ColorType, GenericImageView, Rgba};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    // Tests a blank image is zeroed with the expected layout
    // Verified by allocating with a non-zero fill
    #[test]
    fn test_blank_image_layout() {
        let image = Image::blank(4);

        assert_eq!(image.size(), 4);
        assert_eq!(image.stride(), 16);
        assert_eq!(image.as_raw().len(), 4 * 4 * 4);
        assert!(image.as_raw().iter().all(|&byte| byte == 0));
        assert_eq!(image.color_model(), ColorType::Rgba8);
    }

    // Tests bounds always span the origin to the image size
    // Verified by returning inclusive maximum coordinates
    #[test]
    fn test_bounds() {
        let image = Image::blank(10);
        let bounds = image.bounds();

        assert_eq!(
            bounds,
            Bounds {
                min: (0, 0),
                max: (10, 10)
            }
        );
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 10);
        assert!(bounds.contains(9, 9));
        assert!(!bounds.contains(10, 0));
        assert!(!bounds.contains(0, 10));
        assert_eq!(GenericImageView::bounds(&image), (0, 0, 10, 10));
    }

    // Tests pixels written in bounds are read back and laid out row-major
    // Verified by swapping x and y in the pixel offset
    #[test]
    fn test_set_and_read_pixel() {
        let mut image = Image::blank(5);
        image.set_pixel(3, 1, RED);

        assert_eq!(image.pixel_at(3, 1), RED);
        assert_eq!(image.pixel_at(1, 3), TRANSPARENT);

        let offset = image.pixel_offset(3, 1);
        assert_eq!(offset, Some(5 * 4 + 3 * 4));
        let bytes = offset.and_then(|start| image.as_raw().get(start..start + 4));
        assert_eq!(bytes, Some(&[255, 0, 0, 255][..]));
    }

    // Tests out-of-bounds access neither panics nor changes pixels
    // Verified by removing the bounds check in set_pixel
    #[test]
    fn test_out_of_bounds_access_is_safe() {
        let mut image = Image::blank(3);
        image.fill(RED);
        let before = image.clone();

        image.set_pixel(3, 0, TRANSPARENT);
        image.set_pixel(0, 3, TRANSPARENT);
        image.set_pixel(u32::MAX, u32::MAX, TRANSPARENT);

        assert_eq!(image, before);
        assert_eq!(image.pixel_at(3, 3), TRANSPARENT);
        assert_eq!(image.pixel_at(u32::MAX, 0), TRANSPARENT);
        assert_eq!(image.get_pixel(100, 100), TRANSPARENT);
        assert_eq!(image.pixel_offset(3, 0), None);
    }

    // Tests rectangle fills are clipped to the image
    // Verified by removing the clamp on the rectangle end
    #[test]
    fn test_fill_rect_clips() {
        let mut image = Image::blank(4);
        image.fill_rect(2, 2, 10, 10, RED);

        assert_eq!(image.pixel_at(1, 1), TRANSPARENT);
        assert_eq!(image.pixel_at(2, 2), RED);
        assert_eq!(image.pixel_at(3, 3), RED);
        assert_eq!(image.pixel_at(3, 1), TRANSPARENT);

        image.fill_rect(u32::MAX, 0, 5, 5, TRANSPARENT);
        assert_eq!(image.pixel_at(3, 3), RED);
    }

    // Tests the generic image view reports the same pixels
    // Verified by returning the background from get_pixel
    #[test]
    fn test_generic_image_view() {
        let mut image = Image::blank(2);
        image.set_pixel(1, 0, RED);

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0), RED);
        assert_eq!(image.clone().into_rgba_image().get_pixel(1, 0), &RED);
        assert_eq!(image.as_rgba_image().dimensions(), (2, 2));
    }
}

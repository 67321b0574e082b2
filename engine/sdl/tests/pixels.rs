use sdl::{Color, Error, PixelData, PixelFormat, PixelFormatEnum, Point, Rect};

fn rgb565() -> PixelFormat {
    PixelFormat::from_masks(PixelFormatEnum::RGB565, 16, 0xf800, 0x07e0, 0x001f, 0)
}

#[test]
fn gradient_survives_rgb565() {
    let (width, height) = (32, 4);
    let pitch = 72;
    let mut bytes = vec![0; pitch * height as usize];
    let mut pixels = PixelData::from_bytes(&mut bytes, width, height, pitch, rgb565());

    for y in 0..height {
        for x in 0..width {
            let shade = (x * 8) as u8;
            pixels.set(x, y, Color::rgb(shade, 255 - shade, 0)).unwrap();
        }
    }

    for y in 0..height {
        for x in 0..width {
            let shade = (x * 8) as u8;
            let color = pixels.at(x, y).unwrap();
            // Five bits of red, six of green.
            assert_eq!(color.r & 0xf8, shade & 0xf8);
            assert_eq!(color.g & 0xfc, (255 - shade) & 0xfc);
            assert_eq!(color.b, 0);
            assert_eq!(color.a, 255);
        }
    }

    drop(pixels);

    // Row padding is left alone.
    assert!(bytes[64..72].iter().all(|&b| b == 0));
}

#[test]
fn indexed_pixels_snap_to_palette() {
    let palette = [
        Color::BLACK,
        Color::WHITE,
        Color::rgb(255, 0, 0),
        Color::rgb(0, 0, 255),
    ];
    let format = PixelFormat::indexed(PixelFormatEnum::INDEX8, &palette);
    let mut bytes = [0; 4];
    let mut pixels = PixelData::from_bytes(&mut bytes, 2, 2, 2, format);

    pixels.set(0, 0, Color::rgb(240, 20, 10)).unwrap();
    pixels.set(1, 0, Color::rgb(250, 250, 240)).unwrap();
    pixels.set(0, 1, Color::rgb(10, 10, 200)).unwrap();

    assert_eq!(pixels.at(0, 0).unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(pixels.at(1, 0).unwrap(), Color::WHITE);
    assert_eq!(pixels.at(0, 1).unwrap(), Color::rgb(0, 0, 255));
    assert_eq!(pixels.at(1, 1).unwrap(), Color::BLACK);
    assert_eq!(pixels.bytes(), &[2, 1, 3, 0]);
}

#[test]
fn access_outside_the_surface_fails() {
    let mut bytes = vec![0; 4 * 4 * 4];
    let format = PixelFormat::from_masks(
        PixelFormatEnum::ARGB8888,
        32,
        0x00ff0000,
        0x0000ff00,
        0x000000ff,
        0xff000000,
    );
    let mut pixels = PixelData::from_bytes(&mut bytes, 4, 4, 16, format);

    assert_eq!(pixels.bounds(), Rect::from_size(4, 4));
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4)] {
        assert!(matches!(
            pixels.set(x, y, Color::WHITE),
            Err(Error::OutOfBounds { .. })
        ));
    }
    pixels.set(3, 3, Color::rgba(1, 2, 3, 4)).unwrap();
    assert_eq!(pixels.at(3, 3).unwrap(), Color::rgba(1, 2, 3, 4));
}

#[test]
fn fourcc_formats_are_rejected() {
    let format = PixelFormat::from_masks(PixelFormatEnum::YUY2, 16, 0, 0, 0, 0);
    let mut bytes = [0; 8];
    let pixels = PixelData::from_bytes(&mut bytes, 2, 2, 4, format);
    assert!(matches!(
        pixels.at(0, 0),
        Err(Error::UnsupportedPixelFormat(format)) if format == PixelFormatEnum::YUY2.0
    ));
}

#[test]
fn rect_helpers_compose() {
    let window = Rect::from_size(640, 480);
    let image = Rect::new(600, 400, 100, 100);

    let visible = window.intersection(&image).unwrap();
    assert_eq!(visible, Rect::new(600, 400, 40, 80));
    assert!(visible.contains_point(Point::new(639, 479)));
    assert!(!visible.contains_point(Point::new(640, 479)));
    assert_eq!(window.union(&image), Rect::from_size(700, 500));
    assert_eq!(window.intersection(&Rect::new(700, 0, 10, 10)), None);
}

//! Tests for rasterizing frames

#[cfg(test)]
mod tests {
    use image::Rgba;
    use mazeview::ViewerError;
    use mazeview::io::configuration::{
        ACTIVE_COLOR, INACTIVE_COLOR, MAX_CELL_SIZE, PATH_COLOR, ROUTE_COLOR, TEXT_COLOR,
        WALL_COLOR,
    };
    use mazeview::io::render::{FramePainter, MIN_CELL_SIZE, Palette};
    use mazeview::maze::frame::{Frame, decode};

    fn frame(text: &str) -> Frame {
        decode(text, 1, 1).expect("Failed to decode test frame")
    }

    // Tests tiny cells are rejected
    // Verified by accepting any cell size
    #[test]
    fn test_minimum_cell_size() {
        assert!(matches!(
            FramePainter::new(MIN_CELL_SIZE - 1),
            Err(ViewerError::InvalidParameter { .. })
        ));
        assert!(FramePainter::new(MIN_CELL_SIZE).is_ok());
    }

    // Tests oversized cells are rejected before any arithmetic on them
    // Verified by only checking the lower bound
    #[test]
    fn test_maximum_cell_size() {
        assert!(matches!(
            FramePainter::new(MAX_CELL_SIZE + 1),
            Err(ViewerError::InvalidParameter { .. })
        ));
        assert!(matches!(
            FramePainter::new(3_000_000_000),
            Err(ViewerError::InvalidParameter { .. })
        ));

        let painter = FramePainter::new(MAX_CELL_SIZE).expect("Valid cell size");
        let size = painter
            .image_size(&Frame::cleared(30, 30))
            .expect("Largest maze fits");
        assert_eq!(size, (30 * MAX_CELL_SIZE + 1, 30 * MAX_CELL_SIZE + 1));
    }

    // Tests a glyph at the smallest cell size stays inside its own cell
    // Verified by lowering the minimum below the glyph height
    #[test]
    fn test_glyph_fits_smallest_cell() {
        let painter = FramePainter::new(MIN_CELL_SIZE).expect("Valid cell size");
        let tall = decode("###\n# #\n###\n#S#\n###", 1, 2).expect("Valid 1x2 frame");
        let image = painter.render(&tall).expect("Frame should render");
        let edge = MIN_CELL_SIZE;

        // Interior of the upper cell is untouched by the lower cell's glyph
        for y in 1..edge {
            for x in 1..edge {
                assert_eq!(*image.get_pixel(x, y), Rgba(INACTIVE_COLOR), "pixel ({x}, {y})");
            }
        }

        let glyph_pixels = (edge + 1..2 * edge)
            .flat_map(|y| (1..edge).map(move |x| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) == Rgba(TEXT_COLOR))
            .count();
        assert!(glyph_pixels > 0);
    }

    // Tests the image covers every cell plus the closing wall line
    // Verified by dropping the extra pixel
    #[test]
    fn test_image_size() {
        let painter = FramePainter::new(10).expect("Valid cell size");
        let frame = Frame::cleared(3, 2);
        assert_eq!(
            painter.image_size(&frame).expect("Size fits"),
            (31, 21)
        );

        let image = painter
            .render(&frame)
            .expect("Frame should render");
        assert_eq!(image.dimensions(), (31, 21));
    }

    // Tests a closed cell has walls on its border and an inactive center
    // Verified by painting closed cells as visited
    #[test]
    fn test_closed_cell() {
        let painter = FramePainter::new(10).expect("Valid cell size");
        let image = painter
            .render(&frame("###\n#.#\n###"))
            .expect("Frame should render");

        assert_eq!(*image.get_pixel(0, 5), Rgba(WALL_COLOR));
        assert_eq!(*image.get_pixel(10, 5), Rgba(WALL_COLOR));
        assert_eq!(*image.get_pixel(5, 0), Rgba(WALL_COLOR));
        assert_eq!(*image.get_pixel(5, 10), Rgba(WALL_COLOR));
        assert_eq!(*image.get_pixel(5, 5), Rgba(INACTIVE_COLOR));
    }

    // Tests path marks run from the center to each open side
    // Verified by drawing marks only at the center
    #[test]
    fn test_path_marks() {
        let painter = FramePainter::new(10).expect("Valid cell size");
        let image = painter
            .render(&frame("#.#\n...\n#.#"))
            .expect("Frame should render");

        assert_eq!(*image.get_pixel(5, 5), Rgba(PATH_COLOR));
        assert_eq!(*image.get_pixel(1, 5), Rgba(PATH_COLOR));
        assert_eq!(*image.get_pixel(9, 5), Rgba(PATH_COLOR));
        assert_eq!(*image.get_pixel(5, 1), Rgba(PATH_COLOR));
        assert_eq!(*image.get_pixel(5, 9), Rgba(PATH_COLOR));

        // Open sides leave the background visible away from the marks
        assert_eq!(*image.get_pixel(2, 2), Rgba(ACTIVE_COLOR));
        assert_eq!(*image.get_pixel(0, 0), Rgba(WALL_COLOR));
    }

    // Tests route marks use the route color
    // Verified by painting routes with the path color
    #[test]
    fn test_route_marks() {
        let painter = FramePainter::new(10).expect("Valid cell size");
        let image = painter
            .render(&frame("###\n#**\n###"))
            .expect("Frame should render");

        assert_eq!(*image.get_pixel(8, 5), Rgba(ROUTE_COLOR));
        assert_eq!(*image.get_pixel(2, 5), Rgba(ACTIVE_COLOR));
    }

    // Tests the start glyph is drawn inside the cell
    // Verified by skipping glyphs for visited markers
    #[test]
    fn test_start_glyph() {
        let painter = FramePainter::new(40).expect("Valid cell size");
        let image = painter
            .render(&frame("###\n#s#\n###"))
            .expect("Frame should render");

        // Scale 4 glyph box spans x 10..30, y 6..34; the top bar of S starts one column in
        assert_eq!(*image.get_pixel(16, 7), Rgba(TEXT_COLOR));
        assert_eq!(*image.get_pixel(11, 7), Rgba(INACTIVE_COLOR));

        let glyph_pixels = (2..39)
            .flat_map(|y| (2..39).map(move |x| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) == Rgba(TEXT_COLOR))
            .count();
        assert!(glyph_pixels > 0);
    }

    // Tests a custom palette is used
    // Verified by ignoring the palette override
    #[test]
    fn test_custom_palette() {
        let palette = Palette {
            inactive: Rgba([1, 2, 3, 255]),
            ..Palette::default()
        };
        let painter = FramePainter::new(10)
            .expect("Valid cell size")
            .with_palette(palette);
        let image = painter
            .render(&Frame::cleared(1, 1))
            .expect("Frame should render");
        assert_eq!(*image.get_pixel(5, 5), Rgba([1, 2, 3, 255]));
        assert_eq!(painter.cell_size(), 10);
    }
}

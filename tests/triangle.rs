
use trirast::*;

/// Corners given directly in pixel space
struct Pass;
impl VertexShader for Pass {
    type Input = (f64, f64);
    type Output = f64;
    fn vertex(&self, p: &(f64, f64)) -> VertexOut<f64> {
        VertexOut::new(Point::new(p.0, p.1), 1.0)
    }
}

struct Fill;
impl FragmentShader for Fill {
    type Input = f64;
    type Output = f64;
    fn fragment(&self, v: &f64) -> f64 {
        *v
    }
}

/// Covered pixels as '#', one string per row
fn mask(buf: &RenderingBuffer) -> Vec<String> {
    (0 .. buf.height).map(|y| {
        (0 .. buf.width).map(|x| if buf.pixel(x,y)[0] != 0.0 { '#' } else { '.' }).collect()
    }).collect()
}

#[test_log::test]
fn right_triangle() {
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::new(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(0.0, 0.0), &(4.0, 0.0), &(0.0, 4.0));
    }
    assert_eq!(mask(&buf), vec!["####....",
                                "###.....",
                                "##......",
                                "#.......",
                                "........",
                                "........",
                                "........",
                                "........"]);
}

#[test]
fn corner_order_does_not_matter() {
    let corners = [(0.3, 0.7), (7.2, 2.1), (2.6, 7.4)];
    let mut expected = None;
    for &(a, b, c) in &[(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)] {
        let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
        {
            let mut ras = Rasterizer::new(&mut buf, Pass, Fill).unwrap();
            ras.draw_triangle(&corners[a], &corners[b], &corners[c]);
        }
        let m = mask(&buf);
        match &expected {
            None => expected = Some(m),
            Some(e) => assert_eq!(&m, e, "order {} {} {}", a, b, c),
        }
    }
}

#[test]
fn flat_top_leaning_right() {
    // Bottom corner is far right of both top corners
    let mut buf = RenderingBuffer::new(20, 2, 1).unwrap();
    {
        let mut ras = Rasterizer::new(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(0.0, 0.0), &(4.0, 0.0), &(20.0, 2.0));
    }
    // Row 0 at y = 0.5: 5.0 .. 8.0
    // Row 1 at y = 1.5: 15.0 .. 16.0
    assert_eq!(mask(&buf), vec![".....###............",
                                "...............#...."]);
}

#[test]
fn flat_bottom() {
    let mut buf = RenderingBuffer::new(8, 4, 1).unwrap();
    {
        let mut ras = Rasterizer::new(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(4.0, 0.0), &(8.0, 4.0), &(0.0, 4.0));
    }
    assert_eq!(mask(&buf), vec!["....#...",
                                "...###..",
                                "..#####.",
                                ".#######"]);
}

#[test]
fn all_corners_on_one_row() {
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(5.0, 2.0), &(1.0, 2.0), &(3.0, 2.0));
        ras.draw_triangle(&(1.0, 2.2), &(5.0, 2.2), &(3.0, 2.2));
        assert!(ras.stats().rasterlines <= 2);
        assert_eq!(ras.stats().discarded_triangles, 0);
        ras.flush();
    }
    let rows = mask(&buf).iter().filter(|r| r.contains('#')).count();
    assert!(rows <= 1);
}

#[test]
fn collinear_corners_draw_nothing() {
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(0.0, 0.0), &(2.0, 2.0), &(4.0, 4.0));
        assert_eq!(ras.stats().rasterlines, 4);
        assert_eq!(ras.stats().discarded_rasterlines, 4);
        assert_eq!(ras.pending(), 0);
    }
    assert!(buf.data.iter().all(|&v| v == 0.0));
}

#[test_log::test]
fn triangles_outside_are_discarded() {
    let outside = [
        [(-3.0, 1.0), (-1.0, 5.0), (-0.1, 2.0)], // left
        [(1.0, -3.0), (5.0, -1.0), (2.0, -0.1)], // above
        [(8.0, 1.0), (12.0, 5.0), (9.0, 2.0)],   // right
        [(1.0, 8.0), (5.0, 12.0), (2.0, 9.0)],   // below
    ];
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        for (i, t) in outside.iter().enumerate() {
            ras.draw_triangle(&t[0], &t[1], &t[2]);
            assert_eq!(ras.stats().triangles, i as u64 + 1);
            assert_eq!(ras.stats().discarded_triangles, i as u64 + 1);
        }
        assert_eq!(ras.stats().rasterlines, 0);
        assert_eq!(ras.stats().flushes, 0);
    }
    assert!(buf.data.iter().all(|&v| v == 0.0));
}

#[test]
fn partially_offscreen() {
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        // Long edge follows x + y = 10.4
        ras.draw_triangle(&(-3.7, -2.9), &(13.3, -2.9), &(-3.7, 14.1));
        let stats = *ras.stats();
        assert_eq!(stats.discarded_triangles, 0);
        assert_eq!(stats.rasterlines, 8);
        assert_eq!(stats.clamped_rasterlines, 8);
        assert_eq!(stats.discarded_rasterlines, 0);
    }
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let inside = x + y <= 9;
            assert_eq!(buf.pixel(x,y)[0] != 0.0, inside, "pixel {} {}", x, y);
        }
    }
}

#[test]
fn covers_whole_buffer() {
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(-20.0, -20.0), &(40.0, -20.0), &(-20.0, 40.0));
        assert_eq!(ras.stats().rasterlines, 8);
    }
    assert!(buf.data.iter().all(|&v| v == 1.0));
}

#[test]
fn corner_clamping() {
    let corners = [(0.25, 0.25), (4.25, 0.25), (0.25, 4.25)];

    let mut center = RenderingBuffer::new(8, 4, 1).unwrap();
    {
        let mut ras = Rasterizer::new(&mut center, Pass, Fill).unwrap();
        ras.draw_triangle(&corners[0], &corners[1], &corners[2]);
    }
    assert_eq!(mask(&center), vec!["####....",
                                   "###.....",
                                   "##......",
                                   "#......."]);

    let mut corner = RenderingBuffer::new(8, 4, 1).unwrap();
    {
        let config = Config::new().with_clamping(CornerPixelClamping);
        let mut ras: Rasterizer<_, _, _, NullStats> =
            Rasterizer::with_config(&mut corner, Pass, Fill, config).unwrap();
        ras.draw_triangle(&corners[0], &corners[1], &corners[2]);
    }
    assert_eq!(mask(&corner), vec!["........",
                                   ".###....",
                                   ".##.....",
                                   ".#......"]);
}

#[test]
fn draw_triangles_and_indexed() {
    let mut a = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::new(&mut a, Pass, Fill).unwrap();
        ras.draw_triangles(&[[(0.0, 0.0), (8.0, 0.0), (8.0, 8.0)],
                             [(0.0, 0.0), (8.0, 8.0), (0.0, 8.0)]]);
    }
    assert!(a.data.iter().all(|&v| v == 1.0));

    let mut b = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let vertices = [(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)];
        let mut ras = Rasterizer::with_stats(&mut b, Pass, Fill).unwrap();
        ras.draw_indexed(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
        assert_eq!(ras.stats().triangles, 2);

        // Nothing is drawn if any index is out of range
        let err = ras.draw_indexed(&vertices, &[[0, 1, 2], [0, 2, 4]]).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(ras.stats().triangles, 2);
    }
    assert_eq!(a, b);
}

#[test]
fn construction_errors() {
    let mut buf = RenderingBuffer::new(4, 4, 3).unwrap();
    let err = Rasterizer::new(&mut buf, Pass, Fill).err().unwrap();
    assert!(matches!(err, Error::ChannelMismatch { shader: 1, buffer: 3 }));

    let mut buf = RenderingBuffer::new(4, 4, 1).unwrap();
    let config = Config::new().with_capacity(0);
    let err = Rasterizer::<_, _, _, Stats>::with_config(&mut buf, Pass, Fill, config).err().unwrap();
    assert!(matches!(err, Error::ZeroCapacity));
    assert_eq!(err.to_string(), "rasterline capacity must be at least 1");

    assert!(matches!(RenderingBuffer::new(4, 0, 1), Err(Error::EmptyBuffer { .. })));
    assert!(matches!(RenderingBuffer::from_vec(2, 2, 1, vec![0.0; 3]),
                     Err(Error::BufferSize { expected: 4, actual: 3, .. })));
}

#[test_log::test]
fn huge_coordinates() {
    // Beyond the range of row and column indices
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(0.0, -1e19), &(5.0, 5.0), &(0.0, 5.0));
        let stats = *ras.stats();
        assert_eq!(stats.rasterlines, 5);
        assert_eq!(stats.discarded_rasterlines, 0);
        assert_eq!(stats.clamped_rasterlines, 0);
    }
    assert_eq!(mask(&buf), vec!["#####...",
                                "#####...",
                                "#####...",
                                "#####...",
                                "#####...",
                                "........",
                                "........",
                                "........"]);

    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(-1e19, 0.0), &(5.0, 0.0), &(5.0, 8.0));
        let stats = *ras.stats();
        assert_eq!(stats.rasterlines, 8);
        assert_eq!(stats.clamped_rasterlines, 8);
        assert_eq!(stats.discarded_rasterlines, 0);
    }
    assert!(mask(&buf).iter().all(|row| row == "#####..."));
}

#[test]
fn infinite_coordinates() {
    let mut buf = RenderingBuffer::new(8, 8, 1).unwrap();
    {
        let mut ras = Rasterizer::with_stats(&mut buf, Pass, Fill).unwrap();
        ras.draw_triangle(&(0.0, f64::NEG_INFINITY), &(5.0, 5.0), &(0.0, 5.0));
        ras.draw_triangle(&(f64::NEG_INFINITY, 0.0), &(5.0, 0.0), &(5.0, f64::INFINITY));
        let stats = *ras.stats();
        assert_eq!(stats.triangles, 2);
        assert_eq!(stats.rasterlines, stats.discarded_rasterlines);
    }
    assert!(buf.data.iter().all(|&v| v == 0.0));
}

#[test]
fn buffer_too_large() {
    assert!(matches!(RenderingBuffer::new(usize::MAX, 2, 1),
                     Err(Error::BufferTooLarge { .. })));
    assert!(matches!(RenderingBuffer::from_vec(usize::MAX / 2, 3, 4, vec![0.0; 4]),
                     Err(Error::BufferTooLarge { .. })));
}

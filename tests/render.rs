use cairo::{Context, ImageSurface};
use scrawl::draw::{BLACK, CanvasStyle, Frame, GRAY, Stroke, WHITE, render_canvas, render_stroke};

const SIZE: i32 = 64;

fn test_style() -> CanvasStyle {
    CanvasStyle {
        backdrop: GRAY,
        panel: WHITE,
        stroke: BLACK,
        stroke_width: 2.0,
    }
}

fn render_to_bytes(frame: &Frame, active: &[(i32, i32)]) -> Vec<u8> {
    let mut surface = ImageSurface::create(cairo::Format::ARgb32, SIZE, SIZE).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        render_canvas(&ctx, SIZE as u32, SIZE as u32, &test_style(), frame, active);
    }
    surface.flush();
    let data = surface.data().unwrap();
    data.to_vec()
}

fn pixel(bytes: &[u8], x: i32, y: i32) -> [u8; 4] {
    let stride = cairo::Format::ARgb32.stride_for_width(SIZE as u32).unwrap();
    let offset = (y * stride + x * 4) as usize;
    bytes[offset..offset + 4].try_into().unwrap()
}

#[test]
fn backdrop_and_panel_cover_their_regions() {
    let bytes = render_to_bytes(&Frame::new(), &[]);

    // For a 64x64 surface the panel spans 16..48 in both axes.
    let backdrop_px = pixel(&bytes, 4, SIZE / 2);
    let panel_px = pixel(&bytes, SIZE / 2, SIZE / 2);

    assert_ne!(backdrop_px, [0, 0, 0, 0], "backdrop should be painted");
    assert_ne!(panel_px, backdrop_px, "panel tone should contrast");
}

#[test]
fn render_is_a_pure_function_of_stroke_state() {
    let mut frame = Frame::new();
    let mut stroke = Stroke::starting_at(5, 5);
    stroke.push(40, 40);
    stroke.push(60, 10);
    frame.push(stroke);

    let active = [(10, 50), (30, 55)];

    let first = render_to_bytes(&frame, &active);
    let second = render_to_bytes(&frame, &active);
    assert_eq!(first, second);
}

#[test]
fn strokes_change_the_rendered_output() {
    let empty = render_to_bytes(&Frame::new(), &[]);

    let mut frame = Frame::new();
    let mut stroke = Stroke::starting_at(2, 2);
    stroke.push(60, 60);
    frame.push(stroke);

    let drawn = render_to_bytes(&frame, &[]);
    assert_ne!(empty, drawn);
}

#[test]
fn active_stroke_renders_without_being_committed() {
    let empty = render_to_bytes(&Frame::new(), &[]);
    let with_active = render_to_bytes(&Frame::new(), &[(2, 2), (60, 60)]);
    assert_ne!(empty, with_active);
}

#[test]
fn empty_stroke_draws_nothing() {
    let mut surface = ImageSurface::create(cairo::Format::ARgb32, SIZE, SIZE).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        render_stroke(&ctx, &[], BLACK, 2.0);
    }
    surface.flush();
    let data = surface.data().unwrap();
    assert!(data.iter().all(|byte| *byte == 0));
}

use gridsketch_core::BoundsError;
use gridsketch_designer::canvas::{Canvas, Cell, Pen};

fn diagonal_cells(canvas: &Canvas) -> usize {
    (0..10).filter(|&i| canvas.is_set(i, i)).count()
}

#[test]
fn test_diagonal_draw_and_erase() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.draw_line(0, 0, 9, 9, Pen::Draw).unwrap();

    assert_eq!(diagonal_cells(&canvas), 10);
    assert_eq!(canvas.set_count(), 10);

    canvas.draw_line(0, 0, 9, 9, Pen::Erase).unwrap();
    assert_eq!(diagonal_cells(&canvas), 0);
    assert!(canvas.is_blank());
}

#[test]
fn test_rect_out_of_bounds_leaves_canvas_untouched() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    assert_eq!(
        canvas.draw_rect(2, 2, 11, 11, Pen::Draw),
        Err(BoundsError::MaxWidth)
    );
    assert!(canvas.is_blank());

    // the left edge would fit, but nothing is drawn
    assert_eq!(
        canvas.draw_rect(2, 2, 5, 10, Pen::Draw),
        Err(BoundsError::MaxHeight)
    );
    assert!(canvas.is_blank());
}

#[test]
fn test_rect_reports_first_failing_edge() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    // bottom edge runs off the left side; the left edge would run off the top
    assert_eq!(
        canvas.draw_rect(-1, 0, 5, 20, Pen::Draw),
        Err(BoundsError::MinWidth)
    );
    assert_eq!(
        canvas.draw_rect(0, -1, 5, 20, Pen::Draw),
        Err(BoundsError::MinHeight)
    );
    // bottom edge fits, left edge runs off the top
    assert_eq!(
        canvas.draw_rect(0, 0, 5, 12, Pen::Draw),
        Err(BoundsError::MaxHeight)
    );
    assert!(canvas.is_blank());
}

#[test]
fn test_rect_outline() {
    let mut canvas = Canvas::new(6, 5).unwrap();
    canvas.draw_rect(1, 1, 4, 3, Pen::Draw).unwrap();

    let expected = "\
. . . . . . 
. * * * * . 
. * . . * . 
. * * * * . 
. . . . . . 
";
    assert_eq!(canvas.render(), expected);
}

#[test]
fn test_rect_corners_in_any_order() {
    let mut a = Canvas::new(8, 8).unwrap();
    let mut b = Canvas::new(8, 8).unwrap();
    a.draw_rect(1, 1, 6, 5, Pen::Draw).unwrap();
    b.draw_rect(6, 5, 1, 1, Pen::Draw).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_circle_is_atomic() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    assert_eq!(
        canvas.draw_circle(2, 5, 4, Pen::Draw),
        Err(BoundsError::MinWidth)
    );
    assert_eq!(
        canvas.draw_circle(5, 8, 3, Pen::Draw),
        Err(BoundsError::MaxHeight)
    );
    assert!(canvas.is_blank());

    canvas.draw_circle(5, 5, 3, Pen::Draw).unwrap();
    assert!(canvas.is_set(8, 5));
    assert!(canvas.is_set(5, 8));
    assert!(canvas.is_set(2, 5));
    assert!(canvas.is_set(5, 2));
    assert!(!canvas.is_set(5, 5));
}

#[test]
fn test_circle_draw_then_erase() {
    let mut canvas = Canvas::new(12, 12).unwrap();
    canvas.draw_circle(6, 6, 4, Pen::Draw).unwrap();
    assert!(canvas.set_count() > 0);
    canvas.draw_circle(6, 6, 4, Pen::Erase).unwrap();
    assert!(canvas.is_blank());
}

#[test]
fn test_zero_radius_circle_is_a_dot() {
    let mut canvas = Canvas::new(5, 5).unwrap();
    canvas.draw_circle(2, 2, 0, Pen::Draw).unwrap();
    assert_eq!(canvas.set_count(), 1);
    assert_eq!(canvas.get(2, 2), Some(Cell::Set));
}

#[test]
fn test_fill_enclosed_region_only() {
    let mut canvas = Canvas::new(8, 8).unwrap();
    canvas.draw_rect(1, 1, 5, 5, Pen::Draw).unwrap();
    let outline = canvas.set_count();

    let filled = canvas.fill(3, 3).unwrap();
    assert_eq!(filled, 9);
    assert_eq!(canvas.set_count(), outline + 9);

    for (x, y) in [(0, 0), (6, 6), (7, 3), (3, 0), (0, 7)] {
        assert!(!canvas.is_set(x, y), "({}, {}) leaked", x, y);
    }
}

#[test]
fn test_fill_on_set_cell_is_noop() {
    let mut canvas = Canvas::new(5, 5).unwrap();
    canvas.draw_line(0, 2, 4, 2, Pen::Draw).unwrap();
    let before = canvas.clone();
    assert_eq!(canvas.fill(2, 2), Ok(0));
    assert_eq!(canvas, before);
}

#[test]
fn test_fill_large_canvas_does_not_overflow() {
    let mut canvas = Canvas::new(1000, 1000).unwrap();
    assert_eq!(canvas.fill(0, 0), Ok(1_000_000));
    assert_eq!(canvas.set_count(), 1_000_000);
}

#[test]
fn test_invert_twice_restores() {
    let mut canvas = Canvas::new(7, 4).unwrap();
    canvas.draw_line(0, 0, 6, 3, Pen::Draw).unwrap();
    let before = canvas.clone();

    canvas.invert();
    assert_eq!(canvas.set_count(), 7 * 4 - before.set_count());
    canvas.invert();
    assert_eq!(canvas, before);
}

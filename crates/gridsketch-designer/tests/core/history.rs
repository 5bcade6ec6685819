use gridsketch_core::HistoryError;
use gridsketch_designer::canvas::Canvas;
use gridsketch_designer::history::{CommandHistory, EMPTY_HISTORY_MESSAGE};
use gridsketch_designer::shapes::{Shape, ShapeKind};

fn draw_all(canvas: &mut Canvas, history: &mut CommandHistory, shapes: &[Shape]) {
    for shape in shapes {
        shape.draw(canvas).unwrap();
        history.append(*shape);
    }
}

#[test]
fn test_delete_middle_of_three_lines() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let mut history = CommandHistory::new();
    let first = Shape::line(0, 0, 9, 0);
    let second = Shape::line(0, 4, 9, 4);
    let third = Shape::line(0, 8, 9, 8);
    draw_all(&mut canvas, &mut history, &[first, second, third]);

    let removed = history.delete_by_id(2, &mut canvas).unwrap();
    assert_eq!(removed.shape, second);

    let remaining: Vec<(usize, Shape)> = history.iter().map(|r| (r.id, r.shape)).collect();
    assert_eq!(remaining, vec![(1, first), (2, third)]);

    assert!((0..10).all(|x| !canvas.is_set(x, 4)));
    assert!((0..10).all(|x| canvas.is_set(x, 0) && canvas.is_set(x, 8)));
}

#[test]
fn test_delete_unknown_ids() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let mut history = CommandHistory::new();
    draw_all(&mut canvas, &mut history, &[Shape::line(0, 0, 3, 3)]);
    let before = canvas.clone();

    for id in [0, -1, 2, 99] {
        assert_eq!(
            history.delete_by_id(id, &mut canvas),
            Err(HistoryError::NotFound { id })
        );
    }
    assert_eq!(history.len(), 1);
    assert_eq!(canvas, before);
}

#[test]
fn test_clear_undraws_everything() {
    let mut canvas = Canvas::new(12, 12).unwrap();
    let mut history = CommandHistory::new();
    draw_all(
        &mut canvas,
        &mut history,
        &[
            Shape::line(0, 0, 11, 11),
            Shape::rect(1, 1, 10, 6),
            Shape::circle(6, 6, 4),
        ],
    );
    assert!(!canvas.is_blank());

    assert_eq!(history.clear(&mut canvas), 3);
    assert!(history.is_empty());
    assert!(canvas.is_blank());
    assert_eq!(
        history.lines().collect::<Vec<_>>(),
        vec![EMPTY_HISTORY_MESSAGE.to_string()]
    );
}

#[test]
fn test_records_keep_kind_and_params() {
    let mut history = CommandHistory::new();
    history.append(Shape::circle(7, 3, 2));
    history.append(Shape::rect(0, 1, 2, 3));

    let kinds: Vec<ShapeKind> = history.iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![ShapeKind::Circle, ShapeKind::Rect]);
    assert_eq!(history.get(1).unwrap().params(), [7, 3, 2, 0]);
    assert_eq!(history.get(2).unwrap().params(), [0, 1, 2, 3]);
    assert!(history.get(3).is_none());
}

#[test]
fn test_append_after_delete_continues_from_tail() {
    let mut history = CommandHistory::new();
    for i in 0..4 {
        history.append(Shape::line(0, 0, i, 0));
    }
    history.remove(1);
    assert_eq!(history.append(Shape::line(1, 1, 2, 2)), 4);
    let ids: Vec<usize> = (&history).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

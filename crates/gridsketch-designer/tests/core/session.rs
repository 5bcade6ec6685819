use gridsketch_core::{BoundsError, CanvasError, DrawError, Error};
use gridsketch_designer::commands::DesignerCommand;
use gridsketch_designer::session::{Outcome, Session, SessionOptions};
use gridsketch_designer::shapes::Shape;
use gridsketch_designer::Glyphs;

fn run(session: &mut Session, line: &str) -> Result<Outcome, Error> {
    let command = DesignerCommand::parse(line)?.expect("non-blank line");
    session.execute(command)
}

#[test]
fn test_scripted_session() {
    let mut session = Session::new(SessionOptions::default());
    run(&mut session, "new 10 10").unwrap();
    run(&mut session, "line 0 0 9 9").unwrap();
    run(&mut session, "rect 2 2 7 7").unwrap();
    run(&mut session, "circle 5 5 2").unwrap();

    let Outcome::Listing(lines) = run(&mut session, "list").unwrap() else {
        panic!("expected a listing");
    };
    assert_eq!(
        lines,
        vec![
            " 1: Line from (0, 0) to (9, 9)",
            " 2: Rectangle from (2, 2) to (7, 7)",
            " 3: Circle, centre (5, 5) and radius 2",
        ]
    );

    let Outcome::Deleted(record) = run(&mut session, "delete 1").unwrap() else {
        panic!("expected a deletion");
    };
    assert_eq!(record.shape, Shape::line(0, 0, 9, 9));
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().get(1).unwrap().shape, Shape::rect(2, 2, 7, 7));
}

#[test]
fn test_rejected_rect_reports_shape_and_bound() {
    let mut session = Session::new(SessionOptions::default());
    run(&mut session, "new 10 10").unwrap();

    let err = run(&mut session, "rect 2 2 11 11").unwrap_err();
    assert!(matches!(
        err,
        Error::Draw(DrawError::OutOfBounds {
            shape: "rectangle",
            bound: BoundsError::MaxWidth
        })
    ));
    assert_eq!(
        err.to_string(),
        "Error: rectangle could not be drawn, it exceeds the maximum width of screen."
    );
    assert!(session.history().is_empty());
}

#[test]
fn test_fill_then_render_with_custom_glyphs() {
    let mut session = Session::new(SessionOptions {
        glyphs: Glyphs::new('#', '-'),
        ..SessionOptions::default()
    });
    run(&mut session, "new 4 3").unwrap();
    run(&mut session, "line 0 1 3 1").unwrap();
    assert_eq!(
        run(&mut session, "fill 0 0").unwrap(),
        Outcome::Filled { cells: 4 }
    );

    let Outcome::Rendered(text) = run(&mut session, "r").unwrap() else {
        panic!("expected a rendering");
    };
    assert_eq!(text, "- - - - \n# # # # \n# # # # \n");
}

#[test]
fn test_second_new_is_refused() {
    let mut session = Session::new(SessionOptions::default());
    run(&mut session, "new 5 5").unwrap();
    run(&mut session, "line 0 0 4 0").unwrap();

    let err = run(&mut session, "new 8 8").unwrap_err();
    assert!(matches!(err, Error::Canvas(CanvasError::AlreadyCreated)));
    assert_eq!(session.canvas().unwrap().width(), 5);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_invert_and_clear() {
    let mut session = Session::new(SessionOptions::default());
    run(&mut session, "new 3 3").unwrap();
    run(&mut session, "invert").unwrap();
    assert_eq!(session.canvas().unwrap().set_count(), 9);

    run(&mut session, "line 0 0 2 2").unwrap();
    assert_eq!(
        run(&mut session, "clear").unwrap(),
        Outcome::Cleared { records: 1 }
    );
    assert!(session.canvas().unwrap().is_blank());
    assert!(session.history().is_empty());
}

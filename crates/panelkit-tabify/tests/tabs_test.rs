use panelkit_core::Point;
use panelkit_tabify::{
    DrillFile, Operation, OperationLog, OutlineSink, Tab, TabFilter, MOUSEBITE_DRILL_DIAMETER,
};

fn assert_ops_approx(actual: &[Operation], expected: &[Operation]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "operation count mismatch: {:?}",
        actual
    );
    for (a, e) in actual.iter().zip(expected) {
        match (a, e) {
            (Operation::MoveTo(p), Operation::MoveTo(q))
            | (Operation::DrawTo(p), Operation::DrawTo(q)) => {
                assert!(
                    (p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6,
                    "point mismatch: {:?} vs {:?}",
                    a,
                    e
                );
            }
            (Operation::Passthrough(left), Operation::Passthrough(right)) => {
                assert_eq!(left, right);
            }
            _ => panic!("operation kind mismatch: {:?} vs {:?}", a, e),
        }
    }
}

fn mousebite_ledger() -> DrillFile {
    let mut drill = DrillFile::new();
    drill.select_or_create_tool(MOUSEBITE_DRILL_DIAMETER);
    drill
}

#[test]
fn test_single_crossing_clips_segment() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();

    let log = filter.into_inner();
    let expected = vec![
        Operation::MoveTo(Point::new(0.0, 0.0)),
        Operation::DrawTo(Point::new(1.0, 0.0)),
        Operation::MoveTo(Point::new(1.1, 0.0)),
        Operation::DrawTo(Point::new(2.0, 0.0)),
    ];
    assert_ops_approx(log.operations(), &expected);
    assert_eq!(drill.hole_count(), 5);
}

#[test]
fn test_mousebite_hole_positions() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();
    drop(filter);

    let tool = drill.current_tool().unwrap();
    // Two anchors on the gap line beyond its ends, three staggered holes
    // displaced by 0.010 toward positive Y for a left-to-right gap.
    let expected: &[(i64, i64)] = &[
        (11_150, 0),
        (9_850, 0),
        (10_830, 100),
        (10_500, 100),
        (10_170, 100),
    ];
    assert_eq!(drill.holes(tool).unwrap(), expected);
}

#[test]
fn test_right_to_left_crossing() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(2.0, 0.1)).unwrap();
    filter.draw_to(Point::new(0.0, 0.1)).unwrap();

    let log = filter.into_inner();
    let expected = vec![
        Operation::MoveTo(Point::new(2.0, 0.1)),
        Operation::DrawTo(Point::new(1.1, 0.1)),
        Operation::MoveTo(Point::new(1.0, 0.1)),
        Operation::DrawTo(Point::new(0.0, 0.1)),
    ];
    assert_ops_approx(log.operations(), &expected);

    // The stagger flips sign when the gap runs right to left.
    let tool = drill.current_tool().unwrap();
    for &(_, y) in &drill.holes(tool).unwrap()[2..] {
        assert_eq!(y, 900);
    }
}

#[test]
fn test_long_segment_crosses_multiple_tabs() {
    let mut drill = mousebite_ledger();
    let tabs = vec![
        Tab::new(Point::new(0.5, 0.0)),
        Tab::new(Point::new(1.5, 0.0)),
    ];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();

    let log = filter.into_inner();
    let expected = vec![
        Operation::MoveTo(Point::new(0.0, 0.0)),
        Operation::DrawTo(Point::new(0.5, 0.0)),
        Operation::MoveTo(Point::new(0.6, 0.0)),
        Operation::DrawTo(Point::new(1.5, 0.0)),
        Operation::MoveTo(Point::new(1.6, 0.0)),
        Operation::DrawTo(Point::new(2.0, 0.0)),
    ];
    assert_ops_approx(log.operations(), &expected);
    assert_eq!(drill.hole_count(), 10);
}

#[test]
fn test_non_horizontal_segment_ignored() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(1.05, -1.0)).unwrap();
    filter.draw_to(Point::new(1.05, 1.0)).unwrap();

    let log = filter.into_inner();
    let expected = vec![
        Operation::MoveTo(Point::new(1.05, -1.0)),
        Operation::DrawTo(Point::new(1.05, 1.0)),
    ];
    assert_ops_approx(log.operations(), &expected);
    assert_eq!(drill.hole_count(), 0);
}

#[test]
fn test_segment_outside_capture_band_ignored() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.5)).unwrap();
    filter.draw_to(Point::new(2.0, 0.5)).unwrap();

    let log = filter.into_inner();
    assert_eq!(log.operations().len(), 2);
    assert_eq!(drill.hole_count(), 0);
}

#[test]
fn test_finalization_emits_side_cuts() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();
    filter.move_to(Point::new(0.0, 0.15)).unwrap();
    filter.draw_to(Point::new(2.0, 0.15)).unwrap();

    let tab = &filter.tabs()[0];
    assert_eq!(tab.bottom_y(), Some(0.0));
    assert_eq!(tab.top_y(), Some(0.15));

    filter.finish().unwrap();
    let log = filter.into_inner();

    let tail = &log.operations()[log.operations().len() - 4..];
    let expected = vec![
        Operation::MoveTo(Point::new(1.0, 0.0)),
        Operation::DrawTo(Point::new(1.0, 0.15)),
        Operation::MoveTo(Point::new(1.1, 0.0)),
        Operation::DrawTo(Point::new(1.1, 0.15)),
    ];
    assert_ops_approx(tail, &expected);
    assert_eq!(log.finish_count(), 1);
}

#[test]
fn test_finalization_order_insensitive() {
    // Crossings arriving top-first still end with bottom_y the smaller.
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.15)).unwrap();
    filter.draw_to(Point::new(2.0, 0.15)).unwrap();
    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();

    let tab = &filter.tabs()[0];
    assert_eq!(tab.bottom_y(), Some(0.0));
    assert_eq!(tab.top_y(), Some(0.15));
}

#[test]
fn test_single_crossing_leaves_tab_open() {
    let mut drill = mousebite_ledger();
    let tabs = vec![Tab::new(Point::new(1.0, 0.0))];
    let mut filter = TabFilter::new(OperationLog::new(), tabs, &mut drill);

    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();
    filter.finish().unwrap();

    let log = filter.into_inner();
    // No side cuts: only the clipped segment's operations are present.
    assert_eq!(log.operations().len(), 4);
    assert_eq!(log.finish_count(), 1);
}

#[test]
fn test_no_tabs_forwards_unchanged() {
    let mut drill = mousebite_ledger();
    let mut filter = TabFilter::new(OperationLog::new(), Vec::new(), &mut drill);

    filter.move_to(Point::new(0.0, 0.0)).unwrap();
    filter.draw_to(Point::new(2.0, 0.0)).unwrap();
    filter.passthrough("G04 kept*").unwrap();
    filter.finish().unwrap();

    let log = filter.into_inner();
    assert_eq!(log.operations().len(), 3);
    assert_eq!(drill.hole_count(), 0);
}

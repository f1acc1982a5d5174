extern crate path_data;

use path_data::math::{point, vector, Point};
use path_data::{parse, serialize, Command, InstructionId, ParseError, PathData};

fn ids(path: &PathData) -> Vec<InstructionId> {
    path.iter().map(|(id, _)| id).collect()
}

fn ends(path: &PathData) -> Vec<Point> {
    path.iter().map(|(id, _)| path.end_position(id)).collect()
}

const SAMPLES: &[&str] = &[
    "",
    "M 0 0",
    "M 0 0 L 10 10 20 20",
    "m 0 0 l 5 5 5 5",
    "M10-5L1,2 3 4z",
    "m 1.5 -2.25 h 10 v 10 h -10 z m 20 0 l 5 5 L 0 0 Z",
    "M 0 0 10 10 20 20 m 1 1 2 2",
    "L 1 1 l 1 1 L 2 2 l 2 2",
    "V 3 H 4 v -1 h -.5",
];

#[test]
fn serialized_paths_parse_back() {
    for src in SAMPLES {
        let path = parse(src).unwrap();
        let text = serialize(&path);
        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed, path, "{:?} -> {:?}", src, text);
        assert_eq!(serialize(&reparsed), text);
    }
}

#[test]
fn start_is_previous_end() {
    for src in SAMPLES {
        let path = parse(src).unwrap();
        let mut previous_end = point(0.0, 0.0);
        for (id, _) in &path {
            assert_eq!(path.start_position(id), previous_end, "{:?}", src);
            previous_end = path.end_position(id);
        }
    }
}

#[test]
fn n_relative_lines() {
    for &n in &[1usize, 2, 7, 100] {
        let mut src = String::from("l");
        for _ in 0..n {
            src.push_str(" 1 1");
        }
        let path = parse(&src).unwrap();
        assert_eq!(path.len(), n);
        let last = path.last().unwrap();
        assert_eq!(path.end_position(last), point(n as f64, n as f64));
        assert_eq!(serialize(&path), src);
    }
}

#[test]
fn first_instruction_starts_at_origin() {
    let path = parse("m 3 4 l 1 1").unwrap();
    let first = path.first().unwrap();
    assert_eq!(path.start_position(first), point(0.0, 0.0));
    assert_eq!(path.end_position(first), point(3.0, 4.0));
}

#[test]
fn relative_chain_follows_edits() {
    let mut path = parse("M 0 0 l 5 5 5 5").unwrap();
    let ids = ids(&path);

    path.set_end_position(ids[0], point(1.0, 0.0));
    assert_eq!(ends(&path), vec![point(1.0, 0.0), point(6.0, 5.0), point(11.0, 10.0)]);
    assert_eq!(serialize(&path), "M 1 0 l 5 5 5 5");

    // Removing the middle line shifts the last one back.
    path.remove(ids[1]);
    assert_eq!(path.end_position(ids[2]), point(6.0, 5.0));
    assert_eq!(serialize(&path), "M 1 0 l 5 5");

    let inserted = path.insert_after(ids[0], Command::LineTo(point(-5.0, -5.0)));
    assert_eq!(path.start_position(ids[2]), point(-5.0, -5.0));
    assert_eq!(path.end_position(ids[2]), point(0.0, 0.0));
    assert_eq!(path.start_position(inserted), point(1.0, 0.0));
    assert_eq!(serialize(&path), "M 1 0 L -5 -5 l 5 5");
}

#[test]
fn absolute_instructions_are_anchors() {
    let mut path = parse("l 1 1 1 1 L 10 10 l 1 1").unwrap();
    let ids = ids(&path);
    path.set_end_position(ids[0], point(-50.0, -50.0));
    assert_eq!(path.end_position(ids[3]), point(11.0, 11.0));
}

#[test]
fn conversion_round_trip() {
    for src in SAMPLES {
        let original = parse(src).unwrap();
        let expected: Vec<Point> = original.positions().map(|s| s.to).collect();

        let mut path = original.clone();
        path.make_all_relative();
        assert!(path.iter().all(|(_, i)| i.is_relative()));
        let relative: Vec<Point> = path.positions().map(|s| s.to).collect();
        assert_eq!(relative, expected, "{:?}", src);

        let text = serialize(&path);
        assert_eq!(parse(&text).unwrap(), path);

        path.make_all_absolute();
        assert!(path.iter().all(|(_, i)| !i.is_relative()));
        let absolute: Vec<Point> = path.positions().map(|s| s.to).collect();
        assert_eq!(absolute, expected, "{:?}", src);
    }
}

#[test]
fn relative_conversion_uses_start_to_end_offset() {
    let path = parse("M 10 10 L 15 20").unwrap();
    let line = path.last().unwrap();
    assert_eq!(path.to_relative(line), Command::RelativeLineTo(vector(5.0, 10.0)));

    let path = parse("m 3 3 l 2 2").unwrap();
    let line = path.last().unwrap();
    assert_eq!(path.to_absolute(line), Command::LineTo(point(5.0, 5.0)));
}

#[test]
fn errors() {
    assert_eq!(
        parse("L 1 2 3"),
        Err(ParseError::MalformedParameterCount {
            command: 'L',
            group: 1,
            count: 3
        })
    );
    assert_eq!(
        parse("Q 1 2 3 4"),
        Err(ParseError::UnsupportedCommand {
            command: 'Q',
            group: 1
        })
    );
    assert_eq!(
        parse("M 0 0 L x y"),
        Err(ParseError::InvalidNumericToken {
            src: "x".to_string(),
            group: 2
        })
    );
    assert_eq!(parse("").unwrap(), PathData::new());

    let message = parse("M 0 0 L 1 2 3").unwrap_err().to_string();
    assert!(message.contains("group 2"), "{}", message);
}

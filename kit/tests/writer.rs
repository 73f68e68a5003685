//! Writer tests: segment ordering, deferred evaluation, nested writes.

use scankit::{Endl, LINE_BREAK, Lazy, Show, With, WithValue, Writer};

#[test]
fn test_literal_then_lazy_then_endl() {
    let mut out = Writer::new(String::new());
    out.write(("sum = ", Lazy(|| 2 + 3), Endl));
    assert_eq!(out.into_sink(), format!("sum = 5{}", LINE_BREAK));
}

#[test]
fn test_segments_in_declaration_order() {
    let mut out = Writer::new(String::new());
    out.write((1, " ", 2, " ", Lazy(|| 3), " ", 4));
    assert_eq!(out.into_sink(), "1 2 3 4");
}

#[test]
fn test_producers_run_exactly_once_in_order() {
    let order = std::cell::RefCell::new(Vec::new());
    let mut out = Writer::new(String::new());
    out.write((
        Lazy(|| {
            order.borrow_mut().push("first");
            'a'
        }),
        Lazy(|| {
            order.borrow_mut().push("second");
            'b'
        }),
    ));
    assert_eq!(out.into_sink(), "ab");
    assert_eq!(*order.borrow(), ["first", "second"]);
}

#[test]
fn test_nested_writes_interleave_with_outer_segments() {
    let mut out = Writer::new(String::new());
    out.write((
        "coords: ",
        With(|w: &mut Writer<String>| {
            for (x, y) in [(1, 2), (3, 4)] {
                w.write(("(", x, ",", y, ") "));
            }
        }),
        "done",
    ));
    assert_eq!(out.into_sink(), "coords: (1,2) (3,4) done");
}

#[test]
fn test_with_value_writes_result_after_nested_output() {
    let mut out = Writer::new(String::new());
    out.write((
        WithValue(|w: &mut Writer<String>| {
            w.write("answer: ");
            42
        }),
        Endl,
    ));
    assert_eq!(out.into_sink(), format!("answer: 42{}", LINE_BREAK));
}

#[test]
fn test_show_wraps_any_display_value() {
    let mut out = Writer::new(String::new());
    out.write(Show(std::time::Duration::from_secs(2).as_secs()));
    assert_eq!(out.into_sink(), "2");
}

#[test]
fn test_flush_is_idempotent() {
    let mut out = Writer::new(String::new());
    out.write("x");
    out.flush();
    out.flush();
    out.flush();
    assert_eq!(out.into_sink(), "x");
}

#[test]
fn snapshot_report_layout() {
    let items = [("apples", 12), ("pears", 3), ("plums", 45)];
    let mut out = Writer::new(String::new());
    out.write(("inventory", Endl));
    for (name, count) in items {
        out.write(("  ", name, ": ", count, Endl));
    }
    out.write((
        "total: ",
        Lazy(|| items.iter().map(|(_, n)| n).sum::<i32>()),
        Endl,
    ));
    let output = out.into_sink();
    insta::assert_snapshot!(output);
}

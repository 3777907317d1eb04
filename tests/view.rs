use std::{
    collections::hash_map::DefaultHasher,
    ffi::CStr,
    hash::{Hash, Hasher},
};

use rstest::rstest;
use slice_view::{error::OutOfRange, view, View};

fn hash(view: View<'_>) -> u64 {
    let mut hasher = DefaultHasher::new();
    view.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn from_buffer_stops_at_nul() {
    let buffer = b"something\0trailing";
    let view = View::from_buffer(buffer);
    assert_eq!(view.len(), 9);
    assert_eq!(view, "something");
    assert_eq!(view.as_ptr(), buffer.as_ptr());
}

// without a terminator the slice extent bounds the view
#[test]
fn from_buffer_without_nul() {
    assert_eq!(View::from_buffer(b"something"), "something");
    assert!(View::from_buffer(b"\0abc").is_empty());
}

#[test]
fn from_cstr() {
    let cstr = CStr::from_bytes_with_nul(b"something\0").unwrap();
    assert_eq!(View::from_cstr(cstr), "something");
    assert_eq!(View::from(cstr).len(), 9);
}

#[test]
fn from_range() {
    let buffer = b"something";
    let view = View::from_range(buffer, 4).unwrap();
    assert_eq!(view, "some");
    assert_eq!(View::from_range(buffer, 9).unwrap(), "something");
    assert!(!View::from_range(buffer, 0).unwrap().is_null());
}

#[test]
fn from_range_out_of_range() {
    let err = View::from_range(b"abc", 4).unwrap_err();
    assert_eq!(
        err,
        OutOfRange {
            length: 4,
            available: 3
        }
    );
    assert_eq!(err.to_string(), "view length 4 exceeds buffer length 3");
}

#[test]
fn from_raw_parts() {
    let buffer = b"something";
    let view = unsafe { View::from_raw_parts(buffer.as_ptr(), 4) };
    assert_eq!(view, "some");
    let null = unsafe { View::from_raw_parts(std::ptr::null(), 0) };
    assert!(null.is_null());
}

#[test]
fn literal_and_macro() {
    let view = view!("something");
    assert_eq!(view.len(), 9);
    for (i, b) in "something".bytes().enumerate() {
        assert_eq!(view[i], b);
    }
    assert_eq!(View::from_literal("something"), view);
    assert!(view!().is_null());
}

#[test]
fn null_view() {
    let null = View::null();
    assert!(null.is_null());
    assert!(null.is_empty());
    assert_eq!(null.len(), 0);
    assert_eq!(null.as_bytes(), b"");
    assert!(View::default().is_null());
    assert!(!View::from("").is_null());
}

#[rstest]
#[case("something", "something", true)]
#[case("something", "nothing", false)]
#[case("something", "", false)]
#[case("", "", true)]
#[case("some", "something", false)]
fn equals(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
    assert_eq!(View::from(a).equals(&View::from(b)), expected);
    assert_eq!(View::from(a) == View::from(b), expected);
}

#[test]
fn equals_with_null() {
    assert!(!view!("something").equals(&View::null()));
    assert!(View::null().equals(&View::null()));
    assert!(view!("").equals(&View::null()));
    assert!(View::null().equals(&view!("")));
    assert_eq!(View::null(), view!(""));
}

// empty views over different buffers are all equal and hash alike
#[test]
fn empty_views_collapse() {
    let a = b"abc";
    let b = b"xyz";
    let empty_a = View::new(&a[1..1]);
    let empty_b = View::new(&b[3..]);
    assert_eq!(empty_a, empty_b);
    assert_eq!(empty_a, View::null());
    assert_eq!(hash(empty_a), hash(View::null()));
    assert_eq!(hash(empty_b), hash(View::null()));
}

// same content in different buffers compares equal
#[test]
fn equals_by_content() {
    let a = String::from("token");
    let b = String::from("token");
    assert_ne!(a.as_ptr(), b.as_ptr());
    assert_eq!(View::from(a.as_str()), View::from(b.as_str()));
    assert_eq!(hash(View::from(a.as_str())), hash(View::from(b.as_str())));
}

#[test]
fn ordering() {
    assert!(view!("abc") < view!("abd"));
    assert!(View::null() < view!("a"));
    assert_eq!(View::null().cmp(&view!("")), std::cmp::Ordering::Equal);
}

#[test]
fn comparisons_with_slices() {
    let view = view!("abc");
    assert_eq!(view, b"abc");
    assert_eq!(view, *b"abc");
    assert_eq!(view, &b"abc"[..]);
    assert_eq!(view, "abc");
    assert_eq!(*"abc", view);
    assert_eq!(b"abc"[..], view);
}

#[test]
fn to_str() {
    assert_eq!(view!("abc").to_str().unwrap(), "abc");
    assert_eq!(View::null().to_str().unwrap(), "");
    assert!(View::new(b"\xff").to_str().is_err());
}

#[test]
fn formatting() {
    let view = View::new(b"a\"b\\\t\r\n\0\x7f");
    assert_eq!(format!("{view:?}"), r#"b"a\"b\\\t\r\n\0\x7f""#);
    assert_eq!(format!("{:?}", View::null()), r#"b"""#);
    assert_eq!(format!("{}", view!("key=value")), "key=value");
    assert_eq!(format!("{}", View::new(b"a\xffb")), "a\u{FFFD}b");
    assert_eq!(format!("{:x}", View::new(&[0xab, 0x01])), "ab01");
    assert_eq!(format!("{:X}", View::new(&[0xab, 0x01])), "AB01");
}

// pieces outlive the view they were split from, bounded by the buffer
#[test]
fn pieces_borrow_the_buffer() {
    let buffer = String::from("a,b");
    let piece = {
        let mut view = View::from(buffer.as_str());
        view.split_on_first(b',')
    };
    assert_eq!(piece, "a");
    assert_eq!(piece.as_ptr(), buffer.as_ptr());
}

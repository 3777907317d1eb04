#[test]
fn readme_example() {
    use slice_view::View;

    let mut record = View::from("alpha,beta;gamma");
    let first = record.split_on_first(b',');
    let last = record.split_on_last(b';');

    assert_eq!(first, "alpha");
    assert_eq!(record, "beta");
    assert_eq!(last, "gamma");
}

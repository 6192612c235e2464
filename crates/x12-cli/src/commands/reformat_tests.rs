use x12_lib::EdiReader;

use super::reformat::{OutputDelimiters, reformat};

const INTERCHANGE: &str =
    "ISA*00**00**ZZ*A*ZZ*B*240101*1200*^*00501*1*0*P*>~EQ*30*HC>98940~SE*2*1~";

#[test]
fn keeps_input_delimiters_by_default() {
    let out = reformat(
        &EdiReader::new(),
        INTERCHANGE,
        &OutputDelimiters::default(),
        false,
    )
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), INTERCHANGE);
}

#[test]
fn swaps_delimiters() {
    let output = OutputDelimiters {
        segment_terminator: Some('\''),
        element_separator: Some('+'),
        sub_element_separator: Some(':'),
    };

    let out = reformat(&EdiReader::new(), INTERCHANGE, &output, true).unwrap();

    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    ISA+00++00++ZZ+A+ZZ+B+240101+1200+^+00501+1+0+P+:'
    EQ+30+HC:98940'
    SE+2+1'
    ");
}

#[test]
fn conflicting_output_delimiters() {
    let output = OutputDelimiters {
        element_separator: Some('~'),
        ..OutputDelimiters::default()
    };

    let err = reformat(&EdiReader::new(), INTERCHANGE, &output, false).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"illegal configuration: segment terminator and element separator share the delimiter '~'");
}
